//! DTOs for the view catalog.

use serde::Serialize;

use crate::domain::view::{ViewDefinition, ViewId};

/// Catalog entry describing one navigable view.
#[derive(Debug, Serialize)]
pub struct ViewSummary {
    pub id: ViewId,
    pub route: &'static str,
    pub label: &'static str,
    pub heading: &'static str,
    pub charts: Vec<String>,
}

impl From<&ViewDefinition> for ViewSummary {
    fn from(view: &ViewDefinition) -> Self {
        Self {
            id: view.id,
            route: view.route(),
            label: view.id.label(),
            heading: view.heading,
            charts: view.panels.iter().map(|p| p.title.clone()).collect(),
        }
    }
}

/// Response for `GET /api/views`.
#[derive(Debug, Serialize)]
pub struct ViewListResponse {
    pub items: Vec<ViewSummary>,
}
