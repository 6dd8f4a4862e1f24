//! Dashboard page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use axum::http::Uri;
use serde_json::json;

use crate::domain::page::{Page, PageNode};
use crate::domain::view::ViewId;
use crate::error::AppError;
use crate::state::AppState;

/// Navigation bar entry.
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
    pub active: bool,
}

/// A chart container and the JSON payload drawn into it.
pub struct GraphPanel {
    pub id: String,
    /// Serialized chart with `<` escaped, safe to embed in a `<script>` block.
    pub spec_json: String,
}

/// Template for every dashboard page.
///
/// Renders `templates/page.html`: navigation, heading, optional paragraphs,
/// and one Plotly chart per graph node.
#[derive(Template, WebTemplate)]
#[template(path = "page.html")]
pub struct PageTemplate {
    pub heading: String,
    pub nav: Vec<NavLink>,
    pub paragraphs: Vec<String>,
    pub graphs: Vec<GraphPanel>,
}

impl PageTemplate {
    /// Lays out a resolved page.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if a chart cannot be serialized.
    pub fn from_page(page: Page) -> Result<Self, AppError> {
        let nav = ViewId::NAVIGABLE
            .into_iter()
            .map(|id| NavLink {
                href: id.route(),
                label: id.label(),
                active: id == page.view,
            })
            .collect();

        let mut heading = String::new();
        let mut paragraphs = Vec::new();
        let mut graphs = Vec::new();

        for node in page.nodes {
            match node {
                PageNode::Heading { text } if heading.is_empty() => heading = text,
                PageNode::Heading { text } | PageNode::Paragraph { text } => paragraphs.push(text),
                PageNode::Graph { id, chart } => {
                    let spec_json = serde_json::to_string(&chart).map_err(|e| {
                        AppError::internal(
                            "Chart serialization failed",
                            json!({ "chart": id, "reason": e.to_string() }),
                        )
                    })?;
                    graphs.push(GraphPanel {
                        id,
                        spec_json: spec_json.replace('<', "\\u003c"),
                    });
                }
            }
        }

        Ok(Self {
            heading,
            nav,
            paragraphs,
            graphs,
        })
    }
}

/// Renders the page for the request path.
///
/// # Endpoint
///
/// `GET /` and every path not claimed by another route.
///
/// # Template
///
/// Uses `templates/page.html` for server-side rendering; charts are drawn in
/// the browser by Plotly.js from the embedded JSON.
pub async fn page_handler(
    State(state): State<AppState>,
    uri: Uri,
) -> Result<PageTemplate, AppError> {
    let page = state.dashboard_service.resolve_path(uri.path()).await?;
    PageTemplate::from_page(page)
}
