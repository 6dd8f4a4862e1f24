//! Handlers for the view catalog and page payloads.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::views::{ViewListResponse, ViewSummary};
use crate::domain::page::Page;
use crate::error::AppError;
use crate::state::AppState;

/// Lists the navigable views.
///
/// # Endpoint
///
/// `GET /api/views`
pub async fn view_list_handler(State(state): State<AppState>) -> Json<ViewListResponse> {
    let items = state
        .dashboard_service
        .catalog()
        .iter()
        .map(ViewSummary::from)
        .collect();

    Json(ViewListResponse { items })
}

/// Resolves a view and returns its page payload.
///
/// # Endpoint
///
/// `GET /api/views/{view}`
///
/// `view` goes through the same routing as browser paths: `product`,
/// `event`, `category` (or their `tipo-N` aliases); anything else yields the
/// welcome page.
///
/// # Errors
///
/// Returns 503 Service Unavailable if the database cannot be reached.
/// Returns 500 Internal Server Error if a query fails.
pub async fn view_handler(
    State(state): State<AppState>,
    Path(view): Path<String>,
) -> Result<Json<Page>, AppError> {
    let page = state.dashboard_service.resolve_path(&view).await?;
    Ok(Json(page))
}
