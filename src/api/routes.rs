//! API route configuration.

use crate::api::handlers::{view_handler, view_list_handler};
use crate::state::AppState;
use axum::{Router, routing::get};

/// JSON API routes.
///
/// # Endpoints
///
/// - `GET /views`        - View catalog
/// - `GET /views/{view}` - Page payload for a routed view
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/views", get(view_list_handler))
        .route("/views/{view}", get(view_handler))
}
