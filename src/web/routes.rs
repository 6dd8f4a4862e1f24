//! Dashboard route configuration.

use crate::state::AppState;
use crate::web::handlers::page_handler;
use axum::{Router, routing::get};

/// Dashboard pages.
///
/// Only `/` is registered here; every other path reaches [`page_handler`]
/// through the top-level fallback so the router decides which view it is.
///
/// # Endpoints
///
/// - `GET /` - Welcome page
pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(page_handler))
}
