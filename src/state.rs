//! Shared application state injected into handlers.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::DashboardService;
use crate::domain::view::ViewCatalog;
use crate::infrastructure::persistence::PgEventRepository;

#[derive(Clone)]
pub struct AppState {
    pub dashboard_service: Arc<DashboardService<PgEventRepository>>,
}

impl AppState {
    /// Wires the repository and service over a connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        let repository = Arc::new(PgEventRepository::new(pool));
        let dashboard_service = Arc::new(DashboardService::new(
            repository,
            ViewCatalog::standard(),
        ));

        Self { dashboard_service }
    }
}
