//! # Events Dashboard
//!
//! An analytics dashboard over an ecommerce event log, built with Axum and
//! PostgreSQL.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Query definitions, chart specifications, views, router
//! - **Application Layer** ([`application`]) - View resolution
//! - **Infrastructure Layer** ([`infrastructure`]) - PostgreSQL aggregation queries
//! - **API Layer** ([`api`]) - JSON endpoints and middleware
//! - **Web Layer** ([`web`]) - HTML pages with Plotly charts
//!
//! ## Views
//!
//! - `/product` - Top 5 products by revenue (units pie, revenue bar)
//! - `/event` - Event type mix and hourly activity per event type
//! - `/category` - Top 5 categories by revenue
//!
//! Any other path shows the welcome page.
//!
//! ## Quick Start
//!
//! ```bash
//! export DB_USER=reader DB_PASSWORD=secret DB_HOST=localhost DB_NAME=ecommerce
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::DashboardService;
    pub use crate::domain::aggregation::{AggregateRow, AggregationResult};
    pub use crate::domain::chart::{ChartKind, ChartSpec};
    pub use crate::domain::event::{Event, EventType};
    pub use crate::domain::page::{Page, PageNode};
    pub use crate::domain::query::{GroupKey, QueryDefinition};
    pub use crate::domain::view::{ViewCatalog, ViewId};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
