//! Application layer services.
//!
//! Services consume repository traits and give HTTP handlers and the admin
//! CLI a single entry point.
//!
//! # Available Services
//!
//! - [`services::dashboard_service::DashboardService`] - Resolves views into pages

pub mod services;
