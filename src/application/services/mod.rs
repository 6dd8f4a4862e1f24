//! Business logic services for the application layer.

pub mod dashboard_service;

pub use dashboard_service::DashboardService;
