//! HTTP request handlers for API endpoints.

pub mod health;
pub mod views;

pub use health::health_handler;
pub use views::{view_handler, view_list_handler};
