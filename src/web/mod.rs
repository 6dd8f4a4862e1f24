//! Web dashboard layer for browser-based UI.
//!
//! Server-side rendering with Askama templates; charts are drawn in the
//! browser from the embedded chart JSON.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers
//! - [`routes`] - Dashboard route configuration

pub mod handlers;
pub mod routes;
