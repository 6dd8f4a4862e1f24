//! Data Transfer Objects for API responses.
//!
//! Page payloads are serialized straight from [`crate::domain::page::Page`];
//! the DTOs here cover the catalog and health endpoints.

pub mod health;
pub mod views;
