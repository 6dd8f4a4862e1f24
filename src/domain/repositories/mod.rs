//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data access; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated
//! via `mockall` for unit tests.
//!
//! # Available Repositories
//!
//! - [`EventRepository`] - Aggregation queries over the event log
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod event_repository;

pub use event_repository::EventRepository;

#[cfg(test)]
pub use event_repository::MockEventRepository;
