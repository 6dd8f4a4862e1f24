//! PostgreSQL repository implementations.
//!
//! Statements are built at runtime from the fixed query definitions and run
//! through SQLx.
//!
//! # Repositories
//!
//! - [`PgEventRepository`] - Aggregation queries over the event log

pub mod pg_event_repository;

pub use pg_event_repository::PgEventRepository;
