//! Repository trait for read-only aggregation over the event log.

use async_trait::async_trait;

use crate::domain::aggregation::AggregationResult;
use crate::domain::query::QueryDefinition;
use crate::error::AppError;

/// Repository interface for running aggregation queries.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgEventRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_events.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Runs the queries in order on a single connection.
    ///
    /// The connection is acquired for the call and released when it returns,
    /// so one page request holds at most one connection.
    ///
    /// # Returns
    ///
    /// One result per query, in the order given.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unavailable`] if no connection can be acquired.
    /// Returns [`AppError::Query`] if any statement fails; earlier results are discarded.
    async fn run_queries(
        &self,
        queries: Vec<QueryDefinition>,
    ) -> Result<Vec<AggregationResult>, AppError>;

    /// Checks that the database answers a trivial statement.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unavailable`] when the database is unreachable.
    async fn ping(&self) -> Result<(), AppError>;
}
