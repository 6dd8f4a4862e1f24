//! PostgreSQL implementation of the event repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Instant;

use crate::domain::aggregation::{AggregateRow, AggregationResult};
use crate::domain::query::QueryDefinition;
use crate::domain::repositories::EventRepository;
use crate::error::AppError;

/// Row shape shared by every aggregation statement.
#[derive(Debug, sqlx::FromRow)]
struct AggregateRecord {
    grouping_key: Option<String>,
    cantidad: i64,
    total: Option<f64>,
}

impl From<AggregateRecord> for AggregateRow {
    fn from(r: AggregateRecord) -> Self {
        AggregateRow::new(r.grouping_key.unwrap_or_default(), r.cantidad, r.total)
    }
}

/// PostgreSQL repository running aggregation queries over `ecommerce_events`.
///
/// Holds the pool, not a connection: every call checks a connection out and
/// returns it when done.
pub struct PgEventRepository {
    pool: Arc<PgPool>,
}

impl PgEventRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EventRepository for PgEventRepository {
    async fn run_queries(
        &self,
        queries: Vec<QueryDefinition>,
    ) -> Result<Vec<AggregationResult>, AppError> {
        let mut conn = self.pool.acquire().await?;
        let mut results = Vec::with_capacity(queries.len());

        for query in queries {
            let name = query.name();
            let sql = query.sql();
            let started = Instant::now();

            let mut statement = sqlx::query_as::<_, AggregateRecord>(&sql);
            if let Some(kind) = query.event_filter() {
                statement = statement.bind(kind.as_str());
            }
            let records = statement.fetch_all(&mut *conn).await?;

            let elapsed = started.elapsed();
            metrics::counter!("dashboard_queries_total", "query" => name.clone()).increment(1);
            metrics::histogram!("dashboard_query_duration_seconds", "query" => name.clone())
                .record(elapsed.as_secs_f64());
            tracing::debug!(
                query = %name,
                rows = records.len(),
                elapsed_ms = elapsed.as_millis() as u64,
                "Aggregation query finished"
            );

            let rows = records.into_iter().map(AggregateRow::from).collect();
            results.push(AggregationResult::new(query, rows));
        }

        Ok(results)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}
