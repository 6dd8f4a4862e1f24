//! Application error type and its HTTP representation.
//!
//! Every error is rendered as:
//!
//! ```json
//! { "error": { "code": "query_failed", "message": "...", "details": {} } }
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

use crate::domain::chart::ChartError;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Serialize)]
struct ErrorInfo {
    code: &'static str,
    message: String,
    details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The database could not be reached.
    #[error("{message}")]
    Unavailable { message: String, details: Value },
    /// A statement reached the database and failed.
    #[error("{message}")]
    Query { message: String, details: Value },
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn unavailable(message: impl Into<String>, details: Value) -> Self {
        Self::Unavailable {
            message: message.into(),
            details,
        }
    }
    pub fn query(message: impl Into<String>, details: Value) -> Self {
        Self::Query {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Unavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            Self::Query { .. } | Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::Unavailable { .. } => "database_unavailable",
            Self::Query { .. } => "query_failed",
            Self::Internal { .. } => "internal_error",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.code();
        let (message, details) = match self {
            Self::Unavailable { message, details }
            | Self::Query { message, details }
            | Self::Internal { message, details } => (message, details),
        };

        let body = ErrorBody {
            error: ErrorInfo {
                code,
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        tracing::error!(error = %e, "database error");

        match e {
            sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::Io(_)
            | sqlx::Error::Tls(_) => AppError::unavailable("Database unavailable", json!({})),
            sqlx::Error::Database(db) => AppError::query(
                "Query execution failed",
                json!({ "sqlstate": db.code() }),
            ),
            _ => AppError::query("Query execution failed", json!({})),
        }
    }
}

impl From<ChartError> for AppError {
    fn from(e: ChartError) -> Self {
        AppError::internal("Chart construction failed", json!({ "reason": e.to_string() }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_timeout_maps_to_unavailable() {
        let err = AppError::from(sqlx::Error::PoolTimedOut);

        assert!(matches!(err, AppError::Unavailable { .. }));
        assert_eq!(err.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(err.code(), "database_unavailable");
    }

    #[test]
    fn test_row_not_found_maps_to_query_failure() {
        let err = AppError::from(sqlx::Error::RowNotFound);

        assert!(matches!(err, AppError::Query { .. }));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_chart_error_maps_to_internal() {
        let err = AppError::from(ChartError::MissingColumn {
            column: "total",
            query: "event-hourly:view".to_string(),
        });

        assert_eq!(err.code(), "internal_error");
        assert_eq!(err.to_string(), "Chart construction failed");
    }
}
