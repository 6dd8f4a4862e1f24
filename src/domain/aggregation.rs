//! Result tables produced by aggregation queries.

use serde::Serialize;
use serde_json::Value;

use crate::domain::query::{GroupKey, QueryDefinition};

/// One grouped row of an aggregation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateRow {
    pub key: String,
    #[serde(rename = "cantidad")]
    pub count: i64,
    pub total: Option<f64>,
}

impl AggregateRow {
    pub fn new(key: impl Into<String>, count: i64, total: Option<f64>) -> Self {
        Self {
            key: key.into(),
            count,
            total,
        }
    }
}

/// A column of an [`AggregationResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    /// The grouping key.
    Key,
    /// Number of events in the group (`cantidad`).
    Count,
    /// Sum of price in the group (`total`).
    Total,
}

impl Column {
    pub const fn name(self, key: GroupKey) -> &'static str {
        match self {
            Self::Key => key.column_name(),
            Self::Count => "cantidad",
            Self::Total => "total",
        }
    }
}

/// Ordered rows returned by one [`QueryDefinition`].
///
/// Row order is the order the database returned; nothing downstream re-sorts.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregationResult {
    query: QueryDefinition,
    rows: Vec<AggregateRow>,
}

impl AggregationResult {
    pub fn new(query: QueryDefinition, rows: Vec<AggregateRow>) -> Self {
        Self { query, rows }
    }

    pub fn query(&self) -> QueryDefinition {
        self.query
    }

    pub fn key_column(&self) -> GroupKey {
        self.query.group_key()
    }

    pub fn rows(&self) -> &[AggregateRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_column(&self, column: Column) -> bool {
        match column {
            Column::Key | Column::Count => true,
            Column::Total => self.query.has_total(),
        }
    }

    pub fn column_name(&self, column: Column) -> &'static str {
        column.name(self.key_column())
    }

    /// Extracts one column as JSON values, in row order.
    ///
    /// Hour keys are emitted as numbers so line charts get a numeric axis.
    /// Returns `None` when the column is not part of this result.
    pub fn values(&self, column: Column) -> Option<Vec<Value>> {
        if !self.has_column(column) {
            return None;
        }

        let numeric_key = self.key_column() == GroupKey::EventHour;

        Some(
            self.rows
                .iter()
                .map(|row| match column {
                    Column::Key if numeric_key => row
                        .key
                        .parse::<i64>()
                        .map(Value::from)
                        .unwrap_or_else(|_| Value::from(row.key.clone())),
                    Column::Key => Value::from(row.key.clone()),
                    Column::Count => Value::from(row.count),
                    Column::Total => row.total.map(Value::from).unwrap_or(Value::Null),
                })
                .collect(),
        )
    }
}
