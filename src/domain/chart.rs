//! Chart specifications built from aggregation results.
//!
//! A [`ChartSpec`] names which result columns feed which chart channel. The
//! browser-side plotting library receives the serialized [`ChartSeries`].

use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::domain::aggregation::{AggregationResult, Column};

/// Kind of chart to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Pie,
    Bar,
    Line,
}

/// Errors raised while binding a result to a chart.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChartError {
    #[error("column `{column}` is not present in the result of `{query}`")]
    MissingColumn { column: &'static str, query: String },
}

/// Chart-building function attached to a view panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartShape {
    /// Share of total: values = count, names = key.
    Pie,
    /// Ranked comparison: x = key, y = `value`, optionally colored by `color`.
    Bar {
        value: Column,
        color: Option<Column>,
    },
    /// Trend: x = key (hour), y = count.
    Line,
}

impl ChartShape {
    pub fn build(self, title: &str, data: AggregationResult) -> Result<ChartSpec, ChartError> {
        match self {
            Self::Pie => ChartSpec::pie(data, title),
            Self::Bar { value, color } => ChartSpec::bar(data, value, color, title),
            Self::Line => ChartSpec::line(data, title),
        }
    }
}

/// Declarative description of one chart together with the data it renders.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    kind: ChartKind,
    title: String,
    category: Column,
    value: Column,
    color: Option<Column>,
    data: AggregationResult,
}

impl ChartSpec {
    pub fn pie(data: AggregationResult, title: impl Into<String>) -> Result<Self, ChartError> {
        Self::new(ChartKind::Pie, title, Column::Key, Column::Count, None, data)
    }

    pub fn bar(
        data: AggregationResult,
        value: Column,
        color: Option<Column>,
        title: impl Into<String>,
    ) -> Result<Self, ChartError> {
        Self::new(ChartKind::Bar, title, Column::Key, value, color, data)
    }

    pub fn line(data: AggregationResult, title: impl Into<String>) -> Result<Self, ChartError> {
        Self::new(ChartKind::Line, title, Column::Key, Column::Count, None, data)
    }

    fn new(
        kind: ChartKind,
        title: impl Into<String>,
        category: Column,
        value: Column,
        color: Option<Column>,
        data: AggregationResult,
    ) -> Result<Self, ChartError> {
        for column in [Some(category), Some(value), color].into_iter().flatten() {
            if !data.has_column(column) {
                return Err(ChartError::MissingColumn {
                    column: data.column_name(column),
                    query: data.query().name(),
                });
            }
        }

        Ok(Self {
            kind,
            title: title.into(),
            category,
            value,
            color,
            data,
        })
    }

    pub fn kind(&self) -> ChartKind {
        self.kind
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn data(&self) -> &AggregationResult {
        &self.data
    }

    pub fn category_column(&self) -> &'static str {
        self.data.column_name(self.category)
    }

    pub fn value_column(&self) -> &'static str {
        self.data.column_name(self.value)
    }

    pub fn color_column(&self) -> Option<&'static str> {
        self.color.map(|c| self.data.column_name(c))
    }

    /// Flattens the chart into the column arrays the plotting library consumes.
    pub fn series(&self) -> ChartSeries {
        // Columns were checked in `new`, so extraction cannot miss.
        let column = |c: Column| self.data.values(c).unwrap_or_default();

        ChartSeries {
            kind: self.kind,
            title: self.title.clone(),
            category_label: self.category_column(),
            value_label: self.value_column(),
            color_label: self.color_column(),
            categories: column(self.category),
            values: column(self.value),
            colors: self.color.map(column),
        }
    }
}

impl Serialize for ChartSpec {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.series().serialize(serializer)
    }
}

/// Column-oriented chart payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub kind: ChartKind,
    pub title: String,
    pub category_label: &'static str,
    pub value_label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_label: Option<&'static str>,
    pub categories: Vec<Value>,
    pub values: Vec<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<Value>>,
}
