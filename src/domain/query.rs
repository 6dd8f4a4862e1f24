//! Aggregation queries over the event log.
//!
//! Every query is a single `GROUP BY` over `ecommerce_events` with an optional
//! `ORDER BY`/`LIMIT`. Result columns are always aliased the same way so that
//! one row type can carry any of them:
//!
//! | alias          | meaning                                  |
//! |----------------|------------------------------------------|
//! | `grouping_key` | grouping value rendered as text          |
//! | `cantidad`     | number of events in the group            |
//! | `total`        | sum of `price`, `NULL` when not computed |

use serde::Serialize;

use crate::domain::event::EventType;

/// Table holding the raw event log.
pub const EVENTS_TABLE: &str = "ecommerce_events";

/// Row cap for the ranked "top by revenue" queries.
pub const TOP_LIMIT: u32 = 5;

/// Column (or derived column) of the event log a query groups by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupKey {
    ProductId,
    CategoryId,
    EventType,
    EventHour,
}

impl GroupKey {
    /// Name used for the grouping column in results and charts.
    pub const fn column_name(self) -> &'static str {
        match self {
            Self::ProductId => "product_id",
            Self::CategoryId => "category_id",
            Self::EventType => "event_type",
            Self::EventHour => "hour",
        }
    }

    // Interpolated into SQL; only ever comes from this fixed enum.
    const fn expression(self) -> &'static str {
        match self {
            Self::ProductId => "product_id",
            Self::CategoryId => "category_id",
            Self::EventType => "event_type",
            Self::EventHour => "EXTRACT(HOUR FROM event_time)::int",
        }
    }
}

/// A named, parameterless aggregation over the event log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryDefinition {
    /// Count and revenue per key, highest revenue first, capped at [`TOP_LIMIT`].
    TopByRevenue(GroupKey),
    /// Count and revenue per event type.
    EventMix,
    /// Count per hour of day for a single event type.
    EventHourly(EventType),
}

impl QueryDefinition {
    pub const fn top_by_revenue(key: GroupKey) -> Self {
        Self::TopByRevenue(key)
    }

    /// Stable identifier used in logs and metric labels.
    pub fn name(&self) -> String {
        match self {
            Self::TopByRevenue(key) => format!("top-by-revenue:{}", key.column_name()),
            Self::EventMix => "event-mix".to_string(),
            Self::EventHourly(kind) => format!("event-hourly:{kind}"),
        }
    }

    pub const fn group_key(&self) -> GroupKey {
        match self {
            Self::TopByRevenue(key) => *key,
            Self::EventMix => GroupKey::EventType,
            Self::EventHourly(_) => GroupKey::EventHour,
        }
    }

    /// Whether the result carries the `total` column.
    pub const fn has_total(&self) -> bool {
        !matches!(self, Self::EventHourly(_))
    }

    pub const fn limit(&self) -> Option<u32> {
        match self {
            Self::TopByRevenue(_) => Some(TOP_LIMIT),
            _ => None,
        }
    }

    /// Event type bound as `$1`, for queries that filter on one.
    pub const fn event_filter(&self) -> Option<EventType> {
        match self {
            Self::EventHourly(kind) => Some(*kind),
            _ => None,
        }
    }

    /// Builds the SQL statement for this query.
    ///
    /// Ties in the ordering column are broken by the grouping key so repeated
    /// runs over the same data return rows in the same order.
    pub fn sql(&self) -> String {
        match self {
            Self::TopByRevenue(key) => {
                let expr = key.expression();
                format!(
                    "SELECT {expr}::text AS grouping_key, \
                     COUNT({expr}) AS cantidad, \
                     COALESCE(SUM(price), 0)::float8 AS total \
                     FROM {EVENTS_TABLE} \
                     GROUP BY {expr} \
                     ORDER BY total DESC, {expr} \
                     LIMIT {TOP_LIMIT}"
                )
            }
            Self::EventMix => format!(
                "SELECT event_type::text AS grouping_key, \
                 COUNT(product_id) AS cantidad, \
                 COALESCE(SUM(price), 0)::float8 AS total \
                 FROM {EVENTS_TABLE} \
                 GROUP BY event_type \
                 ORDER BY cantidad DESC, event_type"
            ),
            Self::EventHourly(_) => {
                let expr = GroupKey::EventHour.expression();
                format!(
                    "SELECT {expr}::text AS grouping_key, \
                     COUNT(product_id) AS cantidad, \
                     NULL::float8 AS total \
                     FROM {EVENTS_TABLE} \
                     WHERE event_type = $1 \
                     GROUP BY {expr} \
                     ORDER BY {expr}"
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_by_revenue_shares_one_builder() {
        let product = QueryDefinition::top_by_revenue(GroupKey::ProductId).sql();
        let category = QueryDefinition::top_by_revenue(GroupKey::CategoryId).sql();

        assert_eq!(product.replace("product_id", "category_id"), category);
        assert!(product.contains("GROUP BY product_id"));
        assert!(product.contains("ORDER BY total DESC, product_id"));
        assert!(product.ends_with("LIMIT 5"));
        assert!(category.contains("COUNT(category_id) AS cantidad"));
    }

    #[test]
    fn test_event_mix_has_no_limit() {
        let query = QueryDefinition::EventMix;
        let sql = query.sql();

        assert!(sql.contains("GROUP BY event_type"));
        assert!(sql.contains("COUNT(product_id) AS cantidad"));
        assert!(!sql.contains("LIMIT"));
        assert_eq!(query.limit(), None);
        assert!(query.has_total());
    }

    #[test]
    fn test_event_hourly_filters_by_bound_event_type() {
        let query = QueryDefinition::EventHourly(EventType::Cart);
        let sql = query.sql();

        assert!(sql.contains("WHERE event_type = $1"));
        assert!(sql.contains("EXTRACT(HOUR FROM event_time)"));
        assert!(!sql.contains("cart"));
        assert_eq!(query.event_filter(), Some(EventType::Cart));
        assert_eq!(query.group_key(), GroupKey::EventHour);
        assert!(!query.has_total());
    }

    #[test]
    fn test_query_names() {
        assert_eq!(
            QueryDefinition::top_by_revenue(GroupKey::CategoryId).name(),
            "top-by-revenue:category_id"
        );
        assert_eq!(QueryDefinition::EventMix.name(), "event-mix");
        assert_eq!(
            QueryDefinition::EventHourly(EventType::RemoveFromCart).name(),
            "event-hourly:remove_from_cart"
        );
    }

    #[test]
    fn test_only_top_queries_are_limited() {
        assert_eq!(
            QueryDefinition::top_by_revenue(GroupKey::ProductId).limit(),
            Some(TOP_LIMIT)
        );
        assert_eq!(
            QueryDefinition::EventHourly(EventType::View).limit(),
            None
        );
    }
}
