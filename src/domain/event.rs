//! Ecommerce event model.
//!
//! Events are written by an upstream ingestion process; this service only
//! reads them through aggregate queries.

use chrono::NaiveDateTime;
use serde::Serialize;
use std::fmt;

/// Kind of interaction recorded in the event log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    View,
    Cart,
    RemoveFromCart,
    Purchase,
}

impl EventType {
    /// Every event type, in the order the dashboard plots them.
    pub const ALL: [EventType; 4] = [
        EventType::View,
        EventType::Cart,
        EventType::RemoveFromCart,
        EventType::Purchase,
    ];

    /// Value stored in the `event_type` column.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::View => "view",
            Self::Cart => "cart",
            Self::RemoveFromCart => "remove_from_cart",
            Self::Purchase => "purchase",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single row of the `ecommerce_events` table.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub event_time: NaiveDateTime,
    pub event_type: EventType,
    pub product_id: i64,
    pub category_id: i64,
    pub price: f64,
}

impl Event {
    /// Creates a new Event instance.
    pub fn new(
        event_time: NaiveDateTime,
        event_type: EventType,
        product_id: i64,
        category_id: i64,
        price: f64,
    ) -> Self {
        Self {
            event_time,
            event_type,
            product_id,
            category_id,
            price,
        }
    }
}
