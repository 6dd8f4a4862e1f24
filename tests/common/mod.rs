#![allow(dead_code)]

use chrono::NaiveDateTime;
use events_dashboard::domain::event::Event;
use events_dashboard::state::AppState;
use sqlx::PgPool;
use std::sync::Arc;

pub fn at(timestamp: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%d %H:%M").unwrap()
}

pub async fn insert_event(pool: &PgPool, event: &Event) {
    sqlx::query(
        "INSERT INTO ecommerce_events (event_time, event_type, product_id, category_id, price) \
         VALUES ($1, $2, $3, $4, $5::float8::numeric)",
    )
    .bind(event.event_time)
    .bind(event.event_type.as_str())
    .bind(event.product_id)
    .bind(event.category_id)
    .bind(event.price)
    .execute(pool)
    .await
    .unwrap();
}

pub async fn insert_events(pool: &PgPool, events: &[Event]) {
    for event in events {
        insert_event(pool, event).await;
    }
}

pub fn create_test_state(pool: PgPool) -> AppState {
    AppState::new(Arc::new(pool))
}
