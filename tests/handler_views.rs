mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use events_dashboard::routes::router;
use sqlx::PgPool;

fn server(pool: PgPool) -> TestServer {
    let state = common::create_test_state(pool);
    TestServer::new(router(state)).unwrap()
}

#[sqlx::test(migrations = "tests/migrations")]
async fn test_view_list(pool: PgPool) {
    let server = server(pool);

    let response = server.get("/api/views").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let items = json["items"].as_array().unwrap();
    assert_eq!(items.len(), 3);
    assert_eq!(items[0]["id"], "product");
    assert_eq!(items[0]["route"], "/product");
    assert_eq!(items[1]["charts"].as_array().unwrap().len(), 5);
    assert_eq!(items[2]["id"], "category");
}

#[sqlx::test(migrations = "tests/migrations", fixtures("events"))]
async fn test_event_view_payload(pool: PgPool) {
    let server = server(pool);

    let response = server.get("/api/views/event").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["view"], "event");

    let nodes = json["nodes"].as_array().unwrap();
    assert_eq!(nodes[0]["type"], "heading");
    assert_eq!(nodes.len(), 6);

    let mix = &nodes[1];
    assert_eq!(mix["type"], "graph");
    assert_eq!(mix["id"], "event-1");
    assert_eq!(mix["chart"]["kind"], "pie");
    assert_eq!(mix["chart"]["category_label"], "event_type");
    assert_eq!(mix["chart"]["value_label"], "cantidad");
    assert_eq!(mix["chart"]["categories"], serde_json::json!(["view", "purchase"]));
    assert_eq!(mix["chart"]["values"], serde_json::json!([2, 1]));

    let hourly_views = &nodes[2]["chart"];
    assert_eq!(hourly_views["kind"], "line");
    assert_eq!(hourly_views["category_label"], "hour");
    assert_eq!(hourly_views["categories"], serde_json::json!([5, 9]));
    assert_eq!(hourly_views["values"], serde_json::json!([1, 1]));

    let hourly_cart = &nodes[3]["chart"];
    assert_eq!(hourly_cart["categories"], serde_json::json!([]));
}

#[sqlx::test(migrations = "tests/migrations", fixtures("catalog"))]
async fn test_product_view_payload_keeps_revenue_order(pool: PgPool) {
    let server = server(pool);

    let response = server.get("/api/views/product").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let bar = &json["nodes"][2]["chart"];
    assert_eq!(bar["kind"], "bar");
    assert_eq!(
        bar["categories"],
        serde_json::json!(["101", "102", "103", "104", "105"])
    );
    assert_eq!(
        bar["values"],
        serde_json::json!([100.0, 80.0, 50.0, 30.0, 10.0])
    );
    assert_eq!(bar["colors"], serde_json::json!([2, 1, 2, 1, 1]));
    assert_eq!(bar["color_label"], "cantidad");
}

#[sqlx::test(migrations = "tests/migrations", fixtures("catalog"))]
async fn test_legacy_alias_resolves_category(pool: PgPool) {
    let server = server(pool);

    let response = server.get("/api/views/tipo-3").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["view"], "category");
    assert_eq!(
        json["nodes"][1]["chart"]["categories"],
        serde_json::json!(["11", "12", "13", "14", "15"])
    );
}

#[sqlx::test(migrations = "tests/migrations")]
async fn test_unknown_view_returns_home(pool: PgPool) {
    let server = server(pool);

    let response = server.get("/api/views/revenue").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["view"], "home");
    assert_eq!(json["nodes"][1]["type"], "paragraph");
}

#[sqlx::test(migrations = "tests/migrations")]
async fn test_unreachable_database_fails_view(pool: PgPool) {
    let state = common::create_test_state(pool.clone());
    pool.close().await;
    let server = TestServer::new(router(state)).unwrap();

    let response = server.get("/api/views/product").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "database_unavailable");
}

#[sqlx::test(migrations = "tests/migrations")]
async fn test_home_needs_no_database(pool: PgPool) {
    let state = common::create_test_state(pool.clone());
    pool.close().await;
    let server = TestServer::new(router(state)).unwrap();

    let response = server.get("/api/views/home").await;

    response.assert_status_ok();
}
