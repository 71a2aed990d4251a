//! HTTP-level integration tests for reservations, including the
//! transactional status side effects on properties and units.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json, put_json};
use sqlx::PgPool;

async fn seed_property(pool: &PgPool, title: &str, total_units: i64) -> i64 {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/api/v1/properties",
            serde_json::json!({
                "title": title,
                "location": "Marina District",
                "price_cents": 25_000_000,
                "total_units": total_units,
            }),
        )
        .await,
    )
    .await;
    created["data"]["id"].as_i64().unwrap()
}

async fn seed_reservation(pool: &PgPool, property_id: i64) -> serde_json::Value {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/reservations",
        serde_json::json!({
            "property_id": property_id,
            "customer_name": "Dana Buyer",
            "customer_email": "dana@example.com",
            "viewing_date": "2026-09-15",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

async fn property_json(pool: &PgPool, id: i64) -> serde_json::Value {
    let app = common::build_test_app(pool.clone());
    body_json(get(app, &format!("/api/v1/properties/{id}")).await).await
}

// ---------------------------------------------------------------------------
// Create / read
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_reservation_generates_confirmation_code(pool: PgPool) {
    let property_id = seed_property(&pool, "Reservable", 3).await;
    let json = seed_reservation(&pool, property_id).await;

    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["status"], "pending");
    assert_eq!(json["data"]["deposit_status"], "unpaid");
    let code = json["data"]["confirmation_code"].as_str().unwrap();
    assert!(code.starts_with("RSV-"));
    assert_eq!(code.len(), 12);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_reservation_for_missing_property_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/reservations",
        serde_json::json!({
            "property_id": 999999,
            "customer_name": "Nobody",
            "customer_email": "nobody@example.com",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_reservation_joins_property(pool: PgPool) {
    let property_id = seed_property(&pool, "Joined", 2).await;
    let created = seed_reservation(&pool, property_id).await;
    let id = created["data"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/api/v1/reservations/{id}")).await).await;
    assert_eq!(json["data"]["customer_name"], "Dana Buyer");
    assert_eq!(json["data"]["property"]["title"], "Joined");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_reservations_filters_by_status(pool: PgPool) {
    let property_id = seed_property(&pool, "Filtered", 5).await;
    seed_reservation(&pool, property_id).await;
    let second = seed_reservation(&pool, property_id).await;
    let second_id = second["data"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    put_json(
        app,
        &format!("/api/v1/reservations/{second_id}"),
        serde_json::json!({"status": "cancelled"}),
    )
    .await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/reservations?status=cancelled").await).await;
    let items = json["data"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["id"], second_id);
}

// ---------------------------------------------------------------------------
// Status side effects
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_confirmation_decrements_units_and_marks_sold(pool: PgPool) {
    let property_id = seed_property(&pool, "Selling", 3).await;
    let created = seed_reservation(&pool, property_id).await;
    let id = created["data"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/api/v1/reservations/{id}"),
        serde_json::json!({"status": "confirmed"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["status"], "confirmed");

    let prop = property_json(&pool, property_id).await;
    assert_eq!(prop["data"]["status"], "sold");
    assert_eq!(prop["data"]["available_units"], 2);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_cancellation_restores_exactly_one_unit(pool: PgPool) {
    let property_id = seed_property(&pool, "Recovering", 3).await;
    let created = seed_reservation(&pool, property_id).await;
    let id = created["data"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    put_json(
        app,
        &format!("/api/v1/reservations/{id}"),
        serde_json::json!({"status": "confirmed"}),
    )
    .await;

    let app = common::build_test_app(pool.clone());
    put_json(
        app,
        &format!("/api/v1/reservations/{id}"),
        serde_json::json!({"status": "cancelled"}),
    )
    .await;

    let prop = property_json(&pool, property_id).await;
    assert_eq!(prop["data"]["status"], "available");
    assert_eq!(prop["data"]["available_units"], 3);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_cancellation_caps_units_at_total(pool: PgPool) {
    let property_id = seed_property(&pool, "Capped", 1).await;
    let created = seed_reservation(&pool, property_id).await;
    let id = created["data"]["id"].as_i64().unwrap();

    // Cancel a never-confirmed reservation: available_units is already at
    // total_units and must not exceed it.
    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/api/v1/reservations/{id}"),
        serde_json::json!({"status": "cancelled"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let prop = property_json(&pool, property_id).await;
    assert_eq!(prop["data"]["available_units"], 1);
    assert_eq!(prop["data"]["total_units"], 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_confirmation_reserves_the_linked_unit(pool: PgPool) {
    let property_id = seed_property(&pool, "Unit Linked", 2).await;

    let app = common::build_test_app(pool.clone());
    let unit = body_json(
        post_json(
            app,
            &format!("/api/v1/properties/{property_id}/units"),
            serde_json::json!({"unit_number": "B-202"}),
        )
        .await,
    )
    .await;
    let unit_id = unit["data"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/api/v1/reservations",
            serde_json::json!({
                "property_id": property_id,
                "unit_id": unit_id,
                "customer_name": "Unit Buyer",
                "customer_email": "unit@example.com",
            }),
        )
        .await,
    )
    .await;
    let id = created["data"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    put_json(
        app,
        &format!("/api/v1/reservations/{id}"),
        serde_json::json!({"status": "confirmed"}),
    )
    .await;

    let prop = property_json(&pool, property_id).await;
    assert_eq!(prop["data"]["units"][0]["status"], "reserved");

    // Cancelling frees the unit again.
    let app = common::build_test_app(pool.clone());
    put_json(
        app,
        &format!("/api/v1/reservations/{id}"),
        serde_json::json!({"status": "cancelled"}),
    )
    .await;

    let prop = property_json(&pool, property_id).await;
    assert_eq!(prop["data"]["units"][0]["status"], "available");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_rejects_unknown_status(pool: PgPool) {
    let property_id = seed_property(&pool, "Strict", 1).await;
    let created = seed_reservation(&pool, property_id).await;
    let id = created["data"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/api/v1/reservations/{id}"),
        serde_json::json!({"status": "abandoned"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Availability
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_availability_reports_demand_score(pool: PgPool) {
    let property_id = seed_property(&pool, "In Demand", 10).await;
    for _ in 0..3 {
        seed_reservation(&pool, property_id).await;
    }

    let app = common::build_test_app(pool);
    let json = body_json(
        get(
            app,
            &format!("/api/v1/availability?property_id={property_id}&date=2026-09-16"),
        )
        .await,
    )
    .await;

    assert_eq!(json["data"]["available"], true);
    assert_eq!(json["data"]["total_reservations"], 3);
    assert_eq!(json["data"]["demand_score"], 30);
    // All three viewings fall inside the +/- 1 day window of the 16th.
    assert_eq!(json["data"]["overlapping_reservations"], 3);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_availability_for_missing_property_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/availability?property_id=424242").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
