//! HTTP-level integration tests for the property endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use axum::http::StatusCode;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use common::{body_json, delete, delete_auth, get, post_json, put_json};
use sqlx::PgPool;

fn property_body(title: &str) -> serde_json::Value {
    serde_json::json!({
        "title": title,
        "location": "Marina District",
        "price_cents": 25_000_000,
        "bedrooms": 2,
        "bathrooms": 2,
        "total_units": 5,
        "amenities": ["pool", "gym"],
    })
}

// ---------------------------------------------------------------------------
// CRUD
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_property_returns_201_with_envelope(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/properties", property_body("Marina 2BR")).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["title"], "Marina 2BR");
    assert_eq!(json["data"]["status"], "available");
    // available_units defaults to total_units.
    assert_eq!(json["data"]["available_units"], 5);
    assert!(json["data"]["id"].is_number());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_property_rejects_bad_status(pool: PgPool) {
    let app = common::build_test_app(pool);
    let mut body = property_body("Bad Status");
    body["status"] = serde_json::json!("on_fire");
    let response = post_json(app, "/api/v1/properties", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_property_includes_units(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(post_json(app, "/api/v1/properties", property_body("With Units")).await)
        .await;
    let id = created["data"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        &format!("/api/v1/properties/{id}/units"),
        serde_json::json!({"unit_number": "A-101", "floor": 1}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/api/v1/properties/{id}")).await).await;
    assert_eq!(json["data"]["title"], "With Units");
    assert_eq!(json["data"]["units"].as_array().unwrap().len(), 1);
    assert_eq!(json["data"]["units"][0]["unit_number"], "A-101");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_nonexistent_property_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/properties/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_properties_filters_by_status(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    post_json(app, "/api/v1/properties", property_body("Available One")).await;

    let app = common::build_test_app(pool.clone());
    let mut sold = property_body("Sold One");
    sold["status"] = serde_json::json!("sold");
    post_json(app, "/api/v1/properties", sold).await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/properties?status=sold").await).await;
    let items = json["data"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["title"], "Sold One");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_property_partial(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created =
        body_json(post_json(app, "/api/v1/properties", property_body("Original")).await).await;
    let id = created["data"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/api/v1/properties/{id}"),
        serde_json::json!({"price_cents": 27_500_000}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["price_cents"], 27_500_000);
    // Untouched fields survive a partial update.
    assert_eq!(json["data"]["title"], "Original");
}

// ---------------------------------------------------------------------------
// Delete (admin only)
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_requires_auth(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created =
        body_json(post_json(app, "/api/v1/properties", property_body("Keep Me")).await).await;
    let id = created["data"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = delete(app, &format!("/api/v1/properties/{id}")).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_forbidden_for_sales_rep(pool: PgPool) {
    let (_, password) = common::seed_profile(&pool, "rep@atrium.test", "sales_rep").await;
    let token =
        common::login_for_token(common::build_test_app(pool.clone()), "rep@atrium.test", &password)
            .await;

    let app = common::build_test_app(pool.clone());
    let created =
        body_json(post_json(app, "/api/v1/properties", property_body("Protected")).await).await;
    let id = created["data"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = delete_auth(app, &format!("/api/v1/properties/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_as_admin_returns_204(pool: PgPool) {
    let (_, password) = common::seed_profile(&pool, "admin@atrium.test", "admin").await;
    let token = common::login_for_token(
        common::build_test_app(pool.clone()),
        "admin@atrium.test",
        &password,
    )
    .await;

    let app = common::build_test_app(pool.clone());
    let created =
        body_json(post_json(app, "/api/v1/properties", property_body("Doomed")).await).await;
    let id = created["data"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = delete_auth(app, &format!("/api/v1/properties/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/properties/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Image upload
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_upload_image_appends_url(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created =
        body_json(post_json(app, "/api/v1/properties", property_body("Photogenic")).await).await;
    let id = created["data"]["id"].as_i64().unwrap();

    let payload = format!("data:image/png;base64,{}", BASE64.encode(b"\x89PNG fake"));
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        &format!("/api/v1/properties/{id}/images"),
        serde_json::json!({"image": payload}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    let images = json["data"]["images"].as_array().unwrap();
    assert_eq!(images.len(), 1);
    let url = images[0].as_str().unwrap();
    assert!(url.contains(&format!("properties/{id}/")));
    assert!(url.ends_with(".png"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_upload_rejects_non_image_mime(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created =
        body_json(post_json(app, "/api/v1/properties", property_body("No PDFs")).await).await;
    let id = created["data"]["id"].as_i64().unwrap();

    let payload = format!("data:application/pdf;base64,{}", BASE64.encode(b"%PDF"));
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        &format!("/api/v1/properties/{id}/images"),
        serde_json::json!({"image": payload}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
