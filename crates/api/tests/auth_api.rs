//! HTTP-level integration tests for auth, role guards, the analytics
//! dashboard, and the notification endpoint.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, get_auth, post_json, post_json_auth};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Register / login
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_register_returns_public_profile(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/auth/register",
        serde_json::json!({
            "email": "new@atrium.test",
            "password": "long-enough-password",
            "full_name": "New Person",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["data"]["email"], "new@atrium.test");
    assert_eq!(json["data"]["role"], "sales_rep");
    assert!(json["data"]["password_hash"].is_null(), "hash must never leak");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_register_rejects_short_password(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/auth/register",
        serde_json::json!({
            "email": "short@atrium.test",
            "password": "tiny",
            "full_name": "Short Password",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_register_refuses_privileged_roles(pool: PgPool) {
    for role in ["admin", "sales_manager"] {
        let app = common::build_test_app(pool.clone());
        let response = post_json(
            app,
            "/api/v1/auth/register",
            serde_json::json!({
                "email": format!("{role}@atrium.test"),
                "password": "long-enough-password",
                "full_name": "Wishful Thinker",
                "role": role,
            }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::FORBIDDEN, "role {role}");
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_duplicate_email_returns_409(pool: PgPool) {
    common::seed_profile(&pool, "taken@atrium.test", "sales_rep").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/auth/register",
        serde_json::json!({
            "email": "taken@atrium.test",
            "password": "long-enough-password",
            "full_name": "Duplicate",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_wrong_password_returns_401(pool: PgPool) {
    common::seed_profile(&pool, "locked@atrium.test", "sales_rep").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/auth/login",
        serde_json::json!({"email": "locked@atrium.test", "password": "incorrect"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_me_returns_current_profile(pool: PgPool) {
    let (id, password) = common::seed_profile(&pool, "whoami@atrium.test", "sales_rep").await;
    let token = common::login_for_token(
        common::build_test_app(pool.clone()),
        "whoami@atrium.test",
        &password,
    )
    .await;

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/auth/me", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["id"], id);
}

// ---------------------------------------------------------------------------
// Refresh rotation / logout
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_refresh_rotates_the_token(pool: PgPool) {
    let (_, password) = common::seed_profile(&pool, "rotate@atrium.test", "sales_rep").await;

    let app = common::build_test_app(pool.clone());
    let login = body_json(
        post_json(
            app,
            "/api/v1/auth/login",
            serde_json::json!({"email": "rotate@atrium.test", "password": password}),
        )
        .await,
    )
    .await;
    let refresh_token = login["data"]["refresh_token"].as_str().unwrap().to_string();

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/auth/refresh",
        serde_json::json!({"refresh_token": refresh_token}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let refreshed = body_json(response).await;
    let new_token = refreshed["data"]["refresh_token"].as_str().unwrap();
    assert_ne!(new_token, refresh_token);

    // The old token was revoked by the rotation.
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/auth/refresh",
        serde_json::json!({"refresh_token": refresh_token}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_logout_revokes_the_session(pool: PgPool) {
    let (_, password) = common::seed_profile(&pool, "leave@atrium.test", "sales_rep").await;

    let app = common::build_test_app(pool.clone());
    let login = body_json(
        post_json(
            app,
            "/api/v1/auth/login",
            serde_json::json!({"email": "leave@atrium.test", "password": password}),
        )
        .await,
    )
    .await;
    let refresh_token = login["data"]["refresh_token"].as_str().unwrap().to_string();

    let app = common::build_test_app(pool.clone());
    let json = body_json(
        post_json(
            app,
            "/api/v1/auth/logout",
            serde_json::json!({"refresh_token": refresh_token}),
        )
        .await,
    )
    .await;
    assert_eq!(json["data"]["revoked"], true);

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/auth/refresh",
        serde_json::json!({"refresh_token": refresh_token}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Analytics dashboard (manager roles)
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_dashboard_requires_manager_role(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = get(app, "/api/v1/analytics/dashboard").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let (_, password) = common::seed_profile(&pool, "rep2@atrium.test", "sales_rep").await;
    let token = common::login_for_token(
        common::build_test_app(pool.clone()),
        "rep2@atrium.test",
        &password,
    )
    .await;

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/analytics/dashboard", &token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_dashboard_aggregates(pool: PgPool) {
    let (_, password) = common::seed_profile(&pool, "mgr@atrium.test", "sales_manager").await;
    let token = common::login_for_token(
        common::build_test_app(pool.clone()),
        "mgr@atrium.test",
        &password,
    )
    .await;

    let app = common::build_test_app(pool.clone());
    post_json(
        app,
        "/api/v1/properties",
        serde_json::json!({
            "title": "Counted",
            "location": "Marina District",
            "price_cents": 10_000_000,
            "total_units": 4,
        }),
    )
    .await;

    let app = common::build_test_app(pool.clone());
    post_json(
        app,
        "/api/v1/leads",
        serde_json::json!({"name": "Tracked", "budget_max_cents": 20_000_000}),
    )
    .await;

    let app = common::build_test_app(pool);
    let json = body_json(get_auth(app, "/api/v1/analytics/dashboard", &token).await).await;
    assert_eq!(json["data"]["total_units"], 4);
    assert_eq!(json["data"]["leads"]["total"], 1);
    assert_eq!(json["data"]["properties_by_status"][0]["status"], "available");
    assert_eq!(json["data"]["properties_by_status"][0]["count"], 1);
    assert_eq!(json["data"]["revenue_cents"], 0);
}

// ---------------------------------------------------------------------------
// Notifications
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_notification_send_requires_auth(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/notifications/email",
        serde_json::json!({
            "to": "buyer@example.com",
            "template": "viewing_reminder",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_notification_send_is_simulated(pool: PgPool) {
    let (_, password) = common::seed_profile(&pool, "sender@atrium.test", "sales_rep").await;
    let token = common::login_for_token(
        common::build_test_app(pool.clone()),
        "sender@atrium.test",
        &password,
    )
    .await;

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/v1/notifications/email",
        serde_json::json!({
            "to": "buyer@example.com",
            "template": "reservation_confirmation",
            "params": {
                "customer_name": "Dana",
                "property_title": "Marina 2BR",
                "confirmation_code": "RSV-1A2B3C4D",
            },
        }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::ACCEPTED);

    let json = body_json(response).await;
    assert_eq!(json["data"]["simulated"], true);
    assert!(json["data"]["subject"].as_str().unwrap().contains("Marina 2BR"));

    // Unknown templates are rejected.
    let app = common::build_test_app(pool);
    let response = post_json_auth(
        app,
        "/api/v1/notifications/email",
        serde_json::json!({"to": "buyer@example.com", "template": "newsletter"}),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
