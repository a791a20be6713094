//! Login / logout and admin gating.

mod common;

use axum::http::StatusCode;
use common::{
    audit_count, body_json, get, get_auth, post_json, post_json_auth, ADMIN_EMAIL, ADMIN_PASSWORD,
};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn login_returns_token_accepted_by_admin_routes(pool: PgPool) {
    let (admin_id, _) = common::seed_admin(&pool).await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/auth/login",
        json!({ "email": ADMIN_EMAIL, "password": ADMIN_PASSWORD }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["tokenType"], "Bearer");
    assert_eq!(json["expiresIn"], 3600);
    assert_eq!(json["user"]["id"], admin_id);
    assert_eq!(json["user"]["role"], "SUPER_ADMIN");
    assert!(json["user"].get("passwordHash").is_none());
    let token = json["accessToken"].as_str().unwrap().to_string();

    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, "/api/v1/bookings", &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    assert_eq!(audit_count(&pool, "LOGIN", "AdminUser").await, 1);
    let last_login: Option<chrono::DateTime<chrono::Utc>> =
        sqlx::query_scalar("SELECT last_login_at FROM admin_users WHERE id = $1")
            .bind(admin_id)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert!(last_login.is_some());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn wrong_password_is_unauthorized(pool: PgPool) {
    common::seed_admin(&pool).await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/auth/login",
        json!({ "email": ADMIN_EMAIL, "password": "definitely-wrong" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["code"], "UNAUTHORIZED");
    assert_eq!(audit_count(&pool, "LOGIN", "AdminUser").await, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_email_is_unauthorized(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/auth/login",
        json!({ "email": "nobody@falcone.test", "password": "whatever-long" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn login_validates_input(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/auth/login",
        json!({ "email": "not-an-email", "password": "short" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["details"]["email"].is_array());
    assert!(json["details"]["password"].is_array());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn logout_records_audit_entry(pool: PgPool) {
    let (_, token) = common::seed_admin(&pool).await;

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(app, "/api/v1/auth/logout", json!({}), &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["success"], true);

    assert_eq!(audit_count(&pool, "LOGOUT", "AdminUser").await, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn admin_routes_reject_missing_and_invalid_tokens(pool: PgPool) {
    for uri in ["/api/v1/bookings", "/api/v1/contact", "/api/v1/dashboard"] {
        let app = common::build_test_app(pool.clone());
        let response = get(app, uri).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{uri}");
    }

    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, "/api/v1/bookings", "garbage.token.value").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let app = common::build_test_app(pool);
    let foreign = common::token_for(1, "VIEWER");
    let response = get_auth(app, "/api/v1/bookings", &foreign).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unauthorized_create_touches_nothing(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/events",
        json!({
            "title": "Sneaky",
            "startAt": "2030-01-01T20:00",
            "city": "Paris",
            "country": "France",
            "venue": "Nowhere",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*)::BIGINT FROM events")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}
