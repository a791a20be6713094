mod common;

use axum::http::StatusCode;
use common::{audit_count, body_json, delete_auth, get_auth, patch_json_auth, post_json};
use serde_json::json;
use sqlx::PgPool;

async fn send_message(pool: &PgPool, name: &str) -> i64 {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/contact",
        json!({
            "name": name,
            "email": "fan@example.com",
            "subject": "Hello",
            "message": "Loved the set last Saturday!",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    json["id"].as_i64().unwrap()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn public_contact_is_not_audited(pool: PgPool) {
    send_message(&pool, "Anna").await;
    assert_eq!(audit_count(&pool, "CREATE", "ContactMessage").await, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn invalid_contact_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/contact",
        json!({ "name": "A", "email": "x", "message": "hi" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    let details = json["details"].as_object().unwrap();
    for field in ["name", "email", "message"] {
        assert!(details.contains_key(field), "missing {field}");
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn mark_read_flips_unread_filter(pool: PgPool) {
    let (_, token) = common::seed_admin(&pool).await;
    let first = send_message(&pool, "Anna").await;
    let second = send_message(&pool, "Ben").await;

    let app = common::build_test_app(pool.clone());
    let json = body_json(get_auth(app, "/api/v1/contact?unread=true", &token).await).await;
    assert_eq!(json.as_array().unwrap().len(), 2);

    let app = common::build_test_app(pool.clone());
    let response = patch_json_auth(
        app,
        &format!("/api/v1/contact/{first}"),
        json!({ "isRead": true }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["isRead"], true);

    let app = common::build_test_app(pool.clone());
    let json = body_json(get_auth(app, "/api/v1/contact?unread=true", &token).await).await;
    let unread = json.as_array().unwrap();
    assert_eq!(unread.len(), 1);
    assert_eq!(unread[0]["id"], second);

    let app = common::build_test_app(pool.clone());
    let json = body_json(get_auth(app, "/api/v1/contact", &token).await).await;
    assert_eq!(json.as_array().unwrap().len(), 2);

    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, &format!("/api/v1/contact/{first}"), &token).await;
    assert_eq!(body_json(response).await["name"], "Anna");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_message(pool: PgPool) {
    let (_, token) = common::seed_admin(&pool).await;
    let id = send_message(&pool, "Carla").await;

    let app = common::build_test_app(pool.clone());
    let response = delete_auth(app, &format!("/api/v1/contact/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, &format!("/api/v1/contact/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    assert_eq!(audit_count(&pool, "DELETE", "ContactMessage").await, 1);
}
