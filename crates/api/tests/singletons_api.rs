//! Press kit and site settings: one row each, upserted by slug.

mod common;

use axum::http::StatusCode;
use common::{audit_count, body_json, get, put_json_auth};
use serde_json::json;
use sqlx::PgPool;

const BIO: &str = "Falcone spins disco, funk and new wave classics across Europe since 1998.";

async fn stored_press_kit(pool: &PgPool) -> serde_json::Value {
    sqlx::query_scalar("SELECT row_to_json(p) FROM press_kits p")
        .fetch_one(pool)
        .await
        .unwrap()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn press_kit_is_not_found_until_saved(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/press-kit").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn press_kit_upsert_is_idempotent(pool: PgPool) {
    let (_, token) = common::seed_admin(&pool).await;
    let body = json!({
        "bioShort": BIO,
        "techRiderUrl": "https://falcone.test/rider.pdf",
        "pressPhotosUrls": ["https://cdn.test/press/1.jpg"],
        "socialLinks": { "instagram": "https://instagram.com/falcone", "spotify": "" },
        "achievements": ["Residency at Le Palace"],
    });

    let app = common::build_test_app(pool.clone());
    let first = body_json(put_json_auth(app, "/api/v1/press-kit", body.clone(), &token).await).await;
    let after_first = stored_press_kit(&pool).await;
    let app = common::build_test_app(pool.clone());
    let second = body_json(put_json_auth(app, "/api/v1/press-kit", body, &token).await).await;
    assert_eq!(first, second);
    assert_eq!(stored_press_kit(&pool).await, after_first, "re-saving identical content must not touch the row");
    assert_eq!(second["slug"], "main");

    let app = common::build_test_app(pool.clone());
    let response = get(app, "/api/v1/press-kit").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["bioShort"], BIO);
    assert_eq!(json["socialLinks"]["instagram"], "https://instagram.com/falcone");
    assert_eq!(json["achievements"], json!(["Residency at Le Palace"]));

    let rows: i64 = sqlx::query_scalar("SELECT COUNT(*)::BIGINT FROM press_kits")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(rows, 1);
    assert_eq!(audit_count(&pool, "UPDATE", "PressKit").await, 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn press_kit_validation_reports_nested_links(pool: PgPool) {
    let (_, token) = common::seed_admin(&pool).await;

    let app = common::build_test_app(pool);
    let response = put_json_auth(
        app,
        "/api/v1/press-kit",
        json!({
            "bioShort": "Too short",
            "techRiderUrl": "rider.pdf",
            "socialLinks": { "instagram": "instagram" },
        }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    let details = json["details"].as_object().unwrap();
    assert_eq!(details["bioShort"][0], "Short bio must be at least 50 characters");
    assert!(details.contains_key("techRiderUrl"));
    assert!(details.contains_key("socialLinks.instagram"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn settings_round_trip(pool: PgPool) {
    let (_, token) = common::seed_admin(&pool).await;

    let app = common::build_test_app(pool.clone());
    assert_eq!(get(app, "/api/v1/settings").await.status(), StatusCode::NOT_FOUND);

    let app = common::build_test_app(pool.clone());
    let response = put_json_auth(
        app,
        "/api/v1/settings",
        json!({
            "siteName": "Falcone",
            "tagline": "Back to the groove",
            "contactEmail": "booking@falcone.test",
            "heroVideoUrl": "",
            "maintenanceMode": true,
        }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/v1/settings").await).await;
    assert_eq!(json["siteName"], "Falcone");
    assert_eq!(json["maintenanceMode"], true);
    assert_eq!(json["bookingEnabled"], true);
    assert!(json["heroVideoUrl"].is_null());

    let app = common::build_test_app(pool.clone());
    let response = put_json_auth(
        app,
        "/api/v1/settings",
        json!({ "siteName": "", "contactEmail": "nope" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["details"]["siteName"].is_array());
    assert!(json["details"]["contactEmail"].is_array());

    assert_eq!(audit_count(&pool, "UPDATE", "SiteSettings").await, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn singleton_writes_require_admin(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = common::put_json_auth(
        app,
        "/api/v1/settings",
        json!({ "siteName": "Hijack" }),
        "not-a-token",
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
