mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use common::{audit_count, body_json, post_json_auth, STORAGE_BASE_URL};
use falcone_cloud::MemoryStorage;
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn upload_issues_presigned_url_under_folder(pool: PgPool) {
    let (_, token) = common::seed_admin(&pool).await;

    let (app, storage) =
        common::build_test_app_with_storage(pool.clone(), Arc::new(MemoryStorage::new(STORAGE_BASE_URL)));
    let response = post_json_auth(
        app,
        "/api/v1/upload",
        json!({ "filename": "My Photo!!.png", "contentType": "image/png", "folder": "photos" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let key = json["s3Key"].as_str().unwrap();
    assert!(key.starts_with("photos/"), "{key}");
    assert!(key.ends_with("-My_Photo__.png"), "{key}");
    assert_eq!(json["publicUrl"], format!("{STORAGE_BASE_URL}/{key}"));
    let upload_url = json["uploadUrl"].as_str().unwrap();
    assert!(upload_url.contains("x-expires=900"), "{upload_url}");
    assert_eq!(storage.authorized_keys(), vec![key.to_string()]);

    assert_eq!(audit_count(&pool, "UPLOAD", "MediaAsset").await, 1);
    let meta: serde_json::Value =
        sqlx::query_scalar("SELECT meta FROM audit_logs WHERE action = 'UPLOAD'")
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(meta["filename"], "My Photo!!.png");
    assert_eq!(meta["folder"], "photos");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_folder_falls_back_to_uploads(pool: PgPool) {
    let (_, token) = common::seed_admin(&pool).await;

    let app = common::build_test_app(pool);
    let response = post_json_auth(
        app,
        "/api/v1/upload",
        json!({ "filename": "rider.pdf", "contentType": "application/pdf", "folder": "../secrets" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["s3Key"].as_str().unwrap().starts_with("uploads/"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn disallowed_content_type_is_rejected(pool: PgPool) {
    let (_, token) = common::seed_admin(&pool).await;

    let (app, storage) =
        common::build_test_app_with_storage(pool, Arc::new(MemoryStorage::new(STORAGE_BASE_URL)));
    let response = post_json_auth(
        app,
        "/api/v1/upload",
        json!({ "filename": "", "contentType": "text/html" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["details"]["contentType"].is_array());
    assert!(json["details"]["filename"].is_array());
    assert!(storage.authorized_keys().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn storage_failure_is_internal_error(pool: PgPool) {
    let (_, token) = common::seed_admin(&pool).await;
    let failing = Arc::new(MemoryStorage::new(STORAGE_BASE_URL));
    failing.set_failing(true);

    let (app, _) = common::build_test_app_with_storage(pool, failing);
    let response = post_json_auth(
        app,
        "/api/v1/upload",
        json!({ "filename": "a.jpg", "contentType": "image/jpeg" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "An internal error occurred");
}
