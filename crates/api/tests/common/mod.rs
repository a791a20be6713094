#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use falcone_api::auth::jwt::{generate_access_token, JwtConfig};
use falcone_api::auth::password::hash_password;
use falcone_api::config::{ServerConfig, StorageConfig};
use falcone_api::router::build_app_router;
use falcone_api::state::AppState;
use falcone_cloud::MemoryStorage;
use falcone_core::storage::StorageBackendType;
use falcone_core::types::DbId;
use falcone_db::models::admin_user::CreateAdminUser;
use falcone_db::repositories::AdminUserRepo;

pub const TEST_JWT_SECRET: &str = "integration-test-secret-not-for-production";
pub const STORAGE_BASE_URL: &str = "https://cdn.test";
pub const ADMIN_EMAIL: &str = "admin@falcone.test";
pub const ADMIN_PASSWORD: &str = "correct-horse-battery";

/// Build a test `ServerConfig` with safe defaults and the in-memory storage
/// backend.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3001".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        jwt: JwtConfig {
            secret: TEST_JWT_SECRET.to_string(),
            access_token_expiry_mins: 60,
        },
        storage: StorageConfig {
            backend: StorageBackendType::Memory,
            bucket: "falcone-test".to_string(),
            region: "us-east-1".to_string(),
            endpoint_url: None,
            cdn_url: Some(STORAGE_BASE_URL.to_string()),
            upload_url_ttl_secs: 900,
        },
    }
}

/// Build the full application router (same middleware stack as `main.rs`).
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_storage(pool, Arc::new(MemoryStorage::new(STORAGE_BASE_URL))).0
}

/// Like [`build_test_app`], also returning the storage so tests can inspect
/// issued and deleted keys.
pub fn build_test_app_with_storage(
    pool: PgPool,
    storage: Arc<MemoryStorage>,
) -> (Router, Arc<MemoryStorage>) {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        storage: storage.clone(),
    };
    (build_app_router(state, &config), storage)
}

/// Insert an admin account and return its id with a valid bearer token.
pub async fn seed_admin(pool: &PgPool) -> (DbId, String) {
    let admin = AdminUserRepo::create(
        pool,
        &CreateAdminUser {
            email: ADMIN_EMAIL.to_string(),
            password_hash: hash_password(ADMIN_PASSWORD).unwrap(),
            name: Some("Test Admin".to_string()),
            role: "SUPER_ADMIN".to_string(),
        },
    )
    .await
    .unwrap();
    let token = generate_access_token(admin.id, &admin.role, &test_config().jwt).unwrap();
    (admin.id, token)
}

/// Token for an admin that has no database row (audit entries will not
/// reference it).
pub fn token_for(user_id: DbId, role: &str) -> String {
    generate_access_token(user_id, role, &test_config().jwt).unwrap()
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(serde_json::to_vec(&json).unwrap())
        }
        None => Body::empty(),
    };
    app.oneshot(builder.body(body).unwrap()).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::GET, uri, Some(token), None).await
}

pub async fn post_json(app: Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, None, Some(json)).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    json: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, Method::POST, uri, Some(token), Some(json)).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    json: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, Method::PUT, uri, Some(token), Some(json)).await
}

pub async fn patch_json_auth(
    app: Router,
    uri: &str,
    json: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, Method::PATCH, uri, Some(token), Some(json)).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, Some(token), None).await
}

/// Send a raw (possibly malformed) JSON body.
pub async fn post_raw_auth(app: Router, uri: &str, body: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("authorization", format!("Bearer {token}"))
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Count audit rows for an action / entity type pair.
pub async fn audit_count(pool: &PgPool, action: &str, entity_type: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*)::BIGINT FROM audit_logs WHERE action = $1 AND entity_type = $2",
    )
    .bind(action)
    .bind(entity_type)
    .fetch_one(pool)
    .await
    .unwrap()
}
