//! Handler for `POST /upload`: presigned upload authorization.
//!
//! Uploading is two-phase. The client asks for a URL here, PUTs the file
//! straight to storage, then registers the result with `POST /media`.

use std::time::Duration;

use axum::extract::State;
use axum::Json;
use falcone_core::audit::{action_types, entity_types};
use falcone_core::storage::{generate_key, resolve_folder};
use falcone_core::validation;
use serde::{Deserialize, Serialize};
use serde_json::json;
use validator::Validate;

use crate::audit;
use crate::error::AppResult;
use crate::extract::{RequestMeta, ValidatedJson};
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// Request body for `POST /upload`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UploadRequest {
    #[serde(default)]
    #[validate(custom(function = "validation::not_blank"))]
    pub filename: String,
    #[serde(default)]
    #[validate(custom(function = "validation::upload_content_type"))]
    pub content_type: String,
    /// Target folder; anything outside the allow-list lands in `uploads`.
    pub folder: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    /// Presigned PUT URL, valid for the configured TTL.
    pub upload_url: String,
    /// Where the object will be readable once uploaded.
    pub public_url: String,
    pub s3_key: String,
}

/// POST /api/v1/upload
pub async fn authorize(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    meta: RequestMeta,
    ValidatedJson(input): ValidatedJson<UploadRequest>,
) -> AppResult<Json<UploadResponse>> {
    let folder = resolve_folder(input.folder.as_deref());
    let key = generate_key(folder, &input.filename);
    let ttl = Duration::from_secs(state.config.storage.upload_url_ttl_secs);

    let upload_url = state
        .storage
        .authorize_upload(&key, &input.content_type, ttl)
        .await?;
    let public_url = state.storage.public_url(&key);

    audit::record(
        &state.pool,
        audit::entry(action_types::UPLOAD, entity_types::MEDIA_ASSET, &meta)
            .actor(admin.user_id)
            .meta(json!({
                "filename": input.filename,
                "folder": folder,
                "contentType": input.content_type,
                "s3Key": key,
            })),
    )
    .await;

    tracing::info!(key = %key, user_id = admin.user_id, "Upload authorized");

    Ok(Json(UploadResponse {
        upload_url,
        public_url,
        s3_key: key,
    }))
}
