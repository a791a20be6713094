//! Handlers for the `/media` gallery resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use falcone_core::audit::{action_types, entity_types};
use falcone_core::enums::MediaType;
use falcone_core::error::CoreError;
use falcone_core::types::DbId;
use falcone_db::models::media_asset::{CreateMediaAsset, MediaAsset, MediaFilter, UpdateMediaAsset};
use falcone_db::repositories::MediaAssetRepo;
use serde_json::json;

use super::mixes::check_decade;
use super::{is_visible, published_only};
use crate::audit;
use crate::error::{AppError, AppResult};
use crate::extract::{Path, Query, RequestMeta, ValidatedJson};
use crate::middleware::auth::MaybeAuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::query::MediaListParams;
use crate::response::SuccessResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "MediaAsset",
        id,
    })
}

/// GET /api/v1/media?type=&decade=&category=&featured=&all=
pub async fn list(
    viewer: MaybeAuthUser,
    State(state): State<AppState>,
    Query(params): Query<MediaListParams>,
) -> AppResult<Json<Vec<MediaAsset>>> {
    let media_type = params.media_type.filter(|t| !t.is_empty());
    if let Some(t) = media_type.as_deref() {
        if MediaType::parse(t).is_none() {
            return Err(AppError::BadRequest(format!(
                "Invalid type '{t}'. Must be one of: {}",
                MediaType::ALL.join(", ")
            )));
        }
    }
    let decade = params.decade.filter(|d| !d.is_empty());
    check_decade(decade.as_deref())?;

    let filter = MediaFilter {
        media_type,
        decade,
        category: params.category.filter(|c| !c.is_empty()),
        featured_only: params.featured,
        published_only: published_only(&viewer, params.all),
    };
    let assets = MediaAssetRepo::list(&state.pool, &filter).await?;
    Ok(Json(assets))
}

/// POST /api/v1/media
///
/// Registers an asset, usually one just uploaded through `/upload`.
pub async fn create(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    meta: RequestMeta,
    ValidatedJson(input): ValidatedJson<CreateMediaAsset>,
) -> AppResult<(StatusCode, Json<MediaAsset>)> {
    let asset = MediaAssetRepo::create(&state.pool, &input).await?;

    audit::record(
        &state.pool,
        audit::entry(action_types::CREATE, entity_types::MEDIA_ASSET, &meta)
            .actor(admin.user_id)
            .entity_id(asset.id)
            .meta(json!({ "title": asset.title, "type": asset.media_type })),
    )
    .await;

    tracing::info!(media_id = asset.id, user_id = admin.user_id, "Media asset created");

    Ok((StatusCode::CREATED, Json(asset)))
}

/// GET /api/v1/media/{id}
pub async fn get_by_id(
    viewer: MaybeAuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MediaAsset>> {
    let asset = MediaAssetRepo::find_by_id(&state.pool, id)
        .await?
        .filter(|asset| is_visible(&viewer, asset.is_published))
        .ok_or_else(|| not_found(id))?;
    Ok(Json(asset))
}

/// PATCH /api/v1/media/{id}
pub async fn update(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    meta: RequestMeta,
    ValidatedJson(input): ValidatedJson<UpdateMediaAsset>,
) -> AppResult<Json<MediaAsset>> {
    let asset = MediaAssetRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    audit::record(
        &state.pool,
        audit::entry(action_types::UPDATE, entity_types::MEDIA_ASSET, &meta)
            .actor(admin.user_id)
            .entity_id(id),
    )
    .await;

    tracing::info!(media_id = id, user_id = admin.user_id, "Media asset updated");

    Ok(Json(asset))
}

/// DELETE /api/v1/media/{id}
///
/// The stored object goes first. If storage refuses, the failure is logged
/// and the record is deleted anyway; the orphaned object is tolerated.
pub async fn delete(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    meta: RequestMeta,
) -> AppResult<Json<SuccessResponse>> {
    let asset = MediaAssetRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    if let Some(key) = asset.s3_key.as_deref().filter(|k| !k.is_empty()) {
        if let Err(e) = state.storage.delete_object(key).await {
            tracing::warn!(error = %e, media_id = id, key, "Failed to delete stored object");
        }
    }

    if !MediaAssetRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }

    audit::record(
        &state.pool,
        audit::entry(action_types::DELETE, entity_types::MEDIA_ASSET, &meta)
            .actor(admin.user_id)
            .entity_id(id)
            .meta(json!({ "s3Key": asset.s3_key })),
    )
    .await;

    tracing::info!(media_id = id, user_id = admin.user_id, "Media asset deleted");

    Ok(Json(SuccessResponse::ok()))
}
