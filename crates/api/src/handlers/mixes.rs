//! Handlers for the `/mixes` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use falcone_core::audit::{action_types, entity_types};
use falcone_core::enums::Decade;
use falcone_core::error::CoreError;
use falcone_core::types::DbId;
use falcone_db::models::mix::{CreateMix, Mix, MixFilter, UpdateMix};
use falcone_db::repositories::MixRepo;
use serde_json::json;

use super::{is_visible, published_only};
use crate::audit;
use crate::error::{AppError, AppResult};
use crate::extract::{Path, Query, RequestMeta, ValidatedJson};
use crate::middleware::auth::MaybeAuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::query::MixListParams;
use crate::response::SuccessResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Mix", id })
}

/// Reject a `decade` query value outside the vocabulary.
pub(crate) fn check_decade(decade: Option<&str>) -> AppResult<()> {
    match decade {
        Some(d) if Decade::parse(d).is_none() => Err(AppError::BadRequest(format!(
            "Invalid decade '{d}'. Must be one of: {}",
            Decade::ALL.join(", ")
        ))),
        _ => Ok(()),
    }
}

/// GET /api/v1/mixes?decade=&featured=&all=
///
/// Featured mixes first, then by sort order, newest first within ties.
pub async fn list(
    viewer: MaybeAuthUser,
    State(state): State<AppState>,
    Query(params): Query<MixListParams>,
) -> AppResult<Json<Vec<Mix>>> {
    let decade = params.decade.filter(|d| !d.is_empty());
    check_decade(decade.as_deref())?;

    let filter = MixFilter {
        decade,
        featured_only: params.featured,
        published_only: published_only(&viewer, params.all),
    };
    let mixes = MixRepo::list(&state.pool, &filter).await?;
    Ok(Json(mixes))
}

/// POST /api/v1/mixes
pub async fn create(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    meta: RequestMeta,
    ValidatedJson(input): ValidatedJson<CreateMix>,
) -> AppResult<(StatusCode, Json<Mix>)> {
    let mix = MixRepo::create(&state.pool, &input).await?;

    audit::record(
        &state.pool,
        audit::entry(action_types::CREATE, entity_types::MIX, &meta)
            .actor(admin.user_id)
            .entity_id(mix.id)
            .meta(json!({ "title": mix.title, "embedType": mix.embed_type })),
    )
    .await;

    tracing::info!(mix_id = mix.id, user_id = admin.user_id, "Mix created");

    Ok((StatusCode::CREATED, Json(mix)))
}

/// GET /api/v1/mixes/{id}
pub async fn get_by_id(
    viewer: MaybeAuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Mix>> {
    let mix = MixRepo::find_by_id(&state.pool, id)
        .await?
        .filter(|mix| is_visible(&viewer, mix.is_published))
        .ok_or_else(|| not_found(id))?;
    Ok(Json(mix))
}

/// PATCH /api/v1/mixes/{id}
pub async fn update(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    meta: RequestMeta,
    ValidatedJson(input): ValidatedJson<UpdateMix>,
) -> AppResult<Json<Mix>> {
    let mix = MixRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    audit::record(
        &state.pool,
        audit::entry(action_types::UPDATE, entity_types::MIX, &meta)
            .actor(admin.user_id)
            .entity_id(id),
    )
    .await;

    tracing::info!(mix_id = id, user_id = admin.user_id, "Mix updated");

    Ok(Json(mix))
}

/// DELETE /api/v1/mixes/{id}
pub async fn delete(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    meta: RequestMeta,
) -> AppResult<Json<SuccessResponse>> {
    if !MixRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }

    audit::record(
        &state.pool,
        audit::entry(action_types::DELETE, entity_types::MIX, &meta)
            .actor(admin.user_id)
            .entity_id(id),
    )
    .await;

    tracing::info!(mix_id = id, user_id = admin.user_id, "Mix deleted");

    Ok(Json(SuccessResponse::ok()))
}
