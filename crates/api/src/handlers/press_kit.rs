//! Handlers for the `/press-kit` singleton.

use axum::extract::State;
use axum::Json;
use falcone_core::audit::{action_types, entity_types};
use falcone_core::error::CoreError;
use falcone_core::types::MAIN_SLUG;
use falcone_db::models::press_kit::{PressKit, UpsertPressKit};
use falcone_db::repositories::PressKitRepo;

use crate::audit;
use crate::error::{AppError, AppResult};
use crate::extract::{RequestMeta, ValidatedJson};
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// GET /api/v1/press-kit
pub async fn get(State(state): State<AppState>) -> AppResult<Json<PressKit>> {
    let kit = PressKitRepo::find_by_slug(&state.pool, MAIN_SLUG)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFoundBySlug {
                entity: "PressKit",
                slug: MAIN_SLUG.to_string(),
            })
        })?;
    Ok(Json(kit))
}

/// PUT /api/v1/press-kit
///
/// Creates the press kit on first save, replaces it afterwards.
pub async fn upsert(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    meta: RequestMeta,
    ValidatedJson(input): ValidatedJson<UpsertPressKit>,
) -> AppResult<Json<PressKit>> {
    let kit = PressKitRepo::upsert(&state.pool, MAIN_SLUG, &input).await?;

    audit::record(
        &state.pool,
        audit::entry(action_types::UPDATE, entity_types::PRESS_KIT, &meta)
            .actor(admin.user_id)
            .entity_id(kit.id),
    )
    .await;

    tracing::info!(press_kit_id = kit.id, user_id = admin.user_id, "Press kit saved");

    Ok(Json(kit))
}
