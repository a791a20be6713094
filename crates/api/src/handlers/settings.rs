//! Handlers for the `/settings` singleton.

use axum::extract::State;
use axum::Json;
use falcone_core::audit::{action_types, entity_types};
use falcone_core::error::CoreError;
use falcone_core::types::MAIN_SLUG;
use falcone_db::models::site_settings::{SiteSettings, UpsertSiteSettings};
use falcone_db::repositories::SiteSettingsRepo;
use serde_json::json;

use crate::audit;
use crate::error::{AppError, AppResult};
use crate::extract::{RequestMeta, ValidatedJson};
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// GET /api/v1/settings
pub async fn get(State(state): State<AppState>) -> AppResult<Json<SiteSettings>> {
    let settings = SiteSettingsRepo::find_by_slug(&state.pool, MAIN_SLUG)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFoundBySlug {
                entity: "SiteSettings",
                slug: MAIN_SLUG.to_string(),
            })
        })?;
    Ok(Json(settings))
}

/// PUT /api/v1/settings
pub async fn upsert(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    meta: RequestMeta,
    ValidatedJson(input): ValidatedJson<UpsertSiteSettings>,
) -> AppResult<Json<SiteSettings>> {
    let settings = SiteSettingsRepo::upsert(&state.pool, MAIN_SLUG, &input).await?;

    audit::record(
        &state.pool,
        audit::entry(action_types::UPDATE, entity_types::SITE_SETTINGS, &meta)
            .actor(admin.user_id)
            .entity_id(settings.id)
            .meta(json!({
                "maintenanceMode": settings.maintenance_mode,
                "bookingEnabled": settings.booking_enabled,
            })),
    )
    .await;

    tracing::info!(
        settings_id = settings.id,
        user_id = admin.user_id,
        maintenance_mode = settings.maintenance_mode,
        "Site settings saved",
    );

    Ok(Json(settings))
}
