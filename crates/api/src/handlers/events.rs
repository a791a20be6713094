//! Handlers for the `/events` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use falcone_core::audit::{action_types, entity_types};
use falcone_core::error::CoreError;
use falcone_core::types::DbId;
use falcone_db::models::event::{CreateEvent, Event, EventFilter, UpdateEvent};
use falcone_db::repositories::EventRepo;
use serde_json::json;

use super::{is_visible, published_only};
use crate::audit;
use crate::error::{AppError, AppResult};
use crate::extract::{Path, Query, RequestMeta, ValidatedJson};
use crate::middleware::auth::MaybeAuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::query::EventListParams;
use crate::response::SuccessResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Event", id })
}

/// GET /api/v1/events?upcoming=&featured=&all=
pub async fn list(
    viewer: MaybeAuthUser,
    State(state): State<AppState>,
    Query(params): Query<EventListParams>,
) -> AppResult<Json<Vec<Event>>> {
    let filter = EventFilter {
        upcoming: params.upcoming,
        featured_only: params.featured,
        published_only: published_only(&viewer, params.all),
    };
    let events = EventRepo::list(&state.pool, &filter).await?;
    Ok(Json(events))
}

/// POST /api/v1/events
pub async fn create(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    meta: RequestMeta,
    ValidatedJson(input): ValidatedJson<CreateEvent>,
) -> AppResult<(StatusCode, Json<Event>)> {
    let event = EventRepo::create(&state.pool, &input).await?;

    audit::record(
        &state.pool,
        audit::entry(action_types::CREATE, entity_types::EVENT, &meta)
            .actor(admin.user_id)
            .entity_id(event.id)
            .meta(json!({ "title": event.title })),
    )
    .await;

    tracing::info!(event_id = event.id, user_id = admin.user_id, "Event created");

    Ok((StatusCode::CREATED, Json(event)))
}

/// GET /api/v1/events/{id}
///
/// Unpublished events are reported as missing to non-admins.
pub async fn get_by_id(
    viewer: MaybeAuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Event>> {
    let event = EventRepo::find_by_id(&state.pool, id)
        .await?
        .filter(|event| is_visible(&viewer, event.is_published))
        .ok_or_else(|| not_found(id))?;
    Ok(Json(event))
}

/// PATCH /api/v1/events/{id}
///
/// An empty `endAt` clears the end time; empty URLs clear their column.
pub async fn update(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    meta: RequestMeta,
    ValidatedJson(input): ValidatedJson<UpdateEvent>,
) -> AppResult<Json<Event>> {
    let event = EventRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    audit::record(
        &state.pool,
        audit::entry(action_types::UPDATE, entity_types::EVENT, &meta)
            .actor(admin.user_id)
            .entity_id(id),
    )
    .await;

    tracing::info!(event_id = id, user_id = admin.user_id, "Event updated");

    Ok(Json(event))
}

/// DELETE /api/v1/events/{id}
pub async fn delete(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    meta: RequestMeta,
) -> AppResult<Json<SuccessResponse>> {
    if !EventRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }

    audit::record(
        &state.pool,
        audit::entry(action_types::DELETE, entity_types::EVENT, &meta)
            .actor(admin.user_id)
            .entity_id(id),
    )
    .await;

    tracing::info!(event_id = id, user_id = admin.user_id, "Event deleted");

    Ok(Json(SuccessResponse::ok()))
}
