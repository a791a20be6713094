//! Handlers for the `/contact` resource.
//!
//! Sending a message is public and leaves no audit entry; reading and
//! triaging messages is admin only.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use falcone_core::audit::{action_types, entity_types};
use falcone_core::error::CoreError;
use falcone_core::types::DbId;
use falcone_db::models::contact_message::{
    ContactMessage, CreateContactMessage, UpdateContactMessage,
};
use falcone_db::repositories::ContactMessageRepo;
use serde_json::json;

use crate::audit;
use crate::error::{AppError, AppResult};
use crate::extract::{Path, Query, RequestMeta, ValidatedJson};
use crate::middleware::rbac::RequireAdmin;
use crate::query::ContactListParams;
use crate::response::{CreatedResponse, SuccessResponse};
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "ContactMessage",
        id,
    })
}

/// POST /api/v1/contact
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateContactMessage>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    let message = ContactMessageRepo::create(&state.pool, &input).await?;
    tracing::info!(message_id = message.id, "Contact message received");
    Ok((StatusCode::CREATED, Json(CreatedResponse::new(message.id))))
}

/// GET /api/v1/contact?unread=
pub async fn list(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Query(params): Query<ContactListParams>,
) -> AppResult<Json<Vec<ContactMessage>>> {
    let messages = ContactMessageRepo::list(&state.pool, params.unread).await?;
    Ok(Json(messages))
}

/// GET /api/v1/contact/{id}
pub async fn get_by_id(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ContactMessage>> {
    let message = ContactMessageRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(message))
}

/// PATCH /api/v1/contact/{id}
pub async fn update(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    meta: RequestMeta,
    ValidatedJson(input): ValidatedJson<UpdateContactMessage>,
) -> AppResult<Json<ContactMessage>> {
    let message = ContactMessageRepo::set_read(&state.pool, id, input.is_read)
        .await?
        .ok_or_else(|| not_found(id))?;

    audit::record(
        &state.pool,
        audit::entry(action_types::UPDATE, entity_types::CONTACT_MESSAGE, &meta)
            .actor(admin.user_id)
            .entity_id(id)
            .meta(json!({ "isRead": input.is_read })),
    )
    .await;

    tracing::info!(
        message_id = id,
        user_id = admin.user_id,
        is_read = input.is_read,
        "Contact message updated",
    );

    Ok(Json(message))
}

/// DELETE /api/v1/contact/{id}
pub async fn delete(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    meta: RequestMeta,
) -> AppResult<Json<SuccessResponse>> {
    if !ContactMessageRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }

    audit::record(
        &state.pool,
        audit::entry(action_types::DELETE, entity_types::CONTACT_MESSAGE, &meta)
            .actor(admin.user_id)
            .entity_id(id),
    )
    .await;

    tracing::info!(message_id = id, user_id = admin.user_id, "Contact message deleted");

    Ok(Json(SuccessResponse::ok()))
}
