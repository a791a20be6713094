//! Handlers for the `/bookings` resource.
//!
//! Submitting a request is public; everything else is admin only.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use falcone_core::audit::{action_types, entity_types};
use falcone_core::enums::BookingStatus;
use falcone_core::error::CoreError;
use falcone_core::pagination;
use falcone_core::types::DbId;
use falcone_db::models::booking::{BookingRequest, CreateBookingRequest, UpdateBookingRequest};
use falcone_db::repositories::BookingRepo;
use serde::Serialize;
use serde_json::json;

use crate::audit;
use crate::error::{AppError, AppResult};
use crate::extract::{Path, Query, RequestMeta, ValidatedJson};
use crate::middleware::rbac::RequireAdmin;
use crate::query::BookingListParams;
use crate::response::{CreatedResponse, Pagination, SuccessResponse};
use crate::state::AppState;

/// Page of booking requests returned by `GET /bookings`.
#[derive(Debug, Serialize)]
pub struct BookingPage {
    pub bookings: Vec<BookingRequest>,
    pub pagination: Pagination,
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "BookingRequest",
        id,
    })
}

/// POST /api/v1/bookings
pub async fn create(
    State(state): State<AppState>,
    meta: RequestMeta,
    ValidatedJson(input): ValidatedJson<CreateBookingRequest>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    let booking = BookingRepo::create(&state.pool, &input).await?;

    audit::record(
        &state.pool,
        audit::entry(action_types::CREATE, entity_types::BOOKING_REQUEST, &meta)
            .entity_id(booking.id)
            .meta(json!({ "name": booking.name, "eventDate": booking.event_date })),
    )
    .await;

    tracing::info!(booking_id = booking.id, "Booking request received");

    Ok((StatusCode::CREATED, Json(CreatedResponse::new(booking.id))))
}

/// GET /api/v1/bookings?status=&page=&limit=
pub async fn list(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Query(params): Query<BookingListParams>,
) -> AppResult<Json<BookingPage>> {
    let status = params.status.as_deref().filter(|s| !s.is_empty());
    if let Some(status) = status {
        if BookingStatus::parse(status).is_none() {
            return Err(AppError::BadRequest(format!(
                "Invalid status '{status}'. Must be one of: {}",
                BookingStatus::ALL.join(", ")
            )));
        }
    }

    let page = pagination::clamp_page(params.page);
    let limit = pagination::clamp_limit(params.limit);
    let offset = pagination::offset(page, limit);

    let bookings = BookingRepo::list(&state.pool, status, limit, offset).await?;
    let total = BookingRepo::count(&state.pool, status).await?;

    Ok(Json(BookingPage {
        bookings,
        pagination: Pagination::new(page, limit, total),
    }))
}

/// GET /api/v1/bookings/{id}
pub async fn get_by_id(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<BookingRequest>> {
    let booking = BookingRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(booking))
}

/// PATCH /api/v1/bookings/{id}
///
/// Any status transition is accepted.
pub async fn update(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    meta: RequestMeta,
    ValidatedJson(input): ValidatedJson<UpdateBookingRequest>,
) -> AppResult<Json<BookingRequest>> {
    let booking = BookingRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    audit::record(
        &state.pool,
        audit::entry(action_types::UPDATE, entity_types::BOOKING_REQUEST, &meta)
            .actor(admin.user_id)
            .entity_id(id)
            .meta(json!({ "status": input.status, "notesChanged": input.notes.is_some() })),
    )
    .await;

    tracing::info!(
        booking_id = id,
        status = %booking.status,
        user_id = admin.user_id,
        "Booking request updated",
    );

    Ok(Json(booking))
}

/// DELETE /api/v1/bookings/{id}
pub async fn delete(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    meta: RequestMeta,
) -> AppResult<Json<SuccessResponse>> {
    if !BookingRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }

    audit::record(
        &state.pool,
        audit::entry(action_types::DELETE, entity_types::BOOKING_REQUEST, &meta)
            .actor(admin.user_id)
            .entity_id(id),
    )
    .await;

    tracing::info!(booking_id = id, user_id = admin.user_id, "Booking request deleted");

    Ok(Json(SuccessResponse::ok()))
}
