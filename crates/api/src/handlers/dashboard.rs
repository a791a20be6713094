//! Handler for the admin dashboard summary.

use axum::extract::State;
use axum::Json;
use falcone_core::enums::BookingStatus;
use falcone_db::models::booking::BookingRequest;
use falcone_db::models::event::Event;
use falcone_db::repositories::{
    BookingRepo, ContactMessageRepo, EventRepo, MediaAssetRepo, MixRepo,
};
use serde::Serialize;

use crate::error::AppResult;
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

const RECENT_BOOKINGS: i64 = 5;
const NEXT_EVENTS: i64 = 3;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    /// Booking requests still in `NEW`.
    pub new_bookings: i64,
    /// Published events that have not started yet.
    pub upcoming_events: i64,
    pub published_mixes: i64,
    pub total_media: i64,
    pub unread_messages: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub stats: DashboardStats,
    pub recent_bookings: Vec<BookingRequest>,
    pub next_events: Vec<Event>,
}

/// GET /api/v1/dashboard
pub async fn summary(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<DashboardResponse>> {
    let pool = &state.pool;

    let (new_bookings, upcoming_events, published_mixes, total_media, unread_messages) = tokio::try_join!(
        BookingRepo::count_by_status(pool, BookingStatus::New.as_str()),
        EventRepo::count_upcoming_published(pool),
        MixRepo::count_published(pool),
        MediaAssetRepo::count(pool),
        ContactMessageRepo::count_unread(pool),
    )?;

    let (recent_bookings, next_events) = tokio::try_join!(
        BookingRepo::list_recent(pool, RECENT_BOOKINGS),
        EventRepo::list_next(pool, NEXT_EVENTS),
    )?;

    Ok(Json(DashboardResponse {
        stats: DashboardStats {
            new_bookings,
            upcoming_events,
            published_mixes,
            total_media,
            unread_messages,
        },
        recent_bookings,
        next_events,
    }))
}
