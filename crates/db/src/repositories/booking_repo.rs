//! Repository for the `booking_requests` table.

use falcone_core::enums::BookingStatus;
use falcone_core::types::DbId;
use sqlx::PgPool;

use crate::models::booking::{BookingRequest, CreateBookingRequest, UpdateBookingRequest};

/// Column list for `booking_requests` queries.
const COLUMNS: &str = "\
    id, name, email, phone, event_date, location, venue, \
    budget_range, event_type, message, status, notes, \
    created_at, updated_at";

/// Provides CRUD operations for booking requests.
pub struct BookingRepo;

impl BookingRepo {
    /// Store a public booking request with status `NEW`.
    ///
    /// `input` must have passed validation; an unparsed event date violates
    /// the column's NOT NULL constraint.
    pub async fn create(
        pool: &PgPool,
        input: &CreateBookingRequest,
    ) -> Result<BookingRequest, sqlx::Error> {
        let query = format!(
            "INSERT INTO booking_requests \
                (name, email, phone, event_date, location, venue, \
                 budget_range, event_type, message, status) \
             VALUES ($1, $2, NULLIF($3, ''), $4, $5, NULLIF($6, ''), \
                     NULLIF($7, ''), NULLIF($8, ''), $9, $10) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BookingRequest>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(input.phone.as_deref())
            .bind(input.event_date.value())
            .bind(&input.location)
            .bind(input.venue.as_deref())
            .bind(input.budget_range.as_deref())
            .bind(input.event_type.as_deref())
            .bind(&input.message)
            .bind(BookingStatus::New.as_str())
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<BookingRequest>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM booking_requests WHERE id = $1");
        sqlx::query_as::<_, BookingRequest>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// One page of requests, newest first, optionally filtered by status.
    pub async fn list(
        pool: &PgPool,
        status: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<BookingRequest>, sqlx::Error> {
        let query = match status {
            Some(_) => format!(
                "SELECT {COLUMNS} FROM booking_requests WHERE status = $1 \
                 ORDER BY created_at DESC, id DESC LIMIT $2 OFFSET $3"
            ),
            None => format!(
                "SELECT {COLUMNS} FROM booking_requests \
                 ORDER BY created_at DESC, id DESC LIMIT $1 OFFSET $2"
            ),
        };

        let mut q = sqlx::query_as::<_, BookingRequest>(&query);
        if let Some(status) = status {
            q = q.bind(status);
        }
        q.bind(limit).bind(offset).fetch_all(pool).await
    }

    /// Total rows matching the same filter as [`BookingRepo::list`].
    pub async fn count(pool: &PgPool, status: Option<&str>) -> Result<i64, sqlx::Error> {
        match status {
            Some(status) => Self::count_by_status(pool, status).await,
            None => {
                sqlx::query_scalar::<_, i64>("SELECT COUNT(*)::BIGINT FROM booking_requests")
                    .fetch_one(pool)
                    .await
            }
        }
    }

    pub async fn count_by_status(pool: &PgPool, status: &str) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*)::BIGINT FROM booking_requests WHERE status = $1",
        )
        .bind(status)
        .fetch_one(pool)
        .await
    }

    /// The `limit` most recently received requests.
    pub async fn list_recent(
        pool: &PgPool,
        limit: i64,
    ) -> Result<Vec<BookingRequest>, sqlx::Error> {
        Self::list(pool, None, limit, 0).await
    }

    /// Change status and/or notes. Any status transition is allowed.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateBookingRequest,
    ) -> Result<Option<BookingRequest>, sqlx::Error> {
        let query = format!(
            "UPDATE booking_requests SET \
                status = COALESCE($2, status), \
                notes = COALESCE($3, notes) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BookingRequest>(&query)
            .bind(id)
            .bind(input.status.as_deref())
            .bind(input.notes.as_deref())
            .fetch_optional(pool)
            .await
    }

    /// Delete a request. Returns true if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM booking_requests WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
