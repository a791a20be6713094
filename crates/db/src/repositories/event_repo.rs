//! Repository for the `events` table.

use falcone_core::types::DbId;
use sqlx::PgPool;

use super::where_clause;
use crate::models::event::{CreateEvent, Event, EventFilter, UpdateEvent};

/// Column list for `events` queries.
const COLUMNS: &str = "\
    id, title, start_at, end_at, city, country, venue, description, \
    ticket_url, image_url, is_featured, is_published, created_at, updated_at";

/// Provides CRUD operations for events.
pub struct EventRepo;

impl EventRepo {
    /// Insert a validated event. Blank optional text is stored as NULL.
    pub async fn create(pool: &PgPool, input: &CreateEvent) -> Result<Event, sqlx::Error> {
        let query = format!(
            "INSERT INTO events \
                (title, start_at, end_at, city, country, venue, description, \
                 ticket_url, image_url, is_featured, is_published) \
             VALUES ($1, $2, $3, $4, $5, $6, NULLIF($7, ''), \
                     NULLIF($8, ''), NULLIF($9, ''), $10, $11) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(&input.title)
            .bind(input.start_at.value())
            .bind(input.end_at.as_ref().and_then(|v| v.value()))
            .bind(&input.city)
            .bind(&input.country)
            .bind(&input.venue)
            .bind(input.description.as_deref())
            .bind(input.ticket_url.as_deref())
            .bind(input.image_url.as_deref())
            .bind(input.is_featured)
            .bind(input.is_published)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Event>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM events WHERE id = $1");
        sqlx::query_as::<_, Event>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List events. Upcoming listings run soonest first; everything else
    /// runs most recent start first.
    pub async fn list(pool: &PgPool, filter: &EventFilter) -> Result<Vec<Event>, sqlx::Error> {
        let mut conditions = Vec::new();
        if filter.upcoming {
            conditions.push("start_at >= NOW()".to_string());
        }
        if filter.featured_only {
            conditions.push("is_featured = TRUE".to_string());
        }
        if filter.published_only {
            conditions.push("is_published = TRUE".to_string());
        }

        let direction = if filter.upcoming { "ASC" } else { "DESC" };
        let query = format!(
            "SELECT {COLUMNS} FROM events {} ORDER BY start_at {direction}, id {direction}",
            where_clause(&conditions)
        );
        sqlx::query_as::<_, Event>(&query).fetch_all(pool).await
    }

    /// The next `limit` published events.
    pub async fn list_next(pool: &PgPool, limit: i64) -> Result<Vec<Event>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM events \
             WHERE is_published = TRUE AND start_at >= NOW() \
             ORDER BY start_at ASC, id ASC LIMIT $1"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    pub async fn count_upcoming_published(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*)::BIGINT FROM events WHERE is_published = TRUE AND start_at >= NOW()",
        )
        .fetch_one(pool)
        .await
    }

    /// Patch an event. Omitted fields keep their value; an empty string
    /// clears `endAt`, `description`, `ticketUrl` and `imageUrl`.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateEvent,
    ) -> Result<Option<Event>, sqlx::Error> {
        let clear_end_at = input.end_at.as_ref().is_some_and(|v| v.is_blank());

        let query = format!(
            "UPDATE events SET \
                title = COALESCE($2, title), \
                start_at = COALESCE($3, start_at), \
                end_at = CASE WHEN $4::BOOLEAN THEN NULL ELSE COALESCE($5, end_at) END, \
                city = COALESCE($6, city), \
                country = COALESCE($7, country), \
                venue = COALESCE($8, venue), \
                description = NULLIF(COALESCE($9, description), ''), \
                ticket_url = NULLIF(COALESCE($10, ticket_url), ''), \
                image_url = NULLIF(COALESCE($11, image_url), ''), \
                is_featured = COALESCE($12, is_featured), \
                is_published = COALESCE($13, is_published) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(id)
            .bind(input.title.as_deref())
            .bind(input.start_at.as_ref().and_then(|v| v.value()))
            .bind(clear_end_at)
            .bind(input.end_at.as_ref().and_then(|v| v.value()))
            .bind(input.city.as_deref())
            .bind(input.country.as_deref())
            .bind(input.venue.as_deref())
            .bind(input.description.as_deref())
            .bind(input.ticket_url.as_deref())
            .bind(input.image_url.as_deref())
            .bind(input.is_featured)
            .bind(input.is_published)
            .fetch_optional(pool)
            .await
    }

    /// Delete an event. Returns true if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
