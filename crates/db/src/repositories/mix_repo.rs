//! Repository for the `mixes` table.

use falcone_core::types::DbId;
use sqlx::PgPool;

use super::where_clause;
use crate::models::mix::{CreateMix, Mix, MixFilter, UpdateMix};

/// Column list for `mixes` queries.
const COLUMNS: &str = "\
    id, title, description, embed_url, embed_type, cover_url, decade, \
    duration, is_featured, is_published, sort_order, created_at, updated_at";

/// Listing order: featured first, then manual order, then newest.
const ORDER_BY: &str = "ORDER BY is_featured DESC, sort_order ASC, created_at DESC, id DESC";

/// Provides CRUD operations for mixes.
pub struct MixRepo;

impl MixRepo {
    pub async fn create(pool: &PgPool, input: &CreateMix) -> Result<Mix, sqlx::Error> {
        let query = format!(
            "INSERT INTO mixes \
                (title, description, embed_url, embed_type, cover_url, decade, \
                 duration, is_featured, is_published, sort_order) \
             VALUES ($1, NULLIF($2, ''), $3, $4, NULLIF($5, ''), $6, $7, $8, $9, $10) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Mix>(&query)
            .bind(&input.title)
            .bind(input.description.as_deref())
            .bind(&input.embed_url)
            .bind(&input.embed_type)
            .bind(input.cover_url.as_deref())
            .bind(input.decade.as_deref())
            .bind(input.duration)
            .bind(input.is_featured)
            .bind(input.is_published)
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Mix>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM mixes WHERE id = $1");
        sqlx::query_as::<_, Mix>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool, filter: &MixFilter) -> Result<Vec<Mix>, sqlx::Error> {
        let mut conditions = Vec::new();
        if filter.decade.is_some() {
            conditions.push("decade = $1".to_string());
        }
        if filter.featured_only {
            conditions.push("is_featured = TRUE".to_string());
        }
        if filter.published_only {
            conditions.push("is_published = TRUE".to_string());
        }

        let query = format!(
            "SELECT {COLUMNS} FROM mixes {} {ORDER_BY}",
            where_clause(&conditions)
        );
        let mut q = sqlx::query_as::<_, Mix>(&query);
        if let Some(ref decade) = filter.decade {
            q = q.bind(decade);
        }
        q.fetch_all(pool).await
    }

    pub async fn count_published(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*)::BIGINT FROM mixes WHERE is_published = TRUE")
            .fetch_one(pool)
            .await
    }

    /// Patch a mix. An empty string clears `description`, `coverUrl` and `decade`.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMix,
    ) -> Result<Option<Mix>, sqlx::Error> {
        let query = format!(
            "UPDATE mixes SET \
                title = COALESCE($2, title), \
                description = NULLIF(COALESCE($3, description), ''), \
                embed_url = COALESCE($4, embed_url), \
                embed_type = COALESCE($5, embed_type), \
                cover_url = NULLIF(COALESCE($6, cover_url), ''), \
                decade = NULLIF(COALESCE($7, decade), ''), \
                duration = COALESCE($8, duration), \
                is_featured = COALESCE($9, is_featured), \
                sort_order = COALESCE($10, sort_order), \
                is_published = COALESCE($11, is_published) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Mix>(&query)
            .bind(id)
            .bind(input.title.as_deref())
            .bind(input.description.as_deref())
            .bind(input.embed_url.as_deref())
            .bind(input.embed_type.as_deref())
            .bind(input.cover_url.as_deref())
            .bind(input.decade.as_deref())
            .bind(input.duration)
            .bind(input.is_featured)
            .bind(input.sort_order)
            .bind(input.is_published)
            .fetch_optional(pool)
            .await
    }

    /// Delete a mix. Returns true if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM mixes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
