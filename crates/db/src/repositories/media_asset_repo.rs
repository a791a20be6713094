//! Repository for the `media_assets` table.

use falcone_core::types::DbId;
use sqlx::PgPool;

use super::where_clause;
use crate::models::media_asset::{CreateMediaAsset, MediaAsset, MediaFilter, UpdateMediaAsset};

/// Column list for `media_assets` queries.
const COLUMNS: &str = "\
    id, type, title, description, url, thumbnail_url, s3_key, mime_type, \
    file_size, tags, decade, category, is_featured, is_published, sort_order, \
    created_at, updated_at";

/// Provides CRUD operations for gallery media.
pub struct MediaAssetRepo;

impl MediaAssetRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateMediaAsset,
    ) -> Result<MediaAsset, sqlx::Error> {
        let query = format!(
            "INSERT INTO media_assets \
                (type, title, description, url, thumbnail_url, s3_key, mime_type, \
                 file_size, tags, decade, category, is_featured, is_published, sort_order) \
             VALUES ($1, $2, NULLIF($3, ''), $4, NULLIF($5, ''), NULLIF($6, ''), \
                     NULLIF($7, ''), $8, $9, $10, NULLIF($11, ''), $12, $13, $14) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MediaAsset>(&query)
            .bind(&input.media_type)
            .bind(&input.title)
            .bind(input.description.as_deref())
            .bind(&input.url)
            .bind(input.thumbnail_url.as_deref())
            .bind(input.s3_key.as_deref())
            .bind(input.mime_type.as_deref())
            .bind(input.file_size)
            .bind(&input.tags)
            .bind(input.decade.as_deref())
            .bind(input.category.as_deref())
            .bind(input.is_featured)
            .bind(input.is_published)
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<MediaAsset>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM media_assets WHERE id = $1");
        sqlx::query_as::<_, MediaAsset>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List assets in manual order, newest first within equal order.
    pub async fn list(
        pool: &PgPool,
        filter: &MediaFilter,
    ) -> Result<Vec<MediaAsset>, sqlx::Error> {
        let mut conditions = Vec::new();
        let mut binds: Vec<&str> = Vec::new();

        let equals = [
            ("type", filter.media_type.as_deref()),
            ("decade", filter.decade.as_deref()),
            ("category", filter.category.as_deref()),
        ];
        for (column, value) in equals {
            if let Some(value) = value {
                binds.push(value);
                conditions.push(format!("{column} = ${}", binds.len()));
            }
        }
        if filter.featured_only {
            conditions.push("is_featured = TRUE".to_string());
        }
        if filter.published_only {
            conditions.push("is_published = TRUE".to_string());
        }

        let query = format!(
            "SELECT {COLUMNS} FROM media_assets {} \
             ORDER BY sort_order ASC, created_at DESC, id DESC",
            where_clause(&conditions)
        );
        let mut q = sqlx::query_as::<_, MediaAsset>(&query);
        for value in binds {
            q = q.bind(value);
        }
        q.fetch_all(pool).await
    }

    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*)::BIGINT FROM media_assets")
            .fetch_one(pool)
            .await
    }

    /// Patch an asset. An empty string clears the nullable text columns.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMediaAsset,
    ) -> Result<Option<MediaAsset>, sqlx::Error> {
        let query = format!(
            "UPDATE media_assets SET \
                type = COALESCE($2, type), \
                title = COALESCE($3, title), \
                description = NULLIF(COALESCE($4, description), ''), \
                url = COALESCE($5, url), \
                thumbnail_url = NULLIF(COALESCE($6, thumbnail_url), ''), \
                tags = COALESCE($7, tags), \
                decade = NULLIF(COALESCE($8, decade), ''), \
                category = NULLIF(COALESCE($9, category), ''), \
                is_featured = COALESCE($10, is_featured), \
                is_published = COALESCE($11, is_published), \
                sort_order = COALESCE($12, sort_order) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MediaAsset>(&query)
            .bind(id)
            .bind(input.media_type.as_deref())
            .bind(input.title.as_deref())
            .bind(input.description.as_deref())
            .bind(input.url.as_deref())
            .bind(input.thumbnail_url.as_deref())
            .bind(input.tags.as_ref())
            .bind(input.decade.as_deref())
            .bind(input.category.as_deref())
            .bind(input.is_featured)
            .bind(input.is_published)
            .bind(input.sort_order)
            .fetch_optional(pool)
            .await
    }

    /// Delete an asset row. Returns true if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM media_assets WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
