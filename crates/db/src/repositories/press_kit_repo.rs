//! Repository for the `press_kits` singleton table.

use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::press_kit::{PressKit, UpsertPressKit};

/// Column list for `press_kits` queries.
const COLUMNS: &str = "\
    id, slug, bio_short, bio_long, tech_rider_url, press_photos_urls, \
    social_links, achievements, created_at, updated_at";

/// Reads and replaces the press kit addressed by slug.
pub struct PressKitRepo;

impl PressKitRepo {
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<PressKit>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM press_kits WHERE slug = $1");
        sqlx::query_as::<_, PressKit>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// Insert or fully replace the row for `slug`. Idempotent.
    pub async fn upsert(
        pool: &PgPool,
        slug: &str,
        input: &UpsertPressKit,
    ) -> Result<PressKit, sqlx::Error> {
        let query = format!(
            "INSERT INTO press_kits \
                (slug, bio_short, bio_long, tech_rider_url, press_photos_urls, \
                 social_links, achievements) \
             VALUES ($1, $2, NULLIF($3, ''), NULLIF($4, ''), $5, $6, $7) \
             ON CONFLICT (slug) DO UPDATE SET \
                bio_short = EXCLUDED.bio_short, \
                bio_long = EXCLUDED.bio_long, \
                tech_rider_url = EXCLUDED.tech_rider_url, \
                press_photos_urls = EXCLUDED.press_photos_urls, \
                social_links = EXCLUDED.social_links, \
                achievements = EXCLUDED.achievements \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PressKit>(&query)
            .bind(slug)
            .bind(&input.bio_short)
            .bind(input.bio_long.as_deref())
            .bind(input.tech_rider_url.as_deref())
            .bind(&input.press_photos_urls)
            .bind(input.social_links.as_ref().map(Json))
            .bind(&input.achievements)
            .fetch_one(pool)
            .await
    }
}
