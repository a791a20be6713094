//! Repository for the `site_settings` singleton table.

use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::site_settings::{SiteSettings, UpsertSiteSettings};

/// Column list for `site_settings` queries.
const COLUMNS: &str = "\
    id, slug, site_name, tagline, hero_video_url, hero_image_url, \
    contact_email, social_links, analytics_id, maintenance_mode, \
    booking_enabled, created_at, updated_at";

/// Reads and replaces the site settings addressed by slug.
pub struct SiteSettingsRepo;

impl SiteSettingsRepo {
    pub async fn find_by_slug(
        pool: &PgPool,
        slug: &str,
    ) -> Result<Option<SiteSettings>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM site_settings WHERE slug = $1");
        sqlx::query_as::<_, SiteSettings>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// Insert or fully replace the row for `slug`. Idempotent.
    pub async fn upsert(
        pool: &PgPool,
        slug: &str,
        input: &UpsertSiteSettings,
    ) -> Result<SiteSettings, sqlx::Error> {
        let query = format!(
            "INSERT INTO site_settings \
                (slug, site_name, tagline, hero_video_url, hero_image_url, contact_email, \
                 social_links, analytics_id, maintenance_mode, booking_enabled) \
             VALUES ($1, $2, NULLIF($3, ''), NULLIF($4, ''), NULLIF($5, ''), NULLIF($6, ''), \
                     $7, NULLIF($8, ''), $9, $10) \
             ON CONFLICT (slug) DO UPDATE SET \
                site_name = EXCLUDED.site_name, \
                tagline = EXCLUDED.tagline, \
                hero_video_url = EXCLUDED.hero_video_url, \
                hero_image_url = EXCLUDED.hero_image_url, \
                contact_email = EXCLUDED.contact_email, \
                social_links = EXCLUDED.social_links, \
                analytics_id = EXCLUDED.analytics_id, \
                maintenance_mode = EXCLUDED.maintenance_mode, \
                booking_enabled = EXCLUDED.booking_enabled \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SiteSettings>(&query)
            .bind(slug)
            .bind(&input.site_name)
            .bind(input.tagline.as_deref())
            .bind(input.hero_video_url.as_deref())
            .bind(input.hero_image_url.as_deref())
            .bind(input.contact_email.as_deref())
            .bind(input.social_links.as_ref().map(Json))
            .bind(input.analytics_id.as_deref())
            .bind(input.maintenance_mode)
            .bind(input.booking_enabled)
            .fetch_one(pool)
            .await
    }
}
