//! Site settings singleton model and DTO.

use falcone_core::types::{DbId, Timestamp};
use falcone_core::validation;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use super::social_links::SocialLinks;

/// A row from the `site_settings` table. Only the `main` slug is served.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSettings {
    pub id: DbId,
    pub slug: String,
    pub site_name: String,
    pub tagline: Option<String>,
    pub hero_video_url: Option<String>,
    pub hero_image_url: Option<String>,
    pub contact_email: Option<String>,
    pub social_links: Option<serde_json::Value>,
    pub analytics_id: Option<String>,
    pub maintenance_mode: bool,
    pub booking_enabled: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Full replacement of the site settings.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpsertSiteSettings {
    #[serde(default)]
    #[validate(length(min = 1, message = "Site name is required"))]
    pub site_name: String,
    pub tagline: Option<String>,
    #[validate(custom(function = "validation::url_or_empty"))]
    pub hero_video_url: Option<String>,
    #[validate(custom(function = "validation::url_or_empty"))]
    pub hero_image_url: Option<String>,
    #[validate(custom(function = "validation::email_or_empty"))]
    pub contact_email: Option<String>,
    #[validate(nested)]
    pub social_links: Option<SocialLinks>,
    pub analytics_id: Option<String>,
    #[serde(default)]
    pub maintenance_mode: bool,
    #[serde(default = "super::default_true")]
    pub booking_enabled: bool,
}

impl UpsertSiteSettings {
    /// Settings written by the seed binary when none exist yet.
    pub fn defaults(site_name: impl Into<String>) -> Self {
        Self {
            site_name: site_name.into(),
            tagline: None,
            hero_video_url: None,
            hero_image_url: None,
            contact_email: None,
            social_links: None,
            analytics_id: None,
            maintenance_mode: false,
            booking_enabled: true,
        }
    }
}
