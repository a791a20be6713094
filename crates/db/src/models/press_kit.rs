//! Press kit singleton model and DTO.

use falcone_core::types::{DbId, Timestamp};
use falcone_core::validation;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use super::social_links::SocialLinks;

/// A row from the `press_kits` table. Only the `main` slug is served.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PressKit {
    pub id: DbId,
    pub slug: String,
    pub bio_short: String,
    pub bio_long: Option<String>,
    pub tech_rider_url: Option<String>,
    pub press_photos_urls: Vec<String>,
    pub social_links: Option<serde_json::Value>,
    pub achievements: Vec<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Full replacement of the press kit.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpsertPressKit {
    #[serde(default)]
    #[validate(length(min = 50, message = "Short bio must be at least 50 characters"))]
    pub bio_short: String,
    pub bio_long: Option<String>,
    #[validate(custom(function = "validation::url_or_empty"))]
    pub tech_rider_url: Option<String>,
    #[serde(default)]
    pub press_photos_urls: Vec<String>,
    #[validate(nested)]
    pub social_links: Option<SocialLinks>,
    #[serde(default)]
    pub achievements: Vec<String>,
}
