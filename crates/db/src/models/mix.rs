//! Mix (embedded DJ set) models and DTOs.

use falcone_core::types::{DbId, Timestamp};
use falcone_core::validation;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `mixes` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Mix {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub embed_url: String,
    pub embed_type: String,
    pub cover_url: Option<String>,
    pub decade: Option<String>,
    /// Length in seconds.
    pub duration: Option<i32>,
    pub is_featured: bool,
    pub is_published: bool,
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a mix.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateMix {
    #[serde(default)]
    #[validate(length(min = 2, message = "Title must be at least 2 characters"))]
    pub title: String,
    pub description: Option<String>,
    #[serde(default)]
    #[validate(url(message = "Invalid URL"))]
    pub embed_url: String,
    #[serde(default)]
    #[validate(custom(function = "validation::embed_type"))]
    pub embed_type: String,
    #[validate(custom(function = "validation::url_or_empty"))]
    pub cover_url: Option<String>,
    #[validate(custom(function = "validation::decade"))]
    pub decade: Option<String>,
    #[validate(range(min = 0, message = "Duration must not be negative"))]
    pub duration: Option<i32>,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default = "super::default_true")]
    pub is_published: bool,
}

/// DTO for patching a mix.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMix {
    #[validate(length(min = 2, message = "Title must be at least 2 characters"))]
    pub title: Option<String>,
    pub description: Option<String>,
    #[validate(url(message = "Invalid URL"))]
    pub embed_url: Option<String>,
    #[validate(custom(function = "validation::embed_type"))]
    pub embed_type: Option<String>,
    #[validate(custom(function = "validation::url_or_empty"))]
    pub cover_url: Option<String>,
    /// An empty string clears the decade.
    #[validate(custom(function = "validation::decade_or_empty"))]
    pub decade: Option<String>,
    #[validate(range(min = 0, message = "Duration must not be negative"))]
    pub duration: Option<i32>,
    pub is_featured: Option<bool>,
    pub sort_order: Option<i32>,
    pub is_published: Option<bool>,
}

/// Listing filter for [`MixRepo::list`](crate::repositories::MixRepo::list).
#[derive(Debug, Clone, Default)]
pub struct MixFilter {
    pub decade: Option<String>,
    pub featured_only: bool,
    pub published_only: bool,
}
