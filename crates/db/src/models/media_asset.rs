//! Gallery media asset models and DTOs.

use falcone_core::types::{DbId, Timestamp};
use falcone_core::validation;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `media_assets` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaAsset {
    pub id: DbId,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub media_type: String,
    pub title: String,
    pub description: Option<String>,
    pub url: String,
    pub thumbnail_url: Option<String>,
    /// Object key of the uploaded file, if the asset lives in our bucket.
    pub s3_key: Option<String>,
    pub mime_type: Option<String>,
    pub file_size: Option<i64>,
    pub tags: Vec<String>,
    pub decade: Option<String>,
    pub category: Option<String>,
    pub is_featured: bool,
    pub is_published: bool,
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for registering a media asset (usually right after an upload).
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateMediaAsset {
    #[serde(rename = "type", default)]
    #[validate(custom(function = "validation::media_type"))]
    pub media_type: String,
    #[serde(default)]
    #[validate(length(min = 2, message = "Title must be at least 2 characters"))]
    pub title: String,
    pub description: Option<String>,
    #[serde(default)]
    #[validate(url(message = "Invalid URL"))]
    pub url: String,
    #[validate(custom(function = "validation::url_or_empty"))]
    pub thumbnail_url: Option<String>,
    pub s3_key: Option<String>,
    pub mime_type: Option<String>,
    #[validate(range(min = 0, message = "File size must not be negative"))]
    pub file_size: Option<i64>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[validate(custom(function = "validation::decade"))]
    pub decade: Option<String>,
    pub category: Option<String>,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default = "super::default_true")]
    pub is_published: bool,
    #[serde(default)]
    pub sort_order: i32,
}

/// DTO for patching a media asset. The object key is fixed at creation.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMediaAsset {
    #[serde(rename = "type")]
    #[validate(custom(function = "validation::media_type"))]
    pub media_type: Option<String>,
    #[validate(length(min = 2, message = "Title must be at least 2 characters"))]
    pub title: Option<String>,
    pub description: Option<String>,
    #[validate(url(message = "Invalid URL"))]
    pub url: Option<String>,
    #[validate(custom(function = "validation::url_or_empty"))]
    pub thumbnail_url: Option<String>,
    pub tags: Option<Vec<String>>,
    /// An empty string clears the decade.
    #[validate(custom(function = "validation::decade_or_empty"))]
    pub decade: Option<String>,
    pub category: Option<String>,
    pub is_featured: Option<bool>,
    pub is_published: Option<bool>,
    pub sort_order: Option<i32>,
}

/// Listing filter for [`MediaAssetRepo::list`](crate::repositories::MediaAssetRepo::list).
#[derive(Debug, Clone, Default)]
pub struct MediaFilter {
    pub media_type: Option<String>,
    pub decade: Option<String>,
    pub category: Option<String>,
    pub featured_only: bool,
    pub published_only: bool,
}
