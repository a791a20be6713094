//! Event (gig) models and DTOs.

use falcone_core::datetime::DateTimeInput;
use falcone_core::types::{DbId, Timestamp};
use falcone_core::validation;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `events` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: DbId,
    pub title: String,
    pub start_at: Timestamp,
    pub end_at: Option<Timestamp>,
    pub city: String,
    pub country: String,
    pub venue: String,
    pub description: Option<String>,
    pub ticket_url: Option<String>,
    pub image_url: Option<String>,
    pub is_featured: bool,
    pub is_published: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating an event.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateEvent {
    #[serde(default)]
    #[validate(length(min = 2, message = "Title must be at least 2 characters"))]
    pub title: String,
    #[serde(default)]
    #[validate(custom(function = "validation::datetime"))]
    pub start_at: DateTimeInput,
    #[validate(custom(function = "validation::datetime_or_empty"))]
    pub end_at: Option<DateTimeInput>,
    #[serde(default)]
    #[validate(length(min = 2, message = "City must be at least 2 characters"))]
    pub city: String,
    #[serde(default)]
    #[validate(length(min = 2, message = "Country must be at least 2 characters"))]
    pub country: String,
    #[serde(default)]
    #[validate(length(min = 2, message = "Venue must be at least 2 characters"))]
    pub venue: String,
    pub description: Option<String>,
    #[validate(custom(function = "validation::url_or_empty"))]
    pub ticket_url: Option<String>,
    #[validate(custom(function = "validation::url_or_empty"))]
    pub image_url: Option<String>,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default = "super::default_true")]
    pub is_published: bool,
}

/// DTO for patching an event. `endAt: ""` clears the end time.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEvent {
    #[validate(length(min = 2, message = "Title must be at least 2 characters"))]
    pub title: Option<String>,
    #[validate(custom(function = "validation::datetime"))]
    pub start_at: Option<DateTimeInput>,
    #[validate(custom(function = "validation::datetime_or_empty"))]
    pub end_at: Option<DateTimeInput>,
    #[validate(length(min = 2, message = "City must be at least 2 characters"))]
    pub city: Option<String>,
    #[validate(length(min = 2, message = "Country must be at least 2 characters"))]
    pub country: Option<String>,
    #[validate(length(min = 2, message = "Venue must be at least 2 characters"))]
    pub venue: Option<String>,
    pub description: Option<String>,
    #[validate(custom(function = "validation::url_or_empty"))]
    pub ticket_url: Option<String>,
    #[validate(custom(function = "validation::url_or_empty"))]
    pub image_url: Option<String>,
    pub is_featured: Option<bool>,
    pub is_published: Option<bool>,
}

/// Listing filter for [`EventRepo::list`](crate::repositories::EventRepo::list).
#[derive(Debug, Clone, Copy, Default)]
pub struct EventFilter {
    /// Only events starting now or later, soonest first.
    pub upcoming: bool,
    pub featured_only: bool,
    pub published_only: bool,
}
