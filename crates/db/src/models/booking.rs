//! Booking request models and DTOs.

use chrono::NaiveDate;
use falcone_core::datetime::DateInput;
use falcone_core::types::{DbId, Timestamp};
use falcone_core::validation;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `booking_requests` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub event_date: NaiveDate,
    pub location: String,
    pub venue: Option<String>,
    pub budget_range: Option<String>,
    pub event_type: Option<String>,
    pub message: String,
    pub status: String,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Public booking form submission. Status always starts at `NEW`.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    #[serde(default)]
    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    pub name: String,
    #[serde(default)]
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    pub phone: Option<String>,
    #[serde(default)]
    #[validate(custom(function = "validation::date"))]
    pub event_date: DateInput,
    #[serde(default)]
    #[validate(length(min = 2, message = "Location must be at least 2 characters"))]
    pub location: String,
    pub venue: Option<String>,
    pub budget_range: Option<String>,
    pub event_type: Option<String>,
    #[serde(default)]
    #[validate(length(min = 10, message = "Message must be at least 10 characters"))]
    pub message: String,
}

/// Admin status / notes change. Any status may follow any other.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBookingRequest {
    #[validate(custom(function = "validation::booking_status"))]
    pub status: Option<String>,
    pub notes: Option<String>,
}
