//! Query parameter types for list endpoints.
//!
//! Boolean flags accept `true` / `false`; an absent flag is `false`.

use serde::Deserialize;

/// `GET /bookings?status=&page=&limit=`
#[derive(Debug, Default, Deserialize)]
pub struct BookingListParams {
    pub status: Option<String>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

/// `GET /events?upcoming=&featured=&all=`
#[derive(Debug, Default, Deserialize)]
pub struct EventListParams {
    #[serde(default)]
    pub upcoming: bool,
    #[serde(default)]
    pub featured: bool,
    /// Include unpublished rows (honored for admins only).
    #[serde(default)]
    pub all: bool,
}

/// `GET /mixes?decade=&featured=&all=`
#[derive(Debug, Default, Deserialize)]
pub struct MixListParams {
    pub decade: Option<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub all: bool,
}

/// `GET /media?type=&decade=&category=&featured=&all=`
#[derive(Debug, Default, Deserialize)]
pub struct MediaListParams {
    #[serde(rename = "type")]
    pub media_type: Option<String>,
    pub decade: Option<String>,
    pub category: Option<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub all: bool,
}

/// `GET /contact?unread=`
#[derive(Debug, Default, Deserialize)]
pub struct ContactListParams {
    #[serde(default)]
    pub unread: bool,
}
