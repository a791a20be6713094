//! Request extractors shared by handlers.
//!
//! - [`ValidatedJson`] -- JSON body that has passed its `validator` schema.
//! - [`Path`] / [`Query`] -- axum's extractors with rejections in the error
//!   envelope instead of plain text.
//! - [`RequestMeta`] -- client IP and user agent for audit entries.

use std::convert::Infallible;

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, FromRequestParts, Request};
use axum::http::request::Parts;
use axum::http::HeaderMap;
use axum::Json;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::AppError;

/// Longest header value kept for audit columns.
const MAX_HEADER_LEN: usize = 512;

// ---------------------------------------------------------------------------
// ValidatedJson
// ---------------------------------------------------------------------------

/// JSON body deserialized into `T` and validated.
///
/// Malformed JSON and type mismatches are rejected as `BAD_REQUEST`; schema
/// violations become `VALIDATION_ERROR` with per-field details.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| AppError::BadRequest(rejection.body_text()))?;
        value.validate()?;
        Ok(Self(value))
    }
}

// ---------------------------------------------------------------------------
// Path / Query
// ---------------------------------------------------------------------------

/// Path parameters; a value that fails to parse is a `BAD_REQUEST`.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct Path<T>(pub T);

/// Query string; an unknown shape or bad value is a `BAD_REQUEST`.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct Query<T>(pub T);

// ---------------------------------------------------------------------------
// RequestMeta
// ---------------------------------------------------------------------------

/// Client metadata recorded with audit entries.
#[derive(Debug, Clone, Default)]
pub struct RequestMeta {
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
}

impl RequestMeta {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        Self {
            ip_address: client_ip(headers),
            user_agent: header_value(headers, "user-agent"),
        }
    }
}

impl<S> FromRequestParts<S> for RequestMeta
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_headers(&parts.headers))
    }
}

/// First hop of `x-forwarded-for`, else `x-real-ip`.
fn client_ip(headers: &HeaderMap) -> Option<String> {
    header_value(headers, "x-forwarded-for")
        .and_then(|raw| {
            raw.split(',')
                .next()
                .map(|first| first.trim().to_string())
                .filter(|first| !first.is_empty())
        })
        .or_else(|| header_value(headers, "x-real-ip"))
}

fn header_value(headers: &HeaderMap, key: &str) -> Option<String> {
    let raw = headers.get(key)?.to_str().ok()?.trim();
    if raw.is_empty() {
        return None;
    }
    Some(raw.chars().take(MAX_HEADER_LEN).collect())
}
