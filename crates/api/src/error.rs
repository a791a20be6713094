use std::collections::BTreeMap;

use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use falcone_cloud::StorageError;
use falcone_core::error::CoreError;
use falcone_core::validation::flatten_errors;
use serde::Serialize;
use validator::ValidationErrors;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce the `{error, code, details?}`
/// JSON envelope.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `falcone_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// An object storage call failed.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Request body failed its validation schema.
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

const INTERNAL_MESSAGE: &str = "An internal error occurred";

/// Wire shape of every error response.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    code: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<BTreeMap<String, Vec<String>>>,
}

/// Status, machine code and client-facing message for one error.
struct Classified {
    status: StatusCode,
    code: &'static str,
    message: String,
}

impl Classified {
    fn new(status: StatusCode, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            code,
            message: message.into(),
        }
    }

    /// 500 with the detail kept out of the response.
    fn internal(detail: &dyn std::fmt::Display, context: &'static str) -> Self {
        tracing::error!(error = %detail, "{context}");
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", INTERNAL_MESSAGE)
    }
}

impl AppError {
    fn classify(&self) -> Classified {
        match self {
            AppError::Core(core) => classify_core(core),
            AppError::Database(err) => classify_sqlx_error(err),
            AppError::Storage(err) => Classified::internal(err, "Object storage error"),
            AppError::Validation(_) => {
                Classified::new(StatusCode::BAD_REQUEST, "VALIDATION_ERROR", "Validation failed")
            }
            AppError::BadRequest(msg) => {
                Classified::new(StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.as_str())
            }
            AppError::InternalError(msg) => Classified::internal(msg, "Internal error"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let Classified {
            status,
            code,
            message,
        } = self.classify();

        let details = match &self {
            AppError::Validation(errors) => Some(flatten_errors(errors)),
            _ => None,
        };

        let body = ErrorBody {
            error: message,
            code,
            details,
        };
        (status, axum::Json(body)).into_response()
    }
}

fn classify_core(err: &CoreError) -> Classified {
    match err {
        CoreError::NotFound { entity, id } => Classified::new(
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            format!("{entity} with id {id} not found"),
        ),
        CoreError::NotFoundBySlug { entity, slug } => Classified::new(
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            format!("{entity} '{slug}' not found"),
        ),
        CoreError::Validation(msg) => {
            Classified::new(StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.as_str())
        }
        CoreError::Conflict(msg) => Classified::new(StatusCode::CONFLICT, "CONFLICT", msg.as_str()),
        CoreError::Unauthorized(msg) => {
            Classified::new(StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.as_str())
        }
        CoreError::Forbidden(msg) => Classified::new(StatusCode::FORBIDDEN, "FORBIDDEN", msg.as_str()),
        CoreError::Internal(msg) => Classified::internal(msg, "Internal core error"),
    }
}

/// `RowNotFound` is a 404 and a unique violation on a `uq_*` constraint
/// (SQLSTATE 23505) is a 409; anything else is logged and hidden behind a 500.
fn classify_sqlx_error(err: &sqlx::Error) -> Classified {
    match err {
        sqlx::Error::RowNotFound => {
            Classified::new(StatusCode::NOT_FOUND, "NOT_FOUND", "Resource not found")
        }
        sqlx::Error::Database(db_err) => match (db_err.code().as_deref(), db_err.constraint()) {
            (Some("23505"), Some(constraint)) if constraint.starts_with("uq_") => {
                classify_core(&CoreError::Conflict(format!(
                    "Duplicate value violates unique constraint: {constraint}"
                )))
            }
            _ => Classified::internal(db_err, "Database error"),
        },
        other => Classified::internal(other, "Database error"),
    }
}
