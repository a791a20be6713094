//! JWT-based authentication extractors for Axum handlers.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use falcone_core::error::CoreError;
use falcone_core::types::DbId;

use crate::auth::jwt::{validate_token, JwtConfig};
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated user extracted from a JWT Bearer token in the `Authorization` header.
///
/// ```ignore
/// async fn my_handler(user: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(user_id = user.user_id, role = %user.role, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The admin's database id (from `claims.sub`).
    pub user_id: DbId,
    /// The admin's role (e.g. `"SUPER_ADMIN"`).
    pub role: String,
}

/// Resolve the identity carried by the request headers.
pub fn authenticate(headers: &HeaderMap, jwt: &JwtConfig) -> Result<AuthUser, CoreError> {
    let auth_header = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| CoreError::Unauthorized("Missing Authorization header".into()))?;

    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        CoreError::Unauthorized("Invalid Authorization format. Expected: Bearer <token>".into())
    })?;

    let claims = validate_token(token, jwt)
        .map_err(|_| CoreError::Unauthorized("Invalid or expired token".into()))?;

    Ok(AuthUser {
        user_id: claims.sub,
        role: claims.role,
    })
}

/// The session for a request, if any. Invalid tokens count as no session.
pub fn resolve_session(headers: &HeaderMap, jwt: &JwtConfig) -> Option<AuthUser> {
    authenticate(headers, jwt).ok()
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        authenticate(&parts.headers, &state.config.jwt).map_err(AppError::Core)
    }
}

/// Optional identity for endpoints that are public but show more to admins.
#[derive(Debug, Clone)]
pub struct MaybeAuthUser(pub Option<AuthUser>);

impl MaybeAuthUser {
    pub fn is_admin(&self) -> bool {
        self.0.as_ref().is_some_and(AuthUser::is_admin)
    }
}

impl AuthUser {
    /// Every known back-office role has admin scope.
    pub fn is_admin(&self) -> bool {
        falcone_core::enums::AdminRole::parse(&self.role).is_some()
    }
}

impl FromRequestParts<AppState> for MaybeAuthUser {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(MaybeAuthUser(resolve_session(&parts.headers, &state.config.jwt)))
    }
}
