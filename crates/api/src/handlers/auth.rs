//! Handlers for the `/auth` resource (login, logout).

use axum::extract::State;
use axum::Json;
use falcone_core::audit::{action_types, entity_types};
use falcone_core::error::CoreError;
use falcone_core::types::DbId;
use falcone_db::repositories::AdminUserRepo;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::audit;
use crate::auth::jwt::generate_access_token;
use crate::auth::password::verify_password;
use crate::error::{AppError, AppResult};
use crate::extract::{RequestMeta, ValidatedJson};
use crate::middleware::rbac::RequireAdmin;
use crate::response::SuccessResponse;
use crate::state::AppState;

const INVALID_CREDENTIALS: &str = "Invalid email or password";

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[serde(default)]
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
    /// Always `Bearer`.
    pub token_type: &'static str,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    pub user: AdminInfo,
}

/// Public admin info embedded in [`LoginResponse`].
#[derive(Debug, Serialize)]
pub struct AdminInfo {
    pub id: DbId,
    pub email: String,
    pub name: Option<String>,
    pub role: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/login
///
/// Unknown email and wrong password are indistinguishable to the caller.
pub async fn login(
    State(state): State<AppState>,
    meta: RequestMeta,
    ValidatedJson(input): ValidatedJson<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let unauthorized = || AppError::Core(CoreError::Unauthorized(INVALID_CREDENTIALS.into()));

    let user = AdminUserRepo::find_by_email(&state.pool, &input.email)
        .await?
        .ok_or_else(unauthorized)?;

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::Core(CoreError::Internal(format!("Password verification error: {e}"))))?;
    if !password_valid {
        tracing::info!(user_id = user.id, "Login rejected: wrong password");
        return Err(unauthorized());
    }

    if !user.is_active {
        return Err(AppError::Core(CoreError::Forbidden(
            "Account is deactivated".into(),
        )));
    }

    AdminUserRepo::record_login(&state.pool, user.id).await?;

    let access_token = generate_access_token(user.id, &user.role, &state.config.jwt)
        .map_err(|e| AppError::Core(CoreError::Internal(format!("Token generation error: {e}"))))?;

    audit::record(
        &state.pool,
        audit::entry(action_types::LOGIN, entity_types::ADMIN_USER, &meta)
            .actor(user.id)
            .entity_id(user.id),
    )
    .await;

    tracing::info!(user_id = user.id, role = %user.role, "Admin logged in");

    Ok(Json(LoginResponse {
        access_token,
        token_type: "Bearer",
        expires_in: state.config.jwt.access_token_expiry_secs(),
        user: AdminInfo {
            id: user.id,
            email: user.email,
            name: user.name,
            role: user.role,
        },
    }))
}

/// POST /api/v1/auth/logout
///
/// Tokens are stateless, so logout only leaves a trail; the client drops
/// the token.
pub async fn logout(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    meta: RequestMeta,
) -> AppResult<Json<SuccessResponse>> {
    audit::record(
        &state.pool,
        audit::entry(action_types::LOGOUT, entity_types::ADMIN_USER, &meta)
            .actor(admin.user_id)
            .entity_id(admin.user_id),
    )
    .await;

    tracing::info!(user_id = admin.user_id, "Admin logged out");

    Ok(Json(SuccessResponse::ok()))
}
