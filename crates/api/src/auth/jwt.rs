//! Bearer tokens for back-office sessions.
//!
//! Tokens are HS256 JWTs issued by `falcone` and carry the admin id and role.
//! There is no refresh flow: an expired token means logging in again.

use falcone_core::types::DbId;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// `iss` claim stamped on, and required of, every token.
pub const TOKEN_ISSUER: &str = "falcone";

/// Default session length in minutes (one back-office working day).
const DEFAULT_ACCESS_EXPIRY_MINS: i64 = 720;

/// Clock skew tolerated when checking `exp`, in seconds.
const EXPIRY_LEEWAY_SECS: u64 = 30;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Admin user id.
    pub sub: DbId,
    /// `SUPER_ADMIN`, `ADMIN` or `EDITOR` at the time of login.
    pub role: String,
    pub iss: String,
    pub exp: i64,
    pub iat: i64,
    pub jti: String,
}

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub access_token_expiry_mins: i64,
}

impl JwtConfig {
    /// `JWT_SECRET` (required, non-empty) and `JWT_ACCESS_EXPIRY_MINS`
    /// (default `720`).
    ///
    /// # Panics
    ///
    /// On a missing or empty secret, or a non-numeric expiry.
    pub fn from_env() -> Self {
        let secret = std::env::var("JWT_SECRET")
            .ok()
            .filter(|s| !s.is_empty())
            .expect("JWT_SECRET must be set to a non-empty value");

        let access_token_expiry_mins = match std::env::var("JWT_ACCESS_EXPIRY_MINS") {
            Ok(raw) => raw
                .parse()
                .expect("JWT_ACCESS_EXPIRY_MINS must be a whole number of minutes"),
            Err(_) => DEFAULT_ACCESS_EXPIRY_MINS,
        };

        Self {
            secret,
            access_token_expiry_mins,
        }
    }

    /// Session length in seconds, as reported in the login response.
    pub fn access_token_expiry_secs(&self) -> i64 {
        self.access_token_expiry_mins * 60
    }

    fn validation() -> Validation {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = EXPIRY_LEEWAY_SECS;
        validation.set_issuer(&[TOKEN_ISSUER]);
        validation
    }
}

/// Sign a token for `user_id` valid for the configured session length.
pub fn generate_access_token(
    user_id: DbId,
    role: &str,
    config: &JwtConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    let issued_at = chrono::Utc::now().timestamp();
    let claims = Claims {
        sub: user_id,
        role: role.to_owned(),
        iss: TOKEN_ISSUER.to_owned(),
        exp: issued_at + config.access_token_expiry_secs(),
        iat: issued_at,
        jti: Uuid::new_v4().to_string(),
    };

    jsonwebtoken::encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
}

/// Check signature, issuer and expiry, and return the claims.
pub fn validate_token(
    token: &str,
    config: &JwtConfig,
) -> Result<Claims, jsonwebtoken::errors::Error> {
    jsonwebtoken::decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &JwtConfig::validation(),
    )
    .map(|data| data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(secret: &str) -> JwtConfig {
        JwtConfig {
            secret: secret.to_string(),
            access_token_expiry_mins: 15,
        }
    }

    fn sign(claims: &Claims, secret: &str) -> String {
        jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    fn claims_at(now: i64, exp_offset: i64, iss: &str) -> Claims {
        Claims {
            sub: 1,
            role: "ADMIN".to_string(),
            iss: iss.to_string(),
            exp: now + exp_offset,
            iat: now - 600,
            jti: Uuid::new_v4().to_string(),
        }
    }

    #[test]
    fn issued_token_round_trips_with_configured_lifetime() {
        let config = config("booking-desk-secret");
        let token = generate_access_token(42, "SUPER_ADMIN", &config).unwrap();

        let claims = validate_token(&token, &config).unwrap();
        assert_eq!(claims.sub, 42);
        assert_eq!(claims.role, "SUPER_ADMIN");
        assert_eq!(claims.iss, TOKEN_ISSUER);
        assert_eq!(claims.exp - claims.iat, 15 * 60);
        assert!(Uuid::parse_str(&claims.jti).is_ok());
    }

    #[test]
    fn token_expired_beyond_leeway_is_rejected() {
        let now = chrono::Utc::now().timestamp();
        let token = sign(&claims_at(now, -300, TOKEN_ISSUER), "s");
        assert!(validate_token(&token, &config("s")).is_err());
    }

    #[test]
    fn token_from_another_issuer_is_rejected() {
        let now = chrono::Utc::now().timestamp();
        let token = sign(&claims_at(now, 300, "someone-else"), "s");
        assert!(validate_token(&token, &config("s")).is_err());
    }

    #[test]
    fn token_signed_with_another_secret_is_rejected() {
        let token = generate_access_token(1, "ADMIN", &config("secret-alpha")).unwrap();
        assert!(validate_token(&token, &config("secret-bravo")).is_err());
    }
}
