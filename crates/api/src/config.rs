use falcone_core::storage::{StorageBackendType, DEFAULT_UPLOAD_TTL_SECS};

use crate::auth::jwt::JwtConfig;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// How long in-flight requests may drain after a shutdown signal.
    pub shutdown_timeout_secs: u64,
    /// JWT token configuration (secret, expiry).
    pub jwt: JwtConfig,
    /// Object storage backend and bucket settings.
    pub storage: StorageConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:3001`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `SHUTDOWN_TIMEOUT_SECS`| `30`                       |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3001".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let shutdown_timeout_secs: u64 = std::env::var("SHUTDOWN_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("SHUTDOWN_TIMEOUT_SECS must be a valid u64");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            shutdown_timeout_secs,
            jwt: JwtConfig::from_env(),
            storage: StorageConfig::from_env(),
        }
    }
}

/// Object storage settings.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub backend: StorageBackendType,
    pub bucket: String,
    pub region: String,
    /// Custom S3-compatible endpoint (MinIO, R2, ...).
    pub endpoint_url: Option<String>,
    /// CDN base URL for public object links.
    pub cdn_url: Option<String>,
    /// Lifetime of presigned upload URLs.
    pub upload_url_ttl_secs: u64,
}

impl StorageConfig {
    /// | Env Var               | Default         |
    /// |-----------------------|-----------------|
    /// | `STORAGE_BACKEND`     | `s3`            |
    /// | `S3_BUCKET`           | `falcone-media` |
    /// | `AWS_REGION`          | `us-east-1`     |
    /// | `S3_ENDPOINT_URL`     | --              |
    /// | `CDN_URL`             | --              |
    /// | `UPLOAD_URL_TTL_SECS` | `3600`          |
    pub fn from_env() -> Self {
        let backend_name = std::env::var("STORAGE_BACKEND").unwrap_or_else(|_| "s3".into());
        let backend = StorageBackendType::from_name(&backend_name)
            .unwrap_or_else(|e| panic!("STORAGE_BACKEND is invalid: {e}"));

        let upload_url_ttl_secs: u64 = std::env::var("UPLOAD_URL_TTL_SECS")
            .unwrap_or_else(|_| DEFAULT_UPLOAD_TTL_SECS.to_string())
            .parse()
            .expect("UPLOAD_URL_TTL_SECS must be a valid u64");

        Self {
            backend,
            bucket: std::env::var("S3_BUCKET").unwrap_or_else(|_| "falcone-media".into()),
            region: std::env::var("AWS_REGION").unwrap_or_else(|_| "us-east-1".into()),
            endpoint_url: non_empty_var("S3_ENDPOINT_URL"),
            cdn_url: non_empty_var("CDN_URL"),
            upload_url_ttl_secs,
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
