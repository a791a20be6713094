use std::sync::Arc;

use falcone_cloud::ObjectStorage;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: falcone_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Object storage gateway (S3 or in-memory).
    pub storage: Arc<dyn ObjectStorage>,
}
