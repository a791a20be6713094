//! Object storage backend selection.

use std::sync::Arc;

use falcone_cloud::{MemoryStorage, ObjectStorage, S3Storage, S3StorageConfig, StorageError};
use falcone_core::storage::StorageBackendType;

use crate::config::StorageConfig;

/// Build the configured storage backend.
pub async fn connect(config: &StorageConfig) -> Result<Arc<dyn ObjectStorage>, StorageError> {
    let storage: Arc<dyn ObjectStorage> = match config.backend {
        StorageBackendType::S3 => {
            let storage = S3Storage::connect(S3StorageConfig {
                bucket: config.bucket.clone(),
                region: config.region.clone(),
                endpoint_url: config.endpoint_url.clone(),
                cdn_url: config.cdn_url.clone(),
            })
            .await?;
            Arc::new(storage)
        }
        StorageBackendType::Memory => {
            let base_url = config
                .cdn_url
                .clone()
                .unwrap_or_else(|| format!("http://localhost/{}", config.bucket));
            tracing::warn!(%base_url, "Using in-memory object storage; uploads are not persisted");
            Arc::new(MemoryStorage::new(base_url))
        }
    };
    Ok(storage)
}
