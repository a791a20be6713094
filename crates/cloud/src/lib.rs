//! Object storage gateway.
//!
//! Handlers talk to an [`ObjectStorage`] trait object; [`S3Storage`] backs it
//! in production and [`MemoryStorage`] in local development and tests. Key
//! generation and the upload allow-lists are pure and live in
//! `falcone_core::storage`.

use std::time::Duration;

use async_trait::async_trait;

pub mod memory;
pub mod s3;

pub use memory::MemoryStorage;
pub use s3::{S3Storage, S3StorageConfig};

/// Failures talking to the object store.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Failed to presign upload for '{key}': {message}")]
    Presign { key: String, message: String },

    #[error("Storage request failed for '{key}': {message}")]
    Request { key: String, message: String },

    #[error("Storage misconfigured: {0}")]
    Configuration(String),
}

/// The operations the back office needs from a bucket.
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// A time-limited URL the client can `PUT` the file body to.
    async fn authorize_upload(
        &self,
        key: &str,
        content_type: &str,
        ttl: Duration,
    ) -> Result<String, StorageError>;

    /// The URL the object is served from once uploaded.
    fn public_url(&self, key: &str) -> String;

    /// Remove an object. Deleting a missing key is not an error.
    async fn delete_object(&self, key: &str) -> Result<(), StorageError>;
}
