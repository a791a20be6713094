//! In-process [`ObjectStorage`] for local development and tests.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use crate::{ObjectStorage, StorageError};

#[derive(Debug, Default)]
struct Recorded {
    authorized: Vec<String>,
    deleted: Vec<String>,
}

/// Records every key it is asked about; can be switched into a failing mode.
#[derive(Debug)]
pub struct MemoryStorage {
    base_url: String,
    failing: AtomicBool,
    recorded: Mutex<Recorded>,
}

impl MemoryStorage {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            failing: AtomicBool::new(false),
            recorded: Mutex::new(Recorded::default()),
        }
    }

    /// Make every subsequent fallible call return [`StorageError::Request`].
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Keys an upload URL has been issued for, in order.
    pub fn authorized_keys(&self) -> Vec<String> {
        self.recorded().authorized.clone()
    }

    /// Keys successfully deleted, in order.
    pub fn deleted_keys(&self) -> Vec<String> {
        self.recorded().deleted.clone()
    }

    fn recorded(&self) -> std::sync::MutexGuard<'_, Recorded> {
        self.recorded.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn check(&self, key: &str) -> Result<(), StorageError> {
        if self.failing.load(Ordering::SeqCst) {
            Err(StorageError::Request {
                key: key.to_string(),
                message: "memory storage is in failing mode".to_string(),
            })
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl ObjectStorage for MemoryStorage {
    async fn authorize_upload(
        &self,
        key: &str,
        content_type: &str,
        ttl: Duration,
    ) -> Result<String, StorageError> {
        self.check(key)?;
        self.recorded().authorized.push(key.to_string());
        Ok(format!(
            "{}/{key}?x-content-type={content_type}&x-expires={}",
            self.base_url,
            ttl.as_secs()
        ))
    }

    fn public_url(&self, key: &str) -> String {
        format!("{}/{key}", self.base_url)
    }

    async fn delete_object(&self, key: &str) -> Result<(), StorageError> {
        self.check(key)?;
        self.recorded().deleted.push(key.to_string());
        Ok(())
    }
}
