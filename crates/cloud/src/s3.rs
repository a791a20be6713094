//! S3 (and S3-compatible) implementation of [`ObjectStorage`].

use std::time::Duration;

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_s3::config::Region;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::presigning::PresigningConfig;

use crate::{ObjectStorage, StorageError};

/// Bucket location and public URL settings.
#[derive(Debug, Clone)]
pub struct S3StorageConfig {
    pub bucket: String,
    pub region: String,
    /// Custom endpoint for S3-compatible services (MinIO, R2, ...).
    /// Enables path-style addressing.
    pub endpoint_url: Option<String>,
    /// CDN base URL objects are served from instead of the bucket.
    pub cdn_url: Option<String>,
}

#[derive(Debug)]
pub struct S3Storage {
    client: aws_sdk_s3::Client,
    config: S3StorageConfig,
}

impl S3Storage {
    /// Build a client from the default AWS credential chain.
    pub async fn connect(config: S3StorageConfig) -> Result<Self, StorageError> {
        if config.bucket.trim().is_empty() {
            return Err(StorageError::Configuration("S3 bucket name is empty".into()));
        }

        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()));
        if let Some(endpoint) = &config.endpoint_url {
            loader = loader.endpoint_url(endpoint);
        }
        let shared = loader.load().await;

        let s3_config = aws_sdk_s3::config::Builder::from(&shared)
            .force_path_style(config.endpoint_url.is_some())
            .build();

        tracing::info!(
            bucket = %config.bucket,
            region = %config.region,
            custom_endpoint = config.endpoint_url.is_some(),
            "S3 storage client configured"
        );

        Ok(Self {
            client: aws_sdk_s3::Client::from_conf(s3_config),
            config,
        })
    }
}

#[async_trait]
impl ObjectStorage for S3Storage {
    async fn authorize_upload(
        &self,
        key: &str,
        content_type: &str,
        ttl: Duration,
    ) -> Result<String, StorageError> {
        let presigning = PresigningConfig::expires_in(ttl).map_err(|e| StorageError::Presign {
            key: key.to_string(),
            message: e.to_string(),
        })?;

        let request = self
            .client
            .put_object()
            .bucket(&self.config.bucket)
            .key(key)
            .content_type(content_type)
            .presigned(presigning)
            .await
            .map_err(|e| StorageError::Presign {
                key: key.to_string(),
                message: DisplayErrorContext(&e).to_string(),
            })?;

        Ok(request.uri().to_string())
    }

    fn public_url(&self, key: &str) -> String {
        object_url(
            self.config.cdn_url.as_deref(),
            self.config.endpoint_url.as_deref(),
            &self.config.bucket,
            &self.config.region,
            key,
        )
    }

    async fn delete_object(&self, key: &str) -> Result<(), StorageError> {
        self.client
            .delete_object()
            .bucket(&self.config.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| StorageError::Request {
                key: key.to_string(),
                message: DisplayErrorContext(&e).to_string(),
            })?;
        Ok(())
    }
}

/// Public URL of `key`: CDN base if set, else the custom endpoint
/// (path-style), else the virtual-hosted AWS URL.
pub fn object_url(
    cdn_url: Option<&str>,
    endpoint_url: Option<&str>,
    bucket: &str,
    region: &str,
    key: &str,
) -> String {
    match (cdn_url, endpoint_url) {
        (Some(cdn), _) => format!("{}/{key}", cdn.trim_end_matches('/')),
        (None, Some(endpoint)) => format!("{}/{bucket}/{key}", endpoint.trim_end_matches('/')),
        (None, None) => format!("https://{bucket}.s3.{region}.amazonaws.com/{key}"),
    }
}
