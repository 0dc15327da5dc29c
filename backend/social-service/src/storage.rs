//! Asset storage for profile and cover images.

use aws_sdk_s3::config::{Credentials, Region};
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;
use base64::engine::general_purpose;
use base64::Engine;
use thiserror::Error;
use uuid::Uuid;

use crate::config::S3Config;

#[derive(Debug, Error)]
pub enum AssetStoreError {
    #[error("Rejected asset payload: {0}")]
    InvalidPayload(String),

    #[error("Asset store transport error: {0}")]
    Transport(String),
}

/// A stored asset, addressed by its canonical URL.
#[derive(Debug, Clone)]
pub struct UploadedAsset {
    pub url: String,
}

/// External asset store seam.
#[async_trait::async_trait]
pub trait AssetStore: Send + Sync {
    /// Store a raw asset payload (a `data:` URI or bare base64) and return
    /// its canonical URL.
    async fn upload(&self, raw: &str) -> Result<UploadedAsset, AssetStoreError>;

    /// Delete a previously uploaded asset by object key.
    async fn destroy(&self, key: &str) -> Result<(), AssetStoreError>;
}

/// Final path segment of a stored asset URL.
///
/// This is the object key a replaced asset is destroyed under.
pub fn object_key_from_url(url: &str) -> Option<&str> {
    url.rsplit('/').next().filter(|segment| !segment.is_empty())
}

/// S3-backed asset store.
pub struct S3AssetStore {
    client: Client,
    config: S3Config,
}

impl S3AssetStore {
    /// Build an S3 client from the provided configuration.
    pub async fn new(config: S3Config) -> Self {
        let credentials = Credentials::new(
            &config.access_key_id,
            &config.secret_access_key,
            None,
            None,
            "social-service",
        );

        let shared_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .credentials_provider(credentials)
            .load()
            .await;

        let mut builder = aws_sdk_s3::config::Builder::from(&shared_config);
        if let Some(endpoint) = &config.endpoint {
            if !endpoint.trim().is_empty() {
                builder = builder.endpoint_url(endpoint);
            }
        }

        Self {
            client: Client::from_conf(builder.build()),
            config,
        }
    }

    fn object_url(&self, key: &str) -> String {
        match &self.config.endpoint {
            Some(endpoint) if !endpoint.trim().is_empty() => format!(
                "{}/{}/{}",
                endpoint.trim_end_matches('/'),
                self.config.bucket,
                key
            ),
            _ => format!(
                "https://{}.s3.{}.amazonaws.com/{}",
                self.config.bucket, self.config.region, key
            ),
        }
    }
}

#[async_trait::async_trait]
impl AssetStore for S3AssetStore {
    async fn upload(&self, raw: &str) -> Result<UploadedAsset, AssetStoreError> {
        let (mime, payload) = split_data_uri(raw);
        let bytes = general_purpose::STANDARD
            .decode(payload.trim())
            .map_err(|e| AssetStoreError::InvalidPayload(format!("invalid base64 payload: {e}")))?;

        let key = format!("{}.{}", Uuid::new_v4(), extension_for(mime));
        self.client
            .put_object()
            .bucket(&self.config.bucket)
            .key(&key)
            .content_type(mime)
            .body(ByteStream::from(bytes))
            .send()
            .await
            .map_err(|e| AssetStoreError::Transport(format!("failed to upload asset {key}: {e}")))?;

        Ok(UploadedAsset {
            url: self.object_url(&key),
        })
    }

    async fn destroy(&self, key: &str) -> Result<(), AssetStoreError> {
        self.client
            .delete_object()
            .bucket(&self.config.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| AssetStoreError::Transport(format!("failed to delete asset {key}: {e}")))?;

        Ok(())
    }
}

/// Split a `data:<mime>;base64,<payload>` URI into mime type and payload.
/// Bare base64 payloads pass through as `application/octet-stream`.
fn split_data_uri(raw: &str) -> (&str, &str) {
    if let Some(rest) = raw.strip_prefix("data:") {
        if let Some((mime, payload)) = rest.split_once(";base64,") {
            return (mime, payload);
        }
    }
    ("application/octet-stream", raw)
}

fn extension_for(mime: &str) -> &'static str {
    match mime {
        "image/png" => "png",
        "image/jpeg" => "jpg",
        "image/gif" => "gif",
        "image/webp" => "webp",
        _ => "bin",
    }
}
