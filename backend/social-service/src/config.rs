/// Configuration management for the social service.
///
/// Loads configuration from environment variables.
use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::services::SuggestionConfig;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Asset storage (S3) configuration
    pub s3: S3Config,
    /// Suggested-user sampling tunables
    #[serde(default)]
    pub suggestions: SuggestionConfig,
}

/// S3 asset store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct S3Config {
    /// Bucket holding profile and cover images
    pub bucket: String,
    /// AWS region
    pub region: String,
    /// Custom endpoint (MinIO, localstack); empty or unset means AWS
    pub endpoint: Option<String>,
    /// Access key id
    pub access_key_id: String,
    /// Secret access key
    pub secret_access_key: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let s3 = S3Config {
            bucket: std::env::var("S3_BUCKET").unwrap_or_else(|_| "perch-media".to_string()),
            region: std::env::var("S3_REGION").unwrap_or_else(|_| "us-east-1".to_string()),
            endpoint: std::env::var("S3_ENDPOINT").ok(),
            access_key_id: std::env::var("AWS_ACCESS_KEY_ID").unwrap_or_default(),
            secret_access_key: std::env::var("AWS_SECRET_ACCESS_KEY").unwrap_or_default(),
        };

        let suggestions = SuggestionConfig {
            sample_size: std::env::var("SUGGESTION_SAMPLE_SIZE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or_else(|| SuggestionConfig::default().sample_size),
            max_results: std::env::var("SUGGESTION_MAX_RESULTS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or_else(|| SuggestionConfig::default().max_results),
        };

        Ok(Config { s3, suggestions })
    }
}
