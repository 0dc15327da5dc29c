#![allow(dead_code)]
//! Shared fixtures for the integration suites.

use tokio::sync::Mutex;

use social_service::domain::User;
use social_service::repository::{InMemoryStore, UserStore};
use social_service::storage::{AssetStore, AssetStoreError, UploadedAsset};

pub const NEW_ASSET_URL: &str = "https://media.test/assets/new-asset.png";

/// A user with a placeholder password hash, for tests that never touch
/// password verification.
pub fn test_user(username: &str) -> User {
    User::new(username, format!("{username}@example.com"), "x-placeholder")
}

pub async fn seed_user(store: &InMemoryStore, username: &str) -> User {
    let user = test_user(username);
    store.create_user(user.clone()).await.expect("seed user");
    user
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetCall {
    Destroy(String),
    Upload,
}

/// Asset store double that records the order of calls.
#[derive(Default)]
pub struct RecordingAssetStore {
    pub calls: Mutex<Vec<AssetCall>>,
}

impl RecordingAssetStore {
    pub async fn calls(&self) -> Vec<AssetCall> {
        self.calls.lock().await.clone()
    }
}

#[async_trait::async_trait]
impl AssetStore for RecordingAssetStore {
    async fn upload(&self, _raw: &str) -> Result<UploadedAsset, AssetStoreError> {
        self.calls.lock().await.push(AssetCall::Upload);
        Ok(UploadedAsset {
            url: NEW_ASSET_URL.to_string(),
        })
    }

    async fn destroy(&self, key: &str) -> Result<(), AssetStoreError> {
        self.calls.lock().await.push(AssetCall::Destroy(key.to_string()));
        Ok(())
    }
}

/// Asset store double whose every call fails at the transport level.
pub struct FailingAssetStore;

#[async_trait::async_trait]
impl AssetStore for FailingAssetStore {
    async fn upload(&self, _raw: &str) -> Result<UploadedAsset, AssetStoreError> {
        Err(AssetStoreError::Transport("asset backend offline".to_string()))
    }

    async fn destroy(&self, _key: &str) -> Result<(), AssetStoreError> {
        Err(AssetStoreError::Transport("asset backend offline".to_string()))
    }
}
