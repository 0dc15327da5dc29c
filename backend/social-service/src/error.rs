/// Error types for the social service core.
use thiserror::Error;

use crate::repository::StoreError;
use crate::storage::AssetStoreError;

pub type Result<T> = std::result::Result<T, ServiceError>;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Asset store error: {0}")]
    AssetStore(#[from] AssetStoreError),

    #[error("Persistence error: {0}")]
    Persistence(#[from] StoreError),

    #[error("Internal error: {0}")]
    Internal(String),
}
