//! Error types for the persisted key-value store.

use thiserror::Error;

/// Errors reported by a [`KeyValueStore`](super::KeyValueStore) backend.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The key cannot be mapped onto the backend (e.g. it contains a path separator).
    #[error("Invalid store key: {0:?}")]
    InvalidKey(String),

    /// The backend is not reachable or refused the operation.
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// Underlying filesystem failure.
    #[error("Store I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while writing the cart through to the store.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("Failed to encode cart: {0}")]
    Encode(#[from] serde_json::Error),

    #[error(transparent)]
    Store(#[from] StoreError),
}
