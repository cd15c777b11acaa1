//! Error types for snapshot persistence

use thiserror::Error;

/// Errors that can occur while loading or saving a snapshot
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
