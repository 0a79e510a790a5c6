// ABOUTME: Error types for the task store
// ABOUTME: NotFound is the only domain error; I/O and JSON failures are fatal

use thiserror::Error;

/// Store errors
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Task not found: {0}")]
    NotFound(u64),
}

pub type StoreResult<T> = Result<T, StoreError>;
