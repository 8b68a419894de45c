//! Error types for the sample store.

use thiserror::Error;

/// Errors from archive loading, ingestion, and store lookups.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("unknown scenario: {0}")]
    UnknownScenario(String),

    #[error("unknown climate model: {0}")]
    UnknownModel(String),

    #[error("unknown period: {0}")]
    UnknownPeriod(String),

    #[error("dataset not found: {0}")]
    DatasetNotFound(String),

    #[error("archive I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("archive format error: {0}")]
    Format(#[from] serde_json::Error),

    #[error("CSV ingest error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
