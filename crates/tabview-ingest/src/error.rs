//! Error types for loading record batches.

use std::path::PathBuf;

use thiserror::Error;

use tabview_model::ModelError;

/// Errors that can occur while fetching or parsing a batch.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IngestError {
    /// The HTTP request could not be sent or its body not read.
    #[error("network error: {0}")]
    Network(String),

    /// The provider answered with a non-success status.
    #[error("provider returned HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// A local input file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The payload is not valid JSON.
    #[error("invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),

    /// The payload is JSON but not a list of records.
    #[error("unexpected payload shape: {0}")]
    Payload(String),

    /// An element of the payload is not a record.
    #[error("record {index}: {source}")]
    Record {
        index: usize,
        #[source]
        source: ModelError,
    },
}

impl From<reqwest::Error> for IngestError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            Self::Status {
                status: status.as_u16(),
                message: err.to_string(),
            }
        } else {
            Self::Network(err.to_string())
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
