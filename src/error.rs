//! Error types for metadata collection.

use thiserror::Error;

/// Errors that can occur while fetching instance metadata.
///
/// Token negotiation and per-field failures are handled at their call
/// sites; none of these variants escapes a [`crate::Collector::run`] call.
#[derive(Debug, Error)]
pub enum MetadataError {
    /// HTTP error with status code.
    #[error("http {0}")]
    Http(u16),

    /// HTTP request error (timeout, connection refused, transport).
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// I/O error while recording an artifact.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
