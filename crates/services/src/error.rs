//! Shared error types for the services crate.

use thiserror::Error;

/// Failures at the HTTP layer. Only two kinds exist: the request never
/// completed, or it completed with a non-success status.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TransportError {
    #[error("request failed with status {0}")]
    Status(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Errors emitted by the typed API services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ApiError {
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("unexpected response shape: {0}")]
    Decode(#[from] serde_json::Error),
}
