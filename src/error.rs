//! Error types for the administration client

use thiserror::Error;

/// Errors surfaced by the transport layer
///
/// The per-operation methods add nothing of their own; whatever the
/// transport raises is what the caller sees.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Connection failed: {0}")]
    Connection(#[from] reqwest::Error),

    #[error("Remote returned status {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Invalid base URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ClientError {
    /// HTTP status of the remote failure, if this was one
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
