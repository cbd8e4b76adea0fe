//! Error Types
//!
//! Failures of the REST client and of batch preconditions.

use thiserror::Error;

/// Error returned by every API wrapper
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Request never produced a response (offline, CORS, aborted)
    #[error("network error: {0}")]
    Network(String),

    /// Server answered with a non-2xx status
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// Response body did not match the expected shape
    #[error("decode error: {0}")]
    Decode(String),

    /// Request body could not be built
    #[error("encode error: {0}")]
    Encode(String),

    /// Server answered 2xx with `success: false`
    #[error("rejected: {0}")]
    Rejected(String),
}

impl From<gloo_net::Error> for ApiError {
    fn from(e: gloo_net::Error) -> Self {
        match e {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}

/// Why a batch action was refused before any request was sent
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BatchError {
    #[error("no items selected")]
    NothingSelected,

    #[error("selected items belong to {0} different accounts")]
    MixedAccounts(usize),
}
