//! Repository error types.

use thiserror::Error;

/// Errors produced by repository operations.
///
/// These represent the failure side of the tagged result every remote call
/// resolves to. The variants mirror the ways a backend call can go wrong:
/// transport failure, a non-2xx status, an undecodable payload, or a call
/// made without a signed-in user.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RepositoryError {
    /// Connection-level failure (DNS, TLS, unreachable host).
    #[error("network request failed: {message}")]
    Network { message: String },

    /// Server answered with a non-success status code.
    #[error("server returned status {status}: {message}")]
    HttpStatus { status: u16, message: String },

    /// Response body did not decode into the expected DTO.
    #[error("failed to decode response: {message}")]
    Decoding { message: String },

    /// Operation requires a signed-in user.
    #[error("not signed in")]
    NotAuthenticated,

    /// The request was cancelled before completing.
    #[error("request cancelled")]
    Cancelled,
}

impl RepositoryError {
    /// Whether the failure is likely transient.
    ///
    /// No retry policy exists at the state layer; this classification is
    /// informational, for callers that add their own.
    pub fn is_retryable(&self) -> bool {
        match self {
            RepositoryError::Network { .. } => true,
            RepositoryError::HttpStatus { status, .. } => {
                *status >= 500 || *status == 429 || *status == 408
            }
            RepositoryError::Decoding { .. } => false,
            RepositoryError::NotAuthenticated => false,
            RepositoryError::Cancelled => false,
        }
    }
}

impl From<serde_json::Error> for RepositoryError {
    fn from(err: serde_json::Error) -> Self {
        RepositoryError::Decoding {
            message: err.to_string(),
        }
    }
}

/// Type alias for results of repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;
