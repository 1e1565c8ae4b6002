//! Shared error type across iNFINITE crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid input / malformed body.
    BadRequest,
    /// Metric observation outside the accepted domain.
    InvalidObservation,
    /// Configuration could not be loaded or coerced.
    Config,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in logs and diagnostics.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::InvalidObservation => "INVALID_OBSERVATION",
            ClientCode::Config => "CONFIG",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, InfiniteError>;

/// Unified error type used by core and gateway.
#[derive(Debug, Error)]
pub enum InfiniteError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("invalid observation: {0}")]
    InvalidObservation(String),
    #[error("config: {0}")]
    Config(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl InfiniteError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            InfiniteError::BadRequest(_) => ClientCode::BadRequest,
            InfiniteError::InvalidObservation(_) => ClientCode::InvalidObservation,
            InfiniteError::Config(_) => ClientCode::Config,
            InfiniteError::Internal(_) => ClientCode::Internal,
        }
    }

    /// True for errors caused by the caller's input rather than the service.
    pub fn is_client_fault(&self) -> bool {
        matches!(self, InfiniteError::BadRequest(_))
    }
}
