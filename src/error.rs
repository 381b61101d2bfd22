//! Unified SDK error types.

use thiserror::Error;

/// Result alias used throughout the SDK.
pub type SdkResult<T> = Result<T, SdkError>;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Order rejected: {operation} returned status {status}")]
    OrderRejected {
        operation: OrderOperation,
        status: u16,
    },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Permission denied: {0}")]
    Permission(String),
}

impl SdkError {
    /// Whether this error is a domain-level rejection of an order call.
    pub fn is_rejection(&self) -> bool {
        matches!(self, SdkError::OrderRejected { .. })
    }
}

/// Transport and (de)serialization errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Transport failure: {0}")]
    Transport(String),

    #[error("Failed to encode request body: {0}")]
    Serialize(String),

    #[error("Failed to decode response body: {0}")]
    Decode(String),

    #[error("Unexpected status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },
}

/// Authentication errors.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Not authenticated")]
    NotAuthenticated,

    #[error("Login failed: {0}")]
    LoginFailed(String),

    #[error("Logout failed with status {status}")]
    LogoutFailed { status: u16 },
}

/// The order operation that a rejection refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderOperation {
    Place,
    Modify,
    Cancel,
    CancelAll,
}

impl std::fmt::Display for OrderOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderOperation::Place => write!(f, "place"),
            OrderOperation::Modify => write!(f, "modify"),
            OrderOperation::Cancel => write!(f, "cancel"),
            OrderOperation::CancelAll => write!(f, "cancel-all"),
        }
    }
}
