//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur while validating configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The provided URL is invalid or malformed.
    #[error("invalid URL for {field}: {message}")]
    InvalidUrl {
        /// Name of the configuration field holding the URL.
        field: &'static str,
        /// Parser message.
        message: String,
    },

    /// A required setting is empty.
    #[error("missing required setting: {0}")]
    MissingSetting(&'static str),

    /// The grant type is not supported by this strategy.
    #[error("unsupported grant type: {0}")]
    UnsupportedGrantType(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
