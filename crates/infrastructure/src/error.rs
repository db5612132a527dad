//! Infrastructure error types

use intercom_auth_domain::DomainError;
use thiserror::Error;

/// Errors raised while building the strategy and its adapters.
#[derive(Debug, Error)]
pub enum SetupError {
    /// Options could not be loaded from their source.
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Options were loaded but are invalid.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The HTTP client could not be created.
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Result type alias for setup operations.
pub type SetupResult<T> = Result<T, SetupError>;
