//! Application error types

use intercom_auth_domain::{DomainError, ProfileError};
use thiserror::Error;

use crate::ports::VerifyError;

/// Application-level errors.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// A domain validation error occurred.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// The profile could not be fetched or decoded.
    #[error(transparent)]
    Profile(#[from] ProfileError),

    /// The verification callback failed.
    #[error(transparent)]
    Verify(#[from] VerifyError),
}

/// Result type alias for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
