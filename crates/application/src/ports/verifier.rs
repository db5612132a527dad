//! Verification callback port
//!
//! The application decides whether a fetched profile maps to one of its
//! users. This is the `verify(accessToken, refreshToken, profile)` hook of
//! the `OAuth2` runtime.

use async_trait::async_trait;
use intercom_auth_domain::{GrantedTokens, NormalizedProfile};

/// Outcome of a verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerifyOutcome<U> {
    /// The profile belongs to a known (or newly created) user.
    Authenticated(U),
    /// The credentials are valid but the application refuses the user.
    Rejected {
        /// Optional explanation surfaced to the runtime.
        reason: Option<String>,
    },
}

impl<U> VerifyOutcome<U> {
    /// Returns the user when authenticated.
    #[must_use]
    pub fn user(self) -> Option<U> {
        match self {
            Self::Authenticated(user) => Some(user),
            Self::Rejected { .. } => None,
        }
    }

    /// Returns true if the user was authenticated.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }
}

/// Errors raised by a verification callback.
#[derive(Debug, thiserror::Error)]
pub enum VerifyError {
    /// The user store could not be queried.
    #[error("user lookup failed: {0}")]
    Lookup(String),

    /// Any other failure inside the callback.
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

/// Application-supplied verification callback.
#[async_trait]
pub trait Verifier: Send + Sync {
    /// The application's user type.
    type User: Send;

    /// Maps a profile to an application user.
    ///
    /// # Errors
    /// Returns an error if the application cannot complete the lookup.
    /// A refused user is not an error; return [`VerifyOutcome::Rejected`].
    async fn verify(
        &self,
        tokens: &GrantedTokens,
        profile: NormalizedProfile,
    ) -> Result<VerifyOutcome<Self::User>, VerifyError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_outcome_user() {
        let outcome = VerifyOutcome::Authenticated("user-1");
        assert!(outcome.is_authenticated());
        assert_eq!(outcome.user(), Some("user-1"));

        let outcome: VerifyOutcome<&str> = VerifyOutcome::Rejected { reason: None };
        assert!(!outcome.is_authenticated());
        assert_eq!(outcome.user(), None);
    }

    #[test]
    fn test_verify_error_display() {
        let error = VerifyError::Lookup("connection reset".to_string());
        assert_eq!(error.to_string(), "user lookup failed: connection reset");
    }
}
