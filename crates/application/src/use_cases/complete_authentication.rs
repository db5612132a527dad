//! Complete authentication use case.

use intercom_auth_domain::GrantedTokens;

use crate::error::ApplicationResult;
use crate::ports::{ProfileFetcher, VerifyOutcome, Verifier};

/// Finishes a flow once the `OAuth2` runtime holds tokens: fetches the
/// profile, then hands it to the application's verifier.
pub struct CompleteAuthentication<F, V> {
    fetcher: F,
    verifier: V,
}

impl<F: ProfileFetcher, V: Verifier> CompleteAuthentication<F, V> {
    /// Creates a new `CompleteAuthentication` use case.
    #[must_use]
    pub const fn new(fetcher: F, verifier: V) -> Self {
        Self { fetcher, verifier }
    }

    /// Executes the use case.
    ///
    /// The verifier is only called with a complete profile; a failed fetch
    /// is returned as is.
    ///
    /// # Errors
    /// - `ApplicationError::Profile` if the profile cannot be fetched or decoded
    /// - `ApplicationError::Verify` if the verifier fails
    #[tracing::instrument(skip_all)]
    pub async fn execute(&self, tokens: &GrantedTokens) -> ApplicationResult<VerifyOutcome<V::User>> {
        let profile = self
            .fetcher
            .fetch_profile(&tokens.access_token)
            .await
            .inspect_err(|e| tracing::warn!(error = %e, "profile fetch failed"))?;

        tracing::debug!(provider = %profile.provider, id = ?profile.id, "verifying profile");

        let outcome = self.verifier.verify(tokens, profile).await?;
        if let VerifyOutcome::Rejected { reason } = &outcome {
            tracing::info!(reason = ?reason, "user rejected by verifier");
        }

        Ok(outcome)
    }
}
