//! Intercom `OAuth2` strategy.
//!
//! The strategy owns no flow logic. It carries the client settings the
//! `OAuth2` runtime needs for the redirect and code exchange, and exposes
//! the profile capability the runtime calls once it holds a token.

use async_trait::async_trait;
use intercom_auth_application::ProfileFetcher;
use intercom_auth_domain::{
    NormalizedProfile, OAuth2ClientSettings, PROVIDER_NAME, ProfileResult,
};

use super::IntercomOptions;
use crate::adapters::IntercomProfileAdapter;
use crate::error::SetupResult;

/// Intercom authentication strategy.
#[derive(Debug, Clone)]
pub struct IntercomStrategy {
    settings: OAuth2ClientSettings,
    profile: IntercomProfileAdapter,
}

impl IntercomStrategy {
    /// Builds the strategy from options.
    ///
    /// # Errors
    /// Returns an error if an endpoint is invalid, the client id is empty,
    /// or the HTTP client cannot be created.
    pub fn new(options: &IntercomOptions) -> SetupResult<Self> {
        let settings = options.client_settings()?;
        let profile = IntercomProfileAdapter::with_profile_url(options.profile_endpoint()?)?;

        tracing::debug!(?settings, "intercom strategy configured");

        Ok(Self::with_adapter(settings, profile))
    }

    /// Builds the strategy around an existing profile adapter.
    #[must_use]
    pub const fn with_adapter(
        settings: OAuth2ClientSettings,
        profile: IntercomProfileAdapter,
    ) -> Self {
        Self { settings, profile }
    }

    /// Name the runtime registers this strategy under.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        PROVIDER_NAME
    }

    /// Settings for the delegated `OAuth2` runtime.
    #[must_use]
    pub const fn client_settings(&self) -> &OAuth2ClientSettings {
        &self.settings
    }

    /// The underlying profile adapter.
    #[must_use]
    pub const fn profile_adapter(&self) -> &IntercomProfileAdapter {
        &self.profile
    }
}

#[async_trait]
impl ProfileFetcher for IntercomStrategy {
    async fn fetch_profile(&self, access_token: &str) -> ProfileResult<NormalizedProfile> {
        self.profile.fetch_profile(access_token).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::error::SetupError;
    use intercom_auth_domain::{DomainError, GrantType};

    #[test]
    fn test_strategy_name() {
        let strategy = IntercomStrategy::new(&IntercomOptions::new("client", "secret")).unwrap();
        assert_eq!(strategy.name(), "intercom");
    }

    #[test]
    fn test_strategy_settings() {
        let options = IntercomOptions::new("123-456-789", "shhh-its-a-secret")
            .with_callback_url("https://www.example.net/auth/intercom/callback");
        let strategy = IntercomStrategy::new(&options).unwrap();
        let settings = strategy.client_settings();

        assert_eq!(
            settings.authorization_endpoint.as_str(),
            "https://app.intercom.io/oauth"
        );
        assert_eq!(
            settings.token_endpoint.as_str(),
            "https://api.intercom.io/auth/eagle/token"
        );
        assert_eq!(settings.grant_type, GrantType::AuthorizationCode);
        assert_eq!(settings.client_id, "123-456-789");
        assert_eq!(
            strategy.profile_adapter().profile_url().as_str(),
            "https://api.intercom.io/users"
        );
    }

    #[test]
    fn test_strategy_rejects_invalid_profile_url() {
        let options = IntercomOptions::new("client", "secret").with_profile_url("::");
        let result = IntercomStrategy::new(&options);

        assert!(matches!(
            result,
            Err(SetupError::Domain(DomainError::InvalidUrl {
                field: "profile_url",
                ..
            }))
        ));
    }
}
