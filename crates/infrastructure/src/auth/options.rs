//! Strategy options.
//!
//! Options are plain strings so they can be deserialized from any
//! `config` source; URLs are parsed when the client settings are built.

use std::fmt;

use config::{Config, Environment};
use intercom_auth_domain::{DomainError, DomainResult, GrantType, OAuth2ClientSettings};
use serde::Deserialize;
use url::Url;

use crate::adapters::DEFAULT_PROFILE_URL;
use crate::error::SetupResult;

/// Intercom authorization endpoint.
pub const DEFAULT_AUTHORIZATION_URL: &str = "https://app.intercom.io/oauth";

/// Intercom token endpoint.
pub const DEFAULT_TOKEN_URL: &str = "https://api.intercom.io/auth/eagle/token";

/// Prefix of the environment variables read by [`IntercomOptions::from_env`].
const ENV_PREFIX: &str = "INTERCOM";

/// Options for an [`IntercomStrategy`](super::IntercomStrategy).
///
/// Every endpoint has an Intercom default. `grant_type` only accepts
/// `authorization_code`.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct IntercomOptions {
    /// Intercom application client id.
    pub client_id: String,
    /// Intercom application client secret.
    #[serde(default)]
    pub client_secret: String,
    /// Redirect target after authorization. Optional when set in the
    /// Intercom application.
    #[serde(default)]
    pub callback_url: Option<String>,
    /// Authorization endpoint.
    #[serde(default = "default_authorization_url")]
    pub authorization_url: String,
    /// Token endpoint.
    #[serde(default = "default_token_url")]
    pub token_url: String,
    /// Grant type passed to the runtime.
    #[serde(default)]
    pub grant_type: GrantType,
    /// Current-user endpoint.
    #[serde(default = "default_profile_url")]
    pub profile_url: String,
}

fn default_authorization_url() -> String {
    DEFAULT_AUTHORIZATION_URL.to_string()
}

fn default_token_url() -> String {
    DEFAULT_TOKEN_URL.to_string()
}

fn default_profile_url() -> String {
    DEFAULT_PROFILE_URL.to_string()
}

impl IntercomOptions {
    /// Creates options with the Intercom endpoints.
    #[must_use]
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            callback_url: None,
            authorization_url: default_authorization_url(),
            token_url: default_token_url(),
            grant_type: GrantType::AuthorizationCode,
            profile_url: default_profile_url(),
        }
    }

    /// Loads options from `INTERCOM_*` environment variables
    /// (`INTERCOM_CLIENT_ID`, `INTERCOM_CLIENT_SECRET`,
    /// `INTERCOM_CALLBACK_URL`, ...).
    ///
    /// # Errors
    /// Returns an error if a required variable is missing or a value
    /// cannot be deserialized.
    pub fn from_env() -> SetupResult<Self> {
        Self::from_environment(Environment::with_prefix(ENV_PREFIX))
    }

    /// Loads options from a prepared `config` environment source.
    ///
    /// # Errors
    /// Returns an error if a required key is missing or a value cannot be
    /// deserialized.
    pub fn from_environment(environment: Environment) -> SetupResult<Self> {
        let options = Config::builder()
            .add_source(environment)
            .build()?
            .try_deserialize()?;

        Ok(options)
    }

    /// Sets the callback URL.
    #[must_use]
    pub fn with_callback_url(mut self, callback_url: impl Into<String>) -> Self {
        self.callback_url = Some(callback_url.into());
        self
    }

    /// Overrides the authorization endpoint.
    #[must_use]
    pub fn with_authorization_url(mut self, url: impl Into<String>) -> Self {
        self.authorization_url = url.into();
        self
    }

    /// Overrides the token endpoint.
    #[must_use]
    pub fn with_token_url(mut self, url: impl Into<String>) -> Self {
        self.token_url = url.into();
        self
    }

    /// Overrides the current-user endpoint.
    #[must_use]
    pub fn with_profile_url(mut self, url: impl Into<String>) -> Self {
        self.profile_url = url.into();
        self
    }

    /// Builds the settings handed to the `OAuth2` runtime.
    ///
    /// # Errors
    /// Returns an error if an endpoint is not a valid URL or the client id
    /// is empty.
    pub fn client_settings(&self) -> DomainResult<OAuth2ClientSettings> {
        let mut settings = OAuth2ClientSettings::new(
            parse_url("authorization_url", &self.authorization_url)?,
            parse_url("token_url", &self.token_url)?,
            self.client_id.clone(),
            self.client_secret.clone(),
            self.callback_url
                .as_deref()
                .map(|url| parse_url("callback_url", url))
                .transpose()?,
        )?;
        settings.grant_type = self.grant_type;

        Ok(settings)
    }

    /// Parses the current-user endpoint.
    ///
    /// # Errors
    /// Returns an error if the endpoint is not a valid URL.
    pub fn profile_endpoint(&self) -> DomainResult<Url> {
        parse_url("profile_url", &self.profile_url)
    }
}

impl fmt::Debug for IntercomOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntercomOptions")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("callback_url", &self.callback_url)
            .field("authorization_url", &self.authorization_url)
            .field("token_url", &self.token_url)
            .field("grant_type", &self.grant_type)
            .field("profile_url", &self.profile_url)
            .finish()
    }
}

/// Parses an absolute URL, naming the offending setting on failure.
pub(crate) fn parse_url(field: &'static str, value: &str) -> DomainResult<Url> {
    Url::parse(value).map_err(|e| DomainError::InvalidUrl {
        field,
        message: format!("{e}: {value}"),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::error::SetupError;
    use pretty_assertions::assert_eq;

    fn env(vars: &[(&str, &str)]) -> Environment {
        let source: config::Map<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        Environment::with_prefix(ENV_PREFIX).source(Some(source))
    }

    #[test]
    fn test_defaults() {
        let options = IntercomOptions::new("client", "secret");
        let settings = options.client_settings().unwrap();

        assert_eq!(
            settings.authorization_endpoint.as_str(),
            "https://app.intercom.io/oauth"
        );
        assert_eq!(
            settings.token_endpoint.as_str(),
            "https://api.intercom.io/auth/eagle/token"
        );
        assert_eq!(settings.grant_type, GrantType::AuthorizationCode);
        assert_eq!(settings.callback_url, None);
        assert_eq!(
            options.profile_endpoint().unwrap().as_str(),
            "https://api.intercom.io/users"
        );
    }

    #[test]
    fn test_overrides_pass_through() {
        let options = IntercomOptions::new("client", "secret")
            .with_callback_url("https://www.example.net/auth/intercom/callback")
            .with_authorization_url("https://auth.example.net/oauth")
            .with_token_url("https://auth.example.net/token");
        let settings = options.client_settings().unwrap();

        assert_eq!(settings.client_id, "client");
        assert_eq!(settings.client_secret, "secret");
        assert_eq!(
            settings.callback_url.as_ref().map(Url::as_str),
            Some("https://www.example.net/auth/intercom/callback")
        );
        assert_eq!(
            settings.authorization_endpoint.as_str(),
            "https://auth.example.net/oauth"
        );
        assert_eq!(settings.token_endpoint.as_str(), "https://auth.example.net/token");
    }

    #[test]
    fn test_invalid_url_names_field() {
        let options = IntercomOptions::new("client", "secret").with_token_url("not a url");
        let error = options.client_settings().unwrap_err();

        assert!(matches!(
            error,
            DomainError::InvalidUrl {
                field: "token_url",
                ..
            }
        ));
    }

    #[test]
    fn test_empty_client_id_rejected() {
        let error = IntercomOptions::new("", "secret")
            .client_settings()
            .unwrap_err();
        assert_eq!(error, DomainError::MissingSetting("client_id"));
    }

    #[test]
    fn test_from_environment() {
        let options = IntercomOptions::from_environment(env(&[
            ("INTERCOM_CLIENT_ID", "123-456-789"),
            ("INTERCOM_CLIENT_SECRET", "shhh-its-a-secret"),
            (
                "INTERCOM_CALLBACK_URL",
                "https://www.example.net/auth/intercom/callback",
            ),
        ]))
        .unwrap();

        assert_eq!(options.client_id, "123-456-789");
        assert_eq!(options.client_secret, "shhh-its-a-secret");
        assert_eq!(
            options.callback_url.as_deref(),
            Some("https://www.example.net/auth/intercom/callback")
        );
        assert_eq!(options.authorization_url, DEFAULT_AUTHORIZATION_URL);
        assert_eq!(options.grant_type, GrantType::AuthorizationCode);
    }

    #[test]
    fn test_from_environment_requires_client_id() {
        let result = IntercomOptions::from_environment(env(&[(
            "INTERCOM_CLIENT_SECRET",
            "shhh-its-a-secret",
        )]));
        assert!(matches!(result, Err(SetupError::Config(_))));
    }

    #[test]
    fn test_from_environment_rejects_other_grant_types() {
        let result = IntercomOptions::from_environment(env(&[
            ("INTERCOM_CLIENT_ID", "123"),
            ("INTERCOM_GRANT_TYPE", "client_credentials"),
        ]));
        assert!(matches!(result, Err(SetupError::Config(_))));
    }

    #[test]
    fn test_debug_redacts_secret() {
        let options = IntercomOptions::new("client", "shhh-its-a-secret");
        assert!(!format!("{options:?}").contains("shhh"));
    }
}
