//! OAuth2 client settings, granted tokens and profile errors

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use crate::error::{DomainError, DomainResult};

/// `OAuth2` grant type used against the token endpoint.
///
/// Intercom only issues tokens through the authorization-code grant, so
/// that is the single supported value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum GrantType {
    /// Exchange an authorization code for an access token.
    #[default]
    AuthorizationCode,
}

impl GrantType {
    /// Wire value sent as the `grant_type` parameter.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AuthorizationCode => "authorization_code",
        }
    }

    /// Parses a wire value.
    ///
    /// # Errors
    /// Returns [`DomainError::UnsupportedGrantType`] for anything other
    /// than `authorization_code`.
    pub fn parse(value: &str) -> DomainResult<Self> {
        match value {
            "authorization_code" => Ok(Self::AuthorizationCode),
            other => Err(DomainError::UnsupportedGrantType(other.to_string())),
        }
    }
}

impl fmt::Display for GrantType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Settings handed to the delegated `OAuth2` runtime.
///
/// The runtime owns the redirect and code exchange; these values are
/// passed through to it unchanged.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OAuth2ClientSettings {
    /// Where the runtime sends the user to start the flow.
    pub authorization_endpoint: Url,
    /// Where the runtime exchanges the code for a token.
    pub token_endpoint: Url,
    /// Always [`GrantType::AuthorizationCode`].
    pub grant_type: GrantType,
    /// Intercom application client id.
    pub client_id: String,
    /// Intercom application client secret.
    pub client_secret: String,
    /// Redirect target; may be left to the Intercom application settings.
    pub callback_url: Option<Url>,
}

impl OAuth2ClientSettings {
    /// Creates settings for the authorization-code grant.
    ///
    /// # Errors
    /// Returns [`DomainError::MissingSetting`] if `client_id` is empty.
    pub fn new(
        authorization_endpoint: Url,
        token_endpoint: Url,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        callback_url: Option<Url>,
    ) -> DomainResult<Self> {
        let client_id = client_id.into();
        if client_id.trim().is_empty() {
            return Err(DomainError::MissingSetting("client_id"));
        }

        Ok(Self {
            authorization_endpoint,
            token_endpoint,
            grant_type: GrantType::AuthorizationCode,
            client_id,
            client_secret: client_secret.into(),
            callback_url,
        })
    }
}

impl fmt::Debug for OAuth2ClientSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OAuth2ClientSettings")
            .field("authorization_endpoint", &self.authorization_endpoint.as_str())
            .field("token_endpoint", &self.token_endpoint.as_str())
            .field("grant_type", &self.grant_type)
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("callback_url", &self.callback_url.as_ref().map(Url::as_str))
            .finish()
    }
}

/// Tokens produced by a completed authorization-code exchange.
#[derive(Clone, PartialEq, Eq)]
pub struct GrantedTokens {
    /// Bearer token presented to the Intercom API.
    pub access_token: String,
    /// Refresh token, when the provider issued one.
    pub refresh_token: Option<String>,
}

impl GrantedTokens {
    /// Creates tokens without a refresh token.
    #[must_use]
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token: None,
        }
    }

    /// Attaches a refresh token.
    #[must_use]
    pub fn with_refresh_token(mut self, refresh_token: impl Into<String>) -> Self {
        self.refresh_token = Some(refresh_token.into());
        self
    }

    /// Get a preview of a token (first 8 chars + ...).
    #[must_use]
    pub fn token_preview(token: &str) -> String {
        match token.char_indices().nth(8) {
            Some((idx, _)) if token.chars().count() > 12 => format!("{}...", &token[..idx]),
            _ => token.to_string(),
        }
    }
}

impl fmt::Debug for GrantedTokens {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GrantedTokens")
            .field("access_token", &Self::token_preview(&self.access_token))
            .field(
                "refresh_token",
                &self.refresh_token.as_deref().map(Self::token_preview),
            )
            .finish()
    }
}

/// Errors produced while fetching a user profile.
#[derive(Debug, Error)]
pub enum ProfileError {
    /// The HTTP request failed: connection error or non-success status.
    #[error("failed to fetch user profile")]
    Fetch {
        /// HTTP status, when a response was received.
        status: Option<u16>,
        /// Underlying transport error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The response body is not valid JSON.
    #[error("failed to parse user profile")]
    Decode(#[source] serde_json::Error),
}

impl ProfileError {
    /// Wraps a transport error.
    pub fn fetch(
        status: Option<u16>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::Fetch {
            status,
            source: source.into(),
        }
    }

    /// Returns true for transport and status failures.
    #[must_use]
    pub const fn is_fetch(&self) -> bool {
        matches!(self, Self::Fetch { .. })
    }

    /// Returns true for malformed payloads.
    #[must_use]
    pub const fn is_decode(&self) -> bool {
        matches!(self, Self::Decode(_))
    }

    /// HTTP status of the failed response, if any.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Fetch { status, .. } => *status,
            Self::Decode(_) => None,
        }
    }
}

impl From<serde_json::Error> for ProfileError {
    fn from(error: serde_json::Error) -> Self {
        Self::Decode(error)
    }
}

/// Result type alias for profile fetches.
pub type ProfileResult<T> = Result<T, ProfileError>;
