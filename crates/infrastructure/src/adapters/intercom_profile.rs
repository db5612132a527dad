//! Intercom profile adapter using reqwest.
//!
//! This adapter implements the `ProfileFetcher` port against Intercom's
//! current-user endpoint. It is the only piece of the strategy that talks
//! to the network; the authorization redirect and code exchange belong to
//! the `OAuth2` runtime.

use async_trait::async_trait;
use intercom_auth_application::ProfileFetcher;
use intercom_auth_domain::{NormalizedProfile, ProfileError, ProfileResult};
use reqwest::header::{ACCEPT, HeaderValue};
use reqwest::{Client, Request};
use url::Url;

use crate::error::SetupResult;

/// Intercom's current-user endpoint.
pub const DEFAULT_PROFILE_URL: &str = "https://api.intercom.io/users";

const USER_AGENT: &str = concat!("intercom-auth/", env!("CARGO_PKG_VERSION"));

/// Fetches the token owner's profile from Intercom.
///
/// Holds no per-call state. The wrapped `reqwest::Client` is a shared
/// connection pool, so one adapter serves any number of concurrent calls.
#[derive(Debug, Clone)]
pub struct IntercomProfileAdapter {
    client: Client,
    profile_url: Url,
}

impl IntercomProfileAdapter {
    /// Creates an adapter for the public Intercom API.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new() -> SetupResult<Self> {
        let profile_url = crate::auth::parse_url("profile_url", DEFAULT_PROFILE_URL)?;
        Self::with_profile_url(profile_url)
    }

    /// Creates an adapter that reads profiles from `profile_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_profile_url(profile_url: Url) -> SetupResult<Self> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self::with_client(client, profile_url))
    }

    /// Creates an adapter with a custom reqwest client.
    #[must_use]
    pub const fn with_client(client: Client, profile_url: Url) -> Self {
        Self {
            client,
            profile_url,
        }
    }

    /// The endpoint queried by [`fetch_profile`](ProfileFetcher::fetch_profile).
    #[must_use]
    pub const fn profile_url(&self) -> &Url {
        &self.profile_url
    }

    /// Builds the profile request: a body-less GET carrying a single
    /// bearer `Authorization` header.
    fn build_request(&self, access_token: &str) -> reqwest::Result<Request> {
        self.client
            .get(self.profile_url.clone())
            .bearer_auth(access_token)
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .build()
    }
}

#[async_trait]
impl ProfileFetcher for IntercomProfileAdapter {
    #[tracing::instrument(skip_all, fields(url = %self.profile_url))]
    async fn fetch_profile(&self, access_token: &str) -> ProfileResult<NormalizedProfile> {
        let request = self
            .build_request(access_token)
            .map_err(|e| ProfileError::fetch(None, e))?;

        let response = self
            .client
            .execute(request)
            .await
            .map_err(|e| ProfileError::fetch(None, e))?;

        let status = response.status();
        tracing::debug!(status = status.as_u16(), "profile response received");

        let body = response
            .error_for_status()
            .map_err(|e| ProfileError::fetch(Some(status.as_u16()), e))?
            .bytes()
            .await
            .map_err(|e| ProfileError::fetch(Some(status.as_u16()), e))?;

        let raw_profile: serde_json::Value = serde_json::from_slice(&body).map_err(|e| {
            tracing::warn!(error = %e, "profile body is not valid JSON");
            ProfileError::Decode(e)
        })?;

        Ok(NormalizedProfile::from_raw(raw_profile))
    }
}
