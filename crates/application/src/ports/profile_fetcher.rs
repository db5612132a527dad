//! Profile fetcher port
//!
//! The narrow capability an `OAuth2` flow controller needs from a provider
//! strategy once it holds an access token.

use std::sync::Arc;

use async_trait::async_trait;
use intercom_auth_domain::{NormalizedProfile, ProfileResult};

/// Port for retrieving the current user's profile.
///
/// Implementations issue exactly one request per call and keep no state
/// between calls, so a single instance can serve concurrent flows.
#[async_trait]
pub trait ProfileFetcher: Send + Sync {
    /// Fetches and normalizes the profile of the token's owner.
    ///
    /// # Arguments
    /// * `access_token` - Bearer token from a completed code exchange
    ///
    /// # Errors
    /// Returns `ProfileError::Fetch` if the request fails or the status is
    /// not a success, and `ProfileError::Decode` if the body is not JSON.
    async fn fetch_profile(&self, access_token: &str) -> ProfileResult<NormalizedProfile>;
}

#[async_trait]
impl<T: ProfileFetcher + ?Sized> ProfileFetcher for Arc<T> {
    async fn fetch_profile(&self, access_token: &str) -> ProfileResult<NormalizedProfile> {
        (**self).fetch_profile(access_token).await
    }
}
