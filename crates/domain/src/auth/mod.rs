//! Authentication domain types

mod profile;
mod types;

pub use profile::{NormalizedProfile, PROVIDER_NAME};
pub use types::{GrantType, GrantedTokens, OAuth2ClientSettings, ProfileError, ProfileResult};
