//! Intercom Auth Domain - Core types
//!
//! This crate defines the domain model for the Intercom OAuth2 strategy:
//! the normalized profile, the client settings handed to the OAuth2
//! runtime, and the error types of a profile fetch.
//! All types here are pure Rust with no I/O dependencies.

pub mod auth;
pub mod error;

pub use auth::{
    GrantType, GrantedTokens, NormalizedProfile, OAuth2ClientSettings, PROVIDER_NAME,
    ProfileError, ProfileResult,
};
pub use error::{DomainError, DomainResult};
