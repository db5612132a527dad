//! Intercom Auth Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer: the reqwest-backed Intercom
//! profile adapter and the strategy that bundles it with the
//! `OAuth2` client settings.

pub mod adapters;
pub mod auth;
pub mod error;

pub use adapters::{DEFAULT_PROFILE_URL, IntercomProfileAdapter};
pub use auth::{
    DEFAULT_AUTHORIZATION_URL, DEFAULT_TOKEN_URL, IntercomOptions, IntercomStrategy,
};
pub use error::{SetupError, SetupResult};
