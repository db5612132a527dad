//! Intercom Auth Application - Use cases and ports
//!
//! This crate defines the application layer with:
//! - Port traits (the profile capability the `OAuth2` runtime calls, and the
//!   application-supplied verification callback)
//! - The use case that hands a fetched profile to verification
//! - Application-level error handling

pub mod error;
pub mod ports;
pub mod use_cases;

pub use error::{ApplicationError, ApplicationResult};
pub use ports::{ProfileFetcher, VerifyError, VerifyOutcome, Verifier};
pub use use_cases::CompleteAuthentication;
