//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the application core and external systems.
//! Each port is a trait that can be implemented by adapters in the infrastructure layer.

mod profile_fetcher;
mod verifier;

pub use profile_fetcher::ProfileFetcher;
pub use verifier::{VerifyError, VerifyOutcome, Verifier};
