//! Adapters implementing application ports.

mod intercom_profile;

pub use intercom_profile::{DEFAULT_PROFILE_URL, IntercomProfileAdapter};
