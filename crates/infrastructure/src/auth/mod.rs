//! Intercom strategy configuration and assembly.

mod intercom_strategy;
mod options;

pub use intercom_strategy::IntercomStrategy;
pub use options::{DEFAULT_AUTHORIZATION_URL, DEFAULT_TOKEN_URL, IntercomOptions};

pub(crate) use options::parse_url;
