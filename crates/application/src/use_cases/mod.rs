//! Application use cases (business logic orchestration).

mod complete_authentication;

pub use complete_authentication::*;
