//! Mongo Voyager Core Library
//!
//! Provides core business logic for MongoDB browsing clients, including:
//! - Connection profile management (Profile Service)
//! - Query execution and pagination (Query Service)
//! - Relaxed shell-style query parsing
//!
//! This library is platform-independent: profile and credential storage are
//! abstracted through traits, so desktop and terminal frontends can inject
//! their own adapters.

pub mod error;
pub mod query;
pub mod services;
pub mod traits;
pub mod types;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use services::ServiceContext;
pub use traits::{CredentialStore, ProfileRepository};
