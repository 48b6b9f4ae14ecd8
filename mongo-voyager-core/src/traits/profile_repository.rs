//! Profile persistence abstract Trait

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::ConnectionProfile;

/// Connection profile repository Trait
///
/// Platform implementation:
/// - TUI / desktop: `JsonProfileRepository` (single JSON file, full rewrite
///   on every mutation)
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Get all profiles, insertion order preserved
    async fn find_all(&self) -> CoreResult<Vec<ConnectionProfile>>;

    /// Get a profile by name
    ///
    /// # Arguments
    /// * `name` - Profile name
    async fn find_by_name(&self, name: &str) -> CoreResult<Option<ConnectionProfile>>;

    /// Save a profile (insert, or replace the entry with the same name
    /// keeping its list position)
    ///
    /// # Arguments
    /// * `profile` - Profile data
    async fn save(&self, profile: &ConnectionProfile) -> CoreResult<()>;

    /// Delete a profile
    ///
    /// Returns `CoreError::ProfileNotFound` when `name` is absent.
    ///
    /// # Arguments
    /// * `name` - Profile name
    async fn delete(&self, name: &str) -> CoreResult<()>;
}
