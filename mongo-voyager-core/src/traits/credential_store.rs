//! Credential storage abstract Trait

use async_trait::async_trait;

use crate::error::CoreResult;

/// Credential store Trait
///
/// Passwords are keyed by profile name; the profile itself never carries
/// the password.
///
/// Platform implementations:
/// - Desktop / TUI: `KeyringCredentialStore` (keyring crate: macOS Keychain,
///   Windows Credential Manager, Linux Secret Service)
/// - Tests: in-memory mock
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Get the password for a profile
    ///
    /// # Returns
    /// * `Ok(Some(password))` - a password is stored
    /// * `Ok(None)` - no entry for this profile
    async fn get(&self, profile_name: &str) -> CoreResult<Option<String>>;

    /// Set the password for a profile
    ///
    /// # Arguments
    /// * `profile_name` - Profile name
    /// * `password` - Password to store
    async fn set(&self, profile_name: &str, password: &str) -> CoreResult<()>;

    /// Remove the password for a profile
    ///
    /// Removing an absent entry is not an error; the caller decides whether
    /// absence matters.
    async fn remove(&self, profile_name: &str) -> CoreResult<()>;

    /// Verify the store is functional (round-trip self-test at startup).
    ///
    /// Adapters backed by an OS keychain should write, read back, and delete
    /// a throwaway entry. In-memory implementations can keep the default.
    async fn verify(&self) -> CoreResult<()> {
        Ok(())
    }
}
