//! Keyring-based password store.
//!
//! Uses the system keychain (macOS Keychain, Windows Credential Manager,
//! Linux Secret Service) via the `keyring` crate. One entry per profile:
//! service name is fixed, the entry key is the profile name, so deleting a
//! profile can delete exactly its secret.

use async_trait::async_trait;
use keyring::Entry;

use mongo_voyager_core::error::{CoreError, CoreResult};
use mongo_voyager_core::traits::CredentialStore;

const SERVICE_NAME: &str = "mongo-voyager";
const VERIFY_KEY: &str = "__storage-test__";
const VERIFY_VALUE: &str = "test";

/// Keyring-based password store, one keychain entry per profile.
pub struct KeyringCredentialStore;

impl KeyringCredentialStore {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn entry(profile_name: &str) -> CoreResult<Entry> {
        Entry::new(SERVICE_NAME, profile_name)
            .map_err(|e| CoreError::CredentialError(e.to_string()))
    }

    fn get_sync(profile_name: &str) -> CoreResult<Option<String>> {
        let entry = Self::entry(profile_name)?;
        match entry.get_password() {
            Ok(password) => Ok(Some(password)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(CoreError::CredentialError(e.to_string())),
        }
    }

    fn set_sync(profile_name: &str, password: &str) -> CoreResult<()> {
        Self::entry(profile_name)?
            .set_password(password)
            .map_err(|e| CoreError::CredentialError(e.to_string()))
    }

    fn remove_sync(profile_name: &str) -> CoreResult<()> {
        let entry = Self::entry(profile_name)?;
        match entry.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(CoreError::CredentialError(e.to_string())),
        }
    }

    /// Write, read back, and delete a throwaway entry.
    fn verify_sync() -> CoreResult<()> {
        Self::set_sync(VERIFY_KEY, VERIFY_VALUE)?;
        let read_back = Self::get_sync(VERIFY_KEY)?;
        Self::remove_sync(VERIFY_KEY)?;
        if read_back.as_deref() == Some(VERIFY_VALUE) {
            Ok(())
        } else {
            Err(CoreError::CredentialError(
                "keychain round-trip returned a different value".to_string(),
            ))
        }
    }
}

impl Default for KeyringCredentialStore {
    fn default() -> Self {
        Self::new()
    }
}

// Keychain calls are blocking; every operation hops to the blocking pool.
#[async_trait]
impl CredentialStore for KeyringCredentialStore {
    async fn get(&self, profile_name: &str) -> CoreResult<Option<String>> {
        let name = profile_name.to_string();
        tokio::task::spawn_blocking(move || Self::get_sync(&name))
            .await
            .map_err(|e| CoreError::CredentialError(format!("Task join error: {e}")))?
    }

    async fn set(&self, profile_name: &str, password: &str) -> CoreResult<()> {
        let name = profile_name.to_string();
        let password = password.to_string();
        tokio::task::spawn_blocking(move || Self::set_sync(&name, &password))
            .await
            .map_err(|e| CoreError::CredentialError(format!("Task join error: {e}")))??;
        log::info!("Password saved for profile: {profile_name}");
        Ok(())
    }

    async fn remove(&self, profile_name: &str) -> CoreResult<()> {
        let name = profile_name.to_string();
        tokio::task::spawn_blocking(move || Self::remove_sync(&name))
            .await
            .map_err(|e| CoreError::CredentialError(format!("Task join error: {e}")))??;
        log::info!("Password removed for profile: {profile_name}");
        Ok(())
    }

    async fn verify(&self) -> CoreResult<()> {
        tokio::task::spawn_blocking(Self::verify_sync)
            .await
            .map_err(|e| CoreError::CredentialError(format!("Task join error: {e}")))?
    }
}
