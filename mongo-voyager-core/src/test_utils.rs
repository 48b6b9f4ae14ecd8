//! Test helpers
//!
//! In-memory mock stores and factory functions for the service tests.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::{CoreError, CoreResult};
use crate::services::{ProfileService, ServiceContext};
use crate::traits::{CredentialStore, ProfileRepository};
use crate::types::ConnectionProfile;

// ===== MockProfileRepository =====

pub struct MockProfileRepository {
    /// Insertion-ordered, like the JSON file adapter.
    profiles: RwLock<Vec<ConnectionProfile>>,
    /// When Some, save returns this error (exercises rollback paths).
    save_error: RwLock<Option<String>>,
}

impl MockProfileRepository {
    pub fn new() -> Self {
        Self {
            profiles: RwLock::new(Vec::new()),
            save_error: RwLock::new(None),
        }
    }

    pub async fn set_save_error(&self, err: Option<String>) {
        *self.save_error.write().await = err;
    }
}

#[async_trait]
impl ProfileRepository for MockProfileRepository {
    async fn find_all(&self) -> CoreResult<Vec<ConnectionProfile>> {
        Ok(self.profiles.read().await.clone())
    }

    async fn find_by_name(&self, name: &str) -> CoreResult<Option<ConnectionProfile>> {
        Ok(self
            .profiles
            .read()
            .await
            .iter()
            .find(|p| p.name == name)
            .cloned())
    }

    async fn save(&self, profile: &ConnectionProfile) -> CoreResult<()> {
        if let Some(ref msg) = *self.save_error.read().await {
            return Err(CoreError::PersistenceError(msg.clone()));
        }
        let mut profiles = self.profiles.write().await;
        match profiles.iter_mut().find(|p| p.name == profile.name) {
            Some(existing) => *existing = profile.clone(),
            None => profiles.push(profile.clone()),
        }
        Ok(())
    }

    async fn delete(&self, name: &str) -> CoreResult<()> {
        let mut profiles = self.profiles.write().await;
        let before = profiles.len();
        profiles.retain(|p| p.name != name);
        if profiles.len() == before {
            return Err(CoreError::ProfileNotFound(name.to_string()));
        }
        Ok(())
    }
}

// ===== MockCredentialStore =====

pub struct MockCredentialStore {
    passwords: RwLock<HashMap<String, String>>,
    /// When Some, set returns this error.
    set_error: RwLock<Option<String>>,
    /// When Some, remove returns this error.
    remove_error: RwLock<Option<String>>,
}

impl MockCredentialStore {
    pub fn new() -> Self {
        Self {
            passwords: RwLock::new(HashMap::new()),
            set_error: RwLock::new(None),
            remove_error: RwLock::new(None),
        }
    }

    pub async fn set_set_error(&self, err: Option<String>) {
        *self.set_error.write().await = err;
    }

    pub async fn set_remove_error(&self, err: Option<String>) {
        *self.remove_error.write().await = err;
    }
}

#[async_trait]
impl CredentialStore for MockCredentialStore {
    async fn get(&self, profile_name: &str) -> CoreResult<Option<String>> {
        Ok(self.passwords.read().await.get(profile_name).cloned())
    }

    async fn set(&self, profile_name: &str, password: &str) -> CoreResult<()> {
        if let Some(ref msg) = *self.set_error.read().await {
            return Err(CoreError::CredentialError(msg.clone()));
        }
        self.passwords
            .write()
            .await
            .insert(profile_name.to_string(), password.to_string());
        Ok(())
    }

    async fn remove(&self, profile_name: &str) -> CoreResult<()> {
        if let Some(ref msg) = *self.remove_error.read().await {
            return Err(CoreError::CredentialError(msg.clone()));
        }
        self.passwords.write().await.remove(profile_name);
        Ok(())
    }
}

// ===== Factories =====

pub fn create_test_context() -> (
    Arc<ServiceContext>,
    Arc<MockProfileRepository>,
    Arc<MockCredentialStore>,
) {
    let repo = Arc::new(MockProfileRepository::new());
    let creds = Arc::new(MockCredentialStore::new());
    let ctx = Arc::new(ServiceContext::new(repo.clone(), creds.clone()));
    (ctx, repo, creds)
}

pub fn create_test_profile_service() -> (
    ProfileService,
    Arc<MockProfileRepository>,
    Arc<MockCredentialStore>,
) {
    let (ctx, repo, creds) = create_test_context();
    (ProfileService::new(ctx), repo, creds)
}

/// A profile pointing at a local default-port server.
pub fn test_profile(name: &str) -> ConnectionProfile {
    ConnectionProfile::new(name, "localhost", 27017, "testdb", None, false)
}
