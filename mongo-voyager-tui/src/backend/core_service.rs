//! Core service bridge
//!
//! The UI loop is synchronous; the core services are async. This module
//! owns a tokio runtime and exposes blocking wrappers around the profile
//! and query services. Calls block the UI for their duration, which is
//! acceptable for a single-user terminal client; every driver call is
//! bounded by the core's connect timeout.

use std::sync::Arc;

use anyhow::Context;
use bson::Document;
use tokio::runtime::Runtime;

use mongo_voyager_app::adapters::{JsonProfileRepository, KeyringCredentialStore};
use mongo_voyager_app::{default_profiles_path, AppState, AppStateBuilder};
use mongo_voyager_core::error::{CoreError, CoreResult};
use mongo_voyager_core::types::{
    ConnectionProfile, ConnectionTestReport, ResolvedProfile, ResultPage,
};

/// TUI core service
///
/// Holds the runtime, the application state, and the currently active
/// connection (a resolved profile; a fresh driver client is opened per
/// operation).
pub struct CoreService {
    runtime: Runtime,
    state: AppState,
    active: Option<ResolvedProfile>,
}

impl CoreService {
    /// Construct the backend: runtime, adapters, services, startup check.
    pub fn new() -> anyhow::Result<Self> {
        let runtime = Runtime::new().context("failed to start async runtime")?;

        let state = AppStateBuilder::new()
            .profile_repository(Arc::new(JsonProfileRepository::new(default_profiles_path())))
            .credential_store(Arc::new(KeyringCredentialStore::new()))
            .build()
            .context("failed to build application state")?;

        // A broken keychain is not fatal; passwordless profiles still work.
        if let Err(e) = runtime.block_on(state.run_startup()) {
            log::warn!("Startup check failed: {e}");
        }

        Ok(Self {
            runtime,
            state,
            active: None,
        })
    }

    // ========== Profiles ==========

    pub fn list_profiles(&self) -> CoreResult<Vec<ConnectionProfile>> {
        self.runtime.block_on(self.state.profile_service.list())
    }

    pub fn save_profile(&self, profile: ConnectionProfile, password: &str) -> CoreResult<()> {
        self.runtime
            .block_on(self.state.profile_service.save(profile, password))
    }

    pub fn rename_profile(
        &self,
        old_name: &str,
        profile: ConnectionProfile,
        password: &str,
    ) -> CoreResult<()> {
        self.runtime
            .block_on(self.state.profile_service.rename(old_name, profile, password))
    }

    /// Delete a saved profile. The active connection is dropped only once
    /// the delete has actually succeeded.
    pub fn delete_profile(&mut self, name: &str) -> CoreResult<()> {
        self.runtime
            .block_on(self.state.profile_service.delete(name))?;
        if self.active.as_ref().is_some_and(|a| a.profile.name == name) {
            self.active = None;
        }
        Ok(())
    }

    /// Test a saved profile with its stored password.
    pub fn test_saved_profile(&self, name: &str) -> CoreResult<ConnectionTestReport> {
        let resolved = self
            .runtime
            .block_on(self.state.profile_service.resolve(name))?;
        Ok(self
            .runtime
            .block_on(
                self.state
                    .profile_service
                    .test(resolved.profile, &resolved.password),
            ))
    }

    // ========== Connection ==========

    /// Resolve a profile and make it the active connection. Listing the
    /// collections doubles as the connectivity check.
    pub fn connect(&mut self, name: &str) -> CoreResult<Vec<String>> {
        let resolved = self
            .runtime
            .block_on(self.state.profile_service.resolve(name))?;
        let collections = self
            .runtime
            .block_on(self.state.query_service.list_collections(&resolved))?;
        self.active = Some(resolved);
        Ok(collections)
    }

    pub fn active_profile(&self) -> Option<&ConnectionProfile> {
        self.active.as_ref().map(|a| &a.profile)
    }

    fn require_active(&self) -> CoreResult<&ResolvedProfile> {
        self.active
            .as_ref()
            .ok_or_else(|| CoreError::ConnectionError("no active connection".to_string()))
    }

    // ========== Queries ==========

    pub fn list_collections(&self) -> CoreResult<Vec<String>> {
        let resolved = self.require_active()?;
        self.runtime
            .block_on(self.state.query_service.list_collections(resolved))
    }

    pub fn execute_query(
        &self,
        collection: &str,
        query_text: &str,
        projection_text: Option<&str>,
        page: u64,
        page_size: u64,
    ) -> CoreResult<ResultPage> {
        let resolved = self.require_active()?;
        self.runtime.block_on(self.state.query_service.execute(
            resolved,
            collection,
            query_text,
            projection_text,
            page,
            page_size,
        ))
    }

    pub fn sample_documents(&self, collection: &str, limit: u64) -> CoreResult<Vec<Document>> {
        let resolved = self.require_active()?;
        self.runtime.block_on(
            self.state
                .query_service
                .sample_documents(resolved, collection, limit),
        )
    }

    pub fn explain_query(&self, collection: &str, query_text: &str) -> CoreResult<Document> {
        let resolved = self.require_active()?;
        self.runtime.block_on(
            self.state
                .query_service
                .explain(resolved, collection, query_text),
        )
    }

    pub fn list_indexes(&self, collection: &str) -> CoreResult<Vec<Document>> {
        let resolved = self.require_active()?;
        self.runtime
            .block_on(self.state.query_service.list_indexes(resolved, collection))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use mongo_voyager_core::traits::{CredentialStore, ProfileRepository};
    use tokio::sync::RwLock;

    struct MemoryRepository {
        profiles: RwLock<Vec<ConnectionProfile>>,
    }

    #[async_trait]
    impl ProfileRepository for MemoryRepository {
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
            let mut profiles = self.profiles.write().await;
            if let Some(slot) = profiles.iter_mut().find(|p| p.name == profile.name) {
                *slot = profile.clone();
            } else {
                profiles.push(profile.clone());
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

    struct MemoryCredentials;

    #[async_trait]
    impl CredentialStore for MemoryCredentials {
        async fn get(&self, _profile_name: &str) -> CoreResult<Option<String>> {
            Ok(None)
        }

        async fn set(&self, _profile_name: &str, _password: &str) -> CoreResult<()> {
            Ok(())
        }

        async fn remove(&self, _profile_name: &str) -> CoreResult<()> {
            Ok(())
        }
    }

    fn profile(name: &str) -> ConnectionProfile {
        ConnectionProfile::new(name, "localhost", 27017, "appdb", None, false)
    }

    fn resolved(name: &str) -> ResolvedProfile {
        ResolvedProfile {
            profile: profile(name),
            password: String::new(),
        }
    }

    fn service_with(profiles: Vec<ConnectionProfile>) -> CoreService {
        let state = AppStateBuilder::new()
            .profile_repository(Arc::new(MemoryRepository {
                profiles: RwLock::new(profiles),
            }))
            .credential_store(Arc::new(MemoryCredentials))
            .build()
            .unwrap();
        CoreService {
            runtime: Runtime::new().unwrap(),
            state,
            active: None,
        }
    }

    #[test]
    fn failed_delete_keeps_active_connection() {
        let mut service = service_with(vec![]);
        service.active = Some(resolved("primary"));

        let err = service.delete_profile("primary").unwrap_err();
        assert!(matches!(err, CoreError::ProfileNotFound(_)));
        assert_eq!(
            service.active_profile().map(|p| p.name.as_str()),
            Some("primary")
        );
    }

    #[test]
    fn deleting_active_profile_clears_connection() {
        let mut service = service_with(vec![profile("primary")]);
        service.active = Some(resolved("primary"));

        service.delete_profile("primary").unwrap();
        assert!(service.active_profile().is_none());
    }

    #[test]
    fn deleting_other_profile_keeps_connection() {
        let mut service = service_with(vec![profile("primary"), profile("secondary")]);
        service.active = Some(resolved("primary"));

        service.delete_profile("secondary").unwrap();
        assert_eq!(
            service.active_profile().map(|p| p.name.as_str()),
            Some("primary")
        );
    }
}
