#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
//! Integration tests for `AppStateBuilder` and the startup sequence.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use mongo_voyager_app::adapters::JsonProfileRepository;
use mongo_voyager_app::AppStateBuilder;
use mongo_voyager_core::error::{CoreError, CoreResult};
use mongo_voyager_core::traits::{CredentialStore, ProfileRepository};
use mongo_voyager_core::types::ConnectionProfile;

// ===== Mock Implementations =====

/// In-memory credential store with a configurable `verify` outcome.
struct MemoryCredentialStore {
    passwords: RwLock<HashMap<String, String>>,
    verify_error: Option<String>,
}

impl MemoryCredentialStore {
    fn new() -> Self {
        Self {
            passwords: RwLock::new(HashMap::new()),
            verify_error: None,
        }
    }

    fn with_verify_error(msg: &str) -> Self {
        Self {
            passwords: RwLock::new(HashMap::new()),
            verify_error: Some(msg.to_string()),
        }
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn get(&self, profile_name: &str) -> CoreResult<Option<String>> {
        Ok(self.passwords.read().await.get(profile_name).cloned())
    }

    async fn set(&self, profile_name: &str, password: &str) -> CoreResult<()> {
        self.passwords
            .write()
            .await
            .insert(profile_name.to_string(), password.to_string());
        Ok(())
    }

    async fn remove(&self, profile_name: &str) -> CoreResult<()> {
        self.passwords.write().await.remove(profile_name);
        Ok(())
    }

    async fn verify(&self) -> CoreResult<()> {
        match &self.verify_error {
            Some(msg) => Err(CoreError::CredentialError(msg.clone())),
            None => Ok(()),
        }
    }
}

// ===== Helpers =====

fn make_profile(name: &str) -> ConnectionProfile {
    ConnectionProfile::new(name, "localhost", 27017, "testdb", None, false)
}

fn build_state(
    repo: Arc<dyn ProfileRepository>,
    creds: Arc<dyn CredentialStore>,
) -> mongo_voyager_app::AppState {
    AppStateBuilder::new()
        .profile_repository(repo)
        .credential_store(creds)
        .build()
        .expect("failed to build AppState")
}

// ===== Tests =====

#[tokio::test]
async fn builder_requires_profile_repository() {
    let result = AppStateBuilder::new()
        .credential_store(Arc::new(MemoryCredentialStore::new()))
        .build();
    assert!(matches!(result, Err(CoreError::ValidationError(_))));
}

#[tokio::test]
async fn builder_requires_credential_store() {
    let tmp = tempfile::tempdir().expect("failed to create temp dir");
    let repo = Arc::new(JsonProfileRepository::new(tmp.path().join("p.json")));
    let result = AppStateBuilder::new().profile_repository(repo).build();
    assert!(matches!(result, Err(CoreError::ValidationError(_))));
}

#[tokio::test]
async fn startup_succeeds_with_working_secret_store() {
    let tmp = tempfile::tempdir().expect("failed to create temp dir");
    let repo = Arc::new(JsonProfileRepository::new(tmp.path().join("p.json")));
    let state = build_state(repo, Arc::new(MemoryCredentialStore::new()));

    state.run_startup().await.expect("startup failed");
}

#[tokio::test]
async fn startup_surfaces_secret_store_failure() {
    let tmp = tempfile::tempdir().expect("failed to create temp dir");
    let repo = Arc::new(JsonProfileRepository::new(tmp.path().join("p.json")));
    let state = build_state(
        repo,
        Arc::new(MemoryCredentialStore::with_verify_error("keychain locked")),
    );

    let err = state.run_startup().await.unwrap_err();
    assert!(matches!(err, CoreError::CredentialError(_)));
}

#[tokio::test]
async fn services_share_the_injected_adapters() {
    let tmp = tempfile::tempdir().expect("failed to create temp dir");
    let repo = Arc::new(JsonProfileRepository::new(tmp.path().join("p.json")));
    let state = build_state(repo.clone(), Arc::new(MemoryCredentialStore::new()));

    state
        .profile_service
        .save(make_profile("shared"), "pw")
        .await
        .expect("save failed");

    // The profile went through the service into the injected repository.
    assert!(repo.find_by_name("shared").await.unwrap().is_some());

    let resolved = state.profile_service.resolve("shared").await.unwrap();
    assert_eq!(resolved.password, "pw");
}
