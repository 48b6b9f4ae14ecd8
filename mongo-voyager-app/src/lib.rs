//! Platform-agnostic application bootstrap for Mongo Voyager.
//!
//! Provides `AppState` (service container) and `AppStateBuilder` (adapter
//! injection). Every frontend constructs the state once at startup, pointing
//! the builder at its storage adapters.

pub mod adapters;

use std::path::PathBuf;
use std::sync::Arc;

use mongo_voyager_core::error::{CoreError, CoreResult};
use mongo_voyager_core::services::{ProfileService, QueryService, ServiceContext};
use mongo_voyager_core::traits::{CredentialStore, ProfileRepository};

/// Platform-agnostic application state.
///
/// Holds all services and the `ServiceContext`.
pub struct AppState {
    /// Service context (holds all storage adapters)
    pub ctx: Arc<ServiceContext>,
    /// Connection profile service
    pub profile_service: Arc<ProfileService>,
    /// Query execution service
    pub query_service: QueryService,
}

impl AppState {
    /// Run the startup sequence: a secret-store self-test.
    ///
    /// A broken keychain is reported once here instead of surfacing on the
    /// first save. The failure is not fatal; profiles without passwords
    /// still work.
    pub async fn run_startup(&self) -> CoreResult<()> {
        match self.ctx.credential_store().verify().await {
            Ok(()) => {
                log::info!("Secret store verified");
                Ok(())
            }
            Err(e) => {
                log::error!("Secret store self-test failed: {e}");
                Err(e)
            }
        }
    }
}

/// Builder for constructing `AppState` with platform-specific adapters.
///
/// # Required adapters
/// - `profile_repository` - where profiles are stored
/// - `credential_store` - where passwords are stored
pub struct AppStateBuilder {
    profile_repository: Option<Arc<dyn ProfileRepository>>,
    credential_store: Option<Arc<dyn CredentialStore>>,
}

impl AppStateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            profile_repository: None,
            credential_store: None,
        }
    }

    #[must_use]
    pub fn profile_repository(mut self, repo: Arc<dyn ProfileRepository>) -> Self {
        self.profile_repository = Some(repo);
        self
    }

    #[must_use]
    pub fn credential_store(mut self, store: Arc<dyn CredentialStore>) -> Self {
        self.credential_store = Some(store);
        self
    }

    /// Build the `AppState`.
    ///
    /// # Errors
    /// Returns `CoreError::ValidationError` if required adapters are missing.
    pub fn build(self) -> CoreResult<AppState> {
        let profile_repository = self.profile_repository.ok_or_else(|| {
            CoreError::ValidationError("profile_repository is required".to_string())
        })?;
        let credential_store = self.credential_store.ok_or_else(|| {
            CoreError::ValidationError("credential_store is required".to_string())
        })?;

        let ctx = Arc::new(ServiceContext::new(profile_repository, credential_store));
        let profile_service = Arc::new(ProfileService::new(Arc::clone(&ctx)));
        let query_service = QueryService::new();

        Ok(AppState {
            ctx,
            profile_service,
            query_service,
        })
    }
}

impl Default for AppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Default location of the profile file: `<config dir>/mongo-voyager/profiles.json`.
///
/// Falls back to the current directory when the platform config directory
/// cannot be determined.
#[must_use]
pub fn default_profiles_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("mongo-voyager")
        .join("profiles.json")
}
