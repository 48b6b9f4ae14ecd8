//! Business logic service layer

mod profile_service;
mod query_service;

pub use profile_service::ProfileService;
pub use query_service::{QueryService, DEFAULT_PAGE_SIZE, MAX_QUERY_LIMIT};

use std::sync::Arc;

use crate::traits::{CredentialStore, ProfileRepository};

/// Service context - holds all storage dependencies
///
/// The platform layer creates this context and injects platform-specific
/// storage implementations.
pub struct ServiceContext {
    /// Profile persistence repository
    profile_repository: Arc<dyn ProfileRepository>,
    /// Credential storage
    credential_store: Arc<dyn CredentialStore>,
}

impl ServiceContext {
    /// Create a service context
    #[must_use]
    pub fn new(
        profile_repository: Arc<dyn ProfileRepository>,
        credential_store: Arc<dyn CredentialStore>,
    ) -> Self {
        Self {
            profile_repository,
            credential_store,
        }
    }

    /// Profile repository accessor
    #[must_use]
    pub fn profile_repository(&self) -> &Arc<dyn ProfileRepository> {
        &self.profile_repository
    }

    /// Credential store accessor
    #[must_use]
    pub fn credential_store(&self) -> &Arc<dyn CredentialStore> {
        &self.credential_store
    }
}
