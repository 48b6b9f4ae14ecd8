//! JSON file profile repository.
//!
//! All profiles live in one JSON file (an array, insertion order is file
//! order). Every mutation rewrites the whole file; at this scale a partial
//! in-place update buys nothing and the full rewrite keeps the file readable
//! by hand.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::Mutex;

use mongo_voyager_core::error::{CoreError, CoreResult};
use mongo_voyager_core::traits::ProfileRepository;
use mongo_voyager_core::types::ConnectionProfile;

/// JSON file-backed profile repository.
pub struct JsonProfileRepository {
    path: PathBuf,
    /// Serializes read-modify-write cycles against the file.
    lock: Mutex<()>,
}

impl JsonProfileRepository {
    /// Create a repository over the given file. The file and its parent
    /// directory are created lazily on first save.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// The file this repository reads and writes.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_all(&self) -> CoreResult<Vec<ConnectionProfile>> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(json) => {
                if json.trim().is_empty() {
                    return Ok(Vec::new());
                }
                serde_json::from_str(&json)
                    .map_err(|e| CoreError::SerializationError(e.to_string()))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(CoreError::PersistenceError(e.to_string())),
        }
    }

    async fn write_all(&self, profiles: &[ConnectionProfile]) -> CoreResult<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| CoreError::PersistenceError(e.to_string()))?;
        }
        let json = serde_json::to_string_pretty(profiles)
            .map_err(|e| CoreError::SerializationError(e.to_string()))?;
        tokio::fs::write(&self.path, json)
            .await
            .map_err(|e| CoreError::PersistenceError(e.to_string()))
    }
}

#[async_trait]
impl ProfileRepository for JsonProfileRepository {
    async fn find_all(&self) -> CoreResult<Vec<ConnectionProfile>> {
        let _guard = self.lock.lock().await;
        self.read_all().await
    }

    async fn find_by_name(&self, name: &str) -> CoreResult<Option<ConnectionProfile>> {
        let _guard = self.lock.lock().await;
        let profiles = self.read_all().await?;
        Ok(profiles.into_iter().find(|p| p.name == name))
    }

    async fn save(&self, profile: &ConnectionProfile) -> CoreResult<()> {
        let _guard = self.lock.lock().await;
        let mut profiles = self.read_all().await?;
        match profiles.iter_mut().find(|p| p.name == profile.name) {
            Some(existing) => *existing = profile.clone(),
            None => profiles.push(profile.clone()),
        }
        self.write_all(&profiles).await
    }

    async fn delete(&self, name: &str) -> CoreResult<()> {
        let _guard = self.lock.lock().await;
        let mut profiles = self.read_all().await?;
        let before = profiles.len();
        profiles.retain(|p| p.name != name);
        if profiles.len() == before {
            return Err(CoreError::ProfileNotFound(name.to_string()));
        }
        self.write_all(&profiles).await
    }
}
