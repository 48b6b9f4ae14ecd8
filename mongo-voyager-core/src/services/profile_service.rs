//! Connection profile service
//!
//! The Connection Store: saved profiles live in the profile repository,
//! passwords live in the credential store, both keyed by profile name.
//! Every operation here keeps the two in step.

use std::sync::Arc;

use chrono::Utc;

use crate::error::{CoreError, CoreResult};
use crate::services::query_service;
use crate::services::ServiceContext;
use crate::types::{ConnectionProfile, ConnectionTestReport, ResolvedProfile};

/// Connection profile service
pub struct ProfileService {
    ctx: Arc<ServiceContext>,
}

impl ProfileService {
    /// Create a profile service instance
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// List all saved profiles (without passwords), insertion order preserved.
    pub async fn list(&self) -> CoreResult<Vec<ConnectionProfile>> {
        self.ctx.profile_repository().find_all().await
    }

    /// Save a profile, replacing any existing entry with the same name.
    ///
    /// A non-empty `password` is written to the credential store. If the
    /// credential write fails after a fresh insert, the inserted profile is
    /// rolled back so the two stores never disagree.
    pub async fn save(&self, mut profile: ConnectionProfile, password: &str) -> CoreResult<()> {
        validate(&profile)?;

        let existing = self
            .ctx
            .profile_repository()
            .find_by_name(&profile.name)
            .await?;
        if let Some(ref old) = existing {
            profile.created_at = old.created_at;
        }
        profile.updated_at = Utc::now();

        self.ctx.profile_repository().save(&profile).await?;

        if !password.is_empty() {
            if let Err(e) = self
                .ctx
                .credential_store()
                .set(&profile.name, password)
                .await
            {
                log::error!("Failed to store password for {}, cleaning up: {e}", profile.name);
                if existing.is_none() {
                    if let Err(cleanup_err) =
                        self.ctx.profile_repository().delete(&profile.name).await
                    {
                        log::warn!(
                            "Cleanup: failed to delete profile {}: {cleanup_err}",
                            profile.name
                        );
                    }
                }
                return Err(e);
            }
        }

        log::info!("Profile saved: {}", profile.name);
        Ok(())
    }

    /// Resolve a profile to its driver-ready form, password included.
    ///
    /// The password is the empty string when none is stored.
    pub async fn resolve(&self, name: &str) -> CoreResult<ResolvedProfile> {
        let profile = self
            .ctx
            .profile_repository()
            .find_by_name(name)
            .await?
            .ok_or_else(|| CoreError::ProfileNotFound(name.to_string()))?;

        let password = self
            .ctx
            .credential_store()
            .get(name)
            .await?
            .unwrap_or_default();

        Ok(ResolvedProfile { profile, password })
    }

    /// Delete a profile and its secret-store entry.
    ///
    /// The credential is removed first; if that fails the profile stays in
    /// the list and the user can retry, so no orphan secret is left behind.
    pub async fn delete(&self, name: &str) -> CoreResult<()> {
        self.ctx
            .profile_repository()
            .find_by_name(name)
            .await?
            .ok_or_else(|| CoreError::ProfileNotFound(name.to_string()))?;

        self.ctx.credential_store().remove(name).await?;
        self.ctx.profile_repository().delete(name).await?;

        log::info!("Profile deleted: {name}");
        Ok(())
    }

    /// Rename a profile, migrating both the list entry and the secret-store
    /// entry. `new_profile.name` carries the new name; `password` replaces
    /// the stored one when non-empty, otherwise the old password moves over.
    pub async fn rename(
        &self,
        old_name: &str,
        new_profile: ConnectionProfile,
        password: &str,
    ) -> CoreResult<()> {
        if old_name == new_profile.name {
            return self.save(new_profile, password).await;
        }

        validate(&new_profile)?;

        let old = self
            .ctx
            .profile_repository()
            .find_by_name(old_name)
            .await?
            .ok_or_else(|| CoreError::ProfileNotFound(old_name.to_string()))?;

        // Carry the password over unless a new one was supplied.
        let carried = if password.is_empty() {
            self.ctx.credential_store().get(old_name).await?
        } else {
            Some(password.to_string())
        };

        let mut profile = new_profile;
        profile.created_at = old.created_at;
        profile.updated_at = Utc::now();

        self.ctx.profile_repository().save(&profile).await?;
        if let Some(ref pw) = carried {
            if !pw.is_empty() {
                self.ctx.credential_store().set(&profile.name, pw).await?;
            }
        }

        // Old entries go last; the new pair is already complete.
        self.ctx.credential_store().remove(old_name).await?;
        self.ctx.profile_repository().delete(old_name).await?;

        log::info!("Profile renamed: {old_name} -> {}", profile.name);
        Ok(())
    }

    /// Attempt a short-lived connection with the given profile and password.
    ///
    /// Never persists anything; the outcome is a report, not an error.
    pub async fn test(
        &self,
        profile: ConnectionProfile,
        password: &str,
    ) -> ConnectionTestReport {
        let resolved = ResolvedProfile {
            profile,
            password: password.to_string(),
        };
        match query_service::connect(&resolved).await {
            Ok(_) => ConnectionTestReport {
                success: true,
                message: format!(
                    "Connected to {}:{}",
                    resolved.profile.host, resolved.profile.port
                ),
            },
            Err(e) => ConnectionTestReport {
                success: false,
                message: e.to_string(),
            },
        }
    }
}

/// Reject profiles that cannot key both stores.
fn validate(profile: &ConnectionProfile) -> CoreResult<()> {
    if profile.name.trim().is_empty() {
        return Err(CoreError::ValidationError(
            "profile name must not be empty".to_string(),
        ));
    }
    if profile.host.trim().is_empty() {
        return Err(CoreError::ValidationError(
            "host must not be empty".to_string(),
        ));
    }
    if profile.database.trim().is_empty() {
        return Err(CoreError::ValidationError(
            "database must not be empty".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{create_test_profile_service, test_profile};
    use crate::traits::{CredentialStore, ProfileRepository};

    #[tokio::test]
    async fn save_then_resolve_round_trips_password() {
        let (svc, _, _) = create_test_profile_service();

        svc.save(test_profile("local"), "s3cret").await.unwrap();

        let resolved = svc.resolve("local").await.unwrap();
        assert_eq!(resolved.profile.name, "local");
        assert_eq!(resolved.profile.host, "localhost");
        assert_eq!(resolved.password, "s3cret");
    }

    #[tokio::test]
    async fn resolve_without_stored_password_yields_empty_string() {
        let (svc, _, _) = create_test_profile_service();

        svc.save(test_profile("anon"), "").await.unwrap();

        let resolved = svc.resolve("anon").await.unwrap();
        assert_eq!(resolved.password, "");
    }

    #[tokio::test]
    async fn resolve_unknown_profile_fails() {
        let (svc, _, _) = create_test_profile_service();
        let err = svc.resolve("ghost").await.unwrap_err();
        assert!(matches!(err, CoreError::ProfileNotFound(_)));
    }

    #[tokio::test]
    async fn save_same_name_replaces() {
        let (svc, _, _) = create_test_profile_service();

        svc.save(test_profile("dup"), "first").await.unwrap();
        let mut updated = test_profile("dup");
        updated.port = 27018;
        svc.save(updated, "second").await.unwrap();

        let profiles = svc.list().await.unwrap();
        assert_eq!(profiles.len(), 1);
        assert_eq!(profiles[0].port, 27018);

        let resolved = svc.resolve("dup").await.unwrap();
        assert_eq!(resolved.password, "second");
    }

    #[tokio::test]
    async fn save_replacing_keeps_created_at() {
        let (svc, _, _) = create_test_profile_service();

        svc.save(test_profile("keep"), "").await.unwrap();
        let created = svc.list().await.unwrap()[0].created_at;

        svc.save(test_profile("keep"), "").await.unwrap();
        let after = svc.list().await.unwrap()[0].clone();
        assert_eq!(after.created_at, created);
        assert!(after.updated_at >= created);
    }

    #[tokio::test]
    async fn save_repository_failure_surfaces() {
        let (svc, repo, _) = create_test_profile_service();
        repo.set_save_error(Some("disk full".to_string())).await;

        let err = svc.save(test_profile("p"), "").await.unwrap_err();
        assert!(matches!(err, CoreError::PersistenceError(_)));
    }

    #[tokio::test]
    async fn save_rejects_empty_name() {
        let (svc, _, _) = create_test_profile_service();
        let err = svc.save(test_profile("  "), "").await.unwrap_err();
        assert!(matches!(err, CoreError::ValidationError(_)));
    }

    #[tokio::test]
    async fn save_credential_failure_rolls_back_fresh_insert() {
        let (svc, repo, creds) = create_test_profile_service();

        creds.set_set_error(Some("keychain locked".to_string())).await;

        let result = svc.save(test_profile("new"), "pw").await;
        assert!(result.is_err());

        // The half-saved profile was rolled back.
        assert!(repo.find_by_name("new").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn save_credential_failure_keeps_existing_profile() {
        let (svc, repo, creds) = create_test_profile_service();

        svc.save(test_profile("old"), "pw").await.unwrap();
        creds.set_set_error(Some("keychain locked".to_string())).await;

        let mut updated = test_profile("old");
        updated.port = 27018;
        let result = svc.save(updated, "pw2").await;
        assert!(result.is_err());

        // Replacing an existing entry must not delete it on failure.
        assert!(repo.find_by_name("old").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn delete_removes_profile_and_password() {
        let (svc, repo, creds) = create_test_profile_service();

        svc.save(test_profile("gone"), "pw").await.unwrap();
        svc.delete("gone").await.unwrap();

        assert!(repo.find_by_name("gone").await.unwrap().is_none());
        assert!(creds.get("gone").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn re_delete_fails_with_not_found() {
        let (svc, _, _) = create_test_profile_service();

        svc.save(test_profile("once"), "").await.unwrap();
        svc.delete("once").await.unwrap();

        let err = svc.delete("once").await.unwrap_err();
        assert!(matches!(err, CoreError::ProfileNotFound(_)));
    }

    #[tokio::test]
    async fn delete_credential_failure_keeps_profile() {
        let (svc, repo, creds) = create_test_profile_service();

        svc.save(test_profile("stuck"), "pw").await.unwrap();
        creds
            .set_remove_error(Some("keychain locked".to_string()))
            .await;

        let result = svc.delete("stuck").await;
        assert!(result.is_err());

        // Profile stays listed so the user can retry.
        assert!(repo.find_by_name("stuck").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn list_preserves_insertion_order() {
        let (svc, _, _) = create_test_profile_service();

        svc.save(test_profile("b"), "").await.unwrap();
        svc.save(test_profile("a"), "").await.unwrap();
        svc.save(test_profile("c"), "").await.unwrap();

        let names: Vec<String> = svc
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["b", "a", "c"]);
    }

    #[tokio::test]
    async fn rename_migrates_profile_and_password() {
        let (svc, repo, creds) = create_test_profile_service();

        svc.save(test_profile("before"), "pw").await.unwrap();
        svc.rename("before", test_profile("after"), "")
            .await
            .unwrap();

        assert!(repo.find_by_name("before").await.unwrap().is_none());
        assert!(creds.get("before").await.unwrap().is_none());

        let resolved = svc.resolve("after").await.unwrap();
        assert_eq!(resolved.password, "pw");
    }

    #[tokio::test]
    async fn rename_with_new_password_replaces_it() {
        let (svc, _, _) = create_test_profile_service();

        svc.save(test_profile("x"), "old-pw").await.unwrap();
        svc.rename("x", test_profile("y"), "new-pw").await.unwrap();

        let resolved = svc.resolve("y").await.unwrap();
        assert_eq!(resolved.password, "new-pw");
    }

    #[tokio::test]
    async fn rename_unknown_profile_fails() {
        let (svc, _, _) = create_test_profile_service();
        let err = svc
            .rename("ghost", test_profile("renamed"), "")
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::ProfileNotFound(_)));
    }
}
