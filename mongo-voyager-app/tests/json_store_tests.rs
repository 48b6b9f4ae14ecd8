#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
//! Integration tests for `JsonProfileRepository`.

use mongo_voyager_app::adapters::JsonProfileRepository;
use mongo_voyager_core::error::CoreError;
use mongo_voyager_core::traits::ProfileRepository;
use mongo_voyager_core::types::ConnectionProfile;

// ===== Helpers =====

fn create_test_repo() -> (JsonProfileRepository, tempfile::TempDir) {
    let tmp = tempfile::tempdir().expect("failed to create temp dir");
    let repo = JsonProfileRepository::new(tmp.path().join("profiles.json"));
    (repo, tmp)
}

fn make_profile(name: &str) -> ConnectionProfile {
    ConnectionProfile::new(name, "localhost", 27017, "testdb", None, false)
}

// ===== Tests =====

#[tokio::test]
async fn missing_file_reads_as_empty() {
    let (repo, _tmp) = create_test_repo();
    assert!(repo.find_all().await.unwrap().is_empty());
    assert!(repo.find_by_name("none").await.unwrap().is_none());
}

#[tokio::test]
async fn save_and_find_round_trip() {
    let (repo, _tmp) = create_test_repo();

    let mut profile = make_profile("local");
    profile.username = Some("admin".to_string());
    repo.save(&profile).await.unwrap();

    let found = repo.find_by_name("local").await.unwrap().unwrap();
    assert_eq!(found, profile);
}

#[tokio::test]
async fn save_creates_parent_directories() {
    let tmp = tempfile::tempdir().expect("failed to create temp dir");
    let repo = JsonProfileRepository::new(tmp.path().join("nested").join("profiles.json"));

    repo.save(&make_profile("deep")).await.unwrap();
    assert!(repo.path().exists());
}

#[tokio::test]
async fn save_same_name_replaces_keeping_position() {
    let (repo, _tmp) = create_test_repo();

    repo.save(&make_profile("a")).await.unwrap();
    repo.save(&make_profile("b")).await.unwrap();
    repo.save(&make_profile("c")).await.unwrap();

    let mut updated = make_profile("b");
    updated.port = 27018;
    repo.save(&updated).await.unwrap();

    let all = repo.find_all().await.unwrap();
    let names: Vec<&str> = all.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["a", "b", "c"]);
    assert_eq!(all[1].port, 27018);
}

#[tokio::test]
async fn delete_removes_entry() {
    let (repo, _tmp) = create_test_repo();

    repo.save(&make_profile("gone")).await.unwrap();
    repo.delete("gone").await.unwrap();

    assert!(repo.find_by_name("gone").await.unwrap().is_none());
}

#[tokio::test]
async fn delete_unknown_name_fails() {
    let (repo, _tmp) = create_test_repo();
    let err = repo.delete("ghost").await.unwrap_err();
    assert!(matches!(err, CoreError::ProfileNotFound(_)));
}

#[tokio::test]
async fn data_survives_reopening() {
    let tmp = tempfile::tempdir().expect("failed to create temp dir");
    let path = tmp.path().join("profiles.json");

    {
        let repo = JsonProfileRepository::new(&path);
        repo.save(&make_profile("persisted")).await.unwrap();
    }

    let reopened = JsonProfileRepository::new(&path);
    let found = reopened.find_by_name("persisted").await.unwrap();
    assert!(found.is_some());
}

#[tokio::test]
async fn file_omits_absent_username() {
    let (repo, _tmp) = create_test_repo();
    repo.save(&make_profile("anon")).await.unwrap();

    let raw = tokio::fs::read_to_string(repo.path()).await.unwrap();
    assert!(!raw.contains("username"));
    assert!(raw.contains("createdAt"));
}

#[tokio::test]
async fn corrupt_file_is_reported_not_swallowed() {
    let (repo, _tmp) = create_test_repo();
    tokio::fs::write(repo.path(), "not json").await.unwrap();

    let err = repo.find_all().await.unwrap_err();
    assert!(matches!(err, CoreError::SerializationError(_)));
}
