use crate::{MigrateError, checkpoint};

use mig_core::{ExportManifest, FailureKind, ImportManifest, RecordId, UnitError};
use tempfile::TempDir;

#[tokio::test]
async fn given_missing_file_when_load_then_none() {
    // Given
    let dir = TempDir::new().unwrap();

    // When
    let loaded = checkpoint::load::<ExportManifest>(&dir.path().join("export.json"))
        .await
        .unwrap();

    // Then
    assert!(loaded.is_none());
}

#[tokio::test]
async fn given_corrupt_file_when_load_then_storage_error() {
    // Given
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("export.json");
    std::fs::write(&path, "{ not json").unwrap();

    // When
    let err = checkpoint::load::<ExportManifest>(&path).await.unwrap_err();

    // Then
    assert!(matches!(err, MigrateError::Storage { .. }));
}

#[tokio::test]
async fn given_saved_manifest_when_load_then_status_sets_survive() {
    // Given
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("import.json");
    let mut manifest = ImportManifest {
        api_url: Some("https://lms.example.com/api".to_string()),
        ..ImportManifest::default()
    };
    manifest.status.record_success(RecordId::from("c1"));
    manifest.status.record_skip(RecordId::from("c2"));
    manifest.status.record_error(UnitError::new(
        RecordId::from("c3"),
        FailureKind::RemoteOperation,
        "500: boom",
    ));

    // When
    checkpoint::save(&path, &manifest).await.unwrap();
    let loaded = checkpoint::load::<ImportManifest>(&path)
        .await
        .unwrap()
        .unwrap();

    // Then
    assert_eq!(loaded, manifest);
}

#[tokio::test]
async fn given_save_when_finished_then_no_temp_file_left() {
    // Given
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("export.json");
    let manifest = ExportManifest::new("2026-01-01T00:00:00Z", false);

    // When
    checkpoint::save(&path, &manifest).await.unwrap();
    checkpoint::save(&path, &manifest).await.unwrap();

    // Then
    let names: Vec<String> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["export.json".to_string()]);
}

#[tokio::test]
async fn given_missing_parent_dir_when_save_then_created() {
    // Given
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("migrate").join("123").join("export.json");

    // When
    checkpoint::save(&path, &ExportManifest::new("now", true))
        .await
        .unwrap();

    // Then
    assert!(path.exists());
}
