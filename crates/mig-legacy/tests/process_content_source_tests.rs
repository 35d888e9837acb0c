//! Integration tests for the process-backed legacy content source using wiremock

use mig_core::{RecordId, SuperUser, User};
use mig_legacy::{
    ExportOptions, LegacyContentSource, LegacyError, LegacyInstallation, ProcessContentSource,
    ProcessSettings,
};

use std::time::Duration;

use serde_json::json;
use tempfile::TempDir;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_partial_json, header, method, path},
};

fn installation(temp: &TempDir) -> LegacyInstallation {
    LegacyInstallation {
        root: temp.path().to_path_buf(),
        master_tenant_id: "t1".into(),
        master_tenant_name: "master".to_string(),
    }
}

fn settings(server: &MockServer) -> ProcessSettings {
    ProcessSettings {
        command: None,
        args: Vec::new(),
        ready_url: format!("{}/", server.uri()),
        export_url: format!("{}/api/migrate/export", server.uri()),
        startup_timeout: Duration::from_millis(300),
        poll_interval: Duration::from_millis(20),
    }
}

fn actor() -> SuperUser {
    SuperUser {
        user: User {
            id: "admin".into(),
            email: "admin@example.com".to_string(),
            first_name: "Ad".to_string(),
            last_name: "Min".to_string(),
            roles: Vec::new(),
            tenant_id: None,
        },
        tenant: None,
    }
}

#[tokio::test]
async fn test_await_ready_passes_when_ready_url_answers() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;
    let temp = TempDir::new().unwrap();

    let mut source = ProcessContentSource::new(installation(&temp), settings(&mock_server)).unwrap();
    source.start().await.unwrap();
    source.await_ready().await.unwrap();
    source.stop().await.unwrap();
}

#[tokio::test]
async fn test_await_ready_times_out_when_server_never_ready() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;
    let temp = TempDir::new().unwrap();

    let mut source = ProcessContentSource::new(installation(&temp), settings(&mock_server)).unwrap();
    let result = source.await_ready().await;

    assert!(matches!(result, Err(LegacyError::StartupTimeout { .. })));
}

#[tokio::test]
async fn test_export_unit_returns_actor_archive() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/migrate/export/c1"))
        .and(header("X-Migrate-Actor", "admin"))
        .and(body_partial_json(json!({ "forceRebuild": true })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;
    let temp = TempDir::new().unwrap();
    let installation = installation(&temp);
    let archive = installation.export_archive(&RecordId::from("admin"));
    std::fs::create_dir_all(archive.parent().unwrap()).unwrap();
    std::fs::write(&archive, b"PK").unwrap();

    let mut source = ProcessContentSource::new(installation, settings(&mock_server)).unwrap();
    source.set_actor(actor());
    let produced = source
        .export_unit(&"c1".into(), ExportOptions { force_rebuild: true })
        .await
        .unwrap();

    assert_eq!(produced, archive);
}

#[tokio::test]
async fn test_export_unit_without_archive_is_export_error() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/migrate/export/c1"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;
    let temp = TempDir::new().unwrap();

    let mut source = ProcessContentSource::new(installation(&temp), settings(&mock_server)).unwrap();
    source.set_actor(actor());
    let err = source
        .export_unit(&"c1".into(), ExportOptions::default())
        .await
        .unwrap_err();

    assert!(matches!(err, LegacyError::Export { .. }));
    assert!(!err.is_setup_failure());
}

#[tokio::test]
async fn test_export_unit_server_error_carries_body() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/migrate/export/c1"))
        .respond_with(ResponseTemplate::new(500).set_body_string("build failed"))
        .mount(&mock_server)
        .await;
    let temp = TempDir::new().unwrap();

    let mut source = ProcessContentSource::new(installation(&temp), settings(&mock_server)).unwrap();
    source.set_actor(actor());
    let err = source
        .export_unit(&"c1".into(), ExportOptions::default())
        .await
        .unwrap_err();

    assert!(err.to_string().contains("build failed"));
}

#[tokio::test]
async fn test_export_unit_without_actor_fails() {
    let mock_server = MockServer::start().await;
    let temp = TempDir::new().unwrap();

    let mut source = ProcessContentSource::new(installation(&temp), settings(&mock_server)).unwrap();
    let result = source
        .export_unit(&"c1".into(), ExportOptions::default())
        .await;

    assert!(matches!(result, Err(LegacyError::NoActor { .. })));
}
