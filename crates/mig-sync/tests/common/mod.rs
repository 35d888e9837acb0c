//! Fakes and fixtures shared by the pipeline tests

#![allow(dead_code)]

use std::collections::HashSet;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use mig_core::{RecordId, SuperUser};
use mig_legacy::{
    ExportOptions, LegacyAsset, LegacyContentSource, LegacyError, LegacyInstallation,
    LegacyRole, LegacyStore, LegacyTenant, LegacyUser, Result as LegacyResult,
};
use serde_json::{Map, Value, json};
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// Write a zip archive with the given `(name, contents)` file entries
pub fn write_archive(path: &Path, entries: &[(&str, &str)]) {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).unwrap();
    }
    let file = File::create(path).unwrap();
    let mut zip = ZipWriter::new(file);
    let options =
        SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    for (name, contents) in entries {
        zip.start_file(*name, options).unwrap();
        zip.write_all(contents.as_bytes()).unwrap();
    }

    zip.finish().unwrap();
}

/// Archive holding a single course document
pub fn write_course_archive(path: &Path, id: &str, title: &str) {
    let document = json!({ "_id": id, "title": title }).to_string();
    write_archive(path, &[("src/course/en/course.json", &document)]);
}

/// In-memory legacy store
#[derive(Debug, Clone, Default)]
pub struct FakeStore {
    pub roles: Vec<LegacyRole>,
    pub users: Vec<LegacyUser>,
    pub tenants: Vec<LegacyTenant>,
    pub courses: Vec<Map<String, Value>>,
    pub assets: Vec<LegacyAsset>,
}

impl FakeStore {
    /// Two roles, an administrator, an author and a user with an unknown role
    pub fn standard() -> Self {
        Self {
            roles: serde_json::from_value(json!([
                { "_id": "r-auth", "name": "Authenticated User" },
                { "_id": "r-admin", "name": "Super Admin" }
            ]))
            .unwrap(),
            users: serde_json::from_value(json!([
                {
                    "_id": "u-admin",
                    "email": "admin@example.com",
                    "firstName": "Ada",
                    "lastName": "Admin",
                    "roles": ["r-admin"],
                    "_tenantId": "t1"
                },
                {
                    "_id": "u-author",
                    "email": "author@example.com",
                    "roles": ["r-auth"],
                    "_tenantId": "t1"
                },
                {
                    "_id": "u-ghost",
                    "email": "ghost@example.com",
                    "roles": ["r-deleted"]
                }
            ]))
            .unwrap(),
            tenants: serde_json::from_value(json!([{ "_id": "t1", "name": "master" }])).unwrap(),
            courses: Vec::new(),
            assets: serde_json::from_value(json!([
                { "_id": "a-hero", "filename": "hero.png", "path": "/assets/hero.png" }
            ]))
            .unwrap(),
        }
    }

    pub fn with_courses(mut self, courses: Value) -> Self {
        self.courses = serde_json::from_value(courses).unwrap();
        self
    }
}

#[async_trait]
impl LegacyStore for FakeStore {
    async fn roles(&self) -> LegacyResult<Vec<LegacyRole>> {
        Ok(self.roles.clone())
    }

    async fn users(&self) -> LegacyResult<Vec<LegacyUser>> {
        Ok(self.users.clone())
    }

    async fn tenants(&self) -> LegacyResult<Vec<LegacyTenant>> {
        Ok(self.tenants.clone())
    }

    async fn courses(&self) -> LegacyResult<Vec<Map<String, Value>>> {
        Ok(self.courses.clone())
    }

    async fn asset(&self, id: &RecordId) -> LegacyResult<Option<LegacyAsset>> {
        Ok(self.assets.iter().find(|asset| &asset.id == id).cloned())
    }
}

/// Content source writing a small archive per export and logging every call
pub struct FakeSource {
    exports_dir: PathBuf,
    failing: HashSet<String>,
    fail_start: bool,
    events: Arc<Mutex<Vec<String>>>,
}

impl FakeSource {
    pub fn new(exports_dir: &Path) -> (Self, Arc<Mutex<Vec<String>>>) {
        let events = Arc::new(Mutex::new(Vec::new()));
        let source = Self {
            exports_dir: exports_dir.to_path_buf(),
            failing: HashSet::new(),
            fail_start: false,
            events: Arc::clone(&events),
        };
        (source, events)
    }

    pub fn failing(mut self, ids: &[&str]) -> Self {
        self.failing = ids.iter().map(|id| id.to_string()).collect();
        self
    }

    pub fn failing_start(mut self) -> Self {
        self.fail_start = true;
        self
    }

    fn record(&self, event: String) {
        self.events.lock().unwrap().push(event);
    }
}

#[async_trait]
impl LegacyContentSource for FakeSource {
    async fn start(&mut self) -> LegacyResult<()> {
        self.record("start".to_string());
        if self.fail_start {
            return Err(LegacyError::installation("server binary missing"));
        }
        Ok(())
    }

    async fn await_ready(&mut self) -> LegacyResult<()> {
        self.record("ready".to_string());
        Ok(())
    }

    fn set_actor(&mut self, actor: SuperUser) {
        self.record(format!("actor:{}", actor.user.id));
    }

    async fn export_unit(
        &mut self,
        course_id: &RecordId,
        options: ExportOptions,
    ) -> LegacyResult<PathBuf> {
        self.record(format!("export:{course_id}:{}", options.force_rebuild));
        if self.failing.contains(course_id.as_str()) {
            return Err(LegacyError::export(course_id, "build failed"));
        }

        let archive = self.exports_dir.join("u-admin.zip");
        write_course_archive(&archive, course_id.as_str(), "exported");
        Ok(archive)
    }

    async fn stop(&mut self) -> LegacyResult<()> {
        self.record("stop".to_string());
        Ok(())
    }
}

pub fn installation(root: &Path) -> LegacyInstallation {
    LegacyInstallation {
        root: root.to_path_buf(),
        master_tenant_id: RecordId::from("t1"),
        master_tenant_name: "master".to_string(),
    }
}

/// Hero image file as the legacy asset catalogue places it
pub fn write_hero_asset(root: &Path) -> PathBuf {
    let path = root.join("data/master/assets/hero.png");
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, b"png-bytes").unwrap();
    path
}
