use crate::{MigrateError, Result as MigrateResult};

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use mig_core::RecordId;
use mig_package::UNPACKED_DIR;

pub const EXPORT_MANIFEST: &str = "export.json";
pub const IMPORT_MANIFEST: &str = "import.json";
pub const ASSETS_DIR: &str = "assets";

/// Directory holding every run of one legacy installation
#[derive(Debug, Clone)]
pub struct MigrateRoot {
    path: PathBuf,
}

impl MigrateRoot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Runs sorted oldest to newest. A missing root has no runs.
    pub async fn runs(&self) -> MigrateResult<Vec<RunDir>> {
        let mut entries = match tokio::fs::read_dir(&self.path).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(self.read_failed(e)),
        };

        let mut runs = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(|e| self.read_failed(e))? {
            let Ok(name) = entry.file_name().into_string() else {
                continue;
            };
            let Ok(created) = name.parse::<i64>() else {
                continue;
            };
            if entry.file_type().await.is_ok_and(|kind| kind.is_dir()) {
                runs.push((created, RunDir::new(name, entry.path())));
            }
        }

        runs.sort_by_key(|(created, _)| *created);
        Ok(runs.into_iter().map(|(_, run)| run).collect())
    }

    /// Runs that carry an export manifest, oldest to newest
    pub async fn exported_runs(&self) -> MigrateResult<Vec<RunDir>> {
        let mut exported = Vec::new();
        for run in self.runs().await? {
            if tokio::fs::try_exists(run.export_manifest_path())
                .await
                .unwrap_or(false)
            {
                exported.push(run);
            }
        }
        Ok(exported)
    }

    /// Create a new run named after the current time in milliseconds
    pub async fn create_run(&self) -> MigrateResult<RunDir> {
        let mut created = chrono::Utc::now().timestamp_millis();
        loop {
            let path = self.path.join(created.to_string());
            match tokio::fs::try_exists(&path).await {
                Ok(false) => {
                    tokio::fs::create_dir_all(&path).await.map_err(|e| {
                        MigrateError::storage(format!("failed to create {}: {e}", path.display()))
                    })?;
                    return Ok(RunDir::new(created.to_string(), path));
                }
                Ok(true) => created += 1,
                Err(e) => return Err(self.read_failed(e)),
            }
        }
    }

    #[track_caller]
    fn read_failed(&self, e: std::io::Error) -> MigrateError {
        MigrateError::storage(format!("failed to read {}: {e}", self.path.display()))
    }
}

/// One migration run: its manifests, archives and scratch space
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunDir {
    pub id: String,
    pub path: PathBuf,
}

impl RunDir {
    pub fn new(id: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            id: id.into(),
            path: path.into(),
        }
    }

    pub fn export_manifest_path(&self) -> PathBuf {
        self.path.join(EXPORT_MANIFEST)
    }

    pub fn import_manifest_path(&self) -> PathBuf {
        self.path.join(IMPORT_MANIFEST)
    }

    /// Archive location relative to the run directory
    pub fn relative_archive_path(course_id: &RecordId) -> String {
        format!("{course_id}.zip")
    }

    pub fn archive_path(&self, course_id: &RecordId) -> PathBuf {
        self.path.join(Self::relative_archive_path(course_id))
    }

    pub fn assets_dir(&self) -> PathBuf {
        self.path.join(ASSETS_DIR)
    }

    pub fn unpacked_dir(&self) -> PathBuf {
        self.path.join(UNPACKED_DIR)
    }
}
