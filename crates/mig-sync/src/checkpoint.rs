//! Durable manifest storage.
//!
//! Writes go to a temp file that is synced and atomically renamed over the
//! target, so a crash leaves either the old or the new manifest on disk.

use crate::{MigrateError, Result as MigrateResult};

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::debug;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::io::AsyncWriteExt;

/// Load a manifest. `Ok(None)` means the file does not exist.
pub async fn load<T: DeserializeOwned>(path: &Path) -> MigrateResult<Option<T>> {
    let contents = match tokio::fs::read_to_string(path).await {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(MigrateError::storage(format!(
                "failed to read {}: {e}",
                path.display()
            )));
        }
    };

    serde_json::from_str(&contents).map(Some).map_err(|e| {
        MigrateError::storage(format!("corrupt manifest {}: {e}", path.display()))
    })
}

/// Save a manifest using the atomic write pattern.
pub async fn save<T: Serialize>(path: &Path, value: &T) -> MigrateResult<()> {
    let json = serde_json::to_string_pretty(value).map_err(|e| {
        MigrateError::storage(format!("failed to serialize {}: {e}", path.display()))
    })?;

    if let Some(dir) = path.parent() {
        tokio::fs::create_dir_all(dir).await.map_err(|e| {
            MigrateError::storage(format!("failed to create {}: {e}", dir.display()))
        })?;
    }

    let temp_path = temp_path(path);
    let write_failed = |e: std::io::Error| {
        MigrateError::storage(format!("failed to write {}: {e}", temp_path.display()))
    };

    {
        let mut file = tokio::fs::File::create(&temp_path)
            .await
            .map_err(write_failed)?;
        file.write_all(json.as_bytes()).await.map_err(write_failed)?;
        file.sync_all().await.map_err(write_failed)?;
    }

    if let Err(e) = tokio::fs::rename(&temp_path, path).await {
        let _ = tokio::fs::remove_file(&temp_path).await;
        return Err(MigrateError::storage(format!(
            "failed to rename {} to {}: {e}",
            temp_path.display(),
            path.display()
        )));
    }

    debug!("Saved {}", path.display());
    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!("{name}.tmp.{}", std::process::id()))
}
