use crate::layout::{self, ASSETS_DIR, PLUGIN_KINDS};
use crate::{CoursePatch, PackageError, Result as PackageErrorResult, UNPACKED_DIR};

use std::ffi::OsStr;
use std::fs::{self, File};
use std::io;
use std::panic::Location;
use std::path::{Path, PathBuf};

use error_location::ErrorLocation;
use log::{debug, info};
use mig_config::PackageConfig;
use mig_core::RecordId;
use serde_json::{Map, Value};
use zip::ZipArchive;

/// Unpacks course archives into a run's scratch directory and rewrites them
/// for upload.
#[derive(Debug, Clone)]
pub struct Packager {
    plugin_denylist: Vec<String>,
}

impl From<&PackageConfig> for Packager {
    fn from(config: &PackageConfig) -> Self {
        Self::new(config.plugin_denylist.clone())
    }
}

impl Packager {
    pub fn new(plugin_denylist: Vec<String>) -> Self {
        Self { plugin_denylist }
    }

    /// Scratch directory a course is unpacked into
    pub fn unpacked_dir(run_dir: &Path, course_id: &RecordId) -> PathBuf {
        run_dir.join(UNPACKED_DIR).join(course_id.as_str())
    }

    /// Unpack `archive`, apply `patch` and strip deny-listed plugins.
    /// Returns the unpacked directory.
    pub async fn package(
        &self,
        archive: &Path,
        run_dir: &Path,
        course_id: &RecordId,
        patch: &CoursePatch,
    ) -> PackageErrorResult<PathBuf> {
        let packager = self.clone();
        let archive = archive.to_path_buf();
        let run_dir = run_dir.to_path_buf();
        let target = Self::unpacked_dir(&run_dir, course_id);
        let patch = patch.clone();

        tokio::task::spawn_blocking(move || {
            packager.package_blocking(&archive, &run_dir, &target, &patch)?;
            Ok(target)
        })
        .await
        .map_err(|e| PackageError::Task {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?
    }

    /// Remove a course's scratch directory
    pub async fn discard(dir: &Path) -> PackageErrorResult<()> {
        match tokio::fs::remove_dir_all(dir).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(PackageError::io(dir, e)),
        }
    }

    fn package_blocking(
        &self,
        archive: &Path,
        run_dir: &Path,
        target: &Path,
        patch: &CoursePatch,
    ) -> PackageErrorResult<()> {
        unpack(archive, target)?;

        let document_path = layout::find_course_document(target)?;
        let source_dir = layout::source_dir(&document_path, target);
        debug!("Course document at {}", document_path.display());

        let hero_reference = match patch.hero_image {
            Some(ref hero) => Some(copy_hero(run_dir, hero, &document_path, &source_dir)?),
            None => None,
        };

        if !patch.is_empty() {
            rewrite_document(&document_path, patch, hero_reference.as_deref())?;
        }

        self.remove_denied_plugins(&source_dir)?;

        info!("Packaged {} into {}", archive.display(), target.display());
        Ok(())
    }

    fn remove_denied_plugins(&self, source_dir: &Path) -> PackageErrorResult<()> {
        for kind in PLUGIN_KINDS {
            for name in &self.plugin_denylist {
                let dir = source_dir.join(kind).join(name);
                match fs::remove_dir_all(&dir) {
                    Ok(()) => debug!("Removed plugin {}/{}", kind, name),
                    Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                    Err(e) => return Err(PackageError::io(dir, e)),
                }
            }
        }
        Ok(())
    }
}

/// Extract `archive` into a fresh `target`, rejecting entries that escape it.
fn unpack(archive: &Path, target: &Path) -> PackageErrorResult<()> {
    match fs::remove_dir_all(target) {
        Ok(()) => debug!("Cleared stale {}", target.display()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(PackageError::io(target, e)),
    }
    fs::create_dir_all(target).map_err(|e| PackageError::io(target, e))?;

    let file = File::open(archive).map_err(|e| PackageError::io(archive, e))?;
    let mut zip = ZipArchive::new(file).map_err(|e| PackageError::zip(archive, e))?;

    for i in 0..zip.len() {
        let mut entry = zip.by_index(i).map_err(|e| PackageError::zip(archive, e))?;
        let relative = entry
            .enclosed_name()
            .ok_or_else(|| PackageError::UnsafeEntry {
                name: entry.name().to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;
        let out_path = target.join(relative);

        if entry.is_dir() {
            fs::create_dir_all(&out_path).map_err(|e| PackageError::io(&out_path, e))?;
            continue;
        }

        if let Some(parent) = out_path.parent() {
            fs::create_dir_all(parent).map_err(|e| PackageError::io(parent, e))?;
        }
        let mut out = File::create(&out_path).map_err(|e| PackageError::io(&out_path, e))?;
        io::copy(&mut entry, &mut out).map_err(|e| PackageError::io(&out_path, e))?;
    }

    Ok(())
}

/// Copy the hero image next to the course document and return its reference
/// relative to the package's `src` directory.
fn copy_hero(
    run_dir: &Path,
    hero: &str,
    document_path: &Path,
    source_dir: &Path,
) -> PackageErrorResult<String> {
    let source = run_dir.join(hero);
    if !source.is_file() {
        return Err(PackageError::MissingHeroImage {
            path: source,
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let file_name = source
        .file_name()
        .ok_or_else(|| PackageError::MissingHeroImage {
            path: source.clone(),
            location: ErrorLocation::from(Location::caller()),
        })?;
    let language_dir = document_path.parent().unwrap_or(source_dir);
    let assets_dir = language_dir.join(ASSETS_DIR);
    fs::create_dir_all(&assets_dir).map_err(|e| PackageError::io(&assets_dir, e))?;

    let destination = unused_path(&assets_dir, file_name);
    fs::copy(&source, &destination).map_err(|e| PackageError::io(&destination, e))?;

    layout::relative_reference(source_dir, &destination).ok_or_else(|| {
        PackageError::invalid_document(
            document_path,
            format!("course document lies outside {}", source_dir.display()),
        )
    })
}

/// `file_name` inside `dir`, suffixed `-1`, `-2`, ... past any existing entry
fn unused_path(dir: &Path, file_name: &OsStr) -> PathBuf {
    let candidate = dir.join(file_name);
    if !candidate.exists() {
        return candidate;
    }

    let name = Path::new(file_name);
    let stem = name.file_stem().unwrap_or(file_name).to_string_lossy();
    let extension = name.extension().map(OsStr::to_string_lossy);
    let mut suffix = 1;
    loop {
        let candidate = match extension {
            Some(ref extension) => dir.join(format!("{stem}-{suffix}.{extension}")),
            None => dir.join(format!("{stem}-{suffix}")),
        };
        if !candidate.exists() {
            debug!("{} exists, using {}", file_name.to_string_lossy(), candidate.display());
            return candidate;
        }
        suffix += 1;
    }
}

fn rewrite_document(
    path: &Path,
    patch: &CoursePatch,
    hero_reference: Option<&str>,
) -> PackageErrorResult<()> {
    let contents = fs::read_to_string(path).map_err(|e| PackageError::io(path, e))?;
    let mut document: Map<String, Value> = serde_json::from_str(&contents)
        .map_err(|e| PackageError::invalid_document(path, e.to_string()))?;

    patch.apply(&mut document, hero_reference);

    let updated = serde_json::to_string_pretty(&document)
        .map_err(|e| PackageError::invalid_document(path, e.to_string()))?;
    fs::write(path, updated).map_err(|e| PackageError::io(path, e))
}
