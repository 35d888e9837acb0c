//! Where things live inside an unpacked course package.

use crate::{PackageError, Result as PackageErrorResult};

use std::panic::Location;
use std::path::{Component, Path, PathBuf};

use error_location::ErrorLocation;
use walkdir::WalkDir;

pub const COURSE_DOCUMENT: &str = "course.json";
pub const SOURCE_DIR: &str = "src";
pub const COURSE_DIR: &str = "course";
pub const ASSETS_DIR: &str = "assets";

/// Directories under `src` holding sub-plugins, one directory per plugin
pub const PLUGIN_KINDS: [&str; 4] = ["components", "extensions", "menu", "theme"];

/// Locate the root course document: the shallowest `course.json`, preferring
/// one laid out as `src/course/<lang>/course.json`.
pub fn find_course_document(root: &Path) -> PackageErrorResult<PathBuf> {
    let mut best: Option<(bool, usize, PathBuf)> = None;

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|e| PackageError::Walk {
            dir: root.to_path_buf(),
            source: e,
            location: ErrorLocation::from(Location::caller()),
        })?;

        if !entry.file_type().is_file() || entry.file_name() != COURSE_DOCUMENT {
            continue;
        }

        let preferred = is_language_document(entry.path());
        let depth = entry.depth();
        let better = match best {
            None => true,
            Some((best_preferred, best_depth, _)) => {
                (preferred && !best_preferred) || (preferred == best_preferred && depth < best_depth)
            }
        };
        if better {
            best = Some((preferred, depth, entry.into_path()));
        }
    }

    best.map(|(_, _, path)| path)
        .ok_or_else(|| PackageError::MissingCourseDocument {
            dir: root.to_path_buf(),
            location: ErrorLocation::from(Location::caller()),
        })
}

/// `.../src/course/<lang>/course.json`
fn is_language_document(path: &Path) -> bool {
    let names: Vec<_> = path
        .components()
        .rev()
        .skip(2)
        .take(2)
        .map(|component| component.as_os_str())
        .collect();
    names.len() == 2 && names[0] == COURSE_DIR && names[1] == SOURCE_DIR
}

/// The package's `src` directory: the nearest ancestor of the course document
/// named `src`, falling back to `<root>/src`.
pub fn source_dir(course_document: &Path, root: &Path) -> PathBuf {
    course_document
        .ancestors()
        .skip(1)
        .take_while(|dir| dir.starts_with(root))
        .find(|dir| dir.file_name().is_some_and(|name| name == SOURCE_DIR))
        .map(Path::to_path_buf)
        .unwrap_or_else(|| root.join(SOURCE_DIR))
}

/// `/`-separated path of `path` relative to `base`, if `path` lies under it
pub fn relative_reference(base: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(base).ok()?;
    let parts: Vec<_> = relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();
    Some(parts.join("/"))
}
