//! Content packager: unpacks a course archive and rewrites its metadata in
//! place so the destination can import the directory directly.

pub mod error;
pub mod layout;
pub mod packager;
pub mod patch;

#[cfg(test)]
mod tests;

pub use error::{PackageError, Result};
pub use packager::Packager;
pub use patch::CoursePatch;

/// Scratch directory (inside a run directory) holding unpacked courses
pub const UNPACKED_DIR: &str = "unpacked";
