//! Adapters for the legacy installation: its document store, its embedded
//! export server and its `conf/config.json`.

pub mod content;
pub mod error;
pub mod installation;
pub mod store;

#[cfg(test)]
mod tests;

pub use content::{ExportOptions, LegacyContentSource, ProcessContentSource, ProcessSettings};
pub use error::{LegacyError, Result};
pub use installation::LegacyInstallation;
pub use store::{JsonDumpStore, LegacyAsset, LegacyRole, LegacyStore, LegacyTenant, LegacyUser};
