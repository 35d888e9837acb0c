use crate::MigrateRoot;

use std::path::Path;

use mig_config::Config;

#[derive(Debug, Clone)]
pub struct ExportSettings {
    /// Run directories of the legacy installation
    pub migrate_root: MigrateRoot,
    pub super_admin_role: String,
    /// Maximum number of courses attempted by this invocation
    pub limit: Option<usize>,
    /// Asked for when a new run starts and this is unset
    pub force_rebuild: Option<bool>,
    /// Extract records only; do not start the legacy server or export archives
    pub skip_courses: bool,
}

impl ExportSettings {
    pub fn new(config: &Config, source_path: impl AsRef<Path>) -> Self {
        Self {
            migrate_root: MigrateRoot::new(config.migrate_root(source_path.as_ref())),
            super_admin_role: config.migrate.super_admin_role.clone(),
            limit: None,
            force_rebuild: None,
            skip_courses: false,
        }
    }
}
