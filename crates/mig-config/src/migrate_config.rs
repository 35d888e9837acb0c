use crate::{ConfigError, ConfigErrorResult, DEFAULT_MIGRATE_DIR_NAME, DEFAULT_SUPER_ADMIN_ROLE};

use serde::Deserialize;

/// Where run directories live and how the export actor is chosen
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MigrateConfig {
    /// Name of the directory (inside the legacy installation) holding run directories
    pub dir_name: String,
    /// Legacy role name identifying the super administrator
    pub super_admin_role: String,
}

impl Default for MigrateConfig {
    fn default() -> Self {
        Self {
            dir_name: String::from(DEFAULT_MIGRATE_DIR_NAME),
            super_admin_role: String::from(DEFAULT_SUPER_ADMIN_ROLE),
        }
    }
}

impl MigrateConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.dir_name.is_empty()
            || self.dir_name.contains("..")
            || self.dir_name.contains('/')
            || self.dir_name.contains('\\')
        {
            return Err(ConfigError::config(format!(
                "migrate.dir_name must be a plain directory name, got '{}'",
                self.dir_name
            )));
        }

        if self.super_admin_role.trim().is_empty() {
            return Err(ConfigError::config(
                "migrate.super_admin_role cannot be empty",
            ));
        }

        Ok(())
    }
}
