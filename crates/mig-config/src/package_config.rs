use crate::{ConfigError, ConfigErrorResult, DEFAULT_PLUGIN_DENYLIST};

use serde::Deserialize;

/// Content packager settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PackageConfig {
    /// Sub-plugins removed from every package before upload
    pub plugin_denylist: Vec<String>,
    /// Keep unpacked course directories after a successful upload
    pub keep_unpacked: bool,
}

impl Default for PackageConfig {
    fn default() -> Self {
        Self {
            plugin_denylist: DEFAULT_PLUGIN_DENYLIST
                .iter()
                .map(|name| name.to_string())
                .collect(),
            keep_unpacked: false,
        }
    }
}

impl PackageConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if let Some(bad) = self.plugin_denylist.iter().find(|name| {
            name.is_empty() || name.contains('/') || name.contains('\\') || name.contains("..")
        }) {
            return Err(ConfigError::package(format!(
                "package.plugin_denylist entries must be plain plugin names, got '{bad}'"
            )));
        }

        Ok(())
    }
}
