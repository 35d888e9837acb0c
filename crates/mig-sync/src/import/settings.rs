use crate::MigrateRoot;

use std::path::Path;

use mig_client::ClientSettings;
use mig_config::Config;
use mig_core::RoleHints;

#[derive(Debug, Clone)]
pub struct ImportSettings {
    /// Run directories of the legacy installation the export ran against
    pub migrate_root: MigrateRoot,
    /// Maximum number of course uploads attempted by this invocation
    pub limit: Option<usize>,
    pub api_url: Option<String>,
    pub auth_token: Option<String>,
    pub user_concurrency: usize,
    pub keep_unpacked: bool,
    pub role_hints: RoleHints,
    pub client: ClientSettings,
}

impl ImportSettings {
    pub fn new(config: &Config, source_path: impl AsRef<Path>) -> Self {
        Self {
            migrate_root: MigrateRoot::new(config.migrate_root(source_path.as_ref())),
            limit: None,
            api_url: config.destination.api_url.clone(),
            auth_token: config.destination.auth_token.clone(),
            user_concurrency: config.destination.user_concurrency,
            keep_unpacked: config.package.keep_unpacked,
            role_hints: RoleHints::with_extra(&config.role_hints),
            client: ClientSettings::from(config),
        }
    }
}
