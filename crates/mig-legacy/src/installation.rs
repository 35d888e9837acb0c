use crate::{LegacyAsset, LegacyError, Result as LegacyErrorResult};

use std::path::{Path, PathBuf};

use mig_core::RecordId;
use serde::Deserialize;

const CONF_DIR: &str = "conf";
const CONF_FILENAME: &str = "config.json";

#[derive(Deserialize)]
struct RawInstallationConfig {
    #[serde(rename = "masterTenantID")]
    master_tenant_id: Option<RecordId>,
    #[serde(rename = "masterTenantName")]
    master_tenant_name: Option<String>,
}

/// Paths and tenant identity of a legacy installation, from `conf/config.json`
#[derive(Debug, Clone)]
pub struct LegacyInstallation {
    pub root: PathBuf,
    pub master_tenant_id: RecordId,
    pub master_tenant_name: String,
}

impl LegacyInstallation {
    pub async fn load(root: &Path) -> LegacyErrorResult<Self> {
        let path = root.join(CONF_DIR).join(CONF_FILENAME);
        let contents = tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| LegacyError::io(&path, e))?;
        let raw: RawInstallationConfig =
            serde_json::from_str(&contents).map_err(|e| LegacyError::json(&path, e))?;

        let master_tenant_id = raw
            .master_tenant_id
            .filter(|id| !id.as_str().is_empty())
            .ok_or_else(|| {
                LegacyError::installation(format!("masterTenantID missing from {}", path.display()))
            })?;
        let master_tenant_name = raw
            .master_tenant_name
            .filter(|name| !name.is_empty())
            .ok_or_else(|| {
                LegacyError::installation(format!(
                    "masterTenantName missing from {}",
                    path.display()
                ))
            })?;

        Ok(Self {
            root: root.to_path_buf(),
            master_tenant_id,
            master_tenant_name,
        })
    }

    /// Directory where the legacy server drops export archives
    pub fn exports_dir(&self) -> PathBuf {
        self.root
            .join("temp")
            .join(self.master_tenant_id.as_str())
            .join("exports")
    }

    /// Archive produced by an export run on behalf of `actor_id`
    pub fn export_archive(&self, actor_id: &RecordId) -> PathBuf {
        self.exports_dir().join(format!("{actor_id}.zip"))
    }

    /// On-disk location of an uploaded asset
    pub fn asset_path(&self, asset: &LegacyAsset) -> PathBuf {
        self.root
            .join("data")
            .join(&self.master_tenant_name)
            .join(asset.path.trim_start_matches(['/', '\\']))
    }
}
