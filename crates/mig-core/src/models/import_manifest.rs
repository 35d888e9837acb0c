use crate::{ExportManifest, IdMaps, ImportStatus, Progress, UnitError};

use serde::{Deserialize, Serialize};

/// Root artifact of the import phase (`import.json`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportManifest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_token: Option<String>,

    #[serde(default)]
    pub maps: IdMaps,

    /// Users that could not be created on the latest run
    #[serde(default)]
    pub user_failures: Vec<UnitError>,

    #[serde(default)]
    pub status: ImportStatus,
}

impl ImportManifest {
    /// Progress over every course the export phase produced an archive for
    pub fn progress(&self, export: &ExportManifest) -> Progress {
        self.status.progress(export.exported_course_ids())
    }

    /// Clear course outcomes and the role mapping. Credentials and user
    /// mappings survive since both are still valid at the destination.
    pub fn restart(&mut self) {
        self.status.clear();
        self.maps.role_ids.clear();
        self.user_failures.clear();
    }
}
