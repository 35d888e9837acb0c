use crate::{Course, ExportStatus, Progress, RecordId, Role, SCHEMA_VERSION, UnitError, User};

use serde::{Deserialize, Serialize};

/// Root artifact of the export phase (`export.json`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportManifest {
    pub schema_version: u32,

    /// RFC3339 timestamp when the run was created
    pub created_at: String,

    /// Whether the legacy server was asked for a full rebuild of every course
    #[serde(default)]
    pub force_rebuild: bool,

    #[serde(default)]
    pub roles: Vec<Role>,

    #[serde(default)]
    pub users: Vec<User>,

    /// Users dropped during extraction, with the reason
    #[serde(default)]
    pub rejected_users: Vec<UnitError>,

    #[serde(default)]
    pub courses: Vec<Course>,

    #[serde(default)]
    pub status: ExportStatus,
}

impl ExportManifest {
    pub fn new(created_at: impl Into<String>, force_rebuild: bool) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            created_at: created_at.into(),
            force_rebuild,
            roles: Vec::new(),
            users: Vec::new(),
            rejected_users: Vec::new(),
            courses: Vec::new(),
            status: ExportStatus::default(),
        }
    }

    pub fn course(&self, id: &RecordId) -> Option<&Course> {
        self.courses.iter().find(|course| &course.id == id)
    }

    pub fn course_mut(&mut self, id: &RecordId) -> Option<&mut Course> {
        self.courses.iter_mut().find(|course| &course.id == id)
    }

    pub fn course_ids(&self) -> impl Iterator<Item = &RecordId> {
        self.courses.iter().map(|course| &course.id)
    }

    /// Courses whose archive is ready for import, in export order
    pub fn exported_course_ids(&self) -> &[RecordId] {
        &self.status.success
    }

    /// First user holding the given role name
    pub fn find_user_with_role(&self, role_name: &str) -> Option<&User> {
        self.users.iter().find(|user| user.has_role(role_name))
    }

    pub fn progress(&self) -> Progress {
        self.status.progress(self.course_ids())
    }
}
