use crate::{RecordId, RoleRef};

use serde::{Deserialize, Serialize};

/// User record as written to the export manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: RecordId,
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub roles: Vec<RoleRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<RecordId>,
}

impl User {
    pub fn role_names(&self) -> impl Iterator<Item = &str> {
        self.roles.iter().map(|role| role.name.as_str())
    }

    pub fn has_role(&self, name: &str) -> bool {
        self.role_names().any(|role| role == name)
    }
}
