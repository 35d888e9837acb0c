use crate::{CoreError, RecordId, Result as CoreErrorResult, Role};

use serde::{Deserialize, Serialize};

/// Role membership of an exported user.
///
/// Carries the raw source id for traceability and the resolved name, which is
/// what the import phase maps onto destination roles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleRef {
    pub id: RecordId,
    pub name: String,
}

impl RoleRef {
    /// Resolve a role id against the exported role catalogue.
    #[track_caller]
    pub fn resolve(
        user_id: &RecordId,
        role_id: &RecordId,
        catalogue: &[Role],
    ) -> CoreErrorResult<Self> {
        catalogue
            .iter()
            .find(|role| &role.id == role_id)
            .map(|role| Self {
                id: role.id.clone(),
                name: role.name.clone(),
            })
            .ok_or_else(|| CoreError::unknown_role(user_id.clone(), role_id.clone()))
    }
}
