use mig_core::{RecordId, Role};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct LegacyRole {
    #[serde(rename = "_id")]
    pub id: RecordId,
    pub name: String,
}

impl From<LegacyRole> for Role {
    fn from(role: LegacyRole) -> Self {
        Role {
            id: role.id,
            name: role.name,
        }
    }
}
