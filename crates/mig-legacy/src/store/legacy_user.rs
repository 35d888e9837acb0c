use mig_core::{RecordId, Result as CoreErrorResult, Role, RoleRef, User};
use serde::Deserialize;

/// User document as stored by the legacy application, role ids unresolved
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyUser {
    #[serde(rename = "_id")]
    pub id: RecordId,
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub roles: Vec<RecordId>,
    #[serde(rename = "_tenantId", default)]
    pub tenant_id: Option<RecordId>,
}

impl LegacyUser {
    /// Denormalize role ids to `{id, name}` pairs against the role catalogue.
    pub fn resolve(self, catalogue: &[Role]) -> CoreErrorResult<User> {
        let roles = self
            .roles
            .iter()
            .map(|role_id| RoleRef::resolve(&self.id, role_id, catalogue))
            .collect::<CoreErrorResult<Vec<_>>>()?;

        Ok(User {
            id: self.id,
            email: self.email,
            first_name: self.first_name,
            last_name: self.last_name,
            roles,
            tenant_id: self.tenant_id,
        })
    }
}
