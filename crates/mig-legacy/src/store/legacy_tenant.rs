use mig_core::{RecordId, Tenant};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct LegacyTenant {
    #[serde(rename = "_id")]
    pub id: RecordId,
    #[serde(default)]
    pub name: String,
}

impl From<LegacyTenant> for Tenant {
    fn from(tenant: LegacyTenant) -> Self {
        Tenant {
            id: tenant.id,
            name: tenant.name,
        }
    }
}
