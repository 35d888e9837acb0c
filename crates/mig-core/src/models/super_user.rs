use crate::{Tenant, User};

use serde::Serialize;

/// Identity the legacy server acts as while exporting content
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuperUser {
    pub user: User,
    pub tenant: Option<Tenant>,
}
