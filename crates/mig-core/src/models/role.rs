use crate::RecordId;

use serde::{Deserialize, Serialize};

/// Entry of the source role catalogue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    pub id: RecordId,
    pub name: String,
}
