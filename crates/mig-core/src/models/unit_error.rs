use crate::{FailureKind, RecordId};

use serde::{Deserialize, Serialize};

/// Failure of a single unit of work, kept in the manifest as the durable error log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitError {
    pub id: RecordId,
    pub kind: FailureKind,
    pub error: String,
}

impl UnitError {
    pub fn new(id: RecordId, kind: FailureKind, error: impl Into<String>) -> Self {
        Self {
            id,
            kind,
            error: error.into(),
        }
    }
}
