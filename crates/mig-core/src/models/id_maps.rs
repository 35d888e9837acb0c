use crate::{CoreError, RecordId, Result as CoreErrorResult};

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Source → destination identifier maps.
///
/// This is the identity reconciler's state: the lookups fail loudly rather
/// than letting an unmapped reference reach the destination.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdMaps {
    #[serde(default)]
    pub role_ids: BTreeMap<RecordId, String>,
    #[serde(default)]
    pub user_ids: BTreeMap<RecordId, String>,
}

impl IdMaps {
    /// Destination role id for a source role id
    #[track_caller]
    pub fn role_id(&self, source: &RecordId) -> CoreErrorResult<&str> {
        self.role_ids
            .get(source)
            .map(String::as_str)
            .ok_or_else(|| CoreError::unmapped_role(source.clone()))
    }

    /// Destination user id for a source user id
    #[track_caller]
    pub fn user_id(&self, source: &RecordId) -> CoreErrorResult<&str> {
        self.user_ids
            .get(source)
            .map(String::as_str)
            .ok_or_else(|| CoreError::unmapped_user(source.clone()))
    }

    /// Role mapping is populated once per run and frozen afterwards.
    pub fn roles_reconciled(&self) -> bool {
        !self.role_ids.is_empty()
    }

    pub fn has_user(&self, source: &RecordId) -> bool {
        self.user_ids.contains_key(source)
    }

    pub fn record_user(&mut self, source: RecordId, destination: impl Into<String>) {
        self.user_ids.insert(source, destination.into());
    }

    pub fn set_role_ids(&mut self, role_ids: BTreeMap<RecordId, String>) {
        self.role_ids = role_ids;
    }
}
