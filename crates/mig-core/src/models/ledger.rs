//! Helpers shared by the status sets of both manifests.

use crate::{RecordId, UnitError};

use std::collections::HashSet;

pub(crate) fn remove_id(ids: &mut Vec<RecordId>, id: &RecordId) {
    ids.retain(|existing| existing != id);
}

pub(crate) fn remove_error(errors: &mut Vec<UnitError>, id: &RecordId) {
    errors.retain(|existing| &existing.id != id);
}

pub(crate) fn push_unique(ids: &mut Vec<RecordId>, id: RecordId) {
    if !ids.contains(&id) {
        ids.push(id);
    }
}

/// Drop repeated ids, keeping the first occurrence.
pub(crate) fn dedupe_ids(ids: &mut Vec<RecordId>) {
    let mut seen = HashSet::new();
    ids.retain(|id| seen.insert(id.clone()));
}

/// Drop repeated error entries for one id, keeping the latest.
pub(crate) fn dedupe_errors(errors: &mut Vec<UnitError>) {
    let mut seen = HashSet::new();
    let mut kept: Vec<UnitError> = errors
        .drain(..)
        .rev()
        .filter(|entry| seen.insert(entry.id.clone()))
        .collect();
    kept.reverse();
    *errors = kept;
}
