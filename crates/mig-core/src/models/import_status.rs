use crate::models::ledger::{dedupe_errors, dedupe_ids, push_unique, remove_error, remove_id};
use crate::{Progress, RecordId, UnitError};

use serde::{Deserialize, Serialize};

/// Per-course outcome of the import phase.
///
/// The three sets are pairwise disjoint: each attempt moves an id into exactly
/// one of them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportStatus {
    #[serde(default)]
    pub success: Vec<RecordId>,
    #[serde(default)]
    pub error: Vec<UnitError>,
    #[serde(default)]
    pub skip: Vec<RecordId>,
}

impl ImportStatus {
    pub fn record_success(&mut self, id: RecordId) {
        remove_id(&mut self.skip, &id);
        remove_error(&mut self.error, &id);
        push_unique(&mut self.success, id);
    }

    pub fn record_skip(&mut self, id: RecordId) {
        remove_id(&mut self.success, &id);
        remove_error(&mut self.error, &id);
        push_unique(&mut self.skip, id);
    }

    pub fn record_error(&mut self, entry: UnitError) {
        remove_id(&mut self.success, &entry.id);
        remove_id(&mut self.skip, &entry.id);
        remove_error(&mut self.error, &entry.id);
        self.error.push(entry);
    }

    pub fn is_success(&self, id: &RecordId) -> bool {
        self.success.contains(id)
    }

    pub fn is_skip(&self, id: &RecordId) -> bool {
        self.skip.contains(id)
    }

    pub fn is_error(&self, id: &RecordId) -> bool {
        self.error.iter().any(|entry| &entry.id == id)
    }

    /// Ids in `success` or `skip` are never attempted again.
    pub fn is_done(&self, id: &RecordId) -> bool {
        self.is_success(id) || self.is_skip(id)
    }

    /// Whether any earlier attempt classified this id
    pub fn has_status(&self, id: &RecordId) -> bool {
        self.is_done(id) || self.is_error(id)
    }

    pub fn progress<'a>(&self, work_items: impl IntoIterator<Item = &'a RecordId>) -> Progress {
        work_items
            .into_iter()
            .fold(Progress::default(), |mut progress, id| {
                progress.total += 1;
                if self.has_status(id) {
                    progress.completed += 1;
                }
                progress
            })
    }

    /// Collapse duplicates left by earlier runs.
    ///
    /// Precedence when an id shows up in more than one set: success, then
    /// skip, then error.
    pub fn dedupe(&mut self) {
        dedupe_ids(&mut self.success);
        dedupe_ids(&mut self.skip);
        dedupe_errors(&mut self.error);

        let success = &self.success;
        self.skip.retain(|id| !success.contains(id));
        let skip = &self.skip;
        self.error
            .retain(|entry| !success.contains(&entry.id) && !skip.contains(&entry.id));
    }

    pub fn clear(&mut self) {
        self.success.clear();
        self.error.clear();
        self.skip.clear();
    }
}
