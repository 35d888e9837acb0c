use crate::models::ledger::{dedupe_errors, dedupe_ids, push_unique, remove_error, remove_id};
use crate::{Progress, RecordId, UnitError};

use serde::{Deserialize, Serialize};

/// Per-course outcome of the export phase.
///
/// `success` and `error` are kept disjoint: recording an outcome for an id
/// first removes it from the other set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportStatus {
    #[serde(default)]
    pub success: Vec<RecordId>,
    #[serde(default)]
    pub error: Vec<UnitError>,
}

impl ExportStatus {
    pub fn record_success(&mut self, id: RecordId) {
        remove_error(&mut self.error, &id);
        push_unique(&mut self.success, id);
    }

    pub fn record_error(&mut self, entry: UnitError) {
        remove_id(&mut self.success, &entry.id);
        remove_error(&mut self.error, &entry.id);
        self.error.push(entry);
    }

    pub fn is_success(&self, id: &RecordId) -> bool {
        self.success.contains(id)
    }

    pub fn is_error(&self, id: &RecordId) -> bool {
        self.error.iter().any(|entry| &entry.id == id)
    }

    /// Count how many of `work_items` sit in a terminal set.
    pub fn progress<'a>(&self, work_items: impl IntoIterator<Item = &'a RecordId>) -> Progress {
        work_items
            .into_iter()
            .fold(Progress::default(), |mut progress, id| {
                progress.total += 1;
                if self.is_success(id) || self.is_error(id) {
                    progress.completed += 1;
                }
                progress
            })
    }

    /// Collapse duplicates; an id in `success` wins over a stale `error` entry.
    pub fn dedupe(&mut self) {
        dedupe_ids(&mut self.success);
        dedupe_errors(&mut self.error);
        let success = &self.success;
        self.error.retain(|entry| !success.contains(&entry.id));
    }
}
