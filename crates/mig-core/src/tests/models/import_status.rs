use crate::{FailureKind, ImportStatus, RecordId, UnitError};

fn id(value: &str) -> RecordId {
    RecordId::from(value)
}

fn error(value: &str) -> UnitError {
    UnitError::new(id(value), FailureKind::RemoteOperation, "500: failed")
}

fn assert_disjoint(status: &ImportStatus) {
    for success in &status.success {
        assert!(!status.skip.contains(success), "{success} in success and skip");
        assert!(!status.is_error(success), "{success} in success and error");
    }
    for skip in &status.skip {
        assert!(!status.is_error(skip), "{skip} in skip and error");
    }
}

#[test]
fn given_prior_success_when_skipped_then_moves_to_skip_only() {
    let mut status = ImportStatus::default();
    status.record_success(id("a"));

    status.record_skip(id("a"));

    assert_eq!(status.skip, vec![id("a")]);
    assert!(status.success.is_empty());
    assert!(status.is_done(&id("a")));
}

#[test]
fn given_prior_error_when_retry_succeeds_then_error_entry_removed() {
    let mut status = ImportStatus::default();
    status.record_error(error("b"));

    status.record_success(id("b"));

    assert!(status.error.is_empty());
    assert_eq!(status.success, vec![id("b")]);
}

#[test]
fn given_repeated_errors_when_recorded_then_single_entry_kept() {
    let mut status = ImportStatus::default();
    status.record_error(error("b"));
    status.record_error(UnitError::new(id("b"), FailureKind::Storage, "second"));

    assert_eq!(status.error.len(), 1);
    assert_eq!(status.error[0].error, "second");
}

#[test]
fn given_scenario_abc_when_classified_then_sets_are_a_partition() {
    let mut status = ImportStatus::default();
    status.record_success(id("a"));

    status.record_skip(id("a"));
    status.record_error(error("b"));
    status.record_success(id("c"));
    status.dedupe();

    assert_eq!(status.success, vec![id("c")]);
    assert_eq!(status.skip, vec![id("a")]);
    assert_eq!(status.error.len(), 1);
    assert_eq!(status.error[0].id, id("b"));
    assert_disjoint(&status);
}

#[test]
fn given_overlapping_sets_from_disk_when_dedupe_then_precedence_applied() {
    let mut status = ImportStatus {
        success: vec![id("a"), id("a"), id("b")],
        error: vec![error("a"), error("c"), error("c")],
        skip: vec![id("b"), id("d"), id("d")],
    };

    status.dedupe();

    assert_eq!(status.success, vec![id("a"), id("b")]);
    assert_eq!(status.skip, vec![id("d")]);
    assert_eq!(status.error.len(), 1);
    assert_eq!(status.error[0].id, id("c"));
    assert_disjoint(&status);
}

#[test]
fn test_progress_counts_any_terminal_set() {
    let mut status = ImportStatus::default();
    status.record_success(id("a"));
    status.record_skip(id("b"));
    let universe = [id("a"), id("b"), id("c")];

    let progress = status.progress(universe.iter());

    assert_eq!(progress.completed, 2);
    assert_eq!(progress.total, 3);
    assert!(!progress.is_complete());
}
