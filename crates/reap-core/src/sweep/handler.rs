use std::path::Path;

use chrono::Utc;
use tracing::info;

use super::errors::SweepError;
use super::operations;
use super::types::SweepSummary;

/// Run one full sweep of `root`: scan and classify every immediate child,
/// then recursively delete the candidates strictly older than `n_days`.
///
/// The clock is read exactly once so the whole batch shares a single
/// notion of "now", and the scan completes fully before any deletion
/// starts. Per-candidate delete failures are recorded in the summary
/// rather than aborting the run; only an unlistable `root` is fatal.
pub fn sweep(root: &Path, n_days: u64) -> Result<SweepSummary, SweepError> {
    let now = Utc::now();

    info!(
        event = "core.sweep.started",
        root = %root.display(),
        n_days = n_days
    );

    let plan = operations::scan_folders(root, n_days, now)?;
    let candidates = plan.candidates();
    let deletions = operations::delete_folders(root, &candidates);

    let summary = SweepSummary {
        entries: plan.entries,
        deletions,
    };

    info!(
        event = "core.sweep.completed",
        scanned = summary.entries.len(),
        candidates = candidates.len(),
        deleted = summary.total_deleted()
    );

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sweep::types::{DeleteStatus, Disposition};
    use tempfile::TempDir;

    #[test]
    fn test_sweep_deletes_only_old_timestamp_folders() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        std::fs::create_dir(root.join("20200101_000000Z")).unwrap();
        std::fs::write(root.join("20200101_000000Z/report.txt"), b"data").unwrap();
        std::fs::create_dir(root.join("20991231_235959Z")).unwrap();
        std::fs::create_dir(root.join("notatimestamp")).unwrap();
        std::fs::write(root.join("20200101_000000Z.txt"), b"report").unwrap();

        let summary = sweep(root, 30).unwrap();

        assert_eq!(summary.deletions.len(), 1);
        assert_eq!(summary.deletions[0].name, "20200101_000000Z");
        assert_eq!(summary.deletions[0].status, DeleteStatus::Deleted);
        assert_eq!(summary.total_deleted(), 1);

        assert!(!root.join("20200101_000000Z").exists());
        assert!(root.join("20991231_235959Z").exists());
        assert!(root.join("notatimestamp").exists());
        assert!(root.join("20200101_000000Z.txt").exists());
    }

    #[test]
    fn test_sweep_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        std::fs::create_dir(root.join("20200101_000000Z")).unwrap();

        let first = sweep(root, 30).unwrap();
        assert_eq!(first.total_deleted(), 1);

        let second = sweep(root, 30).unwrap();
        assert_eq!(second.total_deleted(), 0);
        assert!(second.deletions.is_empty());
        assert!(second.entries.is_empty());
    }

    #[test]
    fn test_sweep_reports_invalid_calendar_name_and_keeps_it() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        std::fs::create_dir(root.join("20240230_120000Z")).unwrap();

        let summary = sweep(root, 0).unwrap();
        assert_eq!(summary.entries.len(), 1);
        assert_eq!(summary.entries[0].disposition, Disposition::ParseFailed);
        assert!(summary.deletions.is_empty());
        assert!(root.join("20240230_120000Z").exists());
    }

    #[test]
    fn test_sweep_missing_root_is_fatal() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("no_such_dir");

        assert!(sweep(&missing, 30).is_err());
    }
}
