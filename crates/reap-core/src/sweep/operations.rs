use std::path::Path;
use std::sync::LazyLock;

use chrono::{DateTime, Duration, NaiveDateTime, Utc};
use regex::Regex;
use tracing::{debug, error, info, warn};

use super::errors::SweepError;
use super::types::{DeleteOutcome, DeleteStatus, Disposition, ScanEntry, SweepPlan};

/// Naming convention other systems produce: `YYYYMMDD_HHMMSSZ`, UTC.
pub(crate) const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%SZ";

static TIMESTAMP_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{8}_\d{6}Z$").expect("timestamp name regex is valid"));

/// Scan the immediate children of `root` and classify each against the
/// timestamp naming convention and the retention window.
///
/// `now` is read once by the caller so every entry in a batch is aged
/// against the same clock. Entries come back in filesystem enumeration
/// order; nothing is deleted or modified here. Only a failure to list
/// `root` itself is fatal.
pub(crate) fn scan_folders(
    root: &Path,
    n_days: u64,
    now: DateTime<Utc>,
) -> Result<SweepPlan, SweepError> {
    let threshold = retention_threshold(n_days);

    let dir = std::fs::read_dir(root).map_err(|e| SweepError::ScanFailed {
        path: root.to_path_buf(),
        source: e,
    })?;

    let mut entries = Vec::new();
    for entry in dir {
        let entry = entry.map_err(|e| SweepError::ScanFailed {
            path: root.to_path_buf(),
            source: e,
        })?;
        let name = entry.file_name().to_string_lossy().into_owned();
        // Follows symlinks, so a link to a directory classifies as one.
        let is_dir = entry.path().is_dir();
        let disposition = classify(&name, is_dir, now, threshold);
        debug!(
            event = "core.sweep.entry_classified",
            name = %name,
            disposition = ?disposition
        );
        entries.push(ScanEntry { name, disposition });
    }

    Ok(SweepPlan { entries })
}

/// Recursively delete each named subdirectory of `root`, independently
/// and in the order given.
///
/// A candidate that vanished since the scan reports `NotFound`; any other
/// failure reports `Failed` with the error detail. Neither stops the
/// remaining candidates from being processed, and no rollback is
/// attempted for a tree that was only partially removed.
pub(crate) fn delete_folders(root: &Path, names: &[String]) -> Vec<DeleteOutcome> {
    let mut outcomes = Vec::with_capacity(names.len());

    for name in names {
        let path = root.join(name);
        let status = match std::fs::remove_dir_all(&path) {
            Ok(()) => {
                info!(event = "core.sweep.folder_deleted", folder = %name);
                DeleteStatus::Deleted
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                warn!(
                    event = "core.sweep.folder_missing_at_delete",
                    folder = %name
                );
                DeleteStatus::NotFound
            }
            Err(e) => {
                error!(
                    event = "core.sweep.delete_failed",
                    folder = %name,
                    error = %e
                );
                DeleteStatus::Failed {
                    message: e.to_string(),
                }
            }
        };
        outcomes.push(DeleteOutcome {
            name: name.clone(),
            status,
        });
    }

    outcomes
}

fn classify(name: &str, is_dir: bool, now: DateTime<Utc>, threshold: Duration) -> Disposition {
    if !is_dir || !TIMESTAMP_NAME.is_match(name) {
        return Disposition::FormatMismatch;
    }

    // The regex only constrains digit shape; month 13 or hour 25 still
    // reach this parse and must be reported distinctly.
    let parsed = match NaiveDateTime::parse_from_str(name, TIMESTAMP_FORMAT) {
        Ok(ts) => ts.and_utc(),
        Err(_) => return Disposition::ParseFailed,
    };

    // Strict comparison: a folder aged exactly `n_days` is kept.
    if now - parsed > threshold {
        Disposition::Candidate
    } else {
        Disposition::WithinRetention
    }
}

/// Day count as a `Duration`, clamped instead of panicking for values
/// beyond chrono's range (no upper bound is enforced on the CLI).
fn retention_threshold(n_days: u64) -> Duration {
    i64::try_from(n_days)
        .ok()
        .and_then(Duration::try_days)
        .unwrap_or(Duration::MAX)
}
