/// How a scanned directory entry was classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Valid timestamp folder, strictly older than the retention window.
    Candidate,
    /// Not a directory, or the name does not have the `YYYYMMDD_HHMMSSZ` shape.
    FormatMismatch,
    /// Name has the right shape but is not a valid calendar timestamp.
    ParseFailed,
    /// Valid timestamp folder, still within the retention window.
    WithinRetention,
}

/// One immediate child of the root, with its classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanEntry {
    pub name: String,
    pub disposition: Disposition,
}

/// Scan result, in filesystem enumeration order.
#[derive(Debug, Default)]
pub struct SweepPlan {
    pub entries: Vec<ScanEntry>,
}

impl SweepPlan {
    /// Names queued for deletion, preserving scan order.
    pub fn candidates(&self) -> Vec<String> {
        self.entries
            .iter()
            .filter(|entry| entry.disposition == Disposition::Candidate)
            .map(|entry| entry.name.clone())
            .collect()
    }
}

/// Outcome of one deletion attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteStatus {
    Deleted,
    /// Candidate vanished between scan and delete.
    NotFound,
    Failed { message: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteOutcome {
    pub name: String,
    pub status: DeleteStatus,
}

/// Everything that happened during one sweep, enough to reconstruct a
/// per-folder status line for every entry processed.
#[derive(Debug, Default)]
pub struct SweepSummary {
    /// All scanned entries, in enumeration order.
    pub entries: Vec<ScanEntry>,
    /// Deletion outcomes for the candidates, in scan order.
    pub deletions: Vec<DeleteOutcome>,
}

impl SweepSummary {
    pub fn total_deleted(&self) -> usize {
        self.deletions
            .iter()
            .filter(|outcome| outcome.status == DeleteStatus::Deleted)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidates_preserve_scan_order() {
        let plan = SweepPlan {
            entries: vec![
                ScanEntry {
                    name: "20200101_000000Z".to_string(),
                    disposition: Disposition::Candidate,
                },
                ScanEntry {
                    name: "notatimestamp".to_string(),
                    disposition: Disposition::FormatMismatch,
                },
                ScanEntry {
                    name: "20200102_000000Z".to_string(),
                    disposition: Disposition::Candidate,
                },
            ],
        };
        assert_eq!(
            plan.candidates(),
            vec!["20200101_000000Z".to_string(), "20200102_000000Z".to_string()]
        );
    }

    #[test]
    fn test_total_deleted_counts_only_successes() {
        let summary = SweepSummary {
            entries: Vec::new(),
            deletions: vec![
                DeleteOutcome {
                    name: "20200101_000000Z".to_string(),
                    status: DeleteStatus::Deleted,
                },
                DeleteOutcome {
                    name: "20200102_000000Z".to_string(),
                    status: DeleteStatus::NotFound,
                },
                DeleteOutcome {
                    name: "20200103_000000Z".to_string(),
                    status: DeleteStatus::Failed {
                        message: "permission denied".to_string(),
                    },
                },
            ],
        };
        assert_eq!(summary.total_deleted(), 1);
    }
}
