use std::path::PathBuf;

use clap::ArgMatches;
use tracing::{error, info};

use reap_core::sweep;
use reap_core::sweep::{DeleteOutcome, DeleteStatus, Disposition, ScanEntry};

pub(crate) fn run_sweep(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let n_days = *matches
        .get_one::<u64>("n-days")
        .expect("--n-days is required by clap");
    let root = matches
        .get_one::<PathBuf>("folder-name")
        .expect("--folder-name is required by clap");

    info!(
        event = "cli.sweep_started",
        root = %root.display(),
        n_days = n_days
    );

    match sweep::sweep(root, n_days) {
        Ok(summary) => {
            for entry in &summary.entries {
                if let Some(line) = scan_message(entry) {
                    println!("{}", line);
                }
            }
            for outcome in &summary.deletions {
                println!("{}", delete_message(outcome));
            }

            info!(
                event = "cli.sweep_completed",
                deleted = summary.total_deleted()
            );

            Ok(())
        }
        Err(e) => {
            eprintln!("{}", e);

            error!(
                event = "cli.sweep_failed",
                error = %e
            );

            Err(e.into())
        }
    }
}

/// Status line for a scanned entry. Candidates produce no scan line; their
/// outcome is reported by the deletion phase instead.
fn scan_message(entry: &ScanEntry) -> Option<String> {
    match entry.disposition {
        Disposition::Candidate => None,
        Disposition::FormatMismatch => Some(format!(
            "Found folder with name '{}' that does not match the expected timestamp format. It will be skipped.",
            entry.name
        )),
        Disposition::ParseFailed => Some(format!(
            "Error parsing timestamp for folder '{}'. It will be skipped.",
            entry.name
        )),
        Disposition::WithinRetention => Some(format!("Folder '{}' is skipped.", entry.name)),
    }
}

fn delete_message(outcome: &DeleteOutcome) -> String {
    match &outcome.status {
        DeleteStatus::Deleted => format!(
            "Folder '{}' and its contents have been deleted.",
            outcome.name
        ),
        DeleteStatus::NotFound => format!("Folder '{}' not found.", outcome.name),
        DeleteStatus::Failed { message } => {
            format!("Error deleting folder '{}': {}", outcome.name, message)
        }
    }
}
