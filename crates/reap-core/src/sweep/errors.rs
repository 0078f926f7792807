use std::path::PathBuf;

use crate::errors::ReapError;

#[derive(Debug, thiserror::Error)]
pub enum SweepError {
    #[error("Failed to read directory '{}': {source}", .path.display())]
    ScanFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ReapError for SweepError {
    fn error_code(&self) -> &'static str {
        match self {
            SweepError::ScanFailed { .. } => "SWEEP_SCAN_FAILED",
        }
    }

    fn is_user_error(&self) -> bool {
        // An unreadable root is almost always a caller mistake (wrong path,
        // missing directory), not an internal fault.
        true
    }
}
