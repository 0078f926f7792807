pub mod errors;
pub mod handler;
mod operations;
pub mod types;

// Public API exports
pub use errors::SweepError;
pub use handler::sweep;
pub use types::{
    DeleteOutcome, DeleteStatus, Disposition, ScanEntry, SweepPlan, SweepSummary,
};
