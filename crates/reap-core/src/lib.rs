pub mod errors;
pub mod sweep;

pub use errors::{ReapError, ReapResult};

use tracing_subscriber::EnvFilter;

/// Initialize tracing for CLI usage.
///
/// Events go to stderr so stdout stays reserved for the per-folder status
/// lines. Defaults to `warn`; set `RUST_LOG` to override.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
