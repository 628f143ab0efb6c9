//! File logging for terminal applications.
//!
//! A TUI owns the screen, so logs go to a file. The level filter is read from
//! the `CODECELL_LOG` environment variable using `tracing-subscriber`'s
//! `EnvFilter` syntax (for example `CODECELL_LOG=codecell_widgets=trace`),
//! falling back to `info`.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::runtime::ProgramError;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "CODECELL_LOG";

fn filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install a global `tracing` subscriber that appends to `path`.
///
/// Fails if the file cannot be opened or a global subscriber is already set.
pub fn init_file_logging(path: impl AsRef<Path>) -> Result<(), ProgramError> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path.as_ref())?;

    tracing_subscriber::fmt()
        .with_env_filter(filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(ProgramError::Logging)?;

    tracing::info!(path = %path.as_ref().display(), "file logging enabled");
    Ok(())
}
