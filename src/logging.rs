//! Diagnostic logging to an append-only file.
//!
//! The terminal belongs to the game, so tracing output goes to a file. Logging
//! is best-effort: when the file cannot be opened the program runs without it.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Installs the global tracing subscriber writing to `path`.
///
/// `RUST_LOG` takes precedence over `level`. Returns whether a subscriber
/// was installed; failures are swallowed.
pub fn init(path: &Path, level: &str) -> bool {
    let Ok(log_file) = OpenOptions::new().create(true).append(true).open(path) else {
        return false;
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init()
        .is_ok()
}
