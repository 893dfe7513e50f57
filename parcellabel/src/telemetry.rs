//! Subscriber setup for `tracing`.

use std::{fs::OpenOptions, path::Path, sync::Mutex};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt as _, util::SubscriberInitExt as _};

/// Install the global subscriber: human-readable events on stdout, and the
/// same events appended to `log_file` with timestamps and without colors.
///
/// The level comes from `RUST_LOG` and defaults to `info`. If the log file
/// cannot be opened the run continues with console output only.
pub fn init(log_file: &Path) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file = match OpenOptions::new().create(true).append(true).open(log_file) {
        Ok(file) => Some(file),
        Err(err) => {
            eprintln!(
                "Warning: cannot open log file {}: {err}",
                log_file.display()
            );
            None
        }
    };
    let file_layer = file.map(|file| {
        fmt::layer()
            .with_ansi(false)
            .with_target(false)
            .with_writer(Mutex::new(file))
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .with(file_layer)
        .init();
}
