use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing with optional file output.
///
/// Logging is disabled by default so the TUI owns the terminal. A file
/// target comes from the `--log-file` flag or, failing that, the
/// `TALLY_LOG` env var. Filtering follows `RUST_LOG`, defaulting to
/// `info`.
pub fn init(log_file: Option<&Path>) {
    let path = match log_file {
        Some(path) => path.to_path_buf(),
        None => match std::env::var("TALLY_LOG") {
            Ok(value) => PathBuf::from(value),
            Err(_) => return,
        },
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let Ok(file) = std::fs::File::create(&path) else {
        eprintln!("warning: failed to create log file: {}", path.display());
        return;
    };

    let file_layer = fmt::layer()
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();
}
