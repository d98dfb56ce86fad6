use std::{fs, sync::Mutex};

use anyhow::{Context, Result};
use skywatch_core::Config;
use tracing_subscriber::EnvFilter;

/// Install the tracing subscriber.
///
/// The TUI owns the terminal, so log lines go to a file under the platform
/// data directory instead of stderr. `RUST_LOG` controls the filter.
pub fn init() -> Result<()> {
    let path = Config::log_file_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }
    let file = fs::File::create(&path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}
