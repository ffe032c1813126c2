use std::path::PathBuf;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming the log file base path.
pub const LOG_ENV_VAR: &str = "POKESEARCH_LOG";

/// Initialize tracing with optional file output.
///
/// Logging is disabled unless `POKESEARCH_LOG` holds a file path; stdout
/// belongs to the TUI. Returns the file actually written to.
pub fn init_tracing() -> Option<PathBuf> {
    let log_path = std::env::var(LOG_ENV_VAR).ok()?;
    let unique_path = unique_log_path(&log_path, std::process::id());

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let Ok(file) = std::fs::File::create(&unique_path) else {
        eprintln!(
            "Warning: Failed to create log file: {}",
            unique_path.display()
        );
        return None;
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();

    Some(unique_path)
}

/// `{base}.{unix_seconds}.{pid}`, so concurrent instances never share a file.
fn unique_log_path(base: &str, pid: u32) -> PathBuf {
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    PathBuf::from(format!("{}.{}.{}", base, timestamp, pid))
}
