use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

pub const LOG_DIR_ENV: &str = "MEMBERSCOPE_LOG_DIR";

/// Where log files go: `MEMBERSCOPE_LOG_DIR` if set, else `<home>/.memberscope/logs`.
pub fn log_dir(override_dir: Option<&str>, home: Option<&str>) -> PathBuf {
    match override_dir.filter(|d| !d.trim().is_empty()) {
        Some(dir) => PathBuf::from(dir),
        None => Path::new(home.unwrap_or(".")).join(".memberscope").join("logs"),
    }
}

pub fn init_logging(component: &str, to_stderr: bool) -> WorkerGuard {
    let override_dir = std::env::var(LOG_DIR_ENV).ok();
    let home = std::env::var("HOME").ok();
    let log_dir = log_dir(override_dir.as_deref(), home.as_deref());
    let _ = std::fs::create_dir_all(&log_dir);

    // One file per component per day, e.g. cli.2024-01-21
    let file_appender = tracing_appender::rolling::daily(&log_dir, component);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true);

    let registry = tracing_subscriber::registry().with(filter).with(file_layer);

    // Stdout carries command output, so console logs stay on stderr.
    if to_stderr {
        let stderr_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(true)
            .with_target(false)
            .without_time();
        registry.with(stderr_layer).init();
    } else {
        registry.init();
    }

    tracing::debug!("Logging {} to {}", component, log_dir.display());
    guard
}
