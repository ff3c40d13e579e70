// src/telemetry.rs

use std::error::Error;
use std::fs;

use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;

/// Daily rolling `app.log` under `log_dir`, creating the directory if needed.
pub fn log_file_appender(log_dir: &str) -> Result<RollingFileAppender, Box<dyn Error>> {
    fs::create_dir_all(log_dir)
        .map_err(|e| format!("Cannot create log directory {:?}: {}", log_dir, e))?;

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("app.log")
        .build(log_dir)?;

    Ok(appender)
}

/// Stdout plus the rolling log file.
/// The returned guard must live as long as logging is needed.
pub fn init(config: &Config) -> Result<WorkerGuard, Box<dyn Error>> {
    let (non_blocking, guard) = tracing_appender::non_blocking(log_file_appender(&config.log_dir)?);
    let env_filter = EnvFilter::new(&config.rust_log);
    let stdout_layer = fmt::layer().with_writer(std::io::stdout).with_target(false);
    let file_layer = fmt::layer().with_writer(non_blocking).with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()?;

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_missing_log_dir() {
        let dir = tempfile::tempdir().unwrap();
        let log_dir = dir.path().join("nested").join("logs");

        log_file_appender(log_dir.to_str().unwrap()).unwrap();

        assert!(log_dir.is_dir());
    }

    #[test]
    fn unusable_log_dir_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("not_a_dir");
        fs::write(&file, b"").unwrap();
        let log_dir = file.join("logs");

        let err = log_file_appender(log_dir.to_str().unwrap()).unwrap_err();
        assert!(err.to_string().contains("Cannot create log directory"));
    }
}
