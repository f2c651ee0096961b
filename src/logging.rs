//! File logging. The terminal belongs to the UI, so all diagnostics go to a
//! daily-rotated log file.

use crate::config::LogConfig;
use color_eyre::{eyre::eyre, Result};
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "info";

/// Install the global tracing subscriber.
///
/// The returned guard flushes buffered log lines on drop; keep it alive for
/// the lifetime of the program.
pub fn setup_logging(config: &LogConfig) -> Result<WorkerGuard> {
  let logs_dir = match &config.dir {
    Some(dir) => dir.clone(),
    None => default_log_dir()?,
  };
  std::fs::create_dir_all(&logs_dir)
    .map_err(|e| eyre!("Failed to create log directory {}: {}", logs_dir.display(), e))?;

  let file_appender = RollingFileAppender::builder()
    .rotation(Rotation::DAILY)
    .max_log_files(7)
    .filename_prefix("empreg")
    .filename_suffix("log")
    .build(&logs_dir)
    .map_err(|e| eyre!("Failed to open log file in {}: {}", logs_dir.display(), e))?;
  let (writer, guard) = tracing_appender::non_blocking(file_appender);

  let file_layer = fmt::layer()
    .with_target(true)
    .with_level(true)
    .with_ansi(false)
    .with_writer(writer);

  tracing_subscriber::registry()
    .with(env_filter(
      std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref(),
      config.level.as_deref(),
    ))
    .with(file_layer)
    .try_init()
    .map_err(|e| eyre!("Failed to install log subscriber: {}", e))?;

  Ok(guard)
}

/// RUST_LOG first, then the configured level, then the default.
/// A directive that fails to parse falls through to the next one.
fn env_filter(rust_log: Option<&str>, configured: Option<&str>) -> EnvFilter {
  [rust_log, configured]
    .into_iter()
    .flatten()
    .filter(|directives| !directives.trim().is_empty())
    .find_map(|directives| EnvFilter::try_new(directives).ok())
    .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

fn default_log_dir() -> Result<PathBuf> {
  let data_dir = dirs::data_dir()
    .or_else(|| dirs::home_dir().map(|p| p.join(".local/share")))
    .ok_or_else(|| eyre!("Could not determine data directory"))?;

  Ok(data_dir.join("empreg").join("logs"))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_rust_log_wins() {
    let filter = env_filter(Some("empreg=trace"), Some("warn"));
    assert_eq!(filter.to_string(), "empreg=trace");
  }

  #[test]
  fn test_configured_level_without_rust_log() {
    assert_eq!(env_filter(None, Some("debug")).to_string(), "debug");
  }

  #[test]
  fn test_invalid_rust_log_falls_back() {
    assert_eq!(env_filter(Some("empreg=loud"), Some("warn")).to_string(), "warn");
  }

  #[test]
  fn test_default_filter() {
    assert_eq!(env_filter(None, None).to_string(), DEFAULT_FILTER);
    assert_eq!(env_filter(None, Some("=[")).to_string(), DEFAULT_FILTER);
    assert_eq!(env_filter(Some(""), None).to_string(), DEFAULT_FILTER);
  }
}
