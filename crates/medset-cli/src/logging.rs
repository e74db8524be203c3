use std::path;

use anyhow::Result;
use medset_term::{Config, ConfigKey};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Sends JSON logs to the configured log file, never to the interactive terminal.
///
/// Returns the appender guard, which must be held until the process is done logging.
/// A `log-level` of `off` installs nothing.
pub fn init() -> Result<Option<WorkerGuard>> {
    let level = Config::get(ConfigKey::LogLevel);
    if level == "off" {
        return Ok(None);
    }

    let log_file = path::PathBuf::from(Config::get(ConfigKey::LogFile));
    let dir = log_file
        .parent()
        .map(path::Path::to_path_buf)
        .unwrap_or_else(|| path::PathBuf::from("."));
    let file_name = log_file
        .file_name()
        .map(|e| e.to_os_string())
        .unwrap_or_else(|| "infer-medset.log".into());
    std::fs::create_dir_all(&dir)?;

    let appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_new(format!("{level},medset_term={level},medset_cli={level}"))?;
    let installed = tracing_subscriber::fmt()
        .json()
        .with_ansi(false)
        .with_writer(writer)
        .with_env_filter(filter)
        .try_init();
    if let Err(err) = installed {
        // Someone else owns the global subscriber; keep theirs.
        tracing::debug!(error = %err, "tracing subscriber already installed");
    }

    return Ok(Some(guard));
}
