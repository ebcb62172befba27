//! Log setup. The UI owns the terminal, so events go to a plain-text file
//! under the user's home directory unless `--log-file` says otherwise.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use directories::BaseDirs;
use tracing_subscriber::EnvFilter;

/// Folder name used beneath the user's home directory for application data.
const DATA_DIR_NAME: &str = ".biblioteca-digital";
/// Log file name stored inside the application data directory.
const LOG_FILE_NAME: &str = "biblioteca.log";

/// Route `tracing` output to a file. The terminal belongs to the UI, so
/// nothing is ever written to stdout or stderr. `RUST_LOG` overrides `level`.
pub fn init_logging(path: Option<&Path>, level: &str) -> Result<PathBuf> {
    let log_path = match path {
        Some(path) => path.to_path_buf(),
        None => default_log_path()?,
    };

    if let Some(parent) = log_path.parent() {
        fs::create_dir_all(parent).context("failed to create log directory")?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("failed to open log file {}", log_path.display()))?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .context("invalid log level")?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|err| anyhow!("failed to install log subscriber: {err}"))?;

    Ok(log_path)
}

/// Resolve the default log file inside the user's home.
fn default_log_path() -> Result<PathBuf> {
    let base_dirs = BaseDirs::new().ok_or_else(|| anyhow!("could not locate home directory"))?;
    Ok(base_dirs.home_dir().join(DATA_DIR_NAME).join(LOG_FILE_NAME))
}
