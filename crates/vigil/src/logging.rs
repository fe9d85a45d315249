//! Log setup. The terminal belongs to the UI, so logs only ever go to a file.

use std::{
    fs::{self, OpenOptions},
    path::PathBuf,
    sync::Mutex,
};

use color_eyre::eyre::{WrapErr, eyre};
use directories::ProjectDirs;
use tracing_subscriber::EnvFilter;
use vigil_config::LogConfig;

const LOG_ENV: &str = "VIGIL_LOG";

/// Install a file subscriber when a log file is configured or `VIGIL_LOG`
/// is set. Otherwise tracing events are discarded.
pub fn init(config: &LogConfig) -> color_eyre::Result<()> {
    let from_env = std::env::var_os(LOG_ENV).is_some();
    let path = match (&config.file, from_env) {
        (Some(path), _) => path.clone(),
        (None, true) => default_log_path()?,
        (None, false) => return Ok(()),
    };

    let filter = match EnvFilter::try_from_env(LOG_ENV) {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.level)
            .wrap_err_with(|| format!("invalid log level `{}`", config.level))?,
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .wrap_err_with(|| format!("failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|err| eyre!("failed to install log subscriber: {err}"))
}

fn default_log_path() -> color_eyre::Result<PathBuf> {
    ProjectDirs::from("", "", "vigil")
        .map(|dirs| dirs.data_local_dir().join("vigil.log"))
        .ok_or_else(|| eyre!("no home directory to place the log file in"))
}
