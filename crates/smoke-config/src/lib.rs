//! Locating, loading and saving the smoke config file.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use smoke_core::{Result, SmokeConfig, SmokeError};
use tracing::{debug, warn};

/// Name used for the platform config and data directories.
pub const APP_NAME: &str = "smoke";
/// File name of the config inside the config directory.
pub const CONFIG_FILE: &str = "config.toml";
/// File name of the log inside the local data directory.
pub const LOG_FILE: &str = "smoke.log";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", APP_NAME)
}

/// Platform config file path, e.g. `~/.config/smoke/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE))
}

/// Platform log file path, e.g. `~/.local/share/smoke/smoke.log`.
pub fn log_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.data_local_dir().join(LOG_FILE))
}

/// Load the config from the platform path. Defaults when there is no home
/// directory or no file.
pub fn load() -> Result<SmokeConfig> {
    match config_path() {
        Some(path) => load_from(&path),
        None => {
            warn!("no home directory, using default smoke config");
            Ok(SmokeConfig::default())
        }
    }
}

/// Load the config at `path`. A missing file yields the defaults.
pub fn load_from(path: &Path) -> Result<SmokeConfig> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(SmokeConfig::default());
        }
        Err(source) => {
            return Err(SmokeError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    toml::from_str(&text).map_err(|err| {
        warn!(path = %path.display(), error = %err, "invalid config file");
        SmokeError::from(err)
    })
}

/// Write `config` to `path`, creating parent directories.
pub fn save_to(config: &SmokeConfig, path: &Path) -> Result<()> {
    let io_error = |source| SmokeError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_error)?;
    }
    let text = toml::to_string_pretty(config)?;
    fs::write(path, text).map_err(io_error)
}
