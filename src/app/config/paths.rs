use std::path::PathBuf;

use crate::domain::AppError;

/// Overrides both the config and data directories.
pub const HOME_ENV: &str = "CLIPMIX_HOME";

const APP_DIR: &str = "clipmix";

fn home_override() -> Option<PathBuf> {
    std::env::var_os(HOME_ENV).filter(|value| !value.is_empty()).map(PathBuf::from)
}

/// Directory holding `config.toml`.
pub fn config_dir() -> Result<PathBuf, AppError> {
    if let Some(home) = home_override() {
        return Ok(home);
    }
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR))
        .ok_or_else(|| AppError::config_error("Could not find config directory"))
}

/// Directory holding the default store file.
pub fn data_dir() -> Result<PathBuf, AppError> {
    if let Some(home) = home_override() {
        return Ok(home);
    }
    dirs::data_dir()
        .map(|dir| dir.join(APP_DIR))
        .ok_or_else(|| AppError::config_error("Could not find data directory"))
}
