//! Load `config.toml` and resolve the paths it names.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::configuration::parse::parse_config_content;
use crate::domain::{AppConfig, AppError};

use super::paths;

pub const CONFIG_FILE: &str = "config.toml";
pub const STORAGE_FILE: &str = "storage.json";

/// Parsed configuration with every path made absolute.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: AppConfig,
    pub storage_path: PathBuf,
}

/// Load configuration from the platform (or `CLIPMIX_HOME`) directories.
pub fn load_config() -> Result<LoadedConfig, AppError> {
    load_config_from(&paths::config_dir()?, &paths::data_dir()?)
}

/// Load `config_dir/config.toml`, treating a missing file as defaults.
///
/// Relative paths in the file resolve against `config_dir`.
pub fn load_config_from(config_dir: &Path, data_dir: &Path) -> Result<LoadedConfig, AppError> {
    let config_path = config_dir.join(CONFIG_FILE);
    let mut config = match fs::read_to_string(&config_path) {
        Ok(content) => parse_config_content(&content).map_err(|e| {
            AppError::config_error(format!("{}: {}", config_path.display(), e))
        })?,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            log::debug!("No config at {}, using defaults", config_path.display());
            AppConfig::default()
        }
        Err(err) => return Err(err.into()),
    };

    let storage_path = match &config.storage.path {
        Some(path) => config_dir.join(path),
        None => data_dir.join(STORAGE_FILE),
    };
    if let Some(file) = config.clipboard.file.take() {
        config.clipboard.file = Some(config_dir.join(file));
    }

    Ok(LoadedConfig { config, storage_path })
}
