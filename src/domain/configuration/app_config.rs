//! Application configuration domain models.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::AppError;

/// Configuration loaded from `config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub sync: SyncConfig,
    #[serde(default)]
    pub clipboard: ClipboardConfig,
    #[serde(default)]
    pub boxes: BoxesConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.sync.validate()?;
        self.clipboard.validate()?;
        Ok(())
    }
}

/// Where the key-value store lives.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    /// Path of the JSON store. Defaults to the data directory.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Backend answering selection requests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionBackend {
    /// The desktop primary selection.
    #[default]
    Primary,
    /// An external responder program.
    Command,
    /// No selection source.
    None,
}

/// Synchronizer settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SyncConfig {
    /// Polling interval in milliseconds.
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
    #[serde(default)]
    pub selection: SelectionBackend,
    /// Program and arguments for the `command` backend.
    #[serde(default)]
    pub selection_command: Vec<String>,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
            selection: SelectionBackend::default(),
            selection_command: Vec::new(),
        }
    }
}

impl SyncConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.interval_ms == 0 {
            return Err(AppError::config_error("sync.interval_ms must be greater than zero"));
        }
        if self.selection == SelectionBackend::Command && self.selection_command.is_empty() {
            return Err(AppError::config_error(
                "sync.selection = \"command\" requires sync.selection_command",
            ));
        }
        Ok(())
    }
}

fn default_interval_ms() -> u64 {
    2000
}

/// Clipboard backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClipboardBackend {
    /// The system clipboard.
    #[default]
    System,
    /// A plain text file, for headless machines.
    File,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClipboardConfig {
    #[serde(default)]
    pub backend: ClipboardBackend,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl ClipboardConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.backend == ClipboardBackend::File && self.file.is_none() {
            return Err(AppError::config_error("clipboard.backend = \"file\" requires clipboard.file"));
        }
        Ok(())
    }
}

/// Box defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BoxesConfig {
    /// Number of blank boxes a profile without a record starts with.
    #[serde(default = "default_box_count")]
    pub default_count: usize,
}

impl Default for BoxesConfig {
    fn default() -> Self {
        Self { default_count: default_box_count() }
    }
}

fn default_box_count() -> usize {
    3
}
