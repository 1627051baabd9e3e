use std::io;

use thiserror::Error;

/// Library-wide error type for clipmix operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Key-value store could not be read or written.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Stored value could not be (de)serialized.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// Profile name is already taken.
    #[error("Profile '{0}' already exists")]
    ProfileExists(String),

    /// Profile is not in the profile list.
    #[error("Profile '{0}' not found")]
    ProfileNotFound(String),

    /// Profile name is empty or reserved.
    #[error("Invalid profile name '{0}': name is empty or reserved")]
    InvalidProfileName(String),

    /// No box with this identifier on the board.
    #[error("Box '{0}' not found")]
    BoxNotFound(String),

    /// The box does not allow this action (mirror boxes cannot be removed, fixed boxes
    /// cannot be renamed).
    #[error("Box '{box_id}' does not support {action}")]
    UnsupportedBoxEdit { box_id: String, action: String },

    /// System clipboard access failed.
    #[error("Clipboard error: {0}")]
    ClipboardError(String),

    /// Selection source did not answer.
    #[error("Selection source unavailable: {0}")]
    SelectionUnavailable(String),

    /// Rotating box requested with no rotating content configured.
    #[error("No rotating content configured. Add some with 'clipmix prefs rotation add <text>'.")]
    EmptyRotation,
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub fn storage_error<S: Into<String>>(message: S) -> Self {
        AppError::Storage(message.into())
    }
}
