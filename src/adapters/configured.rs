//! Backends chosen from configuration at startup.

use std::time::Duration;

use crate::domain::{
    AppError, ClipboardBackend, ClipboardConfig, SelectionBackend, SelectionRequest,
    SelectionResponse, SyncConfig,
};
use crate::ports::{ClipboardPort, NoSelection, SelectionSource};

use super::clipboard_arboard::ArboardClipboard;
use super::clipboard_file::FileClipboard;
use super::selection_command::CommandSelectionSource;
use super::selection_primary::PrimarySelection;

/// Clipboard backend selected by `[clipboard] backend`.
pub enum ConfiguredClipboard {
    System(ArboardClipboard),
    File(FileClipboard),
}

impl ConfiguredClipboard {
    pub fn from_config(config: &ClipboardConfig) -> Result<Self, AppError> {
        match config.backend {
            ClipboardBackend::System => {
                Ok(Self::System(ArboardClipboard::new().waiting_for_owner()))
            }
            ClipboardBackend::File => {
                let path = config.file.clone().ok_or_else(|| {
                    AppError::config_error("clipboard.backend = \"file\" requires clipboard.file")
                })?;
                Ok(Self::File(FileClipboard::new(path)))
            }
        }
    }
}

impl ClipboardPort for ConfiguredClipboard {
    fn read_text(&mut self) -> Result<String, AppError> {
        match self {
            Self::System(clipboard) => clipboard.read_text(),
            Self::File(clipboard) => clipboard.read_text(),
        }
    }

    fn write_text(&mut self, text: &str) -> Result<(), AppError> {
        match self {
            Self::System(clipboard) => clipboard.write_text(text),
            Self::File(clipboard) => clipboard.write_text(text),
        }
    }
}

/// Lower bound on how long a selection command may take, whatever the sync interval.
const MIN_SELECTION_TIMEOUT: Duration = Duration::from_millis(500);

/// Selection backend selected by `[sync] selection`.
pub enum ConfiguredSelection {
    Primary(PrimarySelection),
    Command(CommandSelectionSource),
    None(NoSelection),
}

impl ConfiguredSelection {
    pub fn from_config(config: &SyncConfig) -> Result<Self, AppError> {
        match config.selection {
            SelectionBackend::Primary => Ok(Self::Primary(PrimarySelection::new())),
            SelectionBackend::Command => {
                let timeout =
                    Duration::from_millis(config.interval_ms).max(MIN_SELECTION_TIMEOUT);
                let source = CommandSelectionSource::from_argv(&config.selection_command)?
                    .with_timeout(timeout);
                Ok(Self::Command(source))
            }
            SelectionBackend::None => Ok(Self::None(NoSelection)),
        }
    }
}

impl SelectionSource for ConfiguredSelection {
    fn request(&mut self, request: &SelectionRequest) -> Result<SelectionResponse, AppError> {
        match self {
            Self::Primary(source) => source.request(request),
            Self::Command(source) => source.request(request),
            Self::None(source) => source.request(request),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_clipboard_holds_written_text() {
        let clipboard = ConfiguredClipboard::from_config(&ClipboardConfig::default()).unwrap();

        assert!(matches!(clipboard, ConfiguredClipboard::System(ref c) if c.waits_for_owner()));
    }

    #[test]
    fn selection_command_timeout_follows_interval() {
        let config = |interval_ms| SyncConfig {
            selection: SelectionBackend::Command,
            selection_command: vec!["true".to_string()],
            interval_ms,
        };

        let slow = ConfiguredSelection::from_config(&config(3000)).unwrap();
        let fast = ConfiguredSelection::from_config(&config(10)).unwrap();

        let timeout = |selection: &ConfiguredSelection| match selection {
            ConfiguredSelection::Command(source) => source.timeout(),
            _ => panic!("expected the command backend"),
        };
        assert_eq!(timeout(&slow), Duration::from_secs(3));
        assert_eq!(timeout(&fast), MIN_SELECTION_TIMEOUT);
    }
}
