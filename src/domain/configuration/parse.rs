//! Pure parse/validate for `config.toml`.

use crate::domain::{AppConfig, AppError};

/// Parse and validate application configuration from TOML content.
pub fn parse_config_content(content: &str) -> Result<AppConfig, AppError> {
    let config: AppConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ClipboardBackend, SelectionBackend};

    #[test]
    fn config_uses_defaults_for_missing_sections() {
        let config = parse_config_content("").unwrap();

        assert_eq!(config.sync.interval_ms, 2000);
        assert_eq!(config.sync.selection, SelectionBackend::Primary);
        assert_eq!(config.clipboard.backend, ClipboardBackend::System);
        assert_eq!(config.boxes.default_count, 3);
        assert!(config.storage.path.is_none());
    }

    #[test]
    fn config_parses_all_sections() {
        let toml = r#"
[storage]
path = "/tmp/clipmix/storage.json"

[sync]
interval_ms = 500
selection = "command"
selection_command = ["responder", "--json"]

[clipboard]
backend = "file"
file = "/tmp/clipmix/clipboard.txt"

[boxes]
default_count = 5
"#;
        let config = parse_config_content(toml).unwrap();

        assert_eq!(config.sync.interval_ms, 500);
        assert_eq!(config.sync.selection, SelectionBackend::Command);
        assert_eq!(config.sync.selection_command, vec!["responder", "--json"]);
        assert_eq!(config.clipboard.backend, ClipboardBackend::File);
        assert_eq!(config.boxes.default_count, 5);
    }

    #[test]
    fn config_rejects_unknown_keys() {
        let err = parse_config_content("[sync]\nintervall_ms = 1\n").unwrap_err();
        assert!(matches!(err, AppError::TomlParseError(_)));
    }

    #[test]
    fn config_rejects_command_backend_without_command() {
        let err = parse_config_content("[sync]\nselection = \"command\"\n").unwrap_err();
        assert!(err.to_string().contains("selection_command"));
    }

    #[test]
    fn config_rejects_file_clipboard_without_path() {
        let err = parse_config_content("[clipboard]\nbackend = \"file\"\n").unwrap_err();
        assert!(err.to_string().contains("clipboard.file"));
    }

    #[test]
    fn config_rejects_zero_interval() {
        assert!(parse_config_content("[sync]\ninterval_ms = 0\n").is_err());
    }
}
