//! Shared testing utilities for clipmix CLI tests.

use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const BASE_CONFIG: &str = r#"
[clipboard]
backend = "file"
file = "clipboard.txt"
"#;

const DEFAULT_SYNC: &str = r#"
[sync]
selection = "none"
interval_ms = 10
"#;

/// Testing harness providing an isolated `CLIPMIX_HOME` for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment with a file-backed clipboard.
    pub fn new() -> Self {
        Self::with_sync(DEFAULT_SYNC)
    }

    /// Create an environment with a custom `[sync]` section.
    pub fn with_sync(sync: &str) -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        fs::write(root.path().join("config.toml"), format!("{}{}", BASE_CONFIG, sync))
            .expect("Failed to write test config");
        Self { root }
    }

    /// Absolute path to the emulated `CLIPMIX_HOME` directory.
    pub fn home(&self) -> &Path {
        self.root.path()
    }

    /// Build a command for invoking the compiled `clipmix` binary.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("clipmix").expect("Failed to locate clipmix binary");
        cmd.env("CLIPMIX_HOME", self.home()).env_remove("RUST_LOG");
        cmd
    }

    pub fn clipboard_path(&self) -> PathBuf {
        self.home().join("clipboard.txt")
    }

    pub fn clipboard(&self) -> String {
        fs::read_to_string(self.clipboard_path()).unwrap_or_default()
    }

    pub fn set_clipboard(&self, text: &str) {
        fs::write(self.clipboard_path(), text).expect("Failed to write clipboard file");
    }

    pub fn storage_path(&self) -> PathBuf {
        self.home().join("storage.json")
    }

    /// The whole store as JSON.
    pub fn storage(&self) -> Value {
        let content = fs::read_to_string(self.storage_path()).expect("storage.json should exist");
        serde_json::from_str(&content).expect("storage.json should be valid JSON")
    }

    /// Seed the store before running any command.
    pub fn seed_storage(&self, value: Value) {
        fs::write(self.storage_path(), value.to_string()).expect("Failed to seed storage");
    }

    /// Leave both mirror boxes out of the combined payload.
    pub fn exclude_mirrors(&self) {
        for id in ["selected-text", "clipboard-content"] {
            self.cli().args(["box", "include", id, "off"]).assert().success();
        }
    }

    /// Text of the dynamic box at `index` in record order.
    pub fn box_text(&self, profile: &str, index: usize) -> String {
        self.storage()[profile]["boxes"][index]["text"].as_str().unwrap_or_default().to_string()
    }

    /// Saved render order of a profile.
    pub fn order(&self, profile: &str) -> Vec<String> {
        serde_json::from_value(self.storage()[format!("order_{}", profile)].clone())
            .unwrap_or_default()
    }
}
