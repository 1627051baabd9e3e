use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

fn default_rotating_content() -> Vec<String> {
    vec!["Task 1".to_string(), "Task 2".to_string(), "Task 3".to_string()]
}

/// Process-wide preferences, independent of the active profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    #[serde(default)]
    pub dark_mode: bool,
    #[serde(default = "default_true")]
    pub auto_update_selected_text: bool,
    #[serde(default = "default_true")]
    pub auto_update_clipboard: bool,
    #[serde(default = "default_rotating_content")]
    pub rotating_content: Vec<String>,
    #[serde(default)]
    pub rotating_box_index: usize,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            dark_mode: false,
            auto_update_selected_text: true,
            auto_update_clipboard: true,
            rotating_content: default_rotating_content(),
            rotating_box_index: 0,
        }
    }
}

impl Preferences {
    /// Content for the next rotating box, advancing the index cyclically.
    ///
    /// Returns `None` when the rotation list is empty.
    pub fn next_rotating(&mut self) -> Option<String> {
        if self.rotating_content.is_empty() {
            return None;
        }
        let index = self.rotating_box_index % self.rotating_content.len();
        let content = self.rotating_content[index].clone();
        self.rotating_box_index = (index + 1) % self.rotating_content.len();
        Some(content)
    }
}

/// A preference toggle settable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferenceToggle {
    DarkMode,
    AutoSelection,
    AutoClipboard,
}

impl PreferenceToggle {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "dark-mode" | "darkMode" => Some(Self::DarkMode),
            "auto-selection" | "autoUpdateSelectedText" => Some(Self::AutoSelection),
            "auto-clipboard" | "autoUpdateClipboard" => Some(Self::AutoClipboard),
            _ => None,
        }
    }

    pub fn apply(&self, preferences: &mut Preferences, value: bool) {
        match self {
            Self::DarkMode => preferences.dark_mode = value,
            Self::AutoSelection => preferences.auto_update_selected_text = value,
            Self::AutoClipboard => preferences.auto_update_clipboard = value,
        }
    }
}
