use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of the selected-text mirror box.
pub const SELECTED_TEXT_BOX: &str = "selected-text";
/// Identifier of the clipboard mirror box.
pub const CLIPBOARD_BOX: &str = "clipboard-content";
/// Order-record spelling of the selected-text mirror box.
pub const SELECTED_TEXT_CONTAINER: &str = "selected-text-container";
/// Order-record spelling of the clipboard mirror box.
pub const CLIPBOARD_CONTAINER: &str = "clipboard-content-container";

/// Stable identifier of a box on the board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoxId(String);

impl BoxId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Parse an id as written in an order record or typed by a user.
    ///
    /// Mirror boxes are accepted under both their container and their text-field id.
    pub fn parse(raw: &str) -> Self {
        match raw {
            SELECTED_TEXT_CONTAINER => Self::selected_text(),
            CLIPBOARD_CONTAINER => Self::clipboard(),
            other => Self::new(other),
        }
    }

    /// Spelling used in the order record.
    pub fn order_entry(&self) -> &str {
        match self.0.as_str() {
            SELECTED_TEXT_BOX => SELECTED_TEXT_CONTAINER,
            CLIPBOARD_BOX => CLIPBOARD_CONTAINER,
            other => other,
        }
    }

    /// Identifier assigned to the dynamic box at 1-based `index`.
    pub fn dynamic(index: usize) -> Self {
        Self(format!("text{}", index))
    }

    pub fn selected_text() -> Self {
        Self::new(SELECTED_TEXT_BOX)
    }

    pub fn clipboard() -> Self {
        Self::new(CLIPBOARD_BOX)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_mirror(&self) -> bool {
        matches!(
            self.0.as_str(),
            SELECTED_TEXT_BOX | CLIPBOARD_BOX | SELECTED_TEXT_CONTAINER | CLIPBOARD_CONTAINER
        )
    }

    /// Numeric suffix of a `text<N>` identifier.
    pub fn dynamic_index(&self) -> Option<usize> {
        self.0.strip_prefix("text").and_then(|n| n.parse().ok())
    }
}

impl fmt::Display for BoxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Origin of a dynamic box's content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoxKind {
    #[default]
    Standard,
    /// Seeded with fixed content; its name is read-only.
    Fixed,
    /// Seeded from the rotating content list in preferences.
    Rotating,
}

impl BoxKind {
    pub fn label(&self) -> &'static str {
        match self {
            BoxKind::Standard => "standard",
            BoxKind::Fixed => "fixed",
            BoxKind::Rotating => "rotating",
        }
    }
}

fn default_true() -> bool {
    true
}

fn is_standard(kind: &BoxKind) -> bool {
    *kind == BoxKind::Standard
}

/// Persisted state of one user box.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoxRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<BoxId>,
    #[serde(default)]
    pub text: String,
    #[serde(default = "default_true", alias = "checked")]
    pub included: bool,
    #[serde(default)]
    pub single_use: bool,
    #[serde(default, alias = "append")]
    pub append_mode: bool,
    /// Display name. A stored empty name stays empty; only a missing one gets the
    /// default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Serialized UI size, e.g. `"120px"`.
    #[serde(default)]
    pub height: String,
    #[serde(default, skip_serializing_if = "is_standard")]
    pub kind: BoxKind,
}

impl Default for BoxRecord {
    fn default() -> Self {
        Self {
            id: None,
            text: String::new(),
            included: true,
            single_use: false,
            append_mode: false,
            name: None,
            height: String::new(),
            kind: BoxKind::Standard,
        }
    }
}

impl BoxRecord {
    pub fn with_text(text: impl Into<String>) -> Self {
        Self { text: text.into(), ..Self::default() }
    }
}

/// Include/append toggles of a mirror box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MirrorSettings {
    #[serde(default = "default_true")]
    pub included: bool,
    #[serde(default)]
    pub append_mode: bool,
}

impl Default for MirrorSettings {
    fn default() -> Self {
        Self { included: true, append_mode: false }
    }
}

/// Merge incoming text into a box.
///
/// In append mode the incoming text goes in front of the existing text, separated by
/// a newline. The separator is only added when there is existing text.
pub fn merge_incoming(existing: &str, incoming: &str, append_mode: bool) -> String {
    if append_mode && !existing.is_empty() {
        format!("{}\n{}", incoming, existing)
    } else {
        incoming.to_string()
    }
}
