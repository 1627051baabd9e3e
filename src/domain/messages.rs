//! Messages exchanged with a selection responder.

use serde::{Deserialize, Serialize};

/// Request sent to the selection responder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionRequest {
    pub action: String,
}

impl SelectionRequest {
    pub const GET_SELECTED_TEXT: &'static str = "getSelectedText";

    pub fn get_selected_text() -> Self {
        Self { action: Self::GET_SELECTED_TEXT.to_string() }
    }
}

/// Responder answer carrying the current selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionResponse {
    #[serde(default)]
    pub selected_text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_matches_wire_shape() {
        let json = serde_json::to_string(&SelectionRequest::get_selected_text()).unwrap();
        assert_eq!(json, r#"{"action":"getSelectedText"}"#);
    }

    #[test]
    fn response_reads_camel_case() {
        let response: SelectionResponse =
            serde_json::from_str(r#"{"selectedText":"hello"}"#).unwrap();
        assert_eq!(response.selected_text, "hello");
    }
}
