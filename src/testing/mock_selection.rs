use crate::domain::{AppError, SelectionRequest, SelectionResponse};
use crate::ports::SelectionSource;

/// Scripted selection source. `None` simulates a tab without a responder.
#[derive(Default)]
pub struct MockSelection {
    pub current: Option<String>,
    pub requests: Vec<SelectionRequest>,
}

impl MockSelection {
    pub fn with_text(text: &str) -> Self {
        Self { current: Some(text.to_string()), requests: Vec::new() }
    }

    pub fn unavailable() -> Self {
        Self::default()
    }
}

impl SelectionSource for MockSelection {
    fn request(&mut self, request: &SelectionRequest) -> Result<SelectionResponse, AppError> {
        self.requests.push(request.clone());
        match &self.current {
            Some(text) => Ok(SelectionResponse { selected_text: text.clone() }),
            None => Err(AppError::SelectionUnavailable("no responder in tab".to_string())),
        }
    }
}
