use crate::domain::{AppError, SelectionRequest, SelectionResponse};

/// Port for whatever answers "what text is selected right now".
pub trait SelectionSource {
    fn request(&mut self, request: &SelectionRequest) -> Result<SelectionResponse, AppError>;
}

/// Selection source that never answers.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSelection;

impl SelectionSource for NoSelection {
    fn request(&mut self, _request: &SelectionRequest) -> Result<SelectionResponse, AppError> {
        Err(AppError::SelectionUnavailable("no selection source configured".to_string()))
    }
}
