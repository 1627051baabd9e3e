//! Combine included boxes into one clipboard payload.

use crate::domain::{AppError, BoxId};
use crate::ports::{ClipboardPort, KeyValueStore};

use super::board::BoxBoard;
use super::session::Session;

/// Result of a successful combine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombineOutcome {
    pub payload: String,
    /// Ids whose text went into the payload, in render order.
    pub included: Vec<BoxId>,
    /// Single-use boxes that were cleared afterwards.
    pub cleared: Vec<BoxId>,
}

/// Join the text of every included box in render order.
///
/// Included empty boxes still contribute their separator. Trailing whitespace is
/// trimmed from the result.
pub fn build_payload(board: &BoxBoard) -> (String, Vec<BoxId>) {
    let mut included = Vec::new();
    let mut parts = Vec::new();
    for view in board.views() {
        if view.included {
            included.push(view.id.clone());
            parts.push(view.text);
        }
    }
    (parts.join("\n").trim_end().to_string(), included)
}

/// Write the combined payload to the clipboard, then clear included single-use boxes.
///
/// When the clipboard write fails nothing is cleared and the error is returned.
pub fn execute<S: KeyValueStore, C: ClipboardPort>(
    store: &S,
    session: &mut Session,
    clipboard: &mut C,
) -> Result<CombineOutcome, AppError> {
    let (payload, included) = build_payload(&session.board);

    clipboard.write_text(&payload).inspect_err(|e| {
        log::error!("[COMBINE] Error copying to clipboard: {}", e);
    })?;
    log::info!("[COMBINE] Copied {} box(es) to clipboard", included.len());

    let cleared: Vec<BoxId> = session
        .board
        .views()
        .into_iter()
        .filter(|view| view.included && view.single_use)
        .map(|view| view.id.clone())
        .collect();
    for id in &cleared {
        session.board.clear(id)?;
    }
    session.save(store)?;

    Ok(CombineOutcome { payload, included, cleared })
}
