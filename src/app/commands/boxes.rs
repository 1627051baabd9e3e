//! Box controls. Every mutation is saved before returning.

use crate::domain::{AppError, BoxId, BoxKind, BoxRecord};
use crate::ports::{ClipboardPort, KeyValueStore};

use super::board::BoxEdit;
use super::session::Session;

/// Add a box at render `position`, or at the end.
pub fn add<S: KeyValueStore>(
    store: &S,
    session: &mut Session,
    position: Option<usize>,
    record: BoxRecord,
) -> Result<BoxId, AppError> {
    let id = session.board.create(position, record);
    session.save(store)?;
    Ok(id)
}

/// Add a box seeded with fixed content. Its name cannot be changed later.
pub fn add_fixed<S: KeyValueStore>(
    store: &S,
    session: &mut Session,
    content: &str,
) -> Result<BoxId, AppError> {
    let record = BoxRecord {
        name: Some("Fixed box".to_string()),
        kind: BoxKind::Fixed,
        ..BoxRecord::with_text(content)
    };
    add(store, session, None, record)
}

/// Add a box seeded with the next rotating content entry.
pub fn add_rotating<S: KeyValueStore>(
    store: &S,
    session: &mut Session,
) -> Result<BoxId, AppError> {
    let content = session.preferences.next_rotating().ok_or(AppError::EmptyRotation)?;
    let record = BoxRecord {
        name: Some("Rotating box".to_string()),
        kind: BoxKind::Rotating,
        ..BoxRecord::with_text(content)
    };
    let id = session.board.create(None, record);
    session.save_with_preferences(store)?;
    Ok(id)
}

pub fn remove<S: KeyValueStore>(
    store: &S,
    session: &mut Session,
    id: &BoxId,
) -> Result<BoxRecord, AppError> {
    let record = session.board.destroy(id)?;
    session.save(store)?;
    Ok(record)
}

/// Drag-and-drop equivalent: move a box to a new render position.
pub fn move_to<S: KeyValueStore>(
    store: &S,
    session: &mut Session,
    id: &BoxId,
    position: usize,
) -> Result<(), AppError> {
    session.board.move_box(id, position)?;
    session.save(store)
}

pub fn edit<S: KeyValueStore>(
    store: &S,
    session: &mut Session,
    id: &BoxId,
    change: BoxEdit,
) -> Result<(), AppError> {
    session.edit(store, id, change)
}

pub fn clear<S: KeyValueStore>(store: &S, session: &mut Session, id: &BoxId) -> Result<(), AppError> {
    session.board.clear(id)?;
    session.save(store)
}

/// What a paste did to the box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasteOutcome {
    Pasted,
    /// The clipboard could not be read; the box is unchanged.
    ClipboardUnavailable,
}

/// Paste the clipboard into a box, honoring its append mode.
///
/// A clipboard read failure is logged and leaves the box unchanged.
pub fn paste<S: KeyValueStore, C: ClipboardPort>(
    store: &S,
    session: &mut Session,
    clipboard: &mut C,
    id: &BoxId,
) -> Result<PasteOutcome, AppError> {
    // Fail on unknown ids before touching the clipboard.
    session.board.view(id)?;
    let text = match clipboard.read_text() {
        Ok(text) => text,
        Err(e) => {
            log::error!("[BOARD] Failed to read clipboard contents: {}", e);
            return Ok(PasteOutcome::ClipboardUnavailable);
        }
    };
    session.board.receive(id, &text)?;
    session.save(store)?;
    Ok(PasteOutcome::Pasted)
}

/// Copy the selected-text box into another box, honoring the target's append mode.
pub fn pull_selection<S: KeyValueStore>(
    store: &S,
    session: &mut Session,
    id: &BoxId,
) -> Result<(), AppError> {
    let selected = session.board.selected_text().to_string();
    session.board.receive(id, &selected)?;
    session.save(store)
}
