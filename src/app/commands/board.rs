//! In-memory registry of the boxes of one profile.
//!
//! The board owns the two mirror boxes (selected text and clipboard content) and the
//! user's dynamic boxes. It tracks two orders: record order, which is how boxes are
//! written to the profile record, and render order, which is what the user arranges
//! and what the order record stores.

use std::collections::HashSet;

use crate::domain::{
    AppError, BoxId, BoxKind, BoxRecord, MirrorSettings, ProfileRecord, merge_incoming,
};

/// A dynamic box and its record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoxHandle {
    pub id: BoxId,
    pub record: BoxRecord,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct MirrorBox {
    id: BoxId,
    name: &'static str,
    text: String,
    settings: MirrorSettings,
}

/// A single field change on a box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoxEdit {
    Text(String),
    Included(bool),
    SingleUse(bool),
    AppendMode(bool),
    Name(String),
    Height(String),
}

/// Read-only view of any box, mirror or dynamic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoxView<'a> {
    pub id: &'a BoxId,
    pub name: &'a str,
    pub text: &'a str,
    pub included: bool,
    pub single_use: bool,
    pub append_mode: bool,
    pub height: &'a str,
    /// `None` for mirror boxes.
    pub kind: Option<BoxKind>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoxBoard {
    boxes: Vec<BoxHandle>,
    layout: Vec<BoxId>,
    selected_text: MirrorBox,
    clipboard: MirrorBox,
}

impl BoxBoard {
    /// Build the board for a profile.
    ///
    /// A profile without a record starts with `default_count` blank boxes. The saved
    /// order is reconciled against the boxes that actually exist: each known id is
    /// moved to the end in list order, unknown ids are skipped.
    pub fn materialize(
        record: Option<ProfileRecord>,
        saved_order: &[String],
        default_count: usize,
    ) -> Self {
        let record = record.unwrap_or_else(|| ProfileRecord {
            boxes: vec![BoxRecord::default(); default_count],
            ..ProfileRecord::default()
        });

        let mut board = Self {
            boxes: Vec::with_capacity(record.boxes.len()),
            layout: vec![BoxId::selected_text(), BoxId::clipboard()],
            selected_text: MirrorBox {
                id: BoxId::selected_text(),
                name: "Selected text",
                text: record.selected_text,
                settings: record.selected_text_box,
            },
            clipboard: MirrorBox {
                id: BoxId::clipboard(),
                name: "Clipboard",
                text: record.clipboard_content,
                settings: record.clipboard_box,
            },
        };

        let mut used: HashSet<BoxId> = HashSet::new();
        for (index, mut box_record) in record.boxes.into_iter().enumerate() {
            let position = index + 1;
            let candidate = box_record.id.clone().unwrap_or_else(|| BoxId::dynamic(position));
            let id = if candidate.is_mirror() || used.contains(&candidate) {
                board.next_id_excluding(&used)
            } else {
                candidate
            };
            box_record.name.get_or_insert_with(|| format!("Text {}", position));
            box_record.id = Some(id.clone());
            used.insert(id.clone());
            board.layout.push(id.clone());
            board.boxes.push(BoxHandle { id, record: box_record });
        }

        board.reconcile_order(saved_order);
        board
    }

    fn reconcile_order(&mut self, saved_order: &[String]) {
        for raw in saved_order {
            let wanted = BoxId::parse(raw);
            match self.layout.iter().position(|id| *id == wanted) {
                Some(pos) => {
                    let id = self.layout.remove(pos);
                    self.layout.push(id);
                }
                None => log::debug!("[BOARD] Skipping stale box id '{}' in saved order", raw),
            }
        }
    }

    fn next_id_excluding(&self, taken: &HashSet<BoxId>) -> BoxId {
        let highest = self
            .boxes
            .iter()
            .map(|b| &b.id)
            .chain(taken.iter())
            .filter_map(BoxId::dynamic_index)
            .max()
            .unwrap_or(0);
        BoxId::dynamic(highest + 1)
    }

    fn next_id(&self) -> BoxId {
        self.next_id_excluding(&HashSet::new())
    }

    /// Add a dynamic box at render `position` (or at the end) and return its id.
    pub fn create(&mut self, position: Option<usize>, mut record: BoxRecord) -> BoxId {
        let id = self.next_id();
        let ordinal = id.dynamic_index().unwrap_or(self.boxes.len() + 1);
        record.name.get_or_insert_with(|| format!("Text {}", ordinal));
        record.id = Some(id.clone());
        self.boxes.push(BoxHandle { id: id.clone(), record });
        match position {
            Some(pos) => self.layout.insert(pos.min(self.layout.len()), id.clone()),
            None => self.layout.push(id.clone()),
        }
        log::debug!("[BOARD] Created box '{}'", id);
        id
    }

    /// Remove a dynamic box and return its last record.
    pub fn destroy(&mut self, id: &BoxId) -> Result<BoxRecord, AppError> {
        if id.is_mirror() {
            return Err(unsupported(id, "removal"));
        }
        let index = self
            .boxes
            .iter()
            .position(|b| &b.id == id)
            .ok_or_else(|| AppError::BoxNotFound(id.to_string()))?;
        let handle = self.boxes.remove(index);
        self.layout.retain(|other| other != id);
        log::debug!("[BOARD] Destroyed box '{}'", id);
        Ok(handle.record)
    }

    /// Move a box to render `position`, clamped to the end.
    pub fn move_box(&mut self, id: &BoxId, position: usize) -> Result<(), AppError> {
        let current = self
            .layout
            .iter()
            .position(|other| other == id)
            .ok_or_else(|| AppError::BoxNotFound(id.to_string()))?;
        let id = self.layout.remove(current);
        let target = position.min(self.layout.len());
        self.layout.insert(target, id);
        Ok(())
    }

    /// Apply one field change.
    pub fn apply(&mut self, id: &BoxId, edit: BoxEdit) -> Result<(), AppError> {
        if let Some(mirror) = self.mirror_mut(id) {
            return match edit {
                BoxEdit::Text(text) => {
                    mirror.text = text;
                    Ok(())
                }
                BoxEdit::Included(value) => {
                    mirror.settings.included = value;
                    Ok(())
                }
                BoxEdit::AppendMode(value) => {
                    mirror.settings.append_mode = value;
                    Ok(())
                }
                BoxEdit::SingleUse(_) => Err(unsupported(id, "single-use")),
                BoxEdit::Name(_) => Err(unsupported(id, "renaming")),
                BoxEdit::Height(_) => Err(unsupported(id, "resizing")),
            };
        }

        let record = &mut self.handle_mut(id)?.record;
        match edit {
            BoxEdit::Text(text) => record.text = text,
            BoxEdit::Included(value) => record.included = value,
            BoxEdit::SingleUse(value) => record.single_use = value,
            BoxEdit::AppendMode(value) => record.append_mode = value,
            BoxEdit::Name(_) if record.kind == BoxKind::Fixed => {
                return Err(unsupported(id, "renaming"));
            }
            BoxEdit::Name(name) => record.name = Some(name),
            BoxEdit::Height(height) => record.height = height,
        }
        Ok(())
    }

    /// Merge incoming text into a box, honoring its append mode.
    pub fn receive(&mut self, id: &BoxId, incoming: &str) -> Result<(), AppError> {
        let view = self.view(id)?;
        let merged = merge_incoming(view.text, incoming, view.append_mode);
        self.apply(id, BoxEdit::Text(merged))
    }

    pub fn clear(&mut self, id: &BoxId) -> Result<(), AppError> {
        self.apply(id, BoxEdit::Text(String::new()))
    }

    pub fn view(&self, id: &BoxId) -> Result<BoxView<'_>, AppError> {
        if *id == self.selected_text.id {
            return Ok(mirror_view(&self.selected_text));
        }
        if *id == self.clipboard.id {
            return Ok(mirror_view(&self.clipboard));
        }
        self.boxes
            .iter()
            .find(|b| &b.id == id)
            .map(dynamic_view)
            .ok_or_else(|| AppError::BoxNotFound(id.to_string()))
    }

    /// Every box in render order.
    pub fn views(&self) -> Vec<BoxView<'_>> {
        self.layout.iter().filter_map(|id| self.view(id).ok()).collect()
    }

    /// Dynamic boxes in record order.
    pub fn handles(&self) -> &[BoxHandle] {
        &self.boxes
    }

    pub fn selected_text(&self) -> &str {
        &self.selected_text.text
    }

    pub fn clipboard_content(&self) -> &str {
        &self.clipboard.text
    }

    /// Render order as persisted in the order record.
    pub fn order_record(&self) -> Vec<String> {
        self.layout.iter().map(|id| id.order_entry().to_string()).collect()
    }

    /// Snapshot of the board as a profile record.
    pub fn to_record(&self) -> ProfileRecord {
        ProfileRecord {
            boxes: self.boxes.iter().map(|b| b.record.clone()).collect(),
            selected_text: self.selected_text.text.clone(),
            clipboard_content: self.clipboard.text.clone(),
            selected_text_box: self.selected_text.settings,
            clipboard_box: self.clipboard.settings,
        }
    }

    fn mirror_mut(&mut self, id: &BoxId) -> Option<&mut MirrorBox> {
        if *id == self.selected_text.id {
            Some(&mut self.selected_text)
        } else if *id == self.clipboard.id {
            Some(&mut self.clipboard)
        } else {
            None
        }
    }

    fn handle_mut(&mut self, id: &BoxId) -> Result<&mut BoxHandle, AppError> {
        self.boxes
            .iter_mut()
            .find(|b| &b.id == id)
            .ok_or_else(|| AppError::BoxNotFound(id.to_string()))
    }
}

fn unsupported(id: &BoxId, action: &str) -> AppError {
    AppError::UnsupportedBoxEdit { box_id: id.to_string(), action: action.to_string() }
}

fn mirror_view(mirror: &MirrorBox) -> BoxView<'_> {
    BoxView {
        id: &mirror.id,
        name: mirror.name,
        text: &mirror.text,
        included: mirror.settings.included,
        single_use: false,
        append_mode: mirror.settings.append_mode,
        height: "",
        kind: None,
    }
}

fn dynamic_view(handle: &BoxHandle) -> BoxView<'_> {
    BoxView {
        id: &handle.id,
        name: handle.record.name.as_deref().unwrap_or_default(),
        text: &handle.record.text,
        included: handle.record.included,
        single_use: handle.record.single_use,
        append_mode: handle.record.append_mode,
        height: &handle.record.height,
        kind: Some(handle.record.kind),
    }
}
