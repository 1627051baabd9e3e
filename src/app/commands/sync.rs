//! Mirror the current selection and clipboard into the mirror boxes.
//!
//! Ticks never overlap: each one loads the active profile, polls both sources, saves,
//! and only then is the next one scheduled. Writes therefore always land in the
//! profile that was active when the tick began.

use std::thread;
use std::time::{Duration, Instant};

use crate::app::AppContext;
use crate::domain::{AppError, BoxId, SelectionRequest};
use crate::ports::{ClipboardPort, KeyValueStore, SelectionSource};

use super::board::BoxBoard;
use super::profiles;
use super::session::Session;

/// What one tick did with one source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MirrorOutcome {
    /// Auto-update is turned off in preferences.
    Disabled,
    /// The source could not be read.
    Unavailable,
    /// Empty, or the same as the last value seen.
    Unchanged,
    /// New value seen, but the mirror box is not included.
    Excluded,
    /// New value merged into the mirror box.
    Written,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickReport {
    pub profile: String,
    pub selection: MirrorOutcome,
    pub clipboard: MirrorOutcome,
}

impl TickReport {
    pub fn wrote_anything(&self) -> bool {
        self.selection == MirrorOutcome::Written || self.clipboard == MirrorOutcome::Written
    }
}

/// Loop bounds for [`Synchronizer::run`].
#[derive(Debug, Clone, Copy)]
pub struct WatchOptions {
    pub interval: Duration,
    /// Stop after this many ticks. Runs forever when `None`.
    pub max_ticks: Option<u64>,
}

/// Change detector for the two mirrored sources.
///
/// Last-seen values live only in memory, so a fresh synchronizer re-syncs on its first
/// read.
#[derive(Debug, Default)]
pub struct Synchronizer {
    last_selection: Option<String>,
    last_clipboard: Option<String>,
}

impl Synchronizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run a single poll of both sources against the active profile.
    pub fn tick<S, C, T>(&mut self, ctx: &mut AppContext<S, C, T>) -> Result<TickReport, AppError>
    where
        S: KeyValueStore,
        C: ClipboardPort,
        T: SelectionSource,
    {
        let default_count = ctx.config().boxes.default_count;
        let (store, clipboard, selection) = ctx.parts_mut();
        let profile = profiles::current(store)?;
        let mut session = Session::load(store, &profile, default_count)?;
        let seen_before = (self.last_selection.clone(), self.last_clipboard.clone());

        let selection_outcome = if !session.preferences.auto_update_selected_text {
            MirrorOutcome::Disabled
        } else {
            match selection.request(&SelectionRequest::get_selected_text()) {
                Ok(response) => observe(
                    &mut session.board,
                    &BoxId::selected_text(),
                    &mut self.last_selection,
                    response.selected_text,
                )?,
                Err(e) => {
                    log::warn!("[SYNC] Error getting selected text: {}", e);
                    MirrorOutcome::Unavailable
                }
            }
        };

        let clipboard_outcome = if !session.preferences.auto_update_clipboard {
            MirrorOutcome::Disabled
        } else {
            match clipboard.read_text() {
                Ok(text) => observe(
                    &mut session.board,
                    &BoxId::clipboard(),
                    &mut self.last_clipboard,
                    text,
                )?,
                Err(e) => {
                    log::error!("[SYNC] Error reading clipboard: {}", e);
                    MirrorOutcome::Unavailable
                }
            }
        };

        let report =
            TickReport { profile, selection: selection_outcome, clipboard: clipboard_outcome };
        if report.wrote_anything() {
            if let Err(e) = session.save(store) {
                // Forget this tick's values so the next tick retries the write.
                (self.last_selection, self.last_clipboard) = seen_before;
                return Err(e);
            }
            log::info!("[SYNC] Updated mirror boxes of profile '{}'", report.profile);
        }
        Ok(report)
    }

    /// Tick every `options.interval` until `options.max_ticks` is reached.
    ///
    /// A failed tick is logged and the loop carries on. A tick that overruns the
    /// interval is followed immediately by the next one.
    pub fn run<S, C, T, F>(
        &mut self,
        ctx: &mut AppContext<S, C, T>,
        options: WatchOptions,
        mut on_tick: F,
    ) -> u64
    where
        S: KeyValueStore,
        C: ClipboardPort,
        T: SelectionSource,
        F: FnMut(&TickReport),
    {
        log::info!("[SYNC] Starting periodic updates every {:?}", options.interval);
        let mut ticks = 0;
        loop {
            let started = Instant::now();
            match self.tick(ctx) {
                Ok(report) => on_tick(&report),
                Err(e) => log::error!("[SYNC] Tick failed: {}", e),
            }
            ticks += 1;
            if options.max_ticks.is_some_and(|max| ticks >= max) {
                return ticks;
            }
            if let Some(remaining) = options.interval.checked_sub(started.elapsed()) {
                thread::sleep(remaining);
            }
        }
    }
}

fn observe(
    board: &mut BoxBoard,
    id: &BoxId,
    last_seen: &mut Option<String>,
    incoming: String,
) -> Result<MirrorOutcome, AppError> {
    if incoming.is_empty() || last_seen.as_deref() == Some(incoming.as_str()) {
        return Ok(MirrorOutcome::Unchanged);
    }
    *last_seen = Some(incoming.clone());
    if !board.view(id)?.included {
        return Ok(MirrorOutcome::Excluded);
    }
    board.receive(id, &incoming)?;
    Ok(MirrorOutcome::Written)
}
