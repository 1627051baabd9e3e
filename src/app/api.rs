//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use crate::adapters::{ConfiguredClipboard, ConfiguredSelection, JsonFileStore};
use crate::app::commands::{boxes, combine, preferences, profiles, sync};
use crate::app::{AppContext, config};
use crate::domain::{BoxId, BoxRecord, PreferenceToggle, Preferences};

pub use crate::app::commands::board::BoxEdit;
pub use crate::app::commands::boxes::PasteOutcome;
pub use crate::app::commands::combine::CombineOutcome;
pub use crate::app::commands::profiles::RenameOutcome;
pub use crate::app::commands::session::Session;
pub use crate::app::commands::sync::{MirrorOutcome, TickReport, WatchOptions};
pub use crate::domain::AppError;

type DefaultContext = AppContext<JsonFileStore, ConfiguredClipboard, ConfiguredSelection>;

/// Create an `AppContext` from the loaded configuration.
fn create_context() -> Result<DefaultContext, AppError> {
    let loaded = config::load_config()?;
    log::debug!("[STORE] Using store at {}", loaded.storage_path.display());
    let store = JsonFileStore::new(loaded.storage_path);
    let clipboard = ConfiguredClipboard::from_config(&loaded.config.clipboard)?;
    let selection = ConfiguredSelection::from_config(&loaded.config.sync)?;
    Ok(AppContext::new(store, clipboard, selection, loaded.config))
}

// =============================================================================
// Profile API
// =============================================================================

/// Load a profile (or the active one) for display.
pub fn show(profile: Option<&str>) -> Result<Session, AppError> {
    create_context()?.open_session(profile)
}

/// Saved profile names and the active one.
pub fn list_profiles() -> Result<(Vec<String>, String), AppError> {
    let ctx = create_context()?;
    Ok((profiles::list(ctx.store())?, profiles::current(ctx.store())?))
}

/// Create a profile and make it active.
pub fn create_profile(name: &str) -> Result<String, AppError> {
    let ctx = create_context()?;
    profiles::create(ctx.store(), name)
}

/// Make a profile active.
pub fn select_profile(name: &str) -> Result<Session, AppError> {
    let ctx = create_context()?;
    profiles::select(ctx.store(), name, ctx.config().boxes.default_count)
}

/// Rename `from` (or the active profile) to `to`.
pub fn rename_profile(from: Option<&str>, to: &str) -> Result<RenameOutcome, AppError> {
    let ctx = create_context()?;
    let from = profiles::resolve(ctx.store(), from)?;
    profiles::rename(ctx.store(), &from, to)
}

// =============================================================================
// Box API
// =============================================================================

pub fn add_box(
    profile: Option<&str>,
    record: BoxRecord,
    position: Option<usize>,
) -> Result<BoxId, AppError> {
    let ctx = create_context()?;
    let mut session = ctx.open_session(profile)?;
    boxes::add(ctx.store(), &mut session, position, record)
}

pub fn add_fixed_box(profile: Option<&str>, content: &str) -> Result<BoxId, AppError> {
    let ctx = create_context()?;
    let mut session = ctx.open_session(profile)?;
    boxes::add_fixed(ctx.store(), &mut session, content)
}

pub fn add_rotating_box(profile: Option<&str>) -> Result<(BoxId, String), AppError> {
    let ctx = create_context()?;
    let mut session = ctx.open_session(profile)?;
    let id = boxes::add_rotating(ctx.store(), &mut session)?;
    let text = session.board.view(&id)?.text.to_string();
    Ok((id, text))
}

pub fn remove_box(profile: Option<&str>, id: &BoxId) -> Result<BoxRecord, AppError> {
    let ctx = create_context()?;
    let mut session = ctx.open_session(profile)?;
    boxes::remove(ctx.store(), &mut session, id)
}

pub fn move_box(profile: Option<&str>, id: &BoxId, position: usize) -> Result<(), AppError> {
    let ctx = create_context()?;
    let mut session = ctx.open_session(profile)?;
    boxes::move_to(ctx.store(), &mut session, id, position)
}

pub fn edit_box(profile: Option<&str>, id: &BoxId, change: BoxEdit) -> Result<(), AppError> {
    let ctx = create_context()?;
    let mut session = ctx.open_session(profile)?;
    boxes::edit(ctx.store(), &mut session, id, change)
}

pub fn clear_box(profile: Option<&str>, id: &BoxId) -> Result<(), AppError> {
    let ctx = create_context()?;
    let mut session = ctx.open_session(profile)?;
    boxes::clear(ctx.store(), &mut session, id)
}

pub fn paste_into_box(profile: Option<&str>, id: &BoxId) -> Result<PasteOutcome, AppError> {
    let mut ctx = create_context()?;
    let mut session = ctx.open_session(profile)?;
    let (store, clipboard, _) = ctx.parts_mut();
    boxes::paste(store, &mut session, clipboard, id)
}

pub fn pull_selection_into_box(profile: Option<&str>, id: &BoxId) -> Result<(), AppError> {
    let ctx = create_context()?;
    let mut session = ctx.open_session(profile)?;
    boxes::pull_selection(ctx.store(), &mut session, id)
}

// =============================================================================
// Combine / Watch API
// =============================================================================

/// Copy the combined included boxes to the clipboard.
pub fn combine(profile: Option<&str>) -> Result<CombineOutcome, AppError> {
    let mut ctx = create_context()?;
    let mut session = ctx.open_session(profile)?;
    let (store, clipboard, _) = ctx.parts_mut();
    combine::execute(store, &mut session, clipboard)
}

/// Poll the selection and clipboard into the active profile's mirror boxes.
///
/// `interval_ms` overrides `[sync] interval_ms`. Returns the number of ticks run.
pub fn watch<F: FnMut(&TickReport)>(
    interval_ms: Option<u64>,
    max_ticks: Option<u64>,
    on_tick: F,
) -> Result<u64, AppError> {
    let mut ctx = create_context()?;
    let interval_ms = interval_ms.unwrap_or(ctx.config().sync.interval_ms);
    if interval_ms == 0 {
        return Err(AppError::config_error("interval must be greater than zero"));
    }
    let options = WatchOptions {
        interval: std::time::Duration::from_millis(interval_ms),
        max_ticks,
    };
    Ok(sync::Synchronizer::new().run(&mut ctx, options, on_tick))
}

// =============================================================================
// Preferences API
// =============================================================================

pub fn show_preferences() -> Result<Preferences, AppError> {
    preferences::load(create_context()?.store())
}

pub fn set_preference(toggle: PreferenceToggle, value: bool) -> Result<Preferences, AppError> {
    preferences::set(create_context()?.store(), toggle, value)
}

pub fn add_rotation(content: &str) -> Result<Preferences, AppError> {
    preferences::add_rotation(create_context()?.store(), content)
}

pub fn clear_rotation() -> Result<Preferences, AppError> {
    preferences::clear_rotation(create_context()?.store())
}
