//! Box subcommands.

use clap::Subcommand;

use super::Switch;
use crate::app::api::{self, BoxEdit, PasteOutcome};
use crate::domain::{AppError, BoxId, BoxRecord};

#[derive(Subcommand)]
pub enum BoxCommands {
    /// Add a box
    #[clap(visible_alias = "a")]
    Add {
        /// Display name (defaults to "Text N")
        #[arg(long)]
        name: Option<String>,
        #[arg(long, default_value = "")]
        text: String,
        /// Render position (0 is the top). Appends when omitted.
        #[arg(long)]
        at: Option<usize>,
    },
    /// Add a box with fixed content and a read-only name
    AddFixed { text: String },
    /// Add a box seeded from the rotation list
    AddRotating,
    /// Remove a box
    #[clap(visible_alias = "rm")]
    Remove { id: String },
    /// Move a box to a render position
    #[clap(visible_alias = "mv")]
    Move { id: String, position: usize },
    /// Replace the text of a box
    Set { id: String, text: String },
    /// Paste the clipboard into a box
    Paste { id: String },
    /// Copy the selected-text box into a box
    PullSelection { id: String },
    /// Empty a box
    Clear { id: String },
    /// Include the box when combining
    Include { id: String, value: Switch },
    /// Clear the box after it is combined
    SingleUse { id: String, value: Switch },
    /// Prepend incoming content instead of replacing it
    Append { id: String, value: Switch },
    /// Rename a box
    Rename { id: String, name: String },
    /// Set the stored display height of a box
    Resize { id: String, height: String },
}

pub fn run_box(command: BoxCommands, profile: Option<&str>) -> Result<(), AppError> {
    match command {
        BoxCommands::Add { name, text, at } => {
            let record = BoxRecord { name, ..BoxRecord::with_text(text) };
            let id = api::add_box(profile, record, at)?;
            println!("✅ Added box {}", id);
        }
        BoxCommands::AddFixed { text } => {
            let id = api::add_fixed_box(profile, &text)?;
            println!("✅ Added fixed box {}", id);
        }
        BoxCommands::AddRotating => {
            let (id, text) = api::add_rotating_box(profile)?;
            println!("✅ Added rotating box {} with '{}'", id, text);
        }
        BoxCommands::Remove { id } => {
            let id = BoxId::parse(&id);
            api::remove_box(profile, &id)?;
            println!("✅ Removed box {}", id);
        }
        BoxCommands::Move { id, position } => {
            let id = BoxId::parse(&id);
            api::move_box(profile, &id, position)?;
            println!("✅ Moved box {} to position {}", id, position);
        }
        BoxCommands::Set { id, text } => edit(profile, id, BoxEdit::Text(text))?,
        BoxCommands::Paste { id } => {
            let id = BoxId::parse(&id);
            match api::paste_into_box(profile, &id)? {
                PasteOutcome::Pasted => println!("✅ Pasted clipboard into {}", id),
                PasteOutcome::ClipboardUnavailable => {
                    println!("⚠️  Clipboard could not be read; {} is unchanged", id)
                }
            }
        }
        BoxCommands::PullSelection { id } => {
            let id = BoxId::parse(&id);
            api::pull_selection_into_box(profile, &id)?;
            println!("✅ Copied selected text into {}", id);
        }
        BoxCommands::Clear { id } => {
            let id = BoxId::parse(&id);
            api::clear_box(profile, &id)?;
            println!("✅ Cleared box {}", id);
        }
        BoxCommands::Include { id, value } => {
            edit(profile, id, BoxEdit::Included(value.enabled()))?
        }
        BoxCommands::SingleUse { id, value } => {
            edit(profile, id, BoxEdit::SingleUse(value.enabled()))?
        }
        BoxCommands::Append { id, value } => {
            edit(profile, id, BoxEdit::AppendMode(value.enabled()))?
        }
        BoxCommands::Rename { id, name } => edit(profile, id, BoxEdit::Name(name))?,
        BoxCommands::Resize { id, height } => edit(profile, id, BoxEdit::Height(height))?,
    }
    Ok(())
}

fn edit(profile: Option<&str>, id: String, change: BoxEdit) -> Result<(), AppError> {
    let id = BoxId::parse(&id);
    api::edit_box(profile, &id, change)?;
    println!("✅ Updated box {}", id);
    Ok(())
}
