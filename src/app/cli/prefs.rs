//! Preference subcommands.

use clap::Subcommand;

use super::Switch;
use crate::app::api;
use crate::domain::{AppError, PreferenceToggle, Preferences};

#[derive(Subcommand)]
pub enum PrefsCommands {
    /// Print all preferences
    Show,
    /// Set a toggle: dark-mode, auto-selection or auto-clipboard
    Set { name: String, value: Switch },
    /// Manage the rotating box content list
    Rotation {
        #[command(subcommand)]
        command: RotationCommands,
    },
}

#[derive(Subcommand)]
pub enum RotationCommands {
    /// Append an entry
    Add { text: String },
    /// Remove every entry
    Clear,
}

pub fn run_prefs(command: PrefsCommands) -> Result<(), AppError> {
    match command {
        PrefsCommands::Show => print_preferences(&api::show_preferences()?),
        PrefsCommands::Set { name, value } => {
            let toggle = PreferenceToggle::from_name(&name).ok_or_else(|| {
                AppError::config_error(format!(
                    "Unknown preference '{}' (expected dark-mode, auto-selection or auto-clipboard)",
                    name
                ))
            })?;
            api::set_preference(toggle, value.enabled())?;
            println!("✅ Set {} to {}", name, if value.enabled() { "on" } else { "off" });
        }
        PrefsCommands::Rotation { command } => match command {
            RotationCommands::Add { text } => {
                let prefs = api::add_rotation(&text)?;
                println!("✅ Rotation now has {} entr(ies)", prefs.rotating_content.len());
            }
            RotationCommands::Clear => {
                api::clear_rotation()?;
                println!("✅ Cleared rotation");
            }
        },
    }
    Ok(())
}

fn print_preferences(prefs: &Preferences) {
    let on_off = |value: bool| if value { "on" } else { "off" };
    println!("dark-mode:       {}", on_off(prefs.dark_mode));
    println!("auto-selection:  {}", on_off(prefs.auto_update_selected_text));
    println!("auto-clipboard:  {}", on_off(prefs.auto_update_clipboard));
    println!("rotation (next #{}):", prefs.rotating_box_index + 1);
    for (i, entry) in prefs.rotating_content.iter().enumerate() {
        println!("  {}. {}", i + 1, entry);
    }
}
