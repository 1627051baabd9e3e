//! Profile subcommands.

use std::io::{ErrorKind, IsTerminal};

use clap::Subcommand;
use dialoguer::{Error as DialoguerError, Input};

use crate::app::api;
use crate::domain::AppError;

#[derive(Subcommand)]
pub enum ProfileCommands {
    /// List profiles, marking the active one
    #[clap(visible_alias = "ls")]
    List,
    /// Create a profile and switch to it
    #[clap(visible_alias = "new")]
    Create {
        /// Profile name (prompted when omitted)
        name: Option<String>,
    },
    /// Switch the active profile
    #[clap(visible_alias = "use")]
    Select { name: String },
    /// Rename a profile (the active one unless --from is given)
    #[clap(visible_alias = "mv")]
    Rename {
        new_name: String,
        #[arg(long)]
        from: Option<String>,
    },
}

pub fn run_profile(command: ProfileCommands, profile: Option<&str>) -> Result<(), AppError> {
    match command {
        ProfileCommands::List => {
            let (names, current) = api::list_profiles()?;
            for name in names {
                let marker = if name == current { "*" } else { " " };
                println!("{} {}", marker, name);
            }
        }
        ProfileCommands::Create { name } => {
            let name = match name {
                Some(name) => name,
                None => match prompt_profile_name()? {
                    Some(name) => name,
                    None => return Ok(()),
                },
            };
            let created = api::create_profile(&name)?;
            println!("✅ Created profile '{}' and switched to it", created);
        }
        ProfileCommands::Select { name } => {
            let session = api::select_profile(&name)?;
            println!("✅ Switched to profile '{}'", session.profile);
        }
        ProfileCommands::Rename { new_name, from } => {
            let outcome = api::rename_profile(from.as_deref().or(profile), &new_name)?;
            println!("✅ Renamed profile '{}' to '{}'", outcome.from, outcome.to);
        }
    }
    Ok(())
}

/// Ask for a profile name. `None` when the prompt is cancelled.
fn prompt_profile_name() -> Result<Option<String>, AppError> {
    if std::io::stdin().is_terminal() && std::io::stdout().is_terminal() {
        return match Input::<String>::new().with_prompt("Profile name").interact_text() {
            Ok(value) => Ok(Some(value)),
            Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
            Err(err) => Err(AppError::config_error(format!("Failed to read profile name: {}", err))),
        };
    }

    let mut input = String::new();
    std::io::stdin()
        .read_line(&mut input)
        .map_err(|e| AppError::config_error(format!("Failed to read profile name: {}", e)))?;
    Ok(Some(input.trim().to_string()))
}
