//! CLI Adapter.

mod boxes;
mod prefs;
mod profile;
mod show;

use crate::app::api::{self, MirrorOutcome, TickReport};
use crate::domain::AppError;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "clipmix")]
#[command(version)]
#[command(
    about = "Compose clipboard content from named text boxes kept per profile",
    long_about = None
)]
struct Cli {
    /// Operate on this profile instead of the active one
    #[arg(short, long, global = true)]
    profile: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the boxes of a profile in render order
    #[clap(visible_alias = "s")]
    Show,
    /// Manage profiles
    #[clap(visible_alias = "p")]
    Profile {
        #[command(subcommand)]
        command: profile::ProfileCommands,
    },
    /// Edit boxes
    #[clap(visible_alias = "b")]
    Box {
        #[command(subcommand)]
        command: boxes::BoxCommands,
    },
    /// Copy the included boxes to the clipboard as one text
    #[clap(visible_alias = "c")]
    Combine,
    /// Mirror the selection and clipboard into the active profile
    #[clap(visible_alias = "w")]
    Watch {
        /// Run a single tick and exit
        #[arg(long, conflicts_with = "ticks")]
        once: bool,
        /// Stop after this many ticks
        #[arg(long)]
        ticks: Option<u64>,
        /// Polling interval (defaults to sync.interval_ms)
        #[arg(long)]
        interval_ms: Option<u64>,
    },
    /// Show or change preferences
    Prefs {
        #[command(subcommand)]
        command: prefs::PrefsCommands,
    },
}

/// On/off argument for flag edits.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub(crate) enum Switch {
    #[value(alias = "true")]
    On,
    #[value(alias = "false")]
    Off,
}

impl Switch {
    pub(crate) fn enabled(self) -> bool {
        matches!(self, Switch::On)
    }
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    let profile = cli.profile.as_deref();

    let result: Result<i32, AppError> = match cli.command {
        Commands::Show => show::run_show(profile).map(|_| 0),
        Commands::Profile { command } => profile::run_profile(command, profile).map(|_| 0),
        Commands::Box { command } => boxes::run_box(command, profile).map(|_| 0),
        Commands::Combine => run_combine(profile).map(|_| 0),
        Commands::Watch { once, ticks, interval_ms } => {
            run_watch(profile, if once { Some(1) } else { ticks }, interval_ms).map(|_| 0)
        }
        Commands::Prefs { command } => prefs::run_prefs(command).map(|_| 0),
    };

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run_combine(profile: Option<&str>) -> Result<(), AppError> {
    let outcome = api::combine(profile)?;
    println!("✅ Copied {} box(es) to the clipboard", outcome.included.len());
    for id in &outcome.cleared {
        println!("  Cleared single-use box {}", id);
    }
    Ok(())
}

fn run_watch(
    profile: Option<&str>,
    max_ticks: Option<u64>,
    interval_ms: Option<u64>,
) -> Result<(), AppError> {
    if let Some(name) = profile {
        api::select_profile(name)?;
    }
    let ticks = api::watch(interval_ms, max_ticks, print_tick)?;
    println!("✅ Finished after {} tick(s)", ticks);
    Ok(())
}

fn print_tick(report: &TickReport) {
    if !report.wrote_anything() {
        return;
    }
    let now = chrono::Local::now().format("%H:%M:%S");
    let mut updated = Vec::new();
    if report.selection == MirrorOutcome::Written {
        updated.push("selected text");
    }
    if report.clipboard == MirrorOutcome::Written {
        updated.push("clipboard");
    }
    println!("[{}] {}: updated {}", now, report.profile, updated.join(", "));
}
