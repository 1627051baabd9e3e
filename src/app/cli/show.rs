use crate::app::api;
use crate::domain::{AppError, BoxKind};

pub fn run_show(profile: Option<&str>) -> Result<(), AppError> {
    let session = api::show(profile)?;
    println!("Profile: {}", session.profile);
    for view in session.board.views() {
        let mut flags = Vec::new();
        if view.single_use {
            flags.push("single-use");
        }
        if view.append_mode {
            flags.push("append");
        }
        if let Some(kind) = view.kind
            && kind != BoxKind::Standard
        {
            flags.push(kind.label());
        }
        let flags =
            if flags.is_empty() { String::new() } else { format!(" ({})", flags.join(", ")) };
        let marker = if view.included { "[x]" } else { "[ ]" };
        println!("{} {}  {}{}", marker, view.id, view.name, flags);
        for line in view.text.lines() {
            println!("    | {}", line);
        }
    }
    Ok(())
}
