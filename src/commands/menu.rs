//! Interactive menu, shown when no command is given

use console::Style;
use inquire::{InquireError, Select};
use std::fmt;

use crate::engine::BundleEngine;
use crate::error::{BundlerError, Result};
use crate::prompt::InquirePrompt;
use crate::ui;

use super::{backup, generate, unbundle};

/// Menu entries in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Generate,
    WriteBack,
    BackupAll,
    PurgeBackups,
    Update,
    Exit,
}

impl MenuAction {
    pub const ALL: [MenuAction; 6] = [
        MenuAction::Generate,
        MenuAction::WriteBack,
        MenuAction::BackupAll,
        MenuAction::PurgeBackups,
        MenuAction::Update,
        MenuAction::Exit,
    ];
}

impl fmt::Display for MenuAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MenuAction::Generate => "Generate bundle (overwrite, previous bundle backed up)",
            MenuAction::WriteBack => "Write bundle back to source files",
            MenuAction::BackupAll => "Back up all tracked files",
            MenuAction::PurgeBackups => "Delete all backups",
            MenuAction::Update => "Update bundle incrementally",
            MenuAction::Exit => "Exit",
        };
        f.write_str(label)
    }
}

/// Run one menu action; destructive ones always ask on the terminal
fn perform(engine: &BundleEngine, action: MenuAction) -> Result<()> {
    match action {
        MenuAction::Generate => generate::run(engine),
        MenuAction::WriteBack => unbundle::write_back(engine, &mut InquirePrompt),
        MenuAction::BackupAll => backup::run(engine),
        MenuAction::PurgeBackups => backup::purge(engine, &mut InquirePrompt),
        MenuAction::Update => generate::run_update(engine),
        MenuAction::Exit => Ok(()),
    }
}

/// Menu errors are shown and the menu continues
fn report(error: &BundlerError) {
    if error.is_notice() {
        ui::print_notice(error);
    } else {
        ui::print_error(error);
    }
}

pub fn run(engine: &BundleEngine) -> Result<()> {
    println!(
        "{} {}",
        Style::new().bold().green().apply_to("confbundle"),
        Style::new()
            .dim()
            .apply_to(format!("project: {}", engine.layout().root.display()))
    );

    loop {
        println!();
        let choice = Select::new("What would you like to do?", MenuAction::ALL.to_vec())
            .with_starting_cursor(0)
            .with_page_size(MenuAction::ALL.len())
            .without_filtering()
            .with_help_message("↑↓ to move, ENTER to select, ESC to exit")
            .prompt_skippable();
        let action = match choice {
            Ok(Some(action)) => action,
            Ok(None) | Err(InquireError::OperationInterrupted) => break,
            Err(e) => return Err(e.into()),
        };

        if action == MenuAction::Exit {
            break;
        }
        if let Err(e) = perform(engine, action) {
            report(&e);
        }
    }

    println!("Bye.");
    Ok(())
}
