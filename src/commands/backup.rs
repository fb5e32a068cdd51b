//! Backup and purge commands

use crate::cli::PurgeArgs;
use crate::engine::BundleEngine;
use crate::error::Result;
use crate::prompt::{AssumeYes, InquirePrompt, Prompt};
use crate::ui;

/// Snapshot every tracked file into a new backup directory
pub fn run(engine: &BundleEngine) -> Result<()> {
    let report = engine.backup_all()?;
    ui::print_tree_backup(&engine.layout().root, &report);
    Ok(())
}

pub fn run_purge(engine: &BundleEngine, args: &PurgeArgs) -> Result<()> {
    if args.yes {
        purge(engine, &mut AssumeYes)
    } else {
        purge(engine, &mut InquirePrompt)
    }
}

/// Delete the backup store once `prompt` agrees
pub fn purge(engine: &BundleEngine, prompt: &mut dyn Prompt) -> Result<()> {
    let outcome = engine.purge_backups(prompt)?;
    ui::print_purge(&engine.layout().root, &outcome);
    Ok(())
}
