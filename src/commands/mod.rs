//! Command implementations for the confbundle CLI

pub mod backup;
pub mod completions;
pub mod generate;
pub mod helpers;
pub mod menu;
pub mod unbundle;

use crate::cli::Commands;
use crate::engine::BundleEngine;
use crate::error::Result;

/// Run a project command; no command opens the menu
pub fn dispatch(engine: &BundleEngine, command: Option<Commands>) -> Result<()> {
    match command {
        Some(Commands::Generate) => generate::run(engine),
        Some(Commands::Update) => generate::run_update(engine),
        Some(Commands::Unbundle(args)) => unbundle::run(engine, &args),
        Some(Commands::Backup) => backup::run(engine),
        Some(Commands::Purge(args)) => backup::run_purge(engine, &args),
        Some(Commands::Completions(args)) => completions::run(&args),
        Some(Commands::Menu) | None => menu::run(engine),
    }
}
