//! Unbundle command implementation

use crate::cli::UnbundleArgs;
use crate::engine::BundleEngine;
use crate::error::Result;
use crate::prompt::{AssumeYes, InquirePrompt, Prompt};
use crate::report::UnbundleOutcome;
use crate::ui;

pub fn run(engine: &BundleEngine, args: &UnbundleArgs) -> Result<()> {
    if args.yes {
        write_back(engine, &mut AssumeYes)
    } else {
        write_back(engine, &mut InquirePrompt)
    }
}

/// Write back using the given confirmation source
pub fn write_back(engine: &BundleEngine, prompt: &mut dyn Prompt) -> Result<()> {
    match engine.unbundle(prompt)? {
        UnbundleOutcome::Completed(report) => {
            ui::print_unbundle_report(&engine.layout().root, &report);
        }
        UnbundleOutcome::Cancelled => ui::print_cancelled(),
    }
    Ok(())
}
