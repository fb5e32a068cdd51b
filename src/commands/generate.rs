//! Generate and update commands

use crate::engine::BundleEngine;
use crate::error::Result;
use crate::ui;

/// Build a fresh bundle, backing up the previous one
pub fn run(engine: &BundleEngine) -> Result<()> {
    let report = engine.generate()?;
    ui::print_generate_report(&engine.layout().root, &report);
    Ok(())
}

/// Merge tracked files into the existing bundle
pub fn run_update(engine: &BundleEngine) -> Result<()> {
    let report = engine.update()?;
    ui::print_generate_report(&engine.layout().root, &report);
    Ok(())
}
