//! confbundle - configuration bundle manager
//!
//! Collects a tree of YAML configuration files into one editable bundle document and
//! writes edits back to the individual files, keeping timestamped backups of anything
//! it overwrites.

pub mod backup;
pub mod bundle;
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod engine;
pub mod error;
pub mod filesystem;
pub mod prompt;
pub mod report;
pub mod ui;
