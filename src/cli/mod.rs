//! CLI definitions using clap derive API
//!
//! Argument types live in submodules:
//! - confirm: `unbundle` and `purge` arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod completions;
pub mod confirm;

pub use completions::CompletionsArgs;
pub use confirm::{PurgeArgs, UnbundleArgs};

/// confbundle - configuration bundle manager
///
/// Collect YAML configuration files into one editable bundle and write edits back.
#[derive(Parser, Debug)]
#[command(
    name = "confbundle",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Bundle a tree of YAML configuration files into one document and write edits back",
    long_about = "confbundle collects every tracked configuration file under the source directory \
                  into a single bundle document, lets you edit it in one place, and writes the \
                  entries back to their files. Anything overwritten is backed up first. \
                  Run without a command for an interactive menu.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  confbundle generate             \x1b[90m# Build a fresh bundle from run/\x1b[0m\n   \
                  confbundle update               \x1b[90m# Merge new and changed files into the bundle\x1b[0m\n   \
                  confbundle unbundle             \x1b[90m# Write bundle entries back to their files\x1b[0m\n   \
                  confbundle backup               \x1b[90m# Snapshot the whole source tree\x1b[0m\n   \
                  confbundle purge                \x1b[90m# Delete every backup\x1b[0m\n   \
                  confbundle -r ./deploy generate \x1b[90m# Work on another project root\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Project root (defaults to current directory)
    #[arg(long, short = 'r', global = true, env = "CONFBUNDLE_ROOT")]
    pub root: Option<PathBuf>,

    /// Configuration file (defaults to confbundle.yaml in the project root)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a fresh bundle from every tracked file
    Generate,

    /// Merge tracked files into the existing bundle
    Update,

    /// Write bundle entries back to their files
    Unbundle(UnbundleArgs),

    /// Copy the whole source tree into a timestamped backup
    Backup,

    /// Delete the backup store
    Purge(PurgeArgs),

    /// Interactive menu (default when no command is given)
    Menu,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
