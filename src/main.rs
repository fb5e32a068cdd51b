//! confbundle - configuration bundle manager
//!
//! Bundles a directory tree of YAML configuration files into one document, and writes
//! the edited document back to the individual files.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use confbundle::cli::{Cli, Commands};
use confbundle::commands;

/// Diagnostics go to stderr: warnings by default, debug output with `-v`
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Completions do not need a project
    let result = match cli.command {
        Some(Commands::Completions(args)) => commands::completions::run(&args),
        command => commands::helpers::open_engine(cli.root, cli.config.as_deref())
            .and_then(|engine| commands::dispatch(&engine, command)),
    };

    match result {
        Ok(()) => {}
        // Nothing to do is not a failure
        Err(e) if e.is_notice() => confbundle::ui::print_notice(&e),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
