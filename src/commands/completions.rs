//! Shell completions command

use clap::CommandFactory;
use std::io::Write;

use crate::cli::CompletionsArgs;
use crate::error::{BundlerError, Result};

fn parse_shell(name: &str) -> Result<clap_complete::Shell> {
    match name.to_lowercase().as_str() {
        "bash" => Ok(clap_complete::Shell::Bash),
        "elvish" => Ok(clap_complete::Shell::Elvish),
        "fish" => Ok(clap_complete::Shell::Fish),
        "powershell" | "pwsh" => Ok(clap_complete::Shell::PowerShell),
        "zsh" => Ok(clap_complete::Shell::Zsh),
        _ => Err(BundlerError::UnknownShell {
            shell: name.to_string(),
        }),
    }
}

/// Generate shell completions on stdout
pub fn run(args: &CompletionsArgs) -> Result<()> {
    write_completions(&args.shell, &mut std::io::stdout().lock())
}

pub fn write_completions(shell: &str, out: &mut dyn Write) -> Result<()> {
    let shell = parse_shell(shell)?;
    let mut cmd = <crate::cli::Cli as CommandFactory>::command();
    clap_complete::generate(shell, &mut cmd, "confbundle", out);
    Ok(())
}
