use clap::Parser;

/// Arguments for `unbundle`
#[derive(Parser, Debug, Default)]
#[command(after_help = "EXAMPLES:\n  \
                  Review the overwrite, then write back:\n    confbundle unbundle\n\n\
                  Write back without asking (scripts, CI):\n    confbundle unbundle --yes")]
pub struct UnbundleArgs {
    /// Write back without asking for confirmation
    #[arg(long, short = 'y')]
    pub yes: bool,
}

/// Arguments for `purge`
#[derive(Parser, Debug, Default)]
pub struct PurgeArgs {
    /// Delete the backup store without typing 'yes'
    #[arg(long, short = 'y')]
    pub yes: bool,
}
