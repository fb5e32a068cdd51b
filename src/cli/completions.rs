use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    confbundle completions bash > ~/.bash_completion.d/confbundle\n\n\
                  Generate zsh completions:\n    confbundle completions zsh > ~/.zfunc/_confbundle\n\n\
                  Generate fish completions:\n    confbundle completions fish > ~/.config/fish/completions/confbundle.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
