use clap::Parser;

/// Arguments for the completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Enable completions for the current bash session:\n    source <(repogen completions bash)\n\n\
                  Install zsh completions:\n    repogen completions zsh > ~/.zfunc/_repogen")]
pub struct CompletionsArgs {
    /// Target shell: bash, elvish, fish, powershell (pwsh) or zsh
    pub shell: String,
}
