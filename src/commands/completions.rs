//! Shell completions command

use std::io::Write;

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::{Cli, CompletionsArgs};
use crate::error::{self, Result};

/// Binary name completions are registered for
const BIN_NAME: &str = "repogen";

/// Parse a shell name, case-insensitively, accepting `pwsh` for PowerShell
pub fn parse_shell(name: &str) -> Result<Shell> {
    let lower = name.trim().to_lowercase();
    if lower == "pwsh" {
        return Ok(Shell::PowerShell);
    }
    lower
        .parse::<Shell>()
        .map_err(|_| error::unsupported_shell(name))
}

/// Write the completion script for `shell` to `out`
pub fn write_completions(shell: Shell, out: &mut dyn Write) {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, BIN_NAME, out);
}

/// Run completions command
pub fn run(args: CompletionsArgs) -> Result<()> {
    let shell = parse_shell(&args.shell)?;
    write_completions(shell, &mut std::io::stdout().lock());
    Ok(())
}
