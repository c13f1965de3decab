//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - make: Make command arguments
//! - init: Init command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod completions;
pub mod init;
pub mod make;

pub use completions::CompletionsArgs;
pub use init::InitArgs;
pub use make::{MakeArgs, OutputFormat};

/// repogen - repository scaffolding for Eloquent models
#[derive(Parser, Debug)]
#[command(
    name = "repogen",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Scaffold repository classes and contracts for Eloquent models",
    long_about = "repogen derives class names and namespaces from a model name and writes a \
                  repository implementation plus its contract from templates, refusing to run \
                  when the model is missing or the repository already exists.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  repogen make user                 \x1b[90m# app/Repositories/UsersRepository.php\x1b[0m\n   \
                  repogen make user --no-pluralize  \x1b[90m# app/Repositories/UserRepository.php\x1b[0m\n   \
                  repogen init --stubs              \x1b[90m# Publish config and templates\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Workspace directory (defaults to current directory)
    #[arg(long, short = 'w', global = true, env = "REPOGEN_WORKSPACE")]
    pub workspace: Option<PathBuf>,

    /// Configuration file (defaults to repositories.yaml in the workspace)
    #[arg(long, short = 'c', global = true, env = "REPOGEN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a repository and its contract for a model
    #[command(alias = "make:repository")]
    Make(MakeArgs),

    /// Publish the default configuration (and optionally templates)
    Init(InitArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
