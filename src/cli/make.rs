use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Output format of the make command
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human readable summary
    #[default]
    Text,
    /// JSON object with the generated paths and class names
    Json,
}

/// Arguments for the make command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Create a repository for App\\Models\\User:\n    repogen make user\n\n\
                  Keep the model name singular:\n    repogen make user --no-pluralize\n\n\
                  Write into a different source root:\n    repogen make invoice --path src\n\n\
                  Use custom templates:\n    repogen make user --stubs resources/stubs")]
pub struct MakeArgs {
    /// Name of the model (e.g. user, test_model, TestModel)
    pub model: String,

    /// Source root the repositories are written under, relative to the workspace
    #[arg(long, short = 'p', default_value = "app")]
    pub path: PathBuf,

    /// Directory with repository.stub / contract.stub overrides
    /// (defaults to <workspace>/stubs when present)
    #[arg(long)]
    pub stubs: Option<PathBuf>,

    /// Do not pluralize the model name in class names
    #[arg(long)]
    pub no_pluralize: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}
