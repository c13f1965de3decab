use clap::Parser;

/// Arguments for the init command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Publish the default configuration:\n    repogen init\n\n\
                  Also publish the templates for customization:\n    repogen init --stubs\n\n\
                  Overwrite previously published files:\n    repogen init --stubs --force")]
pub struct InitArgs {
    /// Also publish repository.stub and contract.stub to <workspace>/stubs
    #[arg(long)]
    pub stubs: bool,

    /// Overwrite files that already exist
    #[arg(long, short = 'f')]
    pub force: bool,
}
