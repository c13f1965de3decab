//! repogen command line entry point

use clap::Parser;

use repogen::cli::{Cli, Commands};
use repogen::{commands, logging};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Make(args) => commands::make::run(cli.workspace, cli.config, args),
        Commands::Init(args) => commands::init::run(cli.workspace, args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("{:?}", miette::Report::new(e));
        std::process::exit(1);
    }
}
