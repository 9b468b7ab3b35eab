//! ferry CLI main entry point.

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::{Cli, Command};
use ferry::init_logger;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity flags
    let _logger = init_logger(cli.verbose, cli.quiet);

    // Build global options shared by all commands
    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        cloud_container: cli.cloud_container,
        config_dir: cli.config_dir,
    };

    // Dispatch to command implementations
    let result = match cli.command {
        Command::Resolve(cmd) => cmd.execute(&global),
        Command::OpenTarget(cmd) => cmd.execute(&global),
        Command::MapUrl(cmd) => cmd.execute(&global),
        Command::Apps(cmd) => cmd.execute(&global),
        Command::Script(cmd) => cmd.execute(&global),
        Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors with appropriate exit codes
    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code());
    }
}
