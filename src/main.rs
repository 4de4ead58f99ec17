// file: src/main.rs
// version: 1.1.0
// guid: f7c2a845-9d06-4e31-b8a7-51e0d3f96c28

//! ndiff Harness - Main entry point

use clap::Parser;
use ndiff_harness::{
    cli::{
        args::{Cli, Commands},
        commands::*,
    },
    config::HarnessConfig,
    logging::logger,
    Result,
};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = HarnessConfig::load().await?;

    // Initialize logging
    logger::init_logger(cli.verbose, cli.quiet, &config.logging.level)?;

    match cli.command {
        Commands::PrintCommand {
            file1,
            file2,
            r_tol,
            a_tol,
            json,
        } => print_command_command(&config, &file1, &file2, r_tol, a_tol, json).await,
        Commands::CheckPrereqs => check_prereqs_command(&config).await,
        Commands::ShowConfig { json } => show_config_command(&config, json).await,
    }
}
