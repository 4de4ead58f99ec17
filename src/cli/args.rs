// file: src/cli/args.rs
// version: 1.1.0
// guid: 4a3c9e16-b7d2-4508-8f1a-e65d20c94b7a

//! Command line argument definitions

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ndiff-harness")]
#[command(about = "Builds numeric-diff tool invocations for regression test comparisons")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the ndiff invocation for comparing two files
    PrintCommand {
        /// First file to compare
        file1: String,

        /// Second file to compare
        file2: String,

        #[arg(short = 'r', long, help = "Relative tolerance passed to the tool")]
        r_tol: Option<String>,

        #[arg(short = 'a', long, help = "Absolute tolerance passed to the tool")]
        a_tol: Option<String>,

        #[arg(long, help = "Emit the argument vector as a JSON array")]
        json: bool,
    },

    /// Check that the comparison tool can be resolved
    CheckPrereqs,

    /// Show the effective harness configuration
    ShowConfig {
        #[arg(long, help = "Emit the configuration as JSON")]
        json: bool,
    },
}
