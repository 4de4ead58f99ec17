// file: src/cli/mod.rs
// version: 1.0.0
// guid: 6d81f2a9-3c50-4e7b-92a6-d04b87c15ef8

//! Command line interface for the ndiff harness

pub mod args;
pub mod commands;

pub use args::Cli;
pub use commands::*;
