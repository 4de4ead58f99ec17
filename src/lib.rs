// file: src/lib.rs
// version: 1.0.0
// guid: 3f9a2c71-8d4e-4b02-9c55-1a7e6f08d2b4

//! # ndiff Harness
//!
//! Constructs command-line invocations for the external `ndiff` numeric
//! comparison tool, which compares two output files for near-equality with
//! configurable relative and absolute tolerances.
//!
//! The harness only assembles the argument vector; running the tool and
//! interpreting its output belong to the surrounding test infrastructure.

pub mod cli;
pub mod comparison;
pub mod config;
pub mod error;
pub mod logging;
pub mod paths;

pub use error::{HarnessError, Result};

/// Version information for the harness
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
