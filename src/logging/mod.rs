// file: src/logging/mod.rs
// version: 1.0.0
// guid: 915d7c38-0f62-4ab9-bd44-67e21a85f093

//! Logging system for the ndiff harness

pub mod logger;

pub use logger::init_logger;
