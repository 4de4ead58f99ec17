// file: src/comparison/mod.rs
// version: 1.0.0
// guid: 7a0c3e52-94d1-4b8f-8e27-c6f45a90d113

//! Comparison command builders for regression test outputs

pub mod ndiff;

pub use ndiff::{CompareOptions, NdiffCompare, DEFAULT_A_TOL, DEFAULT_R_TOL};
