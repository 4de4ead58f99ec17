// file: src/comparison/ndiff.rs
// version: 1.2.0
// guid: e4b7f920-1a85-4c6d-b3f8-09d2c571ae46

//! Invocation builder for the external ndiff comparison tool

use crate::error::Result;
use crate::paths::PathResolver;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Relative tolerance passed to `-r` when no override is given
pub const DEFAULT_R_TOL: &str = "0.001";

/// Absolute tolerance passed to `-a` when no override is given
pub const DEFAULT_A_TOL: &str = "0.000001";

/// Tolerance overrides for a single comparison
///
/// Values are opaque strings handed to the tool unchanged; the tool owns
/// their grammar. Unrecognized keys in a deserialized source are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompareOptions {
    /// Relative tolerance; `None` falls back to [`DEFAULT_R_TOL`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r_tol: Option<String>,

    /// Absolute tolerance; `None` falls back to [`DEFAULT_A_TOL`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub a_tol: Option<String>,
}

impl CompareOptions {
    /// Relative tolerance token to emit
    pub fn effective_r_tol(&self) -> &str {
        self.r_tol.as_deref().unwrap_or(DEFAULT_R_TOL)
    }

    /// Absolute tolerance token to emit
    pub fn effective_a_tol(&self) -> &str {
        self.a_tol.as_deref().unwrap_or(DEFAULT_A_TOL)
    }
}

/// Builds invocations of the external ndiff tool
pub struct NdiffCompare;

impl NdiffCompare {
    /// Assemble the argument vector comparing `file1` against `file2`.
    ///
    /// The token order is dictated by the tool's argument grammar and is
    /// preserved exactly: tool path, `-r`, relative tolerance, `-a`,
    /// absolute tolerance, then both files as absolute paths. The first
    /// element is the executable itself, suitable for direct use as a
    /// child-process argument vector.
    ///
    /// No I/O happens here; path resolution is delegated to the resolver
    /// and its failures propagate unchanged.
    pub fn command<R, P>(
        resolver: &R,
        file1: P,
        file2: P,
        options: &CompareOptions,
    ) -> Result<Vec<String>>
    where
        R: PathResolver,
        P: AsRef<Path>,
    {
        let tool = resolver.tool_path()?;
        let abs1 = resolver.to_absolute(file1.as_ref())?;
        let abs2 = resolver.to_absolute(file2.as_ref())?;

        Ok(vec![
            tool.to_string_lossy().into_owned(),
            "-r".to_string(),
            options.effective_r_tol().to_string(),
            "-a".to_string(),
            options.effective_a_tol().to_string(),
            abs1.to_string_lossy().into_owned(),
            abs2.to_string_lossy().into_owned(),
        ])
    }
}
