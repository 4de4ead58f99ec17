// file: src/paths.rs
// version: 1.1.0
// guid: b5e82d19-6c40-47fa-90d3-2f7a1e64c805

//! Resolution of the comparison tool binary and of input file references

use crate::config::HarnessConfig;
use crate::error::{HarnessError, Result};
use std::path::{Component, Path, PathBuf};
use tracing::debug;

/// Trait for resolving the comparison tool and input files to absolute paths
pub trait PathResolver {
    /// Absolute path of the comparison tool executable
    fn tool_path(&self) -> Result<PathBuf>;

    /// Absolute form of a file reference
    ///
    /// The referenced file is not required to exist; resolution is purely
    /// lexical.
    fn to_absolute(&self, path: &Path) -> Result<PathBuf>;
}

/// Resolver backed by the local system: configured override first, PATH
/// search second
pub struct SystemPathResolver {
    tool_override: Option<PathBuf>,
}

impl SystemPathResolver {
    /// Name of the comparison tool searched on PATH
    pub const TOOL_NAME: &'static str = "ndiff";

    /// Create a resolver that searches PATH for the tool
    pub fn new() -> Self {
        Self {
            tool_override: None,
        }
    }

    /// Create a resolver with an explicit tool location
    pub fn with_tool_override<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            tool_override: Some(path.into()),
        }
    }

    /// Create a resolver honoring the configured tool override, if any
    pub fn from_config(config: &HarnessConfig) -> Self {
        match config.tools.ndiff_path {
            Some(ref path) => Self::with_tool_override(path),
            None => Self::new(),
        }
    }
}

impl PathResolver for SystemPathResolver {
    fn tool_path(&self) -> Result<PathBuf> {
        if let Some(ref override_path) = self.tool_override {
            let override_str = override_path.to_string_lossy();
            let expanded =
                shellexpand::full(&override_str).map_err(|e| {
                    HarnessError::path_resolution(format!(
                        "Failed to expand tool path {}: {}",
                        override_path.display(),
                        e
                    ))
                })?;
            let expanded = PathBuf::from(expanded.as_ref());
            debug!("Using configured ndiff path: {}", expanded.display());
            return self.to_absolute(&expanded);
        }

        which::which(Self::TOOL_NAME).map_err(|e| {
            HarnessError::path_resolution(format!(
                "Tool '{}' not found in PATH: {}",
                Self::TOOL_NAME,
                e
            ))
        })
    }

    fn to_absolute(&self, path: &Path) -> Result<PathBuf> {
        let joined = if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir()
                .map_err(|e| {
                    HarnessError::path_resolution(format!(
                        "Failed to determine working directory: {}",
                        e
                    ))
                })?
                .join(path)
        };

        Ok(normalize(&joined))
    }
}

impl Default for SystemPathResolver {
    fn default() -> Self {
        Self::new()
    }
}

/// Lexically remove `.` and `..` components without touching the filesystem
///
/// A `..` above the root is dropped, matching the platform abspath behavior.
fn normalize(path: &Path) -> PathBuf {
    let mut result = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                result.pop();
            }
            other => result.push(other.as_os_str()),
        }
    }
    result
}
