// file: src/config.rs
// version: 1.1.0
// guid: c92f5b04-7e13-48da-a6c1-84b0d3e9f257

use crate::comparison::ndiff::{CompareOptions, DEFAULT_A_TOL, DEFAULT_R_TOL};
use crate::error::{HarnessError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

/// Harness configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HarnessConfig {
    pub tools: ToolsConfig,
    pub tolerances: ToleranceConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolsConfig {
    /// Explicit path to the ndiff binary; `None` means search PATH
    pub ndiff_path: Option<PathBuf>,
}

/// Harness-wide default tolerances, overridable per invocation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ToleranceConfig {
    pub r_tol: String,
    pub a_tol: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for ToleranceConfig {
    fn default() -> Self {
        Self {
            r_tol: DEFAULT_R_TOL.to_string(),
            a_tol: DEFAULT_A_TOL.to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl HarnessConfig {
    /// Load configuration from multiple sources
    ///
    /// Order: built-in defaults, then the user config file, then the project
    /// config file, then environment variables. Later sources win.
    pub async fn load() -> Result<Self> {
        let mut config = Self::default();

        if let Some(user_config) = Self::user_config_path() {
            if user_config.exists() {
                info!("Loading user configuration from: {}", user_config.display());
                config = Self::load_from_file(&user_config).await?;
            }
        }

        let project_config = Path::new(".ndiff-harness.toml");
        if project_config.exists() {
            info!(
                "Loading project configuration from: {}",
                project_config.display()
            );
            config = Self::load_from_file(project_config).await?;
        }

        config = Self::apply_env_overrides(config);

        debug!("Final configuration: {:#?}", config);
        Ok(config)
    }

    /// Get the user configuration file path
    fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("ndiff-harness").join("config.toml"))
    }

    /// Load configuration from a TOML file
    pub async fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).await.map_err(|e| {
            HarnessError::config(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        toml::from_str(&content).map_err(|e| {
            HarnessError::config(format!(
                "Failed to parse config file {}: {}",
                path.display(),
                e
            ))
        })
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut config: Self) -> Self {
        if let Ok(path) = std::env::var("NDIFF_HARNESS_NDIFF") {
            config.tools.ndiff_path = Some(PathBuf::from(path));
        }

        if let Ok(r_tol) = std::env::var("NDIFF_HARNESS_R_TOL") {
            config.tolerances.r_tol = r_tol;
        }

        if let Ok(a_tol) = std::env::var("NDIFF_HARNESS_A_TOL") {
            config.tolerances.a_tol = a_tol;
        }

        if let Ok(level) = std::env::var("NDIFF_HARNESS_LOG_LEVEL") {
            config.logging.level = level;
        }

        config
    }

    /// Per-invocation options carrying the harness-wide tolerance defaults
    pub fn compare_options(&self) -> CompareOptions {
        CompareOptions {
            r_tol: Some(self.tolerances.r_tol.clone()),
            a_tol: Some(self.tolerances.a_tol.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        // Arrange & Act
        let config = HarnessConfig::default();

        // Assert
        assert_eq!(config.tools.ndiff_path, None);
        assert_eq!(config.tolerances.r_tol, "0.001");
        assert_eq!(config.tolerances.a_tol, "0.000001");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        // Arrange
        let source = r#"
[tolerances]
r_tol = "0.05"
"#;

        // Act
        let config: HarnessConfig = toml::from_str(source).unwrap();

        // Assert
        assert_eq!(config.tolerances.r_tol, "0.05");
        assert_eq!(config.tolerances.a_tol, "0.000001");
        assert_eq!(config.tools.ndiff_path, None);
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        // Arrange
        let source = r#"
[tolerances]
r_tol = "0.05"
legacy_option = true

[reporting]
format = "junit"
"#;

        // Act
        let config: HarnessConfig = toml::from_str(source).unwrap();

        // Assert
        assert_eq!(config.tolerances.r_tol, "0.05");
    }

    #[test]
    fn test_compare_options_carry_configured_defaults() {
        // Arrange
        let mut config = HarnessConfig::default();
        config.tolerances.r_tol = "0.02".to_string();

        // Act
        let options = config.compare_options();

        // Assert
        assert_eq!(options.effective_r_tol(), "0.02");
        assert_eq!(options.effective_a_tol(), "0.000001");
    }

    #[tokio::test]
    async fn test_load_from_file() {
        // Arrange
        let temp_dir = tempfile::TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let content = r#"
[tools]
ndiff_path = "/opt/tools/ndiff"

[tolerances]
r_tol = "0.01"
a_tol = "0.0001"
"#;
        tokio::fs::write(&config_path, content).await.unwrap();

        // Act
        let config = HarnessConfig::load_from_file(&config_path).await.unwrap();

        // Assert
        assert_eq!(
            config.tools.ndiff_path,
            Some(PathBuf::from("/opt/tools/ndiff"))
        );
        assert_eq!(config.tolerances.r_tol, "0.01");
        assert_eq!(config.tolerances.a_tol, "0.0001");
    }

    #[tokio::test]
    async fn test_load_from_file_rejects_invalid_toml() {
        // Arrange
        let temp_dir = tempfile::TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        tokio::fs::write(&config_path, "tolerances = [broken")
            .await
            .unwrap();

        // Act
        let result = HarnessConfig::load_from_file(&config_path).await;

        // Assert
        assert!(result.is_err());
        match result.unwrap_err() {
            HarnessError::Config(_) => {}
            other => panic!("Expected Config, got: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_load_from_missing_file() {
        // Arrange
        let temp_dir = tempfile::TempDir::new().unwrap();
        let config_path = temp_dir.path().join("absent.toml");

        // Act
        let result = HarnessConfig::load_from_file(&config_path).await;

        // Assert
        assert!(result.is_err());
    }
}
