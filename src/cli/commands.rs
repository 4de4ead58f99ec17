// file: src/cli/commands.rs
// version: 1.2.0
// guid: 0b5e8d31-6f9a-4c27-bb08-3a71d4e62c90

//! Command implementations for the CLI

use crate::{
    comparison::ndiff::NdiffCompare,
    config::HarnessConfig,
    error::HarnessError,
    paths::{PathResolver, SystemPathResolver},
    Result,
};
use tracing::{error, info};

/// Assemble and print the comparison invocation without running it
pub async fn print_command_command(
    config: &HarnessConfig,
    file1: &str,
    file2: &str,
    r_tol: Option<String>,
    a_tol: Option<String>,
    json_output: bool,
) -> Result<()> {
    let resolver = SystemPathResolver::from_config(config);

    let mut options = config.compare_options();
    if let Some(r_tol) = r_tol {
        options.r_tol = Some(r_tol);
    }
    if let Some(a_tol) = a_tol {
        options.a_tol = Some(a_tol);
    }

    let command = NdiffCompare::command(&resolver, file1, file2, &options)?;
    info!("Assembled ndiff invocation for {} vs {}", file1, file2);

    if json_output {
        println!("{}", serde_json::to_string_pretty(&command)?);
    } else {
        println!("{}", shell_join(&command));
    }

    Ok(())
}

/// Report whether the comparison tool is resolvable on this system
pub async fn check_prereqs_command(config: &HarnessConfig) -> Result<()> {
    let resolver = SystemPathResolver::from_config(config);

    let path = resolver.tool_path()?;
    if !path.exists() {
        error!("Resolved ndiff path does not exist: {}", path.display());
        return Err(HarnessError::path_resolution(format!(
            "Resolved ndiff path does not exist: {}",
            path.display()
        )));
    }

    info!("ndiff resolved successfully");
    println!("ndiff: {}", path.display());
    Ok(())
}

/// Print the effective merged configuration
pub async fn show_config_command(config: &HarnessConfig, json_output: bool) -> Result<()> {
    if json_output {
        println!("{}", serde_json::to_string_pretty(config)?);
    } else {
        let rendered = toml::to_string_pretty(config).map_err(|e| {
            HarnessError::config(format!("Failed to render configuration: {}", e))
        })?;
        print!("{}", rendered);
    }

    Ok(())
}

/// Join an argument vector into a copy-pasteable shell line
fn shell_join(command: &[String]) -> String {
    command
        .iter()
        .map(|token| shell_quote(token))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Single-quote a token unless it is safe to paste bare
fn shell_quote(token: &str) -> String {
    let safe = !token.is_empty()
        && token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '/' | '-' | '+' | '='));

    if safe {
        token.to_string()
    } else {
        format!("'{}'", token.replace('\'', r"'\''"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_join_plain_tokens() {
        // Arrange
        let command = vec![
            "/usr/bin/ndiff".to_string(),
            "-r".to_string(),
            "0.001".to_string(),
        ];

        // Act
        let line = shell_join(&command);

        // Assert
        assert_eq!(line, "/usr/bin/ndiff -r 0.001");
    }

    #[test]
    fn test_shell_join_quotes_spaces() {
        // Arrange
        let command = vec![
            "/usr/bin/ndiff".to_string(),
            "/data/run dir/flow.out".to_string(),
        ];

        // Act
        let line = shell_join(&command);

        // Assert
        assert_eq!(line, "/usr/bin/ndiff '/data/run dir/flow.out'");
    }

    #[test]
    fn test_shell_quote_escapes_single_quotes() {
        // Act
        let quoted = shell_quote("it's.out");

        // Assert
        assert_eq!(quoted, r"'it'\''s.out'");
    }

    #[test]
    fn test_shell_quote_empty_token() {
        // Act
        let quoted = shell_quote("");

        // Assert
        assert_eq!(quoted, "''");
    }

    #[tokio::test]
    async fn test_print_command_with_configured_tool() {
        // Arrange
        let mut config = HarnessConfig::default();
        config.tools.ndiff_path = Some("/opt/tools/ndiff".into());

        // Act
        let result = print_command_command(
            &config,
            "a.out",
            "b.out",
            Some("0.01".to_string()),
            None,
            true,
        )
        .await;

        // Assert
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_check_prereqs_rejects_missing_binary() {
        // Arrange
        let mut config = HarnessConfig::default();
        config.tools.ndiff_path = Some("/nonexistent/path/to/ndiff".into());

        // Act
        let result = check_prereqs_command(&config).await;

        // Assert
        assert!(result.is_err());
        match result.unwrap_err() {
            HarnessError::PathResolution(_) => {}
            other => panic!("Expected PathResolution, got: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_show_config_renders() {
        // Arrange
        let config = HarnessConfig::default();

        // Act
        let toml_result = show_config_command(&config, false).await;
        let json_result = show_config_command(&config, true).await;

        // Assert
        assert!(toml_result.is_ok());
        assert!(json_result.is_ok());
    }
}
