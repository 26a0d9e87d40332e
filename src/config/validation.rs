//! Configuration validation with helpful error messages

use std::path::Path;

use anyhow::Result;

use super::LauncherConfig;
use crate::error::{hints, LaunchError};

/// Validate the launcher configuration
pub fn validate_config(config: &LauncherConfig) -> Result<()> {
    validate_path("source_dir", &config.source_dir)?;
    validate_path("build_dir", &config.build_dir)?;
    validate_path("executable", &config.executable)?;
    validate_path("cmake", &config.cmake)?;

    if config.jobs == Some(0) {
        return Err(LaunchError::config_error_with_hint(
            "jobs must be at least 1",
            hints::invalid_config(),
        )
        .into());
    }

    if let Some(generator) = &config.generator {
        if generator.trim().is_empty() {
            return Err(LaunchError::config_error_with_hint(
                "generator must not be empty",
                hints::invalid_config(),
            )
            .into());
        }
    }

    Ok(())
}

fn validate_path(field: &str, path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() {
        return Err(LaunchError::config_error_with_hint(
            format!("{} must not be empty", field),
            hints::invalid_config(),
        )
        .into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&LauncherConfig::default()).is_ok());
    }

    #[test]
    fn test_empty_paths_rejected() {
        let config = LauncherConfig {
            executable: PathBuf::new(),
            ..LauncherConfig::default()
        };
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("executable must not be empty"));
    }

    #[test]
    fn test_zero_jobs_rejected() {
        let config = LauncherConfig {
            jobs: Some(0),
            ..LauncherConfig::default()
        };
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_blank_generator_rejected() {
        let config = LauncherConfig {
            generator: Some("  ".to_string()),
            ..LauncherConfig::default()
        };
        assert!(validate_config(&config).is_err());
    }
}
