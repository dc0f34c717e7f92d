//! Configuration validation

use tracing::debug;

use liftoff_assets::{is_valid, Orientation};

use crate::error::{ConfigError, Result};

use super::types::Config;

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    debug!("validating configuration");
    validate_orientation(config)?;
    validate_pwa(config)?;
    debug!("configuration validation passed");
    Ok(())
}

fn validate_orientation(config: &Config) -> Result<()> {
    if let Some(ref orientation) = config.orientation {
        if !is_valid(orientation) {
            let valid: Vec<&str> = Orientation::ALL.iter().map(|o| o.as_str()).collect();
            return Err(ConfigError::InvalidValue {
                field: "orientation".to_string(),
                message: format!("must be one of: {}", valid.join(", ")),
            }
            .into());
        }
    }

    Ok(())
}

fn validate_pwa(config: &Config) -> Result<()> {
    if let Some(ref icon) = config.pwa.startup_image {
        if icon.src.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "pwa.startup_image.src".to_string(),
                message: "source image cannot be empty".to_string(),
            }
            .into());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LiftoffError;
    use liftoff_assets::Icon;

    #[test]
    fn test_validate_default_config() {
        let config = Config::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_invalid_orientation() {
        let config = Config {
            orientation: Some("upside-down".to_string()),
            ..Default::default()
        };
        let err = validate_config(&config).unwrap_err();
        match err {
            LiftoffError::Config(ConfigError::InvalidValue { field, message }) => {
                assert_eq!(field, "orientation");
                assert!(message.contains("landscape-primary"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_default_orientation_is_accepted() {
        let config = Config {
            orientation: Some("default".to_string()),
            ..Default::default()
        };
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_empty_startup_image_src() {
        let mut config = Config::default();
        config.pwa.startup_image = Some(Icon::new("  "));
        assert!(validate_config(&config).is_err());
    }
}
