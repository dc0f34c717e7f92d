//! Error types for Liftoff

use std::path::PathBuf;
use thiserror::Error;

use liftoff_assets::AssetError;

/// Result type alias using LiftoffError
pub type Result<T> = std::result::Result<T, LiftoffError>;

/// Main error type for Liftoff operations
#[derive(Debug, Error)]
pub enum LiftoffError {
    /// Configuration-related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Orientation, manifest, or splash planning errors
    #[error(transparent)]
    Asset(#[from] AssetError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors
    #[error("{0}")]
    Other(String),
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found at {0}")]
    NotFound(PathBuf),

    /// Invalid configuration value
    #[error("Invalid configuration: {field} - {message}")]
    InvalidValue { field: String, message: String },

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// IO error
    #[error("IO error reading config: {0}")]
    Io(#[from] std::io::Error),
}

impl LiftoffError {
    /// Exit code the CLI should use for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) => 2,
            Self::Asset(e) => e.exit_code(),
            _ => 1,
        }
    }
}
