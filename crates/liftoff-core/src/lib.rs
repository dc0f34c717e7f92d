//! Liftoff Core - Configuration and error handling
//!
//! This crate loads and validates the project configuration that drives the
//! orientation and splash asset planners in `liftoff-assets`.

pub mod config;
pub mod error;

pub use config::{load_config, load_config_from_dir, load_config_or_default, Config};
pub use error::{ConfigError, LiftoffError, Result};
