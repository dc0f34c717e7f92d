//! Exit codes for the CLI

use liftoff_assets::AssetError;
use liftoff_core::{ConfigError, LiftoffError};

/// Success
#[allow(dead_code)]
pub const SUCCESS: i32 = 0;

/// General error
pub const ERROR: i32 = 1;

/// Configuration error
pub const CONFIG_ERROR: i32 = 2;

/// Validation error (bad orientation or resize mode, or no Android mapping)
pub const VALIDATION_ERROR: i32 = 5;

/// Manifest is missing the node an edit targets
pub const STRUCTURAL_ERROR: i32 = 6;

/// Pick the exit code for an error bubbled up to `main`
pub fn for_error(err: &anyhow::Error) -> i32 {
    for cause in err.chain() {
        if let Some(asset) = cause.downcast_ref::<AssetError>() {
            return match asset {
                AssetError::Validation { .. }
                | AssetError::Mapping { .. }
                | AssetError::ResizeMode { .. } => VALIDATION_ERROR,
                AssetError::Structural { .. } => STRUCTURAL_ERROR,
            };
        }
        if cause.downcast_ref::<ConfigError>().is_some() {
            return CONFIG_ERROR;
        }
        if let Some(liftoff) = cause.downcast_ref::<LiftoffError>() {
            return liftoff.exit_code();
        }
    }
    ERROR
}
