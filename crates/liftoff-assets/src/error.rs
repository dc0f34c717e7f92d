//! Error types for orientation resolution and asset planning

use thiserror::Error;

/// Result type for asset operations
pub type Result<T> = std::result::Result<T, AssetError>;

/// Asset planning errors
///
/// Every variant is deterministic given its input: nothing here is retried.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssetError {
    /// Orientation string outside the known vocabulary
    #[error("{orientation} is not a valid orientation")]
    Validation {
        orientation: String,
    },

    /// Orientation is known but has no Android `screenOrientation` equivalent
    #[error("Orientation '{orientation}' has no Android screenOrientation equivalent")]
    Mapping {
        orientation: String,
    },

    /// Resize mode outside `contain`, `cover`, `fill`, `inside`, `outside`
    #[error("Unknown resize mode: {value}")]
    ResizeMode {
        value: String,
    },

    /// Manifest does not contain the expected activity node
    #[error("Manifest has no activity named '{activity}'")]
    Structural {
        activity: String,
    },
}

impl AssetError {
    /// Create a validation error
    pub fn validation(orientation: impl Into<String>) -> Self {
        Self::Validation {
            orientation: orientation.into(),
        }
    }

    /// Create a mapping error
    pub fn mapping(orientation: impl Into<String>) -> Self {
        Self::Mapping {
            orientation: orientation.into(),
        }
    }

    /// Create a resize mode error
    pub fn resize_mode(value: impl Into<String>) -> Self {
        Self::ResizeMode {
            value: value.into(),
        }
    }

    /// Create a structural error for a missing activity
    pub fn structural(activity: impl Into<String>) -> Self {
        Self::Structural {
            activity: activity.into(),
        }
    }

    /// Check if this is a retryable error
    pub fn is_retryable(&self) -> bool {
        false
    }

    /// Get exit code for CLI
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Validation { .. } => 5,
            Self::Mapping { .. } => 5,
            Self::ResizeMode { .. } => 5,
            Self::Structural { .. } => 6,
        }
    }
}
