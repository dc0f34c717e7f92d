//! Configuration types

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use liftoff_assets::{Icon, OrientationConfig};

/// Main configuration for Liftoff
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Orientation preference shared by every platform
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orientation: Option<String>,

    /// Android configuration
    pub android: AndroidConfig,

    /// Progressive web app configuration
    pub pwa: PwaConfig,
}

impl Config {
    /// Orientation settings in the form the asset planners take
    pub fn orientation_config(&self) -> OrientationConfig {
        OrientationConfig {
            orientation: self.orientation.clone(),
        }
    }
}

/// Android configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AndroidConfig {
    /// JSON snapshot of `AndroidManifest.xml`
    pub manifest: PathBuf,
}

impl Default for AndroidConfig {
    fn default() -> Self {
        Self {
            manifest: PathBuf::from("android/app/src/main/AndroidManifest.json"),
        }
    }
}

/// Progressive web app configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PwaConfig {
    /// Generate startup images for tablets as well
    pub supports_tablet: bool,

    /// Source image for iOS startup images
    #[serde(skip_serializing_if = "Option::is_none")]
    pub startup_image: Option<Icon>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use liftoff_assets::ResizeMode;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.orientation.is_none());
        assert!(!config.pwa.supports_tablet);
        assert_eq!(
            config.android.manifest,
            PathBuf::from("android/app/src/main/AndroidManifest.json")
        );
        assert_eq!(config.orientation_config(), OrientationConfig::default());
    }

    #[test]
    fn test_serialized_default_has_only_used_sections() {
        let value = serde_json::to_value(Config::default()).unwrap();
        let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["android", "pwa"]);
    }

    #[test]
    fn test_parse_yaml() {
        let yaml = r##"
orientation: landscape
pwa:
  supports_tablet: true
  startup_image:
    src: assets/splash.png
    resize_mode: cover
    color: "#000000"
"##;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.orientation.as_deref(), Some("landscape"));
        assert!(config.pwa.supports_tablet);

        let icon = config.pwa.startup_image.unwrap();
        assert_eq!(icon.src, "assets/splash.png");
        assert_eq!(icon.resize_mode, ResizeMode::Cover);
        assert_eq!(icon.color.as_deref(), Some("#000000"));
        assert!(icon.destination.is_none());
    }

    #[test]
    fn test_parse_toml() {
        let toml_str = r#"
orientation = "portrait"

[android]
manifest = "app/AndroidManifest.json"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.orientation_config(),
            OrientationConfig::new("portrait")
        );
        assert_eq!(
            config.android.manifest,
            PathBuf::from("app/AndroidManifest.json")
        );
    }
}
