//! Default configuration values

use super::types::Config;

/// Default configuration file name (YAML)
pub const DEFAULT_CONFIG_YAML: &str = "liftoff.yaml";

/// Default configuration file name (TOML)
pub const DEFAULT_CONFIG_TOML: &str = "liftoff.toml";

/// Alternative configuration file name
pub const ALT_CONFIG_FILE: &str = ".liftoff.yaml";

/// Get list of config file names to search for
pub fn config_file_names() -> Vec<&'static str> {
    vec![
        DEFAULT_CONFIG_YAML,
        DEFAULT_CONFIG_TOML,
        ALT_CONFIG_FILE,
        ".liftoff.toml",
    ]
}

/// Generate default configuration YAML
pub fn default_config_yaml() -> String {
    let config = Config::default();
    serde_yaml::to_string(&config).unwrap_or_else(|_| DEFAULT_CONFIG_TEMPLATE.to_string())
}

/// Default configuration template
pub const DEFAULT_CONFIG_TEMPLATE: &str = r##"# Liftoff Configuration

# One of: any, natural, landscape, landscape-primary, landscape-secondary,
# portrait, portrait-primary, portrait-secondary, omit, default
orientation: portrait

android:
  manifest: android/app/src/main/AndroidManifest.json

pwa:
  supports_tablet: false
  startup_image:
    src: assets/splash.png
    resize_mode: contain
    color: "#ffffff"
    destination: pwa/apple/splash
"##;
