//! Orientation command - show how an orientation resolves per platform

use clap::Args;
use console::style;
use serde::Serialize;
use tracing::info;

use liftoff_assets::{
    assemble_media_query, prepare_orientation, to_android_attribute, DeviceCatalog, Orientation,
    SplashGenerator,
};
use liftoff_core::load_config_or_default;

use crate::cli::{output, Cli, OutputFormat};

/// Show how an orientation resolves on each platform
#[derive(Debug, Args)]
pub struct OrientationCommand {
    /// Orientation to resolve (defaults to the configured one)
    pub orientation: Option<String>,

    /// Device used for the sample media queries
    #[arg(long, default_value = "iPhone 8")]
    pub device: String,
}

/// Resolution of one orientation
#[derive(Debug, Serialize)]
struct OrientationReport {
    orientation: String,
    landscape: bool,
    portrait: bool,
    /// Android attribute value, when one is defined
    android: Option<String>,
    /// Why there is no Android value
    android_error: Option<String>,
    /// iOS startup image media queries for the sample device
    media_queries: Vec<String>,
}

impl OrientationReport {
    fn build(orientation: Orientation, device: &str) -> anyhow::Result<Self> {
        let catalog = DeviceCatalog::default();
        let device = catalog
            .find(device)
            .ok_or_else(|| anyhow::anyhow!("Unknown device: {}", device))?;

        let (android, android_error) = match to_android_attribute(prepare_orientation(
            orientation.as_str(),
        )) {
            Ok(value) => (Some(value.to_string()), None),
            Err(e) => (None, Some(e.to_string())),
        };

        let generator = SplashGenerator::default();
        let media_queries = generator
            .devices_for(orientation, true)
            .into_iter()
            .find(|d| d.device == device)
            .map(|d| d.orientations)
            .unwrap_or_default()
            .into_iter()
            .map(|o| assemble_media_query(device.width, device.height, device.scale, o.as_str()))
            .collect();

        Ok(Self {
            orientation: orientation.to_string(),
            landscape: orientation.is_landscape(),
            portrait: orientation.is_portrait(),
            android,
            android_error,
            media_queries,
        })
    }
}

impl OrientationCommand {
    /// Execute the orientation command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        let value = match self.orientation {
            Some(ref value) => value.clone(),
            None => {
                let cwd = std::env::current_dir()?;
                let (config, _) = load_config_or_default(&cwd);
                config
                    .orientation
                    .ok_or_else(|| anyhow::anyhow!("No orientation given and none configured"))?
            }
        };
        info!(orientation = %value, device = %self.device, "executing orientation command");

        let orientation: Orientation = value.parse()?;
        let report = OrientationReport::build(orientation, &self.device)?;

        if cli.format == OutputFormat::Json {
            println!("{}", serde_json::to_string_pretty(&report)?);
            return Ok(());
        }
        if cli.quiet {
            return Ok(());
        }

        println!(
            "{} {}",
            output::header("Orientation"),
            output::orientation_style().apply_to(&report.orientation)
        );
        println!("{}", output::key_value("landscape", &output::flag(report.landscape)));
        println!("{}", output::key_value("portrait", &output::flag(report.portrait)));
        match (&report.android, &report.android_error) {
            (Some(value), _) => println!("{}", output::key_value("android", value)),
            (None, Some(reason)) => println!(
                "{}",
                output::key_value("android", &style(reason).yellow().to_string())
            ),
            (None, None) => {}
        }
        println!("{}", output::key_value("ios", "not lockable; both orientations generated"));

        if !report.media_queries.is_empty() {
            println!();
            println!("{} ({})", output::header("Media queries"), self.device);
            for query in &report.media_queries {
                println!("  {}", query);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_for_landscape() {
        let report = OrientationReport::build(Orientation::Landscape, "iPhone 8").unwrap();
        assert!(report.landscape && !report.portrait);
        assert_eq!(report.android.as_deref(), Some("landscape"));
        assert_eq!(
            report.media_queries,
            vec![
                "screen and (device-width: 375px) and (device-height: 667px) \
                 and (-webkit-device-pixel-ratio: 2) and (orientation: landscape)"
            ]
        );
    }

    #[test]
    fn test_report_for_any_has_no_android_value() {
        let report = OrientationReport::build(Orientation::Any, "iPhone 6").unwrap();
        assert!(report.android.is_none());
        assert!(report.android_error.is_some());
        assert_eq!(report.media_queries.len(), 2);
    }

    #[test]
    fn test_report_for_default() {
        let report = OrientationReport::build(Orientation::Default, "iPhone SE").unwrap();
        assert_eq!(report.android.as_deref(), Some("unspecified"));
        assert!(report.media_queries.is_empty());
    }

    #[test]
    fn test_unknown_device() {
        assert!(OrientationReport::build(Orientation::Portrait, "Pixel 9").is_err());
    }
}
