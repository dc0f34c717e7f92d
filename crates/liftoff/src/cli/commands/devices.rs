//! Devices command - list the splash device catalog

use clap::Args;
use console::style;
use tracing::info;

use liftoff_assets::{assemble_media_query, Device, DeviceCatalog};
use liftoff_core::{load_config_or_default, Config};

use crate::cli::{output, Cli, OutputFormat};

/// List the device catalog
#[derive(Debug, Args)]
pub struct DevicesCommand {
    /// Include tablets (defaults to pwa.supports_tablet)
    #[arg(long)]
    pub supports_tablet: bool,
}

impl DevicesCommand {
    /// Execute the devices command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        let cwd = std::env::current_dir()?;
        let (config, _) = load_config_or_default(&cwd);
        let supports_tablet = self.supports_tablet(&config);
        info!(supports_tablet, "executing devices command");

        let catalog = DeviceCatalog::default();
        let devices = catalog.filter_by_tablet_support(supports_tablet);

        if cli.format == OutputFormat::Json {
            println!("{}", serde_json::to_string_pretty(&devices)?);
            return Ok(());
        }
        if cli.quiet {
            return Ok(());
        }

        println!();
        println!("{}", style("Device Catalog").bold());
        println!();
        for device in &devices {
            println!("  {}", describe(device));
            if device.names.len() > 1 {
                println!("    {}", style(device.names[1..].join(", ")).dim());
            }
            if cli.verbose {
                println!(
                    "    {}",
                    style(assemble_media_query(
                        device.width,
                        device.height,
                        device.scale,
                        "portrait"
                    ))
                    .dim()
                );
            }
        }
        println!();
        output::info(&format!(
            "{} of {} devices{}",
            devices.len(),
            catalog.len(),
            if supports_tablet {
                ""
            } else {
                " (tablets excluded, pass --supports-tablet to include them)"
            }
        ));

        Ok(())
    }

    /// The flag, falling back to the configured setting
    fn supports_tablet(&self, config: &Config) -> bool {
        self.supports_tablet || config.pwa.supports_tablet
    }
}

fn describe(device: &Device) -> String {
    format!(
        "{:<16} {}x{} @{}x{}",
        device.name(),
        device.width,
        device.height,
        device.scale,
        if device.is_tablet { " tablet" } else { "" }
    )
}
