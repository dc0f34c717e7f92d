//! Init command

use std::path::{Path, PathBuf};

use clap::Args;
use console::style;
use dialoguer::{Confirm, Select};
use tracing::info;

use liftoff_assets::Orientation;
use liftoff_core::config::{
    defaults::{DEFAULT_CONFIG_TEMPLATE, DEFAULT_CONFIG_YAML},
    validate_config, Config,
};

use crate::cli::Cli;

/// Initialize a new Liftoff configuration
#[derive(Debug, Args)]
pub struct InitCommand {
    /// Force overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,

    /// Use defaults without prompting
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Output file path
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl InitCommand {
    /// Execute the init command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(force = self.force, yes = self.yes, "executing init command");
        let cwd = std::env::current_dir()?;
        let config_path = self
            .output
            .clone()
            .unwrap_or_else(|| cwd.join(DEFAULT_CONFIG_YAML));

        // Check if config already exists
        if config_path.exists() && !self.force {
            if self.yes {
                anyhow::bail!(
                    "Configuration file already exists at {}. Use --force to overwrite.",
                    config_path.display()
                );
            }

            let overwrite = Confirm::new()
                .with_prompt(format!(
                    "Configuration file already exists at {}. Overwrite?",
                    config_path.display()
                ))
                .default(false)
                .interact()?;

            if !overwrite {
                println!("{}", style("Aborted.").yellow());
                return Ok(());
            }
        }

        let (format, orientation) = if self.yes {
            ("yaml", None)
        } else {
            let formats = vec!["yaml", "toml"];
            let selection = Select::new()
                .with_prompt("Configuration format")
                .items(&formats)
                .default(0)
                .interact()?;

            let choices: Vec<&str> = Orientation::ALL.iter().map(|o| o.as_str()).collect();
            let default_index = choices.iter().position(|o| *o == "portrait").unwrap_or(0);
            let orientation = Select::new()
                .with_prompt("Orientation")
                .items(&choices)
                .default(default_index)
                .interact()?;

            (formats[selection], Some(choices[orientation]))
        };

        let config_path = if format == "toml" && config_path.extension().is_some_and(|e| e == "yaml") {
            config_path.with_extension("toml")
        } else {
            config_path
        };

        let content = render_config(format, orientation)?;
        std::fs::write(&config_path, &content)?;

        if !cli.quiet {
            println!(
                "{} Created configuration at {}",
                style("✓").green().bold(),
                style(config_path.display()).cyan()
            );
            println!();
            println!("Next steps:");
            println!("  1. Edit {} to point at your splash image", display_name(&config_path));
            println!("  2. Run {} to preview startup images", style("liftoff splash").cyan());
            println!(
                "  3. Run {} to lock the Android orientation",
                style("liftoff manifest set").cyan()
            );
        }

        Ok(())
    }
}

/// Render the default template in `format`, optionally overriding the orientation
fn render_config(format: &str, orientation: Option<&str>) -> anyhow::Result<String> {
    if format != "toml" && orientation.is_none() {
        return Ok(DEFAULT_CONFIG_TEMPLATE.to_string());
    }

    let mut config: Config = serde_yaml::from_str(DEFAULT_CONFIG_TEMPLATE)?;
    if let Some(orientation) = orientation {
        config.orientation = Some(orientation.to_string());
    }
    validate_config(&config)?;

    Ok(if format == "toml" {
        toml::to_string_pretty(&config)?
    } else {
        serde_yaml::to_string(&config)?
    })
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_default_yaml_is_template() {
        assert_eq!(render_config("yaml", None).unwrap(), DEFAULT_CONFIG_TEMPLATE);
    }

    #[test]
    fn test_render_toml_with_orientation() {
        let content = render_config("toml", Some("landscape")).unwrap();
        let config: Config = toml::from_str(&content).unwrap();
        assert_eq!(config.orientation.as_deref(), Some("landscape"));
        assert_eq!(
            config.pwa.startup_image.map(|i| i.src),
            Some("assets/splash.png".to_string())
        );
    }

    #[test]
    fn test_render_yaml_with_orientation() {
        let content = render_config("yaml", Some("default")).unwrap();
        let config: Config = serde_yaml::from_str(&content).unwrap();
        assert_eq!(config.orientation.as_deref(), Some("default"));
    }
}
