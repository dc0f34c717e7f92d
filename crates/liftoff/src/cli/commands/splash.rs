//! Splash command - plan iOS PWA startup images

use clap::Args;
use console::style;
use tracing::info;

use liftoff_assets::{Icon, ResizeMode, SplashGenerator, StartupImageDescriptor};
use liftoff_core::{load_config_or_default, Config};

use crate::cli::{output, Cli, OutputFormat};

/// Plan iOS PWA startup images
#[derive(Debug, Args)]
pub struct SplashCommand {
    /// Source image (defaults to pwa.startup_image.src)
    #[arg(short, long)]
    pub src: Option<String>,

    /// Output directory for the generated images
    #[arg(short, long)]
    pub destination: Option<String>,

    /// Background color
    #[arg(long)]
    pub color: Option<String>,

    /// Padding around the source image, in pixels
    #[arg(long)]
    pub padding: Option<u32>,

    /// Resize mode: contain, cover, fill, inside, outside
    #[arg(long)]
    pub resize_mode: Option<ResizeMode>,

    /// Restrict to an orientation instead of generating both.
    /// iOS cannot lock a web app's orientation, so only use this for other targets.
    #[arg(short, long)]
    pub orientation: Option<String>,

    /// Include tablets (only with --orientation; defaults to pwa.supports_tablet)
    #[arg(long, requires = "orientation")]
    pub supports_tablet: bool,
}

impl SplashCommand {
    /// Execute the splash command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(
            orientation = ?self.orientation,
            supports_tablet = self.supports_tablet,
            "executing splash command"
        );
        let cwd = std::env::current_dir()?;
        let (config, _) = load_config_or_default(&cwd);

        let icon = self.resolve_icon(&config)?;
        let images = self.plan(&icon, self.supports_tablet(&config))?;

        if cli.format == OutputFormat::Json {
            println!("{}", serde_json::to_string_pretty(&images)?);
        } else if !cli.quiet {
            print_images(&icon, &images, cli.verbose);
        }

        Ok(())
    }

    /// Merge command-line overrides onto the configured startup image
    fn resolve_icon(&self, config: &Config) -> anyhow::Result<Icon> {
        let mut icon = match (&self.src, &config.pwa.startup_image) {
            (Some(src), Some(configured)) => Icon {
                src: src.clone(),
                ..configured.clone()
            },
            (Some(src), None) => Icon::new(src.clone()),
            (None, Some(configured)) => configured.clone(),
            (None, None) => anyhow::bail!(
                "No source image: pass --src or set pwa.startup_image.src in the configuration"
            ),
        };

        if let Some(ref destination) = self.destination {
            icon.destination = Some(destination.clone());
        }
        if let Some(ref color) = self.color {
            icon.color = Some(color.clone());
        }
        if let Some(padding) = self.padding {
            icon.padding = Some(padding);
        }
        if let Some(resize_mode) = self.resize_mode {
            icon.resize_mode = resize_mode;
        }

        Ok(icon)
    }

    /// The flag, falling back to the configured setting
    fn supports_tablet(&self, config: &Config) -> bool {
        self.supports_tablet || config.pwa.supports_tablet
    }

    fn plan(
        &self,
        icon: &Icon,
        supports_tablet: bool,
    ) -> anyhow::Result<Vec<StartupImageDescriptor>> {
        let generator = SplashGenerator::default();
        Ok(match self.orientation {
            Some(ref orientation) => generator.for_config(icon, orientation, supports_tablet)?,
            None => generator.from_startup_image(icon),
        })
    }
}

fn print_images(icon: &Icon, images: &[StartupImageDescriptor], verbose: bool) {
    println!();
    println!(
        "{} {}",
        output::header("Startup images for"),
        output::path_style().apply_to(&icon.src)
    );
    println!();

    for image in images {
        println!(
            "  {} {} {}",
            style(format!("{:<14}", image.device)).bold(),
            style(format!("{:<9}", image.orientation.as_str())).dim(),
            output::path_style().apply_to(image.destination_path.display())
        );
        if verbose {
            println!("    {}", style(&image.media_query).dim());
        }
    }

    println!();
    output::success(&format!("Planned {} startup images", images.len()));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command() -> SplashCommand {
        SplashCommand {
            src: None,
            destination: None,
            color: None,
            padding: None,
            resize_mode: None,
            orientation: None,
            supports_tablet: false,
        }
    }

    #[test]
    fn test_resolve_icon_requires_source() {
        assert!(command().resolve_icon(&Config::default()).is_err());
    }

    #[test]
    fn test_resolve_icon_overrides_config() {
        let mut config = Config::default();
        config.pwa.startup_image = Some(
            Icon::new("assets/splash.png")
                .with_color("#ffffff")
                .with_destination("pwa"),
        );

        let cmd = SplashCommand {
            src: Some("other.png".to_string()),
            resize_mode: Some(ResizeMode::Cover),
            ..command()
        };
        let icon = cmd.resolve_icon(&config).unwrap();
        assert_eq!(icon.src, "other.png");
        assert_eq!(icon.color.as_deref(), Some("#ffffff"));
        assert_eq!(icon.destination.as_deref(), Some("pwa"));
        assert_eq!(icon.resize_mode, ResizeMode::Cover);
    }

    #[test]
    fn test_plan_defaults_to_ios_matrix() {
        let images = command().plan(&Icon::new("splash.png"), true).unwrap();
        assert_eq!(images.len(), 12);
    }

    #[test]
    fn test_plan_with_orientation() {
        let cmd = SplashCommand {
            orientation: Some("landscape".to_string()),
            supports_tablet: true,
            ..command()
        };
        let images = cmd.plan(&Icon::new("splash.png"), true).unwrap();
        assert_eq!(images.len(), 10);

        let cmd = SplashCommand {
            orientation: Some("sideways".to_string()),
            ..command()
        };
        assert!(cmd.plan(&Icon::new("splash.png"), false).is_err());
    }

    #[test]
    fn test_supports_tablet_falls_back_to_config() {
        let mut config = Config::default();
        let cmd = SplashCommand {
            orientation: Some("portrait".to_string()),
            ..command()
        };
        assert!(!cmd.supports_tablet(&config));

        config.pwa.supports_tablet = true;
        assert!(cmd.supports_tablet(&config));
        let images = cmd
            .plan(&Icon::new("splash.png"), cmd.supports_tablet(&config))
            .unwrap();
        assert_eq!(images.len(), 10);
    }
}
