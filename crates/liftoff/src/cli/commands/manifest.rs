//! Manifest command - apply the configured orientation to the Android manifest

use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};
use console::style;
use tracing::info;

use liftoff_assets::{
    get_android_orientation, set_android_orientation, AndroidManifest, OrientationConfig,
    MAIN_ACTIVITY_NAME,
};
use liftoff_core::{load_config_or_default, Config};

use crate::cli::{output, Cli, OutputFormat};

/// Android manifest operations
#[derive(Debug, Args)]
pub struct ManifestCommand {
    #[command(subcommand)]
    pub command: ManifestSubcommand,
}

/// Manifest subcommands
#[derive(Debug, Subcommand)]
pub enum ManifestSubcommand {
    /// Write the orientation onto the main activity
    Set(SetCommand),

    /// Show the main activity's current orientation
    Show(ShowCommand),
}

/// Write the orientation onto the main activity
#[derive(Debug, Args)]
pub struct SetCommand {
    /// Orientation to apply (defaults to the configured one)
    #[arg(short, long)]
    pub orientation: Option<String>,

    /// Manifest JSON snapshot (defaults to the configured path)
    #[arg(short, long)]
    pub manifest: Option<PathBuf>,

    /// Print the edited manifest instead of writing it
    #[arg(long)]
    pub dry_run: bool,
}

/// Show the main activity's current orientation
#[derive(Debug, Args)]
pub struct ShowCommand {
    /// Manifest JSON snapshot (defaults to the configured path)
    #[arg(short, long)]
    pub manifest: Option<PathBuf>,
}

impl ManifestCommand {
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        let subcommand_name = match &self.command {
            ManifestSubcommand::Set(_) => "set",
            ManifestSubcommand::Show(_) => "show",
        };
        info!(subcommand = subcommand_name, "executing manifest command");

        let cwd = std::env::current_dir()?;
        let (config, _) = load_config_or_default(&cwd);

        match &self.command {
            ManifestSubcommand::Set(cmd) => cmd.execute(cli, &config),
            ManifestSubcommand::Show(cmd) => cmd.execute(cli, &config),
        }
    }
}

fn resolve_manifest_path(explicit: Option<&Path>, config: &Config) -> PathBuf {
    explicit
        .map(Path::to_path_buf)
        .unwrap_or_else(|| config.android.manifest.clone())
}

fn read_manifest(path: &Path) -> anyhow::Result<AndroidManifest> {
    AndroidManifest::read(path)
        .map_err(|e| anyhow::anyhow!("Failed to read manifest {}: {}", path.display(), e))
}

impl SetCommand {
    fn execute(&self, cli: &Cli, config: &Config) -> anyhow::Result<()> {
        let path = resolve_manifest_path(self.manifest.as_deref(), config);
        let orientation_config = match self.orientation {
            Some(ref o) => OrientationConfig::new(o.clone()),
            None => config.orientation_config(),
        };

        let mut manifest = read_manifest(&path)?;
        let before = get_android_orientation(&manifest).ok().flatten().map(str::to_owned);

        let manifest = set_android_orientation(&orientation_config, &mut manifest)?;
        let after = get_android_orientation(&*manifest).ok().flatten().map(str::to_owned);

        if self.dry_run {
            println!("{}", manifest.to_json()?);
            return Ok(());
        }

        if orientation_config.orientation.is_none() {
            if cli.is_text() {
                output::warning("No orientation configured; manifest left unchanged");
            }
            return Ok(());
        }

        manifest.write(&path)?;

        if cli.format == OutputFormat::Json {
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({
                    "manifest": path,
                    "activity": MAIN_ACTIVITY_NAME,
                    "previous": before,
                    "screenOrientation": after,
                }))?
            );
        } else if !cli.quiet {
            output::success(&format!(
                "Set {} screenOrientation to {} in {}",
                MAIN_ACTIVITY_NAME,
                output::orientation_style().apply_to(after.as_deref().unwrap_or_default()),
                output::path_style().apply_to(path.display())
            ));
            if cli.verbose {
                println!(
                    "{}",
                    output::key_value("previous", before.as_deref().unwrap_or("(not set)"))
                );
            }
        }

        Ok(())
    }
}

impl ShowCommand {
    fn execute(&self, cli: &Cli, config: &Config) -> anyhow::Result<()> {
        let path = resolve_manifest_path(self.manifest.as_deref(), config);
        let manifest = read_manifest(&path)?;
        let current = get_android_orientation(&manifest)?;

        if cli.format == OutputFormat::Json {
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({
                    "manifest": path,
                    "activity": MAIN_ACTIVITY_NAME,
                    "screenOrientation": current,
                }))?
            );
        } else if !cli.quiet {
            println!("{}", output::header("Android manifest"));
            println!(
                "{}",
                output::key_value("path", &output::path_style().apply_to(path.display()).to_string())
            );
            println!("{}", output::key_value("activity", MAIN_ACTIVITY_NAME));
            println!(
                "{}",
                output::key_value(
                    "screenOrientation",
                    &current
                        .map(|c| output::orientation_style().apply_to(c).to_string())
                        .unwrap_or_else(|| style("(not set)").dim().to_string())
                )
            );
        }

        Ok(())
    }
}
