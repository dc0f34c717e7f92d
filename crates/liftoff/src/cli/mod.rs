//! CLI definition and command handling

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};

use commands::{
    CompletionsCommand, DevicesCommand, InitCommand, ManifestCommand, OrientationCommand,
    SplashCommand,
};

/// Liftoff - Orientation and splash asset CLI
#[derive(Debug, Parser)]
#[command(name = "liftoff")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Working directory
    #[arg(short = 'C', long, global = true)]
    pub directory: Option<std::path::PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output
    Json,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Initialize a new Liftoff configuration
    Init(InitCommand),

    /// Show how an orientation resolves on each platform
    Orientation(OrientationCommand),

    /// Edit the Android manifest's orientation
    Manifest(ManifestCommand),

    /// Plan iOS PWA startup images
    Splash(SplashCommand),

    /// List the device catalog
    Devices(DevicesCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> anyhow::Result<()> {
        // Change to specified directory if provided
        if let Some(dir) = &self.directory {
            std::env::set_current_dir(dir)?;
        }

        match self.command {
            Commands::Init(ref cmd) => cmd.execute(&self),
            Commands::Orientation(ref cmd) => cmd.execute(&self),
            Commands::Manifest(ref cmd) => cmd.execute(&self),
            Commands::Splash(ref cmd) => cmd.execute(&self),
            Commands::Devices(ref cmd) => cmd.execute(&self),
            Commands::Completions(ref cmd) => cmd.execute(&self),
        }
    }

    /// Whether human-readable output should be printed
    pub fn is_text(&self) -> bool {
        !self.quiet && self.format == OutputFormat::Text
    }
}
