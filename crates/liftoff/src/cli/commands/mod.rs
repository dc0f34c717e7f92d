//! CLI commands

mod completions;
mod devices;
mod init;
mod manifest;
mod orientation;
mod splash;

pub use completions::CompletionsCommand;
pub use devices::DevicesCommand;
pub use init::InitCommand;
pub use manifest::ManifestCommand;
pub use orientation::OrientationCommand;
pub use splash::SplashCommand;
