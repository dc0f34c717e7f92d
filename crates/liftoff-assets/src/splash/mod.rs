//! PWA splash screen planning
//!
//! Expands a device catalog into the startup images an iOS home-screen web
//! app needs: one image per device and orientation, each with the media query
//! Safari uses to pick it. Only the plan is produced here; rendering the
//! bitmaps is left to the caller.

mod media;

pub use media::assemble_media_query;

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::devices::{Device, DeviceCatalog};
use crate::error::{AssetError, Result};
use crate::orientation::Orientation;

/// How the source image is fitted into the target size
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizeMode {
    #[default]
    Contain,
    Cover,
    Fill,
    Inside,
    Outside,
}

impl ResizeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Contain => "contain",
            Self::Cover => "cover",
            Self::Fill => "fill",
            Self::Inside => "inside",
            Self::Outside => "outside",
        }
    }
}

impl std::fmt::Display for ResizeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ResizeMode {
    type Err = AssetError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "contain" => Ok(Self::Contain),
            "cover" => Ok(Self::Cover),
            "fill" => Ok(Self::Fill),
            "inside" => Ok(Self::Inside),
            "outside" => Ok(Self::Outside),
            _ => Err(AssetError::resize_mode(s)),
        }
    }
}

/// Source image settings for generated assets
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Icon {
    /// Path to the source image
    pub src: String,

    #[serde(default)]
    pub resize_mode: ResizeMode,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<u32>,

    /// Background color, e.g. `#ffffff`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// Output directory for the generated files
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
}

impl Icon {
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            ..Default::default()
        }
    }

    pub fn with_destination(mut self, destination: impl Into<String>) -> Self {
        self.destination = Some(destination.into());
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_padding(mut self, padding: u32) -> Self {
        self.padding = Some(padding);
        self
    }

    pub fn with_resize_mode(mut self, resize_mode: ResizeMode) -> Self {
        self.resize_mode = resize_mode;
        self
    }
}

/// One image the rendering step must produce
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartupImageDescriptor {
    pub source_image_path: String,
    pub filename: String,
    pub width: u32,
    pub height: u32,
    pub scale: u32,
    pub media_query: String,
    pub destination_path: PathBuf,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub resize_mode: ResizeMode,
    /// `landscape` or `portrait`
    pub orientation: Orientation,
    /// Primary name of the catalog device
    pub device: String,
}

/// A device paired with the orientations to generate for it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeviceOrientations<'a> {
    pub device: &'a Device,
    pub orientations: Vec<Orientation>,
}

/// Plans startup images against a device catalog
#[derive(Debug, Clone, Copy)]
pub struct SplashGenerator<'a> {
    catalog: DeviceCatalog<'a>,
}

impl Default for SplashGenerator<'static> {
    fn default() -> Self {
        Self::new(DeviceCatalog::default())
    }
}

impl<'a> SplashGenerator<'a> {
    pub fn new(catalog: DeviceCatalog<'a>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> DeviceCatalog<'a> {
        self.catalog
    }

    /// Devices to generate for, each with its orientation subset
    ///
    /// Fails if `orientation` is not part of the vocabulary.
    pub fn get_devices(
        &self,
        orientation: &str,
        supports_tablet: bool,
    ) -> Result<Vec<DeviceOrientations<'a>>> {
        let orientation: Orientation = orientation.parse()?;
        Ok(self.devices_for(orientation, supports_tablet))
    }

    /// Typed form of [`SplashGenerator::get_devices`]
    pub fn devices_for(
        &self,
        orientation: Orientation,
        supports_tablet: bool,
    ) -> Vec<DeviceOrientations<'a>> {
        let mut orientations = Vec::with_capacity(2);
        if orientation.is_landscape() {
            orientations.push(Orientation::Landscape);
        }
        if orientation.is_portrait() {
            orientations.push(Orientation::Portrait);
        }

        self.catalog
            .filter_by_tablet_support(supports_tablet)
            .into_iter()
            .map(|device| DeviceOrientations {
                device,
                orientations: orientations.clone(),
            })
            .collect()
    }

    /// Startup images for an iOS home-screen web app
    ///
    /// iOS cannot lock a web app's orientation, so every phone gets both a
    /// landscape and a portrait image whatever the project configures.
    pub fn from_startup_image(&self, icon: &Icon) -> Vec<StartupImageDescriptor> {
        self.expand(icon, self.devices_for(Orientation::Any, false))
    }

    /// Startup images for an explicit orientation and tablet setting
    pub fn for_config(
        &self,
        icon: &Icon,
        orientation: &str,
        supports_tablet: bool,
    ) -> Result<Vec<StartupImageDescriptor>> {
        let devices = self.get_devices(orientation, supports_tablet)?;
        Ok(self.expand(icon, devices))
    }

    fn expand(
        &self,
        icon: &Icon,
        devices: Vec<DeviceOrientations<'a>>,
    ) -> Vec<StartupImageDescriptor> {
        let destination = PathBuf::from(icon.destination.as_deref().unwrap_or_default());
        let mut images = Vec::new();

        for DeviceOrientations {
            device,
            orientations,
        } in devices
        {
            if !device.has_geometry() {
                warn!(
                    device = device.name(),
                    width = device.width,
                    height = device.height,
                    scale = device.scale,
                    "skipping device with empty geometry"
                );
                continue;
            }

            for orientation in orientations {
                let (width, height) = if orientation != Orientation::Portrait {
                    (device.height, device.width)
                } else {
                    (device.width, device.height)
                };

                let filename = format!("startup-{}x{}.png", width, height);
                debug!(device = device.name(), %orientation, %filename, "planned startup image");

                images.push(StartupImageDescriptor {
                    source_image_path: icon.src.clone(),
                    destination_path: destination.join(&filename),
                    filename,
                    width,
                    height,
                    scale: device.scale,
                    media_query: assemble_media_query(
                        device.width,
                        device.height,
                        device.scale,
                        orientation.as_str(),
                    ),
                    padding: icon.padding,
                    color: icon.color.clone(),
                    resize_mode: icon.resize_mode,
                    orientation,
                    device: device.name().to_string(),
                });
            }
        }

        info!(count = images.len(), src = %icon.src, "planned startup images");
        images
    }
}

/// [`SplashGenerator::get_devices`] against the built-in catalog
pub fn get_devices(
    orientation: &str,
    supports_tablet: bool,
) -> Result<Vec<DeviceOrientations<'static>>> {
    SplashGenerator::default().get_devices(orientation, supports_tablet)
}

/// [`SplashGenerator::from_startup_image`] against the built-in catalog
pub fn from_startup_image(icon: &Icon) -> Vec<StartupImageDescriptor> {
    SplashGenerator::default().from_startup_image(icon)
}
