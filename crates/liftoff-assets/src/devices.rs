//! Device catalog for splash screen generation
//!
//! Devices are stored portrait-canonical (`width < height`) in physical
//! pixels. The built-in catalog covers the iOS form factors that accept
//! `apple-touch-startup-image` links.

use serde::Serialize;
use tracing::debug;

/// A device form factor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Device {
    /// Marketing names sharing this screen geometry
    pub names: &'static [&'static str],

    /// Portrait width in physical pixels
    pub width: u32,

    /// Portrait height in physical pixels
    pub height: u32,

    /// Device pixel ratio
    pub scale: u32,

    /// Tablet-class device
    pub is_tablet: bool,
}

impl Device {
    /// Create a phone entry
    pub const fn phone(names: &'static [&'static str], width: u32, height: u32, scale: u32) -> Self {
        Self {
            names,
            width,
            height,
            scale,
            is_tablet: false,
        }
    }

    /// Create a tablet entry
    pub const fn tablet(
        names: &'static [&'static str],
        width: u32,
        height: u32,
        scale: u32,
    ) -> Self {
        Self {
            names,
            width,
            height,
            scale,
            is_tablet: true,
        }
    }

    /// Primary display name
    pub fn name(&self) -> &'static str {
        self.names.first().copied().unwrap_or_default()
    }

    /// Non-zero width, height and scale
    pub fn has_geometry(&self) -> bool {
        self.width > 0 && self.height > 0 && self.scale > 0
    }

    /// True if any alias matches, ignoring case
    pub fn matches(&self, name: &str) -> bool {
        self.names.iter().any(|n| n.eq_ignore_ascii_case(name))
    }
}

/// Built-in iOS devices, in generation order
pub static IOS_DEVICES: &[Device] = &[
    Device::phone(&["iPhone SE"], 640, 1136, 2),
    Device::phone(&["iPhone Xs Max"], 1242, 2688, 3),
    Device::phone(&["iPhone Xr"], 828, 1792, 2),
    Device::phone(&["iPhone X", "iPhone Xs"], 1125, 2436, 3),
    Device::phone(
        &["iPhone 8 Plus", "iPhone 7 Plus", "iPhone 6s Plus", "iPhone 6 Plus"],
        1242,
        2208,
        3,
    ),
    Device::phone(
        &["iPhone 8", "iPhone 7", "iPhone 6s", "iPhone 6"],
        750,
        1334,
        2,
    ),
    Device::tablet(&["iPad Pro 12.9\""], 2048, 2732, 2),
    Device::tablet(&["iPad Pro 11\""], 1668, 2388, 2),
    Device::tablet(&["iPad Pro 10.5\""], 1668, 2224, 2),
    Device::tablet(&["iPad Mini", "iPad Air"], 1536, 2048, 2),
];

/// Read-only view over a list of devices
///
/// Generators borrow a catalog instead of reaching for [`IOS_DEVICES`]
/// directly, so tests can hand in their own entries.
#[derive(Debug, Clone, Copy)]
pub struct DeviceCatalog<'a> {
    devices: &'a [Device],
}

impl<'a> DeviceCatalog<'a> {
    /// Wrap an arbitrary device list
    pub const fn new(devices: &'a [Device]) -> Self {
        Self { devices }
    }

    /// All devices in catalog order
    pub fn devices(&self) -> &'a [Device] {
        self.devices
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    /// Devices to generate for; tablets are dropped unless supported
    pub fn filter_by_tablet_support(&self, supports_tablet: bool) -> Vec<&'a Device> {
        let devices: Vec<&'a Device> = self
            .devices
            .iter()
            .filter(|d| supports_tablet || !d.is_tablet)
            .collect();
        debug!(
            supports_tablet,
            total = self.devices.len(),
            selected = devices.len(),
            "filtered device catalog"
        );
        devices
    }

    /// Look up a device by any of its names
    pub fn find(&self, name: &str) -> Option<&'a Device> {
        self.devices.iter().find(|d| d.matches(name))
    }
}

impl Default for DeviceCatalog<'static> {
    fn default() -> Self {
        Self::new(IOS_DEVICES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_is_portrait_canonical() {
        for device in IOS_DEVICES {
            assert!(
                device.width < device.height,
                "{} is not portrait",
                device.name()
            );
            assert!(device.scale > 0);
            assert!(!device.names.is_empty());
        }
    }

    #[test]
    fn test_filter_by_tablet_support() {
        let catalog = DeviceCatalog::default();
        assert_eq!(catalog.filter_by_tablet_support(true).len(), 10);

        let phones = catalog.filter_by_tablet_support(false);
        assert_eq!(phones.len(), 6);
        assert!(phones.iter().all(|d| !d.is_tablet));
        assert_eq!(phones[0].name(), "iPhone SE");
        assert_eq!(phones[5].name(), "iPhone 8");
    }

    #[test]
    fn test_find_by_alias() {
        let catalog = DeviceCatalog::default();
        let device = catalog.find("iphone 7 plus").unwrap();
        assert_eq!(device.name(), "iPhone 8 Plus");
        assert_eq!((device.width, device.height, device.scale), (1242, 2208, 3));
        assert!(catalog.find("Pixel 7").is_none());
    }

    #[test]
    fn test_custom_catalog() {
        static ONLY_TABLETS: &[Device] = &[Device::tablet(&["Test Tab"], 800, 1280, 1)];
        let catalog = DeviceCatalog::new(ONLY_TABLETS);
        assert!(catalog.filter_by_tablet_support(false).is_empty());
        assert_eq!(catalog.filter_by_tablet_support(true).len(), 1);
    }
}
