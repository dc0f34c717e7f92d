//! Liftoff Assets - Orientation resolution and splash asset planning
//!
//! This crate turns a platform-agnostic orientation preference into what each
//! platform needs:
//!
//! - **Android**: the `android:screenOrientation` value written onto the main
//!   activity of a parsed `AndroidManifest.xml`
//! - **iOS / PWA**: the full matrix of `apple-touch-startup-image` assets, one
//!   per device and orientation, each with its CSS media query
//!
//! Everything here is synchronous and free of I/O apart from the optional
//! JSON snapshot helpers on [`manifest::AndroidManifest`]. Parsing XML and
//! rendering bitmaps are left to the caller.

pub mod devices;
pub mod error;
pub mod manifest;
pub mod orientation;
pub mod splash;

pub use devices::{Device, DeviceCatalog, IOS_DEVICES};
pub use error::{AssetError, Result};
pub use manifest::{
    get_android_orientation, set_android_orientation, AndroidManifest, AttributeBag,
    ManifestTree, MAIN_ACTIVITY_NAME,
};
pub use orientation::{
    get_orientation, is_landscape, is_portrait, is_valid, prepare_orientation,
    to_android_attribute, AndroidOrientation, Orientation, OrientationConfig,
};
pub use splash::{
    assemble_media_query, from_startup_image, get_devices, DeviceOrientations, Icon, ResizeMode,
    SplashGenerator, StartupImageDescriptor,
};
