//! Orientation vocabulary and platform encodings
//!
//! An [`Orientation`] is a platform-agnostic rotation preference, spelled the
//! way the web app manifest spells it. Each variant has exactly one row in
//! [`Orientation::traits`], which drives the landscape/portrait predicates and
//! the Android `screenOrientation` mapping.
//!
//! The free functions at the bottom of the module accept raw strings, as they
//! appear in project configuration, and are the entry points the manifest
//! mutator and the splash generator use.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{AssetError, Result};

/// Value Android uses for "no preference"; `default` normalizes to this
pub const UNSPECIFIED: &str = "unspecified";

/// Abstract orientation preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Orientation {
    Any,
    Natural,
    Landscape,
    LandscapePrimary,
    LandscapeSecondary,
    Portrait,
    PortraitPrimary,
    PortraitSecondary,
    Omit,
    /// Legacy alias for Android's `unspecified`
    Default,
}

/// Values of Android's `android:screenOrientation` attribute that an
/// [`Orientation`] can resolve to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AndroidOrientation {
    Unspecified,
    Landscape,
    Portrait,
    ReverseLandscape,
    ReversePortrait,
}

/// Per-variant classification row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrientationTraits {
    /// Splash assets should include a landscape variant
    pub is_landscape: bool,
    /// Splash assets should include a portrait variant
    pub is_portrait: bool,
    /// Android encoding, if one is defined
    pub android: Option<AndroidOrientation>,
}

impl OrientationTraits {
    const fn new(is_landscape: bool, is_portrait: bool, android: Option<AndroidOrientation>) -> Self {
        Self {
            is_landscape,
            is_portrait,
            android,
        }
    }
}

impl Orientation {
    /// Every member of the vocabulary, in declaration order
    pub const ALL: [Orientation; 10] = [
        Self::Any,
        Self::Natural,
        Self::Landscape,
        Self::LandscapePrimary,
        Self::LandscapeSecondary,
        Self::Portrait,
        Self::PortraitPrimary,
        Self::PortraitSecondary,
        Self::Omit,
        Self::Default,
    ];

    /// String form used in configuration and media queries
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Any => "any",
            Self::Natural => "natural",
            Self::Landscape => "landscape",
            Self::LandscapePrimary => "landscape-primary",
            Self::LandscapeSecondary => "landscape-secondary",
            Self::Portrait => "portrait",
            Self::PortraitPrimary => "portrait-primary",
            Self::PortraitSecondary => "portrait-secondary",
            Self::Omit => "omit",
            Self::Default => "default",
        }
    }

    /// The lookup table. `any`, `natural` and `omit` have no Android value.
    pub const fn traits(&self) -> OrientationTraits {
        use AndroidOrientation as A;
        match self {
            Self::Any => OrientationTraits::new(true, true, None),
            Self::Natural => OrientationTraits::new(false, false, None),
            Self::Landscape => OrientationTraits::new(true, false, Some(A::Landscape)),
            Self::LandscapePrimary => OrientationTraits::new(true, false, Some(A::Landscape)),
            Self::LandscapeSecondary => {
                OrientationTraits::new(true, false, Some(A::ReverseLandscape))
            }
            Self::Portrait => OrientationTraits::new(false, true, Some(A::Portrait)),
            Self::PortraitPrimary => OrientationTraits::new(false, true, Some(A::Portrait)),
            Self::PortraitSecondary => {
                OrientationTraits::new(false, true, Some(A::ReversePortrait))
            }
            Self::Omit => OrientationTraits::new(false, false, None),
            Self::Default => OrientationTraits::new(false, false, Some(A::Unspecified)),
        }
    }

    pub fn is_landscape(&self) -> bool {
        self.traits().is_landscape
    }

    pub fn is_portrait(&self) -> bool {
        self.traits().is_portrait
    }

    /// Android encoding, or a mapping error when none is defined
    pub fn android(&self) -> Result<AndroidOrientation> {
        self.traits()
            .android
            .ok_or_else(|| AssetError::mapping(self.as_str()))
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Orientation {
    type Err = AssetError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|o| o.as_str() == s)
            .ok_or_else(|| AssetError::validation(s))
    }
}

impl AndroidOrientation {
    /// Attribute value as written into `AndroidManifest.xml`
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unspecified => UNSPECIFIED,
            Self::Landscape => "landscape",
            Self::Portrait => "portrait",
            Self::ReverseLandscape => "reverseLandscape",
            Self::ReversePortrait => "reversePortrait",
        }
    }
}

impl fmt::Display for AndroidOrientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Orientation settings as supplied by a project
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrientationConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orientation: Option<String>,
}

impl OrientationConfig {
    pub fn new(orientation: impl Into<String>) -> Self {
        Self {
            orientation: Some(orientation.into()),
        }
    }
}

/// True if `orientation` is a member of the vocabulary, `default` included
pub fn is_valid(orientation: &str) -> bool {
    orientation.parse::<Orientation>().is_ok()
}

/// True for the landscape family and `any`
pub fn is_landscape(orientation: &str) -> bool {
    orientation
        .parse::<Orientation>()
        .map(|o| o.is_landscape())
        .unwrap_or(false)
}

/// True for the portrait family and `any`
pub fn is_portrait(orientation: &str) -> bool {
    orientation
        .parse::<Orientation>()
        .map(|o| o.is_portrait())
        .unwrap_or(false)
}

/// Normalize the legacy `default` value to `unspecified`
pub fn prepare_orientation(orientation: &str) -> &str {
    if orientation == Orientation::Default.as_str() {
        UNSPECIFIED
    } else {
        orientation
    }
}

/// The configured orientation, if any
pub fn get_orientation(config: &OrientationConfig) -> Option<&str> {
    config.orientation.as_deref()
}

/// Resolve a (prepared) orientation string to its Android attribute value
pub fn to_android_attribute(orientation: &str) -> Result<AndroidOrientation> {
    if orientation == UNSPECIFIED {
        return Ok(AndroidOrientation::Unspecified);
    }
    orientation.parse::<Orientation>()?.android()
}
