//! Android manifest orientation edits
//!
//! The mutator never looks at the manifest's concrete shape. It needs two
//! capabilities, expressed as [`ManifestTree`] and [`AttributeBag`]: find an
//! activity by its qualified name, and read or write one qualified attribute.
//! [`AndroidManifest`] is the in-memory implementation the CLI uses.

mod document;

pub use document::{Activity, AndroidManifest, Application, Attribute};

use tracing::{debug, info};

use crate::error::{AssetError, Result};
use crate::orientation::{
    get_orientation, prepare_orientation, to_android_attribute, OrientationConfig,
};

/// Name of the launcher activity in a generated project
pub const MAIN_ACTIVITY_NAME: &str = ".MainActivity";

/// Attribute identifying an activity
pub const ANDROID_NAME: &str = "android:name";

/// Attribute carrying the orientation lock
pub const SCREEN_ORIENTATION: &str = "android:screenOrientation";

/// Qualified attribute access on one node
pub trait AttributeBag {
    /// Value of a qualified attribute such as `android:name`
    fn attribute(&self, name: &str) -> Option<&str>;

    /// Set or replace a qualified attribute, leaving every other one untouched
    fn set_attribute(&mut self, name: &str, value: &str);
}

/// Node lookup on a parsed manifest
pub trait ManifestTree {
    type Node: AttributeBag;

    /// First activity whose `android:name` equals `name`
    fn find_activity(&self, name: &str) -> Option<&Self::Node>;

    /// Mutable variant of [`ManifestTree::find_activity`]
    fn find_activity_mut(&mut self, name: &str) -> Option<&mut Self::Node>;
}

/// Write the configured orientation onto the main activity
///
/// A config without an orientation is a no-op. On error the document is left
/// exactly as it was. Returns the same document so edits can be chained.
pub fn set_android_orientation<'m, T: ManifestTree>(
    config: &OrientationConfig,
    manifest: &'m mut T,
) -> Result<&'m mut T> {
    let Some(orientation) = get_orientation(config) else {
        debug!("no orientation configured, leaving manifest untouched");
        return Ok(manifest);
    };

    let value = to_android_attribute(prepare_orientation(orientation))?;

    let activity = manifest
        .find_activity_mut(MAIN_ACTIVITY_NAME)
        .ok_or_else(|| AssetError::structural(MAIN_ACTIVITY_NAME))?;

    let previous = activity.attribute(SCREEN_ORIENTATION).map(str::to_owned);
    activity.set_attribute(SCREEN_ORIENTATION, value.as_str());

    info!(
        orientation,
        value = value.as_str(),
        previous = previous.as_deref().unwrap_or("<none>"),
        "set android screenOrientation"
    );

    Ok(manifest)
}

/// Current `android:screenOrientation` of the main activity
pub fn get_android_orientation<T: ManifestTree>(manifest: &T) -> Result<Option<&str>> {
    let activity = manifest
        .find_activity(MAIN_ACTIVITY_NAME)
        .ok_or_else(|| AssetError::structural(MAIN_ACTIVITY_NAME))?;
    Ok(activity.attribute(SCREEN_ORIENTATION))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_manifest() -> AndroidManifest {
        AndroidManifest::new(vec![Application::new(
            vec![
                Attribute::new("android:name", ".MainApplication"),
                Attribute::new("android:label", "@string/app_name"),
            ],
            vec![
                Activity::new(vec![
                    Attribute::new("android:name", ".MainActivity"),
                    Attribute::new("android:label", "@string/app_name"),
                    Attribute::new("android:launchMode", "singleTask"),
                ]),
                Activity::new(vec![
                    Attribute::new(
                        "android:name",
                        "com.facebook.react.devsupport.DevSettingsActivity",
                    ),
                    Attribute::new("android:screenOrientation", "sensor"),
                ]),
            ],
        )])
    }

    #[test]
    fn test_adds_orientation_if_not_present() {
        let mut manifest = sample_manifest();
        set_android_orientation(&OrientationConfig::new("landscape"), &mut manifest).unwrap();

        assert_eq!(get_android_orientation(&manifest).unwrap(), Some("landscape"));
    }

    #[test]
    fn test_replaces_orientation_and_leaves_siblings() {
        let mut manifest = sample_manifest();
        let original = manifest.clone();

        set_android_orientation(&OrientationConfig::new("landscape"), &mut manifest)
            .and_then(|m| set_android_orientation(&OrientationConfig::new("portrait"), m))
            .unwrap();

        let main = manifest.find_activity(MAIN_ACTIVITY_NAME).unwrap();
        assert_eq!(main.attribute(SCREEN_ORIENTATION), Some("portrait"));

        // Other attributes keep their values and order; the new one is appended
        let original_main = original.find_activity(MAIN_ACTIVITY_NAME).unwrap();
        assert_eq!(
            &main.attributes[..original_main.attributes.len()],
            &original_main.attributes[..]
        );
        assert_eq!(main.attributes.len(), original_main.attributes.len() + 1);

        // Sibling activity and application attributes are untouched
        let app = &manifest.application[0];
        let original_app = &original.application[0];
        assert_eq!(app.attributes, original_app.attributes);
        assert_eq!(app.activity[1], original_app.activity[1]);
    }

    #[test]
    fn test_default_becomes_unspecified() {
        let mut manifest = sample_manifest();
        set_android_orientation(&OrientationConfig::new("default"), &mut manifest).unwrap();
        assert_eq!(
            get_android_orientation(&manifest).unwrap(),
            Some("unspecified")
        );
    }

    #[test]
    fn test_missing_orientation_is_noop() {
        let mut manifest = sample_manifest();
        let original = manifest.clone();
        set_android_orientation(&OrientationConfig::default(), &mut manifest).unwrap();
        assert_eq!(manifest, original);
    }

    #[test]
    fn test_missing_main_activity_is_structural_error() {
        let mut manifest = AndroidManifest::new(vec![Application::new(
            vec![],
            vec![Activity::new(vec![Attribute::new(
                "android:name",
                ".SettingsActivity",
            )])],
        )]);
        let original = manifest.clone();

        let err =
            set_android_orientation(&OrientationConfig::new("portrait"), &mut manifest).unwrap_err();
        assert_eq!(err, AssetError::structural(MAIN_ACTIVITY_NAME));
        assert_eq!(manifest, original);
    }

    #[test]
    fn test_unmapped_orientation_leaves_document() {
        let mut manifest = sample_manifest();
        let original = manifest.clone();

        let err = set_android_orientation(&OrientationConfig::new("any"), &mut manifest).unwrap_err();
        assert_eq!(err, AssetError::mapping("any"));

        let err =
            set_android_orientation(&OrientationConfig::new("upside-down"), &mut manifest)
                .unwrap_err();
        assert_eq!(err, AssetError::validation("upside-down"));

        assert_eq!(manifest, original);
    }
}
