//! In-memory Android manifest model
//!
//! Mirrors the tree an XML reader produces for `AndroidManifest.xml`:
//! `manifest.application[].activity[]`, each node with an ordered list of
//! qualified attributes. Serializes to and from JSON so a manifest converted
//! by an external XML tool can be edited and handed back.
//!
//! Keys the model does not name (`uses-permission`, `intent-filter`,
//! `service`, root attributes, ...) are kept in each node's `extra` map and
//! written back untouched.

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use super::{AttributeBag, ManifestTree, ANDROID_NAME};

/// One qualified attribute, e.g. `android:name=".MainActivity"`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

fn lookup<'a>(attributes: &'a [Attribute], name: &str) -> Option<&'a str> {
    attributes
        .iter()
        .find(|a| a.name == name)
        .map(|a| a.value.as_str())
}

fn upsert(attributes: &mut Vec<Attribute>, name: &str, value: &str) {
    match attributes.iter_mut().find(|a| a.name == name) {
        Some(existing) => existing.value = value.to_string(),
        None => attributes.push(Attribute::new(name, value)),
    }
}

/// `<activity>` node
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    #[serde(default)]
    pub attributes: Vec<Attribute>,

    /// Child elements not modelled here
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Activity {
    pub fn new(attributes: Vec<Attribute>) -> Self {
        Self {
            attributes,
            extra: Map::new(),
        }
    }

    /// The activity's `android:name`
    pub fn name(&self) -> Option<&str> {
        self.attribute(ANDROID_NAME)
    }
}

impl AttributeBag for Activity {
    fn attribute(&self, name: &str) -> Option<&str> {
        lookup(&self.attributes, name)
    }

    fn set_attribute(&mut self, name: &str, value: &str) {
        upsert(&mut self.attributes, name, value);
    }
}

/// `<application>` node
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    #[serde(default)]
    pub attributes: Vec<Attribute>,

    #[serde(default)]
    pub activity: Vec<Activity>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Application {
    pub fn new(attributes: Vec<Attribute>, activity: Vec<Activity>) -> Self {
        Self {
            attributes,
            activity,
            extra: Map::new(),
        }
    }
}

impl AttributeBag for Application {
    fn attribute(&self, name: &str) -> Option<&str> {
        lookup(&self.attributes, name)
    }

    fn set_attribute(&mut self, name: &str, value: &str) {
        upsert(&mut self.attributes, name, value);
    }
}

/// Root `<manifest>` node
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AndroidManifest {
    #[serde(default)]
    pub application: Vec<Application>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AndroidManifest {
    pub fn new(application: Vec<Application>) -> Self {
        Self {
            application,
            extra: Map::new(),
        }
    }

    /// Parse a JSON snapshot
    pub fn from_json(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content)
    }

    /// Render a JSON snapshot
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Read a JSON snapshot from disk
    pub fn read(path: &Path) -> std::io::Result<Self> {
        debug!(path = %path.display(), "reading manifest snapshot");
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content).map_err(std::io::Error::from)
    }

    /// Write a JSON snapshot to disk
    pub fn write(&self, path: &Path) -> std::io::Result<()> {
        debug!(path = %path.display(), "writing manifest snapshot");
        let content = self.to_json().map_err(std::io::Error::from)?;
        std::fs::write(path, content)
    }

    /// All activities across every application node, in document order
    pub fn activities(&self) -> impl Iterator<Item = &Activity> {
        self.application.iter().flat_map(|app| app.activity.iter())
    }
}

impl ManifestTree for AndroidManifest {
    type Node = Activity;

    fn find_activity(&self, name: &str) -> Option<&Activity> {
        self.activities().find(|a| a.name() == Some(name))
    }

    fn find_activity_mut(&mut self, name: &str) -> Option<&mut Activity> {
        self.application
            .iter_mut()
            .flat_map(|app| app.activity.iter_mut())
            .find(|a| a.name() == Some(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::set_android_orientation;
    use crate::orientation::OrientationConfig;
    use tempfile::TempDir;

    const SNAPSHOT: &str = r#"{
  "application": [
    {
      "attributes": [{ "name": "android:name", "value": ".MainApplication" }],
      "activity": [
        {
          "attributes": [
            { "name": "android:name", "value": ".MainActivity" },
            { "name": "android:screenOrientation", "value": "portrait" },
            { "name": "android:windowSoftInputMode", "value": "adjustResize" }
          ]
        }
      ]
    }
  ]
}"#;

    #[test]
    fn test_parse_snapshot() {
        let manifest = AndroidManifest::from_json(SNAPSHOT).unwrap();
        let main = manifest.find_activity(".MainActivity").unwrap();
        assert_eq!(main.attribute("android:screenOrientation"), Some("portrait"));
        assert!(manifest.find_activity(".Other").is_none());
    }

    #[test]
    fn test_set_attribute_replaces_in_place() {
        let mut manifest = AndroidManifest::from_json(SNAPSHOT).unwrap();
        let main = manifest.find_activity_mut(".MainActivity").unwrap();
        main.set_attribute("android:screenOrientation", "landscape");

        let names: Vec<_> = main.attributes.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "android:name",
                "android:screenOrientation",
                "android:windowSoftInputMode"
            ]
        );
        assert_eq!(main.attributes[1].value, "landscape");
    }

    #[test]
    fn test_unmodelled_content_survives_round_trip() {
        let content = r#"{
  "package": "com.example.app",
  "uses-permission": [{ "attributes": [{ "name": "android:name", "value": "android.permission.INTERNET" }] }],
  "application": [
    {
      "attributes": [{ "name": "android:name", "value": ".MainApplication" }],
      "service": [{ "attributes": [{ "name": "android:name", "value": ".SyncService" }] }],
      "activity": [
        {
          "attributes": [{ "name": "android:name", "value": ".MainActivity" }],
          "intent-filter": [{ "action": [{ "attributes": [{ "name": "android:name", "value": "android.intent.action.MAIN" }] }] }]
        }
      ]
    }
  ]
}"#;
        let mut manifest = AndroidManifest::from_json(content).unwrap();
        set_android_orientation(&OrientationConfig::new("portrait"), &mut manifest).unwrap();

        let written: Value = serde_json::from_str(&manifest.to_json().unwrap()).unwrap();
        let mut expected: Value = serde_json::from_str(content).unwrap();
        expected["application"][0]["activity"][0]["attributes"]
            .as_array_mut()
            .unwrap()
            .push(serde_json::json!({ "name": "android:screenOrientation", "value": "portrait" }));

        assert_eq!(written, expected);
        assert_eq!(written["package"], "com.example.app");
    }

    #[test]
    fn test_missing_sections_default_to_empty() {
        let manifest = AndroidManifest::from_json("{}").unwrap();
        assert!(manifest.application.is_empty());
        assert_eq!(manifest.activities().count(), 0);
    }

    #[test]
    fn test_read_write_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("AndroidManifest.json");
        std::fs::write(&path, SNAPSHOT).unwrap();

        let mut manifest = AndroidManifest::read(&path).unwrap();
        manifest
            .find_activity_mut(".MainActivity")
            .unwrap()
            .set_attribute("android:screenOrientation", "reverseLandscape");
        manifest.write(&path).unwrap();

        let reloaded = AndroidManifest::read(&path).unwrap();
        assert_eq!(reloaded, manifest);
    }
}
