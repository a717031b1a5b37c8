//! Package manifest (`package.json`) model.
//!
//! The manifest is a keyed JSON structure mutated only through the deep
//! merge or the explicit setters below — never replaced destructively.
//! Serialization emits keys in the conventional manifest order so generated
//! files diff cleanly against hand-maintained ones. Requires serde_json's
//! `preserve_order` feature: manifest key order is observable output.

use serde_json::{Map, Value, json};

use crate::domain::error::DomainError;
use crate::domain::merge::deep_merge;

/// Conventional key order for serialized manifests. Keys not listed here are
/// appended afterwards in their insertion order.
const KEY_ORDER: [&str; 18] = [
    "name",
    "version",
    "description",
    "type",
    "main",
    "module",
    "types",
    "exports",
    "bin",
    "files",
    "sideEffects",
    "keywords",
    "scripts",
    "dependencies",
    "devDependencies",
    "peerDependencies",
    "publishConfig",
    "engines",
];

/// A mutable package manifest.
#[derive(Debug, Clone, PartialEq)]
pub struct PackageManifest {
    root: Map<String, Value>,
}

impl PackageManifest {
    /// Create a minimal manifest for a new package.
    pub fn new(name: &str, version: &str, description: &str) -> Self {
        let mut root = Map::new();
        root.insert("name".into(), Value::String(name.into()));
        root.insert("version".into(), Value::String(version.into()));
        root.insert("description".into(), Value::String(description.into()));
        Self { root }
    }

    /// Parse a manifest from JSON text.
    pub fn parse(text: &str) -> Result<Self, DomainError> {
        let value: Value = serde_json::from_str(text).map_err(|e| DomainError::ManifestParse {
            reason: e.to_string(),
        })?;
        let Value::Object(root) = value else {
            return Err(DomainError::ManifestNotObject);
        };
        Ok(Self { root })
    }

    pub fn name(&self) -> Option<&str> {
        self.root.get("name").and_then(Value::as_str)
    }

    pub fn description(&self) -> Option<&str> {
        self.root.get("description").and_then(Value::as_str)
    }

    /// Set `name` only if the manifest doesn't already carry one. Same
    /// pattern for [`Self::description_or`].
    pub fn name_or(&mut self, fallback: &str) {
        if self.name().is_none_or(str::is_empty) {
            self.root
                .insert("name".into(), Value::String(fallback.into()));
        }
    }

    pub fn description_or(&mut self, fallback: &str) {
        if self.description().is_none_or(str::is_empty) {
            self.root
                .insert("description".into(), Value::String(fallback.into()));
        }
    }

    /// Non-destructively merge a partial manifest fragment.
    pub fn merge(&mut self, fragment: &Value) {
        let mut root = Value::Object(std::mem::take(&mut self.root));
        deep_merge(&mut root, fragment);
        if let Value::Object(map) = root {
            self.root = map;
        }
    }

    /// `true` if `section` (e.g. `"dependencies"`) already has an entry for
    /// `name`.
    pub fn has_entry(&self, section: &str, name: &str) -> bool {
        self.root
            .get(section)
            .and_then(Value::as_object)
            .is_some_and(|map| map.contains_key(name))
    }

    /// Insert name → version-spec pairs into a keyed section, keeping any
    /// existing entries.
    pub fn add_entries(&mut self, section: &str, entries: &[(String, String)]) {
        if entries.is_empty() {
            return;
        }
        let map: Map<String, Value> = entries
            .iter()
            .map(|(name, spec)| (name.clone(), Value::String(spec.clone())))
            .collect();
        self.merge(&json!({ section: map }));
    }

    pub fn add_scripts(&mut self, scripts: &[(&str, &str)]) {
        let map: Map<String, Value> = scripts
            .iter()
            .map(|(name, cmd)| (name.to_string(), Value::String(cmd.to_string())))
            .collect();
        self.merge(&json!({ "scripts": map }));
    }

    pub fn add_keywords(&mut self, keywords: &[&str]) {
        self.merge(&json!({ "keywords": keywords }));
    }

    /// Serialize with conventional key order, trailing newline included.
    pub fn to_json_pretty(&self) -> String {
        let mut ordered = Map::new();
        for key in KEY_ORDER {
            if let Some(value) = self.root.get(key) {
                ordered.insert(key.to_string(), value.clone());
            }
        }
        for (key, value) in &self.root {
            if !ordered.contains_key(key) {
                ordered.insert(key.clone(), value.clone());
            }
        }
        let mut text = serde_json::to_string_pretty(&Value::Object(ordered))
            .expect("manifest is valid JSON by construction");
        text.push('\n');
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_rejects_non_object() {
        assert_eq!(
            PackageManifest::parse("[1, 2]").unwrap_err(),
            DomainError::ManifestNotObject
        );
        assert!(matches!(
            PackageManifest::parse("{nope").unwrap_err(),
            DomainError::ManifestParse { .. }
        ));
    }

    #[test]
    fn fallbacks_fill_only_missing_fields() {
        let mut manifest = PackageManifest::parse(r#"{"name": "kept"}"#).unwrap();
        manifest.name_or("fallback");
        manifest.description_or("generated package");
        assert_eq!(manifest.name(), Some("kept"));
        assert_eq!(manifest.description(), Some("generated package"));
    }

    #[test]
    fn merge_unions_keywords_and_recurses_scripts() {
        let mut manifest = PackageManifest::new("pkg", "0.1.0", "d");
        manifest.add_keywords(&["cli"]);
        manifest.merge(&json!({
            "keywords": ["cli", "generator"],
            "scripts": {"build": "tsc"}
        }));
        manifest.add_scripts(&[("test", "jest")]);

        let out: Value = serde_json::from_str(&manifest.to_json_pretty()).unwrap();
        assert_eq!(out["keywords"], json!(["cli", "generator"]));
        assert_eq!(out["scripts"]["build"], "tsc");
        assert_eq!(out["scripts"]["test"], "jest");
    }

    #[test]
    fn add_entries_keeps_existing() {
        let mut manifest =
            PackageManifest::parse(r#"{"name": "pkg", "dependencies": {"left": "^1.0.0"}}"#)
                .unwrap();
        manifest.add_entries(
            "dependencies",
            &[("right".to_string(), "^2.0.0".to_string())],
        );
        assert!(manifest.has_entry("dependencies", "left"));
        assert!(manifest.has_entry("dependencies", "right"));
        assert!(!manifest.has_entry("devDependencies", "left"));
    }

    #[test]
    fn serialization_orders_conventional_keys_first() {
        let mut manifest = PackageManifest::parse(
            r#"{"zeta": 1, "version": "0.1.0", "scripts": {}, "name": "pkg"}"#,
        )
        .unwrap();
        manifest.add_keywords(&["x"]);
        let text = manifest.to_json_pretty();

        let name_at = text.find("\"name\"").unwrap();
        let version_at = text.find("\"version\"").unwrap();
        let scripts_at = text.find("\"scripts\"").unwrap();
        let zeta_at = text.find("\"zeta\"").unwrap();
        assert!(name_at < version_at);
        assert!(version_at < scripts_at);
        assert!(scripts_at < zeta_at, "unknown keys go last");
        assert!(text.ends_with('\n'));
    }
}
