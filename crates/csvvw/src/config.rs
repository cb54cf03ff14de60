//! Run configuration for transcoding.

use std::fs;
use std::path::Path;

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

use crate::error::{CsvVwError, Result};
use crate::schema::{FieldRole, FieldType, TypeMap};
use crate::transform::RenderMode;

/// What to do with a type override naming a column absent from the header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverridePolicy {
    /// Drop the override and report a warning.
    #[default]
    Warn,
    /// Abort the run before any output.
    Error,
}

/// Configuration for a transcoding run. Immutable once the run starts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranscodeConfig {
    /// Label column, in case this is a training file.
    pub label: Option<String>,
    /// Column types that replace the inferred ones.
    pub type_overrides: IndexMap<String, FieldType>,
    /// Column to namespace assignments.
    pub namespaces: IndexMap<String, String>,
    /// Columns excluded from output.
    pub ignore: IndexSet<String>,
    /// Bag-of-words rendering.
    pub bow: bool,
    /// One explicit namespace per string feature plus a `numeric` namespace.
    pub namespace_names: bool,
    /// Handling of overrides for unknown columns.
    pub override_policy: OverridePolicy,
}

impl TranscodeConfig {
    /// Create an empty configuration (default inline mode, no label).
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| CsvVwError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Set the label column.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Override the inferred type of a column.
    pub fn with_type_override(mut self, column: impl Into<String>, field_type: FieldType) -> Self {
        self.type_overrides.insert(column.into(), field_type);
        self
    }

    /// Assign a column to a namespace.
    pub fn with_namespace(mut self, column: impl Into<String>, namespace: impl Into<String>) -> Self {
        self.namespaces.insert(column.into(), namespace.into());
        self
    }

    /// Exclude a column from output.
    pub fn with_ignore(mut self, column: impl Into<String>) -> Self {
        self.ignore.insert(column.into());
        self
    }

    /// Enable or disable bag-of-words rendering.
    pub fn with_bow(mut self, bow: bool) -> Self {
        self.bow = bow;
        self
    }

    /// Enable or disable explicit namespace names.
    pub fn with_namespace_names(mut self, namespace_names: bool) -> Self {
        self.namespace_names = namespace_names;
        self
    }

    /// Set the unknown-override policy.
    pub fn with_override_policy(mut self, policy: OverridePolicy) -> Self {
        self.override_policy = policy;
        self
    }

    /// Whether `name` is the configured label column.
    pub fn is_label(&self, name: &str) -> bool {
        self.label.as_deref() == Some(name)
    }

    /// The rendering mode selected by the flags. `bow` wins over `namespace_names`.
    pub fn render_mode(&self) -> RenderMode {
        RenderMode::from_flags(self.bow, self.namespace_names)
    }

    /// Destination of a column given the final type map.
    ///
    /// Precedence: label, then ignore set, then namespace assignment, then type.
    pub fn role_of(&self, name: &str, types: &TypeMap) -> FieldRole {
        if self.is_label(name) {
            FieldRole::Label
        } else if self.ignore.contains(name) {
            FieldRole::Ignored
        } else if let Some(ns) = self.namespaces.get(name) {
            FieldRole::Namespace(ns.clone())
        } else if types.get(name) == Some(&FieldType::String) {
            FieldRole::String
        } else {
            FieldRole::Numeric
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn types() -> TypeMap {
        [
            ("a".to_string(), FieldType::String),
            ("b".to_string(), FieldType::Integer),
            ("label".to_string(), FieldType::Integer),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_role_precedence() {
        let config = TranscodeConfig::new()
            .with_label("label")
            .with_ignore("label")
            .with_namespace("a", "text")
            .with_ignore("b");

        let types = types();
        assert_eq!(config.role_of("label", &types), FieldRole::Label);
        assert_eq!(config.role_of("a", &types), FieldRole::Namespace("text".into()));
        assert_eq!(config.role_of("b", &types), FieldRole::Ignored);
    }

    #[test]
    fn test_role_by_type() {
        let config = TranscodeConfig::new();
        let types = types();
        assert_eq!(config.role_of("a", &types), FieldRole::String);
        assert_eq!(config.role_of("b", &types), FieldRole::Numeric);
    }

    #[test]
    fn test_render_mode_precedence() {
        let config = TranscodeConfig::new().with_bow(true).with_namespace_names(true);
        assert_eq!(config.render_mode(), RenderMode::BagOfWords { label_marker: false });

        let config = TranscodeConfig::new().with_namespace_names(true);
        assert_eq!(config.render_mode(), RenderMode::NamespaceNames);

        assert_eq!(TranscodeConfig::new().render_mode(), RenderMode::Inline);
    }

    #[test]
    fn test_load_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "label": "y",
                "type_overrides": {{"zip": "string"}},
                "namespaces": {{"title": "text"}},
                "ignore": ["id"],
                "bow": true,
                "override_policy": "error"
            }}"#
        )
        .unwrap();

        let config = TranscodeConfig::load(file.path()).unwrap();
        assert_eq!(config.label.as_deref(), Some("y"));
        assert_eq!(config.type_overrides.get("zip"), Some(&FieldType::String));
        assert_eq!(config.namespaces.get("title").map(String::as_str), Some("text"));
        assert!(config.ignore.contains("id"));
        assert!(config.bow);
        assert!(!config.namespace_names);
        assert_eq!(config.override_policy, OverridePolicy::Error);
    }

    #[test]
    fn test_load_missing_file() {
        let err = TranscodeConfig::load("/nonexistent/csvvw.json").unwrap_err();
        assert!(matches!(err, CsvVwError::Io { .. }));
    }
}
