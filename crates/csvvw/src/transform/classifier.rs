//! Assigns each column of a row to the label or a feature group.

use crate::config::TranscodeConfig;
use crate::input::Row;
use crate::schema::{FieldType, TypeMap};

use super::record::{ClassifiedRecord, Feature};

/// Label text for a zero-valued integer label.
const NEGATIVE_LABEL: &str = "-1";
/// Label text for any other integer label.
const POSITIVE_LABEL: &str = "1";

/// Map an integer label onto the -1/1 convention of binary classifiers.
pub fn binarize_label(value: &str) -> &'static str {
    if value == "0" || matches!(value.trim().parse::<i64>(), Ok(0)) {
        NEGATIVE_LABEL
    } else {
        POSITIVE_LABEL
    }
}

/// Splits rows into [`ClassifiedRecord`]s using a fixed type map and config.
#[derive(Debug, Clone)]
pub struct RecordClassifier {
    config: TranscodeConfig,
    types: TypeMap,
}

impl RecordClassifier {
    pub fn new(config: TranscodeConfig, types: TypeMap) -> Self {
        Self { config, types }
    }

    pub fn config(&self) -> &TranscodeConfig {
        &self.config
    }

    pub fn types(&self) -> &TypeMap {
        &self.types
    }

    /// Whether the label column is integer typed and gets binarized.
    pub fn binarizes_label(&self) -> bool {
        self.config
            .label
            .as_ref()
            .and_then(|label| self.types.get(label))
            == Some(&FieldType::Integer)
    }

    /// Classify `row`, visiting columns in `columns` order.
    ///
    /// Follows the same precedence as [`TranscodeConfig::role_of`]. Columns
    /// missing from the row are read as empty strings.
    pub fn classify<'a>(&'a self, row: &'a Row, columns: &'a [String]) -> ClassifiedRecord<'a> {
        let mut record = ClassifiedRecord::new();
        let binarize = self.binarizes_label();

        for name in columns {
            let value = row.get(name).map(String::as_str).unwrap_or_default();

            if self.config.is_label(name) {
                record.label = if binarize { binarize_label(value) } else { value };
                continue;
            }

            if self.config.ignore.contains(name) {
                continue;
            }

            let feature = Feature::new(name, value);
            if let Some(ns) = self.config.namespaces.get(name) {
                record.push_namespaced(ns, feature);
            } else if self.types.get(name) == Some(&FieldType::String) {
                record.string_group.push(feature);
            } else {
                record.numeric_group.push(feature);
            }
        }

        record
    }
}
