//! Single-row type inference with user overrides.

use indexmap::IndexMap;

use crate::input::Row;
use crate::schema::{FieldType, TypeMap};

/// Detect the type of a single raw value: integer, then float, then string.
pub fn detect_value_type(value: &str) -> FieldType {
    let trimmed = value.trim();

    if trimmed.parse::<i64>().is_ok() {
        return FieldType::Integer;
    }

    if trimmed.parse::<f64>().is_ok() {
        return FieldType::Float;
    }

    FieldType::String
}

/// Infers column types from a sample row and applies user overrides.
#[derive(Debug, Clone, Default)]
pub struct TypeInferencer {
    overrides: IndexMap<String, FieldType>,
}

impl TypeInferencer {
    /// Create an inferencer with no overrides.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an inferencer whose overrides take precedence over detection.
    pub fn with_overrides(overrides: IndexMap<String, FieldType>) -> Self {
        Self { overrides }
    }

    /// Types detected from the sample alone, in sample order.
    pub fn detect(&self, sample: &Row) -> TypeMap {
        sample
            .iter()
            .map(|(name, value)| (name.clone(), detect_value_type(value)))
            .collect()
    }

    /// Final types: detected types with overrides applied.
    ///
    /// Overrides for columns absent from the sample are not added; see
    /// [`TypeInferencer::unknown_overrides`].
    pub fn infer(&self, sample: &Row) -> TypeMap {
        let mut types = self.detect(sample);
        for (name, field_type) in &self.overrides {
            if let Some(slot) = types.get_mut(name) {
                *slot = *field_type;
            }
        }
        types
    }

    /// Override column names that do not appear in `columns`.
    pub fn unknown_overrides<'a>(&'a self, columns: &[String]) -> Vec<&'a str> {
        self.overrides
            .keys()
            .filter(|name| !columns.contains(name))
            .map(String::as_str)
            .collect()
    }
}
