//! Column-level schema definition.

use serde::{Deserialize, Serialize};

use super::types::{FieldRole, FieldType};

/// Resolved schema for a single column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSchema {
    /// Column name from the header.
    pub name: String,
    /// Zero-based position in the header.
    pub position: usize,
    /// Type inferred from the sample row.
    pub inferred_type: FieldType,
    /// Final type after user overrides.
    pub field_type: FieldType,
    /// Output destination of the column.
    pub role: FieldRole,
}

impl ColumnSchema {
    /// Whether a user override changed the inferred type.
    pub fn is_overridden(&self) -> bool {
        self.inferred_type != self.field_type
    }
}
