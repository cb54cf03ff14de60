//! Table-level schema definition.

use serde::{Deserialize, Serialize};

use super::column::ColumnSchema;
use super::types::{FieldRole, TypeMap};

/// Schema for an entire table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSchema {
    /// Schemas for each column, in header order.
    pub columns: Vec<ColumnSchema>,
}

impl TableSchema {
    /// Create a table schema with the given columns.
    pub fn with_columns(columns: Vec<ColumnSchema>) -> Self {
        Self { columns }
    }

    /// Get a column by name.
    pub fn get_column(&self, name: &str) -> Option<&ColumnSchema> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Final column types keyed by name.
    pub fn types(&self) -> TypeMap {
        self.columns
            .iter()
            .map(|c| (c.name.clone(), c.field_type))
            .collect()
    }

    /// Names of the columns with the given role.
    pub fn columns_with_role(&self, role: &FieldRole) -> Vec<&str> {
        self.columns
            .iter()
            .filter(|c| &c.role == role)
            .map(|c| c.name.as_str())
            .collect()
    }
}
