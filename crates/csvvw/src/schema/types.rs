//! Core type definitions for schema representation.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::CsvVwError;

/// Inferred value type for a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    /// Whole numbers (no decimal point).
    Integer,
    /// Floating-point numbers.
    Float,
    /// Text/string values.
    String,
}

impl FieldType {
    /// Returns true if this type is numeric.
    pub fn is_numeric(&self) -> bool {
        matches!(self, FieldType::Integer | FieldType::Float)
    }

    /// Short name used on the command line and in verbose output.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Integer => "int",
            FieldType::Float => "float",
            FieldType::String => "str",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldType {
    type Err = CsvVwError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "int" | "integer" => Ok(FieldType::Integer),
            "float" | "double" => Ok(FieldType::Float),
            "str" | "string" => Ok(FieldType::String),
            other => Err(CsvVwError::UnknownFieldType(other.to_string())),
        }
    }
}

/// Column name to field type, in header order.
pub type TypeMap = IndexMap<String, FieldType>;

/// Where a column's values end up in an output line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "role", content = "namespace", rename_all = "snake_case")]
pub enum FieldRole {
    /// The label column.
    Label,
    /// Excluded from output.
    Ignored,
    /// Assigned to a named namespace.
    Namespace(String),
    /// Rendered in the string group.
    String,
    /// Rendered in the numeric group.
    Numeric,
}

impl fmt::Display for FieldRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldRole::Label => f.write_str("label"),
            FieldRole::Ignored => f.write_str("ignored"),
            FieldRole::Namespace(ns) => write!(f, "namespace {ns}"),
            FieldRole::String => f.write_str("string"),
            FieldRole::Numeric => f.write_str("numeric"),
        }
    }
}
