//! Schema types for representing inferred column types and roles.

mod column;
mod table;
mod types;

pub use column::ColumnSchema;
pub use table::TableSchema;
pub use types::{FieldRole, FieldType, TypeMap};
