//! Input reading: delimiter handling and header-keyed rows.

mod delimiter;
mod reader;

pub use delimiter::{Delimiter, detect_delimiter};
pub use reader::{Row, RowReader};
