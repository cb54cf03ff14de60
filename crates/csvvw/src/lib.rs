//! csvvw: transcode CSV tables into Vowpal Wabbit input lines.
//!
//! Each input row becomes one line holding an optional label followed by
//! feature tokens grouped into namespaces. Column types are inferred once
//! from the first data row, then every row is classified into label, string,
//! numeric and named-namespace groups and rendered in one of three modes.
//!
//! # Example
//!
//! ```
//! use csvvw::{RowReader, TranscodeConfig, TranscodePipeline};
//!
//! let data = "a,b,label\nx,5,0\n";
//! let reader = RowReader::from_reader(data.as_bytes(), b',').unwrap();
//! let header = reader.headers().to_vec();
//!
//! let config = TranscodeConfig::new().with_label("label");
//! let lines: Vec<String> = TranscodePipeline::new(config)
//!     .run(header, reader)
//!     .unwrap()
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//!
//! assert_eq!(lines, vec!["-1 | a_x b:5"]);
//! ```

pub mod config;
pub mod error;
pub mod inference;
pub mod input;
pub mod schema;
pub mod transform;

mod pipeline;

pub use config::{OverridePolicy, TranscodeConfig};
pub use error::{CsvVwError, Result};
pub use inference::TypeInferencer;
pub use input::{Delimiter, Row, RowReader};
pub use pipeline::{
    TranscodePipeline, TranscodeReport, TranscodeSummary, Transcoder, transcode,
};
pub use schema::{ColumnSchema, FieldRole, FieldType, TableSchema, TypeMap};
pub use transform::{ClassifiedRecord, Feature, LineFormatter, RecordClassifier, RenderMode};
