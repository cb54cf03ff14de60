//! Column type inference from a sample row.

mod sample;

pub use sample::{TypeInferencer, detect_value_type};
