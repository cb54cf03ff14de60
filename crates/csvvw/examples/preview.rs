//! Example: preview the first lines of a conversion in every mode.
//!
//! Usage:
//!   cargo run --example preview -- <file_path> [label_column]

use std::env;
use std::path::Path;

use csvvw::{Delimiter, RowReader, TranscodeConfig, TranscodePipeline};

const PREVIEW_LINES: usize = 5;

fn main() -> csvvw::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: cargo run --example preview -- <file_path> [label_column]");
        std::process::exit(1);
    }

    let path = Path::new(&args[1]);
    if !path.exists() {
        eprintln!("Error: File not found: {}", path.display());
        std::process::exit(1);
    }

    let modes = [
        ("inline", TranscodeConfig::new()),
        ("bag of words", TranscodeConfig::new().with_bow(true)),
        ("namespace names", TranscodeConfig::new().with_namespace_names(true)),
    ];

    for (name, mut config) in modes {
        if let Some(label) = args.get(2) {
            config = config.with_label(label);
        }

        let reader = RowReader::open(path, Delimiter::Auto)?;
        let header = reader.headers().to_vec();
        let lines = TranscodePipeline::new(config).run(header, reader)?;

        println!("## {name}");
        for line in lines.take(PREVIEW_LINES) {
            println!("  {}", line?);
        }
        println!();
    }

    Ok(())
}
