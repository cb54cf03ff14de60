//! Convert command - transcode a CSV file into Vowpal Wabbit lines.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use colored::Colorize;
use csvvw::{RowReader, TranscodePipeline};

use super::{ensure_exists, print_config, print_warnings, render_schema};
use crate::cli::TranscodeArgs;

pub fn run(
    input: PathBuf,
    output: Option<PathBuf>,
    options: TranscodeArgs,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    ensure_exists(&input)?;
    let config = options.to_config()?;

    if verbose {
        let target = output
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "stdout".to_string());
        eprintln!(
            "{} {} -> {}",
            "Converting".cyan().bold(),
            input.display().to_string().white(),
            target.white()
        );
        print_config(&config, &options.separator);
    }

    let reader = RowReader::open(&input, options.separator)?;
    let header = reader.headers().to_vec();
    let mut lines = TranscodePipeline::new(config).run(header, reader)?;

    print_warnings(lines.warnings());
    if verbose {
        eprintln!();
        eprint!("{}", render_schema(lines.schema()));
    }

    let mut out: Box<dyn Write> = match output {
        Some(ref path) => Box::new(BufWriter::new(File::create(path).map_err(|e| {
            format!("Cannot create output file {}: {}", path.display(), e)
        })?)),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    for line in lines.by_ref() {
        let line = line?;
        out.write_all(line.as_bytes())?;
        out.write_all(b"\n")?;
    }
    out.flush()?;

    if verbose {
        let summary = lines.summary();
        eprintln!(
            "{} {} lines ({} string, {} numeric, {} namespaced features)",
            "Wrote".green().bold(),
            summary.rows.to_string().white().bold(),
            summary.string_features,
            summary.numeric_features,
            summary.namespaced_features
        );
    }

    Ok(())
}
