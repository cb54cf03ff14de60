//! Schema command - show inferred types and output destinations.

use std::path::PathBuf;

use colored::Colorize;
use csvvw::{RowReader, TranscodePipeline};

use super::{ensure_exists, print_config, print_warnings, render_schema};
use crate::cli::TranscodeArgs;

pub fn run(
    input: PathBuf,
    json_output: bool,
    options: TranscodeArgs,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    ensure_exists(&input)?;
    let config = options.to_config()?;

    if verbose && !json_output {
        eprintln!(
            "{} {}",
            "Inspecting".cyan().bold(),
            input.display().to_string().white()
        );
        print_config(&config, &options.separator);
    }

    let reader = RowReader::open(&input, options.separator)?;
    let header = reader.headers().to_vec();
    let lines = TranscodePipeline::new(config).run(header, reader)?;

    print_warnings(lines.warnings());

    if json_output {
        let status = serde_json::json!({
            "file": input.display().to_string(),
            "mode": lines.formatter().mode(),
            "columns": lines.schema().columns,
            "warnings": lines.warnings(),
        });
        println!("{}", serde_json::to_string_pretty(&status)?);
    } else {
        print!("{}", render_schema(lines.schema()));
    }

    Ok(())
}
