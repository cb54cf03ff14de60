//! CLI command implementations.

pub mod convert;
pub mod schema;

use std::path::Path;

use colored::Colorize;
use csvvw::{Delimiter, TableSchema, TranscodeConfig};

/// Fail early with a readable message when the input file is missing.
fn ensure_exists(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if !path.exists() {
        return Err(format!("File not found: {}", path.display()).into());
    }
    Ok(())
}

fn print_warnings(warnings: &[String]) {
    for warning in warnings {
        eprintln!("{} {}", "Warning:".yellow().bold(), warning);
    }
}

/// Echo the effective options, one per line.
fn print_config(config: &TranscodeConfig, separator: &Delimiter) {
    let ignored: Vec<&str> = config.ignore.iter().map(String::as_str).collect();

    eprintln!("  {:18} {}", "Separator:", separator.to_string().white());
    eprintln!(
        "  {:18} {}",
        "Bag of Words?",
        if config.bow { "Yes" } else { "No" }
    );
    eprintln!("  {:18} {}", "Mode:", config.render_mode().name());
    eprintln!(
        "  {:18} {}",
        "Ignoring fields:",
        if ignored.is_empty() {
            "none".to_string()
        } else {
            ignored.join(", ")
        }
    );
    eprintln!(
        "  {:18} {}",
        "Label:",
        config.label.as_deref().unwrap_or("none")
    );
}

/// Column table: name, final type (with the inferred one when overridden), role.
fn render_schema(schema: &TableSchema) -> String {
    let mut out = format!("{}\n", "Schema:".yellow().bold());
    for col in &schema.columns {
        let field_type = if col.is_overridden() {
            format!("{} (was {})", col.field_type, col.inferred_type)
        } else {
            col.field_type.to_string()
        };
        out.push_str(&format!(
            "  {:20} {:18} {}\n",
            col.name,
            field_type,
            col.role.to_string().cyan()
        ));
    }
    out
}
