//! csvvw CLI - convert CSV files to Vowpal Wabbit format.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Convert {
            input,
            output,
            options,
        } => commands::convert::run(input, output, options, cli.verbose),

        Commands::Schema {
            input,
            json,
            options,
        } => commands::schema::run(input, json, options, cli.verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
