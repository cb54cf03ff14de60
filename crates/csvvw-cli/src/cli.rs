//! CLI argument definitions using clap.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use csvvw::{Delimiter, FieldType, OverridePolicy, TranscodeConfig};

/// csvvw: convert CSV files to Vowpal Wabbit format
#[derive(Parser)]
#[command(name = "csvvw")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a CSV file to Vowpal Wabbit format
    Convert {
        /// Path to input CSV file
        #[arg(value_name = "INPUT_FILE")]
        input: PathBuf,

        /// Path to output Vowpal Wabbit file (default: stdout)
        #[arg(value_name = "OUTPUT_FILE")]
        output: Option<PathBuf>,

        #[command(flatten)]
        options: TranscodeArgs,
    },

    /// Show the inferred column types and destinations
    Schema {
        /// Path to input CSV file
        #[arg(value_name = "INPUT_FILE")]
        input: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        options: TranscodeArgs,
    },
}

/// Options shared by every command that reads a CSV file.
#[derive(Args, Debug, Default)]
pub struct TranscodeArgs {
    /// Label column, in case this is a train file
    #[arg(short, long)]
    pub label: Option<String>,

    /// Field separator: a single character, "tab", or "auto"
    #[arg(short, long, default_value = ",")]
    pub separator: Delimiter,

    /// Assign a column to a namespace (repeatable)
    #[arg(
        short,
        long,
        num_args = 2,
        value_names = ["COLUMN", "NAMESPACE"],
        action = ArgAction::Append
    )]
    pub namespace: Vec<String>,

    /// Set a column type, overriding detection: int, float or str (repeatable)
    #[arg(
        short = 't',
        long = "type",
        num_args = 2,
        value_names = ["COLUMN", "TYPE"],
        action = ArgAction::Append
    )]
    pub types: Vec<String>,

    /// Use bag of words
    #[arg(short, long)]
    pub bow: bool,

    /// Ignore a column (repeatable)
    #[arg(short, long, value_name = "COLUMN", action = ArgAction::Append)]
    pub ignore: Vec<String>,

    /// Create a separate namespace for each string feature
    #[arg(short = 'N', long, alias = "namespacenames")]
    pub namespace_names: bool,

    /// JSON configuration file; command-line options take precedence
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Fail when a type override names a column missing from the header
    #[arg(long)]
    pub strict_overrides: bool,
}

impl TranscodeArgs {
    /// Build the run configuration from the config file and flags.
    pub fn to_config(&self) -> Result<TranscodeConfig, Box<dyn std::error::Error>> {
        let mut config = match self.config {
            Some(ref path) => TranscodeConfig::load(path)?,
            None => TranscodeConfig::new(),
        };

        if let Some(ref label) = self.label {
            config = config.with_label(label);
        }

        for pair in self.types.chunks(2) {
            if let [column, field_type] = pair {
                config = config.with_type_override(column, field_type.parse::<FieldType>()?);
            }
        }

        for pair in self.namespace.chunks(2) {
            if let [column, namespace] = pair {
                config = config.with_namespace(column, namespace);
            }
        }

        for column in &self.ignore {
            config = config.with_ignore(column);
        }

        if self.bow {
            config = config.with_bow(true);
        }
        if self.namespace_names {
            config = config.with_namespace_names(true);
        }
        if self.strict_overrides {
            config = config.with_override_policy(OverridePolicy::Error);
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).expect("arguments should parse")
    }

    fn options(cli: Cli) -> TranscodeArgs {
        match cli.command {
            Commands::Convert { options, .. } | Commands::Schema { options, .. } => options,
        }
    }

    #[test]
    fn test_convert_arguments() {
        let cli = parse(&[
            "csvvw", "convert", "in.csv", "out.vw", "-l", "y", "-n", "title", "text", "-n",
            "body", "text", "-t", "zip", "str", "-i", "id", "-b", "-v",
        ]);
        assert!(cli.verbose);

        let Commands::Convert { ref input, ref output, .. } = cli.command else {
            panic!("expected convert");
        };
        assert_eq!(input, &PathBuf::from("in.csv"));
        assert_eq!(output.as_deref(), Some(std::path::Path::new("out.vw")));

        let config = options(cli).to_config().unwrap();
        assert_eq!(config.label.as_deref(), Some("y"));
        assert_eq!(config.namespaces.len(), 2);
        assert_eq!(config.namespaces.get("body").map(String::as_str), Some("text"));
        assert_eq!(config.type_overrides.get("zip"), Some(&FieldType::String));
        assert!(config.ignore.contains("id"));
        assert!(config.bow);
        assert!(!config.namespace_names);
    }

    #[test]
    fn test_namespacenames_alias() {
        let cli = parse(&["csvvw", "convert", "in.csv", "--namespacenames"]);
        assert!(options(cli).to_config().unwrap().namespace_names);
    }

    #[test]
    fn test_separator_values() {
        let cli = parse(&["csvvw", "schema", "in.tsv", "-s", "tab"]);
        assert_eq!(options(cli).separator, Delimiter::Byte(b'\t'));

        let cli = parse(&["csvvw", "schema", "in.txt", "-s", "auto"]);
        assert_eq!(options(cli).separator, Delimiter::Auto);

        assert!(Cli::try_parse_from(["csvvw", "schema", "in.csv", "-s", "ab"]).is_err());
    }

    #[test]
    fn test_invalid_type_name() {
        let cli = parse(&["csvvw", "convert", "in.csv", "-t", "zip", "date"]);
        assert!(options(cli).to_config().is_err());
    }

    #[test]
    fn test_strict_overrides() {
        let cli = parse(&["csvvw", "convert", "in.csv", "--strict-overrides"]);
        assert_eq!(
            options(cli).to_config().unwrap().override_policy,
            OverridePolicy::Error
        );
    }
}
