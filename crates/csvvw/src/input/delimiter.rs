//! Input field delimiter selection and detection.

use std::fmt;
use std::io::{BufRead, BufReader};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CsvVwError, Result};

/// Delimiters to try when auto-detecting.
const DELIMITERS: &[u8] = &[b'\t', b',', b';', b'|'];

/// Number of leading lines sampled for detection.
const SAMPLE_LINES: usize = 10;

/// Input field delimiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Delimiter {
    /// Detect from the first lines of input.
    Auto,
    /// A fixed single-byte delimiter.
    Byte(u8),
}

impl Default for Delimiter {
    fn default() -> Self {
        Delimiter::Byte(b',')
    }
}

impl Delimiter {
    /// Resolve to a concrete byte, sampling `head` when set to auto.
    pub fn resolve(&self, head: &[u8]) -> Result<u8> {
        match self {
            Delimiter::Byte(b) => Ok(*b),
            Delimiter::Auto => detect_delimiter(head),
        }
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Delimiter::Auto => f.write_str("auto"),
            Delimiter::Byte(b'\t') => f.write_str("tab"),
            Delimiter::Byte(b) => write!(f, "{}", *b as char),
        }
    }
}

impl FromStr for Delimiter {
    type Err = CsvVwError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "auto" => Ok(Delimiter::Auto),
            "tab" | "\\t" | "\t" => Ok(Delimiter::Byte(b'\t')),
            _ => match s.as_bytes() {
                [b] if b.is_ascii() && *b != b'"' && *b != b'\n' && *b != b'\r' => {
                    Ok(Delimiter::Byte(*b))
                }
                _ => Err(CsvVwError::InvalidDelimiter(s.to_string())),
            },
        }
    }
}

/// Detect the delimiter by analyzing the first few lines.
pub fn detect_delimiter(bytes: &[u8]) -> Result<u8> {
    let reader = BufReader::new(bytes);
    let lines: Vec<String> = reader
        .lines()
        .take(SAMPLE_LINES)
        .map_while(|l| l.ok())
        .filter(|l| !l.trim().is_empty())
        .collect();

    if lines.is_empty() {
        return Err(CsvVwError::EmptyInput("No lines to analyze".to_string()));
    }

    let mut best_delimiter = b',';
    let mut best_score = 0;

    for &delim in DELIMITERS {
        let counts: Vec<usize> = lines
            .iter()
            .map(|line| count_delimiter_in_line(line, delim))
            .collect();

        let first_count = match counts.first() {
            Some(&c) if c > 0 => c,
            _ => continue,
        };

        let consistent = counts.iter().all(|&c| c == first_count);
        let variance: f64 = if counts.len() > 1 {
            let mean = counts.iter().sum::<usize>() as f64 / counts.len() as f64;
            counts.iter().map(|&c| (c as f64 - mean).powi(2)).sum::<f64>() / counts.len() as f64
        } else {
            0.0
        };

        // Tab gets a slight bonus as it's less common in actual data
        let score = if consistent {
            first_count * 1000 + if delim == b'\t' { 100 } else { 0 }
        } else if variance < 1.0 {
            first_count * 100
        } else {
            first_count
        };

        if score > best_score {
            best_score = score;
            best_delimiter = delim;
        }
    }

    Ok(best_delimiter)
}

/// Count delimiter occurrences in a line, respecting quotes.
fn count_delimiter_in_line(line: &str, delimiter: u8) -> usize {
    let delim_char = delimiter as char;
    let mut count = 0;
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            c if c == delim_char && !in_quotes => count += 1,
            _ => {}
        }
    }

    count
}
