//! Streaming CSV reader yielding header-keyed rows.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use indexmap::IndexMap;

use super::delimiter::Delimiter;
use crate::error::{CsvVwError, Result};

/// One data row: column name to raw value, in header order.
pub type Row = IndexMap<String, String>;

/// Reads a delimited file row by row.
///
/// Rows whose field count differs from the header yield
/// [`CsvVwError::MalformedRow`]; the reader stops after the first error.
pub struct RowReader<R: Read> {
    reader: csv::Reader<R>,
    headers: Vec<String>,
    record: csv::StringRecord,
    next_row: usize,
    finished: bool,
}

impl RowReader<BufReader<File>> {
    /// Open a file, resolving an automatic delimiter from its first bytes.
    pub fn open(path: impl AsRef<Path>, delimiter: Delimiter) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| CsvVwError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut buffered = BufReader::new(file);
        let head = buffered.fill_buf().map_err(|e| CsvVwError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let delimiter = match delimiter {
            Delimiter::Auto if head.is_empty() => b',',
            other => other.resolve(head)?,
        };

        Self::from_reader(buffered, delimiter)
    }
}

impl<R: Read> RowReader<R> {
    /// Wrap any reader. The first record is taken as the header.
    pub fn from_reader(rdr: R, delimiter: u8) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(true)
            .flexible(true)
            .from_reader(rdr);

        let headers = reader.headers()?.iter().map(str::to_string).collect();

        Ok(Self {
            reader,
            headers,
            record: csv::StringRecord::new(),
            next_row: 0,
            finished: false,
        })
    }

    /// Column names from the header row.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Number of data rows read so far.
    pub fn rows_read(&self) -> usize {
        self.next_row
    }

    fn read_row(&mut self) -> Result<Option<Row>> {
        if !self.reader.read_record(&mut self.record)? {
            return Ok(None);
        }

        let row = self.next_row;
        self.next_row += 1;

        if self.record.len() != self.headers.len() {
            return Err(CsvVwError::MalformedRow {
                row,
                expected: self.headers.len(),
                found: self.record.len(),
            });
        }

        Ok(Some(
            self.headers
                .iter()
                .cloned()
                .zip(self.record.iter().map(str::to_string))
                .collect(),
        ))
    }
}

impl<R: Read> Iterator for RowReader<R> {
    type Item = Result<Row>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        match self.read_row() {
            Ok(Some(row)) => Some(Ok(row)),
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            }
        }
    }
}
