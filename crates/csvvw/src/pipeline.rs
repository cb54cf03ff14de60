//! Row-by-row transcoding pipeline and public entry points.

use std::io::{Read, Write};
use std::iter::{Chain, Once};

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::config::{OverridePolicy, TranscodeConfig};
use crate::error::{CsvVwError, Result};
use crate::inference::TypeInferencer;
use crate::input::{Row, RowReader};
use crate::schema::{ColumnSchema, TableSchema};
use crate::transform::{ClassifiedRecord, LineFormatter, RecordClassifier};

/// Counts gathered while transcoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscodeSummary {
    /// Lines emitted (one per input row).
    pub rows: usize,
    /// Rows with non-empty label text.
    pub labelled_rows: usize,
    pub string_features: usize,
    pub numeric_features: usize,
    pub namespaced_features: usize,
}

impl TranscodeSummary {
    fn record(&mut self, record: &ClassifiedRecord<'_>) {
        self.rows += 1;
        if record.has_label() {
            self.labelled_rows += 1;
        }
        self.string_features += record.string_group.len();
        self.numeric_features += record.numeric_group.len();
        self.namespaced_features += record.namespaces.values().map(Vec::len).sum::<usize>();
    }
}

/// Outcome of [`transcode`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscodeReport {
    pub schema: TableSchema,
    pub summary: TranscodeSummary,
    pub warnings: Vec<String>,
}

/// Drives inference once, then classification and formatting per row.
#[derive(Debug, Clone, Default)]
pub struct TranscodePipeline {
    config: TranscodeConfig,
}

impl TranscodePipeline {
    pub fn new(config: TranscodeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TranscodeConfig {
        &self.config
    }

    /// Start a run over `rows` described by `header`.
    ///
    /// The first row seeds type inference and is then emitted as the first
    /// line. Fails before producing any output when there are no rows, the
    /// first row is malformed, or an unknown override is fatal under
    /// [`OverridePolicy::Error`].
    pub fn run<I>(self, header: Vec<String>, rows: I) -> Result<Transcoder<I::IntoIter>>
    where
        I: IntoIterator<Item = Result<Row>>,
    {
        let mut rows = rows.into_iter();
        let columns: Vec<String> = header
            .into_iter()
            .collect::<IndexSet<_>>()
            .into_iter()
            .collect();

        let sample = match rows.next() {
            Some(row) => row?,
            None => {
                return Err(CsvVwError::EmptyInput(
                    "no data rows to infer column types from".to_string(),
                ));
            }
        };
        check_row_shape(&sample, &columns, 0)?;

        let inferencer = TypeInferencer::with_overrides(self.config.type_overrides.clone());
        let unknown = inferencer.unknown_overrides(&columns);
        if self.config.override_policy == OverridePolicy::Error {
            if let Some(column) = unknown.first() {
                return Err(CsvVwError::UnknownTypeOverride {
                    column: column.to_string(),
                });
            }
        }
        let warnings = unknown
            .iter()
            .map(|column| format!("ignoring type override for unknown column '{column}'"))
            .collect();

        let detected = inferencer.detect(&sample);
        let types = inferencer.infer(&sample);

        let schema = TableSchema::with_columns(
            columns
                .iter()
                .enumerate()
                .filter_map(|(position, name)| {
                    Some(ColumnSchema {
                        name: name.clone(),
                        position,
                        inferred_type: *detected.get(name)?,
                        field_type: *types.get(name)?,
                        role: self.config.role_of(name, &types),
                    })
                })
                .collect(),
        );

        let formatter = LineFormatter::new(self.config.render_mode());
        let classifier = RecordClassifier::new(self.config, types);

        Ok(Transcoder {
            rows: std::iter::once(Ok(sample)).chain(rows),
            columns,
            classifier,
            formatter,
            schema,
            warnings,
            summary: TranscodeSummary::default(),
            finished: false,
        })
    }
}

fn check_row_shape(row: &Row, columns: &[String], index: usize) -> Result<()> {
    let found = columns.iter().filter(|c| row.contains_key(*c)).count();
    if found != columns.len() || row.len() != columns.len() {
        return Err(CsvVwError::MalformedRow {
            row: index,
            expected: columns.len(),
            found: row.len(),
        });
    }
    Ok(())
}

/// Lazy, single-pass sequence of output lines, one per input row.
///
/// Stops after the first error.
pub struct Transcoder<I> {
    rows: Chain<Once<Result<Row>>, I>,
    columns: Vec<String>,
    classifier: RecordClassifier,
    formatter: LineFormatter,
    schema: TableSchema,
    warnings: Vec<String>,
    summary: TranscodeSummary,
    finished: bool,
}

impl<I> Transcoder<I> {
    /// Final per-column types and destinations.
    pub fn schema(&self) -> &TableSchema {
        &self.schema
    }

    /// Non-fatal problems found while setting up the run.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Counts for the lines emitted so far.
    pub fn summary(&self) -> TranscodeSummary {
        self.summary
    }

    pub fn formatter(&self) -> &LineFormatter {
        &self.formatter
    }

    pub fn config(&self) -> &TranscodeConfig {
        self.classifier.config()
    }
}

impl<I> Iterator for Transcoder<I>
where
    I: Iterator<Item = Result<Row>>,
{
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let row = match self.rows.next()? {
            Ok(row) => row,
            Err(e) => {
                self.finished = true;
                return Some(Err(e));
            }
        };

        if let Err(e) = check_row_shape(&row, &self.columns, self.summary.rows) {
            self.finished = true;
            return Some(Err(e));
        }

        let record = self.classifier.classify(&row, &self.columns);
        self.summary.record(&record);
        Some(Ok(self.formatter.format(&record)))
    }
}

/// Transcode every row of `reader` into `output`, one line per row.
///
/// Lines written before an error are left in `output`.
pub fn transcode<R: Read, W: Write>(
    reader: RowReader<R>,
    mut output: W,
    config: TranscodeConfig,
) -> Result<TranscodeReport> {
    let header = reader.headers().to_vec();
    let mut lines = TranscodePipeline::new(config).run(header, reader)?;

    for line in lines.by_ref() {
        let line = line?;
        output.write_all(line.as_bytes()).map_err(CsvVwError::Write)?;
        output.write_all(b"\n").map_err(CsvVwError::Write)?;
    }
    output.flush().map_err(CsvVwError::Write)?;

    Ok(TranscodeReport {
        schema: lines.schema().clone(),
        summary: lines.summary(),
        warnings: lines.warnings().to_vec(),
    })
}
