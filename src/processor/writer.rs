//! Tabular output for parsed records.
//!
//! Records are laid out column by column following their declared column
//! table, collected into a polars `DataFrame`, and written as CSV or
//! Parquet. Each file is written to a temporary file in the target
//! directory and renamed into place, so a failed write never leaves a
//! truncated table behind. Nothing is retried.

use crate::config::{CompressionAlgorithm, ExportConfig};
use crate::error::{ExportError, Result};
use crate::models::Dataset;
use crate::records::{ColumnSpec, ExportRecord, FieldKind, FieldValue};

use polars::prelude::{
    Column, CsvWriter, DataFrame, DataType, NamedFrom, ParquetWriter as PolarsParquetWriter,
    SerWriter, Series, TimeUnit, TimeZone,
};
use std::fmt;
use std::fs::File;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::debug;

/// Storage type of timestamp columns: UTC instants at millisecond precision.
pub fn timestamp_dtype() -> DataType {
    DataType::Datetime(TimeUnit::Milliseconds, Some(TimeZone::UTC))
}

/// Output table formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Csv,
    Parquet,
}

impl OutputFormat {
    pub fn file_name(&self, dataset: Dataset) -> String {
        match self {
            OutputFormat::Csv => dataset.csv_file_name(),
            OutputFormat::Parquet => dataset.parquet_file_name(),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Csv => write!(f, "CSV"),
            OutputFormat::Parquet => write!(f, "Parquet"),
        }
    }
}

/// Values of one output column.
enum ColumnBuffer {
    /// Milliseconds since the Unix epoch, UTC.
    Timestamp(Vec<i64>),
    Integer(Vec<i64>),
    Float(Vec<f64>),
    Text(Vec<String>),
}

impl ColumnBuffer {
    fn for_kind(kind: FieldKind, capacity: usize) -> Self {
        match kind {
            FieldKind::Timestamp => ColumnBuffer::Timestamp(Vec::with_capacity(capacity)),
            FieldKind::Integer => ColumnBuffer::Integer(Vec::with_capacity(capacity)),
            FieldKind::Float | FieldKind::Percentage => {
                ColumnBuffer::Float(Vec::with_capacity(capacity))
            }
            FieldKind::Text => ColumnBuffer::Text(Vec::with_capacity(capacity)),
        }
    }

    fn push(&mut self, spec: &ColumnSpec, value: FieldValue) -> Result<()> {
        match (self, value) {
            (ColumnBuffer::Timestamp(values), FieldValue::Timestamp(ts)) => {
                values.push(ts.timestamp_millis())
            }
            (ColumnBuffer::Integer(values), FieldValue::Integer(i)) => values.push(i),
            (ColumnBuffer::Float(values), FieldValue::Float(f)) => values.push(f),
            (ColumnBuffer::Text(values), FieldValue::Text(s)) => values.push(s),
            (_, other) => {
                return Err(ExportError::FieldUnavailable {
                    column: spec.name.to_string(),
                    reason: format!("value {other:?} does not match {:?}", spec.kind),
                });
            }
        }
        Ok(())
    }

    fn into_column(self, name: &str) -> Result<Column> {
        let series = match self {
            ColumnBuffer::Timestamp(millis) => {
                Series::new(name.into(), millis).cast(&timestamp_dtype())?
            }
            ColumnBuffer::Integer(values) => Series::new(name.into(), values),
            ColumnBuffer::Float(values) => Series::new(name.into(), values),
            ColumnBuffer::Text(values) => Series::new(name.into(), values),
        };
        Ok(Column::from(series))
    }
}

/// Convert records into a `DataFrame` with one column per declared field.
pub fn records_to_dataframe<R: ExportRecord>(records: &[R]) -> Result<DataFrame> {
    let mut buffers: Vec<ColumnBuffer> = R::COLUMNS
        .iter()
        .map(|spec| ColumnBuffer::for_kind(spec.kind, records.len()))
        .collect();

    for record in records {
        let values = record.to_values();
        if values.len() != R::COLUMNS.len() {
            return Err(ExportError::FieldUnavailable {
                column: "*".to_string(),
                reason: format!(
                    "record produced {} values for {} columns",
                    values.len(),
                    R::COLUMNS.len()
                ),
            });
        }
        for ((buffer, spec), value) in buffers.iter_mut().zip(R::COLUMNS).zip(values) {
            buffer.push(spec, value)?;
        }
    }

    let columns = buffers
        .into_iter()
        .zip(R::COLUMNS)
        .map(|(buffer, spec)| buffer.into_column(spec.name))
        .collect::<Result<Vec<_>>>()?;

    Ok(DataFrame::new(columns)?)
}

/// CSV and Parquet writer for record collections
#[derive(Debug, Clone)]
pub struct RecordWriter {
    compression: CompressionAlgorithm,
    timestamp_format: String,
}

impl RecordWriter {
    pub fn new(config: &ExportConfig) -> Self {
        Self {
            compression: config.compression,
            timestamp_format: config.csv_timestamp_format.clone(),
        }
    }

    /// Write records in `format`; returns rows written.
    pub fn write<R: ExportRecord>(
        &self,
        format: OutputFormat,
        records: &[R],
        path: &Path,
    ) -> Result<usize> {
        match format {
            OutputFormat::Csv => self.write_csv(records, path),
            OutputFormat::Parquet => self.write_parquet(records, path),
        }
    }

    /// Write records as CSV with a header line; returns rows written.
    pub fn write_csv<R: ExportRecord>(&self, records: &[R], path: &Path) -> Result<usize> {
        let mut df = records_to_dataframe(records)?;

        persist_atomically(path, |file| {
            CsvWriter::new(file)
                .include_header(true)
                .with_datetime_format(Some(self.timestamp_format.clone()))
                .finish(&mut df)?;
            Ok(())
        })?;

        debug!("Wrote {} CSV rows to {}", df.height(), path.display());
        Ok(df.height())
    }

    /// Write records as a Parquet file; returns rows written.
    pub fn write_parquet<R: ExportRecord>(&self, records: &[R], path: &Path) -> Result<usize> {
        let mut df = records_to_dataframe(records)?;

        persist_atomically(path, |file| {
            PolarsParquetWriter::new(file)
                .with_compression(self.compression.to_polars_compression())
                .finish(&mut df)?;
            Ok(())
        })?;

        debug!("Wrote {} Parquet rows to {}", df.height(), path.display());
        Ok(df.height())
    }
}

/// Run `write` against a temporary file beside `path`, then rename it over
/// `path`. The temporary file is removed if either step fails.
fn persist_atomically<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut File) -> Result<()>,
{
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp_file = NamedTempFile::new_in(dir)?;
    write(temp_file.as_file_mut())?;
    temp_file.as_file().sync_all()?;
    temp_file.persist(path).map_err(|err| err.error)?;
    Ok(())
}
