//! Conversion engine.
//!
//! Reads one HTML export, parses every selected dataset into a
//! [`DataRequest`], and only then writes the CSV and Parquet outputs, so a
//! document that fails to parse leaves no files behind. Output directories
//! are all prepared before the first file is written, and files already
//! written are removed if a later one fails.

pub mod writer;

#[cfg(test)]
pub mod tests;

use self::writer::{OutputFormat, RecordWriter};

use crate::config::ExportConfig;
use crate::document::ExportDocument;
use crate::error::{ExportError, Result};
use crate::models::ConversionStats;
use crate::request::DataRequest;

use colored::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Converts one export file according to an [`ExportConfig`]
#[derive(Debug)]
pub struct ExportProcessor {
    input_path: PathBuf,
    config: ExportConfig,
    writer: RecordWriter,
    quiet: bool,
}

impl ExportProcessor {
    /// Create a processor for `input_path`; the file must exist and the
    /// configuration must be valid.
    pub fn new(input_path: PathBuf, config: ExportConfig) -> Result<Self> {
        if !input_path.is_file() {
            return Err(ExportError::InputNotFound { path: input_path });
        }
        config.validate()?;

        Ok(Self {
            writer: RecordWriter::new(&config),
            input_path,
            config,
            quiet: false,
        })
    }

    /// Suppress the console summary
    pub fn quiet(mut self) -> Self {
        self.quiet = true;
        self
    }

    /// Run the conversion
    pub fn process(&self) -> Result<ConversionStats> {
        let start_time = Instant::now();
        info!("Converting {}", self.input_path.display());

        let document = ExportDocument::from_path(&self.input_path)?;
        let datasets = self.config.unique_datasets();
        let request = DataRequest::from_document(&document, &datasets)?;
        debug!("Parsed datasets: {:?}", request.record_counts());

        let outputs = self.outputs();
        for (_, dir) in &outputs {
            self.prepare_dir(dir)?;
        }

        let mut files_written = Vec::new();
        for (format, dir) in &outputs {
            if let Err(error) = request.write(&self.writer, *format, dir, &mut files_written) {
                remove_written(&files_written);
                return Err(error);
            }
        }

        let stats = ConversionStats {
            input_path: self.input_path.clone(),
            records: request.record_counts(),
            files_written,
            processing_time_ms: start_time.elapsed().as_millis(),
        };

        if !self.quiet {
            print_summary(&stats);
        }
        Ok(stats)
    }

    /// Requested output directories, CSV first.
    fn outputs(&self) -> Vec<(OutputFormat, &Path)> {
        let csv = self
            .config
            .csv_dir
            .as_deref()
            .map(|dir| (OutputFormat::Csv, dir));
        let parquet = self
            .config
            .parquet_dir
            .as_deref()
            .map(|dir| (OutputFormat::Parquet, dir));
        csv.into_iter().chain(parquet).collect()
    }

    fn prepare_dir(&self, dir: &Path) -> Result<()> {
        if dir.is_dir() {
            return Ok(());
        }
        if !self.config.create_dirs {
            return Err(ExportError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("output directory {} does not exist", dir.display()),
            )));
        }
        debug!("Creating output directory {}", dir.display());
        fs::create_dir_all(dir)?;
        Ok(())
    }
}

/// Best-effort removal of the outputs of a failed conversion.
fn remove_written(paths: &[PathBuf]) {
    for path in paths {
        match fs::remove_file(path) {
            Ok(()) => debug!("Removed {}", path.display()),
            Err(e) => warn!("Could not remove {}: {}", path.display(), e),
        }
    }
}

fn print_summary(stats: &ConversionStats) {
    println!("\n{}", "Conversion Summary".bright_green().bold());
    println!(
        "  {} {}",
        "Input:".bright_cyan(),
        stats.input_path.display()
    );
    for (dataset, count) in &stats.records {
        println!(
            "  {} {}",
            format!("{}:", dataset).bright_cyan(),
            count.to_string().bright_white().bold()
        );
    }
    for path in &stats.files_written {
        println!("  {} {}", "Wrote".bright_green(), path.display());
    }
    println!(
        "  {} {}ms",
        "Time elapsed:".bright_cyan(),
        stats.processing_time_ms.to_string().bright_white()
    );
}
