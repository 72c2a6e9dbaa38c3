//! Configuration for export conversions.
//!
//! Holds where output goes, which datasets are extracted and how the
//! writers encode them.

use crate::coercion::OUTPUT_TIMESTAMP_FORMAT;
use crate::error::{ExportError, Result};
use crate::models::Dataset;
use polars::prelude::ParquetCompression;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::debug;

/// Supported compression algorithms for parquet files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompressionAlgorithm {
    /// Snappy compression - good balance of speed and compression
    #[default]
    Snappy,
    /// ZSTD compression - better compression ratio, slower
    Zstd,
    /// LZ4 compression - fastest, lower compression ratio
    Lz4,
    /// No compression
    Uncompressed,
}

impl CompressionAlgorithm {
    /// Convert to polars ParquetCompression type
    pub fn to_polars_compression(&self) -> ParquetCompression {
        match self {
            CompressionAlgorithm::Snappy => ParquetCompression::Snappy,
            CompressionAlgorithm::Zstd => ParquetCompression::Zstd(None),
            CompressionAlgorithm::Lz4 => ParquetCompression::Lz4Raw,
            CompressionAlgorithm::Uncompressed => ParquetCompression::Uncompressed,
        }
    }
}

impl FromStr for CompressionAlgorithm {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "snappy" => Ok(CompressionAlgorithm::Snappy),
            "zstd" => Ok(CompressionAlgorithm::Zstd),
            "lz4" => Ok(CompressionAlgorithm::Lz4),
            "none" | "uncompressed" => Ok(CompressionAlgorithm::Uncompressed),
            other => Err(ExportError::configuration(format!(
                "Unknown compression '{}' (expected snappy, zstd, lz4 or none)",
                other
            ))),
        }
    }
}

/// Settings for converting one export file.
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Directory receiving CSV files, if CSV output is wanted
    pub csv_dir: Option<PathBuf>,

    /// Directory receiving Parquet files, if Parquet output is wanted
    pub parquet_dir: Option<PathBuf>,

    /// Datasets to extract, in processing order
    pub datasets: Vec<Dataset>,

    /// Parquet compression
    pub compression: CompressionAlgorithm,

    /// chrono format used for timestamps in CSV output
    pub csv_timestamp_format: String,

    /// Create missing output directories
    pub create_dirs: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            csv_dir: None,
            parquet_dir: None,
            datasets: Dataset::ALL.to_vec(),
            compression: CompressionAlgorithm::default(),
            csv_timestamp_format: OUTPUT_TIMESTAMP_FORMAT.to_string(),
            create_dirs: true,
        }
    }
}

impl ExportConfig {
    /// Write CSV files into `dir`
    pub fn with_csv_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.csv_dir = Some(dir.into());
        self
    }

    /// Write Parquet files into `dir`
    pub fn with_parquet_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.parquet_dir = Some(dir.into());
        self
    }

    /// Restrict extraction to `datasets`
    pub fn with_datasets(mut self, datasets: Vec<Dataset>) -> Self {
        self.datasets = datasets;
        self
    }

    pub fn with_compression(mut self, compression: CompressionAlgorithm) -> Self {
        self.compression = compression;
        self
    }

    /// Fail instead of creating missing output directories
    pub fn without_dir_creation(mut self) -> Self {
        self.create_dirs = false;
        self
    }

    /// Check the configuration describes a runnable conversion.
    pub fn validate(&self) -> Result<()> {
        if self.csv_dir.is_none() && self.parquet_dir.is_none() {
            return Err(ExportError::configuration(
                "No output requested: set a CSV and/or Parquet directory",
            ));
        }
        if self.datasets.is_empty() {
            return Err(ExportError::configuration("No datasets selected"));
        }
        if self.csv_timestamp_format.trim().is_empty() {
            return Err(ExportError::configuration(
                "CSV timestamp format must not be empty",
            ));
        }

        debug!("Validated configuration: {:?}", self);
        Ok(())
    }

    /// Selected datasets without repeats, keeping first-seen order.
    pub fn unique_datasets(&self) -> Vec<Dataset> {
        let mut unique = Vec::with_capacity(self.datasets.len());
        for dataset in &self.datasets {
            if !unique.contains(dataset) {
                unique.push(*dataset);
            }
        }
        unique
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_needs_output() {
        let config = ExportConfig::default();
        assert_eq!(config.datasets, Dataset::ALL.to_vec());
        assert_eq!(config.compression, CompressionAlgorithm::Snappy);
        assert_eq!(config.csv_timestamp_format, "%Y-%m-%d %H:%M:%S%:z");

        let err = config.validate().unwrap_err();
        assert!(matches!(err, ExportError::Configuration { .. }));
    }

    #[test]
    fn test_builder() {
        let config = ExportConfig::default()
            .with_csv_dir("out/csv")
            .with_datasets(vec![Dataset::MultiplayerMatches])
            .with_compression(CompressionAlgorithm::Zstd)
            .without_dir_creation();

        assert!(config.validate().is_ok());
        assert_eq!(config.csv_dir, Some(PathBuf::from("out/csv")));
        assert!(config.parquet_dir.is_none());
        assert!(!config.create_dirs);
    }

    #[test]
    fn test_empty_dataset_selection_rejected() {
        let config = ExportConfig::default()
            .with_parquet_dir("out")
            .with_datasets(vec![]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unique_datasets() {
        let config = ExportConfig::default().with_datasets(vec![
            Dataset::MultiplayerMatches,
            Dataset::CampaignCheckpoints,
            Dataset::MultiplayerMatches,
        ]);
        assert_eq!(
            config.unique_datasets(),
            vec![Dataset::MultiplayerMatches, Dataset::CampaignCheckpoints]
        );
    }

    #[test]
    fn test_compression_from_str() {
        assert_eq!(
            "ZSTD".parse::<CompressionAlgorithm>().unwrap(),
            CompressionAlgorithm::Zstd
        );
        assert_eq!(
            "none".parse::<CompressionAlgorithm>().unwrap(),
            CompressionAlgorithm::Uncompressed
        );
        assert!("brotli".parse::<CompressionAlgorithm>().is_err());
        assert!(matches!(
            CompressionAlgorithm::Lz4.to_polars_compression(),
            ParquetCompression::Lz4Raw
        ));
    }
}
