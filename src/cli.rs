//! Command-line interface components.

use crate::config::{CompressionAlgorithm, ExportConfig};
use crate::error::{ExportError, Result};
use crate::models::Dataset;
use clap::Parser;
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "cod-export")]
#[command(about = "Convert Call of Duty data-request HTML exports to CSV and Parquet")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// Path to the HTML export file
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Directory for CSV output
    #[arg(long, value_name = "DIR")]
    pub csv: Option<PathBuf>,

    /// Directory for Parquet output
    #[arg(long, value_name = "DIR")]
    pub parquet: Option<PathBuf>,

    /// Dataset to extract (repeatable; defaults to all six)
    #[arg(long = "dataset", value_enum)]
    pub datasets: Vec<Dataset>,

    /// Parquet compression algorithm (snappy, zstd, lz4, none)
    #[arg(long, default_value = "snappy")]
    pub compression: String,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Build the export configuration described by these arguments
    pub fn to_config(&self) -> Result<ExportConfig> {
        if self.csv.is_none() && self.parquet.is_none() {
            return Err(ExportError::configuration(
                "At least one of --csv or --parquet is required",
            ));
        }

        let compression: CompressionAlgorithm = self.compression.parse()?;
        let mut config = ExportConfig::default().with_compression(compression);
        if let Some(dir) = &self.csv {
            config = config.with_csv_dir(dir);
        }
        if let Some(dir) = &self.parquet {
            config = config.with_parquet_dir(dir);
        }
        if !self.datasets.is_empty() {
            config = config.with_datasets(self.datasets.clone());
        }

        config.validate()?;
        Ok(config)
    }

    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}

/// Set up structured logging on stderr; `RUST_LOG` overrides the level
pub fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.log_level();
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("cod_export={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    debug!("Logging initialized at level: {}", log_level);
}
