//! Error handling for export conversions.
//!
//! Every failure carries enough context (file, heading, row, column) to
//! locate the offending cell. Nothing is recovered inside the library: a
//! file either converts completely or not at all.

use crate::coercion::CoercionError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[error("Input file not found: {path}")]
    InputNotFound { path: PathBuf },

    #[error("No <h1> heading containing '{title}' found in document")]
    SectionNotFound { title: String },

    #[error("No <h2> heading containing '{subsection}' found under '{title}'")]
    SubsectionNotFound { title: String, subsection: String },

    #[error("No table follows heading '{heading}'")]
    TableNotFound { heading: String },

    #[error("Table under '{heading}' has no header row")]
    MissingHeaderRow { heading: String },

    #[error("Table under '{heading}' is missing column '{column}'")]
    MissingColumn { heading: String, column: String },

    #[error("Row {row} has {found} cells, column '{column}' expects position {position}")]
    MissingCell {
        row: usize,
        column: String,
        position: usize,
        found: usize,
    },

    #[error("Row {row}, column '{column}': {source}")]
    InvalidField {
        row: usize,
        column: String,
        #[source]
        source: CoercionError,
    },

    #[error("Field '{column}' unavailable while building record: {reason}")]
    FieldUnavailable { column: String, reason: String },

    #[error("Invalid selector '{selector}': {reason}")]
    Selector { selector: String, reason: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Broad classification of an [`ExportError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A cell's text does not match its type grammar.
    Format,
    /// The document does not have the expected heading/table/row shape.
    Structural,
    /// Reading the input or writing an output failed.
    Io,
    /// Invalid settings supplied by the caller.
    Configuration,
}

impl ExportError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ExportError::InvalidField { .. } => ErrorKind::Format,
            ExportError::SectionNotFound { .. }
            | ExportError::SubsectionNotFound { .. }
            | ExportError::TableNotFound { .. }
            | ExportError::MissingHeaderRow { .. }
            | ExportError::MissingColumn { .. }
            | ExportError::MissingCell { .. }
            | ExportError::FieldUnavailable { .. } => ErrorKind::Structural,
            ExportError::Io(_) | ExportError::InputNotFound { .. } | ExportError::Polars(_) => {
                ErrorKind::Io
            }
            ExportError::Selector { .. } | ExportError::Configuration { .. } => {
                ErrorKind::Configuration
            }
        }
    }

    pub fn is_format(&self) -> bool {
        self.kind() == ErrorKind::Format
    }

    pub fn is_structural(&self) -> bool {
        self.kind() == ErrorKind::Structural
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        ExportError::Configuration {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ExportError>;
