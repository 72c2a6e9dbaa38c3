//! Call of Duty Export Converter Library
//!
//! Converts the HTML pages of a Call of Duty data-request export into
//! strongly typed records and writes them as CSV and Parquet tables. Six
//! sections are understood: Black Ops 6 campaign checkpoints and
//! multiplayer matches, Black Ops Cold War zombies events, and Modern
//! Warfare campaign segments, co-op matches and multiplayer matches.
//!
//! This library provides tools for:
//! - Locating a game section and its table inside the export HTML
//! - Coercing cell text into timestamps, integers and floats
//! - Mapping table rows to records by header name
//! - Writing records through polars to CSV and Parquet

pub mod cli;
pub mod coercion;
pub mod config;
pub mod document;
pub mod error;
pub mod models;
pub mod processor;
pub mod records;
pub mod request;

pub use config::{CompressionAlgorithm, ExportConfig};
pub use document::{ExportDocument, SectionLocator};
pub use error::{ExportError, Result};
pub use models::{ConversionStats, Dataset};
pub use processor::ExportProcessor;
pub use records::{
    CampaignCheckpoint, ColdWarZombiesEvent, ExportRecord, ModernWarfareCampaignSegment,
    ModernWarfareCoopMatch, ModernWarfareMatch, MultiplayerMatch,
};
pub use request::DataRequest;
