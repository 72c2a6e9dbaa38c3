//! Row-to-record mapping.
//!
//! Each record kind declares a constant, ordered column table naming the
//! export's header text, the output column name, and the field kind. The
//! header row of the section table is resolved against that table, each
//! declared cell is coerced by kind into a [`FieldMap`], and the record is
//! built from the map. Mapping is by header name, so column order in the
//! export does not matter.
//!
//! - [`checkpoint`] - Black Ops 6 campaign checkpoints
//! - [`multiplayer`] - Black Ops 6 multiplayer matches
//! - [`zombies`] - Black Ops Cold War zombies events
//! - [`mw_campaign`] - Modern Warfare campaign segments
//! - [`mw_coop`] - Modern Warfare co-op matches
//! - [`mw_multiplayer`] - Modern Warfare multiplayer matches

pub mod checkpoint;
pub mod multiplayer;
pub mod mw_campaign;
pub mod mw_coop;
pub mod mw_multiplayer;
pub mod zombies;

pub use checkpoint::CampaignCheckpoint;
pub use multiplayer::MultiplayerMatch;
pub use mw_campaign::ModernWarfareCampaignSegment;
pub use mw_coop::ModernWarfareCoopMatch;
pub use mw_multiplayer::ModernWarfareMatch;
pub use zombies::ColdWarZombiesEvent;

use crate::coercion::{self, CoercionError};
use crate::document::{ExportDocument, RawTable, SectionLocator};
use crate::error::{ExportError, Result};
use crate::models::Dataset;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use tracing::{debug, info};

/// Title heading shared by all Black Ops 6 sections of an export.
pub const BLACK_OPS_6_TITLE: &str = "Call of Duty: Black Ops 6";

pub const BLACK_OPS_COLD_WAR_TITLE: &str = "Call of Duty: Black Ops Cold War";

/// Modern Warfare (2019). Later titles reuse this text as a prefix.
pub const MODERN_WARFARE_TITLE: &str = "Call of Duty: Modern Warfare";

/// Declared type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Timestamp,
    Integer,
    Float,
    /// Float that may carry a trailing `%`.
    Percentage,
    Text,
}

impl FieldKind {
    /// Coerce trimmed cell text into a value of this kind.
    pub fn coerce(self, text: &str) -> std::result::Result<FieldValue, CoercionError> {
        Ok(match self {
            FieldKind::Timestamp => FieldValue::Timestamp(coercion::parse_utc_timestamp(text)?),
            FieldKind::Integer => FieldValue::Integer(coercion::parse_int(text)?),
            FieldKind::Float => FieldValue::Float(coercion::parse_float(text)?),
            FieldKind::Percentage => FieldValue::Float(coercion::parse_percentage(text)?),
            FieldKind::Text => FieldValue::Text(text.to_string()),
        })
    }
}

/// One entry of a record's column table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpec {
    /// Header text in the HTML export.
    pub header: &'static str,
    /// Snake-case column name in CSV/Parquet output.
    pub name: &'static str,
    pub kind: FieldKind,
}

impl ColumnSpec {
    pub const fn new(header: &'static str, name: &'static str, kind: FieldKind) -> Self {
        Self { header, name, kind }
    }
}

/// A coerced cell value.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Timestamp(DateTime<Utc>),
    Integer(i64),
    Float(f64),
    Text(String),
}

/// Coerced values of one row keyed by header text.
#[derive(Debug, Default)]
pub struct FieldMap {
    values: HashMap<&'static str, FieldValue>,
}

impl FieldMap {
    pub fn insert(&mut self, header: &'static str, value: FieldValue) {
        self.values.insert(header, value);
    }

    fn take(&mut self, header: &str) -> Result<FieldValue> {
        self.values
            .remove(header)
            .ok_or_else(|| ExportError::FieldUnavailable {
                column: header.to_string(),
                reason: "not present in row".to_string(),
            })
    }

    fn wrong_kind(header: &str, expected: &str, found: &FieldValue) -> ExportError {
        ExportError::FieldUnavailable {
            column: header.to_string(),
            reason: format!("expected {expected}, found {found:?}"),
        }
    }

    pub fn timestamp(&mut self, header: &str) -> Result<DateTime<Utc>> {
        match self.take(header)? {
            FieldValue::Timestamp(ts) => Ok(ts),
            other => Err(Self::wrong_kind(header, "timestamp", &other)),
        }
    }

    pub fn integer(&mut self, header: &str) -> Result<i64> {
        match self.take(header)? {
            FieldValue::Integer(i) => Ok(i),
            other => Err(Self::wrong_kind(header, "integer", &other)),
        }
    }

    pub fn float(&mut self, header: &str) -> Result<f64> {
        match self.take(header)? {
            FieldValue::Float(f) => Ok(f),
            other => Err(Self::wrong_kind(header, "float", &other)),
        }
    }

    pub fn text(&mut self, header: &str) -> Result<String> {
        match self.take(header)? {
            FieldValue::Text(s) => Ok(s),
            other => Err(Self::wrong_kind(header, "text", &other)),
        }
    }
}

/// A record kind that can be read from an export section and written
/// as a table row.
pub trait ExportRecord: Sized {
    const DATASET: Dataset;

    /// Where the record's table lives in the export.
    const SECTION: SectionLocator;

    /// Ordered column table; output columns follow this order.
    const COLUMNS: &'static [ColumnSpec];

    /// Build a record from one row's coerced values.
    fn from_fields(fields: &mut FieldMap) -> Result<Self>;

    /// Field values in [`ExportRecord::COLUMNS`] order.
    fn to_values(&self) -> Vec<FieldValue>;
}

/// Position of every declared column in a section table.
#[derive(Debug, Clone)]
pub struct ColumnLayout {
    columns: &'static [ColumnSpec],
    positions: Vec<usize>,
}

impl ColumnLayout {
    /// Resolve declared columns against the table's header row.
    pub fn resolve(
        columns: &'static [ColumnSpec],
        header: &[String],
        heading: &str,
    ) -> Result<Self> {
        let name_to_index: HashMap<&str, usize> = header
            .iter()
            .enumerate()
            .map(|(index, name)| (name.as_str(), index))
            .collect();

        let positions = columns
            .iter()
            .map(|spec| {
                name_to_index
                    .get(spec.header)
                    .copied()
                    .ok_or_else(|| ExportError::MissingColumn {
                        heading: heading.to_string(),
                        column: spec.header.to_string(),
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        let ignored: Vec<&str> = header
            .iter()
            .map(String::as_str)
            .filter(|name| !columns.iter().any(|spec| spec.header == *name))
            .collect();
        if !ignored.is_empty() {
            debug!("Ignoring undeclared columns under '{}': {:?}", heading, ignored);
        }

        Ok(Self { columns, positions })
    }

    /// Coerce one data row; `row` is 1-based for error messages.
    pub fn coerce_row(&self, row: usize, cells: &[String]) -> Result<FieldMap> {
        let mut fields = FieldMap::default();

        for (spec, &position) in self.columns.iter().zip(&self.positions) {
            let text = cells.get(position).ok_or_else(|| ExportError::MissingCell {
                row,
                column: spec.header.to_string(),
                position,
                found: cells.len(),
            })?;

            let value = spec
                .kind
                .coerce(text)
                .map_err(|source| ExportError::InvalidField {
                    row,
                    column: spec.header.to_string(),
                    source,
                })?;
            fields.insert(spec.header, value);
        }

        Ok(fields)
    }
}

/// Map every data row of an already extracted table into records.
pub fn records_from_table<R: ExportRecord>(table: &RawTable) -> Result<Vec<R>> {
    let heading = R::SECTION.heading();
    let layout = ColumnLayout::resolve(R::COLUMNS, &table.header, &heading)?;

    table
        .rows
        .iter()
        .enumerate()
        .map(|(index, cells)| {
            let mut fields = layout.coerce_row(index + 1, cells)?;
            R::from_fields(&mut fields)
        })
        .collect()
}

/// Locate the record kind's section in `document` and parse all rows.
pub fn parse_records<R: ExportRecord>(document: &ExportDocument) -> Result<Vec<R>> {
    let table = document.find_table(&R::SECTION)?;
    let records = records_from_table::<R>(&table)?;
    info!(
        "Parsed {} records from '{}'",
        records.len(),
        R::SECTION.heading()
    );
    Ok(records)
}

#[cfg(test)]
pub(crate) mod test_rows {
    //! Synthetic rows for any declared column table.

    use super::*;

    /// Rows given to every section other than the Black Ops 6 ones.
    pub const OTHER_ROWS: usize = 2;

    /// Header cells for `columns`, in declared order.
    pub fn header(columns: &[ColumnSpec]) -> Vec<String> {
        columns.iter().map(|spec| spec.header.to_string()).collect()
    }

    /// A valid row whose values vary with `seed`.
    pub fn row(columns: &[ColumnSpec], seed: usize) -> Vec<String> {
        columns
            .iter()
            .enumerate()
            .map(|(index, spec)| match spec.kind {
                FieldKind::Timestamp => format!("2024-10-{:02} 13:{:02}:11", 1 + seed % 28, index % 60),
                FieldKind::Integer => ((seed * 100 + index) as i64 - 5).to_string(),
                FieldKind::Float => format!("{}.25", seed + index),
                FieldKind::Percentage => format!("{}.5%", (seed + index) % 100),
                FieldKind::Text => format!("{}-{}", spec.name, seed),
            })
            .collect()
    }

    /// An `<h2>` subsection followed by a table of `rows` synthetic rows.
    pub fn section_html(subsection: &str, columns: &[ColumnSpec], rows: usize) -> String {
        let header: String = columns
            .iter()
            .map(|spec| format!("<th>{}</th>", spec.header))
            .collect();
        let body: String = (0..rows)
            .map(|seed| {
                let cells: String = row(columns, seed)
                    .iter()
                    .map(|cell| format!("<td>{cell}</td>"))
                    .collect();
                format!("<tr>{cells}</tr>")
            })
            .collect();
        format!("<h2>{subsection}</h2><table><tr>{header}</tr>{body}</table>")
    }

    /// The section of record kind `R` with `rows` synthetic rows.
    pub fn record_section<R: ExportRecord>(rows: usize) -> String {
        section_html(R::SECTION.subsection.unwrap_or_default(), R::COLUMNS, rows)
    }

    /// An export holding every known section. The Black Ops 6 sections get
    /// the given row counts, the rest [`OTHER_ROWS`] each.
    pub fn export_html(campaign_rows: usize, match_rows: usize) -> String {
        format!(
            "<html><body>\
             <h1>{BLACK_OPS_6_TITLE}</h1>{}{}\
             <h1>{BLACK_OPS_COLD_WAR_TITLE}</h1>{}\
             <h1>{MODERN_WARFARE_TITLE}</h1>{}{}{}\
             </body></html>",
            section_html(
                "Campaign Checkpoint Data",
                CampaignCheckpoint::COLUMNS,
                campaign_rows
            ),
            record_section::<MultiplayerMatch>(match_rows),
            record_section::<ColdWarZombiesEvent>(OTHER_ROWS),
            record_section::<ModernWarfareCampaignSegment>(OTHER_ROWS),
            record_section::<ModernWarfareCoopMatch>(OTHER_ROWS),
            record_section::<ModernWarfareMatch>(OTHER_ROWS),
        )
    }
}
