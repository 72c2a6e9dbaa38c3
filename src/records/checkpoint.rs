//! Black Ops 6 campaign checkpoint records.

use super::{BLACK_OPS_6_TITLE, ColumnSpec, ExportRecord, FieldKind, FieldMap, FieldValue};
use crate::document::SectionLocator;
use crate::error::Result;
use crate::models::Dataset;
use chrono::{DateTime, Utc};

/// One completed checkpoint of a campaign level.
#[derive(Debug, Clone, PartialEq)]
pub struct CampaignCheckpoint {
    pub timestamp_utc: DateTime<Utc>,
    pub account_type: String,
    pub device_type: String,
    pub difficulty: String,
    pub level_name: String,
    pub checkpoint: String,
    /// Seconds spent reaching the checkpoint.
    pub checkpoint_duration: f64,
    pub deaths: i64,
    pub fails: i64,
}

const COLUMNS: &[ColumnSpec] = &[
    ColumnSpec::new("UTC Timestamp", "timestamp_utc", FieldKind::Timestamp),
    ColumnSpec::new("Account Type", "account_type", FieldKind::Text),
    ColumnSpec::new("Device Type", "device_type", FieldKind::Text),
    ColumnSpec::new("Difficulty", "difficulty", FieldKind::Text),
    ColumnSpec::new("Level Name", "level_name", FieldKind::Text),
    ColumnSpec::new("Checkpoint", "checkpoint", FieldKind::Text),
    ColumnSpec::new("Checkpoint Duration", "checkpoint_duration", FieldKind::Float),
    ColumnSpec::new("Deaths", "deaths", FieldKind::Integer),
    ColumnSpec::new("Fails", "fails", FieldKind::Integer),
];

impl ExportRecord for CampaignCheckpoint {
    const DATASET: Dataset = Dataset::CampaignCheckpoints;

    const SECTION: SectionLocator =
        SectionLocator::new(BLACK_OPS_6_TITLE, Some("Campaign Checkpoint Data"));

    const COLUMNS: &'static [ColumnSpec] = COLUMNS;

    fn from_fields(fields: &mut FieldMap) -> Result<Self> {
        Ok(Self {
            timestamp_utc: fields.timestamp("UTC Timestamp")?,
            account_type: fields.text("Account Type")?,
            device_type: fields.text("Device Type")?,
            difficulty: fields.text("Difficulty")?,
            level_name: fields.text("Level Name")?,
            checkpoint: fields.text("Checkpoint")?,
            checkpoint_duration: fields.float("Checkpoint Duration")?,
            deaths: fields.integer("Deaths")?,
            fails: fields.integer("Fails")?,
        })
    }

    fn to_values(&self) -> Vec<FieldValue> {
        vec![
            FieldValue::Timestamp(self.timestamp_utc),
            FieldValue::Text(self.account_type.clone()),
            FieldValue::Text(self.device_type.clone()),
            FieldValue::Text(self.difficulty.clone()),
            FieldValue::Text(self.level_name.clone()),
            FieldValue::Text(self.checkpoint.clone()),
            FieldValue::Float(self.checkpoint_duration),
            FieldValue::Integer(self.deaths),
            FieldValue::Integer(self.fails),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{ExportDocument, RawTable};
    use crate::error::ExportError;
    use crate::records::{parse_records, records_from_table, test_rows};
    use chrono::TimeZone;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    const EXAMPLE_ROW: [&str; 9] = [
        "2024-10-25 13:02:11",
        "Primary",
        "PC",
        "Hardened",
        "Nowhere",
        "Ambush",
        "42.5",
        "3",
        "7",
    ];

    #[test]
    fn test_example_row() {
        let table = RawTable {
            header: test_rows::header(COLUMNS),
            rows: vec![strings(&EXAMPLE_ROW)],
        };
        let records = records_from_table::<CampaignCheckpoint>(&table).unwrap();

        assert_eq!(records.len(), 1);
        let cp = &records[0];
        assert_eq!(cp.deaths, 3);
        assert_eq!(cp.fails, 7);
        assert_eq!(cp.checkpoint_duration, 42.5);
        assert_eq!(
            cp.timestamp_utc,
            Utc.with_ymd_and_hms(2024, 10, 25, 13, 2, 11).unwrap()
        );
        assert_eq!(cp.account_type, "Primary");
        assert_eq!(cp.device_type, "PC");
        assert_eq!(cp.difficulty, "Hardened");
        assert_eq!(cp.level_name, "Nowhere");
        assert_eq!(cp.checkpoint, "Ambush");
    }

    #[test]
    fn test_reordered_columns_map_by_name() {
        let mut header = test_rows::header(COLUMNS);
        let mut row = strings(&EXAMPLE_ROW);
        header.swap(7, 8);
        row.swap(7, 8);

        let table = RawTable {
            header,
            rows: vec![row],
        };
        let records = records_from_table::<CampaignCheckpoint>(&table).unwrap();
        assert_eq!(records[0].deaths, 3);
        assert_eq!(records[0].fails, 7);
    }

    #[test]
    fn test_malformed_integer_fails_whole_table() {
        let mut bad = strings(&EXAMPLE_ROW);
        bad[7] = "abc".to_string();
        let table = RawTable {
            header: test_rows::header(COLUMNS),
            rows: vec![strings(&EXAMPLE_ROW), bad],
        };

        let err = records_from_table::<CampaignCheckpoint>(&table).unwrap_err();
        assert!(err.is_format());
        assert!(matches!(err, ExportError::InvalidField { row: 2, ref column, .. } if column == "Deaths"));
    }

    #[test]
    fn test_short_row_fails() {
        let table = RawTable {
            header: test_rows::header(COLUMNS),
            rows: vec![strings(&EXAMPLE_ROW[..8])],
        };
        let err = records_from_table::<CampaignCheckpoint>(&table).unwrap_err();
        assert!(matches!(err, ExportError::MissingCell { row: 1, .. }));
    }

    #[test]
    fn test_values_follow_column_order() {
        let table = RawTable {
            header: test_rows::header(COLUMNS),
            rows: vec![strings(&EXAMPLE_ROW)],
        };
        let cp = records_from_table::<CampaignCheckpoint>(&table)
            .unwrap()
            .remove(0);
        let values = cp.to_values();

        assert_eq!(values.len(), COLUMNS.len());
        assert_eq!(values[6], FieldValue::Float(42.5));
        assert_eq!(values[8], FieldValue::Integer(7));
    }

    #[test]
    fn test_parse_records_from_document() {
        let rows: String = (0..3)
            .map(|seed| {
                let cells: String = test_rows::row(COLUMNS, seed)
                    .iter()
                    .map(|cell| format!("<td>{cell}</td>"))
                    .collect();
                format!("<tr>{cells}</tr>")
            })
            .collect();
        let header: String = COLUMNS
            .iter()
            .map(|spec| format!("<th>{}</th>", spec.header))
            .collect();
        let html = format!(
            "<h1>Call of Duty: Black Ops 6</h1>\
             <h2>Campaign Checkpoint Data (reverse chronological)</h2>\
             <table><tr>{header}</tr>{rows}</table>"
        );

        let records = parse_records::<CampaignCheckpoint>(&ExportDocument::parse(&html)).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].level_name, "level_name-0");
        assert_eq!(records[2].level_name, "level_name-2");
    }
}
