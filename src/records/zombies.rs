//! Black Ops Cold War zombies events.

use super::{BLACK_OPS_COLD_WAR_TITLE, ColumnSpec, ExportRecord, FieldKind, FieldMap, FieldValue};
use crate::document::SectionLocator;
use crate::error::Result;
use crate::models::Dataset;
use chrono::{DateTime, Utc};

/// One zombies game event: round reached, kills and progression.
#[derive(Debug, Clone, PartialEq)]
pub struct ColdWarZombiesEvent {
    pub timestamp_utc: DateTime<Utc>,
    pub device_type: String,
    pub deaths: i64,
    pub headshots: i64,
    pub kills: i64,
    pub operator: String,
    pub rank_at_start: i64,
    pub rank_at_end: i64,
    pub score: i64,
    pub suicides: i64,
    pub xp_at_start: i64,
    pub xp_at_end: i64,
    pub weapon: String,
    pub field_upgrade: String,
    pub round_number: i64,
    pub game_type: String,
    pub map: String,
}

const COLUMNS: &[ColumnSpec] = &[
    ColumnSpec::new("UTC Timestamp", "timestamp_utc", FieldKind::Timestamp),
    ColumnSpec::new("Device Type", "device_type", FieldKind::Text),
    ColumnSpec::new("Deaths", "deaths", FieldKind::Integer),
    ColumnSpec::new("Headshots", "headshots", FieldKind::Integer),
    ColumnSpec::new("Kills", "kills", FieldKind::Integer),
    ColumnSpec::new("Operator", "operator", FieldKind::Text),
    ColumnSpec::new("Rank At Start", "rank_at_start", FieldKind::Integer),
    ColumnSpec::new("Rank At End", "rank_at_end", FieldKind::Integer),
    ColumnSpec::new("Score", "score", FieldKind::Integer),
    ColumnSpec::new("Suicides", "suicides", FieldKind::Integer),
    ColumnSpec::new("XP At Start", "xp_at_start", FieldKind::Integer),
    ColumnSpec::new("XP At End", "xp_at_end", FieldKind::Integer),
    ColumnSpec::new("Weapon", "weapon", FieldKind::Text),
    ColumnSpec::new("Field Upgrade", "field_upgrade", FieldKind::Text),
    ColumnSpec::new("Round Number", "round_number", FieldKind::Integer),
    ColumnSpec::new("Game Type", "game_type", FieldKind::Text),
    ColumnSpec::new("Map", "map", FieldKind::Text),
];

impl ExportRecord for ColdWarZombiesEvent {
    const DATASET: Dataset = Dataset::ColdWarZombiesEvents;

    const SECTION: SectionLocator = SectionLocator::new(
        BLACK_OPS_COLD_WAR_TITLE,
        Some("Zombies Data (reverse chronological)"),
    );

    const COLUMNS: &'static [ColumnSpec] = COLUMNS;

    fn from_fields(fields: &mut FieldMap) -> Result<Self> {
        Ok(Self {
            timestamp_utc: fields.timestamp("UTC Timestamp")?,
            device_type: fields.text("Device Type")?,
            deaths: fields.integer("Deaths")?,
            headshots: fields.integer("Headshots")?,
            kills: fields.integer("Kills")?,
            operator: fields.text("Operator")?,
            rank_at_start: fields.integer("Rank At Start")?,
            rank_at_end: fields.integer("Rank At End")?,
            score: fields.integer("Score")?,
            suicides: fields.integer("Suicides")?,
            xp_at_start: fields.integer("XP At Start")?,
            xp_at_end: fields.integer("XP At End")?,
            weapon: fields.text("Weapon")?,
            field_upgrade: fields.text("Field Upgrade")?,
            round_number: fields.integer("Round Number")?,
            game_type: fields.text("Game Type")?,
            map: fields.text("Map")?,
        })
    }

    fn to_values(&self) -> Vec<FieldValue> {
        vec![
            FieldValue::Timestamp(self.timestamp_utc),
            FieldValue::Text(self.device_type.clone()),
            FieldValue::Integer(self.deaths),
            FieldValue::Integer(self.headshots),
            FieldValue::Integer(self.kills),
            FieldValue::Text(self.operator.clone()),
            FieldValue::Integer(self.rank_at_start),
            FieldValue::Integer(self.rank_at_end),
            FieldValue::Integer(self.score),
            FieldValue::Integer(self.suicides),
            FieldValue::Integer(self.xp_at_start),
            FieldValue::Integer(self.xp_at_end),
            FieldValue::Text(self.weapon.clone()),
            FieldValue::Text(self.field_upgrade.clone()),
            FieldValue::Integer(self.round_number),
            FieldValue::Text(self.game_type.clone()),
            FieldValue::Text(self.map.clone()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::ExportDocument;
    use crate::error::ExportError;
    use crate::records::{parse_records, test_rows};
    use chrono::TimeZone;

    #[test]
    fn test_parse_zombies_section() {
        let html = format!(
            "<h1>Call of Duty: Black Ops Cold War</h1>\
             <h2>Multiplayer Match Data (reverse chronological)</h2>\
             <table><tr><th>Match ID</th></tr></table>\
             <h2>Zombies Data (reverse chronological)</h2>\
             <table><tr>{}</tr><tr>{}</tr></table>",
            COLUMNS
                .iter()
                .map(|spec| format!("<th>{}</th>", spec.header))
                .collect::<String>(),
            [
                "2021-03-14 22:41:07", "PS5", "2", "31", "187", "Park", "41", "42", "18400",
                "0", "120500", "131000", "Krig 6", "Ring of Fire", "24", "Standard", "Firebase Z",
            ]
            .iter()
            .map(|cell| format!("<td>{cell}</td>"))
            .collect::<String>(),
        );

        let events = parse_records::<ColdWarZombiesEvent>(&ExportDocument::parse(&html)).unwrap();
        assert_eq!(events.len(), 1);

        let event = &events[0];
        assert_eq!(
            event.timestamp_utc,
            Utc.with_ymd_and_hms(2021, 3, 14, 22, 41, 7).unwrap()
        );
        assert_eq!(event.kills, 187);
        assert_eq!(event.xp_at_end - event.xp_at_start, 10_500);
        assert_eq!(event.field_upgrade, "Ring of Fire");
        assert_eq!(event.round_number, 24);
        assert_eq!(event.map, "Firebase Z");
    }

    #[test]
    fn test_missing_cold_war_title() {
        let html = format!(
            "<h1>Call of Duty: Black Ops 6</h1>{}",
            test_rows::record_section::<ColdWarZombiesEvent>(1)
        );
        let err = parse_records::<ColdWarZombiesEvent>(&ExportDocument::parse(&html)).unwrap_err();
        assert!(matches!(err, ExportError::SectionNotFound { .. }));
    }

    #[test]
    fn test_values_follow_column_order() {
        let document = ExportDocument::parse(&test_rows::export_html(0, 0));
        let events = parse_records::<ColdWarZombiesEvent>(&document).unwrap();

        assert_eq!(events.len(), test_rows::OTHER_ROWS);
        let values = events[1].to_values();
        assert_eq!(values.len(), COLUMNS.len());
        assert_eq!(values[14], FieldValue::Integer(100 + 14 - 5));
        assert_eq!(values[16], FieldValue::Text("map-1".to_string()));
    }
}
