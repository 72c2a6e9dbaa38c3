//! Modern Warfare (2019) co-op (Spec Ops) matches.

use super::{ColumnSpec, ExportRecord, FieldKind, FieldMap, FieldValue, MODERN_WARFARE_TITLE};
use crate::document::SectionLocator;
use crate::error::Result;
use crate::models::Dataset;
use chrono::{DateTime, Utc};

/// Summary of one co-op match.
#[derive(Debug, Clone, PartialEq)]
pub struct ModernWarfareCoopMatch {
    pub timestamp_utc: DateTime<Utc>,
    pub platform: String,
    pub coop_level_screen_name: String,
    pub gametype_screen_name: String,
    pub active_objective: String,
    pub role_field_upgrade_used: String,
    pub munition_used: String,
    pub rank: i64,
    pub total_xp: i64,
    pub total_kills: i64,
    pub total_revives: i64,
    pub total_last_stands: i64,
    pub average_speed_during_match: f64,
}

const COLUMNS: &[ColumnSpec] = &[
    ColumnSpec::new("UTC Timestamp", "timestamp_utc", FieldKind::Timestamp),
    ColumnSpec::new("Platform", "platform", FieldKind::Text),
    ColumnSpec::new("CoOp Level Screen Name", "coop_level_screen_name", FieldKind::Text),
    ColumnSpec::new("Gametype Screen Name", "gametype_screen_name", FieldKind::Text),
    ColumnSpec::new("Active Objective", "active_objective", FieldKind::Text),
    ColumnSpec::new("Role Field Upgrade Used", "role_field_upgrade_used", FieldKind::Text),
    ColumnSpec::new("Munition Used", "munition_used", FieldKind::Text),
    ColumnSpec::new("Rank", "rank", FieldKind::Integer),
    ColumnSpec::new("Total XP", "total_xp", FieldKind::Integer),
    ColumnSpec::new("Total Kills", "total_kills", FieldKind::Integer),
    ColumnSpec::new("Total Revives", "total_revives", FieldKind::Integer),
    ColumnSpec::new("Total Last Stands", "total_last_stands", FieldKind::Integer),
    ColumnSpec::new(
        "Average Speed During Match",
        "average_speed_during_match",
        FieldKind::Float,
    ),
];

impl ExportRecord for ModernWarfareCoopMatch {
    const DATASET: Dataset = Dataset::ModernWarfareCoopMatches;

    const SECTION: SectionLocator = SectionLocator::new(
        MODERN_WARFARE_TITLE,
        Some("CoOp Match Data (reverse chronological)"),
    );

    const COLUMNS: &'static [ColumnSpec] = COLUMNS;

    fn from_fields(fields: &mut FieldMap) -> Result<Self> {
        Ok(Self {
            timestamp_utc: fields.timestamp("UTC Timestamp")?,
            platform: fields.text("Platform")?,
            coop_level_screen_name: fields.text("CoOp Level Screen Name")?,
            gametype_screen_name: fields.text("Gametype Screen Name")?,
            active_objective: fields.text("Active Objective")?,
            role_field_upgrade_used: fields.text("Role Field Upgrade Used")?,
            munition_used: fields.text("Munition Used")?,
            rank: fields.integer("Rank")?,
            total_xp: fields.integer("Total XP")?,
            total_kills: fields.integer("Total Kills")?,
            total_revives: fields.integer("Total Revives")?,
            total_last_stands: fields.integer("Total Last Stands")?,
            average_speed_during_match: fields.float("Average Speed During Match")?,
        })
    }

    fn to_values(&self) -> Vec<FieldValue> {
        vec![
            FieldValue::Timestamp(self.timestamp_utc),
            FieldValue::Text(self.platform.clone()),
            FieldValue::Text(self.coop_level_screen_name.clone()),
            FieldValue::Text(self.gametype_screen_name.clone()),
            FieldValue::Text(self.active_objective.clone()),
            FieldValue::Text(self.role_field_upgrade_used.clone()),
            FieldValue::Text(self.munition_used.clone()),
            FieldValue::Integer(self.rank),
            FieldValue::Integer(self.total_xp),
            FieldValue::Integer(self.total_kills),
            FieldValue::Integer(self.total_revives),
            FieldValue::Integer(self.total_last_stands),
            FieldValue::Float(self.average_speed_during_match),
        ]
    }
}
