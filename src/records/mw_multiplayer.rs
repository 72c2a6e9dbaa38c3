//! Modern Warfare (2019) multiplayer matches.
//!
//! Far narrower than the Black Ops 6 match table: descriptors, a handful of
//! combat totals and the XP earned.

use super::{ColumnSpec, ExportRecord, FieldKind, FieldMap, FieldValue, MODERN_WARFARE_TITLE};
use crate::document::SectionLocator;
use crate::error::Result;
use crate::models::Dataset;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct ModernWarfareMatch {
    pub timestamp_utc: DateTime<Utc>,
    pub match_id: String,
    pub platform: String,
    pub game_type_screen_name: String,
    pub map_screen_name: String,
    pub rank: i64,
    pub score: i64,
    pub assists: i64,
    pub kills: i64,
    pub deaths: i64,
    pub headshots: i64,
    pub longest_streak: i64,
    pub total_xp_earned: i64,
}

const COLUMNS: &[ColumnSpec] = &[
    ColumnSpec::new("UTC Timestamp", "timestamp_utc", FieldKind::Timestamp),
    ColumnSpec::new("Match ID", "match_id", FieldKind::Text),
    ColumnSpec::new("Platform", "platform", FieldKind::Text),
    ColumnSpec::new("Game Type Screen Name", "game_type_screen_name", FieldKind::Text),
    ColumnSpec::new("Map Screen Name", "map_screen_name", FieldKind::Text),
    ColumnSpec::new("Rank", "rank", FieldKind::Integer),
    ColumnSpec::new("Score", "score", FieldKind::Integer),
    ColumnSpec::new("Assists", "assists", FieldKind::Integer),
    ColumnSpec::new("Kills", "kills", FieldKind::Integer),
    ColumnSpec::new("Deaths", "deaths", FieldKind::Integer),
    ColumnSpec::new("Headshots", "headshots", FieldKind::Integer),
    ColumnSpec::new("Longest Streak", "longest_streak", FieldKind::Integer),
    ColumnSpec::new("Total XP Earned", "total_xp_earned", FieldKind::Integer),
];

impl ExportRecord for ModernWarfareMatch {
    const DATASET: Dataset = Dataset::ModernWarfareMatches;

    const SECTION: SectionLocator = SectionLocator::new(
        MODERN_WARFARE_TITLE,
        Some("Multiplayer Match Data (reverse chronological)"),
    );

    const COLUMNS: &'static [ColumnSpec] = COLUMNS;

    fn from_fields(fields: &mut FieldMap) -> Result<Self> {
        Ok(Self {
            timestamp_utc: fields.timestamp("UTC Timestamp")?,
            match_id: fields.text("Match ID")?,
            platform: fields.text("Platform")?,
            game_type_screen_name: fields.text("Game Type Screen Name")?,
            map_screen_name: fields.text("Map Screen Name")?,
            rank: fields.integer("Rank")?,
            score: fields.integer("Score")?,
            assists: fields.integer("Assists")?,
            kills: fields.integer("Kills")?,
            deaths: fields.integer("Deaths")?,
            headshots: fields.integer("Headshots")?,
            longest_streak: fields.integer("Longest Streak")?,
            total_xp_earned: fields.integer("Total XP Earned")?,
        })
    }

    fn to_values(&self) -> Vec<FieldValue> {
        vec![
            FieldValue::Timestamp(self.timestamp_utc),
            FieldValue::Text(self.match_id.clone()),
            FieldValue::Text(self.platform.clone()),
            FieldValue::Text(self.game_type_screen_name.clone()),
            FieldValue::Text(self.map_screen_name.clone()),
            FieldValue::Integer(self.rank),
            FieldValue::Integer(self.score),
            FieldValue::Integer(self.assists),
            FieldValue::Integer(self.kills),
            FieldValue::Integer(self.deaths),
            FieldValue::Integer(self.headshots),
            FieldValue::Integer(self.longest_streak),
            FieldValue::Integer(self.total_xp_earned),
        ]
    }
}
