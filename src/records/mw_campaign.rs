//! Modern Warfare (2019) campaign segments.

use super::{ColumnSpec, ExportRecord, FieldKind, FieldMap, FieldValue, MODERN_WARFARE_TITLE};
use crate::document::SectionLocator;
use crate::error::Result;
use crate::models::Dataset;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct ModernWarfareCampaignSegment {
    pub timestamp_utc: DateTime<Utc>,
    pub platform: String,
    pub campaign_screen_name: String,
    pub campaign_difficulty: String,
    /// Seconds taken to complete the segment.
    pub time_to_complete_campaign_segment: f64,
    pub deaths_during_campaign_segment: i64,
    pub fails_during_campaign_segment: i64,
}

const COLUMNS: &[ColumnSpec] = &[
    ColumnSpec::new("UTC Timestamp", "timestamp_utc", FieldKind::Timestamp),
    ColumnSpec::new("Platform", "platform", FieldKind::Text),
    ColumnSpec::new("Campaign Screen Name", "campaign_screen_name", FieldKind::Text),
    ColumnSpec::new("Campaign Difficulty", "campaign_difficulty", FieldKind::Text),
    ColumnSpec::new(
        "Time to Complete Campaign Segment",
        "time_to_complete_campaign_segment",
        FieldKind::Float,
    ),
    ColumnSpec::new(
        "Deaths During Campaign Segment",
        "deaths_during_campaign_segment",
        FieldKind::Integer,
    ),
    ColumnSpec::new(
        "Fails During Campaign Segment",
        "fails_during_campaign_segment",
        FieldKind::Integer,
    ),
];

impl ExportRecord for ModernWarfareCampaignSegment {
    const DATASET: Dataset = Dataset::ModernWarfareCampaignSegments;

    const SECTION: SectionLocator = SectionLocator::new(
        MODERN_WARFARE_TITLE,
        Some("Campaign Checkpoint Data (reverse chronological)"),
    );

    const COLUMNS: &'static [ColumnSpec] = COLUMNS;

    fn from_fields(fields: &mut FieldMap) -> Result<Self> {
        Ok(Self {
            timestamp_utc: fields.timestamp("UTC Timestamp")?,
            platform: fields.text("Platform")?,
            campaign_screen_name: fields.text("Campaign Screen Name")?,
            campaign_difficulty: fields.text("Campaign Difficulty")?,
            time_to_complete_campaign_segment: fields.float("Time to Complete Campaign Segment")?,
            deaths_during_campaign_segment: fields.integer("Deaths During Campaign Segment")?,
            fails_during_campaign_segment: fields.integer("Fails During Campaign Segment")?,
        })
    }

    fn to_values(&self) -> Vec<FieldValue> {
        vec![
            FieldValue::Timestamp(self.timestamp_utc),
            FieldValue::Text(self.platform.clone()),
            FieldValue::Text(self.campaign_screen_name.clone()),
            FieldValue::Text(self.campaign_difficulty.clone()),
            FieldValue::Float(self.time_to_complete_campaign_segment),
            FieldValue::Integer(self.deaths_during_campaign_segment),
            FieldValue::Integer(self.fails_during_campaign_segment),
        ]
    }
}
