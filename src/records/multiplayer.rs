//! Black Ops 6 multiplayer match records.
//!
//! A match row carries the match descriptors, per-match statistics, the XP
//! breakdown, rank/prestige progress and a snapshot of lifetime totals.

use super::{BLACK_OPS_6_TITLE, ColumnSpec, ExportRecord, FieldKind, FieldMap, FieldValue};
use crate::document::SectionLocator;
use crate::error::Result;
use crate::models::Dataset;
use chrono::{DateTime, Utc};

/// Summary of one completed multiplayer match.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiplayerMatch {
    pub timestamp_utc: DateTime<Utc>,
    pub account_type: String,
    pub device_type: String,
    pub game_type: String,
    pub match_id: String,
    pub match_start_timestamp: DateTime<Utc>,
    pub match_end_timestamp: DateTime<Utc>,
    pub map: String,
    pub team: String,
    pub match_outcome: String,
    pub operator: String,
    pub operator_skin: String,
    pub execution: String,
    /// Skill rating reported for the match.
    pub skill: i64,
    pub score: i64,
    pub shots: i64,
    pub hits: i64,
    pub assists: i64,
    pub longest_streak: i64,
    pub kills: i64,
    pub deaths: i64,
    pub headshots: i64,
    pub executions: i64,
    pub suicides: i64,
    pub damage_done: i64,
    pub damage_taken: i64,
    pub armor_collected: i64,
    pub armor_equipped: i64,
    pub armor_destroyed: i64,
    pub ground_vehicles_used: i64,
    pub air_vehicles_used: i64,
    /// Share of the match spent moving, 0-100.
    pub percentage_time_moving: f64,
    pub total_xp: i64,
    pub score_xp: i64,
    pub challenge_xp: i64,
    pub match_xp: i64,
    pub medal_xp: i64,
    pub bonus_xp: i64,
    pub misc_xp: i64,
    pub accolade_xp: i64,
    pub weapon_xp: i64,
    pub operator_xp: i64,
    pub clan_xp: i64,
    pub battle_pass_xp: i64,
    pub rank_at_start: i64,
    pub rank_at_end: i64,
    pub xp_at_start: i64,
    pub xp_at_end: i64,
    pub score_at_start: i64,
    pub score_at_end: i64,
    pub prestige_at_start: i64,
    pub prestige_at_end: i64,
    pub lifetime_wallbangs: i64,
    pub lifetime_games_played: i64,
    /// Lifetime play time as reported by the export.
    pub lifetime_time_played: i64,
    pub lifetime_wins: i64,
    pub lifetime_losses: i64,
    pub lifetime_kills: i64,
    pub lifetime_deaths: i64,
    pub lifetime_hits: i64,
    pub lifetime_misses: i64,
    pub lifetime_near_misses: i64,
}

const COLUMNS: &[ColumnSpec] = &[
    ColumnSpec::new("UTC Timestamp", "timestamp_utc", FieldKind::Timestamp),
    ColumnSpec::new("Account Type", "account_type", FieldKind::Text),
    ColumnSpec::new("Device Type", "device_type", FieldKind::Text),
    ColumnSpec::new("Game Type", "game_type", FieldKind::Text),
    ColumnSpec::new("Match ID", "match_id", FieldKind::Text),
    ColumnSpec::new("Match Start Timestamp", "match_start_timestamp", FieldKind::Timestamp),
    ColumnSpec::new("Match End Timestamp", "match_end_timestamp", FieldKind::Timestamp),
    ColumnSpec::new("Map", "map", FieldKind::Text),
    ColumnSpec::new("Team", "team", FieldKind::Text),
    ColumnSpec::new("Match Outcome", "match_outcome", FieldKind::Text),
    ColumnSpec::new("Operator", "operator", FieldKind::Text),
    ColumnSpec::new("Operator Skin", "operator_skin", FieldKind::Text),
    ColumnSpec::new("Execution", "execution", FieldKind::Text),
    ColumnSpec::new("Skill", "skill", FieldKind::Integer),
    ColumnSpec::new("Score", "score", FieldKind::Integer),
    ColumnSpec::new("Shots", "shots", FieldKind::Integer),
    ColumnSpec::new("Hits", "hits", FieldKind::Integer),
    ColumnSpec::new("Assists", "assists", FieldKind::Integer),
    ColumnSpec::new("Longest Streak", "longest_streak", FieldKind::Integer),
    ColumnSpec::new("Kills", "kills", FieldKind::Integer),
    ColumnSpec::new("Deaths", "deaths", FieldKind::Integer),
    ColumnSpec::new("Headshots", "headshots", FieldKind::Integer),
    ColumnSpec::new("Executions", "executions", FieldKind::Integer),
    ColumnSpec::new("Suicides", "suicides", FieldKind::Integer),
    ColumnSpec::new("Damage Done", "damage_done", FieldKind::Integer),
    ColumnSpec::new("Damage Taken", "damage_taken", FieldKind::Integer),
    ColumnSpec::new("Armor Collected", "armor_collected", FieldKind::Integer),
    ColumnSpec::new("Armor Equipped", "armor_equipped", FieldKind::Integer),
    ColumnSpec::new("Armor Destroyed", "armor_destroyed", FieldKind::Integer),
    ColumnSpec::new("Ground Vehicles Used", "ground_vehicles_used", FieldKind::Integer),
    ColumnSpec::new("Air Vehicles Used", "air_vehicles_used", FieldKind::Integer),
    ColumnSpec::new("Percentage Of Time Moving", "percentage_time_moving", FieldKind::Percentage),
    ColumnSpec::new("Total XP", "total_xp", FieldKind::Integer),
    ColumnSpec::new("Score XP", "score_xp", FieldKind::Integer),
    ColumnSpec::new("Challenge XP", "challenge_xp", FieldKind::Integer),
    ColumnSpec::new("Match XP", "match_xp", FieldKind::Integer),
    ColumnSpec::new("Medal XP", "medal_xp", FieldKind::Integer),
    ColumnSpec::new("Bonus XP", "bonus_xp", FieldKind::Integer),
    ColumnSpec::new("Misc XP", "misc_xp", FieldKind::Integer),
    ColumnSpec::new("Accolade XP", "accolade_xp", FieldKind::Integer),
    ColumnSpec::new("Weapon XP", "weapon_xp", FieldKind::Integer),
    ColumnSpec::new("Operator XP", "operator_xp", FieldKind::Integer),
    ColumnSpec::new("Clan XP", "clan_xp", FieldKind::Integer),
    ColumnSpec::new("Battle Pass XP", "battle_pass_xp", FieldKind::Integer),
    ColumnSpec::new("Rank at Start", "rank_at_start", FieldKind::Integer),
    ColumnSpec::new("Rank at End", "rank_at_end", FieldKind::Integer),
    ColumnSpec::new("XP at Start", "xp_at_start", FieldKind::Integer),
    ColumnSpec::new("XP at End", "xp_at_end", FieldKind::Integer),
    ColumnSpec::new("Score at Start", "score_at_start", FieldKind::Integer),
    ColumnSpec::new("Score at End", "score_at_end", FieldKind::Integer),
    ColumnSpec::new("Prestige at Start", "prestige_at_start", FieldKind::Integer),
    ColumnSpec::new("Prestige at End", "prestige_at_end", FieldKind::Integer),
    ColumnSpec::new("Lifetime Wall Bangs", "lifetime_wallbangs", FieldKind::Integer),
    ColumnSpec::new("Lifetime Games Played", "lifetime_games_played", FieldKind::Integer),
    ColumnSpec::new("Lifetime Time Played", "lifetime_time_played", FieldKind::Integer),
    ColumnSpec::new("Lifetime Wins", "lifetime_wins", FieldKind::Integer),
    ColumnSpec::new("Lifetime Losses", "lifetime_losses", FieldKind::Integer),
    ColumnSpec::new("Lifetime Kills", "lifetime_kills", FieldKind::Integer),
    ColumnSpec::new("Lifetime Deaths", "lifetime_deaths", FieldKind::Integer),
    ColumnSpec::new("Lifetime Hits", "lifetime_hits", FieldKind::Integer),
    ColumnSpec::new("Lifetime Misses", "lifetime_misses", FieldKind::Integer),
    ColumnSpec::new("Lifetime Near Misses", "lifetime_near_misses", FieldKind::Integer),
];

impl ExportRecord for MultiplayerMatch {
    const DATASET: Dataset = Dataset::MultiplayerMatches;

    const SECTION: SectionLocator =
        SectionLocator::new(BLACK_OPS_6_TITLE, Some("Multiplayer Match Data"));

    const COLUMNS: &'static [ColumnSpec] = COLUMNS;

    fn from_fields(fields: &mut FieldMap) -> Result<Self> {
        Ok(Self {
            timestamp_utc: fields.timestamp("UTC Timestamp")?,
            account_type: fields.text("Account Type")?,
            device_type: fields.text("Device Type")?,
            game_type: fields.text("Game Type")?,
            match_id: fields.text("Match ID")?,
            match_start_timestamp: fields.timestamp("Match Start Timestamp")?,
            match_end_timestamp: fields.timestamp("Match End Timestamp")?,
            map: fields.text("Map")?,
            team: fields.text("Team")?,
            match_outcome: fields.text("Match Outcome")?,
            operator: fields.text("Operator")?,
            operator_skin: fields.text("Operator Skin")?,
            execution: fields.text("Execution")?,
            skill: fields.integer("Skill")?,
            score: fields.integer("Score")?,
            shots: fields.integer("Shots")?,
            hits: fields.integer("Hits")?,
            assists: fields.integer("Assists")?,
            longest_streak: fields.integer("Longest Streak")?,
            kills: fields.integer("Kills")?,
            deaths: fields.integer("Deaths")?,
            headshots: fields.integer("Headshots")?,
            executions: fields.integer("Executions")?,
            suicides: fields.integer("Suicides")?,
            damage_done: fields.integer("Damage Done")?,
            damage_taken: fields.integer("Damage Taken")?,
            armor_collected: fields.integer("Armor Collected")?,
            armor_equipped: fields.integer("Armor Equipped")?,
            armor_destroyed: fields.integer("Armor Destroyed")?,
            ground_vehicles_used: fields.integer("Ground Vehicles Used")?,
            air_vehicles_used: fields.integer("Air Vehicles Used")?,
            percentage_time_moving: fields.float("Percentage Of Time Moving")?,
            total_xp: fields.integer("Total XP")?,
            score_xp: fields.integer("Score XP")?,
            challenge_xp: fields.integer("Challenge XP")?,
            match_xp: fields.integer("Match XP")?,
            medal_xp: fields.integer("Medal XP")?,
            bonus_xp: fields.integer("Bonus XP")?,
            misc_xp: fields.integer("Misc XP")?,
            accolade_xp: fields.integer("Accolade XP")?,
            weapon_xp: fields.integer("Weapon XP")?,
            operator_xp: fields.integer("Operator XP")?,
            clan_xp: fields.integer("Clan XP")?,
            battle_pass_xp: fields.integer("Battle Pass XP")?,
            rank_at_start: fields.integer("Rank at Start")?,
            rank_at_end: fields.integer("Rank at End")?,
            xp_at_start: fields.integer("XP at Start")?,
            xp_at_end: fields.integer("XP at End")?,
            score_at_start: fields.integer("Score at Start")?,
            score_at_end: fields.integer("Score at End")?,
            prestige_at_start: fields.integer("Prestige at Start")?,
            prestige_at_end: fields.integer("Prestige at End")?,
            lifetime_wallbangs: fields.integer("Lifetime Wall Bangs")?,
            lifetime_games_played: fields.integer("Lifetime Games Played")?,
            lifetime_time_played: fields.integer("Lifetime Time Played")?,
            lifetime_wins: fields.integer("Lifetime Wins")?,
            lifetime_losses: fields.integer("Lifetime Losses")?,
            lifetime_kills: fields.integer("Lifetime Kills")?,
            lifetime_deaths: fields.integer("Lifetime Deaths")?,
            lifetime_hits: fields.integer("Lifetime Hits")?,
            lifetime_misses: fields.integer("Lifetime Misses")?,
            lifetime_near_misses: fields.integer("Lifetime Near Misses")?,
        })
    }

    fn to_values(&self) -> Vec<FieldValue> {
        vec![
            FieldValue::Timestamp(self.timestamp_utc),
            FieldValue::Text(self.account_type.clone()),
            FieldValue::Text(self.device_type.clone()),
            FieldValue::Text(self.game_type.clone()),
            FieldValue::Text(self.match_id.clone()),
            FieldValue::Timestamp(self.match_start_timestamp),
            FieldValue::Timestamp(self.match_end_timestamp),
            FieldValue::Text(self.map.clone()),
            FieldValue::Text(self.team.clone()),
            FieldValue::Text(self.match_outcome.clone()),
            FieldValue::Text(self.operator.clone()),
            FieldValue::Text(self.operator_skin.clone()),
            FieldValue::Text(self.execution.clone()),
            FieldValue::Integer(self.skill),
            FieldValue::Integer(self.score),
            FieldValue::Integer(self.shots),
            FieldValue::Integer(self.hits),
            FieldValue::Integer(self.assists),
            FieldValue::Integer(self.longest_streak),
            FieldValue::Integer(self.kills),
            FieldValue::Integer(self.deaths),
            FieldValue::Integer(self.headshots),
            FieldValue::Integer(self.executions),
            FieldValue::Integer(self.suicides),
            FieldValue::Integer(self.damage_done),
            FieldValue::Integer(self.damage_taken),
            FieldValue::Integer(self.armor_collected),
            FieldValue::Integer(self.armor_equipped),
            FieldValue::Integer(self.armor_destroyed),
            FieldValue::Integer(self.ground_vehicles_used),
            FieldValue::Integer(self.air_vehicles_used),
            FieldValue::Float(self.percentage_time_moving),
            FieldValue::Integer(self.total_xp),
            FieldValue::Integer(self.score_xp),
            FieldValue::Integer(self.challenge_xp),
            FieldValue::Integer(self.match_xp),
            FieldValue::Integer(self.medal_xp),
            FieldValue::Integer(self.bonus_xp),
            FieldValue::Integer(self.misc_xp),
            FieldValue::Integer(self.accolade_xp),
            FieldValue::Integer(self.weapon_xp),
            FieldValue::Integer(self.operator_xp),
            FieldValue::Integer(self.clan_xp),
            FieldValue::Integer(self.battle_pass_xp),
            FieldValue::Integer(self.rank_at_start),
            FieldValue::Integer(self.rank_at_end),
            FieldValue::Integer(self.xp_at_start),
            FieldValue::Integer(self.xp_at_end),
            FieldValue::Integer(self.score_at_start),
            FieldValue::Integer(self.score_at_end),
            FieldValue::Integer(self.prestige_at_start),
            FieldValue::Integer(self.prestige_at_end),
            FieldValue::Integer(self.lifetime_wallbangs),
            FieldValue::Integer(self.lifetime_games_played),
            FieldValue::Integer(self.lifetime_time_played),
            FieldValue::Integer(self.lifetime_wins),
            FieldValue::Integer(self.lifetime_losses),
            FieldValue::Integer(self.lifetime_kills),
            FieldValue::Integer(self.lifetime_deaths),
            FieldValue::Integer(self.lifetime_hits),
            FieldValue::Integer(self.lifetime_misses),
            FieldValue::Integer(self.lifetime_near_misses),
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

    fn position(header: &str) -> usize {
        COLUMNS.iter().position(|spec| spec.header == header).unwrap()
    }

    fn table(rows: Vec<Vec<String>>) -> RawTable {
        RawTable {
            header: test_rows::header(COLUMNS),
            rows,
        }
    }

    #[test]
    fn test_column_table_matches_record_width() {
        let record = records_from_table::<MultiplayerMatch>(&table(vec![test_rows::row(COLUMNS, 1)]))
            .unwrap()
            .remove(0);

        assert_eq!(COLUMNS.len(), 62);
        assert_eq!(record.to_values().len(), COLUMNS.len());

        // every declared column produces a value of its declared kind
        for (spec, value) in COLUMNS.iter().zip(record.to_values()) {
            let matches = matches!(
                (spec.kind, &value),
                (FieldKind::Timestamp, FieldValue::Timestamp(_))
                    | (FieldKind::Integer, FieldValue::Integer(_))
                    | (FieldKind::Float | FieldKind::Percentage, FieldValue::Float(_))
                    | (FieldKind::Text, FieldValue::Text(_))
            );
            assert!(matches, "column {} produced {:?}", spec.name, value);
        }
    }

    #[test]
    fn test_output_names_are_unique() {
        let mut names: Vec<_> = COLUMNS.iter().map(|spec| spec.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), COLUMNS.len());
    }

    #[test]
    fn test_record_built_from_parsed_fields() {
        let mut row = test_rows::row(COLUMNS, 0);
        row[position("Match ID")] = "1234567890".to_string();
        row[position("Match Start Timestamp")] = "2024-11-02 20:15:00".to_string();
        row[position("Match End Timestamp")] = "2024-11-02 20:25:30".to_string();
        row[position("Skill")] = "-120".to_string();
        row[position("Kills")] = "23".to_string();
        row[position("Percentage Of Time Moving")] = "87.5%".to_string();
        row[position("Lifetime Wall Bangs")] = "41".to_string();

        let record = records_from_table::<MultiplayerMatch>(&table(vec![row]))
            .unwrap()
            .remove(0);

        assert_eq!(record.match_id, "1234567890");
        assert_eq!(
            record.match_start_timestamp,
            Utc.with_ymd_and_hms(2024, 11, 2, 20, 15, 0).unwrap()
        );
        assert_eq!(
            (record.match_end_timestamp - record.match_start_timestamp).num_seconds(),
            630
        );
        assert_eq!(record.skill, -120);
        assert_eq!(record.kills, 23);
        assert_eq!(record.percentage_time_moving, 87.5);
        assert_eq!(record.lifetime_wallbangs, 41);
    }

    #[test]
    fn test_bad_match_timestamp_fails() {
        let mut row = test_rows::row(COLUMNS, 0);
        row[position("Match End Timestamp")] = "2024-11-02T20:25:30Z".to_string();

        let err = records_from_table::<MultiplayerMatch>(&table(vec![row])).unwrap_err();
        assert!(err.is_format());
        assert!(matches!(
            err,
            ExportError::InvalidField { ref column, .. } if column == "Match End Timestamp"
        ));
    }

    #[test]
    fn test_missing_lifetime_column_fails() {
        let mut header = test_rows::header(COLUMNS);
        header.retain(|name| name != "Lifetime Near Misses");
        let table = RawTable {
            header,
            rows: vec![test_rows::row(COLUMNS, 0)],
        };

        let err = records_from_table::<MultiplayerMatch>(&table).unwrap_err();
        assert!(matches!(err, ExportError::MissingColumn { .. }));
    }

    #[test]
    fn test_rows_kept_in_document_order() {
        let rows: String = (0..5)
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
             <table><tr><th>UTC Timestamp</th></tr></table>\
             <h2>Multiplayer Match Data (reverse chronological)</h2>\
             <table><thead><tr>{header}</tr></thead><tbody>{rows}</tbody></table>"
        );

        let records = parse_records::<MultiplayerMatch>(&ExportDocument::parse(&html)).unwrap();
        let ids: Vec<_> = records.iter().map(|m| m.match_id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["match_id-0", "match_id-1", "match_id-2", "match_id-3", "match_id-4"]
        );
    }
}
