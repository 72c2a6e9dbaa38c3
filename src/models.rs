//! Dataset identifiers and conversion statistics.

use clap::ValueEnum;
use std::fmt;
use std::path::PathBuf;

/// Data sections the converter knows how to extract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Dataset {
    /// Black Ops 6 campaign checkpoints
    #[value(name = "campaign")]
    CampaignCheckpoints,
    /// Black Ops 6 multiplayer matches
    #[value(name = "multiplayer")]
    MultiplayerMatches,
    /// Black Ops Cold War zombies events
    #[value(name = "cw-zombies")]
    ColdWarZombiesEvents,
    /// Modern Warfare campaign segments
    #[value(name = "mw-campaign")]
    ModernWarfareCampaignSegments,
    /// Modern Warfare co-op matches
    #[value(name = "mw-coop")]
    ModernWarfareCoopMatches,
    /// Modern Warfare multiplayer matches
    #[value(name = "mw-multiplayer")]
    ModernWarfareMatches,
}

impl Dataset {
    pub const ALL: [Dataset; 6] = [
        Dataset::CampaignCheckpoints,
        Dataset::MultiplayerMatches,
        Dataset::ColdWarZombiesEvents,
        Dataset::ModernWarfareCampaignSegments,
        Dataset::ModernWarfareCoopMatches,
        Dataset::ModernWarfareMatches,
    ];

    /// Output file name without extension.
    pub fn file_stem(&self) -> &'static str {
        match self {
            Dataset::CampaignCheckpoints => "black_ops_6_campaign_checkpoints",
            Dataset::MultiplayerMatches => "black_ops_6_multiplayer_matches",
            Dataset::ColdWarZombiesEvents => "cold_war_zombies_events",
            Dataset::ModernWarfareCampaignSegments => "modern_warfare_campaign_segments",
            Dataset::ModernWarfareCoopMatches => "modern_warfare_coop",
            Dataset::ModernWarfareMatches => "modern_warfare_multiplayer_matches",
        }
    }

    pub fn csv_file_name(&self) -> String {
        format!("{}.csv", self.file_stem())
    }

    pub fn parquet_file_name(&self) -> String {
        format!("{}.parquet", self.file_stem())
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Dataset::CampaignCheckpoints => "Black Ops 6 campaign checkpoints",
            Dataset::MultiplayerMatches => "Black Ops 6 multiplayer matches",
            Dataset::ColdWarZombiesEvents => "Cold War zombies events",
            Dataset::ModernWarfareCampaignSegments => "Modern Warfare campaign segments",
            Dataset::ModernWarfareCoopMatches => "Modern Warfare co-op matches",
            Dataset::ModernWarfareMatches => "Modern Warfare multiplayer matches",
        };
        f.write_str(name)
    }
}

/// Outcome of one file conversion.
#[derive(Debug, Default)]
pub struct ConversionStats {
    pub input_path: PathBuf,
    /// Records parsed per dataset, in [`Dataset::ALL`] order.
    pub records: Vec<(Dataset, usize)>,
    pub files_written: Vec<PathBuf>,
    pub processing_time_ms: u128,
}

impl ConversionStats {
    pub fn total_records(&self) -> usize {
        self.records.iter().map(|(_, count)| count).sum()
    }

    pub fn records_for(&self, dataset: Dataset) -> Option<usize> {
        self.records
            .iter()
            .find(|(d, _)| *d == dataset)
            .map(|(_, count)| *count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_names() {
        assert_eq!(
            Dataset::CampaignCheckpoints.csv_file_name(),
            "black_ops_6_campaign_checkpoints.csv"
        );
        assert_eq!(
            Dataset::MultiplayerMatches.parquet_file_name(),
            "black_ops_6_multiplayer_matches.parquet"
        );
        assert_eq!(
            Dataset::ModernWarfareCoopMatches.csv_file_name(),
            "modern_warfare_coop.csv"
        );
    }

    #[test]
    fn test_file_stems_are_distinct() {
        let mut stems: Vec<&str> = Dataset::ALL.iter().map(Dataset::file_stem).collect();
        stems.sort_unstable();
        stems.dedup();
        assert_eq!(stems.len(), Dataset::ALL.len());
    }

    #[test]
    fn test_value_names() {
        let names: Vec<String> = Dataset::ALL
            .iter()
            .filter_map(|d| d.to_possible_value())
            .map(|v| v.get_name().to_string())
            .collect();
        assert_eq!(
            names,
            vec![
                "campaign",
                "multiplayer",
                "cw-zombies",
                "mw-campaign",
                "mw-coop",
                "mw-multiplayer"
            ]
        );
    }

    #[test]
    fn test_stats_totals() {
        let stats = ConversionStats {
            records: vec![
                (Dataset::CampaignCheckpoints, 4),
                (Dataset::MultiplayerMatches, 9),
            ],
            ..Default::default()
        };
        assert_eq!(stats.total_records(), 13);
        assert_eq!(stats.records_for(Dataset::MultiplayerMatches), Some(9));
    }
}
