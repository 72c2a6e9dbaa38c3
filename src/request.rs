//! Parsed contents of one data-request export.

use crate::document::ExportDocument;
use crate::error::Result;
use crate::models::Dataset;
use crate::processor::writer::{OutputFormat, RecordWriter};
use crate::records::{
    CampaignCheckpoint, ColdWarZombiesEvent, ExportRecord, ModernWarfareCampaignSegment,
    ModernWarfareCoopMatch, ModernWarfareMatch, MultiplayerMatch, parse_records,
};
use std::path::{Path, PathBuf};
use tracing::info;

/// Records extracted from an export, one collection per selected dataset.
///
/// Every selected dataset is parsed when the request is built, so a request
/// only exists for a document whose selected sections all parsed cleanly.
#[derive(Debug, Default)]
pub struct DataRequest {
    pub campaign_checkpoints: Option<Vec<CampaignCheckpoint>>,
    pub multiplayer_matches: Option<Vec<MultiplayerMatch>>,
    pub cold_war_zombies_events: Option<Vec<ColdWarZombiesEvent>>,
    pub modern_warfare_campaign_segments: Option<Vec<ModernWarfareCampaignSegment>>,
    pub modern_warfare_coop_matches: Option<Vec<ModernWarfareCoopMatch>>,
    pub modern_warfare_matches: Option<Vec<ModernWarfareMatch>>,
}

impl DataRequest {
    /// Parse the given datasets out of `document`.
    pub fn from_document(document: &ExportDocument, datasets: &[Dataset]) -> Result<Self> {
        let mut request = DataRequest::default();

        for dataset in datasets {
            match dataset {
                Dataset::CampaignCheckpoints => {
                    parse_once(document, &mut request.campaign_checkpoints)?
                }
                Dataset::MultiplayerMatches => {
                    parse_once(document, &mut request.multiplayer_matches)?
                }
                Dataset::ColdWarZombiesEvents => {
                    parse_once(document, &mut request.cold_war_zombies_events)?
                }
                Dataset::ModernWarfareCampaignSegments => {
                    parse_once(document, &mut request.modern_warfare_campaign_segments)?
                }
                Dataset::ModernWarfareCoopMatches => {
                    parse_once(document, &mut request.modern_warfare_coop_matches)?
                }
                Dataset::ModernWarfareMatches => {
                    parse_once(document, &mut request.modern_warfare_matches)?
                }
            }
        }

        Ok(request)
    }

    /// Record counts for the parsed datasets, in [`Dataset::ALL`] order.
    pub fn record_counts(&self) -> Vec<(Dataset, usize)> {
        [
            count(&self.campaign_checkpoints),
            count(&self.multiplayer_matches),
            count(&self.cold_war_zombies_events),
            count(&self.modern_warfare_campaign_segments),
            count(&self.modern_warfare_coop_matches),
            count(&self.modern_warfare_matches),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// Write one file per parsed dataset into `dir`. Each path is pushed
    /// onto `written` as soon as its file is in place, so a caller can
    /// remove them if a later file fails.
    pub fn write(
        &self,
        writer: &RecordWriter,
        format: OutputFormat,
        dir: &Path,
        written: &mut Vec<PathBuf>,
    ) -> Result<()> {
        let output = Output {
            writer,
            format,
            dir,
        };

        output.write(&self.campaign_checkpoints, written)?;
        output.write(&self.multiplayer_matches, written)?;
        output.write(&self.cold_war_zombies_events, written)?;
        output.write(&self.modern_warfare_campaign_segments, written)?;
        output.write(&self.modern_warfare_coop_matches, written)?;
        output.write(&self.modern_warfare_matches, written)?;
        Ok(())
    }
}

fn parse_once<R: ExportRecord>(
    document: &ExportDocument,
    slot: &mut Option<Vec<R>>,
) -> Result<()> {
    if slot.is_none() {
        *slot = Some(parse_records(document)?);
    }
    Ok(())
}

fn count<R: ExportRecord>(records: &Option<Vec<R>>) -> Option<(Dataset, usize)> {
    records.as_ref().map(|records| (R::DATASET, records.len()))
}

/// One output directory in one format.
struct Output<'a> {
    writer: &'a RecordWriter,
    format: OutputFormat,
    dir: &'a Path,
}

impl Output<'_> {
    fn write<R: ExportRecord>(
        &self,
        records: &Option<Vec<R>>,
        written: &mut Vec<PathBuf>,
    ) -> Result<()> {
        let Some(records) = records else {
            return Ok(());
        };

        let path = self.dir.join(self.format.file_name(R::DATASET));
        let rows = self.writer.write(self.format, records, &path)?;
        info!("Wrote {} {} rows to {}", rows, self.format, path.display());
        written.push(path);
        Ok(())
    }
}
