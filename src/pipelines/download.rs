//! Stage 1: lyrics download.
use std::path::PathBuf;
use std::time::Duration;

use log::info;

use super::Pipeline;
use crate::error::Error;
use crate::sources::{DownloadReport, Downloader, SongSource};

/// Downloads every song of an artist into `<dst>/genius_<Artist_Name>/`.
pub struct Download<'a, S: SongSource> {
    source: &'a S,
    artist: String,
    dst: PathBuf,
    batch_size: u32,
    start_page: u32,
    max_tries: u32,
    backoff: Duration,
}

impl<'a, S: SongSource> Download<'a, S> {
    pub fn new(source: &'a S, artist: String, dst: PathBuf, batch_size: u32, start_page: u32) -> Self {
        Self {
            source,
            artist,
            dst,
            batch_size,
            start_page,
            max_tries: 5,
            backoff: Duration::from_secs(2),
        }
    }

    pub fn with_retries(mut self, max_tries: u32, backoff: Duration) -> Self {
        self.max_tries = max_tries;
        self.backoff = backoff;
        self
    }
}

impl<'a, S: SongSource> Pipeline<DownloadReport> for Download<'a, S> {
    fn run(&self) -> Result<DownloadReport, Error> {
        let artist = self
            .source
            .search_artist(&self.artist)?
            .ok_or_else(|| Error::Custom(format!("Artist not found: {}", self.artist)))?;
        info!("found artist {} (id {})", artist.name, artist.id);

        let report = Downloader::new(self.source, self.batch_size)
            .with_retries(self.max_tries, self.backoff)
            .download(&artist, &self.dst, self.start_page)?;

        info!(
            "{} songs in {} batches ({} without lyrics, {} excluded)",
            report.downloaded,
            report.batches.len(),
            report.without_lyrics,
            report.excluded
        );
        Ok(report)
    }
}
