//! Paginated, resumable lyrics download.
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use log::{debug, info, warn};

use super::{Artist, DoneIds, SongMeta, SongRecord, SongSource};
use crate::error::Error;
use crate::io::write_json;

/// Title fragments of songs that are not worth downloading
/// (alternate versions and non-song pages).
pub const EXCLUDED_TERMS: [&str; 9] = [
    "(Remix)",
    "(Live)",
    "(Concert)",
    "(Version)",
    "(Acoustic)",
    "Tracklist",
    "Credits",
    "Romanized",
    "Translation",
];

/// Summary of a download run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DownloadReport {
    pub batches: Vec<PathBuf>,
    pub downloaded: usize,
    pub without_lyrics: usize,
    pub excluded: usize,
}

/// Downloads an artist's songs page by page into batch files.
///
/// Progress is kept in `done_song_ids.json` inside the output folder,
/// so that an interrupted run can be restarted without downloading twice.
pub struct Downloader<'a, S: SongSource> {
    source: &'a S,
    batch_size: u32,
    max_tries: u32,
    backoff: Duration,
}

impl<'a, S: SongSource> Downloader<'a, S> {
    /// - `max_tries` is set to 5
    /// - `backoff` (initial retry delay, doubled on each retry) is set to 2s
    pub fn new(source: &'a S, batch_size: u32) -> Self {
        Self {
            source,
            batch_size,
            max_tries: 5,
            backoff: Duration::from_secs(2),
        }
    }

    pub fn with_retries(mut self, max_tries: u32, backoff: Duration) -> Self {
        self.max_tries = max_tries.max(1);
        self.backoff = backoff;
        self
    }

    /// Folder where batches of `artist` land, under `dst`.
    pub fn artist_dir(dst: &Path, artist: &Artist) -> PathBuf {
        dst.join(format!("genius_{}", artist.name.replace(' ', "_")))
    }

    fn is_excluded(title: &str) -> bool {
        EXCLUDED_TERMS.iter().any(|t| title.contains(t))
    }

    /// Fetch details and lyrics, retrying with exponential backoff.
    ///
    /// After the last failed attempt the song is still recorded, without lyrics.
    fn fetch_record(&self, meta: &SongMeta, artist: &str) -> SongRecord {
        let mut delay = self.backoff;
        for attempt in 1..=self.max_tries {
            let result = self.source.song_details(meta.id).and_then(|details| {
                let lyrics = match details.url.as_deref().or(meta.url.as_deref()) {
                    Some(url) => self.source.lyrics(url)?,
                    None => None,
                };
                Ok(SongRecord::from_details(meta, artist, details, lyrics))
            });
            match result {
                Ok(record) => return record,
                Err(e) if attempt < self.max_tries => {
                    warn!(
                        "[{}] attempt {}/{} failed: {}",
                        meta.title, attempt, self.max_tries, e
                    );
                    thread::sleep(delay);
                    delay *= 2;
                }
                Err(e) => {
                    warn!("[{}] giving up: {}", meta.title, e);
                }
            }
        }
        SongRecord::empty(meta, artist)
    }

    /// Download every song of `artist` starting at `start_page`, writing batches under `dst`.
    pub fn download(
        &self,
        artist: &Artist,
        dst: &Path,
        start_page: u32,
    ) -> Result<DownloadReport, Error> {
        let out_dir = Self::artist_dir(dst, artist);
        std::fs::create_dir_all(&out_dir)?;
        let mut done = DoneIds::load(&out_dir.join("done_song_ids.json"))?;
        info!(
            "[{}] {} songs already downloaded",
            artist.name,
            done.len()
        );

        let mut report = DownloadReport::default();
        let mut page = Some(start_page);
        let mut batch_num = 1;

        while let Some(current) = page {
            let listing = self
                .source
                .artist_songs(artist.id, current, self.batch_size)?;
            page = listing.next_page;

            let metas: Vec<SongMeta> = listing
                .songs
                .into_iter()
                .filter(|m| !done.contains(m.id))
                .collect();
            if metas.is_empty() {
                debug!("page {} has nothing new", current);
                continue;
            }

            let mut batch = Vec::with_capacity(metas.len());
            for meta in metas {
                if Self::is_excluded(&meta.title) {
                    debug!("excluding {}", meta.title);
                    report.excluded += 1;
                    done.insert_and_save(meta.id)?;
                    continue;
                }
                let record = self.fetch_record(&meta, &artist.name);
                if record.lyrics.is_none() {
                    report.without_lyrics += 1;
                }
                batch.push(record);
                done.insert_and_save(meta.id)?;
            }

            if batch.is_empty() {
                continue;
            }
            let batch_file = out_dir.join(format!("batch_{:03}_page_{}.json", batch_num, current));
            write_json(&batch_file, &batch)?;
            info!("saved {} songs -> {:?}", batch.len(), batch_file);
            report.downloaded += batch.len();
            report.batches.push(batch_file);
            batch_num += 1;
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use super::*;
    use crate::sources::{SongDetails, SongPage};

    struct FakeSource {
        pages: HashMap<u32, SongPage>,
        failures_left: RefCell<HashMap<u64, u32>>,
    }

    fn meta(id: u64, title: &str) -> SongMeta {
        SongMeta {
            id,
            title: title.to_string(),
            url: Some(format!("https://genius.com/{}", id)),
        }
    }

    impl SongSource for FakeSource {
        fn search_artist(&self, query: &str) -> Result<Option<Artist>, Error> {
            Ok(Some(Artist {
                id: 1,
                name: query.to_string(),
            }))
        }

        fn artist_songs(&self, _id: u64, page: u32, _per_page: u32) -> Result<SongPage, Error> {
            Ok(self.pages.get(&page).cloned().unwrap_or_default())
        }

        fn song_details(&self, song_id: u64) -> Result<SongDetails, Error> {
            let mut failures = self.failures_left.borrow_mut();
            if let Some(n) = failures.get_mut(&song_id) {
                if *n > 0 {
                    *n -= 1;
                    return Err(Error::Custom("timeout".to_string()));
                }
            }
            Ok(SongDetails {
                album: Some("YHLQMDLG".to_string()),
                ..Default::default()
            })
        }

        fn lyrics(&self, url: &str) -> Result<Option<String>, Error> {
            Ok(Some(format!("lyrics of {}", url)))
        }
    }

    fn source(failures: &[(u64, u32)]) -> FakeSource {
        let mut pages = HashMap::new();
        pages.insert(
            1,
            SongPage {
                songs: vec![meta(10, "Safaera"), meta(11, "Safaera (Remix)")],
                next_page: Some(2),
            },
        );
        pages.insert(
            2,
            SongPage {
                songs: vec![meta(12, "Yo Perreo Sola")],
                next_page: None,
            },
        );
        FakeSource {
            pages,
            failures_left: RefCell::new(failures.iter().copied().collect()),
        }
    }

    #[test]
    fn downloads_batches_and_resumes() {
        let dir = tempfile::tempdir().unwrap();
        let src = source(&[]);
        let artist = Artist {
            id: 1,
            name: "Bad Bunny".to_string(),
        };
        let dl = Downloader::new(&src, 25).with_retries(2, Duration::ZERO);
        let report = dl.download(&artist, dir.path(), 1).unwrap();

        assert_eq!(report.downloaded, 2);
        assert_eq!(report.excluded, 1);
        let out = dir.path().join("genius_Bad_Bunny");
        assert!(out.join("batch_001_page_1.json").exists());
        assert!(out.join("batch_002_page_2.json").exists());

        let first: Vec<SongRecord> =
            crate::io::read_json(&out.join("batch_001_page_1.json")).unwrap();
        assert_eq!(first.len(), 1);
        assert_eq!(first[0].album.as_deref(), Some("YHLQMDLG"));
        assert_eq!(
            first[0].lyrics.as_deref(),
            Some("lyrics of https://genius.com/10")
        );

        // second run finds everything done
        let report = dl.download(&artist, dir.path(), 1).unwrap();
        assert_eq!(report.downloaded, 0);
        assert!(report.batches.is_empty());
    }

    #[test]
    fn failing_song_recorded_without_lyrics() {
        let dir = tempfile::tempdir().unwrap();
        let src = source(&[(12, 10)]);
        let artist = Artist {
            id: 1,
            name: "X".to_string(),
        };
        let dl = Downloader::new(&src, 25).with_retries(3, Duration::ZERO);
        let report = dl.download(&artist, dir.path(), 2).unwrap();
        assert_eq!(report.downloaded, 1);
        assert_eq!(report.without_lyrics, 1);
    }

    #[test]
    fn transient_failure_retried() {
        let dir = tempfile::tempdir().unwrap();
        let src = source(&[(12, 1)]);
        let artist = Artist {
            id: 1,
            name: "X".to_string(),
        };
        let dl = Downloader::new(&src, 25).with_retries(3, Duration::ZERO);
        let report = dl.download(&artist, dir.path(), 2).unwrap();
        assert_eq!(report.without_lyrics, 0);
    }
}
