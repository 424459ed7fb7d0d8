/*! Lyrics sources

Holds a [SongSource] trait for implementing other catalogs.

The current source is the [Genius](https://genius.com) API, with lyrics
scraped from the public song pages.
!*/
mod download;
mod genius;
mod html;
mod progress;
mod types;

pub use download::{Downloader, DownloadReport, EXCLUDED_TERMS};
pub use genius::GeniusClient;
pub use html::extract_lyrics;
pub use progress::DoneIds;
pub use types::{Artist, SongDetails, SongMeta, SongPage, SongRecord};

use crate::error::Error;

/// Catalog access needed by the [Downloader].
pub trait SongSource {
    /// Resolves an artist name into its catalog id and canonical name.
    fn search_artist(&self, query: &str) -> Result<Option<Artist>, Error>;

    /// One page of an artist's songs, most popular first.
    fn artist_songs(&self, artist_id: u64, page: u32, per_page: u32) -> Result<SongPage, Error>;

    /// Album/year/url details of a song.
    fn song_details(&self, song_id: u64) -> Result<SongDetails, Error>;

    /// Raw lyrics found at `url`, `None` if the page holds none.
    fn lyrics(&self, url: &str) -> Result<Option<String>, Error>;
}
