//! Song records as stored in batch files.
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artist {
    pub id: u64,
    pub name: String,
}

/// Song as listed on an artist page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SongMeta {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub url: Option<String>,
}

/// A page of [SongMeta], along with the next page number if any.
#[derive(Debug, Clone, Default)]
pub struct SongPage {
    pub songs: Vec<SongMeta>,
    pub next_page: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SongDetails {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub url: Option<String>,
    pub album: Option<String>,
    pub album_url: Option<String>,
    pub year: Option<String>,
}

/// One downloaded song.
///
/// Every field but `id` and `title` may be missing: songs whose download
/// failed are still recorded so that they are not retried forever.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongRecord {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub artist: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub album: Option<String>,
    #[serde(default)]
    pub album_url: Option<String>,
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub lyrics: Option<String>,
}

impl SongRecord {
    /// Record for a song whose details could not be fetched.
    pub fn empty(meta: &SongMeta, artist: &str) -> Self {
        Self {
            id: meta.id,
            title: meta.title.clone(),
            artist: artist.to_string(),
            url: meta.url.clone(),
            album: None,
            album_url: None,
            year: None,
            lyrics: None,
        }
    }

    pub fn from_details(
        meta: &SongMeta,
        artist: &str,
        details: SongDetails,
        lyrics: Option<String>,
    ) -> Self {
        Self {
            id: meta.id,
            title: details.title.unwrap_or_else(|| meta.title.clone()),
            artist: details.artist.unwrap_or_else(|| artist.to_string()),
            url: details.url.or_else(|| meta.url.clone()),
            album: details.album,
            album_url: details.album_url,
            year: details.year,
            lyrics,
        }
    }
}
