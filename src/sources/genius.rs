//! Genius API client.
use std::time::Duration;

use log::debug;
use reqwest::blocking::Client;
use reqwest::Url;
use serde::Deserialize;

use super::{extract_lyrics, Artist, SongDetails, SongMeta, SongPage, SongSource};
use crate::error::Error;

const API_URL: &str = "https://api.genius.com/";

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    response: T,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    hits: Vec<SearchHit>,
}

#[derive(Debug, Deserialize)]
struct SearchHit {
    result: SearchResult,
}

#[derive(Debug, Deserialize)]
struct SearchResult {
    primary_artist: ApiArtist,
}

#[derive(Debug, Deserialize)]
struct ApiArtist {
    id: u64,
    name: String,
}

#[derive(Debug, Deserialize)]
struct ArtistSongsResponse {
    songs: Vec<SongMeta>,
    next_page: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct SongResponse {
    song: ApiSong,
}

#[derive(Debug, Deserialize)]
struct ApiSong {
    title: Option<String>,
    url: Option<String>,
    release_date: Option<String>,
    album: Option<ApiAlbum>,
    primary_artist: Option<ApiArtist>,
}

#[derive(Debug, Deserialize)]
struct ApiAlbum {
    name: Option<String>,
    url: Option<String>,
}

/// Blocking Genius client, authenticated with an API access token.
pub struct GeniusClient {
    client: Client,
    token: String,
    base: Url,
}

impl GeniusClient {
    /// Create a new client.
    ///
    /// `timeout` applies to every request.
    pub fn new(token: &str, timeout: Duration) -> Result<Self, Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            token: token.to_string(),
            base: Url::parse(API_URL)?,
        })
    }

    fn get_api<T: for<'de> Deserialize<'de>>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, Error> {
        let mut url = self.base.join(path)?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        debug!("GET {}", url);
        let envelope: Envelope<T> = self
            .client
            .get(url)
            .bearer_auth(&self.token)
            .send()?
            .error_for_status()?
            .json()?;
        Ok(envelope.response)
    }
}

/// Picks the hit whose primary artist matches `query` (case-insensitively),
/// falling back to the first hit.
fn pick_artist(query: &str, hits: Vec<SearchHit>) -> Option<Artist> {
    let wanted = query.trim().to_lowercase();
    let mut first = None;
    for a in hits.into_iter().map(|h| h.result.primary_artist) {
        if a.name.to_lowercase() == wanted {
            return Some(Artist {
                id: a.id,
                name: a.name,
            });
        }
        if first.is_none() {
            first = Some(a);
        }
    }
    first.map(|a| Artist {
        id: a.id,
        name: a.name,
    })
}

impl SongSource for GeniusClient {
    fn search_artist(&self, query: &str) -> Result<Option<Artist>, Error> {
        let resp: SearchResponse = self.get_api("search", &[("q", query.to_string())])?;
        Ok(pick_artist(query, resp.hits))
    }

    fn artist_songs(&self, artist_id: u64, page: u32, per_page: u32) -> Result<SongPage, Error> {
        let resp: ArtistSongsResponse = self.get_api(
            &format!("artists/{}/songs", artist_id),
            &[
                ("per_page", per_page.to_string()),
                ("page", page.to_string()),
                ("sort", "popularity".to_string()),
            ],
        )?;
        Ok(SongPage {
            songs: resp.songs,
            next_page: resp.next_page,
        })
    }

    fn song_details(&self, song_id: u64) -> Result<SongDetails, Error> {
        let resp: SongResponse = self.get_api(&format!("songs/{}", song_id), &[])?;
        let song = resp.song;
        let (album, album_url) = match song.album {
            Some(a) => (a.name, a.url),
            None => (None, None),
        };
        Ok(SongDetails {
            title: song.title,
            artist: song.primary_artist.map(|a| a.name),
            url: song.url,
            album,
            album_url,
            year: song.release_date,
        })
    }

    fn lyrics(&self, url: &str) -> Result<Option<String>, Error> {
        debug!("scraping {}", url);
        let html = self.client.get(url).send()?.error_for_status()?.text()?;
        Ok(extract_lyrics(&html))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(id: u64, name: &str) -> SearchHit {
        SearchHit {
            result: SearchResult {
                primary_artist: ApiArtist {
                    id,
                    name: name.to_string(),
                },
            },
        }
    }

    #[test]
    fn artist_exact_match_preferred() {
        let hits = vec![hit(1, "Daddy Yankee"), hit(2, "Bad Bunny")];
        assert_eq!(
            pick_artist("bad bunny", hits),
            Some(Artist {
                id: 2,
                name: "Bad Bunny".to_string()
            })
        );
    }

    #[test]
    fn artist_falls_back_to_first_hit() {
        let hits = vec![hit(7, "Jhayco"), hit(2, "Bad Bunny")];
        assert_eq!(pick_artist("conejo malo", hits).map(|a| a.id), Some(7));
        assert_eq!(pick_artist("x", vec![]), None);
    }

    #[test]
    fn deserialize_artist_songs() {
        let body = r#"{"meta":{"status":200},"response":{"songs":[{"id":1,"title":"Ojitos Lindos","url":"https://genius.com/x","extra":true}],"next_page":null}}"#;
        let env: Envelope<ArtistSongsResponse> = serde_json::from_str(body).unwrap();
        assert_eq!(env.response.songs[0].title, "Ojitos Lindos");
        assert_eq!(env.response.next_page, None);
    }
}
