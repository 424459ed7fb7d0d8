//! Batch files produced by the downloader.
use std::path::PathBuf;

use log::{info, warn};
use serde_json::Value;

use crate::error::Error;
use crate::sources::SongRecord;

/// A song along with the index of the batch file it was read from.
#[derive(Debug, Clone)]
pub struct BatchSong {
    pub batch: usize,
    pub record: SongRecord,
}

/// Loads every batch file matching `pattern`, in sorted path order.
///
/// List items that are not song objects are skipped.
///
/// # Errors
/// Returns an error if the pattern matches no file, or if a file does not hold a JSON list.
pub fn read_batches(pattern: &str) -> Result<Vec<BatchSong>, Error> {
    let mut paths = glob::glob(pattern)?.collect::<Result<Vec<PathBuf>, _>>()?;
    paths.sort();
    if paths.is_empty() {
        return Err(Error::Custom(format!(
            "No files matched batch glob {}",
            pattern
        )));
    }

    let mut songs = Vec::new();
    for (batch, path) in paths.iter().enumerate() {
        let data: Value = super::read_json(path)?;
        let items = match data {
            Value::Array(items) => items,
            _ => {
                return Err(Error::Custom(format!(
                    "{:?} did not contain a JSON list.",
                    path
                )))
            }
        };
        for item in items {
            match serde_json::from_value::<SongRecord>(item) {
                Ok(record) => songs.push(BatchSong { batch, record }),
                Err(e) => warn!("skipping malformed song in {:?}: {}", path, e),
            }
        }
    }
    info!("loaded {} songs from {} batch files", songs.len(), paths.len());
    Ok(songs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::write_json;
    use serde_json::json;

    #[test]
    fn sorted_batches_and_indices() {
        let dir = tempfile::tempdir().unwrap();
        write_json(
            &dir.path().join("batch_002_page_2.json"),
            &json!([{"id": 3, "title": "c", "lyrics": "x"}]),
        )
        .unwrap();
        write_json(
            &dir.path().join("batch_001_page_1.json"),
            &json!([{"id": 1, "title": "a"}, "garbage", {"id": 2, "title": "b"}]),
        )
        .unwrap();

        let pattern = format!("{}/batch_*.json", dir.path().display());
        let songs = read_batches(&pattern).unwrap();
        let ids: Vec<(usize, u64)> = songs.iter().map(|s| (s.batch, s.record.id)).collect();
        assert_eq!(ids, vec![(0, 1), (0, 2), (1, 3)]);
    }

    #[test]
    fn no_match_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let pattern = format!("{}/batch_*.json", dir.path().display());
        assert!(read_batches(&pattern).is_err());
    }

    #[test]
    fn not_a_list_is_error() {
        let dir = tempfile::tempdir().unwrap();
        write_json(&dir.path().join("batch_001.json"), &json!({"id": 1})).unwrap();
        let pattern = format!("{}/batch_*.json", dir.path().display());
        assert!(read_batches(&pattern).is_err());
    }
}
