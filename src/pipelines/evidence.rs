//! Stage 2: word counts and example lines.
use std::path::PathBuf;

use log::info;

use super::Pipeline;
use crate::error::Error;
use crate::evidence::{build_counts_and_candidates, select_examples, to_evidence, EvidenceEntry};
use crate::io::{read_batches, write_json};

/// Counts words over every batch matching `batch_glob`
/// and writes the evidence list to `dst`.
pub struct Evidence {
    batch_glob: String,
    dst: PathBuf,
    max_examples: usize,
    preview: usize,
}

impl Evidence {
    pub fn new(batch_glob: String, dst: PathBuf, max_examples: usize) -> Self {
        Self {
            batch_glob,
            dst,
            max_examples,
            preview: 0,
        }
    }

    /// Print the `n` first entries on stdout once written.
    pub fn with_preview(mut self, n: usize) -> Self {
        self.preview = n;
        self
    }
}

impl Pipeline<Vec<EvidenceEntry>> for Evidence {
    fn run(&self) -> Result<Vec<EvidenceEntry>, Error> {
        let songs = read_batches(&self.batch_glob)?;
        let with_lyrics = songs
            .iter()
            .filter(|s| s.record.lyrics.as_deref().map_or(false, |l| !l.is_empty()))
            .count();
        info!("{} songs, {} with lyrics", songs.len(), with_lyrics);

        let (counts, candidates) = build_counts_and_candidates(&songs);
        let selected = select_examples(&counts, candidates, self.max_examples);
        let entries = to_evidence(&counts, &selected);

        write_json(&self.dst, &entries)?;
        info!(
            "wrote {} words ({} tokens) to {:?}",
            entries.len(),
            counts.values().sum::<u64>(),
            self.dst
        );

        if self.preview > 0 {
            let head = &entries[..self.preview.min(entries.len())];
            println!("{}", serde_json::to_string_pretty(head)?);
        }
        Ok(entries)
    }
}
