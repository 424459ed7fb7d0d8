//! Evidence entries, as written by the evidence stage and read by the following ones.
use serde::{Deserialize, Serialize};

/// A lyric line illustrating a word.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvidenceExample {
    /// `song_id:line_no`
    pub id: String,
    pub line: String,
    #[serde(default)]
    pub title: String,
}

impl EvidenceExample {
    /// Song id part of [EvidenceExample::id], if any.
    pub fn song_id(&self) -> Option<&str> {
        self.id.split(':').next().filter(|s| !s.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvidenceEntry {
    pub word: String,
    pub occurrences_ppm: f64,
    #[serde(default)]
    pub corpus_count: u64,
    #[serde(default)]
    pub examples: Vec<EvidenceExample>,
    /// Elided spelling the entry was merged from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_form: Option<String>,
}
