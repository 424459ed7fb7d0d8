//! Lemma entries, one per (word, lemma) pairing.
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::LanguageFlags;
use crate::evidence::EvidenceExample;

/// A token of an example line matched against the entry word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LemmaMatch {
    pub example_id: String,
    #[serde(default)]
    pub example_song_name: String,
    pub token_text: String,
    pub lemma: String,
    pub pos: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PosSummary {
    pub match_count: usize,
    pub pos_counts: BTreeMap<String, usize>,
}

/// Sense scaffold. Senses are not clustered yet: the single sense holds every example.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sense {
    pub sense_id: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub notes: String,
    pub example_ids: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Evidence {
    #[serde(default)]
    pub examples: Vec<EvidenceExample>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LemmaEntry {
    /// `word|lemma`
    pub key: String,
    pub word: String,
    pub lemma: String,
    #[serde(default)]
    pub corpus_count: u64,
    #[serde(default)]
    pub occurrences_ppm: f64,
    /// 1-based position of the word in the evidence list.
    #[serde(default)]
    pub source_rank: usize,
    pub language_flags: LanguageFlags,
    #[serde(default)]
    pub pos_summary: PosSummary,
    #[serde(default)]
    pub matches: Vec<LemmaMatch>,
    #[serde(default)]
    pub senses: Vec<Sense>,
    #[serde(default)]
    pub evidence: Evidence,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_form: Option<String>,
}

impl LemmaEntry {
    pub fn match_count(&self) -> usize {
        self.pos_summary.match_count
    }
}
