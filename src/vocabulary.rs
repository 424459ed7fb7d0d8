//! Final vocabulary entries, shared by the translation, dedup, cognate and rerank stages.
use std::collections::HashSet;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabExample {
    /// song id
    #[serde(default)]
    pub song: String,
    #[serde(default)]
    pub song_name: String,
    #[serde(default)]
    pub spanish: String,
    #[serde(default)]
    pub english: String,
}

/// A part of speech of a word, with its translation and examples.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meaning {
    pub pos: String,
    #[serde(default)]
    pub translation: String,
    /// Share of the POS among matches, formatted with two decimals (`"0.37"`).
    #[serde(default)]
    pub frequency: String,
    #[serde(default)]
    pub examples: Vec<VocabExample>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VocabEntry {
    pub rank: usize,
    pub word: String,
    #[serde(default)]
    pub lemma: String,
    #[serde(default)]
    pub meanings: Vec<Meaning>,
    #[serde(default)]
    pub most_frequent_lemma_instance: bool,
    #[serde(default)]
    pub is_english: bool,
    #[serde(default)]
    pub is_interjection: bool,
    #[serde(default)]
    pub is_propernoun: bool,
    #[serde(default)]
    pub is_transparent_cognate: bool,
    #[serde(default)]
    pub occurrences_ppm: f64,
    #[serde(default)]
    pub corpus_count: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_form: Option<String>,
    /// Rank before the last reranking.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_rank: Option<usize>,
}

impl VocabEntry {
    /// English words, interjections and proper nouns are not translated.
    pub fn skips_translation(&self) -> bool {
        self.is_english || self.is_interjection || self.is_propernoun
    }

    pub fn example_count(&self) -> usize {
        self.meanings.iter().map(|m| m.examples.len()).sum()
    }

    /// Number of distinct non-empty song names across examples.
    pub fn distinct_songs(&self) -> usize {
        self.meanings
            .iter()
            .flat_map(|m| m.examples.iter())
            .map(|ex| ex.song_name.as_str())
            .filter(|name| !name.is_empty())
            .collect::<HashSet<_>>()
            .len()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn example(song_name: &str, spanish: &str, english: &str) -> VocabExample {
        VocabExample {
            song: "1".to_string(),
            song_name: song_name.to_string(),
            spanish: spanish.to_string(),
            english: english.to_string(),
        }
    }

    pub(crate) fn meaning(pos: &str, translation: &str, examples: Vec<VocabExample>) -> Meaning {
        Meaning {
            pos: pos.to_string(),
            translation: translation.to_string(),
            frequency: "1.00".to_string(),
            examples,
        }
    }

    pub(crate) fn vocab(rank: usize, word: &str, lemma: &str, meanings: Vec<Meaning>) -> VocabEntry {
        VocabEntry {
            rank,
            word: word.to_string(),
            lemma: lemma.to_string(),
            meanings,
            ..Default::default()
        }
    }

    #[test]
    fn counts() {
        let e = vocab(
            1,
            "luna",
            "luna",
            vec![
                meaning("NOUN", "moon", vec![example("A", "la luna", ""), example("", "x", "")]),
                meaning("PROPN", "Luna", vec![example("A", "luna", ""), example("B", "y", "")]),
            ],
        );
        assert_eq!(e.example_count(), 4);
        assert_eq!(e.distinct_songs(), 2);
        assert!(!e.skips_translation());
    }

    #[test]
    fn optional_fields() {
        let e: VocabEntry = serde_json::from_str(r#"{"rank": 3, "word": "pa'"}"#).unwrap();
        assert_eq!(e.original_rank, None);
        let s = serde_json::to_string(&e).unwrap();
        assert!(!s.contains("original_rank"));
        assert!(!s.contains("display_form"));
    }
}
