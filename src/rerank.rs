/*! Reranking

Entries are ordered by corpus count, ties being broken with a general
vocabulary list (more common words first), then by the number of distinct
songs, then non-cognates before cognates, then shorter words first.
!*/
use std::collections::HashMap;

use serde::Deserialize;

use crate::vocabulary::VocabEntry;

/// Reference rank of words missing from the reference vocabulary.
pub const SENTINEL_RANK: usize = 999_999;

/// Entry of a general vocabulary list.
#[derive(Debug, Clone, Deserialize)]
pub struct ReferenceEntry {
    pub rank: usize,
    #[serde(default)]
    pub word: String,
    #[serde(default)]
    pub lemma: String,
}

/// First rank of every word and lemma of a reference vocabulary.
#[derive(Debug, Default, Clone)]
pub struct ReferenceRanks {
    words: HashMap<String, usize>,
    lemmas: HashMap<String, usize>,
}

fn key(s: &str) -> String {
    s.trim().to_lowercase()
}

impl ReferenceRanks {
    pub fn new(reference: &[ReferenceEntry]) -> Self {
        let mut ranks = Self::default();
        for entry in reference {
            let word = key(&entry.word);
            if !word.is_empty() {
                ranks.words.entry(word).or_insert(entry.rank);
            }
            let lemma = key(&entry.lemma);
            if !lemma.is_empty() {
                ranks.lemmas.entry(lemma).or_insert(entry.rank);
            }
        }
        ranks
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn lemma_count(&self) -> usize {
        self.lemmas.len()
    }

    /// Rank of an entry, trying word, then lemma as a word, lemma as a lemma,
    /// and word as a lemma.
    pub fn rank_of(&self, entry: &VocabEntry) -> usize {
        let word = key(&entry.word);
        let lemma = key(&entry.lemma);
        self.words
            .get(&word)
            .or_else(|| Some(&lemma).filter(|l| !l.is_empty()).and_then(|l| self.words.get(l)))
            .or_else(|| Some(&lemma).filter(|l| !l.is_empty()).and_then(|l| self.lemmas.get(l)))
            .or_else(|| self.lemmas.get(&word))
            .copied()
            .unwrap_or(SENTINEL_RANK)
    }
}

/// Lower sorts first.
fn sort_key(entry: &VocabEntry, ranks: &ReferenceRanks) -> (i64, usize, i64, bool, usize) {
    (
        -(entry.corpus_count as i64),
        ranks.rank_of(entry),
        -(entry.distinct_songs() as i64),
        entry.is_transparent_cognate,
        entry.word.chars().count(),
    )
}

/// Sorts entries in place, sets `original_rank` to the previous rank and
/// `rank` to the new 1-based position. Returns how many entries were found in the reference.
pub fn rerank(entries: &mut [VocabEntry], ranks: &ReferenceRanks) -> usize {
    entries.sort_by_cached_key(|e| sort_key(e, ranks));
    let mut matched = 0;
    for (idx, entry) in entries.iter_mut().enumerate() {
        if ranks.rank_of(entry) < SENTINEL_RANK {
            matched += 1;
        }
        entry.original_rank = Some(entry.rank);
        entry.rank = idx + 1;
    }
    matched
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocabulary::tests::{example, meaning, vocab};

    fn reference() -> ReferenceRanks {
        let list: Vec<ReferenceEntry> = serde_json::from_str(
            r#"[
                {"rank": 1, "word": "de", "lemma": "de"},
                {"rank": 5, "word": "Quiero", "lemma": "querer"},
                {"rank": 9, "word": "casa", "lemma": "casa"},
                {"rank": 12, "word": "de", "lemma": "dar"},
                {"rank": 40, "word": "bailar", "lemma": "bailar"}
            ]"#,
        )
        .unwrap();
        ReferenceRanks::new(&list)
    }

    #[test]
    fn lookup_chain() {
        let r = reference();
        assert_eq!(r.word_count(), 4);
        assert_eq!(r.rank_of(&vocab(1, "quiero ", "querer", vec![])), 5);
        // lemma found as a word
        assert_eq!(r.rank_of(&vocab(1, "bailé", "bailar", vec![])), 40);
        // lemma found as a lemma
        assert_eq!(r.rank_of(&vocab(1, "dame", "dar", vec![])), 12);
        // word found as a lemma
        assert_eq!(r.rank_of(&vocab(1, "querer", "", vec![])), 5);
        assert_eq!(r.rank_of(&vocab(1, "perreo", "perreo", vec![])), SENTINEL_RANK);
    }

    #[test]
    fn tiebreaks() {
        let r = reference();
        let mut a = vocab(1, "perreo", "perreo", vec![]);
        a.corpus_count = 3;
        let mut b = vocab(2, "casa", "casa", vec![]);
        b.corpus_count = 3;
        let mut c = vocab(3, "flow", "flow", vec![meaning("NOUN", "", vec![example("A", "", ""), example("B", "", "")])]);
        c.corpus_count = 3;
        let mut d = vocab(4, "nación", "nación", vec![]);
        d.corpus_count = 3;
        d.is_transparent_cognate = true;
        let mut e = vocab(5, "ay", "ay", vec![]);
        e.corpus_count = 3;
        let mut f = vocab(6, "que", "que", vec![]);
        f.corpus_count = 10;

        let mut entries = vec![a, b, c, d, e, f];
        let matched = rerank(&mut entries, &r);
        assert_eq!(matched, 1);
        let words: Vec<&str> = entries.iter().map(|e| e.word.as_str()).collect();
        assert_eq!(words, vec!["que", "casa", "flow", "ay", "perreo", "nación"]);
        assert_eq!(entries[0].rank, 1);
        assert_eq!(entries[0].original_rank, Some(6));
        assert_eq!(entries[5].original_rank, Some(4));
    }
}
