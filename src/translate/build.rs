//! Vocabulary building from lemma entries.
use std::cmp::Reverse;
use std::collections::{HashMap, HashSet};

use log::info;

use super::TranslationCache;
use crate::lemma::LemmaEntry;
use crate::vocabulary::{Meaning, VocabEntry, VocabExample};

/// Song id part of an example id (`song:line`), empty without a `:`.
pub(crate) fn song_of(example_id: &str) -> &str {
    match example_id.split_once(':') {
        Some((song, _)) => song.trim(),
        None => "",
    }
}

/// `example id -> line` and `example id -> song name` lookups of a lemma entry.
pub(crate) fn example_maps(entry: &LemmaEntry) -> (HashMap<&str, &str>, HashMap<&str, &str>) {
    let lines = entry
        .evidence
        .examples
        .iter()
        .filter(|ex| !ex.id.is_empty() && !ex.line.is_empty())
        .map(|ex| (ex.id.as_str(), ex.line.as_str()))
        .collect();
    let song_names = entry
        .matches
        .iter()
        .filter(|m| !m.example_id.is_empty() && !m.example_song_name.is_empty())
        .map(|m| (m.example_id.as_str(), m.example_song_name.as_str()))
        .collect();
    (lines, song_names)
}

/// Example ids per POS, in first-seen order, deduplicated.
///
/// Without matches, every evidence example goes to `X`.
fn pos_buckets(entry: &LemmaEntry) -> Vec<(String, Vec<String>)> {
    let mut buckets: Vec<(String, Vec<String>)> = Vec::new();
    let mut seen: HashSet<(String, String)> = HashSet::new();
    for m in entry.matches.iter().filter(|m| !m.example_id.is_empty()) {
        let pos = if m.pos.is_empty() { "X" } else { m.pos.as_str() };
        if !seen.insert((pos.to_string(), m.example_id.clone())) {
            continue;
        }
        match buckets.iter_mut().find(|(p, _)| p == pos) {
            Some((_, ids)) => ids.push(m.example_id.clone()),
            None => buckets.push((pos.to_string(), vec![m.example_id.clone()])),
        }
    }
    if buckets.is_empty() {
        let mut ids = Vec::new();
        for ex in entry.evidence.examples.iter().filter(|ex| !ex.id.is_empty()) {
            if !ids.contains(&ex.id) {
                ids.push(ex.id.clone());
            }
        }
        buckets.push(("X".to_string(), ids));
    }
    buckets
}

/// Builds vocabulary entries, translating through a [TranslationCache].
pub struct VocabularyBuilder<'c, 'a> {
    cache: &'c mut TranslationCache<'a>,
    examples_per_pos: usize,
    skipped: usize,
}

impl<'c, 'a> VocabularyBuilder<'c, 'a> {
    pub fn new(cache: &'c mut TranslationCache<'a>, examples_per_pos: usize) -> Self {
        Self {
            cache,
            examples_per_pos,
            skipped: 0,
        }
    }

    /// Number of entries that were not translated so far.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// One vocabulary entry per lemma entry, ranked in input order.
    pub fn build(&mut self, entries: &[LemmaEntry]) -> Vec<VocabEntry> {
        let mut out: Vec<VocabEntry> = Vec::with_capacity(entries.len());
        let mut match_counts = Vec::with_capacity(entries.len());
        for (idx, entry) in entries.iter().enumerate() {
            out.push(self.build_entry(idx + 1, entry));
            match_counts.push(entry.match_count());
            if (idx + 1) % 500 == 0 {
                info!(
                    "{} words | {} calls | {} cache hits | {} skipped",
                    idx + 1,
                    self.cache.stats.calls,
                    self.cache.stats.hits,
                    self.skipped
                );
            }
        }
        mark_most_frequent(&mut out, &match_counts);
        out
    }

    pub fn build_entry(&mut self, rank: usize, entry: &LemmaEntry) -> VocabEntry {
        let word = entry.word.trim().to_string();
        let curated = self.cache.flags(&word);
        let is_english = entry.language_flags.is_english || curated.is_english;
        let mut vocab = VocabEntry {
            rank,
            word,
            lemma: entry.lemma.trim().to_string(),
            meanings: vec![],
            most_frequent_lemma_instance: false,
            is_english,
            is_interjection: curated.is_interjection,
            is_propernoun: curated.is_propernoun,
            is_transparent_cognate: curated.is_transparent_cognate,
            occurrences_ppm: entry.occurrences_ppm,
            corpus_count: entry.corpus_count,
            display_form: entry.display_form.clone(),
            original_rank: None,
        };
        let skip = vocab.skips_translation();

        let translation = if skip {
            self.skipped += 1;
            if is_english {
                vocab.word.clone()
            } else {
                String::new()
            }
        } else {
            self.cache.word(&vocab.word)
        };

        let (id2line, id2song) = example_maps(entry);
        let buckets = pos_buckets(entry);
        let counts = &entry.pos_summary.pos_counts;
        let total: usize = counts.values().sum();

        let order: Vec<&str> = if total > 0 {
            // ties keep the order in which tags first appear in the matches
            let first_seen = |pos: &str| {
                entry
                    .matches
                    .iter()
                    .position(|m| m.pos == pos)
                    .unwrap_or(usize::MAX)
            };
            let mut pos: Vec<(&String, &usize)> = counts.iter().collect();
            pos.sort_by_key(|(p, c)| (Reverse(**c), first_seen(p.as_str())));
            pos.into_iter().map(|(p, _)| p.as_str()).collect()
        } else {
            let mut pos: Vec<&(String, Vec<String>)> = buckets.iter().collect();
            pos.sort_by(|a, b| b.1.len().cmp(&a.1.len()));
            pos.into_iter().map(|(p, _)| p.as_str()).collect()
        };
        let single = order.len() == 1;

        for pos in order {
            let ids = match buckets.iter().find(|(p, _)| p == pos) {
                Some((_, ids)) => ids,
                None => continue,
            };
            let mut examples = Vec::new();
            let mut seen_lines = HashSet::new();
            for id in ids {
                let line = id2line.get(id.as_str()).map(|l| l.trim()).unwrap_or("");
                if line.is_empty() || !seen_lines.insert(line) {
                    continue;
                }
                let english = if skip {
                    String::new()
                } else {
                    self.cache.line(line)
                };
                examples.push(VocabExample {
                    song: song_of(id).to_string(),
                    song_name: id2song.get(id.as_str()).unwrap_or(&"").to_string(),
                    spanish: line.to_string(),
                    english,
                });
                if examples.len() >= self.examples_per_pos {
                    break;
                }
            }
            if examples.is_empty() {
                continue;
            }
            let share = match counts.get(pos) {
                Some(c) if total > 0 => *c as f64 / total as f64,
                _ if single => 1.0,
                _ => 0.0,
            };
            vocab.meanings.push(Meaning {
                pos: pos.to_string(),
                translation: translation.clone(),
                frequency: format!("{:.2}", share),
                examples,
            });
        }
        vocab
    }
}

/// For each word, flags the entry with the highest match count (earliest on ties).
pub fn mark_most_frequent(entries: &mut [VocabEntry], match_counts: &[usize]) {
    let mut best: HashMap<String, usize> = HashMap::new();
    for (idx, entry) in entries.iter().enumerate() {
        let count = match_counts.get(idx).copied().unwrap_or(0);
        match best.get(&entry.word) {
            Some(&b) if match_counts.get(b).copied().unwrap_or(0) >= count => (),
            _ => {
                best.insert(entry.word.clone(), idx);
            }
        }
    }
    for (idx, entry) in entries.iter_mut().enumerate() {
        entry.most_frequent_lemma_instance = best.get(&entry.word) == Some(&idx);
    }
}
