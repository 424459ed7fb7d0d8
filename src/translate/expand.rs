//! Example expansion: grow meanings with more lyric lines, without calling a translator.
use std::collections::{HashMap, HashSet};

use super::build::{example_maps, song_of};
use super::TranslationCache;
use crate::lemma::LemmaEntry;
use crate::vocabulary::{VocabEntry, VocabExample};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExpandReport {
    pub added: usize,
    pub recovered: usize,
    pub already_full: usize,
}

/// `word -> lemma entry with the most evidence examples` (first one on ties).
pub fn richest_entries(entries: &[LemmaEntry]) -> HashMap<&str, &LemmaEntry> {
    let mut lookup: HashMap<&str, &LemmaEntry> = HashMap::new();
    for entry in entries.iter().filter(|e| !e.word.is_empty()) {
        match lookup.get(entry.word.as_str()) {
            Some(existing) if existing.evidence.examples.len() >= entry.evidence.examples.len() => {}
            _ => {
                lookup.insert(entry.word.as_str(), entry);
            }
        }
    }
    lookup
}

/// Example lines of `entry` for `pos`, untranslated.
///
/// Falls back to every evidence line when no match has this POS.
pub fn available_examples(entry: &LemmaEntry, pos: &str) -> Vec<VocabExample> {
    let (id2line, id2song) = example_maps(entry);
    let mut seen = HashSet::new();
    let mut results = Vec::new();

    let make = |id: &str, line: &str| VocabExample {
        song: song_of(id).to_string(),
        song_name: id2song.get(id).unwrap_or(&"").to_string(),
        spanish: line.to_string(),
        english: String::new(),
    };

    for m in &entry.matches {
        let m_pos = if m.pos.is_empty() { "X" } else { m.pos.as_str() };
        if m_pos != pos || m.example_id.is_empty() {
            continue;
        }
        let line = id2line
            .get(m.example_id.as_str())
            .map(|l| l.trim())
            .unwrap_or("");
        if line.is_empty() || !seen.insert(line.to_string()) {
            continue;
        }
        results.push(make(&m.example_id, line));
    }

    if results.is_empty() {
        for ex in &entry.evidence.examples {
            let line = ex.line.trim();
            if line.is_empty() || !seen.insert(line.to_string()) {
                continue;
            }
            results.push(make(&ex.id, line));
        }
    }
    results
}

/// Grow every meaning up to `max_per_pos` examples.
///
/// Missing example translations are recovered from `cache` when possible.
pub fn expand_examples(
    vocabulary: &mut [VocabEntry],
    lemma_entries: &[LemmaEntry],
    cache: &TranslationCache,
    max_per_pos: usize,
) -> ExpandReport {
    let lookup = richest_entries(lemma_entries);
    let mut report = ExpandReport::default();

    for entry in vocabulary.iter_mut() {
        let source = lookup.get(entry.word.as_str());
        for meaning in entry.meanings.iter_mut() {
            if meaning.examples.len() >= max_per_pos {
                report.already_full += 1;
                continue;
            }
            for ex in meaning.examples.iter_mut().filter(|ex| ex.english.is_empty()) {
                if let Some(en) = cache.cached_line(&ex.spanish) {
                    ex.english = en.to_string();
                    report.recovered += 1;
                }
            }
            let source = match source {
                Some(s) => s,
                None => continue,
            };
            let mut existing: HashSet<String> =
                meaning.examples.iter().map(|ex| ex.spanish.clone()).collect();
            for mut candidate in available_examples(source, &meaning.pos) {
                if meaning.examples.len() >= max_per_pos {
                    break;
                }
                if !existing.insert(candidate.spanish.clone()) {
                    continue;
                }
                if let Some(en) = cache.cached_line(&candidate.spanish) {
                    candidate.english = en.to_string();
                    report.recovered += 1;
                }
                meaning.examples.push(candidate);
                report.added += 1;
            }
        }
    }
    report
}
