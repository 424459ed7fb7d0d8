//! Greedy, diversified example selection.
use std::collections::{HashMap, HashSet};

use itertools::Itertools;

use super::{Candidate, EvidenceEntry, EvidenceExample};

/// Select up to `max_examples` candidates per word.
///
/// Words are visited by decreasing count. For each word, candidates from songs
/// that were used the least so far come first, then higher scores, then
/// earlier batches. A song gives at most one example per word.
pub fn select_examples(
    counts: &HashMap<String, u64>,
    mut candidates: HashMap<String, Vec<Candidate>>,
    max_examples: usize,
) -> HashMap<String, Vec<Candidate>> {
    let mut selected = HashMap::with_capacity(candidates.len());
    let mut global_song_use: HashMap<u64, usize> = HashMap::new();

    let words: Vec<String> = candidates
        .keys()
        .sorted_by(|a, b| {
            let ca = counts.get(*a).copied().unwrap_or(0);
            let cb = counts.get(*b).copied().unwrap_or(0);
            cb.cmp(&ca).then_with(|| a.cmp(b))
        })
        .cloned()
        .collect();

    for word in words {
        let mut cands = candidates.remove(&word).unwrap_or_default();
        cands.sort_by_cached_key(|c| {
            (
                global_song_use.get(&c.song_id).copied().unwrap_or(0),
                -c.score,
                c.batch,
                c.song_id.to_string(),
            )
        });

        let mut used_songs = HashSet::new();
        let chosen: Vec<Candidate> = cands
            .into_iter()
            .filter(|c| used_songs.insert(c.song_id))
            .take(max_examples)
            .collect();

        for c in &chosen {
            *global_song_use.entry(c.song_id).or_insert(0) += 1;
        }
        selected.insert(word, chosen);
    }

    selected
}

/// Final evidence list, sorted by decreasing count then word.
pub fn to_evidence(
    counts: &HashMap<String, u64>,
    selected: &HashMap<String, Vec<Candidate>>,
) -> Vec<EvidenceEntry> {
    let total = counts.values().sum::<u64>().max(1) as f64;

    counts
        .iter()
        .sorted_by(|(wa, ca), (wb, cb)| cb.cmp(ca).then_with(|| wa.cmp(wb)))
        .map(|(word, count)| EvidenceEntry {
            word: word.clone(),
            occurrences_ppm: (*count as f64 / total) * 1_000_000.0,
            corpus_count: *count,
            examples: selected
                .get(word)
                .map(|chosen| {
                    chosen
                        .iter()
                        .map(|c| EvidenceExample {
                            id: format!("{}:{}", c.song_id, c.line_no),
                            line: c.line_text.clone(),
                            title: c.song_title.clone(),
                        })
                        .collect()
                })
                .unwrap_or_default(),
            display_form: None,
        })
        .collect()
}
