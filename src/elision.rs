/*! S-elision merging

Sung lyrics often drop a final `s` (`ere'` for `eres`, `vamo'` for `vamos`).
Such spellings are merged into their full form before lemmatization:
the key becomes the full word, `display_form` keeps the elided spelling,
frequencies are summed and examples pooled.

Merges are driven by a reviewed mapping file. [propose_mapping] drafts one.
!*/
use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::evidence::{EvidenceEntry, EvidenceExample};

/// Elisions that do not stand for a dropped `s`.
const NON_S_ELISIONS: [&str; 4] = ["pa'", "na'", "to'", "pal'"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MergeType {
    /// Both spellings are in the vocabulary and map to the target.
    ElisionPair,
    /// Only the elided spelling is in the vocabulary.
    ElidedOnly,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingRow {
    pub elided_word: String,
    #[serde(default)]
    pub full_word: String,
    pub target_word: String,
    pub display_form: String,
    /// `merge` rows are applied, anything else (`review`, `skip`) is ignored.
    pub action: String,
    pub merge_type: MergeType,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeTarget {
    pub target_word: String,
    pub display_form: String,
}

/// Build the `word -> target` lookup from mapping rows.
pub fn load_merge_targets(rows: &[MappingRow]) -> HashMap<String, MergeTarget> {
    let mut targets = HashMap::new();
    for row in rows.iter().filter(|r| r.action == "merge") {
        let target = MergeTarget {
            target_word: row.target_word.clone(),
            display_form: row.display_form.clone(),
        };
        match row.merge_type {
            MergeType::ElisionPair => {
                targets.insert(row.elided_word.clone(), target.clone());
                targets.insert(row.full_word.clone(), target);
            }
            MergeType::ElidedOnly => {
                targets.insert(row.elided_word.clone(), target);
            }
            MergeType::Other => (),
        }
    }
    targets
}

#[derive(Default)]
struct Group {
    ppm: f64,
    count: u64,
    examples: Vec<EvidenceExample>,
    display_form: Option<String>,
}

/// Merge entries according to `targets`.
///
/// Examples are deduplicated by song and capped at `max_examples`.
/// Output is sorted by decreasing ppm.
pub fn merge_evidence(
    entries: Vec<EvidenceEntry>,
    targets: &HashMap<String, MergeTarget>,
    max_examples: usize,
) -> Vec<EvidenceEntry> {
    // keep first-seen order so that equal ppm entries stay stable
    let mut order: Vec<String> = Vec::new();
    let mut groups: HashMap<String, Group> = HashMap::new();

    for entry in entries {
        let (key, display_form) = match targets.get(&entry.word) {
            Some(t) => (t.target_word.clone(), Some(t.display_form.clone())),
            None => (entry.word.clone(), None),
        };
        let group = groups.entry(key.clone()).or_insert_with(|| {
            order.push(key.clone());
            Group::default()
        });
        match display_form {
            Some(df) => group.display_form = Some(df),
            None => {
                if group.display_form.is_none() {
                    group.display_form = entry.display_form.or_else(|| Some(entry.word.clone()));
                }
            }
        }
        group.ppm += entry.occurrences_ppm;
        group.count += entry.corpus_count;
        group.examples.extend(entry.examples);
    }

    let mut out: Vec<EvidenceEntry> = order
        .into_iter()
        .filter_map(|word| groups.remove(&word).map(|g| (word, g)))
        .map(|(word, g)| {
            let mut seen = HashSet::new();
            let examples = g
                .examples
                .into_iter()
                .filter(|ex| match ex.song_id() {
                    Some(id) => seen.insert(id.to_string()),
                    None => true,
                })
                .take(max_examples)
                .collect();
            let display_form = g.display_form.filter(|df| df != &word);
            EvidenceEntry {
                word,
                occurrences_ppm: g.ppm,
                corpus_count: g.count,
                examples,
                display_form,
            }
        })
        .collect();

    out.sort_by(|a, b| b.occurrences_ppm.total_cmp(&a.occurrences_ppm));
    out
}

fn ends_with_vowel(s: &str) -> bool {
    s.chars()
        .last()
        .map(|c| "aeiouáéíóú".contains(c))
        .unwrap_or(false)
}

/// Draft a mapping from the vocabulary itself.
///
/// `elision_pair` rows are proposed as `merge`, `elided_only` ones as `review`.
pub fn propose_mapping(entries: &[EvidenceEntry]) -> Vec<MappingRow> {
    let vocabulary: HashSet<&str> = entries.iter().map(|e| e.word.as_str()).collect();
    let mut rows = Vec::new();
    for entry in entries {
        let word = entry.word.as_str();
        if NON_S_ELISIONS.contains(&word) {
            continue;
        }
        let stem = match word.strip_suffix('\'') {
            Some(s) if !s.is_empty() => s,
            _ => continue,
        };
        let full = format!("{}s", stem);
        if vocabulary.contains(full.as_str()) {
            rows.push(MappingRow {
                elided_word: word.to_string(),
                full_word: full.clone(),
                target_word: full,
                display_form: word.to_string(),
                action: "merge".to_string(),
                merge_type: MergeType::ElisionPair,
            });
        } else if ends_with_vowel(stem) && stem.chars().count() >= 3 {
            rows.push(MappingRow {
                elided_word: word.to_string(),
                full_word: full.clone(),
                target_word: full,
                display_form: word.to_string(),
                action: "review".to_string(),
                merge_type: MergeType::ElidedOnly,
            });
        }
    }
    rows
}
