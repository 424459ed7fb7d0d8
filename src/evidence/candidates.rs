//! Counting and per-song candidate lines.
use std::collections::{HashMap, HashSet};

use lazy_static::lazy_static;

use crate::io::BatchSong;
use crate::text::{clean_genius_lyrics, tokenize};

lazy_static! {
    /// Words hinting that a line is a sentence rather than an ad-lib.
    static ref CONNECTORS: HashSet<&'static str> = [
        "que", "pero", "si", "cuando", "porque", "aunque", "con", "sin", "me", "te", "se",
        "nos", "ya", "pa'", "pal", "pa", "al", "del", "la", "el", "los", "las",
    ]
    .into_iter()
    .collect();
}

/// A candidate example line for a word: the best line of one song.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub score: i32,
    pub batch: usize,
    pub song_id: u64,
    pub line_no: usize,
    pub line_text: String,
    pub song_title: String,
}

/// Conservative line filter: at least 5 tokens, and no long filler lines (`eh eh eh eh eh eh`).
pub fn is_good_context_line(tokens: &[String]) -> bool {
    if tokens.len() < 5 {
        return false;
    }
    if tokens.len() >= 6 {
        let distinct: HashSet<&String> = tokens.iter().collect();
        if distinct.len() <= 2 {
            return false;
        }
    }
    true
}

/// Sentence-likeness score. Favors mid-length lines that contain connectors.
pub fn score_line(tokens: &[String]) -> i32 {
    let n = tokens.len();
    let mut score = 0;
    if (7..=16).contains(&n) {
        score += 3;
    } else if (5..=20).contains(&n) {
        score += 1;
    }
    if tokens.iter().any(|t| CONNECTORS.contains(t.as_str())) {
        score += 1;
    }
    if n > 24 {
        score -= 2;
    }
    score
}

/// Returns the corpus counts of every token, and for each word the candidate lines
/// (one per song at most).
pub fn build_counts_and_candidates(
    songs: &[BatchSong],
) -> (HashMap<String, u64>, HashMap<String, Vec<Candidate>>) {
    let mut counts: HashMap<String, u64> = HashMap::new();
    let mut candidates: HashMap<String, Vec<Candidate>> = HashMap::new();

    for song in songs {
        let raw = match song.record.lyrics.as_deref() {
            Some(l) if !l.is_empty() => l,
            _ => continue,
        };
        let clean = clean_genius_lyrics(raw);
        if clean.is_empty() {
            continue;
        }

        let mut lines: Vec<(usize, &str, Vec<String>)> = Vec::new();
        for (idx, line) in clean.split('\n').enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let tokens = tokenize(line);
            if tokens.is_empty() {
                continue;
            }
            for t in &tokens {
                *counts.entry(t.clone()).or_insert(0) += 1;
            }
            lines.push((idx + 1, line, tokens));
        }

        // best line per word for this song
        let mut best: HashMap<&str, (i32, usize, &str)> = HashMap::new();
        for (line_no, line, tokens) in &lines {
            if !is_good_context_line(tokens) {
                continue;
            }
            let s = score_line(tokens);
            for w in tokens.iter().collect::<HashSet<_>>() {
                match best.get(w.as_str()) {
                    Some((prev, _, _)) if *prev >= s => {}
                    _ => {
                        best.insert(w.as_str(), (s, *line_no, *line));
                    }
                }
            }
        }

        for (w, (score, line_no, line)) in best {
            candidates.entry(w.to_string()).or_default().push(Candidate {
                score,
                batch: song.batch,
                song_id: song.record.id,
                line_no,
                line_text: line.to_string(),
                song_title: song.record.title.clone(),
            });
        }
    }

    (counts, candidates)
}
