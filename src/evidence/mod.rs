/*! Evidence building

Counts word occurrences over the lyrics corpus and picks, for each word,
a small set of diversified example lines:

1. Every cleaned lyric line is tokenized and its tokens counted.
1. Lines that pass [is_good_context_line] are scored with [score_line], and only the best line per (song, word) is kept as a candidate.
1. Words are visited from most to least frequent. Candidates from songs that have been used the least so far are preferred, then higher scores.
1. At most one example per song is kept for a word.
!*/
mod candidates;
mod select;
mod types;

pub use candidates::{build_counts_and_candidates, is_good_context_line, score_line, Candidate};
pub use select::{select_examples, to_evidence};
pub use types::{EvidenceEntry, EvidenceExample};
