//! Character-level normalization.
use unic_ucd::normal::decompose_canonical;
use unic_ucd::GeneralCategory;

/// Unifies line endings, quotes and dashes.
pub fn normalize_text(s: &str) -> String {
    s.replace("\r\n", "\n")
        .replace('\r', "\n")
        .replace(['’', '‘', '`'], "'")
        .replace(['–', '—'], "-")
}

/// Accent removal: canonical decomposition, then drop nonspacing marks.
///
/// `"canción"` becomes `"cancion"`, `"pingüino"` becomes `"pinguino"`.
/// `ñ` decomposes too and becomes `n`.
pub fn strip_accents(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        decompose_canonical(c, |d| {
            if GeneralCategory::of(d) != GeneralCategory::NonspacingMark {
                out.push(d);
            }
        });
    }
    out
}

/// Learner-oriented normalization used to match tagger tokens against vocabulary words.
///
/// Keeps letters and apostrophes only, straightens and collapses apostrophes
/// and trims them from both ends.
pub fn normalize_for_match(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut last_apostrophe = false;
    for c in s.to_lowercase().chars() {
        if c == '\'' || c == '’' {
            if !last_apostrophe {
                out.push('\'');
            }
            last_apostrophe = true;
        } else if c.is_alphabetic() {
            out.push(c);
            last_apostrophe = false;
        }
    }
    out.trim_matches('\'').to_string()
}
