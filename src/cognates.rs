/*! Transparent cognates

A Spanish word is a transparent cognate of one of its English glosses when
both are equal up to accents and plurals, or when a suffix rule maps one to
the other (`nación` -> `nation`, `realidad` -> `reality`).
!*/
use lazy_static::lazy_static;
use regex::Regex;

use crate::text::strip_accents;
use crate::vocabulary::VocabEntry;

lazy_static! {
    static ref PARENTHETICAL: Regex = Regex::new(r"\([^)]*\)").expect("parenthetical regex is valid");
}

/// `(spanish suffix, english suffix)`, most specific first.
pub const SUFFIX_RULES: [(&str, &str); 24] = [
    ("cion", "tion"),
    ("sion", "sion"),
    ("ancia", "ance"),
    ("encia", "ence"),
    ("mente", "ly"),
    ("ismo", "ism"),
    ("ista", "ist"),
    ("ivo", "ive"),
    ("iva", "ive"),
    ("oso", "ous"),
    ("osa", "ous"),
    ("ico", "ic"),
    ("ica", "ic"),
    ("idad", "ity"),
    ("dad", "ty"),
    ("ente", "ent"),
    ("ante", "ant"),
    ("ia", "y"),
    ("ario", "ary"),
    ("aria", "ary"),
    ("ura", "ure"),
    ("or", "or"),
    ("al", "al"),
    ("ble", "ble"),
];

fn normalize(s: &str) -> String {
    strip_accents(&s.trim().to_lowercase())
}

/// Strips Spanish and English plural endings.
fn strip_plural(w: &str) -> String {
    let len = w.chars().count();
    if len >= 4 {
        if let Some(stem) = w.strip_suffix("ces") {
            return format!("{}z", stem);
        }
    }
    if len >= 5 {
        if let Some(stem) = w.strip_suffix("es") {
            return stem.to_string();
        }
    }
    if len >= 4 {
        if let Some(stem) = w.strip_suffix('s') {
            return stem.to_string();
        }
    }
    w.to_string()
}

fn apply_suffix(w: &str, from: &str, to: &str) -> Option<String> {
    match w.strip_suffix(from) {
        Some(stem) if !stem.is_empty() => Some(format!("{}{}", stem, to)),
        _ => None,
    }
}

pub fn is_transparent_cognate(spanish: &str, english: &str) -> bool {
    let s = normalize(spanish);
    let e = normalize(english);
    if s.chars().count() < 4 || e.chars().count() < 4 {
        return false;
    }
    let s = strip_plural(&s);
    let e = strip_plural(&e);
    if s == e {
        return true;
    }
    SUFFIX_RULES
        .iter()
        .filter_map(|(from, to)| apply_suffix(&s, from, to))
        .any(|candidate| candidate == e)
}

/// Candidate English words and phrases of a translation.
///
/// `"ice cream / gelato"` gives `["ice cream", "ice", "cream", "gelato"]`.
pub fn split_english_glosses(translation: &str) -> Vec<String> {
    if translation.is_empty() {
        return vec![];
    }
    let lower = translation.to_lowercase();
    let t = PARENTHETICAL.replace_all(&lower, "");
    let mut out: Vec<String> = Vec::new();
    for part in t.split(['/', ',']).map(str::trim).filter(|p| !p.is_empty()) {
        let tokens: Vec<&str> = part
            .split_whitespace()
            .filter(|tok| tok.chars().all(char::is_alphabetic))
            .collect();
        if !tokens.is_empty() {
            out.push(tokens.join(" "));
        }
        for tok in tokens {
            if !out.iter().any(|o| o == tok) {
                out.push(tok.to_string());
            }
        }
    }
    out
}

/// Checks the word and lemma of `entry` against its translations.
pub fn entry_is_cognate(entry: &VocabEntry) -> bool {
    let mut candidates: Vec<&str> = Vec::with_capacity(2);
    if !entry.word.is_empty() {
        candidates.push(&entry.word);
    }
    if !entry.lemma.is_empty() && entry.lemma != entry.word {
        candidates.push(&entry.lemma);
    }
    entry
        .meanings
        .iter()
        .flat_map(|m| split_english_glosses(&m.translation))
        .any(|gloss| candidates.iter().any(|sp| is_transparent_cognate(sp, &gloss)))
}

/// Recomputes `is_transparent_cognate` on every entry, returns the number of cognates.
pub fn flag_cognates(vocabulary: &mut [VocabEntry]) -> usize {
    let mut count = 0;
    for entry in vocabulary.iter_mut() {
        entry.is_transparent_cognate = entry_is_cognate(entry);
        if entry.is_transparent_cognate {
            count += 1;
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocabulary::tests::{meaning, vocab};

    #[test]
    fn plurals() {
        assert_eq!(strip_plural("voces"), "voz");
        assert_eq!(strip_plural("nations"), "nation");
        assert_eq!(strip_plural("clases"), "clas");
        assert_eq!(strip_plural("mes"), "mes");
    }

    #[test]
    fn cognates() {
        assert!(is_transparent_cognate("nación", "nation"));
        assert!(is_transparent_cognate("realidad", "reality"));
        assert!(is_transparent_cognate("totalmente", "totally"));
        assert!(is_transparent_cognate("activo", "active"));
        assert!(is_transparent_cognate("energía", "energy"));
        assert!(is_transparent_cognate("actores", "actors"));
        assert!(is_transparent_cognate("Animal", "animal"));
        assert!(!is_transparent_cognate("casa", "house"));
        assert!(!is_transparent_cognate("famoso", "famous"));
        // too short
        assert!(!is_transparent_cognate("mal", "mal"));
    }

    #[test]
    fn glosses() {
        assert_eq!(
            split_english_glosses("Ice cream / gelato (informal), 2x"),
            vec!["ice cream", "ice", "cream", "gelato"]
        );
        assert!(split_english_glosses("").is_empty());
    }

    #[test]
    fn flags_entries() {
        let mut v = vec![
            vocab(1, "naciones", "nación", vec![meaning("NOUN", "nations", vec![])]),
            vocab(2, "casa", "casa", vec![meaning("NOUN", "house / home", vec![])]),
        ];
        v[1].is_transparent_cognate = true;
        assert_eq!(flag_cognates(&mut v), 1);
        assert!(v[0].is_transparent_cognate);
        assert!(!v[1].is_transparent_cognate);
    }
}
