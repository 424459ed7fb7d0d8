//! English flag, from general-language frequencies.
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::frequency::WordFrequency;
use crate::lang::Lang;

lazy_static! {
    static ref SPANISH_DIACRITICS: Regex =
        Regex::new(r"(?i)[áéíóúüñ]").expect("diacritics regex is valid");
}

/// `en / (en + es)` above which a word is flagged English.
const EN_RATIO_THRESHOLD: f64 = 0.85;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageFlags {
    pub is_english: bool,
    pub confidence: f64,
    pub reason: String,
}

impl LanguageFlags {
    fn new(is_english: bool, confidence: f64, reason: &str) -> Self {
        Self {
            is_english,
            confidence,
            reason: reason.to_string(),
        }
    }

    /// English with a confidence high enough to skip tagging.
    pub fn confidently_english(&self) -> bool {
        self.is_english && self.confidence >= 0.90
    }
}

fn round3(x: f64) -> f64 {
    (x * 1000.0).round() / 1000.0
}

pub fn english_flag(word: &str, frequencies: &dyn WordFrequency) -> LanguageFlags {
    let w = word.trim().to_lowercase();
    if SPANISH_DIACRITICS.is_match(&w) {
        return LanguageFlags::new(false, 0.01, "spanish_diacritic");
    }

    let en = frequencies.frequency(&w, Lang::English);
    let es = frequencies.frequency(&w, Lang::Spanish);
    if en == 0.0 && es == 0.0 {
        return LanguageFlags::new(false, 0.20, "wordfreq_unknown");
    }

    let en_ratio = en / (en + es);
    if en_ratio >= EN_RATIO_THRESHOLD {
        LanguageFlags::new(true, round3(en_ratio), "wordfreq_ratio")
    } else {
        LanguageFlags::new(false, round3(1.0 - en_ratio), "wordfreq_ratio")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frequency::FrequencyTable;

    fn table() -> FrequencyTable {
        let mut t = FrequencyTable::default();
        t.insert(Lang::English, "baby", 9e-4);
        t.insert(Lang::Spanish, "baby", 1e-5);
        t.insert(Lang::English, "no", 1e-3);
        t.insert(Lang::Spanish, "no", 1e-2);
        t
    }

    #[test]
    fn diacritics_win() {
        let f = english_flag("Corazón", &table());
        assert!(!f.is_english);
        assert_eq!(f.reason, "spanish_diacritic");
        assert_eq!(f.confidence, 0.01);
    }

    #[test]
    fn unknown_word() {
        let f = english_flag("perreo", &table());
        assert!(!f.is_english);
        assert_eq!(f.reason, "wordfreq_unknown");
    }

    #[test]
    fn ratio() {
        let f = english_flag("baby", &table());
        assert!(f.is_english);
        assert_eq!(f.confidence, 0.989);
        assert!(f.confidently_english());

        let f = english_flag("no", &table());
        assert!(!f.is_english);
        assert_eq!(f.confidence, 0.909);
    }
}
