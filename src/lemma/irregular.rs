//! Irregular future/conditional stems.
//!
//! Taggers trained on news text do not know suppletive future stems
//! (`pondr-`, `tendr-`...) and invent lemmas such as `pondrar`.
use super::{Correct, Surface};
use crate::text::strip_accents;

/// Stem -> infinitive.
const IRREGULAR_FUTURE_STEMS: [(&str, &str); 12] = [
    ("pondr", "poner"),
    ("podr", "poder"),
    ("saldr", "salir"),
    ("tendr", "tener"),
    ("vendr", "venir"),
    ("valdr", "valer"),
    ("querr", "querer"),
    ("cabr", "caber"),
    ("sabr", "saber"),
    ("habr", "haber"),
    ("har", "hacer"),
    ("dir", "decir"),
];

/// Future and conditional endings, accents stripped.
const FUTURE_COND_SUFFIXES: [&str; 11] = [
    "e", "as", "a", "emos", "eis", "an", "ia", "ias", "iamos", "iais", "ian",
];

/// Infinitive of `word` if it is a future/conditional form of an irregular verb.
pub fn irregular_future_lemma(word: &str) -> Option<&'static str> {
    let w = strip_accents(&word.to_lowercase());
    IRREGULAR_FUTURE_STEMS
        .iter()
        .find(|(stem, _)| {
            w.strip_prefix(stem)
                .map(|suffix| FUTURE_COND_SUFFIXES.contains(&suffix))
                .unwrap_or(false)
        })
        .map(|(_, infinitive)| *infinitive)
}

/// Overrides the tagger lemma of irregular future/conditional forms.
pub struct IrregularFuture;

impl Correct for IrregularFuture {
    fn correct(&self, surface: &Surface, lemma: String) -> String {
        match irregular_future_lemma(surface.raw) {
            Some(infinitive) => infinitive.to_string(),
            None => lemma,
        }
    }
}
