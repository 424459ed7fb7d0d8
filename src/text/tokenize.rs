//! Word tokenization: letters only, with optional internal apostrophes.
use lazy_static::lazy_static;
use regex::Regex;

/// Letters accepted inside a word.
pub const LETTER_CLASS: &str = "A-Za-zÁÉÍÓÚÜÑáéíóúüñ";

lazy_static! {
    static ref WORD_RE: Regex = Regex::new(&format!(
        "[{l}]+(?:'[{l}]+)*'?",
        l = LETTER_CLASS
    ))
    .expect("word regex is valid");
}

/// Lowercased word tokens of a line.
///
/// A trailing apostrophe is kept so that elided forms (`pa'`, `ere'`) stay
/// distinct from their unelided counterparts.
pub fn tokenize(line: &str) -> Vec<String> {
    WORD_RE
        .find_iter(line)
        .map(|m| m.as_str().to_lowercase())
        .collect()
}
