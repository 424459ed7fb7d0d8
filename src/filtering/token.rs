//! token-level junk detection
use std::collections::HashSet;

use lazy_static::lazy_static;
use regex::Regex;

use super::{Filter, Inspect, Inspection};

lazy_static! {
    /// Common ad-libs and vocables.
    pub static ref VOCABLES: HashSet<&'static str> = [
        "oh", "uh", "ouh", "ooh", "woo", "wooh", "yeah", "yea", "yah", "ayy", "ay", "eh", "mm",
        "mmm", "hah", "haha", "la", "na", "nan", "lalala", "nanan",
    ]
    .into_iter()
    .collect();

    /// Short Spanish function words, never junk even when they look like vocables or are one letter long.
    pub static ref FUNCTION_WORDS: HashSet<&'static str> = [
        "a", "y", "o", "e", "u", "la", "el", "lo", "le", "de", "en", "se", "me", "te", "mi",
        "tu", "su", "ya", "no", "si", "que", "pa", "pa'", "na'",
    ]
    .into_iter()
    .collect();

    /// English words frequent in the lyrics that have no Spanish homograph.
    pub static ref ENGLISH_WORDS: HashSet<&'static str> = [
        "baby", "bitch", "flow", "party", "sexy", "girl", "love", "money", "crazy", "shorty",
        "bad", "real", "trap", "boy", "fuck", "shit", "big", "cash", "king", "dance", "drip",
        "hood", "swag", "hello", "please", "sorry", "okay", "cool", "the", "you", "my", "what",
        "yes", "and", "with", "your", "good", "night", "feel", "like", "want", "know",
    ]
    .into_iter()
    .collect();

    static ref WORD_CHARS_RE: Regex = Regex::new(r"^[\w'’-]+$").expect("word chars regex is valid");
}

/// Strong reasons make a token junk on their own.
const STRONG_REASONS: [&str; 2] = ["empty_token", "no_letters"];

fn normalize_token(token: &str) -> String {
    token.trim().to_lowercase().replace(['’', '´', '`'], "'")
}

/// `true` if a character is repeated at least 4 times in a row (`aaaa`, `!!!!`).
fn has_repeated_run(s: &str) -> bool {
    let mut prev = None;
    let mut run = 0;
    for c in s.chars() {
        if Some(c) == prev {
            run += 1;
            if run >= 4 {
                return true;
            }
        } else {
            prev = Some(c);
            run = 1;
        }
    }
    false
}

/// Token junk heuristics (garbage, ad-libs, non-words; not language).
///
/// A token is junk if it has a strong reason, or two reasons or more.
#[derive(Debug, Default)]
pub struct JunkToken;

impl Inspect<&str> for JunkToken {
    fn inspect(&self, token: &str) -> Inspection {
        let t = normalize_token(token);
        if t.is_empty() {
            return Inspection {
                junk: true,
                reasons: vec!["empty_token".to_string()],
            };
        }

        let function_word = FUNCTION_WORDS.contains(t.as_str());
        let mut reasons = Vec::new();
        if t.chars().count() <= 1 && !function_word {
            reasons.push("too_short");
        }
        if !t.chars().any(char::is_alphabetic) {
            reasons.push("no_letters");
        }
        if !WORD_CHARS_RE.is_match(&t) {
            reasons.push("non_word_chars");
        }
        if has_repeated_run(&t) {
            reasons.push("repeated_chars");
        }
        if VOCABLES.contains(t.as_str()) && !function_word {
            reasons.push("vocable");
        }

        let junk = reasons.iter().any(|r| STRONG_REASONS.contains(r)) || reasons.len() >= 2;
        Inspection {
            junk,
            reasons: reasons.into_iter().map(String::from).collect(),
        }
    }
}

impl Filter<&str> for JunkToken {
    fn detect(&self, token: &str) -> bool {
        !self.inspect(token).junk
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_words_kept() {
        let f = JunkToken;
        assert!(f.detect("corazón"));
        assert!(f.detect("pa'"));
        assert!(f.detect("y"));
        assert!(f.inspect("la").reasons.is_empty());
    }

    #[test]
    fn vocables_alone_are_not_junk() {
        let i = JunkToken.inspect("yeah");
        assert!(!i.junk);
        assert!(i.has("vocable"));
    }

    #[test]
    fn junk_tokens() {
        let f = JunkToken;
        // no letters is strong
        assert!(!f.detect("1234"));
        // a single reason is not enough
        assert!(f.detect("x!"));
        assert!(JunkToken.inspect("x!").has("non_word_chars"));
        // repeated run only
        assert!(f.detect("ooooh"));
        // repeated + non word chars
        assert!(!f.detect("!!!!a"));
        assert!(!f.detect("  "));
        assert!(JunkToken.inspect("").has("empty_token"));
    }

    #[test]
    fn single_letter() {
        let i = JunkToken.inspect("k");
        assert!(i.has("too_short"));
        assert!(!i.junk);
    }

    #[test]
    fn repeated_runs() {
        assert!(has_repeated_run("ahhhh"));
        assert!(!has_repeated_run("ahhh"));
        assert!(!has_repeated_run("perro"));
    }
}
