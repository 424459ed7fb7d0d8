//! line-level junk detection
use lazy_static::lazy_static;
use regex::Regex;

use super::{Filter, Inspect, Inspection};

lazy_static! {
    /// Genius boilerplate, with the reason name they produce.
    static ref GENIUS_JUNK: Vec<(&'static str, Regex)> = [
        ("read_more", r"\bread more\b"),
        ("you_might_also_like", r"\byou might also like\b"),
        ("embed", r"\bembed\b"),
        ("translation", r"\btranslation\b"),
        ("transcript", r"\btranscript\b"),
    ]
    .into_iter()
    .map(|(name, pat)| (name, Regex::new(pat).expect("genius junk regex is valid")))
    .collect();
}

/// Empty lines and scrape boilerplate.
///
/// Lines shorter than [JunkLine::min_chars] get a `line_too_short` reason
/// but are not junk on that ground alone.
#[derive(Debug)]
pub struct JunkLine {
    min_chars: usize,
}

impl Default for JunkLine {
    /// 4 chars.
    fn default() -> Self {
        Self { min_chars: 4 }
    }
}

impl Inspect<&str> for JunkLine {
    fn inspect(&self, line: &str) -> Inspection {
        let s = line.trim();
        if s.is_empty() {
            return Inspection {
                junk: true,
                reasons: vec!["empty_line".to_string()],
            };
        }

        let low = s.to_lowercase();
        let mut reasons: Vec<String> = GENIUS_JUNK
            .iter()
            .filter(|(_, re)| re.is_match(&low))
            .map(|(name, _)| format!("genius_junk:{}", name))
            .collect();
        let junk = !reasons.is_empty();

        if s.chars().count() < self.min_chars {
            reasons.push("line_too_short".to_string());
        }
        Inspection { junk, reasons }
    }
}

impl Filter<&str> for JunkLine {
    fn detect(&self, line: &str) -> bool {
        !self.inspect(line).junk
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boilerplate() {
        let f = JunkLine::default();
        assert!(!f.detect("See Bad Bunny LiveGet tickets... Read More"));
        assert!(!f.detect("5 Embed"));
        assert!(!f.detect(""));
        assert!(f.detect("embedded in my heart"));
        let i = f.inspect("You might also like");
        assert_eq!(i.reasons, vec!["genius_junk:you_might_also_like".to_string()]);
    }

    #[test]
    fn short_lines_kept_with_reason() {
        let i = JunkLine::default().inspect("ey");
        assert!(!i.junk);
        assert!(i.has("line_too_short"));
    }

    #[test]
    fn regular_line() {
        let i = JunkLine::default().inspect("Yo perreo sola");
        assert_eq!(i, Inspection::default());
    }
}
