//! Genius lyric cleaning.
use lazy_static::lazy_static;
use regex::Regex;

use super::normalize_text;

const FOOTER_MARKERS: [&str; 2] = ["You might also like", "Embed"];

lazy_static! {
    static ref SECTION_LINE_RE: Regex = Regex::new(r"^\[.*\]$").expect("section regex is valid");
}

/// Removes Genius boilerplate from scraped lyrics.
///
/// - drops everything up to the first `Lyrics` header
/// - cuts at the earliest footer marker
/// - drops blank lines and `[Chorus]`-like section lines
pub fn clean_genius_lyrics(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }
    let mut text = normalize_text(raw);

    if let Some(idx) = text.find("Lyrics") {
        text = text[idx + "Lyrics".len()..]
            .trim_start_matches(|c: char| matches!(c, ' ' | '\n' | '\t' | '-' | ':'))
            .to_string();
    }

    if let Some(cut) = FOOTER_MARKERS.iter().filter_map(|m| text.find(m)).min() {
        text.truncate(cut);
    }

    text.split('\n')
        .map(str::trim)
        .filter(|l| !l.is_empty() && !SECTION_LINE_RE.is_match(l))
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::clean_genius_lyrics;

    #[test]
    fn strips_header_sections_and_footer() {
        let raw = "12 ContributorsTití Me Preguntó Lyrics\n[Intro]\nTití me preguntó\r\n\n[Verso 1]\nsi tengo muchas novias\nYou might also like\nother songs 5Embed";
        assert_eq!(
            clean_genius_lyrics(raw),
            "Tití me preguntó\nsi tengo muchas novias"
        );
    }

    #[test]
    fn no_header() {
        let raw = "  primera línea  \n\n[Coro]\nsegunda línea";
        assert_eq!(clean_genius_lyrics(raw), "primera línea\nsegunda línea");
    }

    #[test]
    fn empty() {
        assert_eq!(clean_genius_lyrics(""), "");
        assert_eq!(clean_genius_lyrics("Lyrics\n[Intro]\n"), "");
    }
}
