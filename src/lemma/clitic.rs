//! Clitic-attached verbs and invented lemmas.
//!
//! Infinitives, gerunds and imperatives take pronoun clitics
//! (`ponerla`, `darte`, `enamorarme`), which taggers often read as noun suffixes.
use super::{Correct, Surface};
use crate::frequency::WordFrequency;
use crate::lang::Lang;

/// Longest first, so that compound clitics are tried before simple ones.
const CLITICS: [&str; 15] = [
    "melo", "telo", "sela", "selo", "nos", "les", "las", "los", "me", "te", "se", "le", "la",
    "lo", "os",
];

const VERB_ENDINGS: [&str; 6] = ["ar", "er", "ir", "ár", "ér", "ír"];

/// Words whose ending happens to look like verb + clitic.
const NOUN_EXCEPTIONS: [&str; 19] = [
    "muerte", "suerte", "parte", "marte", "arte", "fuerte", "frente", "gente", "mente", "madre",
    "padre", "libre", "sobre", "nombre", "entre", "siempre", "antes", "lunes", "martes",
];

/// Minimum Spanish frequency for a stripped base to count as a real verb.
const MIN_BASE_FREQUENCY: f64 = 1e-6;

/// Base verb of `word` if it looks like `<verb> + <clitic>`.
pub fn strip_clitic(word: &str, frequencies: &dyn WordFrequency) -> Option<String> {
    let w = word.trim().to_lowercase();
    if NOUN_EXCEPTIONS.contains(&w.as_str()) {
        return None;
    }
    CLITICS
        .iter()
        .filter_map(|clitic| w.strip_suffix(clitic))
        .filter(|base| base.chars().count() >= 3)
        .filter(|base| VERB_ENDINGS.iter().any(|e| base.ends_with(e)))
        .find(|base| frequencies.frequency(base, Lang::Spanish) >= MIN_BASE_FREQUENCY)
        .map(String::from)
}

/// Lemmas unknown in both languages are replaced by the surface form.
pub struct UnknownLemma<'a> {
    pub frequencies: &'a dyn WordFrequency,
}

impl<'a> Correct for UnknownLemma<'a> {
    fn correct(&self, surface: &Surface, lemma: String) -> String {
        if self.frequencies.frequency(&lemma, Lang::Spanish) == 0.0
            && self.frequencies.frequency(&lemma, Lang::English) == 0.0
        {
            surface.norm.to_string()
        } else {
            lemma
        }
    }
}

/// Self-lemmatized words get their clitic stripped when that gives a known verb.
pub struct CliticVerb<'a> {
    pub frequencies: &'a dyn WordFrequency,
}

impl<'a> Correct for CliticVerb<'a> {
    fn correct(&self, surface: &Surface, lemma: String) -> String {
        if lemma != surface.norm {
            return lemma;
        }
        strip_clitic(surface.raw, self.frequencies).unwrap_or(lemma)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frequency::FrequencyTable;

    fn table() -> FrequencyTable {
        let mut t = FrequencyTable::default();
        for w in ["poner", "dar", "ver", "enamorar", "hacer", "par", "decir"] {
            t.insert(Lang::Spanish, w, 1e-4);
        }
        t.insert(Lang::English, "party", 1e-4);
        t
    }

    #[test]
    fn strips_clitics() {
        let t = table();
        assert_eq!(strip_clitic("ponerla", &t), Some("poner".to_string()));
        assert_eq!(strip_clitic("darte", &t), Some("dar".to_string()));
        assert_eq!(strip_clitic("verte", &t), Some("ver".to_string()));
        assert_eq!(strip_clitic("enamorarme", &t), Some("enamorar".to_string()));
        assert_eq!(strip_clitic("hacerlos", &t), Some("hacer".to_string()));
        assert_eq!(strip_clitic("decírmelo", &t), None);
    }

    #[test]
    fn keeps_nouns() {
        let t = table();
        // "par" is known but "parte" is a noun
        assert_eq!(strip_clitic("parte", &t), None);
        // unknown base
        assert_eq!(strip_clitic("bailarla", &t), None);
        // base too short
        assert_eq!(strip_clitic("irte", &t), None);
    }

    #[test]
    fn unknown_lemma_falls_back() {
        let t = table();
        let c = UnknownLemma { frequencies: &t };
        let s = Surface {
            raw: "dale",
            norm: "dale",
        };
        assert_eq!(c.correct(&s, "dalar".to_string()), "dale");
        assert_eq!(c.correct(&s, "dar".to_string()), "dar");
        assert_eq!(c.correct(&s, "party".to_string()), "party");
    }

    #[test]
    fn clitic_only_on_self_lemma() {
        let t = table();
        let c = CliticVerb { frequencies: &t };
        let s = Surface {
            raw: "ponerla",
            norm: "ponerla",
        };
        assert_eq!(c.correct(&s, "ponerla".to_string()), "poner");
        assert_eq!(c.correct(&s, "ponerel".to_string()), "ponerel");
    }
}
