//! Builds [LemmaEntry] lists from evidence entries.
use std::collections::{BTreeMap, BTreeSet, HashMap};

use lazy_static::lazy_static;
use log::{debug, info};
use regex::Regex;

use super::{
    english_flag, CliticVerb, Correct, Corrector, Evidence, IrregularFuture, LanguageFlags,
    LemmaEntry, LemmaMatch, PosSummary, Sense, Surface, Tagger, UnknownLemma,
};
use crate::error::Error;
use crate::evidence::EvidenceEntry;
use crate::frequency::WordFrequency;
use crate::text::normalize_for_match;

lazy_static! {
    static ref READ_MORE: Regex =
        Regex::new(r"(?i)\s*read more\s*$").expect("read more regex is valid");
}

#[derive(Default)]
struct LemmaGroup {
    matches: Vec<LemmaMatch>,
    pos_counts: BTreeMap<String, usize>,
    example_ids: BTreeSet<String>,
}

impl LemmaGroup {
    fn push(&mut self, m: LemmaMatch) {
        *self.pos_counts.entry(m.pos.clone()).or_insert(0) += 1;
        if !m.example_id.is_empty() {
            self.example_ids.insert(m.example_id.clone());
        }
        self.matches.push(m);
    }
}

/// Replaces standalone, case-insensitive occurrences matched by `re` with `full`.
fn substitute_elided(line: &str, re: &Regex, full: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut last = 0;
    for m in re.find_iter(line) {
        let before = line[..m.start()].chars().next_back();
        let after = line[m.end()..].chars().next();
        if before.map_or(false, char::is_alphabetic) || after.map_or(false, char::is_alphabetic) {
            continue;
        }
        out.push_str(&line[last..m.start()]);
        out.push_str(full);
        last = m.end();
    }
    out.push_str(&line[last..]);
    out
}

fn clean_line(line: &str) -> String {
    READ_MORE.replace(line, "").trim().to_string()
}

pub struct Lemmatizer<'a, T: Tagger> {
    tagger: &'a T,
    frequencies: &'a dyn WordFrequency,
    corrector: Corrector<'a>,
}

impl<'a, T: Tagger> Lemmatizer<'a, T> {
    pub fn new(tagger: &'a T, frequencies: &'a dyn WordFrequency) -> Self {
        let mut corrector = Corrector::default();
        corrector
            .add(Box::new(IrregularFuture))
            .add(Box::new(UnknownLemma { frequencies }))
            .add(Box::new(CliticVerb { frequencies }));
        Self {
            tagger,
            frequencies,
            corrector,
        }
    }

    /// Lemmatize every entry, in order.
    pub fn lemmatize(&self, entries: &[EvidenceEntry]) -> Result<Vec<LemmaEntry>, Error> {
        let mut out = Vec::with_capacity(entries.len());
        for (idx, entry) in entries.iter().enumerate() {
            out.extend(self.lemmatize_entry(idx + 1, entry)?);
            if (idx + 1) % 500 == 0 {
                info!("lemmatized {}/{} words", idx + 1, entries.len());
            }
        }
        Ok(out)
    }

    /// Example lines ready for tagging, with the elided spelling replaced by the full word.
    fn prepare_lines(&self, entry: &EvidenceEntry) -> Result<Vec<String>, Error> {
        let elided = match entry.display_form.as_deref() {
            Some(df) if df != entry.word && !df.is_empty() => Some(
                Regex::new(&format!("(?i){}", regex::escape(df)))
                    .map_err(|e| Error::Custom(e.to_string()))?,
            ),
            _ => None,
        };
        Ok(entry
            .examples
            .iter()
            .map(|ex| {
                let line = clean_line(&ex.line);
                match &elided {
                    Some(re) => substitute_elided(&line, re, &entry.word),
                    None => line,
                }
            })
            .collect())
    }

    /// One [LemmaEntry] per lemma found for `entry`.
    ///
    /// `rank` is the 1-based position of the entry in the evidence list.
    pub fn lemmatize_entry(
        &self,
        rank: usize,
        entry: &EvidenceEntry,
    ) -> Result<Vec<LemmaEntry>, Error> {
        let word_raw = entry.word.as_str();
        let word = normalize_for_match(word_raw);
        let mut match_forms = vec![word.clone()];
        if let Some(df) = entry.display_form.as_deref() {
            let df = normalize_for_match(df);
            if !df.is_empty() && df != word {
                match_forms.push(df);
            }
        }
        let surface = Surface {
            raw: word_raw,
            norm: &word,
        };
        let flags = english_flag(word_raw, self.frequencies);

        let mut order: Vec<String> = Vec::new();
        let mut groups: HashMap<String, LemmaGroup> = HashMap::new();

        if !flags.confidently_english() && !entry.examples.is_empty() {
            let lines = self.prepare_lines(entry)?;
            let docs = self.tagger.tag(&lines)?;
            for (ex, doc) in entry.examples.iter().zip(docs) {
                for tok in doc {
                    if !match_forms.contains(&normalize_for_match(&tok.text)) {
                        continue;
                    }
                    let tagged = if tok.lemma.is_empty() {
                        &tok.text
                    } else {
                        &tok.lemma
                    };
                    let mut lemma = normalize_for_match(tagged);
                    if lemma.is_empty() {
                        lemma = word.clone();
                    }
                    let lemma = self.corrector.correct(&surface, lemma);
                    let pos = if tok.pos.is_empty() {
                        "X".to_string()
                    } else {
                        tok.pos
                    };
                    let group = groups.entry(lemma.clone()).or_insert_with(|| {
                        order.push(lemma.clone());
                        LemmaGroup::default()
                    });
                    group.push(LemmaMatch {
                        example_id: ex.id.clone(),
                        example_song_name: ex.title.clone(),
                        token_text: tok.text,
                        lemma,
                        pos,
                    });
                }
            }
        }

        if groups.is_empty() {
            debug!("no tagged match for {:?}, keeping lemma = word", word_raw);
            let first = entry.examples.first();
            let mut group = LemmaGroup::default();
            group.push(LemmaMatch {
                example_id: first.map(|ex| ex.id.clone()).unwrap_or_default(),
                example_song_name: first.map(|ex| ex.title.clone()).unwrap_or_default(),
                token_text: word_raw.to_string(),
                lemma: word.clone(),
                pos: "X".to_string(),
            });
            order.push(word.clone());
            groups.insert(word.clone(), group);
        }

        Ok(order
            .into_iter()
            .filter_map(|lemma| groups.remove(&lemma).map(|g| (lemma, g)))
            .map(|(lemma, group)| build_entry(rank, entry, &flags, lemma, group))
            .collect())
    }
}

fn build_entry(
    rank: usize,
    entry: &EvidenceEntry,
    flags: &LanguageFlags,
    lemma: String,
    group: LemmaGroup,
) -> LemmaEntry {
    let key = format!("{}|{}", entry.word, lemma);
    LemmaEntry {
        senses: vec![Sense {
            sense_id: format!("{}|0", key),
            label: String::new(),
            notes: String::new(),
            example_ids: group.example_ids.into_iter().collect(),
        }],
        key,
        word: entry.word.clone(),
        lemma,
        corpus_count: entry.corpus_count,
        occurrences_ppm: entry.occurrences_ppm,
        source_rank: rank,
        language_flags: flags.clone(),
        pos_summary: PosSummary {
            match_count: group.matches.len(),
            pos_counts: group.pos_counts,
        },
        matches: group.matches,
        evidence: Evidence {
            examples: entry.examples.clone(),
        },
        display_form: entry.display_form.clone(),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::evidence::EvidenceExample;
    use crate::frequency::FrequencyTable;
    use crate::lang::Lang;
    use crate::lemma::Token;

    /// Tags whitespace tokens from a `surface -> (lemma, pos)` table.
    pub(crate) struct MapTagger(pub HashMap<&'static str, (&'static str, &'static str)>);

    impl Tagger for MapTagger {
        fn tag(&self, lines: &[String]) -> Result<Vec<Vec<Token>>, Error> {
            Ok(lines
                .iter()
                .map(|l| {
                    l.split_whitespace()
                        .map(|t| {
                            let norm = normalize_for_match(t);
                            let (lemma, pos) =
                                self.0.get(norm.as_str()).copied().unwrap_or(("", "X"));
                            Token {
                                text: t.to_string(),
                                lemma: lemma.to_string(),
                                pos: pos.to_string(),
                            }
                        })
                        .collect()
                })
                .collect())
        }
    }

    fn ex(id: &str, line: &str) -> EvidenceExample {
        EvidenceExample {
            id: id.to_string(),
            line: line.to_string(),
            title: format!("song {}", id),
        }
    }

    fn entry(word: &str, examples: Vec<EvidenceExample>) -> EvidenceEntry {
        EvidenceEntry {
            word: word.to_string(),
            occurrences_ppm: 10.0,
            corpus_count: 3,
            examples,
            display_form: None,
        }
    }

    fn freqs() -> FrequencyTable {
        let mut t = FrequencyTable::default();
        for w in ["bajo", "bajar", "poner", "ser", "casa"] {
            t.insert(Lang::Spanish, w, 1e-4);
        }
        t.insert(Lang::English, "baby", 1e-3);
        t
    }

    #[test]
    fn groups_by_lemma() {
        let tagger = MapTagger(
            [("bajo", ("bajo", "ADP"))]
                .into_iter()
                .collect(),
        );
        let f = freqs();
        let l = Lemmatizer::new(&tagger, &f);
        let e = entry(
            "bajo",
            vec![ex("1:1", "bajo la luna"), ex("2:4", "bajo bajo Read More")],
        );
        let out = l.lemmatize_entry(1, &e).unwrap();
        assert_eq!(out.len(), 1);
        let le = &out[0];
        assert_eq!(le.key, "bajo|bajo");
        assert_eq!(le.pos_summary.match_count, 3);
        assert_eq!(le.pos_summary.pos_counts["ADP"], 3);
        assert_eq!(le.senses[0].sense_id, "bajo|bajo|0");
        assert_eq!(le.senses[0].example_ids, vec!["1:1", "2:4"]);
        assert_eq!(le.matches[0].example_song_name, "song 1:1");
        assert_eq!(le.evidence.examples.len(), 2);
    }

    #[test]
    fn corrections_apply() {
        let tagger = MapTagger(
            [
                ("pondré", ("pondrar", "VERB")),
                ("ponerla", ("ponerel", "VERB")),
            ]
            .into_iter()
            .collect(),
        );
        let f = freqs();
        let l = Lemmatizer::new(&tagger, &f);

        let out = l
            .lemmatize_entry(1, &entry("pondré", vec![ex("1:1", "yo pondré")]))
            .unwrap();
        assert_eq!(out[0].lemma, "poner");

        // invented lemma -> surface -> clitic stripped
        let out = l
            .lemmatize_entry(2, &entry("ponerla", vec![ex("1:2", "quiero ponerla")]))
            .unwrap();
        assert_eq!(out[0].lemma, "poner");
        assert_eq!(out[0].source_rank, 2);
    }

    #[test]
    fn elided_display_form_substituted() {
        let tagger = MapTagger([("eres", ("ser", "AUX"))].into_iter().collect());
        let f = freqs();
        let l = Lemmatizer::new(&tagger, &f);
        let mut e = entry("eres", vec![ex("1:1", "Tú ERE' mala"), ex("2:1", "tú eres")]);
        e.display_form = Some("ere'".to_string());
        let out = l.lemmatize_entry(1, &e).unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].lemma, "ser");
        assert_eq!(out[0].pos_summary.match_count, 2);
        assert_eq!(out[0].display_form.as_deref(), Some("ere'"));
    }

    #[test]
    fn fallback_entry() {
        let tagger = MapTagger(HashMap::new());
        let f = freqs();
        let l = Lemmatizer::new(&tagger, &f);

        // confidently English: no tagging
        let out = l
            .lemmatize_entry(1, &entry("baby", vec![ex("1:1", "baby baby")]))
            .unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].lemma, "baby");
        assert_eq!(out[0].pos_summary.pos_counts["X"], 1);
        assert!(out[0].language_flags.is_english);

        // no examples
        let out = l.lemmatize_entry(1, &entry("nada", vec![])).unwrap();
        assert_eq!(out[0].matches[0].example_id, "");
        assert!(out[0].senses[0].example_ids.is_empty());
    }

    #[test]
    fn substitution_is_bounded() {
        let re = Regex::new("(?i)ere'").unwrap();
        assert_eq!(substitute_elided("tú ere' mala", &re, "eres"), "tú eres mala");
        assert_eq!(substitute_elided("quiere' eso", &re, "eres"), "quiere' eso");
    }
}
