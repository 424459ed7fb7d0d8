//! Word language classification.
//!
//! Each word is put in a [Bucket] by identifying the language of its context
//! lines and voting, then combining the vote with token-level junk heuristics.
//! The full decision trail is kept in a [LidMeta] for auditing.
use std::fmt;

use log::warn;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::filtering::{Inspect, JunkLine, JunkToken, ENGLISH_WORDS};
use crate::identifiers::Identifier;
use crate::lang::Lang;

/// Keys that may hold context lines, in lookup order.
const CONTEXT_KEYS: [&str; 4] = ["contexts", "examples", "evidence", "lines"];
/// Keys that may hold the text of a context line object, in lookup order.
const LINE_KEYS: [&str; 5] = ["line_text", "text", "line", "lyric", "sentence"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Bucket {
    Es,
    En,
    Mixed,
    Junk,
    NoEvidence,
}

impl Bucket {
    pub const ALL: [Bucket; 5] = [
        Bucket::Es,
        Bucket::En,
        Bucket::Mixed,
        Bucket::Junk,
        Bucket::NoEvidence,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Bucket::Es => "es",
            Bucket::En => "en",
            Bucket::Mixed => "mixed",
            Bucket::Junk => "junk",
            Bucket::NoEvidence => "no_evidence",
        }
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Identification result for a single line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LidLine {
    pub text: String,
    /// `es`, `en` or `unknown`
    pub detected: String,
    pub confidence: Option<f32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LidMeta {
    pub n_considered: usize,
    pub votes_es: usize,
    pub votes_en: usize,
    pub votes_unknown: usize,
    pub es_ratio: f64,
    pub en_ratio: f64,
    pub threshold: f64,
    pub decision: Bucket,
    pub lines: Vec<LidLine>,
    pub junk_reasons: Vec<String>,
}

impl LidMeta {
    /// Metadata of a word that could not be voted on.
    pub fn unvoted(threshold: f64, decision: Bucket, junk_reasons: Vec<String>) -> Self {
        Self {
            n_considered: 0,
            votes_es: 0,
            votes_en: 0,
            votes_unknown: 0,
            es_ratio: 0.0,
            en_ratio: 0.0,
            threshold,
            decision,
            lines: vec![],
            junk_reasons,
        }
    }
}

/// Pulls lyric lines out of the common item structures.
///
/// Supports lists of strings and lists of objects holding the line under one of [LINE_KEYS].
pub fn extract_lines(item: &Value) -> Vec<String> {
    let obj = match item.as_object() {
        Some(o) => o,
        None => return vec![],
    };
    for key in CONTEXT_KEYS {
        let list = match obj.get(key).and_then(Value::as_array) {
            Some(l) => l,
            None => continue,
        };
        let lines: Vec<String> = list
            .iter()
            .filter_map(|x| match x {
                Value::String(s) => Some(s.clone()),
                Value::Object(o) => LINE_KEYS
                    .iter()
                    .find_map(|k| o.get(*k).and_then(Value::as_str))
                    .map(String::from),
                _ => None,
            })
            .collect();
        if !lines.is_empty() {
            return lines;
        }
    }
    vec![]
}

/// Votes on word languages from their context lines.
pub struct Classifier<'a, I: Identifier> {
    identifier: &'a I,
    max_lines: usize,
    threshold: f64,
    token_filter: JunkToken,
    line_filter: JunkLine,
}

impl<'a, I: Identifier> Classifier<'a, I> {
    pub fn new(identifier: &'a I, max_lines: usize, threshold: f64) -> Self {
        Self {
            identifier,
            max_lines,
            threshold,
            token_filter: JunkToken,
            line_filter: JunkLine::default(),
        }
    }

    fn detect_line(&self, line: &str) -> LidLine {
        let text = line.trim().to_string();
        let id = match self.identifier.identify(&text) {
            Ok(id) => id,
            Err(e) => {
                warn!("could not identify {:?}: {}", text, e);
                None
            }
        };
        let (detected, confidence) = match id {
            Some(id) => (id.label().code().to_string(), Some(*id.prob())),
            None => ("unknown".to_string(), None),
        };
        LidLine {
            text,
            detected,
            confidence,
        }
    }

    /// Classify `token` given its item (holding context lines).
    pub fn classify(&self, token: &str, item: &Value) -> (Bucket, LidMeta) {
        if !item.is_object() {
            return (
                Bucket::Junk,
                LidMeta::unvoted(
                    self.threshold,
                    Bucket::Junk,
                    vec!["value_not_dict".to_string()],
                ),
            );
        }

        let token_inspection = self.token_filter.inspect(token);
        let mut junk_reasons = token_inspection.reasons.clone();

        let raw_lines = extract_lines(item);
        if raw_lines.is_empty() {
            junk_reasons.push("no_context_lines".to_string());
            let decision = Bucket::NoEvidence;
            return (
                decision,
                LidMeta::unvoted(self.threshold, decision, junk_reasons),
            );
        }

        let mut usable = Vec::new();
        for line in &raw_lines {
            if usable.len() >= self.max_lines {
                break;
            }
            let inspection = self.line_filter.inspect(line.as_str());
            if inspection.junk {
                junk_reasons.extend(inspection.reasons);
                continue;
            }
            usable.push(line.as_str());
        }

        if usable.is_empty() {
            junk_reasons.push("no_usable_lines_after_filter".to_string());
            return (
                Bucket::Junk,
                LidMeta::unvoted(self.threshold, Bucket::Junk, junk_reasons),
            );
        }

        let lines: Vec<LidLine> = usable.iter().map(|l| self.detect_line(l)).collect();
        let votes_es = lines
            .iter()
            .filter(|l| l.detected == Lang::Spanish.code())
            .count();
        let votes_en = lines
            .iter()
            .filter(|l| l.detected == Lang::English.code())
            .count();
        let n = lines.len();
        let votes_unknown = n - votes_es - votes_en;
        let es_ratio = votes_es as f64 / n as f64;
        let en_ratio = votes_en as f64 / n as f64;

        let mut decision = if es_ratio >= self.threshold {
            Bucket::Es
        } else if en_ratio >= self.threshold {
            Bucket::En
        } else {
            Bucket::Mixed
        };

        if decision == Bucket::Mixed {
            if token_inspection.junk {
                decision = Bucket::Junk;
                junk_reasons.push("token_junk_and_no_strong_language_vote".to_string());
            } else if ENGLISH_WORDS.contains(token.trim().to_lowercase().as_str())
                && en_ratio >= es_ratio
            {
                decision = Bucket::En;
            }
        }

        junk_reasons.sort();
        junk_reasons.dedup();

        (
            decision,
            LidMeta {
                n_considered: n,
                votes_es,
                votes_en,
                votes_unknown,
                es_ratio,
                en_ratio,
                threshold: self.threshold,
                decision,
                lines,
                junk_reasons,
            },
        )
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use serde_json::json;

    use super::*;
    use crate::error::Error;
    use crate::identifiers::Identification;

    /// Lines containing "english" are English, lines containing "???" are unknown,
    /// everything else is Spanish.
    pub(crate) struct KeywordIdentifier;

    impl Identifier for KeywordIdentifier {
        fn identify(&self, sentence: &str) -> Result<Option<Identification>, Error> {
            if sentence.contains("???") {
                Ok(None)
            } else if sentence.contains("english") {
                Ok(Some(Identification::new(Lang::English, 0.9)))
            } else {
                Ok(Some(Identification::new(Lang::Spanish, 0.8)))
            }
        }
    }

    fn item(lines: &[&str]) -> Value {
        json!({"examples": lines.iter().map(|l| json!({"id": "1:1", "line": l})).collect::<Vec<_>>()})
    }

    #[test]
    fn extract_from_various_shapes() {
        assert_eq!(extract_lines(&json!({"lines": ["a", "b"]})), vec!["a", "b"]);
        assert_eq!(
            extract_lines(&json!({"contexts": [{"line_text": "x"}, {"other": 1}, 3]})),
            vec!["x"]
        );
        // empty first key falls through to the next one
        assert_eq!(
            extract_lines(&json!({"contexts": [], "evidence": [{"sentence": "s"}]})),
            vec!["s"]
        );
        assert!(extract_lines(&json!("just a string")).is_empty());
    }

    #[test]
    fn spanish_vote() {
        let c = Classifier::new(&KeywordIdentifier, 5, 0.7);
        let (b, meta) = c.classify("corazón", &item(&["mi corazón late", "tu corazón"]));
        assert_eq!(b, Bucket::Es);
        assert_eq!(meta.votes_es, 2);
        assert_eq!(meta.es_ratio, 1.0);
        assert_eq!(meta.lines[0].detected, "es");
    }

    #[test]
    fn max_lines_respected() {
        let c = Classifier::new(&KeywordIdentifier, 2, 0.7);
        let (_, meta) = c.classify("x", &item(&["uno dos", "tres cuatro", "english five"]));
        assert_eq!(meta.n_considered, 2);
    }

    #[test]
    fn english_vote() {
        let c = Classifier::new(&KeywordIdentifier, 5, 0.7);
        let (b, _) = c.classify("party", &item(&["english one", "english two", "english 3"]));
        assert_eq!(b, Bucket::En);
    }

    #[test]
    fn mixed_and_english_allowlist() {
        let c = Classifier::new(&KeywordIdentifier, 5, 0.7);
        let lines = ["english a", "spanish b", "english c", "spanish d"];
        let (b, meta) = c.classify("tiempo", &item(&lines));
        assert_eq!(b, Bucket::Mixed);
        assert_eq!(meta.votes_en, 2);

        let (b, _) = c.classify("baby", &item(&lines));
        assert_eq!(b, Bucket::En);
    }

    #[test]
    fn junk_token_without_strong_vote() {
        let c = Classifier::new(&KeywordIdentifier, 5, 0.7);
        let (b, meta) = c.classify("!!!!a", &item(&["??? uno", "??? dos", "tres"]));
        assert_eq!(b, Bucket::Junk);
        assert!(meta
            .junk_reasons
            .contains(&"token_junk_and_no_strong_language_vote".to_string()));

        // junk-looking token with a strong vote stays in its language
        let (b, _) = c.classify("!!!!a", &item(&["uno", "dos"]));
        assert_eq!(b, Bucket::Es);
    }

    #[test]
    fn no_evidence_and_unusable_lines() {
        let c = Classifier::new(&KeywordIdentifier, 5, 0.7);
        let (b, meta) = c.classify("x", &json!({"examples": []}));
        assert_eq!(b, Bucket::NoEvidence);
        assert!(meta.junk_reasons.contains(&"no_context_lines".to_string()));

        let (b, meta) = c.classify("y", &item(&["Read More", "  "]));
        assert_eq!(b, Bucket::Junk);
        assert!(meta
            .junk_reasons
            .contains(&"no_usable_lines_after_filter".to_string()));

        let (b, _) = c.classify("z", &json!(3));
        assert_eq!(b, Bucket::Junk);
    }
}
