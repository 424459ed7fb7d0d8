//! Translation cache.
//!
//! Word and line translations are cached separately. The cache can be
//! preloaded from a previously built vocabulary, which also provides
//! hand-curated flags. Without a translator the cache is read-only:
//! misses yield empty strings and are left for the gap-filling stage.
use std::collections::HashMap;

use log::warn;

use super::Translator;
use crate::vocabulary::VocabEntry;

/// Flags curated by hand in a previous vocabulary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CuratedFlags {
    pub is_english: bool,
    pub is_interjection: bool,
    pub is_propernoun: bool,
    pub is_transparent_cognate: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: usize,
    pub calls: usize,
    pub failures: usize,
}

pub struct TranslationCache<'a> {
    translator: Option<&'a dyn Translator>,
    words: HashMap<String, String>,
    lines: HashMap<String, String>,
    flags: HashMap<String, CuratedFlags>,
    pub stats: CacheStats,
}

impl<'a> TranslationCache<'a> {
    pub fn new(translator: &'a dyn Translator) -> Self {
        Self::with_translator(Some(translator))
    }

    /// A cache that never calls a translator.
    pub fn cache_only() -> Self {
        Self::with_translator(None)
    }

    fn with_translator(translator: Option<&'a dyn Translator>) -> Self {
        Self {
            translator,
            words: HashMap::new(),
            lines: HashMap::new(),
            flags: HashMap::new(),
            stats: CacheStats::default(),
        }
    }

    pub fn is_cache_only(&self) -> bool {
        self.translator.is_none()
    }

    /// Learn translations and curated flags from a vocabulary.
    ///
    /// Already known words, lines and flags are kept.
    pub fn preload(&mut self, vocabulary: &[VocabEntry]) {
        for entry in vocabulary {
            self.flags
                .entry(entry.word.clone())
                .or_insert(CuratedFlags {
                    is_english: entry.is_english,
                    is_interjection: entry.is_interjection,
                    is_propernoun: entry.is_propernoun,
                    is_transparent_cognate: entry.is_transparent_cognate,
                });
            for meaning in &entry.meanings {
                if !meaning.translation.is_empty() {
                    self.words
                        .entry(entry.word.clone())
                        .or_insert_with(|| meaning.translation.clone());
                }
            }
        }
        self.learn_lines(vocabulary);
    }

    /// Learn example line translations only.
    pub fn learn_lines(&mut self, vocabulary: &[VocabEntry]) {
        let examples = vocabulary
            .iter()
            .flat_map(|e| e.meanings.iter())
            .flat_map(|m| m.examples.iter())
            .filter(|ex| !ex.spanish.is_empty() && !ex.english.is_empty());
        for ex in examples {
            self.lines
                .entry(ex.spanish.clone())
                .or_insert_with(|| ex.english.clone());
        }
    }

    pub fn flags(&self, word: &str) -> CuratedFlags {
        self.flags.get(word).copied().unwrap_or_default()
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn flag_count(&self) -> usize {
        self.flags.len()
    }

    /// Cached line translation, if any. Never calls the translator.
    pub fn cached_line(&self, spanish: &str) -> Option<&str> {
        self.lines
            .get(spanish)
            .map(String::as_str)
            .filter(|s| !s.is_empty())
    }

    /// Translation of a word, empty if unavailable.
    pub fn word(&mut self, text: &str) -> String {
        lookup(self.translator, &mut self.words, &mut self.stats, text)
    }

    /// Translation of a lyric line, empty if unavailable.
    pub fn line(&mut self, text: &str) -> String {
        lookup(self.translator, &mut self.lines, &mut self.stats, text)
    }
}

fn lookup(
    translator: Option<&dyn Translator>,
    cache: &mut HashMap<String, String>,
    stats: &mut CacheStats,
    text: &str,
) -> String {
    if text.is_empty() {
        return String::new();
    }
    if let Some(hit) = cache.get(text) {
        stats.hits += 1;
        return hit.clone();
    }
    let translator = match translator {
        Some(t) => t,
        None => return String::new(),
    };
    stats.calls += 1;
    let out = match translator.translate(text) {
        Ok(t) => t.trim().to_string(),
        Err(e) => {
            warn!("could not translate {:?}: {}", text, e);
            stats.failures += 1;
            String::new()
        }
    };
    cache.insert(text.to_string(), out.clone());
    out
}

#[cfg(test)]
pub(crate) mod tests {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use super::*;
    use crate::error::Error;
    use crate::vocabulary::tests::{example, meaning, vocab};

    /// Map-backed translator, recording every call. Unknown texts fail.
    #[derive(Default)]
    pub(crate) struct MapTranslator {
        pub known: HashMap<String, String>,
        pub calls: RefCell<Vec<String>>,
    }

    impl MapTranslator {
        pub(crate) fn new(pairs: &[(&str, &str)]) -> Self {
            Self {
                known: pairs
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
                calls: RefCell::new(vec![]),
            }
        }
    }

    impl Translator for MapTranslator {
        fn translate(&self, text: &str) -> Result<String, Error> {
            self.calls.borrow_mut().push(text.to_string());
            self.known
                .get(text)
                .cloned()
                .ok_or_else(|| Error::Custom(format!("no translation for {}", text)))
        }
    }

    #[test]
    fn caches_results_and_failures() {
        let t = MapTranslator::new(&[("casa", " house ")]);
        let mut cache = TranslationCache::new(&t);
        assert_eq!(cache.word("casa"), "house");
        assert_eq!(cache.word("casa"), "house");
        assert_eq!(cache.word("zzz"), "");
        assert_eq!(cache.word("zzz"), "");
        assert_eq!(cache.word(""), "");
        assert_eq!(t.calls.borrow().len(), 2);
        assert_eq!(
            cache.stats,
            CacheStats {
                hits: 2,
                calls: 2,
                failures: 1
            }
        );
    }

    #[test]
    fn word_and_line_caches_are_separate() {
        let t = MapTranslator::new(&[("mar", "sea")]);
        let mut cache = TranslationCache::new(&t);
        cache.word("mar");
        cache.line("mar");
        assert_eq!(t.calls.borrow().len(), 2);
    }

    #[test]
    fn cache_only_never_translates() {
        let mut cache = TranslationCache::cache_only();
        assert!(cache.is_cache_only());
        assert_eq!(cache.word("casa"), "");
        assert_eq!(cache.stats.calls, 0);
    }

    #[test]
    fn preload_keeps_first() {
        let mut old = vec![
            vocab(
                1,
                "luna",
                "luna",
                vec![meaning("NOUN", "moon", vec![example("A", "la luna", "the moon")])],
            ),
            vocab(
                2,
                "luna",
                "lunar",
                vec![meaning("VERB", "", vec![example("A", "la luna", "moon!")])],
            ),
        ];
        old[0].is_propernoun = true;
        let mut cache = TranslationCache::cache_only();
        cache.preload(&old);
        assert_eq!(cache.word("luna"), "moon");
        assert_eq!(cache.line("la luna"), "the moon");
        assert_eq!(cache.cached_line("la luna"), Some("the moon"));
        assert_eq!(cache.cached_line("nope"), None);
        assert!(cache.flags("luna").is_propernoun);
        assert_eq!(cache.flags("sol"), CuratedFlags::default());
        assert_eq!((cache.word_count(), cache.line_count(), cache.flag_count()), (1, 1, 1));
    }
}
