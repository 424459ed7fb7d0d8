//! Stage 5: vocabulary build and translation.
use std::path::{Path, PathBuf};

use log::{info, warn};

use super::Pipeline;
use crate::error::Error;
use crate::io::{read_json, write_json};
use crate::lemma::LemmaEntry;
use crate::translate::{count_gaps, TranslationCache, Translator, VocabularyBuilder};
use crate::vocabulary::VocabEntry;

/// Loads the vocabulary at `path` if present, to be used as a translation cache.
pub(super) fn load_old_vocabulary(path: Option<&Path>) -> Result<Vec<VocabEntry>, Error> {
    match path {
        Some(p) if p.exists() => {
            let old: Vec<VocabEntry> = read_json(p)?;
            info!("loaded {} cached entries from {:?}", old.len(), p);
            Ok(old)
        }
        Some(p) => {
            warn!("old vocabulary {:?} not found, starting with an empty cache", p);
            Ok(vec![])
        }
        None => Ok(vec![]),
    }
}

/// Builds the vocabulary from lemma entries.
///
/// Without a translator only cached translations are used, leaving gaps for [super::FillGaps].
pub struct Translate<'a> {
    translator: Option<&'a dyn Translator>,
    src: PathBuf,
    dst: PathBuf,
    old_vocabulary: Option<PathBuf>,
    examples_per_pos: usize,
    max_entries: Option<usize>,
}

impl<'a> Translate<'a> {
    pub fn new(
        translator: Option<&'a dyn Translator>,
        src: PathBuf,
        dst: PathBuf,
        old_vocabulary: Option<PathBuf>,
        examples_per_pos: usize,
        max_entries: Option<usize>,
    ) -> Self {
        Self {
            translator,
            src,
            dst,
            old_vocabulary,
            examples_per_pos,
            max_entries,
        }
    }
}

impl<'a> Pipeline<Vec<VocabEntry>> for Translate<'a> {
    fn run(&self) -> Result<Vec<VocabEntry>, Error> {
        let mut entries: Vec<LemmaEntry> = read_json(&self.src)?;
        if let Some(max) = self.max_entries {
            entries.truncate(max);
        }

        let mut cache = match self.translator {
            Some(t) => TranslationCache::new(t),
            None => {
                info!("cache-only mode, no translation will be requested");
                TranslationCache::cache_only()
            }
        };
        cache.preload(&load_old_vocabulary(self.old_vocabulary.as_deref())?);
        info!(
            "cache: {} words, {} lines, {} curated flags",
            cache.word_count(),
            cache.line_count(),
            cache.flag_count()
        );

        let mut builder = VocabularyBuilder::new(&mut cache, self.examples_per_pos);
        let vocabulary = builder.build(&entries);
        let skipped = builder.skipped();

        write_json(&self.dst, &vocabulary)?;
        let gaps = count_gaps(&vocabulary);
        info!(
            "wrote {} entries -> {:?} ({} api calls, {} cache hits, {} failures, {} skipped, {} gaps)",
            vocabulary.len(),
            self.dst,
            cache.stats.calls,
            cache.stats.hits,
            cache.stats.failures,
            skipped,
            gaps.total()
        );
        Ok(vocabulary)
    }
}
