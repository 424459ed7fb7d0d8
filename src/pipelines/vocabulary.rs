//! Stages rewriting the vocabulary file in place.
use std::path::PathBuf;

use log::info;

use super::translate::load_old_vocabulary;
use super::Pipeline;
use crate::cognates::flag_cognates;
use crate::dedup::{dedup, DedupReport};
use crate::error::Error;
use crate::io::{read_json, write_json};
use crate::lemma::LemmaEntry;
use crate::rerank::{rerank, ReferenceEntry, ReferenceRanks};
use crate::translate::{
    count_gaps, expand_examples, fill_gaps, ExpandReport, FillReport, TranslationCache, Translator,
};
use crate::vocabulary::VocabEntry;

/// Stage 5b: translate what an earlier run left empty.
pub struct FillGaps<'a> {
    translator: &'a dyn Translator,
    path: PathBuf,
    save_every: usize,
}

impl<'a> FillGaps<'a> {
    pub fn new(translator: &'a dyn Translator, path: PathBuf, save_every: usize) -> Self {
        Self {
            translator,
            path,
            save_every,
        }
    }
}

impl<'a> Pipeline<FillReport> for FillGaps<'a> {
    fn run(&self) -> Result<FillReport, Error> {
        let mut vocabulary: Vec<VocabEntry> = read_json(&self.path)?;
        let gaps = count_gaps(&vocabulary);
        info!(
            "{} missing word translations, {} missing example translations",
            gaps.words, gaps.examples
        );
        if gaps.total() == 0 {
            return Ok(FillReport::default());
        }

        let mut cache = TranslationCache::new(self.translator);
        let report = fill_gaps(&mut vocabulary, &mut cache, self.save_every, |v| {
            write_json(&self.path, v)
        })?;
        info!(
            "filled {} gaps, {} errors, {} remaining -> {:?}",
            report.filled,
            report.errors,
            report.remaining.total(),
            self.path
        );
        Ok(report)
    }
}

/// Stage 5c: more examples per meaning, from the lemma entries.
pub struct Expand {
    path: PathBuf,
    lemma_entries: PathBuf,
    old_vocabulary: Option<PathBuf>,
    max_per_pos: usize,
}

impl Expand {
    pub fn new(
        path: PathBuf,
        lemma_entries: PathBuf,
        old_vocabulary: Option<PathBuf>,
        max_per_pos: usize,
    ) -> Self {
        Self {
            path,
            lemma_entries,
            old_vocabulary,
            max_per_pos,
        }
    }
}

impl Pipeline<ExpandReport> for Expand {
    fn run(&self) -> Result<ExpandReport, Error> {
        let mut vocabulary: Vec<VocabEntry> = read_json(&self.path)?;
        let lemma_entries: Vec<LemmaEntry> = read_json(&self.lemma_entries)?;

        let mut cache = TranslationCache::cache_only();
        cache.learn_lines(&vocabulary);
        cache.learn_lines(&load_old_vocabulary(self.old_vocabulary.as_deref())?);
        info!("{} cached line translations", cache.line_count());

        let report = expand_examples(&mut vocabulary, &lemma_entries, &cache, self.max_per_pos);
        write_json(&self.path, &vocabulary)?;
        info!(
            "added {} examples ({} with a cached translation), {} meanings already full -> {:?}",
            report.added, report.recovered, report.already_full, self.path
        );
        Ok(report)
    }
}

/// Stage 6: one entry per surface word.
pub struct Dedup {
    path: PathBuf,
}

impl Dedup {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl Pipeline<DedupReport> for Dedup {
    fn run(&self) -> Result<DedupReport, Error> {
        let vocabulary: Vec<VocabEntry> = read_json(&self.path)?;
        let before = vocabulary.len();
        let (out, report) = dedup(vocabulary);
        write_json(&self.path, &out)?;
        info!(
            "{} -> {} entries ({} words merged) -> {:?}",
            before,
            out.len(),
            report.groups_merged,
            self.path
        );
        Ok(report)
    }
}

/// Stage 7: transparent cognate flags.
pub struct Cognates {
    path: PathBuf,
}

impl Cognates {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl Pipeline<usize> for Cognates {
    /// Returns the number of cognates.
    fn run(&self) -> Result<usize, Error> {
        let mut vocabulary: Vec<VocabEntry> = read_json(&self.path)?;
        let count = flag_cognates(&mut vocabulary);
        write_json(&self.path, &vocabulary)?;
        info!(
            "{}/{} entries are transparent cognates -> {:?}",
            count,
            vocabulary.len(),
            self.path
        );
        Ok(count)
    }
}

/// Stage 8: final ordering against a general vocabulary list.
pub struct Rerank {
    path: PathBuf,
    reference: PathBuf,
}

impl Rerank {
    pub fn new(path: PathBuf, reference: PathBuf) -> Self {
        Self { path, reference }
    }
}

impl Pipeline<usize> for Rerank {
    /// Returns the number of entries found in the reference list.
    fn run(&self) -> Result<usize, Error> {
        let mut vocabulary: Vec<VocabEntry> = read_json(&self.path)?;
        let reference: Vec<ReferenceEntry> = read_json(&self.reference)?;
        let ranks = ReferenceRanks::new(&reference);
        info!(
            "reference: {} words, {} lemmas",
            ranks.word_count(),
            ranks.lemma_count()
        );

        let matched = rerank(&mut vocabulary, &ranks);
        write_json(&self.path, &vocabulary)?;
        info!(
            "reranked {} entries, {} found in reference -> {:?}",
            vocabulary.len(),
            matched,
            self.path
        );
        Ok(matched)
    }
}
