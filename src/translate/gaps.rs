//! Gap filling: translate what a cache-only run left empty.
use log::{debug, info};

use super::TranslationCache;
use crate::error::Error;
use crate::vocabulary::VocabEntry;

/// Missing translations in entries that should be translated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Gaps {
    pub words: usize,
    pub examples: usize,
}

impl Gaps {
    pub fn total(&self) -> usize {
        self.words + self.examples
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FillReport {
    pub filled: usize,
    pub errors: usize,
    pub remaining: Gaps,
}

pub fn count_gaps(vocabulary: &[VocabEntry]) -> Gaps {
    let mut gaps = Gaps::default();
    for meaning in vocabulary
        .iter()
        .filter(|e| !e.skips_translation())
        .flat_map(|e| e.meanings.iter())
    {
        if meaning.translation.is_empty() {
            gaps.words += 1;
        }
        gaps.examples += meaning
            .examples
            .iter()
            .filter(|ex| ex.english.is_empty())
            .count();
    }
    gaps
}

/// Fills empty word and example translations in place.
///
/// `save` is called every `save_every` successful fills and once at the end,
/// so that an interrupted run keeps its progress.
pub fn fill_gaps<F>(
    vocabulary: &mut [VocabEntry],
    cache: &mut TranslationCache,
    save_every: usize,
    mut save: F,
) -> Result<FillReport, Error>
where
    F: FnMut(&[VocabEntry]) -> Result<(), Error>,
{
    let mut report = FillReport::default();
    let save_every = save_every.max(1);

    for i in 0..vocabulary.len() {
        if vocabulary[i].skips_translation() {
            continue;
        }
        for j in 0..vocabulary[i].meanings.len() {
            if vocabulary[i].meanings[j].translation.is_empty() {
                let translation = cache.word(&vocabulary[i].word);
                let ok = !translation.is_empty();
                vocabulary[i].meanings[j].translation = translation;
                if record(&mut report, ok, save_every) {
                    save(&*vocabulary)?;
                    info!("saved progress ({} filled so far)", report.filled);
                }
            }
            for k in 0..vocabulary[i].meanings[j].examples.len() {
                if !vocabulary[i].meanings[j].examples[k].english.is_empty() {
                    continue;
                }
                let english = cache.line(&vocabulary[i].meanings[j].examples[k].spanish);
                let ok = !english.is_empty();
                vocabulary[i].meanings[j].examples[k].english = english;
                if record(&mut report, ok, save_every) {
                    save(&*vocabulary)?;
                    info!("saved progress ({} filled so far)", report.filled);
                }
            }
        }
    }

    save(&*vocabulary)?;
    report.remaining = count_gaps(vocabulary);
    Ok(report)
}

/// Records an attempt, returns `true` when progress should be saved.
fn record(report: &mut FillReport, ok: bool, save_every: usize) -> bool {
    if ok {
        report.filled += 1;
    } else {
        report.errors += 1;
    }
    if (report.filled + report.errors) % 10 == 0 {
        debug!("{} filled | {} errors", report.filled, report.errors);
    }
    ok && report.filled % save_every == 0
}
