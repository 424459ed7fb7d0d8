//! Stage 4: lemma grouping.
use std::path::PathBuf;

use log::info;

use super::Pipeline;
use crate::error::Error;
use crate::evidence::EvidenceEntry;
use crate::frequency::WordFrequency;
use crate::io::{read_json, write_json};
use crate::lemma::{LemmaEntry, Lemmatizer, Tagger};

pub struct Lemmatize<'a, T: Tagger> {
    tagger: &'a T,
    frequencies: &'a dyn WordFrequency,
    src: PathBuf,
    dst: PathBuf,
}

impl<'a, T: Tagger> Lemmatize<'a, T> {
    pub fn new(tagger: &'a T, frequencies: &'a dyn WordFrequency, src: PathBuf, dst: PathBuf) -> Self {
        Self {
            tagger,
            frequencies,
            src,
            dst,
        }
    }
}

impl<'a, T: Tagger> Pipeline<Vec<LemmaEntry>> for Lemmatize<'a, T> {
    fn run(&self) -> Result<Vec<LemmaEntry>, Error> {
        let entries: Vec<EvidenceEntry> = read_json(&self.src)?;
        info!("lemmatizing {} words", entries.len());

        let lemmatizer = Lemmatizer::new(self.tagger, self.frequencies);
        let out = lemmatizer.lemmatize(&entries)?;

        let english = out.iter().filter(|e| e.language_flags.is_english).count();
        write_json(&self.dst, &out)?;
        info!(
            "wrote {} (word, lemma) entries ({} flagged english) -> {:?}",
            out.len(),
            english,
            self.dst
        );
        Ok(out)
    }
}
