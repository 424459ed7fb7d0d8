//! # lyricvocab
//!
//! Builds a Spanish vocabulary-learning dataset from song lyrics.
//!
//! Every step is a subcommand reading the output of the previous one.
//!
//! ```sh
//! lyricvocab download "Bad Bunny" lyrics/
//! lyricvocab evidence "lyrics/genius_Bad_Bunny/batch_*.json" 2_vocab_evidence.json
//! lyricvocab split 2_vocab_evidence.json --out-dir split/
//! lyricvocab elisions 2_vocab_evidence.json 3_vocab_evidence_merged.json --mapping 3_elision_mapping.json
//! lyricvocab lemmatize 3_vocab_evidence_merged.json 4_lemma_output.json --frequencies freq.csv
//! lyricvocab translate 4_lemma_output.json vocabulary.json --old-vocabulary old_vocabulary_cache.json
//! lyricvocab fill-gaps vocabulary.json
//! lyricvocab expand vocabulary.json 4_lemma_output.json
//! lyricvocab dedup vocabulary.json
//! lyricvocab cognates vocabulary.json
//! lyricvocab rerank vocabulary.json reference_vocabulary.json
//! ```
//!
//! Logging is controlled by `RUST_LOG` (e.g. `RUST_LOG=info`).
use std::time::Duration;

use lyricvocab::cli::{self, Lyricvocab};
use lyricvocab::error::Error;
use lyricvocab::frequency::FrequencyTable;
use lyricvocab::identifiers::FastText;
use lyricvocab::lemma::{HttpTagger, WhitespaceTagger};
use lyricvocab::pipelines::{self, Pipeline};
use lyricvocab::sources::GeniusClient;
use lyricvocab::translate::{GoogleTranslator, Translator};
use structopt::StructOpt;

#[macro_use]
extern crate log;

const TRANSLATE_TIMEOUT: Duration = Duration::from_secs(10);

fn lemmatize(l: cli::Lemmatize) -> Result<(), Error> {
    let frequencies = FrequencyTable::from_path(&l.frequencies)?;
    match l.tagger_url {
        Some(url) => {
            let tagger = HttpTagger::new(&url, Duration::from_secs(l.timeout))?;
            pipelines::Lemmatize::new(&tagger, &frequencies, l.src, l.dst).run()?;
        }
        None => {
            warn!("no tagger url given, every token will be its own lemma");
            pipelines::Lemmatize::new(&WhitespaceTagger, &frequencies, l.src, l.dst).run()?;
        }
    }
    Ok(())
}

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = Lyricvocab::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        Lyricvocab::Download(d) => {
            let client = GeniusClient::new(&d.token, Duration::from_secs(d.timeout))?;
            let p = pipelines::Download::new(&client, d.artist, d.dst, d.batch_size, d.start_page);
            let report = p.run()?;
            for batch in &report.batches {
                debug!("batch {:?}", batch);
            }
        }

        Lyricvocab::Evidence(e) => {
            let p = pipelines::Evidence::new(e.batch_glob, e.dst, e.max_examples)
                .with_preview(e.preview);
            p.run()?;
        }

        Lyricvocab::Split(s) => {
            let identifier = FastText::new_lid(&s.lid_path)?;
            let p = pipelines::Split::new(
                &identifier,
                s.src,
                s.out_dir,
                s.out_prefix,
                s.max_lines,
                s.threshold,
            );
            p.run()?;
        }

        Lyricvocab::Elisions(e) => {
            let p = pipelines::Elisions::new(e.src, e.dst, e.mapping, e.propose, e.max_examples);
            p.run()?;
        }

        Lyricvocab::Lemmatize(l) => lemmatize(l)?,

        Lyricvocab::Translate(t) => {
            let translator = if t.live {
                Some(GoogleTranslator::new(
                    TRANSLATE_TIMEOUT,
                    Duration::from_millis(t.delay_ms),
                )?)
            } else {
                None
            };
            let p = pipelines::Translate::new(
                translator.as_ref().map(|g| g as &dyn Translator),
                t.src,
                t.dst,
                t.old_vocabulary,
                t.examples_per_pos,
                t.max_entries,
            );
            p.run()?;
        }

        Lyricvocab::FillGaps(f) => {
            let translator =
                GoogleTranslator::new(TRANSLATE_TIMEOUT, Duration::from_millis(f.delay_ms))?;
            let p = pipelines::FillGaps::new(&translator, f.vocabulary, f.save_every);
            p.run()?;
        }

        Lyricvocab::Expand(e) => {
            let p = pipelines::Expand::new(
                e.vocabulary,
                e.lemma_entries,
                e.old_vocabulary,
                e.max_per_pos,
            );
            p.run()?;
        }

        Lyricvocab::Dedup(d) => {
            pipelines::Dedup::new(d.vocabulary).run()?;
        }

        Lyricvocab::Cognates(c) => {
            pipelines::Cognates::new(c.vocabulary).run()?;
        }

        Lyricvocab::Rerank(r) => {
            pipelines::Rerank::new(r.vocabulary, r.reference).run()?;
        }
    };
    Ok(())
}
