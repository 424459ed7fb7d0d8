//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "lyricvocab", about = "vocabulary dataset generation from song lyrics.")]
/// Holds every command that is callable by the `lyricvocab` command.
pub enum Lyricvocab {
    #[structopt(about = "Download the lyrics of an artist from Genius")]
    Download(Download),
    #[structopt(about = "Count words and select example lines")]
    Evidence(Evidence),
    #[structopt(about = "Split words into language buckets")]
    Split(Split),
    #[structopt(about = "Merge elided spellings into their full word")]
    Elisions(Elisions),
    #[structopt(about = "Group word forms by lemma")]
    Lemmatize(Lemmatize),
    #[structopt(about = "Build the translated vocabulary")]
    Translate(Translate),
    #[structopt(about = "Translate what a previous run left empty")]
    FillGaps(FillGaps),
    #[structopt(about = "Add example lines to every meaning")]
    Expand(Expand),
    #[structopt(about = "Merge entries sharing a word")]
    Dedup(Dedup),
    #[structopt(about = "Flag transparent cognates")]
    Cognates(Cognates),
    #[structopt(about = "Rerank the vocabulary")]
    Rerank(Rerank),
}

#[derive(Debug, StructOpt)]
pub struct Download {
    #[structopt(help = "artist name, as searched on Genius")]
    pub artist: String,
    #[structopt(parse(from_os_str), help = "download folder", default_value = ".")]
    pub dst: PathBuf,
    #[structopt(long = "token", env = "GENIUS_ACCESS_TOKEN", hide_env_values = true)]
    pub token: String,
    #[structopt(long = "batch-size", default_value = "25", help = "songs per metadata page")]
    pub batch_size: u32,
    #[structopt(long = "start-page", default_value = "1")]
    pub start_page: u32,
    #[structopt(long = "timeout", default_value = "30", help = "request timeout, in seconds")]
    pub timeout: u64,
}

#[derive(Debug, StructOpt)]
pub struct Evidence {
    #[structopt(help = "batch files glob, e.g. \"genius_Bad_Bunny/batch_*.json\"")]
    pub batch_glob: String,
    #[structopt(parse(from_os_str), help = "output evidence file")]
    pub dst: PathBuf,
    #[structopt(long = "max-examples", default_value = "10")]
    pub max_examples: usize,
    #[structopt(
        long = "preview",
        default_value = "0",
        help = "print the first N entries after writing"
    )]
    pub preview: usize,
}

#[derive(Debug, StructOpt)]
pub struct Split {
    #[structopt(parse(from_os_str), help = "evidence file, list or object keyed by token")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), long = "out-dir", default_value = ".")]
    pub out_dir: PathBuf,
    #[structopt(long = "out-prefix", default_value = "2b_vocab_split")]
    pub out_prefix: String,
    #[structopt(
        long = "max-lines",
        default_value = "5",
        help = "max context lines per word for voting"
    )]
    pub max_lines: usize,
    #[structopt(long = "threshold", default_value = "0.7", help = "vote threshold for es/en")]
    pub threshold: f64,
    #[structopt(
        parse(from_os_str),
        long = "lid-path",
        default_value = "lid.176.bin",
        help = "path to the fasttext language identification model"
    )]
    pub lid_path: PathBuf,
}

#[derive(Debug, StructOpt)]
pub struct Elisions {
    #[structopt(parse(from_os_str), help = "evidence file")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "merged evidence file")]
    pub dst: PathBuf,
    #[structopt(parse(from_os_str), long = "mapping", help = "elision mapping file")]
    pub mapping: Option<PathBuf>,
    #[structopt(
        parse(from_os_str),
        long = "propose",
        help = "write a draft mapping computed from the evidence there"
    )]
    pub propose: Option<PathBuf>,
    #[structopt(long = "max-examples", default_value = "10")]
    pub max_examples: usize,
}

#[derive(Debug, StructOpt)]
pub struct Lemmatize {
    #[structopt(parse(from_os_str), help = "merged evidence file")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "lemma entries file")]
    pub dst: PathBuf,
    #[structopt(
        parse(from_os_str),
        long = "frequencies",
        help = "word frequency csv (lang,word,frequency)"
    )]
    pub frequencies: PathBuf,
    #[structopt(
        long = "tagger-url",
        help = "tagging endpoint. Tokens are tagged as themselves if absent"
    )]
    pub tagger_url: Option<String>,
    #[structopt(long = "timeout", default_value = "60", help = "tagger timeout, in seconds")]
    pub timeout: u64,
}

#[derive(Debug, StructOpt)]
pub struct Translate {
    #[structopt(parse(from_os_str), help = "lemma entries file")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "vocabulary file")]
    pub dst: PathBuf,
    #[structopt(
        parse(from_os_str),
        long = "old-vocabulary",
        help = "previous vocabulary used as a translation cache"
    )]
    pub old_vocabulary: Option<PathBuf>,
    #[structopt(long = "examples-per-pos", default_value = "1")]
    pub examples_per_pos: usize,
    #[structopt(long = "max-entries")]
    pub max_entries: Option<usize>,
    #[structopt(long = "live", help = "allow translation requests (cache only otherwise)")]
    pub live: bool,
    #[structopt(long = "delay-ms", default_value = "2", help = "pause between translation requests")]
    pub delay_ms: u64,
}

#[derive(Debug, StructOpt)]
pub struct FillGaps {
    #[structopt(parse(from_os_str), help = "vocabulary file, rewritten in place")]
    pub vocabulary: PathBuf,
    #[structopt(long = "save-every", default_value = "100")]
    pub save_every: usize,
    #[structopt(long = "delay-ms", default_value = "2", help = "pause between translation requests")]
    pub delay_ms: u64,
}

#[derive(Debug, StructOpt)]
pub struct Expand {
    #[structopt(parse(from_os_str), help = "vocabulary file, rewritten in place")]
    pub vocabulary: PathBuf,
    #[structopt(parse(from_os_str), help = "lemma entries file")]
    pub lemma_entries: PathBuf,
    #[structopt(
        parse(from_os_str),
        long = "old-vocabulary",
        help = "previous vocabulary used as a translation cache"
    )]
    pub old_vocabulary: Option<PathBuf>,
    #[structopt(long = "max-per-pos", default_value = "3")]
    pub max_per_pos: usize,
}

#[derive(Debug, StructOpt)]
pub struct Dedup {
    #[structopt(parse(from_os_str), help = "vocabulary file, rewritten in place")]
    pub vocabulary: PathBuf,
}

#[derive(Debug, StructOpt)]
pub struct Cognates {
    #[structopt(parse(from_os_str), help = "vocabulary file, rewritten in place")]
    pub vocabulary: PathBuf,
}

#[derive(Debug, StructOpt)]
pub struct Rerank {
    #[structopt(parse(from_os_str), help = "vocabulary file, rewritten in place")]
    pub vocabulary: PathBuf,
    #[structopt(parse(from_os_str), help = "general vocabulary list ({rank, word, lemma})")]
    pub reference: PathBuf,
}
