pub mod classify;
pub mod cli;
pub mod cognates;
pub mod dedup;
pub mod elision;
pub mod error;
pub mod evidence;
pub mod filtering;
pub mod frequency;
pub mod identifiers;
pub mod io;
pub mod lang;
pub mod lemma;
pub mod pipelines;
pub mod rerank;
pub mod sources;
pub mod text;
pub mod translate;
pub mod vocabulary;
