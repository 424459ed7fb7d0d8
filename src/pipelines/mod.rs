//! Pipelines.
//!
//! Each subcommand is a stage reading one file and writing another, the
//! output of a stage being the input of the next one.
//! The module provides a light [pipeline::Pipeline] trait that every stage implements.
//!
//! External capabilities (lyrics catalog, language identification, tagging,
//! translation) are borrowed by the stages, so that they can be swapped.
mod download;
mod elisions;
mod evidence;
mod lemmatize;
#[allow(clippy::module_inception)]
pub mod pipeline;
mod split;
mod translate;
mod vocabulary;

pub use download::Download;
pub use elisions::Elisions;
pub use evidence::Evidence;
pub use lemmatize::Lemmatize;
pub use pipeline::Pipeline;
pub use split::Split;
pub use translate::Translate;
pub use vocabulary::{Cognates, Dedup, Expand, FillGaps, Rerank};
