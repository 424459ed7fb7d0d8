/*! Language identification

Holds an [Identifier] trait for implementing other identifiers.

The current identifier used is [fasttext](https://fasttext.cc), restricted to Spanish and English.
!*/
mod fasttext;
mod identifier;

pub use self::fasttext::FastText;
pub use identifier::{Identification, Identifier};
