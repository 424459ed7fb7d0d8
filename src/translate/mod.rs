/*! Translations

Turns lemma entries into vocabulary entries with English translations:

- [VocabularyBuilder] builds one entry per (word, lemma), one meaning per POS.
- [fill_gaps] translates what a cache-only build left empty.
- [expand_examples] adds more example lines per meaning from the lemma entries.

Every translation goes through a [TranslationCache], which can run without
a [Translator].
!*/
mod build;
mod cache;
mod expand;
mod gaps;
mod translator;

pub use build::{mark_most_frequent, VocabularyBuilder};
pub use cache::{CacheStats, CuratedFlags, TranslationCache};
pub use expand::{available_examples, expand_examples, richest_entries, ExpandReport};
pub use gaps::{count_gaps, fill_gaps, FillReport, Gaps};
pub use translator::{GoogleTranslator, Translator};
