/*! Text utilities

Normalization, tokenization and lyric cleaning shared by every stage.
!*/
mod lyrics;
mod normalize;
mod tokenize;

pub use lyrics::clean_genius_lyrics;
pub use normalize::{normalize_for_match, normalize_text, strip_accents};
pub use tokenize::{tokenize, LETTER_CLASS};
