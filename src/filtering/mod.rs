/*! Filtering utilities

Filters operate on token or line level, and flag junk: ad-libs, scrape
artifacts and boilerplate that should not take part in language voting.

Filters implement [filter::Filter]. Since the language split keeps an
audit trail, they also implement [filter::Inspect], which returns the
reasons behind a decision.
! */
mod filter;
mod line;
mod token;

pub use filter::{Filter, Inspect, Inspection};
pub use line::JunkLine;
pub use token::{JunkToken, ENGLISH_WORDS, FUNCTION_WORDS, VOCABLES};
