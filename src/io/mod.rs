/*!
# IO utilities

JSON loading/saving shared by every stage, and loading of the batch files
written by the downloader.
!*/
mod batches;
mod json;

pub use batches::{read_batches, BatchSong};
pub use json::{read_json, read_json_or_default, write_json};
