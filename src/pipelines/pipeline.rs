//! Pipeline trait.
use crate::error::Error;

/// This trait must be implemented for each stage,
/// and is generic over the return type so that
/// stages can hand a report back to the caller.
pub trait Pipeline<T> {
    fn run(&self) -> Result<T, Error>;
}
