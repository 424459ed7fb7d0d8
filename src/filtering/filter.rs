//! Filtering traits.

/// immutable, pure filter (2 successive equal inputs -> 2 equal outputs).
///
/// `detect` returns `true` when the item is kept.
pub trait Filter<T>: Default {
    fn detect(&self, item: T) -> bool;
}

/// Outcome of an [Inspect] call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inspection {
    pub junk: bool,
    pub reasons: Vec<String>,
}

impl Inspection {
    pub fn has(&self, reason: &str) -> bool {
        self.reasons.iter().any(|r| r == reason)
    }
}

/// Filters that can explain themselves.
pub trait Inspect<T> {
    fn inspect(&self, item: T) -> Inspection;
}
