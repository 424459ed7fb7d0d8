/*! Identifier trait

All identifiers should implement [Identifier] to be useable by the language split.
!*/
use crate::{error::Error, lang::Lang};

/// A language label along with its confidence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Identification {
    label: Lang,
    prob: f32,
}

impl Identification {
    pub fn new(label: Lang, prob: f32) -> Self {
        Self { label, prob }
    }

    /// Get a reference to the identification's label.
    pub fn label(&self) -> &Lang {
        &self.label
    }

    /// Get a reference to the identification's prob.
    pub fn prob(&self) -> &f32 {
        &self.prob
    }
}

pub trait Identifier {
    /// Identifies `sentence`. `Ok(None)` means that no reliable identification could be done.
    fn identify(&self, sentence: &str) -> Result<Option<Identification>, Error>;
}
