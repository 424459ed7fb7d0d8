/*! Lemma grouping

Example lines are tagged, tokens matching the entry word are collected and
grouped by lemma. Tagger lemmas go through a [Corrector], a chain of
[Correct] passes applied in order:

1. [IrregularFuture]: irregular future/conditional stems (`pondré` -> `poner`).
1. [UnknownLemma]: lemmas unknown in both languages fall back to the surface word.
1. [CliticVerb]: self-lemmatized words lose their clitic pronoun (`ponerla` -> `poner`).
!*/
mod clitic;
mod english;
mod irregular;
mod lemmatizer;
mod tagger;
mod types;

pub use clitic::{strip_clitic, CliticVerb, UnknownLemma};
pub use english::{english_flag, LanguageFlags};
pub use irregular::{irregular_future_lemma, IrregularFuture};
pub use lemmatizer::Lemmatizer;
pub use tagger::{HttpTagger, Tagger, Token, WhitespaceTagger};
pub use types::{Evidence, LemmaEntry, LemmaMatch, PosSummary, Sense};

/// Surface form of the word being lemmatized.
pub struct Surface<'a> {
    /// as found in the evidence file
    pub raw: &'a str,
    /// [crate::text::normalize_for_match] of `raw`
    pub norm: &'a str,
}

/// A lemma correction pass.
pub trait Correct {
    fn correct(&self, surface: &Surface, lemma: String) -> String;
}

/// Chains corrections, applying them in insertion order.
pub struct Corrector<'a>(Vec<Box<dyn Correct + 'a>>);

impl<'a> Corrector<'a> {
    pub fn add(&mut self, correction: Box<dyn Correct + 'a>) -> &mut Corrector<'a> {
        self.0.push(correction);
        self
    }
}

impl<'a> Correct for Corrector<'a> {
    fn correct(&self, surface: &Surface, lemma: String) -> String {
        self.0
            .iter()
            .fold(lemma, |lemma, correction| correction.correct(surface, lemma))
    }
}

impl<'a> Default for Corrector<'a> {
    fn default() -> Self {
        Self(vec![])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Suffix(&'static str);
    impl Correct for Suffix {
        fn correct(&self, _: &Surface, lemma: String) -> String {
            lemma + self.0
        }
    }

    #[test]
    fn chain_order() {
        let mut c = Corrector::default();
        c.add(Box::new(Suffix("a"))).add(Box::new(Suffix("b")));
        let s = Surface { raw: "", norm: "" };
        assert_eq!(c.correct(&s, "x".to_string()), "xab");
    }
}
