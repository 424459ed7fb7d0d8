//! Fasttext identifier
use std::path::Path;

use fasttext::{FastText as FastTextLib, Prediction};
use log::debug;

use super::{Identification, Identifier};
use crate::{error::Error, lang::Lang};

/// Holds a [fasttext::FastText] instance and its parameters:
/// - [FastText::k], number of predicted labels considered on a sentence
/// - [FastText::threshold], prediction threshold
///
/// Only Spanish and English labels are kept. The confidence of the
/// returned identification is normalized over those two labels.
pub struct FastText {
    predictor: FastTextLib,
    pub k: i32,
    pub threshold: f32,
}

impl FastText {
    /// Create a new identifier from `lid.176.bin` (or any fasttext lid model).
    ///
    /// - [Self::k] is set to 10
    /// - [Self::threshold] is set to 0.0
    ///
    /// # Errors
    /// Propagates [fasttext::FastText] errors.
    pub fn new_lid(filename: &Path) -> Result<Self, Error> {
        Self::new(filename, 10, 0.0)
    }

    /// Create a new fasttext identifier.
    ///
    /// filename has to be a path to a `bin` file.
    pub fn new(filename: &Path, k: i32, threshold: f32) -> Result<Self, Error> {
        let filename_str = filename.to_str().ok_or_else(|| {
            Error::Custom(format!("invalid filepath for lid: {:?}", filename))
        })?;
        let mut predictor = FastTextLib::new();
        predictor
            .load_model(filename_str)
            .map_err(Error::FastText)?;
        Ok(Self {
            predictor,
            k,
            threshold,
        })
    }
}

/// Keep Spanish/English predictions and normalize the best one over both.
fn best_of(predictions: &[Prediction]) -> Option<Identification> {
    let mut es = 0f32;
    let mut en = 0f32;
    for p in predictions {
        match p.label.parse::<Lang>() {
            Ok(Lang::Spanish) => es = es.max(p.prob),
            Ok(Lang::English) => en = en.max(p.prob),
            Err(_) => {}
        }
    }
    let total = es + en;
    if total <= 0.0 {
        return None;
    }
    if es >= en {
        Some(Identification::new(Lang::Spanish, es / total))
    } else {
        Some(Identification::new(Lang::English, en / total))
    }
}

impl Identifier for FastText {
    fn identify(&self, sentence: &str) -> Result<Option<Identification>, Error> {
        // fasttext predicts on a single line
        let sentence = sentence.replace(['\n', char::from(0)], " ");
        let predictions = self
            .predictor
            .predict(&sentence, self.k, self.threshold)
            .map_err(Error::FastText)?;
        debug!("{:?} -> {:?}", sentence, predictions);
        Ok(best_of(&predictions))
    }
}

#[cfg(test)]
mod tests {
    use fasttext::Prediction;

    use super::best_of;
    use crate::lang::Lang;

    fn pred(label: &str, prob: f32) -> Prediction {
        Prediction {
            label: label.to_string(),
            prob,
        }
    }

    #[test]
    fn spanish_wins_and_is_normalized() {
        let preds = vec![
            pred("__label__es", 0.6),
            pred("__label__pt", 0.3),
            pred("__label__en", 0.2),
        ];
        let id = best_of(&preds).unwrap();
        assert_eq!(id.label(), &Lang::Spanish);
        assert!((id.prob() - 0.75).abs() < 1e-6);
    }

    #[test]
    fn neither_label() {
        let preds = vec![pred("__label__pt", 0.9), pred("__label__it", 0.1)];
        assert!(best_of(&preds).is_none());
    }

    #[test]
    fn english_only() {
        let id = best_of(&[pred("__label__en", 0.4)]).unwrap();
        assert_eq!(id.label(), &Lang::English);
        assert_eq!(id.prob(), &1.0);
    }
}
