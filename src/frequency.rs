//! General-language word frequencies.
//!
//! Frequencies are relative (`0.0` means unknown), read from a CSV file with
//! a `lang,word,frequency` header.
use std::collections::HashMap;
use std::path::Path;

use log::info;
use serde::Deserialize;

use crate::error::Error;
use crate::lang::Lang;

pub trait WordFrequency {
    /// Frequency of `word` in `lang`, `0.0` if unknown.
    fn frequency(&self, word: &str, lang: Lang) -> f64;
}

#[derive(Debug, Deserialize)]
struct FrequencyRow {
    lang: String,
    word: String,
    frequency: f64,
}

/// In-memory frequency table.
#[derive(Debug, Default, Clone)]
pub struct FrequencyTable {
    es: HashMap<String, f64>,
    en: HashMap<String, f64>,
}

impl FrequencyTable {
    /// Load a table from a CSV file.
    ///
    /// Rows in languages other than `es`/`en` are ignored.
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        if !path.exists() {
            return Err(Error::MissingInput(path.to_path_buf()));
        }
        let mut reader = csv::Reader::from_path(path)?;
        let mut table = Self::default();
        for row in reader.deserialize() {
            let row: FrequencyRow = row?;
            if let Ok(lang) = row.lang.parse::<Lang>() {
                table.insert(lang, &row.word, row.frequency);
            }
        }
        info!(
            "loaded {} es / {} en frequencies from {:?}",
            table.es.len(),
            table.en.len(),
            path
        );
        Ok(table)
    }

    pub fn insert(&mut self, lang: Lang, word: &str, frequency: f64) {
        let map = match lang {
            Lang::Spanish => &mut self.es,
            Lang::English => &mut self.en,
        };
        map.insert(word.trim().to_lowercase(), frequency);
    }
}

impl WordFrequency for FrequencyTable {
    fn frequency(&self, word: &str, lang: Lang) -> f64 {
        let map = match lang {
            Lang::Spanish => &self.es,
            Lang::English => &self.en,
        };
        map.get(word.trim().to_lowercase().as_str())
            .copied()
            .unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn load_csv() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "lang,word,frequency").unwrap();
        writeln!(f, "es,casa,0.0003").unwrap();
        writeln!(f, "en,house,0.0005").unwrap();
        writeln!(f, "fr,maison,0.0004").unwrap();
        f.flush().unwrap();

        let table = FrequencyTable::from_path(f.path()).unwrap();
        assert_eq!(table.frequency("casa", Lang::Spanish), 0.0003);
        assert_eq!(table.frequency("Casa ", Lang::Spanish), 0.0003);
        assert_eq!(table.frequency("casa", Lang::English), 0.0);
        assert_eq!(table.frequency("house", Lang::English), 0.0005);
        assert_eq!(table.frequency("maison", Lang::Spanish), 0.0);
    }

    #[test]
    fn missing_file() {
        let r = FrequencyTable::from_path(Path::new("/nonexistent/freq.csv"));
        assert!(matches!(r, Err(Error::MissingInput(_))));
    }
}
