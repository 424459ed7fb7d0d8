//! Languages the pipeline distinguishes.
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Language labels used by identification and frequency lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Lang {
    #[serde(rename = "es")]
    Spanish,
    #[serde(rename = "en")]
    English,
}

impl Lang {
    /// ISO 639-1 code.
    pub fn code(&self) -> &'static str {
        match self {
            Lang::Spanish => "es",
            Lang::English => "en",
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Lang {
    type Err = String;

    /// Accepts ISO 639-1/639-3 codes, with or without a fastText `__label__` prefix.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().trim_start_matches("__label__").to_lowercase();
        match code.as_str() {
            "es" | "spa" | "spa_latn" => Ok(Lang::Spanish),
            "en" | "eng" | "eng_latn" => Ok(Lang::English),
            _ => Err(format!("unsupported language: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Lang;
    use std::str::FromStr;

    #[test]
    fn parse_codes() {
        assert_eq!(Lang::from_str("es"), Ok(Lang::Spanish));
        assert_eq!(Lang::from_str("__label__en"), Ok(Lang::English));
        assert_eq!(Lang::from_str("__label__spa_Latn"), Ok(Lang::Spanish));
        assert!(Lang::from_str("__label__fr").is_err());
    }

    #[test]
    fn serde_codes() {
        assert_eq!(serde_json::to_string(&Lang::Spanish).unwrap(), "\"es\"");
        let l: Lang = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(l, Lang::English);
        assert_eq!(Lang::English.to_string(), "en");
    }
}
