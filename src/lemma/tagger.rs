//! Part-of-speech taggers.
use std::time::Duration;

use log::debug;
use reqwest::blocking::Client;
use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::text::normalize_for_match;

/// A tagged token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,
    #[serde(default)]
    pub lemma: String,
    #[serde(default)]
    pub pos: String,
}

/// Tags a batch of lines. The output has one token list per input line.
pub trait Tagger {
    fn tag(&self, lines: &[String]) -> Result<Vec<Vec<Token>>, Error>;
}

#[derive(Serialize)]
struct TagRequest<'a> {
    lines: &'a [String],
}

/// Tagger served over HTTP.
///
/// Lines are posted as `{"lines": [...]}`, and the endpoint answers with
/// a list of token lists `[[{"text", "lemma", "pos"}, ...], ...]`.
pub struct HttpTagger {
    client: Client,
    url: Url,
}

impl HttpTagger {
    pub fn new(url: &str, timeout: Duration) -> Result<Self, Error> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            url: Url::parse(url)?,
        })
    }
}

impl Tagger for HttpTagger {
    fn tag(&self, lines: &[String]) -> Result<Vec<Vec<Token>>, Error> {
        if lines.is_empty() {
            return Ok(vec![]);
        }
        debug!("tagging {} lines", lines.len());
        let docs: Vec<Vec<Token>> = self
            .client
            .post(self.url.clone())
            .json(&TagRequest { lines })
            .send()?
            .error_for_status()?
            .json()?;
        if docs.len() != lines.len() {
            return Err(Error::Custom(format!(
                "tagger returned {} docs for {} lines",
                docs.len(),
                lines.len()
            )));
        }
        Ok(docs)
    }
}

/// Splits on whitespace and tags every token as itself, with POS `X`.
#[derive(Debug, Default, Clone, Copy)]
pub struct WhitespaceTagger;

impl Tagger for WhitespaceTagger {
    fn tag(&self, lines: &[String]) -> Result<Vec<Vec<Token>>, Error> {
        Ok(lines
            .iter()
            .map(|line| {
                line.split_whitespace()
                    .map(|text| Token {
                        text: text.to_string(),
                        lemma: normalize_for_match(text),
                        pos: "X".to_string(),
                    })
                    .collect()
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace() {
        let docs = WhitespaceTagger
            .tag(&["Tú ere' mala,".to_string(), "".to_string()])
            .unwrap();
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].len(), 3);
        assert_eq!(docs[0][1].lemma, "ere");
        assert_eq!(docs[0][2].lemma, "mala");
        assert_eq!(docs[0][2].pos, "X");
        assert!(docs[1].is_empty());
    }

    #[test]
    fn token_defaults() {
        let t: Token = serde_json::from_str(r#"{"text": "hola"}"#).unwrap();
        assert_eq!(t.lemma, "");
        assert_eq!(t.pos, "");
    }

    #[test]
    fn http_tagger_bad_url() {
        assert!(HttpTagger::new("not a url", Duration::from_secs(1)).is_err());
    }
}
