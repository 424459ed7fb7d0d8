//! Machine translators.
use std::thread;
use std::time::Duration;

use log::debug;
use reqwest::blocking::Client;
use serde_json::Value;
use url::Url;

use crate::error::Error;

const GOOGLE_URL: &str = "https://translate.googleapis.com/translate_a/single";

/// Spanish to English translation.
pub trait Translator {
    fn translate(&self, text: &str) -> Result<String, Error>;
}

/// Client for the public Google Translate endpoint.
pub struct GoogleTranslator {
    client: Client,
    /// pause after each request
    delay: Duration,
}

impl GoogleTranslator {
    pub fn new(timeout: Duration, delay: Duration) -> Result<Self, Error> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            delay,
        })
    }

    fn url(text: &str) -> Result<Url, Error> {
        Ok(Url::parse_with_params(
            GOOGLE_URL,
            &[
                ("client", "gtx"),
                ("sl", "es"),
                ("tl", "en"),
                ("dt", "t"),
                ("q", text),
            ],
        )?)
    }
}

/// Joins the translated segments of a `translate_a/single` response.
///
/// The response looks like `[[["translated", "source", ...], ...], ...]`.
fn parse_response(body: &Value) -> Result<String, Error> {
    let segments = body
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| Error::Custom(format!("unexpected translation response: {}", body)))?;
    Ok(segments
        .iter()
        .filter_map(|seg| seg.get(0).and_then(Value::as_str))
        .collect::<String>()
        .trim()
        .to_string())
}

impl Translator for GoogleTranslator {
    fn translate(&self, text: &str) -> Result<String, Error> {
        debug!("translating {:?}", text);
        let body: Value = self
            .client
            .get(Self::url(text)?)
            .send()?
            .error_for_status()?
            .json()?;
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
        parse_response(&body)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn url_encoding() {
        let url = GoogleTranslator::url("tú y yo").unwrap();
        assert_eq!(url.host_str(), Some("translate.googleapis.com"));
        let q: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert!(q.contains(&("sl".to_string(), "es".to_string())));
        assert!(q.contains(&("q".to_string(), "tú y yo".to_string())));
    }

    #[test]
    fn segments_are_joined() {
        let body = json!([[["I want you. ", "Te quiero. ", null], ["Come here", "Ven aquí", null]], null, "es"]);
        assert_eq!(parse_response(&body).unwrap(), "I want you. Come here");
    }

    #[test]
    fn bad_response() {
        assert!(parse_response(&json!({"error": 1})).is_err());
        assert_eq!(parse_response(&json!([[]])).unwrap(), "");
    }
}
