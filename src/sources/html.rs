//! Lyrics extraction from Genius song pages.
//!
//! Lyrics are spread over one or more `<div data-lyrics-container="true">`
//! blocks, with `<br/>` line breaks and inline markup (links, italics).
use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    static ref ENTITY: Regex =
        Regex::new(r"&(#[0-9]+|#[xX][0-9a-fA-F]+|[a-zA-Z]+);").expect("entity regex is valid");
}

const CONTAINER_MARKER: &str = "data-lyrics-container=\"true\"";

/// Returns the text of every lyrics container in `html`, joined by newlines.
///
/// Returns `None` if the page has no lyrics container.
pub fn extract_lyrics(html: &str) -> Option<String> {
    let mut blocks = Vec::new();
    let mut rest = html;

    while let Some(pos) = rest.find(CONTAINER_MARKER) {
        let after_marker = &rest[pos..];
        let open_end = match after_marker.find('>') {
            Some(i) => i + 1,
            None => break,
        };
        let body = &after_marker[open_end..];
        let body_len = inner_div_len(body);
        blocks.push(html_to_text(&body[..body_len]));
        rest = &body[body_len..];
    }

    if blocks.is_empty() {
        None
    } else {
        Some(blocks.join("\n"))
    }
}

/// Length of the content of a div whose opening tag has already been consumed,
/// accounting for nested divs.
fn inner_div_len(body: &str) -> usize {
    let mut depth = 1usize;
    let mut idx = 0;
    while idx < body.len() {
        let tail = &body[idx..];
        let next_open = tail.find("<div");
        let next_close = tail.find("</div");
        match (next_open, next_close) {
            (Some(o), Some(c)) if o < c => {
                depth += 1;
                idx += o + 4;
            }
            (_, Some(c)) => {
                depth -= 1;
                if depth == 0 {
                    return idx + c;
                }
                idx += c + 5;
            }
            (_, None) => break,
        }
    }
    body.len()
}

/// Turns `<br>` into newlines, drops every other tag and decodes common entities.
fn html_to_text(fragment: &str) -> String {
    let mut out = String::with_capacity(fragment.len());
    let mut chars = fragment.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        if c == '<' {
            let tag_end = fragment[i..].find('>').map(|e| i + e);
            let tag = match tag_end {
                Some(e) => &fragment[i + 1..e],
                None => break,
            };
            if tag.trim_start().to_ascii_lowercase().starts_with("br") {
                out.push('\n');
            }
            while let Some((j, _)) = chars.peek() {
                if Some(*j) > tag_end {
                    break;
                }
                chars.next();
            }
        } else {
            out.push(c);
        }
    }
    decode_entities(&out)
}

fn decode_entities(s: &str) -> String {
    ENTITY
        .replace_all(s, |caps: &Captures| {
            let name = &caps[1];
            let decoded = match name {
                "amp" => Some('&'),
                "quot" => Some('"'),
                "apos" => Some('\''),
                "lt" => Some('<'),
                "gt" => Some('>'),
                "nbsp" => Some(' '),
                _ => match name.strip_prefix("#x").or_else(|| name.strip_prefix("#X")) {
                    Some(hex) => u32::from_str_radix(hex, 16).ok().and_then(char::from_u32),
                    None => name
                        .strip_prefix('#')
                        .and_then(|dec| dec.parse().ok())
                        .and_then(char::from_u32),
                },
            };
            match decoded {
                Some(c) => c.to_string(),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::{decode_entities, extract_lyrics};

    #[test]
    fn single_container() {
        let html = r#"<html><div class="x" data-lyrics-container="true">[Intro]<br/>Tú no eres <i>mala</i><br>pa&#x27; na&amp;da</div><div>footer</div>"#;
        assert_eq!(
            extract_lyrics(html).unwrap(),
            "[Intro]\nTú no eres mala\npa' na&da"
        );
    }

    #[test]
    fn nested_divs_and_multiple_containers() {
        let html = concat!(
            r#"<div data-lyrics-container="true">uno<div class="ad"><a href="/x">dos</a></div><br/>tres</div>"#,
            r#"<p>between</p>"#,
            r#"<div data-lyrics-container="true">cuatro</div>"#
        );
        assert_eq!(extract_lyrics(html).unwrap(), "unodos\ntres\ncuatro");
    }

    #[test]
    fn numeric_entities() {
        assert_eq!(
            decode_entities("pa&#8217; ti &#x2019;&#X2019;"),
            "pa\u{2019} ti \u{2019}\u{2019}"
        );
        assert_eq!(decode_entities("&#241;o&#39;"), "ño'");
        assert_eq!(decode_entities("&amp;lt; &copy; &#xD800;"), "&lt; &copy; &#xD800;");
    }

    #[test]
    fn no_container() {
        assert!(extract_lyrics("<html><body>nothing</body></html>").is_none());
    }
}
