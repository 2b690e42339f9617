use regex::{Captures, Regex};
use std::sync::LazyLock;

use crate::transcript::types::CaptionFragment;

static TAG_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<[^>]*>").unwrap());

static ENTITY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&(#[0-9]+|#[xX][0-9a-fA-F]+|[a-zA-Z]+);").unwrap());

static WHITESPACE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Normalizes the text of one caption line.
///
/// Leftover character references are decoded, inline markup such as
/// `<font>` is removed and line breaks inside the caption become spaces.
pub fn clean_caption_text(raw: &str) -> String {
    let decoded = decode_entities(raw);
    let stripped = TAG_REGEX.replace_all(&decoded, "");
    let decoded = decode_entities(&stripped);
    WHITESPACE_REGEX.replace_all(decoded.trim(), " ").into_owned()
}

/// Cleans every fragment and drops the ones left without text.
pub fn clean_fragments(
    fragments: impl IntoIterator<Item = CaptionFragment>,
) -> Vec<CaptionFragment> {
    fragments
        .into_iter()
        .filter_map(|fragment| {
            let text = clean_caption_text(&fragment.text);
            (!text.is_empty()).then(|| CaptionFragment { text, ..fragment })
        })
        .collect()
}

/// Decodes one level of XML/HTML character references. Unknown named
/// entities are left untouched.
pub fn decode_entities(text: &str) -> String {
    ENTITY_REGEX
        .replace_all(text, |caps: &Captures| {
            let entity = &caps[1];
            let decoded = match entity {
                "amp" => Some('&'),
                "lt" => Some('<'),
                "gt" => Some('>'),
                "quot" => Some('"'),
                "apos" => Some('\''),
                "nbsp" => Some('\u{a0}'),
                _ => entity.strip_prefix('#').and_then(|number| {
                    let code = match number.strip_prefix(['x', 'X']) {
                        Some(hex) => u32::from_str_radix(hex, 16).ok(),
                        None => number.parse().ok(),
                    };
                    code.and_then(char::from_u32)
                }),
            };
            decoded.map_or_else(|| caps[0].to_string(), String::from)
        })
        .into_owned()
}
