use std::{borrow::Cow, cmp::Reverse, fmt::Write, sync::OnceLock};

use regex::Regex;
use tracing::{trace, warn};

use super::{MediaMap, element::MediaStyle};
use crate::escape::escape_html;

/// First code point of the range reserved for protection tokens. The whole
/// range lies in the Unicode private use area and is removed from any input
/// before tokens are inserted, so a token can never collide with user text.
pub const PROTECTION_RANGE_START: char = '\u{E000}';

/// Last code point of the range reserved for protection tokens.
pub const PROTECTION_RANGE_END: char = '\u{E01F}';

const TOKEN_PREFIX: char = '\u{E000}';
const TOKEN_SUFFIX: char = '\u{E001}';
const TOKEN_DIGIT_ZERO: u32 = 0xE010;

pub(crate) fn is_reserved(c: char) -> bool { (PROTECTION_RANGE_START..=PROTECTION_RANGE_END).contains(&c) }

/// Builds the token standing in for the `index`-th media map entry. Every
/// character of it, digits included, comes from the reserved range.
pub(crate) fn protection_token(index: usize) -> String {
    let mut token = String::new();
    token.push(TOKEN_PREFIX);
    token.extend(index.to_string().chars().map(|digit| {
        let offset = digit.to_digit(10).unwrap_or_default();
        char::from_u32(TOKEN_DIGIT_ZERO + offset).unwrap_or(TOKEN_PREFIX)
    }));
    token.push(TOKEN_SUFFIX);
    token
}

pub(crate) fn strip_reserved(text: &str) -> Cow<'_, str> {
    if text.chars().any(is_reserved) {
        warn!("Input contains reserved protection characters, removing them");
        Cow::Owned(text.chars().filter(|c| !is_reserved(*c)).collect())
    } else {
        Cow::Borrowed(text)
    }
}

/// The form a token takes once the parser has percent-encoded it inside a
/// link or image destination.
fn percent_encoded(token: &str) -> String {
    let mut encoded = String::with_capacity(token.len() * 3);
    for byte in token.bytes() {
        let _ = write!(encoded, "%{byte:02X}");
    }
    encoded
}

/// Percent-encoded UTF-8 of any character in the reserved range,
/// `EE 80 80` up to `EE 80 9F`.
fn encoded_reserved() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)%EE%80%[89][0-9A-F]").expect("encoded reserved regex must compile")
    })
}

#[derive(Debug)]
struct Restoration {
    token: String,
    encoded_token: String,
    element: String,
    url: String,
}

/// Markup source in which every placeholder has been swapped for an opaque
/// token that no markup parser will touch, plus what each token becomes
/// once the parser is done.
#[derive(Debug)]
pub(crate) struct ProtectedSource {
    text: String,
    restorations: Vec<Restoration>,
}

impl ProtectedSource {
    /// Replaces the placeholders of `media_map` occurring in `content`.
    ///
    /// Longer placeholders are replaced first so that a placeholder which
    /// is a substring of another cannot claim part of it. Entries of equal
    /// length keep the map's iteration order.
    pub(crate) fn new(content: &str, media_map: &MediaMap, style: MediaStyle) -> Self {
        let mut text = strip_reserved(content).into_owned();

        let mut entries: Vec<(usize, &str, &str)> = media_map
            .iter()
            .enumerate()
            .map(|(index, (placeholder, url))| (index, placeholder, url))
            .collect();
        entries.sort_by_key(|(_, placeholder, _)| Reverse(placeholder.len()));

        let mut restorations = Vec::new();

        for (index, placeholder, url) in entries {
            if placeholder.is_empty() || placeholder.chars().any(is_reserved) {
                warn!(placeholder, "Skipping unusable placeholder");
                continue;
            }

            let occurrences = text.matches(placeholder).count();
            if occurrences == 0 {
                continue;
            }
            trace!(placeholder, occurrences, "Protecting placeholder");

            let token = protection_token(index);
            text = text.replace(placeholder, &token);
            restorations.push(Restoration {
                encoded_token: percent_encoded(&token),
                token,
                element: style.render(url, placeholder),
                url: escape_html(url),
            });
        }

        Self { text, restorations }
    }

    pub(crate) fn text(&self) -> &str { &self.text }

    /// Swaps every token in the rendered `html` for its media element. A
    /// token the parser percent-encoded into a link or image destination
    /// becomes the bare URL instead.
    pub(crate) fn restore(&self, html: &str) -> String {
        let mut result = html.to_owned();
        for restoration in &self.restorations {
            result = result.replace(&restoration.token, &restoration.element);
            if result.contains(&restoration.encoded_token) {
                result = result.replace(&restoration.encoded_token, &restoration.url);
            }
        }

        // Remnants of tokens mangled beyond recognition
        let result = encoded_reserved().replace_all(&result, "");
        strip_reserved(&result).into_owned()
    }
}
