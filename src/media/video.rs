use std::sync::OnceLock;

use regex::{Captures, Regex};

use super::protect::protection_token;

/// Adds a `controls` attribute to every `<video>` tag that lacks one.
///
/// ```
/// use revision_text::ensure_video_controls;
///
/// assert_eq!(
///     ensure_video_controls(r#"<video src="v.mp4"></video>"#),
///     r#"<video src="v.mp4" controls></video>"#,
/// );
/// ```
#[must_use]
pub fn ensure_video_controls(html: &str) -> String {
    video_open_tag()
        .replace_all(html, |captures: &Captures<'_>| {
            if controls_attribute().is_match(&captures[1]) {
                captures[0].to_owned()
            } else {
                format!("<video{} controls{}>", &captures[1], &captures[2])
            }
        })
        .into_owned()
}

/// Whole `<video>` elements lifted out of a document so that a lossy
/// conversion cannot touch them, each replaced by a protection token.
#[derive(Debug, Default)]
pub(crate) struct VideoBlocks {
    blocks: Vec<(String, String)>,
}

impl VideoBlocks {
    /// Lifts the videos out of `html`, which must not contain reserved
    /// characters, and returns the remaining document. Each token stands on
    /// a paragraph of its own.
    pub(crate) fn extract(html: &str) -> (String, Self) {
        let mut blocks = Vec::new();
        let html = video_element().replace_all(html, |captures: &Captures<'_>| {
            let token = protection_token(blocks.len());
            let replacement = format!("\n\n{token}\n\n");
            blocks.push((token, ensure_video_controls(&captures[0])));
            replacement
        });

        (html.into_owned(), Self { blocks })
    }

    pub(crate) fn len(&self) -> usize { self.blocks.len() }

    /// Puts the lifted videos back in place of their tokens.
    pub(crate) fn reinsert(&self, text: &str) -> String {
        let mut result = text.to_owned();
        for (token, block) in &self.blocks {
            result = result.replace(token, block);
        }
        result
    }
}

fn video_open_tag() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)<video\b([^>]*?)(\s*/?)>").expect("video tag regex must compile")
    })
}

fn video_element() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?is)<video\b[^>]*?/>|<video\b[^>]*>.*?</video>")
            .expect("video element regex must compile")
    })
}

fn controls_attribute() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)(?:^|\s)controls(?:\s|=|/|$)").expect("controls regex must compile")
    })
}
