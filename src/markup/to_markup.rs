use std::sync::OnceLock;

use regex::{Captures, Regex};

/// Label of the numbered image references written by [`html_to_markup`],
/// e.g. `![图片1](https://...)`. Stored drafts carry this label, so it must
/// not change.
pub const IMAGE_LABEL: &str = "图片";

/// Degrades HTML back to markup source.
///
/// This is a lossy, one-way conversion and not an inverse of
/// [`markup_to_html`](crate::markup_to_html): images become numbered image
/// references, paragraphs and line breaks become newlines, headings of any
/// level become `###` headings and container tags are dropped. Emphasis,
/// links and lists are not reconstructed.
///
/// ```
/// use revision_text::html_to_markup;
///
/// assert_eq!(
///     html_to_markup(r#"<h1>Title</h1><p>Body</p><p><img src="a.png"></p>"#),
///     "### Title\n\nBody\n\n![图片1](a.png)",
/// );
/// ```
#[must_use]
pub fn html_to_markup(html: &str) -> String {
    if html.is_empty() {
        return String::new();
    }

    // Images first, the tag rules below would strip them otherwise
    let mut image_index = 0;
    let markup = image_tag().replace_all(html, |captures: &Captures<'_>| {
        image_index += 1;
        format!("\n![{IMAGE_LABEL}{image_index}]({})\n", &captures[1])
    });

    let markup = paragraph_tag().replace_all(&markup, "\n");
    let markup = line_break_tag().replace_all(&markup, "\n");
    let markup = container_tag().replace_all(&markup, "");
    let markup = heading_open_tag().replace_all(&markup, "\n### ");
    let markup = heading_close_tag().replace_all(&markup, "\n");
    let markup = blank_lines().replace_all(&markup, "\n\n");

    markup.trim().to_owned()
}

fn image_tag() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"(?i)<img[^>]+src="([^"]+)"[^>]*>"#).expect("image regex must compile")
    })
}

fn paragraph_tag() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)</?p(?:\s[^>]*)?>").expect("paragraph regex must compile"))
}

fn line_break_tag() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)<br\s*/?>").expect("line break regex must compile"))
}

fn container_tag() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)</?(?:section|div|span)(?:\s[^>]*)?>")
            .expect("container regex must compile")
    })
}

fn heading_open_tag() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)<h[1-6](?:\s[^>]*)?>").expect("heading regex must compile")
    })
}

fn heading_close_tag() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)</h[1-6]>").expect("heading regex must compile"))
}

fn blank_lines() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\n{3,}").expect("blank line regex must compile"))
}
