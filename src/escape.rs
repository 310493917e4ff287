use std::borrow::Cow;

/// Escapes the five HTML-significant characters in a single pass.
///
/// ```
/// use revision_text::escape_html;
///
/// assert_eq!(escape_html("<a href='x'>&</a>"), "&lt;a href=&#039;x&#039;&gt;&amp;&lt;/a&gt;");
/// ```
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    escape_html_into(&mut result, text);
    result
}

/// Appends the escaped form of `text` to `buffer`.
pub fn escape_html_into(buffer: &mut String, text: &str) {
    for c in text.chars() {
        push_escaped_char(buffer, c);
    }
}

pub(crate) fn push_escaped_char(buffer: &mut String, c: char) {
    match c {
        '&' => buffer.push_str("&amp;"),
        '<' => buffer.push_str("&lt;"),
        '>' => buffer.push_str("&gt;"),
        '"' => buffer.push_str("&quot;"),
        '\'' => buffer.push_str("&#039;"),
        _ => buffer.push(c),
    }
}

/// Decodes character references, e.g. in attribute values read back from
/// rendered HTML.
#[must_use]
pub fn unescape_html(text: &str) -> Cow<'_, str> { htmlize::unescape(text) }
