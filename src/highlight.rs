mod highlights;

pub use highlights::{Highlight, HighlightKind, Highlights};

use crate::{
    errors::HighlightError,
    escape::escape_html,
    utils::{
        myers_diff::{Run, myers_diff},
        string_builder::StringBuilder,
    },
};

/// Renders `text` as escaped HTML with every highlighted span wrapped in a
/// `<span class="diff-insert">` or `<span class="diff-delete">` element.
/// Offsets are character indices into `text`.
///
/// # Errors
///
/// Returns [`HighlightError::OutOfBounds`] when a span ends past the end of
/// `text`.
///
/// ```
/// use revision_text::{Highlight, Highlights, highlight_diff};
///
/// let highlights = Highlights::new(vec![Highlight::insert(1, 2)]).unwrap();
/// assert_eq!(
///     highlight_diff("a<c", &highlights).unwrap(),
///     r#"a<span class="diff-insert">&lt;</span>c"#,
/// );
/// ```
pub fn highlight_diff(text: &str, highlights: &Highlights) -> Result<String, HighlightError> {
    if highlights.is_empty() {
        return Ok(escape_html(text));
    }

    let length = text.chars().count();
    let end = highlights.end();
    if end > length {
        return Err(HighlightError::OutOfBounds { end, length });
    }

    let mut builder = StringBuilder::new(text);
    let mut last_index = 0;

    for highlight in highlights.iter() {
        builder.retain_escaped(highlight.start() - last_index);
        builder.insert(highlight.kind().opening_tag());
        builder.retain_escaped(highlight.len());
        builder.insert("</span>");

        last_index = highlight.end();
    }

    Ok(builder.finish())
}

/// Character-level difference between two revisions, expressed as the
/// spans deleted from `before` and the spans inserted into `after`. Each
/// side can be passed to [`highlight_diff`] together with its own text.
///
/// ```
/// use revision_text::{Highlight, char_highlights};
///
/// let (deleted, inserted) = char_highlights("cat", "cut");
/// assert_eq!(deleted.as_slice(), &[Highlight::delete(1, 2)]);
/// assert_eq!(inserted.as_slice(), &[Highlight::insert(1, 2)]);
/// ```
#[must_use]
pub fn char_highlights(before: &str, after: &str) -> (Highlights, Highlights) {
    let before_chars: Vec<char> = before.chars().collect();
    let after_chars: Vec<char> = after.chars().collect();

    let mut deleted = Vec::new();
    let mut inserted = Vec::new();

    for run in myers_diff(&before_chars, &after_chars) {
        match run {
            Run::Equal { .. } => {}
            Run::Delete(range) => {
                push_coalesced(&mut deleted, Highlight::delete(range.start, range.end));
            }
            Run::Insert(range) => {
                push_coalesced(&mut inserted, Highlight::insert(range.start, range.end));
            }
        }
    }

    // Runs are ordered, disjoint and non-empty on each side
    (
        Highlights::from_sorted_unchecked(deleted),
        Highlights::from_sorted_unchecked(inserted),
    )
}

/// Appends `span`, merging it into the last span when the two touch.
fn push_coalesced(spans: &mut Vec<Highlight>, span: Highlight) {
    match spans.last_mut() {
        Some(last) if last.end() == span.start() && last.kind() == span.kind() => {
            *last = Highlight::new(last.start(), span.end(), last.kind());
        }
        _ => spans.push(span),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_no_highlights_is_plain_escape() {
        assert_eq!(
            highlight_diff("abc", &Highlights::default()).unwrap(),
            escape_html("abc")
        );
        assert_eq!(
            highlight_diff("<b>", &Highlights::default()).unwrap(),
            "&lt;b&gt;"
        );
    }

    #[test]
    fn test_single_insert() {
        let highlights = Highlights::new(vec![Highlight::insert(1, 2)]).unwrap();

        assert_eq!(
            highlight_diff("abc", &highlights).unwrap(),
            r#"a<span class="diff-insert">b</span>c"#
        );
    }

    #[test]
    fn test_multiple_spans_and_escaping() {
        let highlights =
            Highlights::new(vec![Highlight::delete(0, 1), Highlight::insert(4, 7)]).unwrap();

        assert_eq!(
            highlight_diff("&ab <x> tail", &highlights).unwrap(),
            concat!(
                r#"<span class="diff-delete">&amp;</span>ab "#,
                r#"<span class="diff-insert">&lt;x&gt;</span> tail"#
            )
        );
    }

    #[test]
    fn test_escapes_exactly_once() {
        let highlights = Highlights::new(vec![Highlight::insert(0, 5)]).unwrap();
        let html = highlight_diff("&amp;", &highlights).unwrap();

        assert_eq!(html, r#"<span class="diff-insert">&amp;amp;</span>"#);
        assert!(!html.contains("&amp;amp;amp;"));
    }

    #[test]
    fn test_adjacent_spans() {
        let highlights =
            Highlights::new(vec![Highlight::delete(0, 1), Highlight::insert(1, 2)]).unwrap();

        assert_eq!(
            highlight_diff("xy", &highlights).unwrap(),
            r#"<span class="diff-delete">x</span><span class="diff-insert">y</span>"#
        );
    }

    #[test]
    fn test_offsets_are_characters() {
        let highlights = Highlights::new(vec![Highlight::insert(2, 3)]).unwrap();

        assert_eq!(
            highlight_diff("日本語です", &highlights).unwrap(),
            r#"日本<span class="diff-insert">語</span>です"#
        );
    }

    #[test]
    fn test_out_of_bounds() {
        let highlights = Highlights::new(vec![Highlight::insert(1, 10)]).unwrap();

        assert_eq!(
            highlight_diff("abc", &highlights),
            Err(HighlightError::OutOfBounds { end: 10, length: 3 })
        );
    }

    #[test]
    fn test_char_highlights_round_trip_through_highlighter() {
        let before = "The draft was approved.";
        let after = "The final draft was approved!";

        let (deleted, inserted) = char_highlights(before, after);

        let before_html = highlight_diff(before, &deleted).unwrap();
        let after_html = highlight_diff(after, &inserted).unwrap();

        assert_eq!(
            before_html,
            r#"The draft was approved<span class="diff-delete">.</span>"#
        );
        assert_eq!(
            after_html,
            r#"The <span class="diff-insert">final </span>draft was approved<span class="diff-insert">!</span>"#
        );
    }

    #[test]
    fn test_char_highlights_of_identical_texts() {
        let (deleted, inserted) = char_highlights("same", "same");

        assert!(deleted.is_empty());
        assert!(inserted.is_empty());
    }

    #[test]
    fn test_touching_spans_are_merged() {
        let mut spans = vec![Highlight::delete(0, 2)];
        push_coalesced(&mut spans, Highlight::delete(2, 4));
        push_coalesced(&mut spans, Highlight::delete(5, 6));

        assert_eq!(spans, vec![Highlight::delete(0, 4), Highlight::delete(5, 6)]);
    }

    #[test]
    fn test_char_highlights_never_touch() {
        for (before, after) in [
            ("abcabba", "cbabac"),
            ("kitten", "sitting"),
            ("one two three", "three two one"),
            ("aaaa", "abab"),
        ] {
            let (deleted, inserted) = char_highlights(before, after);

            for spans in [deleted.as_slice(), inserted.as_slice()] {
                assert!(spans.windows(2).all(|pair| pair[0].end() < pair[1].start()));
            }
        }
    }
}
