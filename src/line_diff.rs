mod diff_entry;

pub use diff_entry::{DiffEntry, DiffKind, DiffResult};

use crate::utils::myers_diff::{Run, myers_diff};

/// Positional line diff of two revisions.
///
/// Both texts are split on `\n` (line endings are not normalised) and
/// compared index by index. A line missing past the end of the shorter text
/// counts as an empty string, but padding is never reported as deleted or
/// inserted. Lines that differ produce a `Delete` of the before-line followed by
/// an `Insert` of the after-line.
///
/// This is not a minimal edit script: inserting a line at the top shows
/// every following line as changed. Use [`compute_aligned_diff`] when the
/// lines should be aligned.
///
/// ```
/// use revision_text::{compute_diff, DiffEntry};
///
/// assert_eq!(
///     compute_diff("a\nb", "a\nc"),
///     vec![DiffEntry::equal("a"), DiffEntry::delete("b"), DiffEntry::insert("c")],
/// );
/// ```
#[must_use]
pub fn compute_diff(before: &str, after: &str) -> DiffResult {
    let before_lines: Vec<&str> = before.split('\n').collect();
    let after_lines: Vec<&str> = after.split('\n').collect();
    let line_count = before_lines.len().max(after_lines.len());

    let mut result = Vec::with_capacity(line_count);

    for i in 0..line_count {
        let before_line = before_lines.get(i).copied().unwrap_or_default();
        let after_line = after_lines.get(i).copied().unwrap_or_default();

        if before_line == after_line {
            result.push(DiffEntry::equal(before_line));
            continue;
        }

        if i < before_lines.len() {
            result.push(DiffEntry::delete(before_line));
        }
        if i < after_lines.len() {
            result.push(DiffEntry::insert(after_line));
        }
    }

    result
}

/// Line diff of two revisions aligned with Myers' algorithm, in
/// `O((N+M)D)` time where `D` is the number of changed lines.
///
/// Produces the same entry shape as [`compute_diff`], but lines inserted or
/// removed in the middle no longer cause the rest of the document to show
/// up as changed. Within a changed hunk all deletions precede all
/// insertions.
///
/// ```
/// use revision_text::{compute_aligned_diff, DiffEntry};
///
/// assert_eq!(
///     compute_aligned_diff("b\nc", "a\nb\nc"),
///     vec![DiffEntry::insert("a"), DiffEntry::equal("b"), DiffEntry::equal("c")],
/// );
/// ```
#[must_use]
pub fn compute_aligned_diff(before: &str, after: &str) -> DiffResult {
    let before_lines: Vec<&str> = before.split('\n').collect();
    let after_lines: Vec<&str> = after.split('\n').collect();

    let mut result = Vec::with_capacity(before_lines.len().max(after_lines.len()));
    let mut deleted: Vec<&str> = Vec::new();
    let mut inserted: Vec<&str> = Vec::new();

    for run in myers_diff(&before_lines, &after_lines) {
        match run {
            Run::Equal { old, .. } => {
                flush_hunk(&mut result, &mut deleted, &mut inserted);
                result.extend(before_lines[old].iter().copied().map(DiffEntry::equal));
            }
            Run::Delete(range) => deleted.extend_from_slice(&before_lines[range]),
            Run::Insert(range) => inserted.extend_from_slice(&after_lines[range]),
        }
    }
    flush_hunk(&mut result, &mut deleted, &mut inserted);

    result
}

fn flush_hunk(result: &mut DiffResult, deleted: &mut Vec<&str>, inserted: &mut Vec<&str>) {
    result.extend(deleted.drain(..).map(DiffEntry::delete));
    result.extend(inserted.drain(..).map(DiffEntry::insert));
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_single_changed_line() {
        assert_eq!(
            compute_diff("a\nb", "a\nc"),
            vec![
                DiffEntry::equal("a"),
                DiffEntry::delete("b"),
                DiffEntry::insert("c")
            ]
        );
    }

    #[test]
    fn test_identical_texts_reconstruct() {
        for text in ["", "one line", "a\nb\nc", "trailing\n", "\n\n", "x\r\ny"] {
            let diff = compute_diff(text, text);

            assert!(diff.iter().all(|entry| entry.kind() == DiffKind::Equal));
            assert_eq!(
                diff.iter()
                    .map(DiffEntry::content)
                    .collect::<Vec<_>>()
                    .join("\n"),
                text
            );
        }
    }

    #[test]
    fn test_padding_produces_no_entries() {
        assert_eq!(
            compute_diff("a", "a\nb\nc"),
            vec![
                DiffEntry::equal("a"),
                DiffEntry::insert("b"),
                DiffEntry::insert("c")
            ]
        );
        assert_eq!(
            compute_diff("a\nb", "a"),
            vec![DiffEntry::equal("a"), DiffEntry::delete("b")]
        );
    }

    #[test]
    fn test_padding_against_empty_line_is_equal() {
        assert_eq!(
            compute_diff("a", "a\n"),
            vec![DiffEntry::equal("a"), DiffEntry::equal("")]
        );
    }

    #[test]
    fn test_real_empty_lines_are_reported() {
        assert_eq!(
            compute_diff("a\n\nc", "a\nb\nc"),
            vec![
                DiffEntry::equal("a"),
                DiffEntry::delete(""),
                DiffEntry::insert("b"),
                DiffEntry::equal("c"),
            ]
        );
    }

    #[test]
    fn test_positional_diff_does_not_realign() {
        assert_eq!(
            compute_diff("b\nc", "a\nb\nc"),
            vec![
                DiffEntry::delete("b"),
                DiffEntry::insert("a"),
                DiffEntry::delete("c"),
                DiffEntry::insert("b"),
                DiffEntry::insert("c"),
            ]
        );
    }

    #[test]
    fn test_carriage_returns_are_content() {
        assert_eq!(
            compute_diff("a\r\nb", "a\nb"),
            vec![
                DiffEntry::delete("a\r"),
                DiffEntry::insert("a"),
                DiffEntry::equal("b"),
            ]
        );
    }

    #[test]
    fn test_aligned_diff_hunks() {
        assert_eq!(
            compute_aligned_diff("title\nold body\nfooter", "title\nnew body\nextra\nfooter"),
            vec![
                DiffEntry::equal("title"),
                DiffEntry::delete("old body"),
                DiffEntry::insert("new body"),
                DiffEntry::insert("extra"),
                DiffEntry::equal("footer"),
            ]
        );
    }

    #[test]
    fn test_aligned_diff_of_identical_texts() {
        let text = "a\nb\n\nc";
        let diff = compute_aligned_diff(text, text);

        assert_eq!(diff, compute_diff(text, text));
    }

    #[test]
    fn test_aligned_diff_removed_line() {
        assert_eq!(
            compute_aligned_diff("a\nb\nc", "a\nc"),
            vec![
                DiffEntry::equal("a"),
                DiffEntry::delete("b"),
                DiffEntry::equal("c"),
            ]
        );
    }
}
