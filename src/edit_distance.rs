//! Levenshtein distance and the similarity score derived from it.
//!
//! * time: `O(|a| * |b|)`
//! * space: `O(|a|)`
//!
//! Lengths and edits are counted in Unicode scalar values, not bytes.
//! The cost is quadratic so callers are expected to cap the input size at
//! document scale before scoring.

/// Minimum number of single-character insertions, deletions and
/// substitutions turning `a` into `b`.
///
/// ```
/// use revision_text::levenshtein_distance;
///
/// assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
/// ```
#[must_use]
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // Rolling pair of rows over the (|b| + 1) x (|a| + 1) table, each row
    // indexed by the position in `a`.
    let mut previous: Vec<usize> = (0..=a.len()).collect();
    let mut current = vec![0; a.len() + 1];

    for (i, b_char) in b.iter().enumerate() {
        current[0] = i + 1;

        for (j, a_char) in a.iter().enumerate() {
            current[j + 1] = if a_char == b_char {
                previous[j]
            } else {
                (previous[j] + 1) // substitution
                    .min(current[j] + 1) // insertion
                    .min(previous[j + 1] + 1) // deletion
            };
        }

        std::mem::swap(&mut previous, &mut current);
    }

    previous[a.len()]
}

/// Normalised similarity of two strings in `[0, 1]`, where `1.0` means
/// identical. Two empty strings are identical.
///
/// ```
/// use revision_text::similarity;
///
/// assert!((similarity("abcd", "abcx") - 0.75).abs() < f64::EPSILON);
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn similarity(a: &str, b: &str) -> f64 {
    let a_length = a.chars().count();
    let b_length = b.chars().count();

    let (longer, shorter, longer_length) = if b_length > a_length {
        (b, a, b_length)
    } else {
        (a, b, a_length)
    };

    if longer_length == 0 {
        return 1.0;
    }

    let distance = levenshtein_distance(longer, shorter);
    (longer_length - distance) as f64 / longer_length as f64
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test_case("", "", 0; "both empty")]
    #[test_case("", "abc", 3; "empty before")]
    #[test_case("abc", "", 3; "empty after")]
    #[test_case("abc", "abc", 0; "identical")]
    #[test_case("kitten", "sitting", 3; "classic")]
    #[test_case("flaw", "lawn", 2; "shifted")]
    #[test_case("abc", "xyz", 3; "all substituted")]
    #[test_case("こんにちは", "こんばんは", 2; "multi-byte characters count once")]
    fn test_levenshtein_distance(a: &str, b: &str, expected: usize) {
        assert_eq!(levenshtein_distance(a, b), expected);
    }

    #[test]
    fn test_distance_from_empty_is_length() {
        for text in ["a", "hello world", "日本語", "line\nbreak"] {
            assert_eq!(levenshtein_distance("", text), text.chars().count());
        }
    }

    #[test]
    fn test_distance_is_symmetric() {
        let pairs = [("sunday", "saturday"), ("", "x"), ("abc", "cab")];
        for (a, b) in pairs {
            assert_eq!(levenshtein_distance(a, b), levenshtein_distance(b, a));
        }
    }

    #[test_case(""; "empty")]
    #[test_case("a"; "single character")]
    #[test_case("The quick brown fox"; "sentence")]
    fn test_similarity_of_identical_strings(text: &str) {
        assert!((similarity(text, text) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_similarity_bounds() {
        assert!(similarity("abc", "xyz").abs() < f64::EPSILON);
        assert!((similarity("", "abc")).abs() < f64::EPSILON);

        let score = similarity("the draft", "the final draft");
        assert!(score > 0.0 && score < 1.0);
    }

    #[test]
    fn test_similarity_is_symmetric() {
        let pairs = [
            ("AI proposed text", "human edited text"),
            ("abc", "abd"),
            ("same length", "diff length"),
            ("", "non-empty"),
        ];
        for (a, b) in pairs {
            assert!((similarity(a, b) - similarity(b, a)).abs() < f64::EPSILON);
        }
    }
}
