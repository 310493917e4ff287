#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

use crate::errors::HighlightError;

/// Whether a highlighted span was inserted or deleted.
#[cfg_attr(feature = "wasm", wasm_bindgen)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HighlightKind {
    Insert,
    Delete,
}

impl HighlightKind {
    pub(crate) fn opening_tag(self) -> &'static str {
        match self {
            HighlightKind::Insert => r#"<span class="diff-insert">"#,
            HighlightKind::Delete => r#"<span class="diff-delete">"#,
        }
    }
}

/// A half-open `[start, end)` range of character indices into a text,
/// classified as inserted or deleted.
#[allow(clippy::unsafe_derive_deserialize)]
#[cfg_attr(feature = "wasm", wasm_bindgen)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Highlight {
    start: usize,
    end: usize,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    kind: HighlightKind,
}

#[cfg_attr(feature = "wasm", wasm_bindgen)]
impl Highlight {
    #[cfg_attr(feature = "wasm", wasm_bindgen(constructor))]
    #[must_use]
    pub fn new(start: usize, end: usize, kind: HighlightKind) -> Self { Self { start, end, kind } }

    #[must_use]
    pub fn start(&self) -> usize { self.start }

    #[must_use]
    pub fn end(&self) -> usize { self.end }

    #[cfg_attr(feature = "wasm", wasm_bindgen(js_name = "type"))]
    #[must_use]
    pub fn kind(&self) -> HighlightKind { self.kind }
}

impl Highlight {
    #[must_use]
    pub fn insert(start: usize, end: usize) -> Self { Self::new(start, end, HighlightKind::Insert) }

    #[must_use]
    pub fn delete(start: usize, end: usize) -> Self { Self::new(start, end, HighlightKind::Delete) }

    /// Number of characters covered by the span.
    #[must_use]
    pub fn len(&self) -> usize { self.end.saturating_sub(self.start) }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.len() == 0 }
}

/// Highlight spans that are sorted by `start`, well-formed and pairwise
/// disjoint. Only this type is accepted by
/// [`highlight_diff`](crate::highlight_diff), so unsorted or overlapping
/// input is rejected when it is built instead of corrupting the output.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Highlights(Vec<Highlight>);

impl Highlights {
    /// Sorts `spans` by their start and validates them.
    ///
    /// # Errors
    ///
    /// - [`HighlightError::Inverted`] if a span ends before it starts.
    /// - [`HighlightError::Overlapping`] if a span starts inside the previous
    ///   one. Spans that merely touch are accepted.
    pub fn new(mut spans: Vec<Highlight>) -> Result<Self, HighlightError> {
        if let Some(span) = spans.iter().find(|span| span.end < span.start) {
            return Err(HighlightError::Inverted {
                start: span.start,
                end: span.end,
            });
        }

        spans.sort_by_key(|span| (span.start, span.end));

        for pair in spans.windows(2) {
            if pair[1].start < pair[0].end {
                return Err(HighlightError::Overlapping {
                    previous_end: pair[0].end,
                    start: pair[1].start,
                });
            }
        }

        Ok(Self(spans))
    }

    pub(crate) fn from_sorted_unchecked(spans: Vec<Highlight>) -> Self {
        debug_assert!(
            spans.windows(2).all(|pair| pair[0].end <= pair[1].start),
            "Spans must be sorted and disjoint"
        );

        Self(spans)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    #[must_use]
    pub fn len(&self) -> usize { self.0.len() }

    pub fn iter(&self) -> impl Iterator<Item = &Highlight> { self.0.iter() }

    #[must_use]
    pub fn as_slice(&self) -> &[Highlight] { &self.0 }

    /// The largest end offset, or `0` without spans.
    #[must_use]
    pub fn end(&self) -> usize { self.0.last().map_or(0, Highlight::end) }
}

impl TryFrom<Vec<Highlight>> for Highlights {
    type Error = HighlightError;

    fn try_from(spans: Vec<Highlight>) -> Result<Self, Self::Error> { Self::new(spans) }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Highlights {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let spans = Vec::<Highlight>::deserialize(deserializer)?;
        Self::new(spans).map_err(serde::de::Error::custom)
    }
}
