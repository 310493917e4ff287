use std::sync::OnceLock;

use indexmap::IndexMap;
use regex::Regex;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Canonical placeholder for the `index`-th media asset of a document.
///
/// ```
/// assert_eq!(revision_text::placeholder_for(3), "[[IMG_3]]");
/// ```
#[must_use]
pub fn placeholder_for(index: usize) -> String { format!("[[IMG_{index}]]") }

/// Whether `text` is exactly one canonical placeholder.
#[must_use]
pub fn is_placeholder(text: &str) -> bool {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\[\[IMG_\d+\]\]$").expect("placeholder regex must compile"))
        .is_match(text)
}

/// Placeholder tokens of one revision mapped to the media URLs they stand
/// for.
///
/// Iteration follows insertion order. Equality ignores order.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MediaMap(IndexMap<String, String>);

impl MediaMap {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Maps `placeholder` to `url`, returning the URL it was mapped to
    /// before. An existing entry keeps its position.
    pub fn insert(&mut self, placeholder: impl Into<String>, url: impl Into<String>) -> Option<String> {
        self.0.insert(placeholder.into(), url.into())
    }

    #[must_use]
    pub fn get(&self, placeholder: &str) -> Option<&str> { self.0.get(placeholder).map(String::as_str) }

    #[must_use]
    pub fn contains(&self, placeholder: &str) -> bool { self.0.contains_key(placeholder) }

    #[must_use]
    pub fn len(&self) -> usize { self.0.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    /// `(placeholder, url)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .iter()
            .map(|(placeholder, url)| (placeholder.as_str(), url.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for MediaMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(placeholder, url)| (placeholder.into(), url.into()))
                .collect(),
        )
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for MediaMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from(entries: [(K, V); N]) -> Self { entries.into_iter().collect() }
}
