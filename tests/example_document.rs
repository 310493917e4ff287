use pretty_assertions::assert_eq;
use revision_text::{DiffEntry, DiffKind, MediaMap};
use serde::Deserialize;

/// A pair of revisions with the line diffs expected between them.
#[derive(Debug, Deserialize)]
pub struct DiffExample {
    name: String,
    before: String,
    after: String,
    positional: Vec<ExpectedEntry>,
    aligned: Option<Vec<ExpectedEntry>>,
}

impl DiffExample {
    pub fn before(&self) -> &str { &self.before }

    pub fn after(&self) -> &str { &self.after }

    pub fn assert_positional(&self, actual: &[DiffEntry]) {
        assert_entries(&self.name, &self.positional, actual);
    }

    /// Falls back to the positional expectation when no aligned one is
    /// given.
    pub fn assert_aligned(&self, actual: &[DiffEntry]) {
        assert_entries(
            &self.name,
            self.aligned.as_ref().unwrap_or(&self.positional),
            actual,
        );
    }
}

#[derive(Debug, Deserialize)]
struct ExpectedEntry {
    #[serde(rename = "type")]
    kind: ExpectedKind,
    content: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
enum ExpectedKind {
    Equal,
    Insert,
    Delete,
}

impl From<DiffKind> for ExpectedKind {
    fn from(kind: DiffKind) -> Self {
        match kind {
            DiffKind::Equal => ExpectedKind::Equal,
            DiffKind::Insert => ExpectedKind::Insert,
            DiffKind::Delete => ExpectedKind::Delete,
        }
    }
}

fn assert_entries(name: &str, expected: &[ExpectedEntry], actual: &[DiffEntry]) {
    let expected = expected
        .iter()
        .map(|entry| (entry.kind, entry.content.as_str()))
        .collect::<Vec<_>>();
    let actual = actual
        .iter()
        .map(|entry| (ExpectedKind::from(entry.kind()), entry.content()))
        .collect::<Vec<_>>();

    assert_eq!(actual, expected, "Example '{name}' produced a different diff");
}

/// A stored revision with its media and the HTML it should display as.
#[derive(Debug, Deserialize)]
pub struct RenderExample {
    name: String,
    content: String,
    #[serde(default)]
    media: Vec<MediaEntry>,
    html: String,
}

#[derive(Debug, Deserialize)]
struct MediaEntry {
    placeholder: String,
    url: String,
}

impl RenderExample {
    pub fn content(&self) -> &str { &self.content }

    pub fn media(&self) -> MediaMap {
        self.media
            .iter()
            .map(|entry| (entry.placeholder.as_str(), entry.url.as_str()))
            .collect()
    }

    pub fn assert_eq(&self, actual: &str) {
        assert_eq!(
            actual, self.html,
            "Example '{}' rendered differently",
            self.name
        );
    }
}
