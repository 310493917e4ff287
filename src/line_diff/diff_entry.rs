#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

/// Classification of one aligned line.
#[cfg_attr(feature = "wasm", wasm_bindgen)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiffKind {
    Equal,
    Insert,
    Delete,
}

/// One line of a [`DiffResult`] together with its classification.
#[allow(clippy::unsafe_derive_deserialize)]
#[cfg_attr(feature = "wasm", wasm_bindgen)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DiffEntry {
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    kind: DiffKind,
    content: String,
}

/// Ordered line entries describing how one revision turns into another.
pub type DiffResult = Vec<DiffEntry>;

impl DiffEntry {
    #[must_use]
    pub fn new(kind: DiffKind, content: impl Into<String>) -> Self {
        Self {
            kind,
            content: content.into(),
        }
    }

    #[must_use]
    pub fn equal(content: impl Into<String>) -> Self { Self::new(DiffKind::Equal, content) }

    #[must_use]
    pub fn insert(content: impl Into<String>) -> Self { Self::new(DiffKind::Insert, content) }

    #[must_use]
    pub fn delete(content: impl Into<String>) -> Self { Self::new(DiffKind::Delete, content) }

    #[must_use]
    pub fn content(&self) -> &str { &self.content }
}

#[cfg_attr(feature = "wasm", wasm_bindgen)]
impl DiffEntry {
    #[cfg_attr(feature = "wasm", wasm_bindgen(js_name = "type"))]
    #[must_use]
    pub fn kind(&self) -> DiffKind { self.kind }

    #[cfg_attr(feature = "wasm", wasm_bindgen(js_name = content))]
    #[must_use]
    pub fn text(&self) -> String { self.content.clone() }
}
