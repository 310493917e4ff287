//! Conversion and comparison of document revisions.
//!
//! - [`escape_html`] makes arbitrary text safe to embed in HTML.
//! - [`levenshtein_distance`] and [`similarity`] score how alike two texts
//!   are.
//! - [`compute_diff`] and [`compute_aligned_diff`] compare two revisions
//!   line by line.
//! - [`highlight_diff`] renders inserted and deleted character ranges as
//!   marked-up HTML.
//! - [`markup_to_html`] and [`html_to_markup`] convert between markup source
//!   and HTML.
//! - [`resolve_media`] and [`dehydrate`] swap media placeholders for images
//!   and back.

mod edit_distance;
mod errors;
mod escape;
mod highlight;
mod line_diff;
mod markup;
mod media;
mod utils;

pub use edit_distance::{levenshtein_distance, similarity};
pub use errors::{HighlightError, MarkupError};
pub use escape::{escape_html, escape_html_into, unescape_html};
pub use highlight::{Highlight, HighlightKind, Highlights, char_highlights, highlight_diff};
pub use line_diff::{DiffEntry, DiffKind, DiffResult, compute_aligned_diff, compute_diff};
pub use markup::{
    ConverterOptions, IMAGE_LABEL, html_to_markup, markup_to_html, markup_to_html_with_options,
    try_markup_to_html,
};
pub use media::{
    MediaMap, PROTECTION_RANGE_END, PROTECTION_RANGE_START, dehydrate, ensure_video_controls,
    hydrate, is_placeholder, normalize_legacy_images, placeholder_for, render_for_publish,
    resolve_media, resolve_media_with_options,
};

#[cfg(feature = "wasm")]
pub mod wasm;
