//! Expose the `revision-text` crate's functionality to WebAssembly.
use wasm_bindgen::prelude::*;

use crate::{ConverterOptions, DiffEntry, Highlight, Highlights, MediaMap};

#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc<'_> = wee_alloc::WeeAlloc::INIT;

/// WASM wrapper around `crate::escape_html`.
#[wasm_bindgen(js_name = escapeHtml)]
#[must_use]
pub fn escape_html(text: &str) -> String { crate::escape_html(text) }

/// WASM wrapper around `crate::levenshtein_distance`.
#[wasm_bindgen(js_name = levenshteinDistance)]
#[must_use]
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    set_panic_hook();

    crate::levenshtein_distance(a, b)
}

/// WASM wrapper around `crate::similarity`.
#[wasm_bindgen(js_name = similarity)]
#[must_use]
pub fn similarity(a: &str, b: &str) -> f64 {
    set_panic_hook();

    crate::similarity(a, b)
}

/// WASM wrapper around `crate::compute_diff` for positional line diffs.
#[wasm_bindgen(js_name = computeDiff)]
#[must_use]
pub fn compute_diff(before: &str, after: &str) -> Vec<DiffEntry> {
    set_panic_hook();

    crate::compute_diff(before, after)
}

/// WASM wrapper around `crate::compute_aligned_diff`.
#[wasm_bindgen(js_name = computeAlignedDiff)]
#[must_use]
pub fn compute_aligned_diff(before: &str, after: &str) -> Vec<DiffEntry> {
    set_panic_hook();

    crate::compute_aligned_diff(before, after)
}

/// Render `text` with the given spans highlighted. The spans may come in
/// any order.
///
/// # Errors
///
/// If the spans are inverted, overlapping or reach past the end of `text`.
#[wasm_bindgen(js_name = highlightDiff)]
pub fn highlight_diff(text: &str, highlights: Vec<Highlight>) -> Result<String, JsError> {
    set_panic_hook();
    let highlights = Highlights::new(highlights)?;

    Ok(crate::highlight_diff(text, &highlights)?)
}

/// WASM wrapper around `crate::char_highlights`.
#[wasm_bindgen(js_name = charHighlights)]
#[must_use]
pub fn char_highlights(before: &str, after: &str) -> CharHighlights {
    set_panic_hook();
    let (deleted, inserted) = crate::char_highlights(before, after);

    CharHighlights {
        deleted: deleted.as_slice().to_vec(),
        inserted: inserted.as_slice().to_vec(),
    }
}

/// Render markup source to HTML. Single newlines become line breaks when
/// `hard_breaks` is set.
#[wasm_bindgen(js_name = markupToHtml)]
#[must_use]
pub fn markup_to_html(markup: &str, hard_breaks: bool) -> String {
    set_panic_hook();
    let options = ConverterOptions::default().with_hard_breaks(hard_breaks);

    crate::markup_to_html_with_options(markup, &options)
}

/// WASM wrapper around `crate::html_to_markup`.
#[wasm_bindgen(js_name = htmlToMarkup)]
#[must_use]
pub fn html_to_markup(html: &str) -> String {
    set_panic_hook();

    crate::html_to_markup(html)
}

/// Resolve media placeholders in `content`. `placeholders[i]` maps to
/// `urls[i]`; surplus entries of the longer list are ignored.
#[wasm_bindgen(js_name = resolveMedia)]
#[must_use]
pub fn resolve_media(content: &str, placeholders: Vec<String>, urls: Vec<String>) -> String {
    set_panic_hook();

    crate::resolve_media(content, &media_map(placeholders, urls))
}

/// Like `resolveMedia`, with legacy image references normalised first.
#[wasm_bindgen(js_name = hydrate)]
#[must_use]
pub fn hydrate(content: &str, placeholders: Vec<String>, urls: Vec<String>) -> String {
    set_panic_hook();

    crate::hydrate(content, &media_map(placeholders, urls))
}

/// WASM wrapper around `crate::render_for_publish`.
#[wasm_bindgen(js_name = renderForPublish)]
#[must_use]
pub fn render_for_publish(markup: &str, placeholders: Vec<String>, urls: Vec<String>) -> String {
    set_panic_hook();

    crate::render_for_publish(markup, &media_map(placeholders, urls))
}

/// WASM wrapper around `crate::dehydrate`.
#[wasm_bindgen(js_name = dehydrate)]
#[must_use]
pub fn dehydrate(html: &str) -> Dehydrated {
    set_panic_hook();
    let (markup, media_map) = crate::dehydrate(html);
    let (placeholders, urls) = media_map
        .iter()
        .map(|(placeholder, url)| (placeholder.to_owned(), url.to_owned()))
        .unzip();

    Dehydrated {
        markup,
        placeholders,
        urls,
    }
}

/// WASM wrapper around `crate::ensure_video_controls`.
#[wasm_bindgen(js_name = ensureVideoControls)]
#[must_use]
pub fn ensure_video_controls(html: &str) -> String {
    set_panic_hook();

    crate::ensure_video_controls(html)
}

fn media_map(placeholders: Vec<String>, urls: Vec<String>) -> MediaMap {
    placeholders.into_iter().zip(urls).collect()
}

fn set_panic_hook() {
    // https://github.com/rustwasm/console_error_panic_hook#readme
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// WASM wrapper type for the return value of `char_highlights`
#[wasm_bindgen]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CharHighlights {
    deleted: Vec<Highlight>,
    inserted: Vec<Highlight>,
}

#[wasm_bindgen]
impl CharHighlights {
    /// Spans of the `before` text
    #[must_use]
    pub fn deleted(&self) -> Vec<Highlight> { self.deleted.clone() }

    /// Spans of the `after` text
    #[must_use]
    pub fn inserted(&self) -> Vec<Highlight> { self.inserted.clone() }
}

/// WASM wrapper type for the return value of `dehydrate`
#[wasm_bindgen]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dehydrated {
    markup: String,
    placeholders: Vec<String>,
    urls: Vec<String>,
}

#[wasm_bindgen]
impl Dehydrated {
    #[must_use]
    pub fn markup(&self) -> String { self.markup.clone() }

    #[must_use]
    pub fn placeholders(&self) -> Vec<String> { self.placeholders.clone() }

    #[must_use]
    pub fn urls(&self) -> Vec<String> { self.urls.clone() }
}
