use std::sync::OnceLock;

use regex::{NoExpand, Regex};
use tracing::{debug, trace, warn};

use super::{
    MediaMap, element::MediaStyle, extract::normalize_legacy_images, protect::ProtectedSource,
    video::ensure_video_controls,
};
use crate::markup::{ConverterOptions, markup_to_html_with_options};

/// Resolves the placeholders of a stored revision into media elements and
/// returns HTML.
///
/// - Without any media, HTML is returned as-is and markup source is rendered.
/// - HTML content gets every placeholder that forms a paragraph on its own
///   (`<p>[[IMG_1]]</p>`) replaced by an image. Placeholders anywhere else,
///   e.g. inside attributes, are left untouched, so resolving already
///   resolved HTML again changes nothing.
/// - Markup source is rendered with every placeholder shielded from the
///   parser, then each placeholder occurrence becomes exactly one image.
///
/// Images carry their placeholder in a `data-id` attribute. Placeholders
/// missing from `media_map` stay literal text.
///
/// ```
/// use revision_text::{MediaMap, resolve_media};
///
/// let media = MediaMap::from([("[[IMG_1]]", "https://cdn.test/1.png")]);
/// assert_eq!(
///     resolve_media("Intro\n\n[[IMG_1]]", &media),
///     concat!(
///         "<p>Intro</p>\n",
///         r#"<p><img src="https://cdn.test/1.png" data-id="[[IMG_1]]" "#,
///         r#"style="max-width:100%; height:auto;" alt="" /></p>"#,
///         "\n",
///     ),
/// );
/// ```
#[must_use]
pub fn resolve_media(content: &str, media_map: &MediaMap) -> String {
    resolve_media_with_options(content, media_map, &ConverterOptions::default())
}

/// Like [`resolve_media`], with explicit options for rendering markup.
#[must_use]
pub fn resolve_media_with_options(
    content: &str,
    media_map: &MediaMap,
    options: &ConverterOptions,
) -> String {
    if media_map.is_empty() {
        if starts_with_tag(content) {
            debug!("No media to resolve in HTML content");
            return content.to_owned();
        }
        debug!("No media to resolve, rendering markup");
        return markup_to_html_with_options(content, options);
    }

    if looks_like_html(content) {
        debug!(media = media_map.len(), "Resolving media in HTML content");
        return substitute_in_html(content, media_map);
    }

    debug!(media = media_map.len(), "Resolving media in markup content");
    render_protected(content, media_map, options, MediaStyle::BackReferenced)
}

/// Loads a stored revision for editing: numbered image references left by
/// earlier saves are turned into placeholders first, then the media is
/// resolved like [`resolve_media`] does.
#[must_use]
pub fn hydrate(content: &str, media_map: &MediaMap) -> String {
    let mut media_map = media_map.clone();
    let content = normalize_legacy_images(content, &mut media_map);

    resolve_media(&content, &media_map)
}

/// Renders markup source for a publishing target: single newlines become
/// line breaks, images carry no placeholder back-reference and every video
/// gets player controls.
#[must_use]
pub fn render_for_publish(markup: &str, media_map: &MediaMap) -> String {
    let html = render_protected(
        markup,
        media_map,
        &ConverterOptions::publishing(),
        MediaStyle::Plain,
    );

    ensure_video_controls(&html)
}

fn render_protected(
    markup: &str,
    media_map: &MediaMap,
    options: &ConverterOptions,
    style: MediaStyle,
) -> String {
    let protected = ProtectedSource::new(markup, media_map, style);
    let html = markup_to_html_with_options(protected.text(), options);

    protected.restore(&html)
}

fn starts_with_tag(content: &str) -> bool { content.trim_start().starts_with('<') }

fn looks_like_html(content: &str) -> bool {
    static PARAGRAPH: OnceLock<Regex> = OnceLock::new();
    starts_with_tag(content)
        || PARAGRAPH
            .get_or_init(|| Regex::new(r"(?i)<p[\s>]").expect("paragraph regex must compile"))
            .is_match(content)
}

fn substitute_in_html(html: &str, media_map: &MediaMap) -> String {
    let mut result = html.to_owned();

    for (placeholder, url) in media_map.iter() {
        if placeholder.is_empty() || !result.contains(placeholder) {
            continue;
        }

        let pattern = format!(r"<p>\s*{}\s*</p>", regex::escape(placeholder));
        let paragraph = match Regex::new(&pattern) {
            Ok(paragraph) => paragraph,
            Err(error) => {
                warn!(%error, placeholder, "Cannot match placeholder paragraphs");
                continue;
            }
        };

        if !paragraph.is_match(&result) {
            continue;
        }
        trace!(placeholder, "Resolving placeholder paragraphs");

        let element = MediaStyle::BackReferenced.render(url, placeholder);
        result = paragraph
            .replace_all(&result, NoExpand(&element))
            .into_owned();
    }

    result
}
