use std::sync::OnceLock;

use regex::{Captures, Regex};
use tracing::debug;

use super::{
    MediaMap, is_placeholder, placeholder_for, protect::strip_reserved, video::VideoBlocks,
};
use crate::{
    escape::unescape_html,
    markup::{IMAGE_LABEL, html_to_markup},
};

/// Turns the numbered image references written by
/// [`html_to_markup`](crate::html_to_markup) (`![图片3](url)`) back into
/// placeholders (`[[IMG_3]]`). The URL is recorded in `media_map` unless the
/// placeholder is already mapped.
#[must_use]
pub fn normalize_legacy_images(markup: &str, media_map: &mut MediaMap) -> String {
    legacy_image_reference()
        .replace_all(markup, |captures: &Captures<'_>| {
            let placeholder = format!("[[IMG_{}]]", &captures[1]);
            if !media_map.contains(&placeholder) {
                media_map.insert(placeholder.clone(), &captures[2]);
            }
            placeholder
        })
        .into_owned()
}

/// Prepares edited HTML for storage, the inverse of
/// [`hydrate`](crate::hydrate).
///
/// Every image becomes a placeholder on a line of its own and the document
/// is degraded to markup with [`html_to_markup`]. Images that still carry a
/// placeholder in `data-id` keep it; new images get the lowest free
/// `[[IMG_n]]`. Images without a source are dropped. Videos are kept
/// verbatim as HTML blocks, with player controls added where missing.
///
/// ```
/// use revision_text::{MediaMap, dehydrate};
///
/// let (markup, media) = dehydrate(r#"<p>Intro</p><p><img src="https://cdn.test/a.png"></p>"#);
///
/// assert_eq!(markup, "Intro\n\n[[IMG_1]]");
/// assert_eq!(media, MediaMap::from([("[[IMG_1]]", "https://cdn.test/a.png")]));
/// ```
#[must_use]
pub fn dehydrate(html: &str) -> (String, MediaMap) {
    if html.is_empty() {
        return (String::new(), MediaMap::new());
    }

    let (html, videos) = VideoBlocks::extract(&strip_reserved(html));

    let images: Vec<ImageTag> = image_tag()
        .find_iter(&html)
        .map(|tag| ImageTag::parse(tag.as_str()))
        .collect();

    // Existing placeholders are claimed first so new images never reuse one
    // that appears later in the document
    let mut media_map = MediaMap::new();
    for image in &images {
        if let (Some(placeholder), Some(src)) = (&image.placeholder, &image.src) {
            media_map.insert(placeholder.clone(), src.clone());
        }
    }

    let mut next_index = 1;
    let mut images = images.into_iter();
    let html = image_tag().replace_all(&html, |_: &Captures<'_>| {
        let Some(image) = images.next() else {
            return String::new();
        };

        let placeholder = match (image.placeholder, image.src) {
            (Some(placeholder), Some(_)) => placeholder,
            (_, Some(src)) => {
                while media_map.contains(&placeholder_for(next_index)) {
                    next_index += 1;
                }
                let placeholder = placeholder_for(next_index);
                media_map.insert(placeholder.clone(), src);
                placeholder
            }
            (_, None) => return String::new(),
        };

        format!("\n\n{placeholder}\n\n")
    });

    debug!(
        media = media_map.len(),
        videos = videos.len(),
        "Dehydrated document"
    );

    (videos.reinsert(&html_to_markup(&html)), media_map)
}

#[derive(Debug)]
struct ImageTag {
    src: Option<String>,
    placeholder: Option<String>,
}

impl ImageTag {
    fn parse(tag: &str) -> Self {
        let attribute = |regex: &Regex| {
            regex
                .captures(tag)
                .map(|captures| unescape_html(&captures[1]).into_owned())
                .filter(|value| !value.is_empty())
        };

        Self {
            src: attribute(src_attribute()),
            placeholder: attribute(data_id_attribute()).filter(|value| is_placeholder(value)),
        }
    }
}

fn legacy_image_reference() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(&format!(r"!\[{}(\d+)\]\(([^)\s]+)\)", regex::escape(IMAGE_LABEL)))
            .expect("legacy image regex must compile")
    })
}

fn image_tag() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)<img\b[^>]*>").expect("image regex must compile"))
}

fn src_attribute() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"(?i)\ssrc\s*=\s*"([^"]*)""#).expect("src attribute regex must compile")
    })
}

fn data_id_attribute() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"(?i)\sdata-id\s*=\s*"([^"]*)""#).expect("data-id attribute regex must compile")
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_normalize_legacy_images() {
        let mut media = MediaMap::from([("[[IMG_2]]", "https://cdn.test/kept.png")]);

        let markup = normalize_legacy_images(
            "a\n\n![图片1](https://cdn.test/1.png)\n\n![图片2](https://cdn.test/other.png)",
            &mut media,
        );

        assert_eq!(markup, "a\n\n[[IMG_1]]\n\n[[IMG_2]]");
        assert_eq!(media.get("[[IMG_1]]"), Some("https://cdn.test/1.png"));
        assert_eq!(media.get("[[IMG_2]]"), Some("https://cdn.test/kept.png"));
    }

    #[test]
    fn test_other_image_references_are_kept() {
        let mut media = MediaMap::new();
        let markup = "![cover](https://cdn.test/c.png)";

        assert_eq!(normalize_legacy_images(markup, &mut media), markup);
        assert!(media.is_empty());
    }

    #[test]
    fn test_dehydrate_keeps_back_references() {
        let html = concat!(
            r#"<p>Intro</p>"#,
            r#"<img src="https://cdn.test/new.png">"#,
            r#"<p><img src="https://cdn.test/a.png?x=1&amp;y=2" data-id="[[IMG_1]]" alt="" /></p>"#,
        );

        let (markup, media) = dehydrate(html);

        assert_eq!(markup, "Intro\n\n[[IMG_2]]\n\n[[IMG_1]]");
        assert_eq!(
            media.iter().collect::<Vec<_>>(),
            vec![
                ("[[IMG_1]]", "https://cdn.test/a.png?x=1&y=2"),
                ("[[IMG_2]]", "https://cdn.test/new.png"),
            ]
        );
    }

    #[test]
    fn test_dehydrate_ignores_foreign_data_ids() {
        let (markup, media) = dehydrate(r#"<img data-id="hero" src="h.png">"#);

        assert_eq!(markup, "[[IMG_1]]");
        assert_eq!(media.get("[[IMG_1]]"), Some("h.png"));
    }

    #[test]
    fn test_dehydrate_drops_images_without_source() {
        let (markup, media) = dehydrate(r#"<p>text</p><img alt="broken">"#);

        assert_eq!(markup, "text");
        assert!(media.is_empty());
    }

    #[test]
    fn test_dehydrate_keeps_videos() {
        let html = concat!(
            r#"<p>Intro</p>"#,
            r#"<video src="https://cdn.test/v.mp4"><source src="https://cdn.test/v.webm"></video>"#,
            r#"<p><img src="https://cdn.test/a.png"></p>"#,
        );

        let (markup, media) = dehydrate(html);

        assert_eq!(
            markup,
            concat!(
                "Intro\n\n",
                r#"<video src="https://cdn.test/v.mp4" controls><source src="https://cdn.test/v.webm"></video>"#,
                "\n\n[[IMG_1]]",
            )
        );
        assert_eq!(media.get("[[IMG_1]]"), Some("https://cdn.test/a.png"));
    }

    #[test]
    fn test_dehydrate_empty() {
        assert_eq!(dehydrate(""), (String::new(), MediaMap::new()));
    }
}
