use crate::escape::escape_html;

/// How a resolved placeholder is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MediaStyle {
    /// Carries the placeholder in a `data-id` attribute so that the save
    /// path can turn the element back into the same placeholder.
    BackReferenced,
    /// A plain image for publishing targets.
    Plain,
}

impl MediaStyle {
    pub(crate) fn render(self, url: &str, placeholder: &str) -> String {
        let url = escape_html(url);
        match self {
            MediaStyle::BackReferenced => format!(
                r#"<img src="{url}" data-id="{}" style="max-width:100%; height:auto;" alt="" />"#,
                escape_html(placeholder)
            ),
            MediaStyle::Plain => {
                format!(r#"<img src="{url}" style="max-width:100%; height:auto;" alt="" />"#)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_attributes_are_escaped() {
        assert_eq!(
            MediaStyle::BackReferenced.render(r#"https://x.test/?a=1&b="2""#, "[[IMG_1]]"),
            concat!(
                r#"<img src="https://x.test/?a=1&amp;b=&quot;2&quot;" data-id="[[IMG_1]]" "#,
                r#"style="max-width:100%; height:auto;" alt="" />"#
            )
        );
    }
}
