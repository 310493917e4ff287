//! Conversion between markup source and rendered HTML.
//!
//! The forward direction is a full CommonMark parse (with the GitHub
//! extensions configured in [`ConverterOptions`]). The backward direction
//! is a best-effort degrade and is not its inverse.

mod options;
mod to_html;
mod to_markup;

pub use options::ConverterOptions;
pub use to_html::{markup_to_html, markup_to_html_with_options, try_markup_to_html};
pub use to_markup::{IMAGE_LABEL, html_to_markup};
