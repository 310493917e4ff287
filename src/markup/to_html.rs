use std::{any::Any, panic};

use pulldown_cmark::{Event, Parser, html};
use tracing::warn;

use super::ConverterOptions;
use crate::{errors::MarkupError, escape::escape_html};

/// Renders markup source as HTML with the default [`ConverterOptions`].
///
/// Blank input renders as the empty string. This never fails: if the input
/// cannot be converted, the fault is logged and the escaped input is
/// returned wrapped in a single paragraph.
///
/// ```
/// use revision_text::markup_to_html;
///
/// assert_eq!(markup_to_html(""), "");
/// assert_eq!(markup_to_html("# Title"), "<h1>Title</h1>\n");
/// ```
#[must_use]
pub fn markup_to_html(markup: &str) -> String {
    markup_to_html_with_options(markup, &ConverterOptions::default())
}

/// Like [`markup_to_html`], with explicit options.
#[must_use]
pub fn markup_to_html_with_options(markup: &str, options: &ConverterOptions) -> String {
    match try_markup_to_html(markup, options) {
        Ok(html) => html,
        Err(error) => {
            warn!(%error, "Rendering markup failed, falling back to a plain paragraph");
            fallback_paragraph(markup)
        }
    }
}

/// Renders markup source as HTML, reporting faults to the caller instead of
/// falling back.
///
/// # Errors
///
/// - [`MarkupError::InputTooLarge`] if the input is longer than
///   `options.max_input_chars`.
/// - [`MarkupError::ParserFault`] if the parser panicked.
pub fn try_markup_to_html(markup: &str, options: &ConverterOptions) -> Result<String, MarkupError> {
    if markup.trim().is_empty() {
        return Ok(String::new());
    }

    if let Some(limit) = options.max_input_chars {
        let length = markup.chars().count();
        if length > limit {
            return Err(MarkupError::InputTooLarge { length, limit });
        }
    }

    let parser_options = options.parser_options();
    let hard_breaks = options.hard_breaks;

    panic::catch_unwind(move || {
        let events = Parser::new_ext(markup, parser_options).map(|event| match event {
            Event::SoftBreak if hard_breaks => Event::HardBreak,
            event => event,
        });

        let mut html_output = String::with_capacity(markup.len() * 3 / 2);
        html::push_html(&mut html_output, events);
        html_output
    })
    .map_err(|payload| MarkupError::ParserFault(panic_message(payload.as_ref())))
}

fn fallback_paragraph(markup: &str) -> String { format!("<p>{}</p>", escape_html(markup)) }

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_owned()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_owned()
    }
}
