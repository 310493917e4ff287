use std::str::Chars;

use crate::escape::push_escaped_char;

/// A helper for building HTML in-order from an original text and a series of
/// verbatim markup insertions and escaped copies of the original. All lengths
/// are character counts, so it is safe to use with multi-byte UTF-8. The
/// methods must be called in-order.
#[derive(Debug)]
pub struct StringBuilder<'a> {
    original: Chars<'a>,
    buffer: String,
}

impl StringBuilder<'_> {
    pub fn new(original: &str) -> StringBuilder<'_> {
        StringBuilder {
            original: original.chars(),
            buffer: String::with_capacity(original.len()),
        }
    }

    /// Insert markup at the end of the built buffer without escaping it.
    pub fn insert(&mut self, markup: &str) { self.buffer.push_str(markup); }

    /// Copy `length` characters of the original to the built buffer,
    /// escaping them on the way.
    pub fn retain_escaped(&mut self, length: usize) {
        for c in self.original.by_ref().take(length) {
            push_escaped_char(&mut self.buffer, c);
        }
    }

    /// Escape and copy whatever is left of the original, then return the
    /// built buffer.
    pub fn finish(mut self) -> String {
        for c in self.original {
            push_escaped_char(&mut self.buffer, c);
        }
        self.buffer
    }
}
