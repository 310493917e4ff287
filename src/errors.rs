use thiserror::Error;

/// Error type for a forward markup conversion that could not complete.
///
/// The total conversion functions never surface it: they log it and fall
/// back to a single escaped paragraph.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MarkupError {
    /// The input is longer than the configured `max_input_chars`
    #[error("Markup input has {length} characters which exceeds the limit of {limit}")]
    InputTooLarge {
        /// Character count of the rejected input
        length: usize,
        /// The configured limit
        limit: usize,
    },

    /// The markup parser panicked while rendering the input
    #[error("Markup parser fault: {0}")]
    ParserFault(String),
}

/// Error type for highlight spans that cannot be rendered faithfully
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HighlightError {
    /// A span ends before it starts
    #[error("Invalid highlight: span ends at {end} before it starts at {start}")]
    Inverted {
        /// The start of the offending span
        start: usize,
        /// The end of the offending span
        end: usize,
    },

    /// A span starts inside the preceding span
    #[error(
        "Invalid highlight: span starting at {start} overlaps the previous span ending at \
         {previous_end}"
    )]
    Overlapping {
        /// The end of the previous span
        previous_end: usize,
        /// The start of the overlapping span
        start: usize,
    },

    /// A span reaches past the end of the highlighted text
    #[error("Invalid highlight: span ends at {end}, but the text only has {length} characters")]
    OutOfBounds {
        /// The end of the offending span
        end: usize,
        /// Character count of the text
        length: usize,
    },
}
