use pulldown_cmark::Options;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Settings of the forward markup conversion.
///
/// The defaults follow GitHub-flavoured conventions: tables,
/// strikethrough, task lists and footnotes are recognised and single
/// newlines inside a paragraph stay soft breaks.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct ConverterOptions {
    pub tables: bool,
    pub strikethrough: bool,
    pub task_lists: bool,
    pub footnotes: bool,

    /// Render every single newline inside a paragraph as `<br />`.
    pub hard_breaks: bool,

    /// Inputs with more characters than this are not parsed and take the
    /// fallback path instead.
    pub max_input_chars: Option<usize>,
}

impl Default for ConverterOptions {
    fn default() -> Self {
        Self {
            tables: true,
            strikethrough: true,
            task_lists: true,
            footnotes: true,
            hard_breaks: false,
            max_input_chars: None,
        }
    }
}

impl ConverterOptions {
    /// Options for rendering a final, published document: every newline
    /// the author typed is kept as a line break.
    #[must_use]
    pub fn publishing() -> Self { Self::default().with_hard_breaks(true) }

    #[must_use]
    pub fn with_hard_breaks(mut self, hard_breaks: bool) -> Self {
        self.hard_breaks = hard_breaks;
        self
    }

    #[must_use]
    pub fn with_max_input_chars(mut self, max_input_chars: usize) -> Self {
        self.max_input_chars = Some(max_input_chars);
        self
    }

    #[must_use]
    pub fn with_tables(mut self, tables: bool) -> Self {
        self.tables = tables;
        self
    }

    #[must_use]
    pub fn with_strikethrough(mut self, strikethrough: bool) -> Self {
        self.strikethrough = strikethrough;
        self
    }

    #[must_use]
    pub fn with_task_lists(mut self, task_lists: bool) -> Self {
        self.task_lists = task_lists;
        self
    }

    #[must_use]
    pub fn with_footnotes(mut self, footnotes: bool) -> Self {
        self.footnotes = footnotes;
        self
    }

    pub(crate) fn parser_options(&self) -> Options {
        let mut options = Options::empty();
        options.set(Options::ENABLE_TABLES, self.tables);
        options.set(Options::ENABLE_STRIKETHROUGH, self.strikethrough);
        options.set(Options::ENABLE_TASKLISTS, self.task_lists);
        options.set(Options::ENABLE_FOOTNOTES, self.footnotes);
        options
    }
}
