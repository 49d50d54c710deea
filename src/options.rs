//! Text format options.

/// Delimiter used by the plain-text deck format.
pub const DEFAULT_DELIMITER: char = ',';

/// Configuration for serializing, parsing, saving and loading a deck.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use deckrs::DeckOptions;
///
/// let options = DeckOptions::default()
///     .with_delimiter(';')
///     .with_trim_trailing_newline(false);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeckOptions {
    /// Character placed between labels. Labels must not contain it when saved.
    pub delimiter: char,
    /// Whether a single trailing `\n` (or `\r\n`) is dropped before parsing.
    ///
    /// Files edited by hand usually end with a newline; with this disabled the
    /// newline becomes part of the last label.
    pub trim_trailing_newline: bool,
}

impl Default for DeckOptions {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            trim_trailing_newline: true,
        }
    }
}

impl DeckOptions {
    /// Sets the delimiter.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::DeckOptions;
    ///
    /// let options = DeckOptions::default().with_delimiter('|');
    /// assert_eq!(options.delimiter, '|');
    /// ```
    #[must_use]
    pub const fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets whether a trailing newline is dropped when parsing.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::DeckOptions;
    ///
    /// let options = DeckOptions::default().with_trim_trailing_newline(false);
    /// assert!(!options.trim_trailing_newline);
    /// ```
    #[must_use]
    pub const fn with_trim_trailing_newline(mut self, trim: bool) -> Self {
        self.trim_trailing_newline = trim;
        self
    }
}
