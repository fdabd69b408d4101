//! Parser configuration.
//!
//! [`ParserOptions`] can be built in code with the `with_*` methods or loaded
//! from JSON. Every key is optional when deserializing; missing keys take
//! their defaults.
//!
//! ```
//! use typedcsv::ParserOptions;
//!
//! let opts = ParserOptions::from_json(r#"{ "skip_lines": 1, "field_separator": ";" }"#).unwrap();
//! assert_eq!(opts.skip_lines, 1);
//! assert_eq!(opts.field_separator, ';');
//! assert_eq!(opts.escape_character, '\\');
//! ```

use crate::error::{CsvError, Result};
use crate::tokenizer::Tokenizer;
use serde::{Deserialize, Serialize};

/// Separator configuration and header skipping for a [`RowParser`](crate::RowParser).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserOptions {
    /// Leading lines to discard, e.g. `1` for a header row.
    pub skip_lines: usize,
    /// Line terminator. Must be ASCII.
    pub line_terminator: char,
    pub field_separator: char,
    /// Toggles literal treatment of `field_separator`. Always dropped from fields.
    pub escape_character: char,
    /// Drop one trailing `'\r'` from each line when the terminator is `'\n'`.
    pub strip_carriage_return: bool,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            skip_lines: 0,
            line_terminator: '\n',
            field_separator: ',',
            escape_character: '\\',
            strip_carriage_return: true,
        }
    }
}

impl ParserOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_skip_lines(mut self, skip_lines: usize) -> Self {
        self.skip_lines = skip_lines;
        self
    }

    #[must_use]
    pub fn with_line_terminator(mut self, terminator: char) -> Self {
        self.line_terminator = terminator;
        self
    }

    #[must_use]
    pub fn with_field_separator(mut self, separator: char) -> Self {
        self.field_separator = separator;
        self
    }

    #[must_use]
    pub fn with_escape_character(mut self, escape: char) -> Self {
        self.escape_character = escape;
        self
    }

    #[must_use]
    pub fn with_strip_carriage_return(mut self, strip: bool) -> Self {
        self.strip_carriage_return = strip;
        self
    }

    /// Parse options from a JSON object.
    ///
    /// # Errors
    /// Returns the `serde_json` error for malformed JSON or mistyped keys.
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    /// Check that the three separator characters can work together.
    ///
    /// # Errors
    /// [`CsvError::InvalidOptions`] if the terminator is not ASCII, or if any
    /// two of terminator, separator and escape are the same character.
    pub fn validate(&self) -> Result<()> {
        if !self.line_terminator.is_ascii() {
            return Err(CsvError::InvalidOptions(format!(
                "line terminator {:?} is not an ASCII character",
                self.line_terminator
            )));
        }
        if self.field_separator == self.escape_character {
            return Err(CsvError::InvalidOptions(format!(
                "field separator and escape character are both {:?}",
                self.field_separator
            )));
        }
        if self.line_terminator == self.field_separator
            || self.line_terminator == self.escape_character
        {
            return Err(CsvError::InvalidOptions(format!(
                "line terminator {:?} is also used as separator or escape",
                self.line_terminator
            )));
        }
        Ok(())
    }

    pub(crate) fn tokenizer(&self) -> Tokenizer {
        Tokenizer::new(self.field_separator, self.escape_character)
    }

    /// The terminator as a byte. Only meaningful after [`validate`](Self::validate).
    pub(crate) fn terminator_byte(&self) -> u8 {
        self.line_terminator as u8
    }
}
