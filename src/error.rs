//! Error types for row parsing.
//!
//! Every failure the parser can report is a [`CsvError`]. Construction-time
//! failures ([`CsvError::SourceUnavailable`], [`CsvError::InvalidOptions`]) are
//! fatal: no parser is produced. Row-level failures ([`CsvError::RowArity`],
//! [`CsvError::Conversion`], [`CsvError::Read`]) are returned for the row that
//! caused them; the parser itself stays usable.
//!
//! Reaching the end of input is not an error. It is reported as `Ok(None)` by
//! [`RowParser::advance`](crate::RowParser::advance).

use std::fmt;
use std::io;
use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CsvError>;

/// Errors produced while constructing a parser or reading rows.
#[derive(Debug, Error)]
pub enum CsvError {
    /// The source could not be opened or read while preparing the parser.
    #[error("source unavailable: {context}")]
    SourceUnavailable {
        context: String,
        #[source]
        source: io::Error,
    },

    /// The parser options were rejected.
    #[error("invalid parser options: {0}")]
    InvalidOptions(String),

    /// A line split into a different number of fields than the row declares.
    #[error("line {line}: expected {expected} fields, found {found}")]
    RowArity {
        line: u64,
        expected: usize,
        found: usize,
    },

    /// A field could not be converted to its column's type.
    #[error("line {line}, column {column}: cannot convert {value:?} to {type_name}: {reason}")]
    Conversion {
        line: u64,
        /// Zero-based column index.
        column: usize,
        value: String,
        type_name: &'static str,
        reason: FieldError,
    },

    /// A line was read in full but is not valid UTF-8. The line is consumed.
    #[error("line {line}: not valid UTF-8")]
    Encoding {
        line: u64,
        #[source]
        source: std::str::Utf8Error,
    },

    /// Reading a line failed after construction. Terminal for the parser.
    #[error("line {line}: read failed")]
    Read {
        line: u64,
        #[source]
        source: io::Error,
    },
}

impl CsvError {
    /// The 1-based source line the error refers to, if it is a row-level error.
    #[must_use]
    pub fn line(&self) -> Option<u64> {
        match self {
            Self::RowArity { line, .. }
            | Self::Conversion { line, .. }
            | Self::Encoding { line, .. }
            | Self::Read { line, .. } => Some(*line),
            Self::SourceUnavailable { .. } | Self::InvalidOptions(_) => None,
        }
    }

    /// Whether the error belongs to a single row (the parser can keep going).
    #[must_use]
    pub fn is_row_error(&self) -> bool {
        matches!(
            self,
            Self::RowArity { .. } | Self::Conversion { .. } | Self::Encoding { .. }
        )
    }
}

/// Why a single field failed to convert.
///
/// Carries only a message; the position and raw text live in
/// [`CsvError::Conversion`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    message: String,
}

impl FieldError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for FieldError {}
