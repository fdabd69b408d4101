//! Explicit pull cursor over a [`RowParser`].
//!
//! The cursor is the step-by-step alternative to iterating the parser: it
//! remembers the current row so it can be read any number of times, and it
//! compares equal to [`CursorState::End`] once the input is used up.
//!
//! ```
//! use typedcsv::{CursorState, ParserOptions, RowParser};
//!
//! # fn main() -> typedcsv::Result<()> {
//! let input: &[u8] = b"1,a\n2,b\n";
//! let mut parser = RowParser::<(u32, String), _>::new(input, ParserOptions::default())?;
//! let mut cursor = parser.cursor()?;
//!
//! let mut seen = Vec::new();
//! while cursor != CursorState::End {
//!     seen.push(cursor.get_or_default());
//!     cursor.advance()?;
//! }
//! assert_eq!(seen, vec![(1, "a".to_string()), (2, "b".to_string())]);
//! # Ok(())
//! # }
//! ```

use crate::error::Result;
use crate::io::LineSource;
use crate::parser::RowParser;
use crate::row::Row;

/// Whether a cursor still has rows to offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorState {
    /// Holding a row, or waiting to retry after a row error.
    Active,
    /// The source is exhausted. Terminal.
    End,
}

/// A pull cursor borrowing its parser for its whole lifetime.
pub struct Cursor<'p, R, S> {
    parser: &'p mut RowParser<R, S>,
    current: Option<R>,
    state: CursorState,
}

impl<'p, R: Row, S: LineSource> Cursor<'p, R, S> {
    pub(crate) fn begin(parser: &'p mut RowParser<R, S>) -> Result<Self> {
        let mut cursor = Self {
            parser,
            current: None,
            state: CursorState::Active,
        };
        cursor.advance()?;
        Ok(cursor)
    }

    /// Fetch the next row. Does nothing once the cursor is at the end.
    ///
    /// # Errors
    /// Row and read errors from [`RowParser::advance`]. After a row error the
    /// cursor stays active with no current row, and the next call moves on
    /// to the following line.
    pub fn advance(&mut self) -> Result<()> {
        if self.state == CursorState::End {
            return Ok(());
        }
        self.current = None;
        match self.parser.advance()? {
            Some(row) => self.current = Some(row),
            None => self.state = CursorState::End,
        }
        Ok(())
    }

    /// The most recently fetched row, or `None` at the end (or after a row error).
    #[must_use]
    pub fn get(&self) -> Option<&R> {
        self.current.as_ref()
    }

    #[must_use]
    pub fn state(&self) -> CursorState {
        self.state
    }

    #[must_use]
    pub fn is_end(&self) -> bool {
        self.state == CursorState::End
    }
}

impl<R: Row + Clone + Default, S: LineSource> Cursor<'_, R, S> {
    /// The current row, or a row of default values when there is none.
    #[must_use]
    pub fn get_or_default(&self) -> R {
        self.current.clone().unwrap_or_default()
    }
}

impl<R, S> PartialEq<CursorState> for Cursor<'_, R, S> {
    fn eq(&self, other: &CursorState) -> bool {
        self.state == *other
    }
}
