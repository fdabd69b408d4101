//! The row parser: line source in, typed rows out.
//!
//! A [`RowParser`] pulls one line per [`advance`](RowParser::advance), splits
//! it with its [`Tokenizer`], and converts the fields into the row tuple `R`.
//! It is single-pass: there is no rewind and no lookahead.
//!
//! # Error policy
//! - A line with the wrong field count or an unconvertible field is returned
//!   as `Err` for that line only. The line is consumed, and the next call
//!   continues with the following line. Collecting into `Result<Vec<_>>`
//!   turns this into abort-on-first-error.
//! - A line that is not valid UTF-8 ([`CsvError::Encoding`]) is handled the
//!   same way: reported, consumed, and parsing continues.
//! - Any other read failure ([`CsvError::Read`]) ends the stream: every later
//!   call returns `Ok(None)`.
//!
//! # Example
//! ```
//! use typedcsv::{ParserOptions, RowParser};
//!
//! # fn main() -> typedcsv::Result<()> {
//! let input: &[u8] = b"id,year\n1,2016\n2,2017\n";
//! let opts = ParserOptions::new().with_skip_lines(1);
//! let mut parser = RowParser::<(i32, i32), _>::new(input, opts)?;
//!
//! assert_eq!(parser.advance()?, Some((1, 2016)));
//! assert_eq!(parser.advance()?, Some((2, 2017)));
//! assert_eq!(parser.advance()?, None);
//! assert_eq!(parser.advance()?, None);
//! # Ok(())
//! # }
//! ```

use crate::cursor::Cursor;
use crate::error::{CsvError, Result};
use crate::io::{self, LineSource};
use crate::options::ParserOptions;
use crate::row::Row;
use crate::stats::ParseStats;
use crate::tokenizer::Tokenizer;
use std::io::BufRead;
use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::path::Path;
use tracing::{debug, trace, warn};

/// Streaming parser yielding rows of type `R` from the source `S`.
///
/// `S` may be owned (a `BufReader<File>`) or borrowed (`&mut impl BufRead`);
/// either way it is released when the parser is dropped.
pub struct RowParser<R, S> {
    source: S,
    options: ParserOptions,
    tokenizer: Tokenizer,
    terminator: u8,
    strip_cr: bool,
    line: String,
    fields: Vec<String>,
    line_no: u64,
    exhausted: bool,
    stats: ParseStats,
    _row: PhantomData<fn() -> R>,
}

impl<R: Row, S: LineSource> RowParser<R, S> {
    /// Validate `options`, then consume `options.skip_lines` lines from `source`.
    ///
    /// Running out of input during the skip is not an error; the parser is
    /// simply exhausted from the start.
    ///
    /// # Errors
    /// - [`CsvError::InvalidOptions`] if the options are rejected.
    /// - [`CsvError::SourceUnavailable`] if reading the source fails while skipping.
    pub fn new(mut source: S, options: ParserOptions) -> Result<Self> {
        options.validate()?;
        let terminator = options.terminator_byte();

        let mut skipped = 0u64;
        for _ in 0..options.skip_lines {
            let more = source
                .skip_line(terminator)
                .map_err(|e| CsvError::SourceUnavailable {
                    context: format!("skip line {} of {}", skipped + 1, options.skip_lines),
                    source: e,
                })?;
            if !more {
                warn!(
                    requested = options.skip_lines,
                    skipped, "input ended before all header lines were skipped"
                );
                break;
            }
            skipped += 1;
        }

        debug!(
            arity = R::ARITY,
            skipped,
            separator = ?options.field_separator,
            escape = ?options.escape_character,
            "row parser ready"
        );

        Ok(Self {
            source,
            tokenizer: options.tokenizer(),
            terminator,
            strip_cr: options.strip_carriage_return && terminator == b'\n',
            options,
            line: String::new(),
            fields: Vec::with_capacity(R::ARITY),
            line_no: skipped,
            exhausted: false,
            stats: ParseStats {
                lines_skipped: skipped,
                ..ParseStats::default()
            },
            _row: PhantomData,
        })
    }

    /// Read and convert the next row.
    ///
    /// Returns `Ok(None)` once the source has no more lines, and on every
    /// call after that.
    ///
    /// # Errors
    /// [`CsvError::RowArity`], [`CsvError::Conversion`] or
    /// [`CsvError::Encoding`] for a malformed line (the parser stays usable),
    /// or [`CsvError::Read`] if the source fails (the parser is then exhausted).
    pub fn advance(&mut self) -> Result<Option<R>> {
        if self.exhausted {
            return Ok(None);
        }

        let line_no = self.line_no + 1;
        match self.source.next_line(self.terminator, &mut self.line) {
            Ok(true) => {}
            Ok(false) => {
                self.exhausted = true;
                debug!(rows = self.stats.rows_parsed, "source exhausted");
                return Ok(None);
            }
            Err(source) => {
                if let Some(cause) = io::utf8_error(&source) {
                    self.line_no = line_no;
                    self.stats.lines_read += 1;
                    self.stats.rows_rejected += 1;
                    return Err(CsvError::Encoding {
                        line: line_no,
                        source: cause,
                    });
                }
                self.exhausted = true;
                return Err(CsvError::Read {
                    line: line_no,
                    source,
                });
            }
        }
        self.line_no = line_no;
        self.stats.lines_read += 1;

        if self.strip_cr && self.line.ends_with('\r') {
            self.line.pop();
        }

        self.tokenizer.split_into(&self.line, &mut self.fields);
        match R::from_fields(&self.fields, line_no) {
            Ok(row) => {
                self.stats.rows_parsed += 1;
                trace!(line = line_no, "row parsed");
                Ok(Some(row))
            }
            Err(e) => {
                self.stats.rows_rejected += 1;
                Err(e)
            }
        }
    }

    /// Start a [`Cursor`] over the remaining rows. Fetches the first row now.
    ///
    /// # Errors
    /// Any error from fetching the first row; see [`advance`](Self::advance).
    /// Unlike [`Cursor::advance`], a row error here yields no cursor. The bad
    /// line is still consumed, so calling `cursor()` again starts at the line
    /// after it.
    pub fn cursor(&mut self) -> Result<Cursor<'_, R, S>> {
        Cursor::begin(self)
    }
}

impl<R: Row> RowParser<R, Box<dyn BufRead>> {
    /// Open `path` (decompressing if needed) and build a parser over it.
    ///
    /// # Errors
    /// [`CsvError::SourceUnavailable`] if the file cannot be opened, plus
    /// everything [`RowParser::new`] can return.
    pub fn from_path(path: impl AsRef<Path>, options: ParserOptions) -> Result<Self> {
        let source = io::open_path(path)?;
        Self::new(source, options)
    }
}

impl<R, S> RowParser<R, S> {
    #[must_use]
    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    #[must_use]
    pub fn stats(&self) -> ParseStats {
        self.stats
    }

    /// The 1-based number of the last line consumed, counting skipped lines.
    #[must_use]
    pub fn line_number(&self) -> u64 {
        self.line_no
    }

    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Give the source back, positioned after the last line read.
    pub fn into_inner(self) -> S {
        self.source
    }
}

impl<R: Row, S: LineSource> Iterator for RowParser<R, S> {
    type Item = Result<R>;

    fn next(&mut self) -> Option<Self::Item> {
        self.advance().transpose()
    }
}

impl<R: Row, S: LineSource> FusedIterator for RowParser<R, S> {}
