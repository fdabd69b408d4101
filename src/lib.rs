//! # typedcsv
//!
//! A **typed, streaming CSV row parser**. The column types are fixed at
//! compile time as a tuple, and rows are read lazily, one line at a time,
//! straight into that tuple. There is no intermediate "row of strings" handed
//! to the caller.
//!
//! ## Quick Start
//!
//! ```
//! use typedcsv::{ParserOptions, RowParser};
//!
//! # fn main() -> typedcsv::Result<()> {
//! let input: &[u8] = b"id,year,label\n1,2016,first\n2,2017,second\n";
//! let parser = RowParser::<(u32, i32, String), _>::new(
//!     input,
//!     ParserOptions::new().with_skip_lines(1),
//! )?;
//!
//! for row in parser {
//!     let (id, year, label) = row?;
//!     println!("{id} {year} {label}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Pipeline
//!
//! 1. A [`LineSource`] supplies one line at a time. Any `BufRead` qualifies;
//!    [`io::open_path`] opens files and decompresses gzip/zstd/bzip2/xz.
//! 2. The [`Tokenizer`] splits the line on the field separator. The escape
//!    character toggles literal mode for the separator and is always dropped
//!    from the field text.
//! 3. Each field is converted with [`FromField`] into its column type. Numeric
//!    fields must parse in full: no whitespace, no trailing characters.
//! 4. [`RowParser`] packs the values into the [`Row`] tuple and hands it over,
//!    either through `Iterator` or through an explicit [`Cursor`].
//!
//! ## Errors
//!
//! All failures are [`CsvError`] values. Bad rows (wrong field count, bad
//! field) are reported for that row and the parser moves on; running out of
//! input is `Ok(None)` / the end of iteration, never an error.
//!
//! ## Feature Flags
//!
//! - `compression-gzip`, `compression-zstd`, `compression-bzip2`,
//!   `compression-xz` - decompression codecs for file sources (all on by default)
//!
//! ## Module Overview
//!
//! - [`tokenizer`] - line to raw fields
//! - [`convert`] - raw field to typed value
//! - [`row`] - tuple rows and per-row conversion
//! - [`parser`] - the streaming row parser
//! - [`cursor`] - explicit pull cursor
//! - [`options`] - separator configuration and header skipping
//! - [`io`] - line sources and transparent decompression
//! - [`helpers`] - read everything into a `Vec`

pub mod convert;
pub mod cursor;
pub mod error;
pub mod helpers;
pub mod io;
pub mod options;
pub mod parser;
pub mod row;
pub mod stats;
pub mod tokenizer;

pub use convert::FromField;
pub use cursor::{Cursor, CursorState};
pub use error::{CsvError, FieldError, Result};
pub use helpers::{read_rows, read_rows_from_path};
pub use io::{LineSource, open_path};
pub use options::ParserOptions;
pub use parser::RowParser;
pub use row::Row;
pub use stats::ParseStats;
pub use tokenizer::Tokenizer;
