//! One-call conveniences for reading a whole input into memory.

use crate::error::Result;
use crate::io::LineSource;
use crate::options::ParserOptions;
use crate::parser::RowParser;
use crate::row::Row;
use anyhow::Context;
use std::path::Path;

/// Parse every row of `source`, stopping at the first error.
///
/// # Errors
/// The first construction, row or read error encountered.
pub fn read_rows<R: Row, S: LineSource>(source: S, options: ParserOptions) -> Result<Vec<R>> {
    RowParser::<R, S>::new(source, options)?.collect()
}

/// Open `path` (decompressing if needed) and parse every row.
///
/// # Errors
/// Returns an error annotated with the path if the file cannot be opened or
/// any row fails.
pub fn read_rows_from_path<R: Row>(
    path: impl AsRef<Path>,
    options: ParserOptions,
) -> anyhow::Result<Vec<R>> {
    let path = path.as_ref();
    let parser = RowParser::<R, _>::from_path(path, options)
        .with_context(|| format!("open {}", path.display()))?;
    let rows = parser
        .collect::<Result<Vec<R>>>()
        .with_context(|| format!("parse {}", path.display()))?;
    Ok(rows)
}
