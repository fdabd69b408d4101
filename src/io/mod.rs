//! Line sources: the [`LineSource`] trait and file opening with transparent
//! decompression.

pub mod compression;
mod source;

pub use source::{LineSource, utf8_error};

use crate::error::{CsvError, Result};
use std::fs::File;
use std::io::BufRead;
use std::path::Path;

/// Open `path` as a buffered line source.
///
/// Compressed files (see [`compression`]) are decompressed on the fly.
///
/// # Errors
/// [`CsvError::SourceUnavailable`] if the file cannot be opened or its
/// decompressor cannot be set up.
pub fn open_path(path: impl AsRef<Path>) -> Result<Box<dyn BufRead>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| CsvError::SourceUnavailable {
        context: format!("open {}", path.display()),
        source,
    })?;
    compression::auto_detect_reader(file, path).map_err(|source| CsvError::SourceUnavailable {
        context: format!("setup decompression for {}", path.display()),
        source,
    })
}
