//! Transparent decompression for file-backed line sources.
//!
//! [`auto_detect_reader`] wraps a raw reader with the matching decompressor
//! and returns a buffered reader ready to be used as a
//! [`LineSource`](crate::io::LineSource).
//!
//! ## Built-in Codecs
//!
//! When enabled via feature flags:
//! - **Gzip** (`.gz`) - via `flate2` (feature: `compression-gzip`)
//! - **Zstd** (`.zst`) - via `zstd` (feature: `compression-zstd`)
//! - **Bzip2** (`.bz2`) - via `bzip2` (feature: `compression-bzip2`)
//! - **Xz** (`.xz`) - via `xz2` (feature: `compression-xz`)
//!
//! ## Detection
//! The path extension is checked first. If no codec claims it, the first
//! bytes of the stream are compared against each codec's magic bytes. A stream
//! nothing matches is passed through unchanged.
//!
//! ## Custom Codecs
//! ```
//! use typedcsv::io::compression::{register_codec, DecompressionCodec};
//! use std::io::Read;
//! use std::sync::Arc;
//!
//! struct Identity;
//!
//! impl DecompressionCodec for Identity {
//!     fn name(&self) -> &str { "identity" }
//!     fn extensions(&self) -> &[&str] { &[".ident"] }
//!     fn magic_bytes(&self) -> Option<&[u8]> { None }
//!     fn wrap_reader(&self, reader: Box<dyn Read>) -> std::io::Result<Box<dyn Read>> {
//!         Ok(reader)
//!     }
//! }
//!
//! register_codec(Arc::new(Identity));
//! ```

use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::debug;

/// Global codec registry, filled with the built-in codecs on first use.
static CODEC_REGISTRY: RwLock<Option<Vec<Arc<dyn DecompressionCodec>>>> = RwLock::new(None);

fn builtin_codecs() -> Vec<Arc<dyn DecompressionCodec>> {
    vec![
        #[cfg(feature = "compression-gzip")]
        Arc::new(GzipCodec),
        #[cfg(feature = "compression-zstd")]
        Arc::new(ZstdCodec),
        #[cfg(feature = "compression-bzip2")]
        Arc::new(Bzip2Codec),
        #[cfg(feature = "compression-xz")]
        Arc::new(XzCodec),
    ]
}

fn registered_codecs() -> Vec<Arc<dyn DecompressionCodec>> {
    let mut lock = CODEC_REGISTRY
        .write()
        .unwrap_or_else(PoisonError::into_inner);
    lock.get_or_insert_with(builtin_codecs).clone()
}

/// Register a custom codec. It is consulted after the codecs registered before it.
pub fn register_codec(codec: Arc<dyn DecompressionCodec>) {
    let mut lock = CODEC_REGISTRY
        .write()
        .unwrap_or_else(PoisonError::into_inner);
    lock.get_or_insert_with(builtin_codecs).push(codec);
}

/// A decompression format that can sit between a file and the parser.
///
/// Implementations live in a global registry, so they must be `Send + Sync`.
pub trait DecompressionCodec: Send + Sync {
    /// Human-readable codec name (e.g. "gzip").
    fn name(&self) -> &str;

    /// Lowercase file extensions including the leading dot (e.g. `&[".gz"]`).
    fn extensions(&self) -> &[&str];

    /// Leading byte signature, or `None` if the format has no reliable one.
    fn magic_bytes(&self) -> Option<&[u8]>;

    /// Wrap `reader` so that reads yield decompressed bytes.
    fn wrap_reader(&self, reader: Box<dyn Read>) -> io::Result<Box<dyn Read>>;
}

fn detect_from_extension(path: &Path) -> Option<Arc<dyn DecompressionCodec>> {
    let name = path.to_string_lossy().to_lowercase();
    registered_codecs()
        .into_iter()
        .find(|codec| codec.extensions().iter().any(|ext| name.ends_with(ext)))
}

/// Match the buffered head of the stream against codec signatures. Does not consume.
fn detect_from_magic<R: BufRead>(reader: &mut R) -> io::Result<Option<Arc<dyn DecompressionCodec>>> {
    let head = reader.fill_buf()?;
    if head.is_empty() {
        return Ok(None);
    }
    Ok(registered_codecs().into_iter().find(|codec| {
        codec
            .magic_bytes()
            .is_some_and(|magic| head.starts_with(magic))
    }))
}

/// Wrap `reader` with decompression if `path_hint` or the stream's first bytes
/// call for it, and buffer the result.
///
/// # Errors
/// Returns an error if peeking at the stream fails or a codec cannot
/// initialize its decoder (e.g. a corrupt zstd frame header).
pub fn auto_detect_reader<R: Read + 'static>(
    reader: R,
    path_hint: impl AsRef<Path>,
) -> io::Result<Box<dyn BufRead>> {
    let path_hint = path_hint.as_ref();
    if let Some(codec) = detect_from_extension(path_hint) {
        debug!(codec = codec.name(), path = %path_hint.display(), "decompressing by extension");
        let inner = codec.wrap_reader(Box::new(reader))?;
        return Ok(Box::new(BufReader::new(inner)));
    }

    let mut buffered = BufReader::new(reader);
    if let Some(codec) = detect_from_magic(&mut buffered)? {
        debug!(codec = codec.name(), path = %path_hint.display(), "decompressing by magic bytes");
        let inner = codec.wrap_reader(Box::new(buffered))?;
        return Ok(Box::new(BufReader::new(inner)));
    }

    Ok(Box::new(buffered))
}

// ============================================================================
// Built-in Codec Implementations
// ============================================================================

#[cfg(feature = "compression-gzip")]
struct GzipCodec;

#[cfg(feature = "compression-gzip")]
impl DecompressionCodec for GzipCodec {
    fn name(&self) -> &str {
        "gzip"
    }

    fn extensions(&self) -> &[&str] {
        &[".gz", ".gzip"]
    }

    fn magic_bytes(&self) -> Option<&[u8]> {
        Some(&[0x1f, 0x8b])
    }

    fn wrap_reader(&self, reader: Box<dyn Read>) -> io::Result<Box<dyn Read>> {
        Ok(Box::new(flate2::read::MultiGzDecoder::new(reader)))
    }
}

#[cfg(feature = "compression-zstd")]
struct ZstdCodec;

#[cfg(feature = "compression-zstd")]
impl DecompressionCodec for ZstdCodec {
    fn name(&self) -> &str {
        "zstd"
    }

    fn extensions(&self) -> &[&str] {
        &[".zst", ".zstd"]
    }

    fn magic_bytes(&self) -> Option<&[u8]> {
        Some(&[0x28, 0xb5, 0x2f, 0xfd])
    }

    fn wrap_reader(&self, reader: Box<dyn Read>) -> io::Result<Box<dyn Read>> {
        zstd::stream::read::Decoder::new(reader).map(|d| Box::new(d) as Box<dyn Read>)
    }
}

#[cfg(feature = "compression-bzip2")]
struct Bzip2Codec;

#[cfg(feature = "compression-bzip2")]
impl DecompressionCodec for Bzip2Codec {
    fn name(&self) -> &str {
        "bzip2"
    }

    fn extensions(&self) -> &[&str] {
        &[".bz2", ".bzip2"]
    }

    fn magic_bytes(&self) -> Option<&[u8]> {
        Some(b"BZh")
    }

    fn wrap_reader(&self, reader: Box<dyn Read>) -> io::Result<Box<dyn Read>> {
        Ok(Box::new(bzip2::read::MultiBzDecoder::new(reader)))
    }
}

#[cfg(feature = "compression-xz")]
struct XzCodec;

#[cfg(feature = "compression-xz")]
impl DecompressionCodec for XzCodec {
    fn name(&self) -> &str {
        "xz"
    }

    fn extensions(&self) -> &[&str] {
        &[".xz"]
    }

    fn magic_bytes(&self) -> Option<&[u8]> {
        Some(&[0xfd, 0x37, 0x7a, 0x58, 0x5a, 0x00])
    }

    fn wrap_reader(&self, reader: Box<dyn Read>) -> io::Result<Box<dyn Read>> {
        Ok(Box::new(xz2::read::XzDecoder::new_multi_decoder(reader)))
    }
}
