use std::io::{BufRead, Read};
use std::sync::Arc;
use typedcsv::io::compression::{DecompressionCodec, auto_detect_reader, register_codec};
use typedcsv::{ParserOptions, RowParser};

/// Test codec: the "compressed" form is the plain text with every byte incremented.
struct ShiftCodec;

struct Unshift(Box<dyn Read>);

impl Read for Unshift {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        let n = self.0.read(buf)?;
        for b in &mut buf[..n] {
            *b = b.wrapping_sub(1);
        }
        Ok(n)
    }
}

impl DecompressionCodec for ShiftCodec {
    fn name(&self) -> &str {
        "shift"
    }

    fn extensions(&self) -> &[&str] {
        &[".shift"]
    }

    fn magic_bytes(&self) -> Option<&[u8]> {
        None
    }

    fn wrap_reader(&self, reader: Box<dyn Read>) -> std::io::Result<Box<dyn Read>> {
        Ok(Box::new(Unshift(reader)))
    }
}

#[test]
fn custom_codec_is_used_by_extension() -> anyhow::Result<()> {
    register_codec(Arc::new(ShiftCodec));

    let tmp = tempfile::tempdir()?;
    let path = tmp.path().join("rows.csv.shift");
    let encoded: Vec<u8> = b"1,2\n3,4\n".iter().map(|b| b + 1).collect();
    std::fs::write(&path, encoded)?;

    let parser = RowParser::<(u8, u8), _>::from_path(&path, ParserOptions::default())?;
    let rows = parser.collect::<Result<Vec<_>, _>>()?;
    assert_eq!(rows, vec![(1, 2), (3, 4)]);
    Ok(())
}

#[test]
fn uncompressed_stream_passes_through() -> anyhow::Result<()> {
    let data: &'static [u8] = b"plain,text\n";
    let mut reader = auto_detect_reader(data, "input.csv")?;
    let mut line = String::new();
    reader.read_line(&mut line)?;
    assert_eq!(line, "plain,text\n");
    Ok(())
}

#[test]
fn empty_stream_passes_through() -> anyhow::Result<()> {
    let data: &'static [u8] = b"";
    let mut reader = auto_detect_reader(data, "empty")?;
    assert!(reader.fill_buf()?.is_empty());
    Ok(())
}

#[cfg(feature = "compression-gzip")]
mod gzip {
    use super::*;
    use flate2::Compression;
    use flate2::write::GzEncoder;
    use std::io::Write;

    #[test]
    fn concatenated_members_are_read_in_full() -> anyhow::Result<()> {
        let mut bytes = Vec::new();
        for chunk in ["1,a\n", "2,b\n"] {
            let mut enc = GzEncoder::new(Vec::new(), Compression::default());
            enc.write_all(chunk.as_bytes())?;
            bytes.extend(enc.finish()?);
        }

        let reader = auto_detect_reader(std::io::Cursor::new(bytes), "rows.gz")?;
        let rows = RowParser::<(u8, char), _>::new(reader, ParserOptions::default())?
            .collect::<Result<Vec<_>, _>>()?;
        assert_eq!(rows, vec![(1, 'a'), (2, 'b')]);
        Ok(())
    }
}
