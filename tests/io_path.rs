use anyhow::Result;
use std::fs;
use std::io::Write;
use typedcsv::{CsvError, ParserOptions, RowParser, read_rows_from_path};

const PRODUCTION: &str = "\
id,year,month,a,b,ratio,c,share,d,stamp
5005072170100,2016,10,3835,11281,2.94,188,0.049,31,2016-12-22 14:18:34.197
5005072170200,2017,11,1,2,0.5,3,0.25,4,2017-01-01 00:00:00.000
";

type ProductionRow = (i64, i32, i32, i32, i32, f64, i32, f64, i32, String);

#[test]
fn reads_plain_file() -> Result<()> {
    let tmp = tempfile::tempdir()?;
    let path = tmp.path().join("production.csv");
    fs::write(&path, PRODUCTION)?;

    let rows: Vec<ProductionRow> =
        read_rows_from_path(&path, ParserOptions::new().with_skip_lines(1))?;
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].0, 5_005_072_170_100);
    assert_eq!(rows[0].9, "2016-12-22 14:18:34.197");
    assert_eq!(rows[1].5, 0.5);
    Ok(())
}

#[test]
fn missing_file_is_source_unavailable() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("does_not_exist.csv");

    let result = RowParser::<(i32,), _>::from_path(&path, ParserOptions::default());
    match result {
        Err(CsvError::SourceUnavailable { context, .. }) => {
            assert!(context.contains("does_not_exist.csv"));
        }
        Err(other) => panic!("expected SourceUnavailable, got {other:?}"),
        Ok(_) => panic!("expected SourceUnavailable, got a parser"),
    }
}

#[test]
fn helper_error_mentions_path() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("bad.csv");
    fs::write(&path, "1\nnope\n").unwrap();

    let err = read_rows_from_path::<(u32,)>(&path, ParserOptions::default()).unwrap_err();
    let msg = format!("{err:#}");
    assert!(msg.contains("bad.csv"), "{msg}");
    assert!(matches!(
        err.downcast_ref::<CsvError>(),
        Some(CsvError::Conversion { line: 2, .. })
    ));
}

#[test]
#[cfg(feature = "compression-gzip")]
fn reads_gzip_by_extension() -> Result<()> {
    use flate2::Compression;
    use flate2::write::GzEncoder;

    let tmp = tempfile::tempdir()?;
    let path = tmp.path().join("production.csv.gz");
    let mut enc = GzEncoder::new(fs::File::create(&path)?, Compression::default());
    enc.write_all(PRODUCTION.as_bytes())?;
    enc.finish()?;

    let rows: Vec<ProductionRow> =
        read_rows_from_path(&path, ParserOptions::new().with_skip_lines(1))?;
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1].1, 2017);
    Ok(())
}

#[test]
#[cfg(feature = "compression-gzip")]
fn reads_gzip_by_magic_bytes() -> Result<()> {
    use flate2::Compression;
    use flate2::write::GzEncoder;

    let tmp = tempfile::tempdir()?;
    let path = tmp.path().join("production.data");
    let mut enc = GzEncoder::new(fs::File::create(&path)?, Compression::default());
    enc.write_all(PRODUCTION.as_bytes())?;
    enc.finish()?;

    let rows: Vec<ProductionRow> =
        read_rows_from_path(&path, ParserOptions::new().with_skip_lines(1))?;
    assert_eq!(rows.len(), 2);
    Ok(())
}

#[test]
#[cfg(feature = "compression-zstd")]
fn reads_zstd_file() -> Result<()> {
    let tmp = tempfile::tempdir()?;
    let path = tmp.path().join("production.csv.zst");
    let compressed = zstd::encode_all(PRODUCTION.as_bytes(), 3)?;
    fs::write(&path, compressed)?;

    let mut parser =
        RowParser::<ProductionRow, _>::from_path(&path, ParserOptions::new().with_skip_lines(1))?;
    let first = parser.advance()?.expect("first row");
    assert_eq!(first.2, 10);
    assert_eq!(parser.by_ref().count(), 1);
    assert_eq!(parser.stats().rows_parsed, 2);
    Ok(())
}

#[test]
fn empty_file_has_no_rows() -> Result<()> {
    let tmp = tempfile::tempdir()?;
    let path = tmp.path().join("empty.csv");
    fs::write(&path, "")?;

    let rows: Vec<(i32, String)> =
        read_rows_from_path(&path, ParserOptions::new().with_skip_lines(3))?;
    assert!(rows.is_empty());
    Ok(())
}
