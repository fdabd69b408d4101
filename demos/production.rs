//! Print every row of a production report.
//!
//! ```text
//! cargo run --example production -- ./production.csv [options.json]
//! ```
//!
//! Each row looks like
//! `5005072170100,2016,10,3835,11281,2.94,188,0.049,31,2016-12-22 14:18:34.197`.
//! The first line is a header and is skipped unless the options file says
//! otherwise. Set `RUST_LOG=typedcsv=debug` to see parser events.

use anyhow::{Context, Result};
use std::env;
use std::fs;
use tracing_subscriber::EnvFilter;
use typedcsv::{ParserOptions, RowParser};

type ProductionRow = (i64, i32, i32, i32, i32, f64, i32, f64, i32, String);

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut args = env::args().skip(1);
    let path = args.next().unwrap_or_else(|| "./production.csv".to_string());
    let options = match args.next() {
        Some(cfg) => {
            let text = fs::read_to_string(&cfg).with_context(|| format!("read {cfg}"))?;
            ParserOptions::from_json(&text).with_context(|| format!("parse {cfg}"))?
        }
        None => ParserOptions::new().with_skip_lines(1),
    };

    let mut parser = RowParser::<ProductionRow, _>::from_path(&path, options)
        .with_context(|| format!("open {path}"))?;

    for row in parser.by_ref() {
        let (id, year, month, a, b, ratio, c, share, d, stamp) =
            row.with_context(|| format!("parse {path}"))?;
        println!("{id}, {year}, {month}, {a}, {b}, {ratio}, {c}, {share}, {d}, {stamp}");
    }

    eprintln!("{}", parser.stats().to_json());
    Ok(())
}
