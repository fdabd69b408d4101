//! The line source abstraction the parser reads from.
//!
//! Every [`BufRead`] is a [`LineSource`]: files behind a `BufReader`,
//! in-memory byte slices, `io::Cursor`s, sockets, and the decompressing
//! readers returned by [`open_path`](crate::io::open_path).

use std::io::{self, BufRead};

/// Sequential supplier of lines split on a single-byte terminator.
pub trait LineSource {
    /// Read the next line into `buf`, replacing its contents.
    ///
    /// The terminator is not included. A final line without a terminator is
    /// still a line. Returns `Ok(false)` once no bytes remain.
    ///
    /// # Errors
    /// Any I/O error from the underlying reader, or `InvalidData` if the line
    /// is not valid UTF-8. In the UTF-8 case the whole line has been consumed,
    /// `buf` is left empty, and [`utf8_error`] recovers the cause.
    fn next_line(&mut self, terminator: u8, buf: &mut String) -> io::Result<bool>;

    /// Consume and discard the next line. Returns `Ok(false)` at end of input.
    ///
    /// # Errors
    /// Any I/O error from the underlying reader.
    fn skip_line(&mut self, terminator: u8) -> io::Result<bool>;
}

/// The UTF-8 failure behind an error from [`LineSource::next_line`], if that
/// is what it was. Other errors (including `InvalidData` raised by the
/// reader itself) return `None`.
#[must_use]
pub fn utf8_error(err: &io::Error) -> Option<std::str::Utf8Error> {
    err.get_ref()?.downcast_ref::<std::str::Utf8Error>().copied()
}

impl<B: BufRead> LineSource for B {
    fn next_line(&mut self, terminator: u8, buf: &mut String) -> io::Result<bool> {
        let mut bytes = std::mem::take(buf).into_bytes();
        bytes.clear();
        let n = self.read_until(terminator, &mut bytes)?;
        if n == 0 {
            return Ok(false);
        }
        if bytes.last() == Some(&terminator) {
            bytes.pop();
        }
        *buf = String::from_utf8(bytes)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.utf8_error()))?;
        Ok(true)
    }

    fn skip_line(&mut self, terminator: u8) -> io::Result<bool> {
        let mut consumed_any = false;
        loop {
            let (found, used) = {
                let available = match self.fill_buf() {
                    Ok(b) => b,
                    Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                    Err(e) => return Err(e),
                };
                if available.is_empty() {
                    return Ok(consumed_any);
                }
                match available.iter().position(|&b| b == terminator) {
                    Some(i) => (true, i + 1),
                    None => (false, available.len()),
                }
            };
            self.consume(used);
            consumed_any = true;
            if found {
                return Ok(true);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_lines_without_terminator() {
        let mut src: &[u8] = b"a,b\nc,d\ne";
        let mut buf = String::new();
        let mut lines = Vec::new();
        while src.next_line(b'\n', &mut buf).unwrap() {
            lines.push(buf.clone());
        }
        assert_eq!(lines, vec!["a,b", "c,d", "e"]);
    }

    #[test]
    fn skip_reports_end_of_input() {
        let mut src: &[u8] = b"header\nrow";
        assert!(src.skip_line(b'\n').unwrap());
        assert!(src.skip_line(b'\n').unwrap());
        assert!(!src.skip_line(b'\n').unwrap());
    }

    #[test]
    fn invalid_utf8_is_invalid_data() {
        let mut src: &[u8] = b"\xff\xfe\n";
        let mut buf = String::from("stale");
        let err = src.next_line(b'\n', &mut buf).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        assert!(utf8_error(&err).is_some());
        assert!(buf.is_empty());
        assert_eq!(src, b"");

        let other = io::Error::new(io::ErrorKind::InvalidData, "corrupt frame");
        assert!(utf8_error(&other).is_none());
    }

    #[test]
    fn custom_terminator() {
        let mut src: &[u8] = b"1,2;3,4;";
        let mut buf = String::new();
        assert!(src.next_line(b';', &mut buf).unwrap());
        assert_eq!(buf, "1,2");
        assert!(src.next_line(b';', &mut buf).unwrap());
        assert_eq!(buf, "3,4");
        assert!(!src.next_line(b';', &mut buf).unwrap());
    }
}
