//! Splitting one raw line into raw fields.
//!
//! The tokenizer knows two characters: the field separator and the escape
//! character. The escape character toggles an "escaped" flag and is always
//! dropped from the output; while the flag is set, the separator is copied
//! into the field instead of ending it.
//!
//! ```
//! use typedcsv::Tokenizer;
//!
//! let t = Tokenizer::new(',', '\\');
//! assert_eq!(t.split(r"a\,b,c"), vec!["a,b", "c"]);
//! assert_eq!(t.split(r"a\b,c"), vec!["ab", "c"]);
//! assert_eq!(t.split(""), vec![""]);
//! ```

/// Field splitter for a single separator/escape pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tokenizer {
    separator: char,
    escape: char,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(',', '\\')
    }
}

impl Tokenizer {
    #[must_use]
    pub const fn new(separator: char, escape: char) -> Self {
        Self { separator, escape }
    }

    #[must_use]
    pub const fn separator(&self) -> char {
        self.separator
    }

    #[must_use]
    pub const fn escape(&self) -> char {
        self.escape
    }

    /// Split `line` into its fields.
    ///
    /// Always returns at least one field. An odd number of escape characters
    /// leaves the escaped flag set at end of line, which has no further effect.
    #[must_use]
    pub fn split(&self, line: &str) -> Vec<String> {
        let mut out = Vec::new();
        self.split_into(line, &mut out);
        out
    }

    /// Like [`split`](Self::split), but writes into `out`, reusing the
    /// strings already allocated there. Returns the number of fields.
    ///
    /// After the call `out.len()` equals the returned count.
    pub fn split_into(&self, line: &str, out: &mut Vec<String>) -> usize {
        let mut count = 0usize;
        let mut in_escape = false;
        start_field(out, count);

        for ch in line.chars() {
            if ch == self.escape {
                in_escape = !in_escape;
            } else if ch == self.separator && !in_escape {
                count += 1;
                start_field(out, count);
            } else {
                out[count].push(ch);
            }
        }

        count += 1;
        out.truncate(count);
        count
    }
}

/// Make `out[idx]` an empty string, reusing an existing allocation if present.
fn start_field(out: &mut Vec<String>, idx: usize) {
    if let Some(field) = out.get_mut(idx) {
        field.clear();
    } else {
        out.push(String::new());
    }
}
