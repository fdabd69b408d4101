//! Counters kept by a [`RowParser`](crate::RowParser) as it reads.

use serde::Serialize;

/// Running totals for one parsing session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ParseStats {
    /// Lines discarded by `skip_lines` (fewer than requested if input ran out).
    pub lines_skipped: u64,
    /// Lines read after the skip, including rejected ones.
    pub lines_read: u64,
    pub rows_parsed: u64,
    /// Lines that failed arity or conversion.
    pub rows_rejected: u64,
}

impl ParseStats {
    /// Render as a JSON object, e.g. for a run summary.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "lines_skipped": self.lines_skipped,
            "lines_read": self.lines_read,
            "rows_parsed": self.rows_parsed,
            "rows_rejected": self.rows_rejected,
        })
    }
}
