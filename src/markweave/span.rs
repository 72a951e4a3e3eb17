//! Source positions
//!
//!     [`Span`] is a half-open byte range into the source. [`SpanMap`] is built once
//!     by the tokenizer, up front, by scanning the source for line boundaries; any
//!     span can then be resolved to a [`LineCol`] in O(log lines) without re-scanning.
//!     The map is read-only after construction and may be freely shared with
//!     diagnostics consumers.

use serde::{Deserialize, Serialize};

/// A half-open byte range `[start, end)` into the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        Span { start, end }
    }

    /// A zero-width span at `at`, used for synthetic tokens (e.g. `EOF`).
    pub fn point(at: usize) -> Self {
        Span { start: at, end: at }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Extends this span's end to `other`'s end, used when merging adjacent `Text`
    /// tokens during emit.
    pub fn extend_to(&mut self, other: Span) {
        self.end = other.end;
    }

    pub fn slice<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start..self.end.min(source.len())]
    }
}

/// `(start_line, start_col, end_line, end_col)`, all 0-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineCol {
    pub start_line: usize,
    pub start_col: usize,
    pub end_line: usize,
    pub end_col: usize,
}

impl std::fmt::Display for LineCol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}-{}:{}",
            self.start_line, self.start_col, self.end_line, self.end_col
        )
    }
}

struct LineEntry {
    /// Byte offset of the first byte of the line, including any previous newlines.
    start: usize,
    /// Length of the line's content, excluding the trailing `\n` (if any).
    len: usize,
}

/// Maps byte offsets to `(line, col)` pairs.
///
/// Built once from the source by recording, per line, the byte range
/// `[line_start, line_start + line_length + 1)` (including the `\n`) together with
/// `(line_index, line_length)`.
pub struct SpanMap {
    lines: Vec<LineEntry>,
}

impl SpanMap {
    pub fn build(source: &str) -> Self {
        let mut lines = Vec::new();
        let mut line_start = 0usize;
        for (i, b) in source.bytes().enumerate() {
            if b == b'\n' {
                lines.push(LineEntry {
                    start: line_start,
                    len: i - line_start,
                });
                line_start = i + 1;
            }
        }
        // Final line, even if it has no trailing newline.
        lines.push(LineEntry {
            start: line_start,
            len: source.len() - line_start,
        });
        SpanMap { lines }
    }

    fn line_of(&self, offset: usize) -> Option<usize> {
        // Binary search over line starts; `partition_point` finds the first line
        // whose start is > offset, so we step back one.
        let idx = self.lines.partition_point(|l| l.start <= offset);
        if idx == 0 {
            return None;
        }
        Some(idx - 1)
    }

    /// Resolves the line/column of `span.start` and `span.end - 1`.
    ///
    /// Start-not-found yields `None`. End-not-found clamps to the last known line.
    /// Single-line spans collapse the end column to `start_col + (len - 1)`.
    pub fn lookup(&self, span: Span) -> Option<LineCol> {
        let start_line = self.line_of(span.start)?;
        let start_col = span.start - self.lines[start_line].start;

        let end_offset = span.end.saturating_sub(1).max(span.start);
        let end_line = self.line_of(end_offset).unwrap_or(self.lines.len() - 1);

        if start_line == end_line {
            let len = span.len().max(1);
            return Some(LineCol {
                start_line,
                start_col,
                end_line,
                end_col: start_col + len - 1,
            });
        }

        let end_col = end_offset.saturating_sub(self.lines[end_line].start);
        Some(LineCol {
            start_line,
            start_col,
            end_line,
            end_col,
        })
    }
}
