//! Offset-to-location helpers.

use memchr::memchr2;

/// The source slice from `position` up to (exclusive of) the next line
/// break or EOF.
///
/// This is the "near:" context shown under a lexical error. The end is
/// exclusive: a position sitting on a newline, or at EOF, yields an empty
/// slice.
///
/// # Panics
///
/// Panics if `position` is out of bounds or not a character boundary; the
/// lexer only reports offsets that satisfy both.
pub fn near_context(source: &str, position: usize) -> &str {
    let rest = &source[position..];
    match memchr2(b'\r', b'\n', rest.as_bytes()) {
        Some(end) => &rest[..end],
        None => rest,
    }
}

/// Pre-computed line-start offsets for line/column lookup.
///
/// Builds in one O(n) pass; each lookup is a binary search over the line
/// starts. Columns are counted in characters, not bytes, so multi-byte
/// string content earlier on the line does not inflate them.
#[derive(Clone, Debug, Default)]
pub struct LineOffsetTable {
    /// Byte offset of each line start; `offsets[0] == 0`.
    offsets: Vec<usize>,
}

impl LineOffsetTable {
    /// Scan the source for line breaks.
    pub fn build(source: &str) -> Self {
        let mut offsets = vec![0];
        for (i, byte) in source.as_bytes().iter().enumerate() {
            if *byte == b'\n' {
                offsets.push(i + 1);
            }
        }
        LineOffsetTable { offsets }
    }

    /// 1-based line number containing the byte offset.
    pub fn line_from_offset(&self, offset: usize) -> usize {
        let line_idx = match self.offsets.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert) => insert.saturating_sub(1),
        };
        line_idx + 1
    }

    /// 1-based `(line, column)` for the byte offset; the column counts
    /// characters from the line start.
    pub fn offset_to_line_col(&self, source: &str, offset: usize) -> (usize, usize) {
        let line = self.line_from_offset(offset);
        let line_start = self.offsets[line - 1];
        let column = source[line_start..offset].chars().count() + 1;
        (line, column)
    }
}
