//! Byte cursor over the source text.
//!
//! The cursor advances byte-by-byte and reports `0x00` once the source is
//! exhausted, so classification predicates (which all reject `0x00`)
//! terminate scanning loops naturally. An interior null byte in the source
//! is distinguished from EOF by comparing the position against the source
//! length via [`is_eof()`](Cursor::is_eof).
//!
//! The cursor is [`Copy`]. A sub-scanner that reads ahead and decides the
//! input is not its token restores the saved copy, which re-exposes every
//! byte it consumed — the same contract a pushback stack would provide,
//! enforced by rewinding an index instead of re-pushing characters.
//!
//! Positions are byte offsets into the UTF-8 source. The structural grammar
//! is ASCII-only, so every offset the scanner reports falls on a character
//! boundary and slicing the source at it is always valid.

use memchr::{memchr, memchr2, memchr3};

/// Returns the earliest (minimum) of two optional positions.
///
/// Combines results from separate memchr calls when more needles are needed
/// than `memchr3` supports.
fn earliest_of(a: Option<usize>, b: Option<usize>) -> Option<usize> {
    match (a, b) {
        (Some(x), Some(y)) => Some(x.min(y)),
        (Some(x), None) | (None, Some(x)) => Some(x),
        (None, None) => None,
    }
}

/// Copyable byte cursor with memchr-accelerated body skips.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'src> {
    source: &'src str,
    pos: usize,
}

impl<'src> Cursor<'src> {
    /// Create a cursor at position 0.
    pub fn new(source: &'src str) -> Self {
        Self { source, pos: 0 }
    }

    /// The byte at the current position, or `0x00` at EOF.
    ///
    /// Interior null bytes also return `0x00`; use [`is_eof()`](Self::is_eof)
    /// to distinguish.
    #[inline]
    pub fn current(&self) -> u8 {
        self.source.as_bytes().get(self.pos).copied().unwrap_or(0)
    }

    /// The byte one position ahead, or `0x00` past the end.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.source
            .as_bytes()
            .get(self.pos + 1)
            .copied()
            .unwrap_or(0)
    }

    /// Advance by one byte.
    #[inline]
    pub fn advance(&mut self) {
        self.pos += 1;
    }

    /// Advance by `n` bytes.
    #[inline]
    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    /// `true` once the position has reached the end of the source.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Current byte offset.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Length of the source in bytes.
    #[inline]
    pub fn source_len(&self) -> usize {
        self.source.len()
    }

    /// Extract the source substring `start..end`.
    ///
    /// # Panics
    ///
    /// Panics if the range is out of bounds or splits a UTF-8 character.
    /// The scanner only passes offsets it obtained from this cursor, which
    /// always lie on character boundaries.
    pub fn slice(&self, start: usize, end: usize) -> &'src str {
        &self.source[start..end]
    }

    /// Extract the source substring from `start` to the current position.
    pub fn slice_from(&self, start: usize) -> &'src str {
        &self.source[start..self.pos]
    }

    /// Advance while `pred` accepts the current byte.
    ///
    /// `pred(0)` must return `false` (true of every classifier predicate),
    /// so the loop stops at EOF without a separate bounds check.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while pred(self.current()) {
            self.pos += 1;
        }
    }

    /// Advance through (and including) the next `\r` or `\n`, or to EOF.
    ///
    /// Used by the line-comment scanner, whose token swallows the
    /// terminating newline.
    pub fn eat_through_newline(&mut self) {
        let remaining = &self.source.as_bytes()[self.pos..];
        match memchr2(b'\r', b'\n', remaining) {
            Some(offset) => self.pos += offset + 1,
            None => self.pos = self.source.len(),
        }
    }

    /// Advance past the first `*/` and return `true`, or to EOF and return
    /// `false` if the comment never closes.
    ///
    /// The caller has consumed the opening `/*`, so the position is at
    /// least two past the comment start and the byte before any candidate
    /// `/` is in bounds. The opener's own `*` counts as a terminator star,
    /// which is what makes `/*/` a complete comment.
    pub fn eat_block_close(&mut self) -> bool {
        let bytes = self.source.as_bytes();
        let mut from = self.pos;
        while let Some(offset) = memchr(b'/', &bytes[from..]) {
            let slash = from + offset;
            if bytes[slash - 1] == b'*' {
                self.pos = slash + 1;
                return true;
            }
            from = slash + 1;
        }
        self.pos = self.source.len();
        false
    }

    /// Advance past ordinary string content to the next interesting byte
    /// and return it, or `0x00` at EOF.
    ///
    /// Interesting bytes for string bodies: `"`, `\`, `\n`, `\r`.
    pub fn skip_to_string_delim(&mut self) -> u8 {
        let remaining = &self.source.as_bytes()[self.pos..];
        let primary = memchr3(b'"', b'\\', b'\n', remaining);
        let cr = memchr(b'\r', remaining);

        match earliest_of(primary, cr) {
            Some(offset) => {
                self.pos += offset;
                self.source.as_bytes()[self.pos]
            }
            None => {
                self.pos = self.source.len();
                0
            }
        }
    }
}
