//! Lexical error types.
//!
//! A [`LexError`] is terminal: the scanner stops at the first one and no
//! token straddling the failure position is ever emitted. The error carries
//! the byte offset of the offending character; for errors detected at end
//! of input the offset equals the source length.
//!
//! Sub-scanner rejections ("not this token shape") are not errors — they
//! restore the cursor and hand control back to the dispatcher.

use std::error::Error;
use std::fmt;

/// A fatal lexical error with the offset where it was detected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LexError {
    /// What went wrong.
    pub kind: LexErrorKind,
    /// Byte offset of the offending character (source length for EOF).
    pub position: usize,
}

impl LexError {
    /// Create an error at the given offset.
    #[cold]
    pub fn new(kind: LexErrorKind, position: usize) -> Self {
        Self { kind, position }
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at offset {}", self.kind.message(), self.position)
    }
}

impl Error for LexError {}

/// What kind of lexical error occurred.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LexErrorKind {
    /// Input ended inside a string literal.
    UnterminatedString,
    /// Input ended inside a block comment.
    UnterminatedComment,
    /// `\` followed by a character that starts no escape sequence.
    UnexpectedStringEscape,
    /// `\u` not followed by `{`.
    EscapedUnicodeInStringMissingOpeningBrace,
    /// `\u{` not followed by a hex digit.
    EscapedUnicodeInStringMissingHexValue,
    /// A character in `\u{…` that is neither a hex digit nor `}`.
    EscapedUnicodeInStringMissingHexValueOrBrace,
    /// `\(` not followed by an identifier head.
    ExpectedIdentifierInStringInterpolation,
    /// A character in `\(ident…` that neither extends the identifier nor
    /// closes the segment.
    ExpectedIdentifierOrClosingBraceInStringInterpolation,
    /// A raw line break inside a string literal body.
    NewlineWithinString,
    /// `$` followed by neither digits nor identifier characters.
    UnexpectedCharacterAfterDollarSign,
    /// A digit-headed token that no numeric sub-scanner accepted.
    FailedParsingNumeric,
    /// A character outside every lexical class.
    UnrecognisedCharacter,
}

impl LexErrorKind {
    /// Human-readable message for this error kind.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::UnterminatedString => "unterminated string literal",
            Self::UnterminatedComment => "unterminated block comment",
            Self::UnexpectedStringEscape => "unexpected escape sequence in string literal",
            Self::EscapedUnicodeInStringMissingOpeningBrace => {
                "expected `{` after `\\u` in string literal"
            }
            Self::EscapedUnicodeInStringMissingHexValue => {
                "expected hexadecimal digits in `\\u{...}` escape"
            }
            Self::EscapedUnicodeInStringMissingHexValueOrBrace => {
                "expected hexadecimal digit or `}` in `\\u{...}` escape"
            }
            Self::ExpectedIdentifierInStringInterpolation => {
                "expected identifier in string interpolation"
            }
            Self::ExpectedIdentifierOrClosingBraceInStringInterpolation => {
                "expected identifier character or `)` in string interpolation"
            }
            Self::NewlineWithinString => "newline within string literal",
            Self::UnexpectedCharacterAfterDollarSign => "unexpected character after `$`",
            Self::FailedParsingNumeric => "failed to parse numeric literal",
            Self::UnrecognisedCharacter => "unrecognised character",
        }
    }
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
