//! Lexical analyzer for the Sonic programming language.
//!
//! Converts a source string into an ordered sequence of [`Token`]s, each
//! carrying its classification and the literal source substring that
//! produced it. Concatenating the contents of a successful scan reproduces
//! the input byte-for-byte, so trivia (whitespace, comments) are tokens
//! too and nothing is dropped.
//!
//! # Usage
//!
//! ```
//! use sonic_lexer::{lex, TokenKind};
//!
//! let tokens = lex("let a = 1").unwrap();
//! assert_eq!(tokens[0].kind, TokenKind::Keyword(sonic_lexer::Keyword::Let));
//! assert_eq!(tokens[0].content, "let");
//!
//! let rebuilt: String = tokens.iter().map(|t| t.content).collect();
//! assert_eq!(rebuilt, "let a = 1");
//! ```
//!
//! For streaming access, drive a [`Scanner`] directly; it also implements
//! `Iterator<Item = Result<Token, LexError>>`.
//!
//! # Errors
//!
//! Scanning stops at the first lexical error. [`LexError`] carries the
//! error kind and the byte offset of the offending character; no token
//! overlapping the failure position is produced.
//!
//! # Grammar notes
//!
//! - Identifier and whitespace classes are ASCII-only; a non-ASCII
//!   character outside a string or comment body is an error.
//! - Numeric literals absorb a directly preceding `-` into their content.
//! - A bare `&` or `!` is position-ambiguous and lexes to the dedicated
//!   [`TokenKind::Ampersand`] / [`TokenKind::Exclamation`] kinds for the
//!   parser to resolve.
//! - String interpolation admits exactly one identifier per segment.

pub mod classify;
mod cursor;
mod keywords;
mod lex_error;
mod scanner;
mod token;

pub use cursor::Cursor;
pub use lex_error::{LexError, LexErrorKind};
pub use scanner::Scanner;
pub use token::{BuiltinOperator, Keyword, Punctuation, Token, TokenKind};

/// Lex a source string into its full token sequence.
///
/// Returns every token in source order, or the first lexical error.
///
/// # Errors
///
/// Returns a [`LexError`] with the kind and byte offset of the first
/// character that cannot start or continue a valid token.
pub fn lex(source: &str) -> Result<Vec<Token<'_>>, LexError> {
    let mut scanner = Scanner::new(source);
    let mut tokens = Vec::new();
    while let Some(token) = scanner.next_token()? {
        tokens.push(token);
    }
    Ok(tokens)
}
