//! Hand-written token scanner.
//!
//! The scanner walks the source left to right with a [`Cursor`] and
//! dispatches on the first byte of each token to a focused sub-scanner.
//! A sub-scanner either produces a token, rejects ("not this shape") after
//! restoring the cursor to where it started probing, or fails the whole
//! scan with a [`LexError`]. The first error is terminal.
//!
//! # Dispatch
//!
//! First match wins:
//!
//! 1. whitespace → whitespace run
//! 2. `/` → comment, falling back to an operator run with `/` as its head
//! 3. identifier head → identifier or keyword
//! 4. `$` → implicit parameter name, then property wrapper projection
//! 5. `-` → signed numeric literal, falling back to operator/punctuation
//! 6. decimal digit → numeric literal
//! 7. `"` → string literal
//! 8. operator character → operator run
//! 9. structural punctuation → single-character symbol
//! 10. anything else → `UnrecognisedCharacter`

use crate::classify;
use crate::cursor::Cursor;
use crate::keywords;
use crate::lex_error::{LexError, LexErrorKind};
use crate::token::{BuiltinOperator, Punctuation, Token, TokenKind};

/// Streaming tokenizer over a single source string.
///
/// Produces one token per [`next_token()`](Self::next_token) call; holds no
/// state beyond the cursor, so two scanners over independent inputs never
/// interact.
pub struct Scanner<'src> {
    cursor: Cursor<'src>,
    /// Set after an error; subsequent calls report end of input.
    failed: bool,
}

impl<'src> Scanner<'src> {
    /// Create a scanner positioned at the start of `source`.
    pub fn new(source: &'src str) -> Self {
        Self {
            cursor: Cursor::new(source),
            failed: false,
        }
    }

    /// Produce the next token, `Ok(None)` at end of input, or the first
    /// lexical error.
    ///
    /// The error is reported once; after that the scanner behaves as if
    /// the input had ended at the failure position.
    pub fn next_token(&mut self) -> Result<Option<Token<'src>>, LexError> {
        if self.failed {
            return Ok(None);
        }
        let result = self.dispatch();
        if result.is_err() {
            self.failed = true;
        }
        result
    }

    /// Root dispatch on the first byte of the next token.
    fn dispatch(&mut self) -> Result<Option<Token<'src>>, LexError> {
        let start = self.cursor.pos();
        match self.cursor.current() {
            0 if self.cursor.is_eof() => Ok(None),
            b if classify::is_whitespace(b) => Ok(Some(self.whitespace(start))),
            b'/' => self.slash(start).map(Some),
            b if classify::is_ident_start(b) => Ok(Some(self.identifier_or_keyword(start))),
            b'$' => self.dollar(start).map(Some),
            b'-' => Ok(Some(self.minus(start))),
            b if classify::is_decimal_digit(b) => self.number(start).map(Some),
            b'"' => self.string(start).map(Some),
            b if classify::is_operator_char(b) => Ok(Some(self.operator_or_punctuation(start))),
            b => match Punctuation::from_byte(b) {
                Some(p) => {
                    self.cursor.advance();
                    Ok(Some(self.token(TokenKind::Punctuation(p), start)))
                }
                None => Err(LexError::new(LexErrorKind::UnrecognisedCharacter, start)),
            },
        }
    }

    /// Build a token whose content spans `start` to the current position.
    fn token(&self, kind: TokenKind, start: usize) -> Token<'src> {
        Token::new(kind, self.cursor.slice_from(start))
    }

    // ─── Whitespace ──────────────────────────────────────────────────────

    fn whitespace(&mut self, start: usize) -> Token<'src> {
        self.cursor.eat_while(classify::is_whitespace);
        self.token(TokenKind::Whitespace, start)
    }

    // ─── Comments ────────────────────────────────────────────────────────

    /// `/` dispatch: line comment, block comment, or an operator run with
    /// the slash as its head.
    fn slash(&mut self, start: usize) -> Result<Token<'src>, LexError> {
        self.cursor.advance(); // consume '/'
        match self.cursor.current() {
            b'/' => {
                self.cursor.advance();
                // The token swallows the terminating newline.
                self.cursor.eat_through_newline();
                Ok(self.token(TokenKind::Comment, start))
            }
            b'*' => {
                self.cursor.advance();
                // The opener's `*` counts as a terminator star: `/*/` is
                // a complete comment.
                if self.cursor.eat_block_close() {
                    Ok(self.token(TokenKind::Comment, start))
                } else {
                    Err(LexError::new(
                        LexErrorKind::UnterminatedComment,
                        self.cursor.pos(),
                    ))
                }
            }
            _ => Ok(self.operator_or_punctuation(start)),
        }
    }

    // ─── Identifiers & Keywords ──────────────────────────────────────────

    fn identifier_or_keyword(&mut self, start: usize) -> Token<'src> {
        self.cursor.advance(); // consume head (already validated)
        self.cursor.eat_while(classify::is_ident_continue);
        let text = self.cursor.slice_from(start);
        let kind = match keywords::lookup(text) {
            Some(kw) => TokenKind::Keyword(kw),
            None => TokenKind::Identifier,
        };
        Token::new(kind, text)
    }

    // ─── Dollar-prefixed forms ───────────────────────────────────────────

    /// `$` dispatch: implicit parameter name (`$0`), then property wrapper
    /// projection (`$wrapped`). Both probes start from the byte after `$`;
    /// a failed probe consumes nothing, so the second re-observes the same
    /// byte.
    fn dollar(&mut self, start: usize) -> Result<Token<'src>, LexError> {
        self.cursor.advance(); // consume '$'
        let mark = self.cursor.pos();

        self.cursor.eat_while(classify::is_decimal_digit);
        if self.cursor.pos() > mark {
            return Ok(self.token(TokenKind::ImplicitParameterName, start));
        }

        self.cursor.eat_while(classify::is_ident_continue);
        if self.cursor.pos() > mark {
            return Ok(self.token(TokenKind::PropertyWrapperProjection, start));
        }

        Err(LexError::new(
            LexErrorKind::UnexpectedCharacterAfterDollarSign,
            mark,
        ))
    }

    // ─── Numeric Literals ────────────────────────────────────────────────

    /// `-` dispatch: signed numeric literal, else an operator run with the
    /// minus as its head.
    fn minus(&mut self, start: usize) -> Token<'src> {
        self.cursor.advance(); // consume '-'
        match self.numeric_body() {
            Some(kind) => self.token(kind, start),
            None => self.operator_or_punctuation(start),
        }
    }

    /// Digit dispatch: one of the numeric sub-scanners must accept.
    fn number(&mut self, start: usize) -> Result<Token<'src>, LexError> {
        match self.numeric_body() {
            Some(kind) => Ok(self.token(kind, start)),
            None => Err(LexError::new(LexErrorKind::FailedParsingNumeric, start)),
        }
    }

    /// Try the numeric shapes in order: binary, hex, decimal-or-float.
    /// Rejecting probes restore the cursor before the next one runs.
    fn numeric_body(&mut self) -> Option<TokenKind> {
        self.try_binary()
            .or_else(|| self.try_hex())
            .or_else(|| self.try_decimal_or_float())
    }

    /// `0b` + binary digit + `[01_]*`.
    fn try_binary(&mut self) -> Option<TokenKind> {
        let saved = self.cursor;
        if self.cursor.current() == b'0' && self.cursor.peek() == b'b' {
            self.cursor.advance_n(2);
            if classify::is_binary_digit(self.cursor.current()) {
                self.cursor.eat_while(classify::is_binary_continue);
                return Some(TokenKind::BinaryLiteral);
            }
        }
        self.cursor = saved;
        None
    }

    /// `0x` + hex digit + `[0-9a-fA-F_]*`.
    fn try_hex(&mut self) -> Option<TokenKind> {
        let saved = self.cursor;
        if self.cursor.current() == b'0' && self.cursor.peek() == b'x' {
            self.cursor.advance_n(2);
            if classify::is_hex_digit(self.cursor.current()) {
                self.cursor.eat_while(classify::is_hex_continue);
                return Some(TokenKind::HexadecimalLiteral);
            }
        }
        self.cursor = saved;
        None
    }

    /// Digit + `[0-9_]*`, switching to float lexing at a `.`.
    fn try_decimal_or_float(&mut self) -> Option<TokenKind> {
        if !classify::is_decimal_digit(self.cursor.current()) {
            return None;
        }
        self.cursor.advance();
        self.cursor.eat_while(classify::is_decimal_continue);
        if self.cursor.current() == b'.' {
            self.cursor.advance();
            self.float_tail();
            Some(TokenKind::FloatLiteral)
        } else {
            Some(TokenKind::DecimalLiteral)
        }
    }

    /// Fraction and exponent after the `.` of a float literal.
    ///
    /// Infallible: any unexpected byte ends the literal with whatever has
    /// been consumed, so degenerate forms like `0.` and `1.2e` lex as
    /// complete float tokens.
    fn float_tail(&mut self) {
        // Fraction head: a digit, or the literal ends at the dot.
        if !classify::is_decimal_digit(self.cursor.current()) {
            return;
        }
        self.cursor.eat_while(classify::is_decimal_continue);

        // Exponent marker.
        if !matches!(self.cursor.current(), b'e' | b'E') {
            return;
        }
        self.cursor.advance();

        // Optional sign, then at least one digit or the literal ends.
        match self.cursor.current() {
            b'+' | b'-' => {
                self.cursor.advance();
                if !classify::is_decimal_digit(self.cursor.current()) {
                    return;
                }
            }
            b if classify::is_decimal_digit(b) => {}
            _ => return,
        }
        self.cursor.eat_while(classify::is_decimal_continue);
    }

    // ─── String Literals ─────────────────────────────────────────────────

    /// Double-quoted string with escapes and `\(identifier)` interpolation.
    fn string(&mut self, start: usize) -> Result<Token<'src>, LexError> {
        self.cursor.advance(); // consume opening '"'
        let mut interpolated = false;
        loop {
            match self.cursor.skip_to_string_delim() {
                b'"' => {
                    self.cursor.advance();
                    let kind = if interpolated {
                        TokenKind::InterpolatedStringLiteral
                    } else {
                        TokenKind::StaticStringLiteral
                    };
                    return Ok(self.token(kind, start));
                }
                b'\\' => {
                    self.cursor.advance();
                    self.string_escape(&mut interpolated)?;
                }
                b'\n' | b'\r' => {
                    return Err(LexError::new(
                        LexErrorKind::NewlineWithinString,
                        self.cursor.pos(),
                    ));
                }
                0 => {
                    return Err(LexError::new(
                        LexErrorKind::UnterminatedString,
                        self.cursor.pos(),
                    ));
                }
                _ => unreachable!("skip_to_string_delim returned unexpected byte"),
            }
        }
    }

    /// One escape sequence, entered after the backslash.
    fn string_escape(&mut self, interpolated: &mut bool) -> Result<(), LexError> {
        self.string_eof_check()?;
        match self.cursor.current() {
            b'0' | b'\\' | b't' | b'n' | b'r' | b'"' | b'\'' => {
                self.cursor.advance();
                Ok(())
            }
            b'u' => {
                self.cursor.advance();
                self.unicode_escape()
            }
            b'(' => {
                self.cursor.advance();
                self.interpolation_segment(interpolated)
            }
            _ => Err(LexError::new(
                LexErrorKind::UnexpectedStringEscape,
                self.cursor.pos(),
            )),
        }
    }

    /// `\u{hex…}`, entered after the `u`.
    fn unicode_escape(&mut self) -> Result<(), LexError> {
        self.string_eof_check()?;
        if self.cursor.current() != b'{' {
            return Err(LexError::new(
                LexErrorKind::EscapedUnicodeInStringMissingOpeningBrace,
                self.cursor.pos(),
            ));
        }
        self.cursor.advance();

        self.string_eof_check()?;
        if !classify::is_hex_digit(self.cursor.current()) {
            return Err(LexError::new(
                LexErrorKind::EscapedUnicodeInStringMissingHexValue,
                self.cursor.pos(),
            ));
        }
        self.cursor.eat_while(classify::is_hex_digit);

        self.string_eof_check()?;
        if self.cursor.current() != b'}' {
            return Err(LexError::new(
                LexErrorKind::EscapedUnicodeInStringMissingHexValueOrBrace,
                self.cursor.pos(),
            ));
        }
        self.cursor.advance();
        Ok(())
    }

    /// `\(identifier)`, entered after the `(`. A single identifier only —
    /// no spaces, no nesting, no expressions.
    fn interpolation_segment(&mut self, interpolated: &mut bool) -> Result<(), LexError> {
        self.string_eof_check()?;
        if !classify::is_ident_start(self.cursor.current()) {
            return Err(LexError::new(
                LexErrorKind::ExpectedIdentifierInStringInterpolation,
                self.cursor.pos(),
            ));
        }
        self.cursor.eat_while(classify::is_ident_continue);

        self.string_eof_check()?;
        if self.cursor.current() != b')' {
            return Err(LexError::new(
                LexErrorKind::ExpectedIdentifierOrClosingBraceInStringInterpolation,
                self.cursor.pos(),
            ));
        }
        self.cursor.advance();
        *interpolated = true;
        Ok(())
    }

    /// End of input inside a string literal fails the scan regardless of
    /// which escape state the machine is in.
    fn string_eof_check(&self) -> Result<(), LexError> {
        if self.cursor.is_eof() {
            Err(LexError::new(
                LexErrorKind::UnterminatedString,
                self.cursor.pos(),
            ))
        } else {
            Ok(())
        }
    }

    // ─── Operators & Punctuation ─────────────────────────────────────────

    /// Greedy operator run, then spelling resolution.
    ///
    /// The head may already be consumed (the `/` and `-` fallbacks) or not
    /// (direct dispatch); either way the run is maximal from `start`.
    fn operator_or_punctuation(&mut self, start: usize) -> Token<'src> {
        self.cursor.eat_while(classify::is_operator_char);
        let text = self.cursor.slice_from(start);
        let kind = match text {
            // Position-ambiguous singletons — the parser decides.
            "&" => TokenKind::Ampersand,
            "!" => TokenKind::Exclamation,
            // Punctuation-and-operator overlap: these bind as punctuation
            // when the whole run equals them.
            "->" => TokenKind::Punctuation(Punctuation::Arrow),
            "=" => TokenKind::Punctuation(Punctuation::Equal),
            "?" => TokenKind::Punctuation(Punctuation::Question),
            "." => TokenKind::Punctuation(Punctuation::Dot),
            _ => match BuiltinOperator::lookup(text) {
                Some(op) => TokenKind::BuiltinOperator(op),
                None => TokenKind::CustomOperator,
            },
        };
        Token::new(kind, text)
    }
}

impl<'src> Iterator for Scanner<'src> {
    type Item = Result<Token<'src>, LexError>;

    /// Yields tokens, then one `Err` on failure, then fuses.
    fn next(&mut self) -> Option<Self::Item> {
        match self.next_token() {
            Ok(Some(token)) => Some(Ok(token)),
            Ok(None) => None,
            Err(err) => Some(Err(err)),
        }
    }
}
