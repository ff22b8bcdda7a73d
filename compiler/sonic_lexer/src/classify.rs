//! ASCII character classes for the Sonic lexical grammar.
//!
//! Every predicate here takes a raw byte. Non-ASCII bytes (`0x80..`) belong
//! to no class, so multi-byte UTF-8 sequences fall through the scanner's
//! dispatch and are rejected unless they sit inside a string or comment body.
//! The `0x00` byte also belongs to no class, which lets the cursor's EOF
//! sentinel terminate every `eat_while` loop without an explicit bounds check.
//!
//! Hot classes (identifier continuation, operator runs, literal bodies) use
//! 256-entry lookup tables built in const context; a single indexed read
//! replaces a multi-range `matches!` in the scanner's inner loops.

/// Build a 256-entry table from a const predicate.
macro_rules! byte_table {
    ($pred:expr) => {{
        let mut table = [false; 256];
        let mut i = 0usize;
        while i < 256 {
            table[i] = $pred(i as u8);
            i += 1;
        }
        table
    }};
}

const fn ident_continue_pred(b: u8) -> bool {
    matches!(b, b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'_')
}

const fn operator_pred(b: u8) -> bool {
    // §4.2 operator characters, plus `.` so that the `...` and `..<`
    // builtin spellings form a single run (a lone `.` resolves back to
    // punctuation in the scanner's post-processing).
    matches!(
        b,
        b'/' | b'='
            | b'-'
            | b'+'
            | b'!'
            | b'*'
            | b'%'
            | b'<'
            | b'>'
            | b'&'
            | b'|'
            | b'^'
            | b'~'
            | b'?'
            | b'.'
    )
}

const fn decimal_continue_pred(b: u8) -> bool {
    matches!(b, b'0'..=b'9' | b'_')
}

const fn hex_continue_pred(b: u8) -> bool {
    matches!(b, b'0'..=b'9' | b'a'..=b'f' | b'A'..=b'F' | b'_')
}

static IS_IDENT_CONTINUE: [bool; 256] = byte_table!(ident_continue_pred);
static IS_OPERATOR: [bool; 256] = byte_table!(operator_pred);
static IS_DECIMAL_CONTINUE: [bool; 256] = byte_table!(decimal_continue_pred);
static IS_HEX_CONTINUE: [bool; 256] = byte_table!(hex_continue_pred);

/// Space, tab, carriage return, or line feed.
#[inline]
pub fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\r' | b'\n')
}

/// Carriage return or line feed.
#[inline]
pub fn is_newline(b: u8) -> bool {
    matches!(b, b'\r' | b'\n')
}

/// `0-9`.
#[inline]
pub fn is_decimal_digit(b: u8) -> bool {
    b.is_ascii_digit()
}

/// `0-9`, `a-f`, `A-F`.
#[inline]
pub fn is_hex_digit(b: u8) -> bool {
    b.is_ascii_hexdigit()
}

/// `0` or `1`.
#[inline]
pub fn is_binary_digit(b: u8) -> bool {
    matches!(b, b'0' | b'1')
}

/// First character of an identifier: `a-z`, `A-Z`, `_`.
#[inline]
pub fn is_ident_start(b: u8) -> bool {
    matches!(b, b'a'..=b'z' | b'A'..=b'Z' | b'_')
}

/// Subsequent identifier character: identifier start plus decimal digits.
#[inline]
pub fn is_ident_continue(b: u8) -> bool {
    IS_IDENT_CONTINUE[b as usize]
}

/// A character that extends an operator run.
#[inline]
pub fn is_operator_char(b: u8) -> bool {
    IS_OPERATOR[b as usize]
}

/// A character that forms a single-character punctuation token when it
/// reaches the punctuation arm of the dispatch. Overlapping characters
/// (`=`, `!`, `&`, and the run-extending `.`) are claimed first by the
/// operator arm, so only the pure structural characters arrive here.
#[inline]
pub fn is_punctuation_char(b: u8) -> bool {
    matches!(
        b,
        b'(' | b')'
            | b'{'
            | b'}'
            | b'['
            | b']'
            | b'.'
            | b','
            | b':'
            | b';'
            | b'@'
            | b'#'
            | b'`'
            | b'='
            | b'!'
            | b'&'
    )
}

/// Body character of a decimal literal: digit or `_`.
#[inline]
pub fn is_decimal_continue(b: u8) -> bool {
    IS_DECIMAL_CONTINUE[b as usize]
}

/// Body character of a hexadecimal literal: hex digit or `_`.
#[inline]
pub fn is_hex_continue(b: u8) -> bool {
    IS_HEX_CONTINUE[b as usize]
}

/// Body character of a binary literal: `0`, `1`, or `_`.
#[inline]
pub fn is_binary_continue(b: u8) -> bool {
    matches!(b, b'0' | b'1' | b'_')
}
