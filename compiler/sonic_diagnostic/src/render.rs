//! Terminal rendering of lexical errors.

use std::fmt::Write as _;
use std::io::IsTerminal;

use sonic_lexer::LexError;

use crate::context::{near_context, LineOffsetTable};

/// ANSI color codes.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const BOLD: &str = "\x1b[1m";
    pub const RESET: &str = "\x1b[0m";
}

/// Color output mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Detect from the terminal.
    #[default]
    Auto,
    /// Always emit ANSI codes.
    Always,
    /// Never emit ANSI codes.
    Never,
}

impl ColorMode {
    /// Resolve to a boolean based on terminal detection.
    pub fn should_use_colors(self) -> bool {
        match self {
            ColorMode::Auto => std::io::stderr().is_terminal(),
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Render a lexical error as a terminal report.
///
/// ```text
/// error: unterminated string literal
///  --> demo.sonic:3:9
/// near: "oops
/// ```
///
/// The `near:` line carries the source from the error offset to the end of
/// its line and is omitted when that slice is empty (errors at a line break
/// or at end of input).
pub fn render_lex_error(err: &LexError, source: &str, path: &str, mode: ColorMode) -> String {
    let colored = mode.should_use_colors();
    let table = LineOffsetTable::build(source);
    let (line, column) = table.offset_to_line_col(source, err.position);

    let mut out = String::new();
    if colored {
        let _ = writeln!(
            out,
            "{}error{}: {}{}{}",
            colors::ERROR,
            colors::RESET,
            colors::BOLD,
            err.kind.message(),
            colors::RESET,
        );
    } else {
        let _ = writeln!(out, "error: {}", err.kind.message());
    }
    let _ = writeln!(out, " --> {path}:{line}:{column}");

    let near = near_context(source, err.position);
    if !near.is_empty() {
        let _ = writeln!(out, "near: {near}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use sonic_lexer::{LexError, LexErrorKind};

    #[test]
    fn plain_report_with_near_line() {
        let source = "let x = \"oops\nmore";
        let err = LexError::new(LexErrorKind::NewlineWithinString, 13);
        // Reproduce what the lexer reports for this source
        assert_eq!(sonic_lexer::lex(source).unwrap_err(), err);

        let report = render_lex_error(&err, source, "demo.sonic", ColorMode::Never);
        assert_eq!(
            report,
            "error: newline within string literal\n --> demo.sonic:1:14\n",
        );
    }

    #[test]
    fn near_line_shows_rest_of_line() {
        let source = "let x = \"oops";
        let err = sonic_lexer::lex(source).unwrap_err();
        assert_eq!(err.kind, LexErrorKind::UnterminatedString);

        // The error sits at EOF, so point the report at the string start
        // to see the context mechanism in action.
        let report = render_lex_error(
            &LexError::new(err.kind, 8),
            source,
            "demo.sonic",
            ColorMode::Never,
        );
        assert_eq!(
            report,
            "error: unterminated string literal\n --> demo.sonic:1:9\nnear: \"oops\n",
        );
    }

    #[test]
    fn report_locates_later_lines() {
        let source = "let a = 1\nlet b = é";
        let err = sonic_lexer::lex(source).unwrap_err();
        assert_eq!(err.kind, LexErrorKind::UnrecognisedCharacter);

        let report = render_lex_error(&err, source, "demo.sonic", ColorMode::Never);
        assert_eq!(
            report,
            "error: unrecognised character\n --> demo.sonic:2:9\nnear: é\n",
        );
    }

    #[test]
    fn colored_report_wraps_the_header() {
        let source = "$";
        let err = sonic_lexer::lex(source).unwrap_err();
        let report = render_lex_error(&err, source, "demo.sonic", ColorMode::Always);
        assert!(report.starts_with("\x1b[1;31merror\x1b[0m:"));
        assert!(report.contains("demo.sonic:1:2"));
    }

    #[test]
    fn color_mode_resolution() {
        assert!(ColorMode::Always.should_use_colors());
        assert!(!ColorMode::Never.should_use_colors());
    }
}
