//! CLI command implementations.

use std::fs;
use std::time::Instant;

use sonic_diagnostic::{render_lex_error, ColorMode};
use sonic_lexer::{lex, Token, TokenKind};
use tracing::debug;

/// Tokenize a file and print one line per token.
pub fn lex_file(path: &str) {
    let source = read_source(path);

    let started = Instant::now();
    match lex(&source) {
        Ok(tokens) => {
            debug!(
                path,
                tokens = tokens.len(),
                elapsed = ?started.elapsed(),
                "lexed",
            );
            let mut offset = 0;
            for token in &tokens {
                println!("{offset:>6}  {:<28} {:?}", describe(token), token.content);
                offset += token.len();
            }
            println!("{} tokens, {} bytes", tokens.len(), source.len());
        }
        Err(err) => {
            debug!(path, ?err, "lexing failed");
            eprint!("{}", render_lex_error(&err, &source, path, ColorMode::Auto));
            std::process::exit(1);
        }
    }
}

/// Tokenize a file, reporting only success or failure.
pub fn check_file(path: &str) {
    let source = read_source(path);

    match lex(&source) {
        Ok(tokens) => {
            println!("ok: {} tokens", tokens.len());
        }
        Err(err) => {
            eprint!("{}", render_lex_error(&err, &source, path, ColorMode::Auto));
            std::process::exit(1);
        }
    }
}

fn read_source(path: &str) -> String {
    match fs::read_to_string(path) {
        Ok(source) => {
            debug!(path, bytes = source.len(), "read source");
            source
        }
        Err(err) => {
            eprintln!("error: cannot read {path}: {err}");
            std::process::exit(1);
        }
    }
}

/// One-line description of a token for the dump, with the payload spelled
/// out for keyword, operator, and punctuation tokens.
fn describe(token: &Token<'_>) -> String {
    match token.kind {
        TokenKind::Keyword(kw) => format!("keyword `{}`", kw.as_str()),
        TokenKind::BuiltinOperator(op) => format!("operator `{}`", op.as_str()),
        TokenKind::Punctuation(p) => format!("punctuation `{}`", p.as_str()),
        kind => kind.name().to_string(),
    }
}
