//! Diagnostic rendering for Sonic lexical errors.
//!
//! The lexer reports the first error as a `(kind, offset)` pair; this crate
//! turns that into something a human can act on:
//!
//! - [`LineOffsetTable`] maps a byte offset to a 1-based line and
//!   character column,
//! - [`near_context`] extracts the source slice from the error offset up to
//!   (but not including) the next line break — the "near:" line,
//! - [`render_lex_error`] assembles the final report.

mod context;
mod render;

pub use context::{near_context, LineOffsetTable};
pub use render::{render_lex_error, ColorMode};
