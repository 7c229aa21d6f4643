//! Context-sensitive lexer for the `mash` embedded scripting language.
//!
//! The same `{ ... }` spelling opens a statement block, marks a command's
//! enclosing block, or interpolates an expression inside a template
//! string, depending on which of the four scanning contexts is active
//! when it's encountered. [`context::Context`] documents the four modes;
//! [`lexer::Lexer`] implements the dispatch between them.
//!
//! # Example
//!
//! ```
//! use mash_util::diagnostic::Handler;
//! use mash_lex::lex;
//!
//! let handler = Handler::new();
//! let tokens = lex("let x := 1 + 2\n", &handler);
//!
//! assert!(!handler.has_errors());
//! assert_eq!(tokens.last().unwrap().kind, mash_lex::token::TokenKind::Eof);
//! ```

pub mod context;
pub mod cursor;
pub mod lexer;
pub mod token;
pub mod unicode;

#[cfg(test)]
mod edge_cases;

pub use context::Context;
pub use cursor::Cursor;
pub use lexer::Lexer;
pub use token::{Token, TokenKind};

use mash_util::diagnostic::Handler;

/// Lexes `source` into a flat, `EOF`-terminated token stream, reporting
/// any encoding or lexical failures to `handler`.
///
/// Lexing never halts on error: a malformed token becomes `ILLEGAL` (or,
/// for a malformed number, a `NUMBER` token whose value the parser must
/// not trust) and scanning continues from just past it. Call
/// `handler.has_errors()` after this returns to decide whether the token
/// stream is trustworthy.
pub fn lex(source: &str, handler: &Handler) -> Vec<Token> {
    Lexer::new(source, handler).tokenize()
}
