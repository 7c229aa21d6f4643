//! Error taxonomy shared by the lexer and the parser.
//!
//! The three enums mirror the orthogonal error classes the front end
//! distinguishes: byte-level encoding problems, lexical-scanning problems,
//! and grammar-level syntactic problems. None of these halts its stage —
//! they are constructed, handed to a [`crate::diagnostic::Handler`], and
//! scanning/parsing continues best-effort.

use thiserror::Error;

/// Failures in decoding the raw byte stream as UTF-8 text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EncodingError {
    #[error("illegal NUL byte")]
    IllegalNul,

    /// Never constructed by `mash-lex` itself — a `&str` source is already
    /// guaranteed valid UTF-8 by the type system. Kept for callers that
    /// decode raw bytes with `str::from_utf8` before handing them to the
    /// lexer (see `validate_source`'s doc comment) and for parity with the
    /// three-way encoding taxonomy named in the front end's error kinds.
    #[error("illegal UTF-8 sequence")]
    IllegalUtf8,

    #[error("illegal byte order mark (only valid at offset 0)")]
    IllegalBom,
}

/// Failures while scanning a well-formed character stream into tokens.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LexError {
    #[error("unterminated string literal")]
    UnterminatedString,

    #[error("unterminated escape sequence")]
    UnterminatedEscape,

    #[error("invalid escape sequence")]
    InvalidEscape,

    #[error("invalid number literal")]
    InvalidNumber,

    #[error("illegal rune {0:?}")]
    IllegalRune(char),
}

/// Failures while building the AST from an otherwise valid token stream.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("unexpected token {found}, expected one of {expected}")]
    UnexpectedToken { found: String, expected: String },

    #[error("invalid assignment target")]
    InvalidAssignmentTarget,

    #[error("missing semicolon")]
    MissingSemicolon,

    #[error("missing closing brace")]
    MissingBrace,

    #[error("missing closing bracket")]
    MissingBracket,

    #[error("missing closing parenthesis")]
    MissingParen,

    #[error("missing delimiter in list")]
    MissingDelimiter,

    /// A `NUMBER`/`STRING` token failed value materialization (spec
    /// §4.4.3) — lexically well-formed enough to tokenize, but invalid
    /// once the parser tries to decode its value (bad number base digits,
    /// a malformed escape the lexer's validation pass missed consuming
    /// in lockstep with this decode).
    #[error(transparent)]
    Lex(#[from] LexError),
}

/// The union of every error the front end can report, for call sites that
/// need one concrete type (e.g. the `Handler`'s storage).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FrontEndError {
    #[error(transparent)]
    Encoding(#[from] EncodingError),

    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}
