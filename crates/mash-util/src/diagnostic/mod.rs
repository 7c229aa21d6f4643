//! Diagnostic collection for the lexer and parser.
//!
//! Both stages are non-halting: whenever a token or a grammar production
//! cannot be formed, the offending stage records a [`Diagnostic`] with the
//! injected [`Handler`] and keeps going (emitting `ILLEGAL` tokens, or
//! synchronizing to the next statement boundary). A non-zero
//! [`Handler::error_count`] after the fact tells the caller that the
//! resulting token stream or AST should not be trusted.
//!
//! # Examples
//!
//! ```
//! use mash_util::diagnostic::Handler;
//! use mash_util::position::Position;
//!
//! let handler = Handler::new();
//! handler.error(Position::new(1, 5), "unexpected token");
//!
//! assert!(handler.has_errors());
//! assert_eq!(handler.error_count(), 1);
//! ```

use std::cell::RefCell;
use std::fmt;

use crate::position::Position;

/// Diagnostic severity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Error,
    Warning,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
            Level::Warning => write!(f, "warning"),
        }
    }
}

/// A single `{position, message}` diagnostic, exactly the shape the
/// external interfaces (`lex`/`parse`) hand to an injected `on_error`
/// callback.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    pub level: Level,
    pub message: String,
    pub position: Position,
}

impl Diagnostic {
    pub fn new(level: Level, position: Position, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            position,
        }
    }

    pub fn error(position: Position, message: impl Into<String>) -> Self {
        Self::new(Level::Error, position, message)
    }

    pub fn warning(position: Position, message: impl Into<String>) -> Self {
        Self::new(Level::Warning, position, message)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}: {}", self.position, self.level, self.message)
    }
}

/// Collects diagnostics emitted by the lexer and/or the parser.
///
/// A single `Handler` may be shared between both stages (it only requires
/// `&self`, via interior mutability) so a caller can run `lex` and `parse`
/// against the same error sink and read one combined `error_count` at the
/// end.
pub struct Handler {
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    pub fn new() -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
        }
    }

    /// Records an error at `position`.
    pub fn error(&self, position: Position, message: impl Into<String>) {
        self.emit(Diagnostic::error(position, message));
    }

    /// Records a warning at `position`.
    pub fn warning(&self, position: Position, message: impl Into<String>) {
        self.emit(Diagnostic::warning(position, message));
    }

    pub fn emit(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .borrow()
            .iter()
            .any(|d| d.level == Level::Error)
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level == Level::Error)
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level == Level::Warning)
            .count()
    }

    /// Returns a snapshot of every diagnostic recorded so far, in emission
    /// order.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    pub fn clear(&self) {
        self.diagnostics.borrow_mut().clear();
    }
}

impl Default for Handler {
    fn default() -> Self {
        Self::new()
    }
}
