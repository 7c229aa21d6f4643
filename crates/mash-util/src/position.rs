//! Source position tracking.
//!
//! A `Position` is a 1-indexed `{line, col}` pair. Both the lexer and the
//! parser stamp every token and AST node with one, so diagnostics can point
//! at an exact spot in the original source text.

use std::fmt;

/// A line/column location in a source file, both 1-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: u32,
    pub col: u32,
}

impl Position {
    /// The position of the very first byte of a source file.
    pub const START: Position = Position { line: 1, col: 1 };

    pub fn new(line: u32, col: u32) -> Self {
        Self { line, col }
    }

    /// Advances the column by `width` bytes. Used for every consumed rune
    /// that is not a line feed; width is the rune's UTF-8 byte length, so a
    /// multi-byte rune advances `col` by more than one (this mirrors the
    /// source language's observable behavior rather than counting runes).
    pub fn advance(&mut self, width: u32) {
        self.col += width;
    }

    /// Moves to the start of the next line.
    pub fn newline(&mut self) {
        self.line += 1;
        self.col = 1;
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}
