//! Character cursor for traversing source code.
//!
//! The `Cursor` maintains position state while iterating through source
//! code characters. It handles UTF-8 correctly and tracks line/column
//! information for error reporting, and supports snapshot/restore so the
//! lexer can rewind after a failed speculative lookahead (e.g. the
//! word-then-rewind dispatch in [`crate::lexer::core`]).
//!
//! # Example
//!
//! ```
//! use mash_lex::cursor::Cursor;
//!
//! let source = "let x = 42;";
//! let mut cursor = Cursor::new(source);
//!
//! assert_eq!(cursor.current_char(), 'l');
//! cursor.advance();
//! assert_eq!(cursor.current_char(), 'e');
//! ```

use mash_util::error::EncodingError;

/// A cursor for traversing source code character by character.
pub struct Cursor<'a> {
    source: &'a str,
    position: usize,
    line: u32,
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor for the given source text.
    ///
    /// # Example
    ///
    /// ```
    /// use mash_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("let x = 42;");
    /// ```
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the current character, or `'\0'` at the end of the source.
    pub fn current_char(&self) -> char {
        self.char_at(0)
    }

    /// Returns the character at `offset` bytes from the current position.
    #[inline]
    pub fn char_at(&self, offset: usize) -> char {
        let pos = self.position + offset;
        if pos >= self.source.len() {
            return '\0';
        }

        let b = self.source.as_bytes()[pos];
        if b < 128 {
            return b as char;
        }

        self.source[pos..].chars().next().unwrap_or('\0')
    }

    /// Returns the character `offset` bytes ahead of the current position.
    ///
    /// # Example
    ///
    /// ```
    /// use mash_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("abc");
    /// assert_eq!(cursor.peek_char(1), 'b');
    /// assert_eq!(cursor.peek_char(3), '\0');
    /// ```
    #[inline]
    pub fn peek_char(&self, offset: usize) -> char {
        self.char_at(offset)
    }

    /// Whether the current byte is ASCII (end-of-input counts as ASCII).
    #[inline]
    pub fn is_ascii(&self) -> bool {
        if self.position >= self.source.len() {
            return true;
        }
        self.source.as_bytes()[self.position] < 128
    }

    /// Advances one rune, updating line/column tracking on newlines.
    ///
    /// # Example
    ///
    /// ```
    /// use mash_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("ab");
    /// cursor.advance();
    /// assert_eq!(cursor.current_char(), 'b');
    /// ```
    #[inline]
    pub fn advance(&mut self) {
        if self.position >= self.source.len() {
            return;
        }

        let b = self.source.as_bytes()[self.position];
        if b < 128 {
            self.position += 1;
            if b == b'\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
            return;
        }

        if let Some(c) = self.source[self.position..].chars().next() {
            let width = c.len_utf8() as u32;
            self.position += c.len_utf8();
            // Column tracking counts bytes, not runes, so a multi-byte
            // rune advances `column` by its UTF-8 width. This mirrors the
            // source language's observable behavior rather than counting
            // user-perceived characters.
            self.column += width;
        }
    }

    /// Advances the cursor by `count` runes.
    pub fn advance_n(&mut self, count: usize) {
        for _ in 0..count {
            if self.is_at_end() {
                break;
            }
            self.advance();
        }
    }

    /// Whether the cursor has consumed the entire source.
    ///
    /// # Example
    ///
    /// ```
    /// use mash_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("a");
    /// assert!(!cursor.is_at_end());
    /// cursor.advance();
    /// assert!(cursor.is_at_end());
    /// ```
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Consumes `expected` if it is the current character.
    ///
    /// # Example
    ///
    /// ```
    /// use mash_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("=>");
    /// assert!(cursor.match_char('='));
    /// assert!(!cursor.match_char('='));
    /// ```
    pub fn match_char(&mut self, expected: char) -> bool {
        if self.current_char() == expected {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Skips whitespace runes, including newlines. Callers that need
    /// newline-sensitive skipping (statement/command context) advance
    /// manually instead of calling this.
    pub fn skip_whitespace(&mut self) {
        while !self.is_at_end() && self.current_char().is_whitespace() {
            self.advance();
        }
    }

    /// Skips non-newline whitespace only, stopping right before a `\n`.
    pub fn skip_non_newline_whitespace(&mut self) {
        while !self.is_at_end() {
            let c = self.current_char();
            if c == '\n' || !c.is_whitespace() {
                break;
            }
            self.advance();
        }
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn column(&self) -> u32 {
        self.column
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the source slice from `start` up to the current position.
    ///
    /// # Example
    ///
    /// ```
    /// use mash_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("let x");
    /// let start = cursor.position();
    /// cursor.advance_n(3);
    /// assert_eq!(cursor.slice_from(start), "let");
    /// ```
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    /// Returns the unconsumed remainder of the source.
    pub fn remaining(&self) -> &'a str {
        &self.source[self.position..]
    }

    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Snapshots the cursor state for later [`Cursor::restore`].
    ///
    /// # Example
    ///
    /// ```
    /// use mash_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("let x = 42;");
    /// let snapshot = cursor.snapshot();
    /// cursor.advance_n(3);
    /// cursor.restore(snapshot);
    /// assert_eq!(cursor.current_char(), 'l');
    /// ```
    pub fn snapshot(&self) -> CursorSnapshot {
        CursorSnapshot {
            position: self.position,
            line: self.line,
            column: self.column,
        }
    }

    pub fn restore(&mut self, snapshot: CursorSnapshot) {
        self.position = snapshot.position;
        self.line = snapshot.line;
        self.column = snapshot.column;
    }
}

/// A snapshot of cursor state that can be restored later.
#[derive(Clone, Copy, Debug)]
pub struct CursorSnapshot {
    pub position: usize,
    pub line: u32,
    pub column: u32,
}

/// Validates source text against the language's encoding rules: NUL
/// bytes are always illegal, and a byte-order mark is legal only at byte
/// offset 0.
///
/// A `&str` is already guaranteed to be valid UTF-8 by the type system, so
/// only the NUL/BOM checks apply here; a caller reading from raw bytes
/// would additionally need `str::from_utf8` (whose failure maps to
/// [`EncodingError::IllegalUtf8`]) before this runs.
pub fn validate_source(source: &str) -> Result<(), EncodingError> {
    const BOM: char = '\u{FEFF}';

    if source.contains('\0') {
        return Err(EncodingError::IllegalNul);
    }
    if let Some(pos) = source.find(BOM) {
        if pos != 0 {
            return Err(EncodingError::IllegalBom);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_cursor_starts_at_origin() {
        let cursor = Cursor::new("let x = 42;");
        assert_eq!(cursor.current_char(), 'l');
        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.line(), 1);
        assert_eq!(cursor.column(), 1);
    }

    #[test]
    fn advance_walks_ascii() {
        let mut cursor = Cursor::new("abc");
        cursor.advance();
        assert_eq!(cursor.current_char(), 'b');
        cursor.advance();
        assert_eq!(cursor.current_char(), 'c');
        cursor.advance();
        assert_eq!(cursor.current_char(), '\0');
    }

    #[test]
    fn advance_walks_utf8() {
        let mut cursor = Cursor::new("αβγ");
        assert_eq!(cursor.current_char(), 'α');
        cursor.advance();
        assert_eq!(cursor.current_char(), 'β');
        cursor.advance();
        assert_eq!(cursor.current_char(), 'γ');
    }

    #[test]
    fn peek_char_does_not_advance() {
        let cursor = Cursor::new("abc");
        assert_eq!(cursor.peek_char(0), 'a');
        assert_eq!(cursor.peek_char(2), 'c');
        assert_eq!(cursor.peek_char(100), '\0');
    }

    #[test]
    fn match_char_consumes_on_success_only() {
        let mut cursor = Cursor::new("=>");
        assert!(cursor.match_char('='));
        assert!(!cursor.match_char('='));
        assert!(cursor.match_char('>'));
    }

    #[test]
    fn skip_whitespace_crosses_newlines() {
        let mut cursor = Cursor::new("  \t\n  let");
        cursor.skip_whitespace();
        assert_eq!(cursor.current_char(), 'l');
    }

    #[test]
    fn skip_non_newline_whitespace_stops_before_newline() {
        let mut cursor = Cursor::new("  \nlet");
        cursor.skip_non_newline_whitespace();
        assert_eq!(cursor.current_char(), '\n');
    }

    #[test]
    fn line_and_column_tracking_across_newlines() {
        let mut cursor = Cursor::new("line1\nline2\nline3");
        cursor.advance_n(5);
        assert_eq!(cursor.column(), 6);
        cursor.advance();
        assert_eq!(cursor.line(), 2);
        assert_eq!(cursor.column(), 1);
    }

    #[test]
    fn multibyte_rune_advances_column_by_byte_width() {
        let mut cursor = Cursor::new("é x");
        cursor.advance();
        assert_eq!(cursor.column(), 1 + 'é'.len_utf8() as u32);
        assert_eq!(cursor.current_char(), ' ');
    }

    #[test]
    fn slice_from_returns_consumed_span() {
        let mut cursor = Cursor::new("let x");
        let start = cursor.position();
        cursor.advance_n(3);
        assert_eq!(cursor.slice_from(start), "let");
    }

    #[test]
    fn snapshot_and_restore_roundtrip() {
        let mut cursor = Cursor::new("let x = 42;");
        let snapshot = cursor.snapshot();
        cursor.advance_n(6);
        cursor.restore(snapshot);
        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.current_char(), 'l');
    }

    #[test]
    fn empty_source_is_immediately_at_end() {
        let mut cursor = Cursor::new("");
        assert!(cursor.is_at_end());
        cursor.advance();
        assert!(cursor.is_at_end());
    }

    #[test]
    fn validate_source_rejects_nul() {
        assert_eq!(validate_source("a\0b"), Err(EncodingError::IllegalNul));
    }

    #[test]
    fn validate_source_accepts_leading_bom() {
        assert!(validate_source("\u{FEFF}let x").is_ok());
    }

    #[test]
    fn validate_source_rejects_interior_bom() {
        assert_eq!(
            validate_source("let\u{FEFF}x"),
            Err(EncodingError::IllegalBom)
        );
    }

    // ---- property-based tests ------------------------------------------

    #[test]
    fn property_advance_n_matches_n_single_advances() {
        use proptest::prelude::*;

        proptest!(|(prefix_len in 0..30usize, total_len in 0..30usize)| {
            let source: String = "abcdefghijklmnopqrstuvwxyz0123456789".chars().cycle().take(total_len.max(prefix_len) + 1).collect();
            let step = prefix_len.min(source.chars().count());

            let mut stepwise = Cursor::new(&source);
            for _ in 0..step {
                stepwise.advance();
            }

            let mut bulk = Cursor::new(&source);
            bulk.advance_n(step);

            prop_assert_eq!(stepwise.position(), bulk.position());
            prop_assert_eq!(stepwise.line(), bulk.line());
            prop_assert_eq!(stepwise.column(), bulk.column());
        });
    }

    #[test]
    fn property_ascii_only_source_never_reports_illegal_bom_or_nul() {
        use proptest::prelude::*;

        proptest!(|(text in "[a-zA-Z0-9 \t\n]{0,200}")| {
            prop_assert!(validate_source(&text).is_ok());
        });
    }

    #[test]
    fn property_slice_from_reconstructs_exactly_what_was_consumed() {
        use proptest::prelude::*;

        proptest!(|(word in "[a-zA-Z]{1,20}")| {
            let mut cursor = Cursor::new(&word);
            let start = cursor.position();
            cursor.advance_n(word.chars().count());
            prop_assert_eq!(cursor.slice_from(start), word.as_str());
        });
    }
}
