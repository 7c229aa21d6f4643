//! String, raw-string, and template-string scanning.
//!
//! All three share the same quoting mechanics: scan until the matching
//! delimiter or end of input, treating an unterminated literal as
//! lexically illegal rather than halting the scanner. Escape sequences
//! are validated here (so lexical errors surface at the right position)
//! but not decoded — `Token::literal` stays the verbatim source text,
//! and turning `\n`/`\x41`/... into actual characters is the parser's
//! job (it owns the runtime string value).

use mash_util::error::LexError;

use crate::token::TokenKind;

use super::core::Lexer;

impl<'a> Lexer<'a> {
    /// Dispatches on the opening quote: `` ` `` raw, `"` interpreted, `'`
    /// template.
    pub(super) fn lex_string(&mut self, quote: char) {
        match quote {
            '`' => self.lex_raw_string(),
            '"' => self.lex_interpreted_string(),
            '\'' => self.lex_template_string(),
            _ => unreachable!("lex_string called with a non-quote rune"),
        }
    }

    fn lex_raw_string(&mut self) {
        self.mark();
        self.cursor.advance();
        loop {
            if self.cursor.is_at_end() {
                let pos = self.mark_pos;
                self.report_err(pos, LexError::UnterminatedString);
                self.emit(TokenKind::Illegal);
                return;
            }
            if self.cursor.current_char() == '`' {
                self.cursor.advance();
                self.emit(TokenKind::String);
                return;
            }
            self.cursor.advance();
        }
    }

    fn lex_interpreted_string(&mut self) {
        self.mark();
        self.cursor.advance();
        loop {
            if self.cursor.is_at_end() {
                let pos = self.mark_pos;
                self.report_err(pos, LexError::UnterminatedString);
                self.emit(TokenKind::Illegal);
                return;
            }
            match self.cursor.current_char() {
                '"' => {
                    self.cursor.advance();
                    self.emit(TokenKind::String);
                    return;
                }
                '\\' => {
                    self.cursor.advance();
                    self.scan_escape('"');
                }
                _ => self.cursor.advance(),
            }
        }
    }

    /// A template string alternates `STRING` fragments with `{ expr }`
    /// interpolations: `TEMPLATE STRING ( "{" ... "}" STRING )* TEMPLATE`.
    fn lex_template_string(&mut self) {
        self.mark();
        self.cursor.advance();
        self.emit(TokenKind::Template);

        loop {
            self.mark();
            loop {
                if self.cursor.is_at_end() {
                    let pos = self.mark_pos;
                    self.report_err(pos, LexError::UnterminatedString);
                    self.emit(TokenKind::Illegal);
                    return;
                }
                match self.cursor.current_char() {
                    '\'' | '{' => break,
                    '\\' => {
                        self.cursor.advance();
                        self.scan_escape('\'');
                    }
                    _ => self.cursor.advance(),
                }
            }
            self.emit(TokenKind::String);

            if self.cursor.current_char() == '{' {
                self.mark();
                self.cursor.advance();
                self.emit(TokenKind::LBrace);
                self.lex_template_expr();
                self.mark();
                if self.cursor.current_char() == '}' {
                    self.cursor.advance();
                    self.emit(TokenKind::RBrace);
                } else {
                    let pos = self.mark_pos;
                    self.report(pos, "missing closing brace");
                    self.emit(TokenKind::RBrace);
                }
            } else {
                self.mark();
                self.cursor.advance();
                self.emit(TokenKind::Template);
                return;
            }
        }
    }

    /// Validates one escape sequence immediately following a consumed
    /// `\`: the simple letter escapes, `\NNN` (up to three octal digits),
    /// `\xHH`, `\uHHHH`, `\UHHHHHHHH`, and `\` followed by `delim` (the
    /// enclosing quote).
    pub(super) fn scan_escape(&mut self, delim: char) {
        if self.cursor.is_at_end() {
            let pos = self.current_pos();
            self.report_err(pos, LexError::UnterminatedEscape);
            return;
        }
        let c = self.cursor.current_char();
        match c {
            'a' | 'b' | 'f' | 'n' | 'r' | 't' | 'v' | '\\' => {
                self.cursor.advance();
            }
            c if c == delim => {
                self.cursor.advance();
            }
            // `\{` escapes a literal `{` inside a template string's
            // literal portions (spec §4.2.8); harmless to accept for the
            // other delimiters too since it matches no other case there.
            '{' if delim == '\'' => {
                self.cursor.advance();
            }
            '0'..='7' => {
                for _ in 0..3 {
                    if self.cursor.is_at_end() || !('0'..='7').contains(&self.cursor.current_char())
                    {
                        let pos = self.current_pos();
                        self.report_err(pos, LexError::UnterminatedEscape);
                        return;
                    }
                    self.cursor.advance();
                }
            }
            'x' => {
                self.cursor.advance();
                self.expect_hex_digits(2);
            }
            'u' => {
                self.cursor.advance();
                self.expect_hex_digits(4);
            }
            'U' => {
                self.cursor.advance();
                self.expect_hex_digits(8);
            }
            _ => {
                let pos = self.current_pos();
                self.report_err(pos, LexError::InvalidEscape);
                self.cursor.advance();
            }
        }
    }

    fn expect_hex_digits(&mut self, n: usize) {
        for _ in 0..n {
            if self.cursor.is_at_end() || !self.cursor.current_char().is_ascii_hexdigit() {
                let pos = self.current_pos();
                self.report_err(pos, LexError::UnterminatedEscape);
                return;
            }
            self.cursor.advance();
        }
    }

    fn current_pos(&self) -> mash_util::position::Position {
        mash_util::position::Position::new(self.cursor.line(), self.cursor.column())
    }
}
