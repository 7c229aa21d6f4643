//! `Command` context dispatch: space-separated words and the restricted
//! `| || & && !` operator subset. The caller (`Block`) always inserts a
//! trailing semicolon after a command line, regardless of what ended it.

use super::core::Lexer;
use crate::token::TokenKind;

impl<'a> Lexer<'a> {
    /// Scans tokens in `Command` context until `close` or end of input,
    /// without consuming the terminator.
    pub(super) fn lex_command(&mut self, close: char) {
        loop {
            if self.cursor.is_at_end() {
                return;
            }
            let c = self.cursor.current_char();
            if c == '\n' {
                return;
            }
            if close != '\0' && c == close {
                return;
            }
            if c.is_whitespace() {
                self.cursor.skip_non_newline_whitespace();
                continue;
            }
            match c {
                '"' | '\'' | '`' => self.lex_string(c),
                '#' => self.lex_comment(),
                '|' | '&' | '!' => self.lex_operator_command(),
                _ => self.lex_command_word(close),
            }
        }
    }

    /// Consumes an unquoted command word: every rune up to whitespace,
    /// end of input, or the enclosing block's close brace.
    fn lex_command_word(&mut self, close: char) {
        self.mark();
        loop {
            if self.cursor.is_at_end() {
                break;
            }
            let c = self.cursor.current_char();
            if c.is_whitespace() || (close != '\0' && c == close) {
                break;
            }
            self.cursor.advance();
        }
        self.emit(TokenKind::String);
    }
}
