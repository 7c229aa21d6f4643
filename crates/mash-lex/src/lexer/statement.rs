//! `Statement` and `TemplateExpr` context dispatch.
//!
//! Both share one scanning loop — a template expression is, lexically,
//! "Statement minus keyword recognition" — so `lex_statement` and
//! `lex_template_expr` are thin entry points over a shared
//! `scan_statement_like`.

use crate::unicode::is_ident_start;

use super::core::Lexer;

impl<'a> Lexer<'a> {
    /// Scans tokens in `Statement` context until `close` (the enclosing
    /// block's terminator) or end of input, without consuming it —
    /// `Block` (or, for a nested `{`, the same routine recursively)
    /// consumes the terminator itself.
    pub(super) fn lex_statement(&mut self, close: char) {
        self.scan_statement_like(close, true);
    }

    /// Scans the body of a template interpolation, always up to `}`.
    /// Identical to `Statement` except an identifier spelled like a
    /// keyword still lexes as `IDENT`.
    pub(super) fn lex_template_expr(&mut self) {
        self.scan_statement_like('}', false);
    }

    fn scan_statement_like(&mut self, close: char, allow_keywords: bool) {
        loop {
            if self.cursor.is_at_end() {
                return;
            }
            let c = self.cursor.current_char();
            if close != '\0' && c == close {
                return;
            }

            match c {
                '\n' => {
                    if self.semi_pending() {
                        return;
                    }
                    self.cursor.advance();
                }
                c if c.is_whitespace() => {
                    if self.semi_pending() {
                        self.cursor.skip_non_newline_whitespace();
                    } else {
                        self.cursor.skip_whitespace();
                    }
                }
                '#' => self.lex_comment(),
                '{' => {
                    self.mark();
                    self.cursor.advance();
                    self.emit(crate::token::TokenKind::LBrace);
                    self.lex_block('}');
                }
                '"' | '\'' | '`' => self.lex_string(c),
                c if c.is_ascii_digit() => self.lex_number(),
                c if is_ident_start(c) => self.lex_word(allow_keywords),
                _ => self.lex_operator_statement(),
            }
        }
    }
}
