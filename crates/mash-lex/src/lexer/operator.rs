//! Operator, delimiter and punctuation scanning for the `Statement` and
//! `Command` contexts' disjoint operator sets.

use mash_util::error::LexError;

use crate::token::TokenKind;
use crate::token::TokenKind::*;

use super::core::Lexer;

impl<'a> Lexer<'a> {
    /// Scans one operator or delimiter token from the full statement-level
    /// set: every arithmetic/bitwise/comparison/assignment operator plus
    /// `( ) [ ] , : ; .` A composite spelling is chosen by one rune of
    /// lookahead (`+` followed by `=` is `PlusAssign`, and so on).
    pub(super) fn lex_operator_statement(&mut self) {
        self.mark();
        let c = self.cursor.current_char();
        self.cursor.advance();

        let kind = match c {
            '+' => self.choose('=', PlusAssign, Plus),
            '-' => self.choose('=', MinusAssign, Minus),
            '*' => self.choose('=', StarAssign, Star),
            '/' => self.choose('=', SlashAssign, Slash),
            '%' => self.choose('=', PercentAssign, Percent),
            '^' => self.choose('=', CaretAssign, Caret),
            '&' => {
                if self.cursor.match_char('&') {
                    Land
                } else if self.cursor.match_char('^') {
                    self.choose('=', AndNotAssign, AndNot)
                } else {
                    self.choose('=', AmpAssign, Amp)
                }
            }
            '|' => {
                if self.cursor.match_char('|') {
                    Lor
                } else {
                    self.choose('=', PipeAssign, Pipe)
                }
            }
            '<' => {
                if self.cursor.match_char('<') {
                    self.choose('=', ShlAssign, Shl)
                } else {
                    self.choose('=', Le, Lt)
                }
            }
            '>' => {
                if self.cursor.match_char('>') {
                    self.choose('=', ShrAssign, Shr)
                } else {
                    self.choose('=', Ge, Gt)
                }
            }
            '=' => self.choose('=', Eq, Assign),
            '!' => self.choose('=', Neq, Not),
            ':' => self.choose('=', Define, Colon),
            '(' => LParen,
            ')' => RParen,
            '[' => LBracket,
            ']' => RBracket,
            ',' => Comma,
            ';' => Semicolon,
            '.' => Dot,
            other => {
                let pos = self.mark_pos;
                self.report_err(pos, LexError::IllegalRune(other));
                Illegal
            }
        };
        self.emit(kind);
    }

    /// Scans one operator token from the restricted command-level set:
    /// `| || & && !`. Unlike the statement set, `!` never pairs with `=`
    /// here — `!=` has no meaning as a command operator.
    pub(super) fn lex_operator_command(&mut self) {
        self.mark();
        let c = self.cursor.current_char();
        self.cursor.advance();

        let kind = match c {
            '|' => {
                if self.cursor.match_char('|') {
                    Lor
                } else {
                    Pipe
                }
            }
            '&' => {
                if self.cursor.match_char('&') {
                    Land
                } else {
                    Amp
                }
            }
            '!' => Not,
            other => {
                let pos = self.mark_pos;
                self.report_err(pos, LexError::IllegalRune(other));
                Illegal
            }
        };
        self.emit(kind);
    }

    fn choose(&mut self, expect: char, if_match: TokenKind, otherwise: TokenKind) -> TokenKind {
        if self.cursor.match_char(expect) {
            if_match
        } else {
            otherwise
        }
    }
}
