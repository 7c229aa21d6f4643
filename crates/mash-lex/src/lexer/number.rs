//! Number literal scanning.
//!
//! Emits a single `NUMBER` token carrying the verbatim source text
//! (including its base prefix and any `_` separators); turning that text
//! into an actual value is the parser's job, since the value's meaning
//! (which base, whether it has a fractional part) depends on the exact
//! spelling recorded here.

use mash_util::error::LexError;

use crate::token::TokenKind;
use crate::unicode::is_digit_in_base;

use super::core::Lexer;

impl<'a> Lexer<'a> {
    /// Scans a number literal starting at the current position (which
    /// must be a decimal digit).
    ///
    /// Base is selected by prefix: `0b`/`0B` binary, `0o`/`0O` octal,
    /// `0x`/`0X` hex, a bare leading `0` octal, anything else decimal.
    /// `_` is accepted between digits and dropped from the recorded
    /// value by the parser, not here. A fractional part and exponent are
    /// only recognized for base 10 (`e`/`E`) and base 16 (`p`/`P`),
    /// matching the source language's hex-float spelling.
    pub(super) fn lex_number(&mut self) {
        self.mark();
        let mut base = 10u32;

        if self.cursor.current_char() == '0' {
            match self.cursor.peek_char(1) {
                'b' | 'B' => {
                    base = 2;
                    self.cursor.advance();
                    self.cursor.advance();
                }
                'o' | 'O' => {
                    base = 8;
                    self.cursor.advance();
                    self.cursor.advance();
                }
                'x' | 'X' => {
                    base = 16;
                    self.cursor.advance();
                    self.cursor.advance();
                }
                _ => base = 8,
            }
        }

        let mut saw_digit = false;
        loop {
            let c = self.cursor.current_char();
            if c == '_' {
                self.cursor.advance();
                continue;
            }
            if is_digit_in_base(c, base) {
                saw_digit = true;
                self.cursor.advance();
            } else {
                break;
            }
        }

        if !saw_digit {
            let pos = self.mark_pos;
            self.report_err(pos, LexError::InvalidNumber);
            self.emit(TokenKind::Number);
            return;
        }

        if base == 10 || base == 16 {
            if self.cursor.current_char() == '.' {
                self.cursor.advance();
                loop {
                    let c = self.cursor.current_char();
                    if c == '_' || is_digit_in_base(c, base) {
                        self.cursor.advance();
                    } else {
                        break;
                    }
                }
            }

            let (exp_lower, exp_upper) = if base == 10 { ('e', 'E') } else { ('p', 'P') };
            let c = self.cursor.current_char();
            if c == exp_lower || c == exp_upper {
                self.cursor.advance();
                if matches!(self.cursor.current_char(), '+' | '-') {
                    self.cursor.advance();
                }
                let mut saw_exp_digit = false;
                while self.cursor.current_char().is_ascii_digit() {
                    saw_exp_digit = true;
                    self.cursor.advance();
                }
                if !saw_exp_digit {
                    let pos = self.mark_pos;
                    self.report_err(pos, LexError::InvalidNumber);
                }
            }
        }

        self.emit(TokenKind::Number);
    }
}

#[cfg(test)]
mod tests {
    use mash_util::diagnostic::Handler;

    use crate::lex;

    fn literals(source: &str) -> Vec<String> {
        let handler = Handler::new();
        lex(source, &handler)
            .into_iter()
            .filter(|t| t.kind == crate::token::TokenKind::Number)
            .map(|t| t.literal)
            .collect()
    }

    #[test]
    fn decimal_integer() {
        assert_eq!(literals("let x := 42\n"), vec!["42"]);
    }

    #[test]
    fn hex_with_underscore_separator() {
        assert_eq!(literals("let x := 0x1_A\n"), vec!["0x1_A"]);
    }

    #[test]
    fn binary_literal() {
        assert_eq!(literals("let x := 0b1010\n"), vec!["0b1010"]);
    }

    #[test]
    fn bare_leading_zero_is_preserved_verbatim() {
        // Base selection (octal for a bare leading zero) happens at
        // materialization time in the parser; the lexer just records the
        // digits it saw.
        assert_eq!(literals("let x := 0755\n"), vec!["0755"]);
    }

    #[test]
    fn decimal_float_with_exponent() {
        assert_eq!(literals("let x := 3.14e2\n"), vec!["3.14e2"]);
    }

    #[test]
    fn hex_float_with_p_exponent() {
        assert_eq!(literals("let x := 0x1.8p3\n"), vec!["0x1.8p3"]);
    }

    #[test]
    fn incomplete_base_prefix_reports_error_but_still_emits_a_token() {
        let handler = Handler::new();
        let toks = lex("let x := 0x\n", &handler);
        assert!(handler.has_errors());
        assert!(toks.iter().any(|t| t.kind == crate::token::TokenKind::Number));
    }

    // ---- property-based tests ------------------------------------------

    #[test]
    fn property_arbitrary_decimal_digit_strings_lex_to_one_clean_number() {
        use proptest::prelude::*;

        proptest!(|(digits in "[1-9][0-9]{0,8}")| {
            let source = format!("let x := {digits}\n");
            let handler = Handler::new();
            let toks = lex(&source, &handler);
            assert!(!handler.has_errors());
            let numbers = literals(&source);
            assert_eq!(numbers, vec![digits]);
            prop_assert!(toks.iter().any(|t| t.kind == crate::token::TokenKind::Number));
        });
    }

    #[test]
    fn property_arbitrary_hex_digit_strings_lex_with_base_prefix_intact() {
        use proptest::prelude::*;

        proptest!(|(digits in "[0-9a-fA-F]{1,12}")| {
            let source = format!("let x := 0x{digits}\n");
            let numbers = literals(&source);
            prop_assert_eq!(numbers, vec![format!("0x{digits}")]);
        });
    }

    #[test]
    fn property_underscore_separators_never_change_the_recorded_digits() {
        use proptest::prelude::*;

        proptest!(|(digits in "[1-9][0-9]{0,6}")| {
            let spaced: String = digits.chars().collect::<Vec<_>>()
                .chunks(2)
                .map(|c| c.iter().collect::<String>())
                .collect::<Vec<_>>()
                .join("_");
            let source = format!("let x := {spaced}\n");
            let numbers = literals(&source);
            prop_assert_eq!(numbers, vec![spaced]);
        });
    }
}
