//! Line comment scanning: `#` to end of line (or end of input).

use super::core::Lexer;

impl<'a> Lexer<'a> {
    pub(super) fn lex_comment(&mut self) {
        self.mark();
        self.cursor.advance();
        while !self.cursor.is_at_end() && self.cursor.current_char() != '\n' {
            self.cursor.advance();
        }
        self.emit_comment();
    }
}
