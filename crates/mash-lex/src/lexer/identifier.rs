//! Identifier and keyword scanning inside a `Statement` or
//! `TemplateExpr`-shaped context.

use crate::token::{lookup_ident, TokenKind};
use crate::unicode::is_ident_continue;

use super::core::Lexer;

impl<'a> Lexer<'a> {
    /// Consumes an identifier-shaped word and emits either its keyword
    /// token or `IDENT`. `allow_keywords` is false inside a template
    /// expression, where a word spelled like a keyword still lexes as
    /// `IDENT`.
    pub(super) fn lex_word(&mut self, allow_keywords: bool) {
        self.mark();
        while is_ident_continue(self.cursor.current_char()) {
            self.cursor.advance();
        }
        let kind = if allow_keywords {
            lookup_ident(self.literal_text())
        } else {
            TokenKind::Ident
        };
        self.emit(kind);
    }
}

#[cfg(test)]
mod tests {
    use mash_util::diagnostic::Handler;

    use crate::lex;
    use crate::token::TokenKind::*;

    fn kinds(source: &str) -> Vec<crate::token::TokenKind> {
        let handler = Handler::new();
        lex(source, &handler).into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn plain_identifier_lexes_as_ident() {
        assert_eq!(kinds("let total\n"), vec![Let, Ident, Semicolon, Eof]);
    }

    #[test]
    fn keyword_spelled_identifier_inside_template_expr_stays_ident() {
        let ks = kinds("let s := 'x{for}y'\n");
        assert!(ks.contains(&Ident));
        assert!(!ks.iter().any(|k| *k == For));
    }

    #[test]
    fn every_keyword_is_recognized_at_the_start_of_a_line() {
        for (src, kind) in [
            ("for\n", For),
            ("if a {}\n", If),
            ("let x := 1\n", Let),
            ("func\n", Func),
            ("obj\n", Obj),
            ("break\n", Break),
            ("continue\n", Continue),
            ("return\n", Return),
        ] {
            let toks = kinds(src);
            assert_eq!(toks[0], kind, "source {src:?}");
        }
    }
}
