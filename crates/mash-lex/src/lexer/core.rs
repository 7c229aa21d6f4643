//! Lexer driver: scan primitives, token emission, and the `Block` context
//! dispatch (entry point at top level and after a statement-context `{`).

use mash_util::diagnostic::Handler;
use mash_util::error::LexError;
use mash_util::position::Position;

use crate::cursor::{validate_source, Cursor};
use crate::token::{lookup_ident, is_keyword, Token, TokenKind};
use crate::unicode::{is_ident_continue, is_ident_start};

/// Scans a source string into a token stream.
///
/// A `Lexer` is single-use: construct one with [`Lexer::new`] and consume
/// it with [`Lexer::tokenize`]. Internally it runs the context dispatch of
/// `lex_block`/`lex_statement`/`lex_command` eagerly and hands back the
/// resulting token vector — tokens are produced in source order and the
/// vector always ends with one `EOF` token, satisfying the same
/// "ordered, EOF-terminated" contract a pull-based iterator would.
pub struct Lexer<'a> {
    pub(super) cursor: Cursor<'a>,
    pub(super) handler: &'a Handler,
    pub(super) tokens: Vec<Token>,
    pub(super) mark_at: usize,
    pub(super) mark_pos: Position,
    /// The kind of the most recently emitted token, driving automatic
    /// semicolon insertion (spec'd as a scalar, not derived from the
    /// buffered token list).
    pub(super) last_kind: Option<TokenKind>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str, handler: &'a Handler) -> Self {
        Self {
            cursor: Cursor::new(source),
            handler,
            tokens: Vec::new(),
            mark_at: 0,
            mark_pos: Position::START,
            last_kind: None,
        }
    }

    /// Runs the scanner to completion and returns every token produced,
    /// the last of which has kind `EOF`.
    pub fn tokenize(mut self) -> Vec<Token> {
        if let Err(err) = validate_source(self.cursor.source()) {
            self.handler.error(Position::START, err.to_string());
        }
        self.lex_block('\0');
        self.tokens
    }

    // --- scan primitives (spec's peek/consume/literal/ignore/emit) ---

    /// Pins the start-of-token cursor at the current read position.
    pub(super) fn mark(&mut self) {
        self.mark_at = self.cursor.position();
        self.mark_pos = Position::new(self.cursor.line(), self.cursor.column());
    }

    /// The substring from the last `mark()` to the current read cursor.
    pub(super) fn literal_text(&self) -> &'a str {
        self.cursor.slice_from(self.mark_at)
    }

    /// Pushes a token built from the text since the last `mark()`, updates
    /// `last_kind`, and re-marks for the next token.
    pub(super) fn emit(&mut self, kind: TokenKind) {
        let literal = self.literal_text().to_string();
        let pos = self.mark_pos;
        self.emit_with(kind, literal, pos);
        self.mark();
    }

    /// Pushes a token with an explicit literal/position, for synthetic
    /// tokens (inserted semicolons, a missing-brace recovery `}`) that
    /// don't correspond to a contiguous source span.
    pub(super) fn emit_with(&mut self, kind: TokenKind, literal: impl Into<String>, pos: Position) {
        self.tokens.push(Token::new(kind, literal, pos));
        self.last_kind = Some(kind);
    }

    /// Like `emit`, but restores the prior `last_kind` afterward —
    /// comments are transparent to automatic semicolon insertion.
    pub(super) fn emit_comment(&mut self) {
        let saved = self.last_kind;
        self.emit(TokenKind::Comment);
        self.last_kind = saved;
    }

    pub(super) fn report(&self, pos: Position, message: impl Into<String>) {
        self.handler.error(pos, message);
    }

    /// Reports a [`LexError`] at `pos`, formatting it through its
    /// [`std::fmt::Display`] impl rather than an ad hoc string so every
    /// lexical failure routes through the shared error taxonomy.
    pub(super) fn report_err(&self, pos: Position, err: LexError) {
        self.handler.error(pos, err.to_string());
    }

    /// Whether the previous emitted token's kind requires a semicolon to
    /// be inserted at the next newline.
    pub(super) fn semi_pending(&self) -> bool {
        self.last_kind.map_or(false, TokenKind::insert_semicolon_after)
    }

    // --- Block context ---

    /// Consumes one block's worth of lines — each dispatched to
    /// `lex_statement` (if it starts with a keyword) or `lex_command`
    /// (otherwise) — until `close` (or, for the top-level block, end of
    /// input) is reached.
    pub(super) fn lex_block(&mut self, close: char) {
        loop {
            self.mark();
            if self.at_block_end(close) {
                self.consume_block_end(close);
                return;
            }

            self.cursor.skip_whitespace();
            self.mark();
            if self.at_block_end(close) {
                continue;
            }

            if self.cursor.current_char() == '#' {
                self.lex_comment();
                continue;
            }

            if is_ident_start(self.cursor.current_char()) {
                let snapshot = self.cursor.snapshot();
                let word_pos = self.mark_pos;
                let word = self.consume_word();
                if is_keyword(&word) {
                    let kind = lookup_ident(&word);
                    self.emit_with(kind, word, word_pos);
                    self.mark();
                    self.lex_statement(close);
                    self.finish_line(false);
                } else {
                    self.cursor.restore(snapshot);
                    self.mark();
                    self.lex_command(close);
                    self.finish_line(true);
                }
            } else {
                self.lex_command(close);
                self.finish_line(true);
            }
        }
    }

    /// Consumes an identifier-shaped word without emitting a token, for
    /// the speculative keyword-vs-command lookahead at the start of a
    /// line.
    fn consume_word(&mut self) -> String {
        let start = self.cursor.position();
        while is_ident_continue(self.cursor.current_char()) {
            self.cursor.advance();
        }
        self.cursor.slice_from(start).to_string()
    }

    fn at_block_end(&self, close: char) -> bool {
        if close == '\0' {
            self.cursor.is_at_end()
        } else {
            self.cursor.is_at_end() || self.cursor.current_char() == close
        }
    }

    fn consume_block_end(&mut self, close: char) {
        if close == '\0' {
            self.emit(TokenKind::Eof);
            return;
        }
        if self.cursor.current_char() == close {
            self.cursor.advance();
            self.emit(TokenKind::RBrace);
        } else {
            let pos = self.mark_pos;
            self.report(pos, "missing closing brace");
            self.emit_with(TokenKind::RBrace, "", pos);
            self.mark();
        }
    }

    /// After a line has been dispatched to `lex_statement`/`lex_command`,
    /// decides whether to insert a `SEMICOLON` and with what literal: a
    /// bare newline yields `"\n"`; returning at the enclosing close-brace
    /// or end of input yields a synthetic `""`. A command line always
    /// gets one; a statement line only if its last token requires it.
    fn finish_line(&mut self, is_command: bool) {
        if self.cursor.current_char() == '\n' {
            self.cursor.advance();
            self.push_semicolon("\n");
            return;
        }
        if is_command || self.semi_pending() {
            self.push_semicolon("");
        }
    }

    fn push_semicolon(&mut self, literal: &str) {
        let pos = Position::new(self.cursor.line(), self.cursor.column());
        self.emit_with(TokenKind::Semicolon, literal, pos);
        self.mark();
    }
}
