//! Statement grammar (spec §4.4.2, `Program` down to `CommandStmt`).
//!
//! Every statement production is wired through [`Parser::parse_statement`],
//! which dispatches on `peek` and then consumes the trailing `";"` the
//! grammar requires after every statement. Nothing here needs to tell
//! `SEMICOLON` apart by provenance (explicit `;` vs. an inserted one) —
//! by the time tokens reach the parser they're indistinguishable tokens
//! of the same kind, exactly as spec §3's `SEMICOLON` literal note
//! implies.

use mash_lex::token::TokenKind;
use mash_util::error::ParseError;

use crate::ast::*;
use crate::Parser;

impl<'a> Parser<'a> {
    /// `Statement = ( Let | For | If | Block | CommandStmt ) ";"`.
    pub(crate) fn parse_statement(&mut self) -> Option<Statement> {
        let stmt = match self.peek.kind {
            TokenKind::LBrace => Statement::Block(self.parse_block()?),
            TokenKind::Let => self.parse_let_statement()?,
            TokenKind::If => self.parse_if_statement()?,
            TokenKind::For => self.parse_for_statement()?,
            _ => self.parse_cmd_statement()?,
        };
        self.expect_statement_terminator();
        Some(stmt)
    }

    /// `Block = "{" StatementList "}"`.
    pub(crate) fn parse_block(&mut self) -> Option<Block> {
        let brace = self.expect(TokenKind::LBrace, ParseError::MissingBrace)?;
        let mut statements = Vec::new();

        while !self.check(TokenKind::RBrace) && !self.at_end() {
            match self.parse_statement() {
                Some(s) => statements.push(s),
                None => self.synchronize(),
            }
        }

        self.expect(TokenKind::RBrace, ParseError::MissingBrace)?;
        Some(Block { position: brace.position, statements })
    }

    /// `Let = "let" AssignExpression`.
    fn parse_let_statement(&mut self) -> Option<Statement> {
        let keyword = self.expect(TokenKind::Let, ParseError::MissingSemicolon)?;
        let expr = self.parse_assign_expression()?;
        Some(Statement::Let(LetStatement { keyword, expr }))
    }

    /// `If = "if" Expression Block { "elif" Expression Block }
    /// [ "else" ( If | Block ) ]`.
    ///
    /// An `else if` is desugared into `else { if ... }`: the nested `If`
    /// statement is wrapped in a synthetic single-statement [`Block`]
    /// whose position is the nested `if`'s, since no real brace exists to
    /// anchor it.
    fn parse_if_statement(&mut self) -> Option<Statement> {
        let keyword = self.expect(TokenKind::If, ParseError::MissingSemicolon)?;
        let condition = self.parse_expression()?;
        let then_branch = self.parse_block()?;

        let mut elifs = Vec::new();
        while self.match_kind(TokenKind::Elif).is_some() {
            let cond = self.parse_expression()?;
            let body = self.parse_block()?;
            elifs.push((cond, body));
        }

        let else_branch = if self.match_kind(TokenKind::Else).is_some() {
            if self.check(TokenKind::If) {
                let position = self.peek.position;
                let nested = self.parse_if_statement()?;
                Some(Block { position, statements: vec![nested] })
            } else {
                Some(self.parse_block()?)
            }
        } else {
            None
        };

        Some(Statement::If(IfStatement { keyword, condition, then_branch, elifs, else_branch }))
    }

    /// `For = "for" [ Expression ] Block`. The condition is omitted only
    /// when a block immediately follows `for`.
    fn parse_for_statement(&mut self) -> Option<Statement> {
        let keyword = self.expect(TokenKind::For, ParseError::MissingSemicolon)?;
        let condition = if self.check(TokenKind::LBrace) {
            None
        } else {
            Some(self.parse_expression()?)
        };
        let body = self.parse_block()?;
        Some(Statement::For(ForStatement { keyword, condition, body }))
    }

    /// `CommandStmt = OrCommand`.
    fn parse_cmd_statement(&mut self) -> Option<Statement> {
        let command = self.parse_or_command()?;
        Some(Statement::Cmd(CmdStatement { command }))
    }

    /// Consumes the `";"` every statement ends with. The lexer guarantees
    /// one is always present for well-formed input (spec §4.2.10), so a
    /// missing one here means the statement's own production already
    /// failed to consume what it should have.
    fn expect_statement_terminator(&mut self) {
        if self.expect(TokenKind::Semicolon, ParseError::MissingSemicolon).is_none() {
            self.synchronize();
        }
    }
}
