//! Command grammar (spec §4.4.2, `OrCommand` down to `CmdComponent`).
//!
//! Mirrors the shape of the expression precedence chain in [`crate::expr`]
//! — each tier parses the tighter one first, then loops on its own
//! operator — but over the restricted command operator set `| || & && !`
//! instead of the full expression grammar, since `mash`'s command syntax
//! is deliberately not as rich as its expression syntax (spec §1).

use mash_lex::token::TokenKind;
use mash_util::error::ParseError;

use crate::ast::*;
use crate::value;
use crate::Parser;

impl<'a> Parser<'a> {
    /// `OrCommand = AndCommand { "||" AndCommand }`.
    pub(crate) fn parse_or_command(&mut self) -> Option<Command> {
        let mut cmd = self.parse_and_command()?;
        while self.check(TokenKind::Lor) {
            let op = self.bump();
            let right = self.parse_and_command()?;
            cmd = Command::Logical(Box::new(LogicalCmd { left: cmd, op, right }));
        }
        Some(cmd)
    }

    /// `AndCommand = NotCommand { "&&" NotCommand }`.
    fn parse_and_command(&mut self) -> Option<Command> {
        let mut cmd = self.parse_not_command()?;
        while self.check(TokenKind::Land) {
            let op = self.bump();
            let right = self.parse_not_command()?;
            cmd = Command::Logical(Box::new(LogicalCmd { left: cmd, op, right }));
        }
        Some(cmd)
    }

    /// `NotCommand = [ "!" ] PipeCommand`.
    fn parse_not_command(&mut self) -> Option<Command> {
        if self.check(TokenKind::Not) {
            let op = self.bump();
            let right = self.parse_pipe_command()?;
            return Some(Command::Unary(Box::new(UnaryCmd { op, right })));
        }
        self.parse_pipe_command()
    }

    /// `PipeCommand = PrimaryCmd { "|" PrimaryCmd }`.
    fn parse_pipe_command(&mut self) -> Option<Command> {
        let mut cmd = self.parse_primary_cmd()?;
        while self.check(TokenKind::Pipe) {
            let op = self.bump();
            let right = self.parse_primary_cmd()?;
            cmd = Command::Binary(Box::new(BinaryCmd { left: cmd, op, right }));
        }
        Some(cmd)
    }

    /// `PrimaryCmd = CmdComponent { CmdComponent }`: at least one word,
    /// greedily consuming further `STRING`/`TEMPLATE` words (spec
    /// invariant 4 — a `LiteralCmd` always has at least one component).
    fn parse_primary_cmd(&mut self) -> Option<Command> {
        let mut components = vec![self.parse_cmd_component()?];

        while self.check_any(&[TokenKind::String, TokenKind::Template]) {
            components.push(self.parse_cmd_component()?);
        }

        Some(Command::Literal(LiteralCmd { components }))
    }

    /// `CmdComponent = STRING | TemplateLit`.
    fn parse_cmd_component(&mut self) -> Option<CommandComponent> {
        match self.peek.kind {
            TokenKind::String => {
                let token = self.bump();
                let value = value::unquote(&token.literal).unwrap_or_else(|err| {
                    self.error(token.position, ParseError::from(err));
                    String::new()
                });
                Some(CommandComponent::String(StringLiteral { token, value }))
            }
            TokenKind::Template => Some(CommandComponent::Template(self.parse_template_literal()?)),
            _ => {
                self.error(
                    self.peek.position,
                    ParseError::UnexpectedToken {
                        found: self.peek.kind.to_string(),
                        expected: "command word".to_string(),
                    },
                );
                None
            }
        }
    }
}
