//! Expression grammar (spec §4.4.2, `AssignExpression` down to `Operand`).
//!
//! Precedence from loosest to tightest: assignment < `||` < `&&` <
//! relational < additive < multiplicative < unary < primary. Each tier
//! is a straight "parse the tighter tier, then loop while the current
//! tier's operators match" — the standard left-recursion-to-iteration
//! rewrite a recursive descent parser needs.

use mash_lex::token::TokenKind;
use mash_util::error::ParseError;

use crate::ast::*;
use crate::value;
use crate::Parser;

const ASSIGN_OPS: &[TokenKind] = &[
    TokenKind::Assign,
    TokenKind::Define,
    TokenKind::PlusAssign,
    TokenKind::MinusAssign,
    TokenKind::StarAssign,
    TokenKind::SlashAssign,
    TokenKind::PercentAssign,
    TokenKind::AmpAssign,
    TokenKind::PipeAssign,
    TokenKind::CaretAssign,
    TokenKind::ShlAssign,
    TokenKind::ShrAssign,
    TokenKind::AndNotAssign,
];

const REL_OPS: &[TokenKind] = &[
    TokenKind::Eq,
    TokenKind::Neq,
    TokenKind::Lt,
    TokenKind::Le,
    TokenKind::Gt,
    TokenKind::Ge,
];

const ADD_OPS: &[TokenKind] = &[TokenKind::Plus, TokenKind::Minus, TokenKind::Pipe, TokenKind::Caret];

const MUL_OPS: &[TokenKind] = &[
    TokenKind::Star,
    TokenKind::Slash,
    TokenKind::Percent,
    TokenKind::Shl,
    TokenKind::Shr,
    TokenKind::Amp,
    TokenKind::AndNot,
];

const UNARY_OPS: &[TokenKind] = &[TokenKind::Plus, TokenKind::Minus, TokenKind::Caret, TokenKind::Not];

impl<'a> Parser<'a> {
    /// `AssignExpression = Expression [ assign_op Expression ]`, right
    /// associative. Errors (without aborting) if the left-hand side isn't
    /// `Assignable`.
    pub(crate) fn parse_assign_expression(&mut self) -> Option<Expression> {
        let target = self.parse_expression()?;

        if let Some(op) = self.match_any(ASSIGN_OPS) {
            let value = self.parse_assign_expression()?;
            if !is_assignable(&target) {
                self.error(target.position(), ParseError::InvalidAssignmentTarget);
                return Some(target);
            }
            return Some(Expression::Assign(Box::new(AssignExpr { target, op, value })));
        }

        Some(target)
    }

    pub(crate) fn parse_expression(&mut self) -> Option<Expression> {
        self.parse_or_expr()
    }

    fn parse_or_expr(&mut self) -> Option<Expression> {
        let mut expr = self.parse_and_expr()?;
        while self.check(TokenKind::Lor) {
            let op = self.bump();
            let right = self.parse_and_expr()?;
            expr = Expression::Logical(Box::new(LogicalExpr { left: expr, op, right }));
        }
        Some(expr)
    }

    fn parse_and_expr(&mut self) -> Option<Expression> {
        let mut expr = self.parse_rel_expr()?;
        while self.check(TokenKind::Land) {
            let op = self.bump();
            let right = self.parse_rel_expr()?;
            expr = Expression::Logical(Box::new(LogicalExpr { left: expr, op, right }));
        }
        Some(expr)
    }

    fn parse_rel_expr(&mut self) -> Option<Expression> {
        let mut expr = self.parse_add_expr()?;
        while let Some(op) = self.match_any(REL_OPS) {
            let right = self.parse_add_expr()?;
            expr = Expression::Binary(Box::new(BinaryExpr { left: expr, op, right }));
        }
        Some(expr)
    }

    fn parse_add_expr(&mut self) -> Option<Expression> {
        let mut expr = self.parse_mul_expr()?;
        while let Some(op) = self.match_any(ADD_OPS) {
            let right = self.parse_mul_expr()?;
            expr = Expression::Binary(Box::new(BinaryExpr { left: expr, op, right }));
        }
        Some(expr)
    }

    fn parse_mul_expr(&mut self) -> Option<Expression> {
        let mut expr = self.parse_unary_expr()?;
        while let Some(op) = self.match_any(MUL_OPS) {
            let right = self.parse_unary_expr()?;
            expr = Expression::Binary(Box::new(BinaryExpr { left: expr, op, right }));
        }
        Some(expr)
    }

    /// `UnaryExpr = [ unary_op ] PrimaryExpr`. Unary is not a loop: only
    /// one prefix operator is grammatically permitted before a primary.
    fn parse_unary_expr(&mut self) -> Option<Expression> {
        if let Some(op) = self.match_any(UNARY_OPS) {
            let right = self.parse_primary_expr()?;
            return Some(Expression::Unary(Box::new(UnaryExpr { op, right })));
        }
        self.parse_primary_expr()
    }

    /// `PrimaryExpr = Operand { Selector | Index | Arguments }`.
    fn parse_primary_expr(&mut self) -> Option<Expression> {
        let mut expr = self.parse_operand()?;

        loop {
            expr = match self.peek.kind {
                TokenKind::Dot => {
                    let dot = self.bump();
                    let name = self.expect(
                        TokenKind::Ident,
                        ParseError::UnexpectedToken {
                            found: self.peek.kind.to_string(),
                            expected: "identifier".to_string(),
                        },
                    )?;
                    Expression::Selector(Box::new(SelectorExpr { container: expr, dot, name }))
                }
                TokenKind::LBracket => {
                    let bracket = self.bump();
                    let index = self.parse_expression()?;
                    self.expect(TokenKind::RBracket, ParseError::MissingBracket)?;
                    Expression::Get(Box::new(GetExpr { container: expr, bracket, index }))
                }
                TokenKind::LParen => {
                    let paren = self.bump();
                    let args = self.parse_call_arguments()?;
                    Expression::Call(Box::new(CallExpr { callee: expr, paren, args }))
                }
                _ => break,
            };
        }

        Some(expr)
    }

    /// `Arguments = "(" [ Expression { "," Expression } [ "," ] ] ")"`,
    /// called with `(` already consumed.
    fn parse_call_arguments(&mut self) -> Option<Vec<Expression>> {
        let mut args = Vec::new();
        if self.match_kind(TokenKind::RParen).is_some() {
            return Some(args);
        }
        loop {
            args.push(self.parse_expression()?);
            if self.match_kind(TokenKind::Comma).is_some() {
                if self.match_kind(TokenKind::RParen).is_some() {
                    break;
                }
                continue;
            }
            self.expect(TokenKind::RParen, ParseError::MissingParen)?;
            break;
        }
        Some(args)
    }

    /// `Operand = Literal | "(" Expression ")"`.
    fn parse_operand(&mut self) -> Option<Expression> {
        match self.peek.kind {
            TokenKind::LParen => {
                let paren = self.bump();
                let inner = self.parse_expression()?;
                self.expect(TokenKind::RParen, ParseError::MissingParen)?;
                Some(Expression::Group(Box::new(GroupExpr { paren, inner })))
            }
            TokenKind::Ident => {
                let name = self.bump();
                Some(Expression::Variable(VariableExpr { name }))
            }
            _ => self.parse_literal(),
        }
    }

    /// `Literal = IDENT | NUMBER | STRING | ArrayLit | ObjectLit
    /// | FunctionLit | TemplateLit`. `IDENT` is handled by `parse_operand`
    /// as a `Variable`; everything that materializes to an
    /// [`ast::Literal`] lives here.
    fn parse_literal(&mut self) -> Option<Expression> {
        match self.peek.kind {
            TokenKind::Number => {
                let token = self.bump();
                let value = value::parse_number(&token.literal).unwrap_or_else(|err| {
                    self.error(token.position, ParseError::from(err));
                    0.0
                });
                Some(Expression::Literal(Literal::Number(NumberLiteral { token, value })))
            }
            TokenKind::String => {
                let token = self.bump();
                let value = value::unquote(&token.literal).unwrap_or_else(|err| {
                    self.error(token.position, ParseError::from(err));
                    String::new()
                });
                Some(Expression::Literal(Literal::String(StringLiteral { token, value })))
            }
            TokenKind::Template => Some(Expression::Literal(Literal::Template(self.parse_template_literal()?))),
            TokenKind::LBracket => self.parse_array_literal(),
            TokenKind::Obj => self.parse_object_literal(),
            TokenKind::Func => self.parse_function_literal(),
            _ => {
                self.error(
                    self.peek.position,
                    ParseError::UnexpectedToken {
                        found: self.peek.kind.to_string(),
                        expected: "expression".to_string(),
                    },
                );
                None
            }
        }
    }

    /// `ArrayLit = "[" [ Expression { "," Expression } [ "," ] ] "]"`.
    fn parse_array_literal(&mut self) -> Option<Expression> {
        let bracket = self.bump();
        let mut elements = Vec::new();

        if self.match_kind(TokenKind::RBracket).is_some() {
            return Some(Expression::Literal(Literal::Array(ArrayLiteral { bracket, elements })));
        }

        loop {
            elements.push(self.parse_expression()?);
            if self.match_kind(TokenKind::Comma).is_some() {
                if self.match_kind(TokenKind::RBracket).is_some() {
                    break;
                }
                continue;
            }
            self.expect(TokenKind::RBracket, ParseError::MissingBracket)?;
            break;
        }

        Some(Expression::Literal(Literal::Array(ArrayLiteral { bracket, elements })))
    }

    /// `ObjectLit = "obj" "[" [ Expression ":" Expression { "," ... } [ "," ] ] "]"`.
    fn parse_object_literal(&mut self) -> Option<Expression> {
        let keyword = self.bump();
        self.expect(TokenKind::LBracket, ParseError::MissingBracket)?;
        let mut entries = Vec::new();

        if self.match_kind(TokenKind::RBracket).is_some() {
            return Some(Expression::Literal(Literal::Object(ObjectLiteral { keyword, entries })));
        }

        loop {
            let key = self.parse_expression()?;
            self.expect(TokenKind::Colon, ParseError::MissingDelimiter)?;
            let val = self.parse_expression()?;
            entries.push((key, val));

            if self.match_kind(TokenKind::Comma).is_some() {
                if self.match_kind(TokenKind::RBracket).is_some() {
                    break;
                }
                continue;
            }
            self.expect(TokenKind::RBracket, ParseError::MissingBracket)?;
            break;
        }

        Some(Expression::Literal(Literal::Object(ObjectLiteral { keyword, entries })))
    }

    /// `FunctionLit = "func" Block`.
    fn parse_function_literal(&mut self) -> Option<Expression> {
        let keyword = self.bump();
        let body = self.parse_block()?;
        Some(Expression::Literal(Literal::Function(FunctionLiteral { keyword, body })))
    }

    /// `TemplateLit = TEMPLATE STRING { "{" Expression "}" STRING } TEMPLATE`.
    ///
    /// The lexer already shapes the token stream this way (spec §4.2.8):
    /// an opening `TEMPLATE`, then a `STRING` fragment, then zero or more
    /// `"{" Expression "}" STRING` interpolation/fragment pairs, then a
    /// closing `TEMPLATE`. Looping until a fragment is immediately
    /// followed by the closing marker keeps `parts.len() ==
    /// expressions.len() + 1` true by construction (spec invariant 3).
    pub(crate) fn parse_template_literal(&mut self) -> Option<TemplateLiteral> {
        let open = self.expect(TokenKind::Template, ParseError::MissingDelimiter)?;
        let mut parts = Vec::new();
        let mut expressions = Vec::new();

        loop {
            let frag_tok = self.expect(
                TokenKind::String,
                ParseError::UnexpectedToken {
                    found: self.peek.kind.to_string(),
                    expected: "template fragment".to_string(),
                },
            )?;
            let frag_value = value::unescape_fragment(&frag_tok.literal).unwrap_or_else(|err| {
                self.error(frag_tok.position, ParseError::from(err));
                String::new()
            });
            parts.push(StringLiteral { token: frag_tok, value: frag_value });

            if let Some(close) = self.match_kind(TokenKind::Template) {
                return Some(TemplateLiteral { open, close, parts, expressions });
            }

            self.expect(TokenKind::LBrace, ParseError::MissingBrace)?;
            expressions.push(self.parse_expression()?);
            self.expect(TokenKind::RBrace, ParseError::MissingBrace)?;
        }
    }
}

#[cfg(test)]
mod tests {
    use mash_lex::lex;
    use mash_util::diagnostic::Handler;

    use crate::{ast::*, Parser};

    fn parse_expr(source: &str) -> (Option<Expression>, Handler) {
        let handler = Handler::new();
        let tokens = lex(source, &handler);
        let mut parser = Parser::new(tokens, &handler);
        let expr = parser.parse_assign_expression();
        (expr, handler)
    }

    #[test]
    fn precedence_multiplication_binds_tighter_than_addition() {
        let (expr, handler) = parse_expr("1 + 2 * 3\n");
        assert!(!handler.has_errors());
        match expr.unwrap() {
            Expression::Binary(b) => {
                assert_eq!(b.op.kind, mash_lex::token::TokenKind::Plus);
                assert!(matches!(b.right, Expression::Binary(_)));
            }
            other => panic!("expected binary expression, got {other:?}"),
        }
    }

    #[test]
    fn assignment_is_right_associative_and_allows_define() {
        let (expr, handler) = parse_expr("x := 42\n");
        assert!(!handler.has_errors());
        match expr.unwrap() {
            Expression::Assign(a) => {
                assert!(is_assignable(&a.target));
                assert_eq!(a.op.kind, mash_lex::token::TokenKind::Define);
            }
            other => panic!("expected assign expression, got {other:?}"),
        }
    }

    #[test]
    fn invalid_assignment_target_is_reported() {
        let (_, handler) = parse_expr("1 + 2 = 3\n");
        assert!(handler.has_errors());
    }

    #[test]
    fn array_literal_with_trailing_comma() {
        let (expr, handler) = parse_expr("[1, 2, 3,]\n");
        assert!(!handler.has_errors());
        match expr.unwrap() {
            Expression::Literal(Literal::Array(arr)) => assert_eq!(arr.elements.len(), 3),
            other => panic!("expected array literal, got {other:?}"),
        }
    }

    #[test]
    fn object_literal_preserves_insertion_order() {
        let (expr, handler) = parse_expr("obj [1: \"a\", 2: \"b\"]\n");
        assert!(!handler.has_errors());
        match expr.unwrap() {
            Expression::Literal(Literal::Object(obj)) => assert_eq!(obj.entries.len(), 2),
            other => panic!("expected object literal, got {other:?}"),
        }
    }

    #[test]
    fn template_literal_matches_parts_and_expressions_invariant() {
        let (expr, handler) = parse_expr("'hello {name}!'\n");
        assert!(!handler.has_errors());
        match expr.unwrap() {
            Expression::Literal(Literal::Template(t)) => {
                assert_eq!(t.parts.len(), t.expressions.len() + 1);
                assert_eq!(t.parts[0].value, "hello ");
                assert_eq!(t.parts[1].value, "!");
            }
            other => panic!("expected template literal, got {other:?}"),
        }
    }

    #[test]
    fn template_literal_without_interpolation_has_one_part_zero_expressions() {
        let (expr, handler) = parse_expr("'hello'\n");
        assert!(!handler.has_errors());
        match expr.unwrap() {
            Expression::Literal(Literal::Template(t)) => {
                assert_eq!(t.parts.len(), 1);
                assert!(t.expressions.is_empty());
            }
            other => panic!("expected template literal, got {other:?}"),
        }
    }

    #[test]
    fn selector_and_index_and_call_chain() {
        let (expr, handler) = parse_expr("a.b[0](1, 2)\n");
        assert!(!handler.has_errors());
        match expr.unwrap() {
            Expression::Call(call) => {
                assert_eq!(call.args.len(), 2);
                assert!(matches!(call.callee, Expression::Get(_)));
            }
            other => panic!("expected call expression, got {other:?}"),
        }
    }
}
