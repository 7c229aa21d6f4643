//! AST node definitions (spec §3).
//!
//! Every node carries at least one [`Token`] or synthesized [`Position`]
//! it was built from, so [`Expression::position`], [`Statement::position`]
//! and friends can always answer "where did this come from" without a
//! separate span table. Children are owned outright — there is no sharing
//! between nodes, matching the "tree ownership" lifecycle spec §3 calls
//! out.

use mash_lex::token::Token;
use mash_util::position::Position;

/// A parsed source file: a flat list of top-level statements.
pub type Program = Vec<Statement>;

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Block(Block),
    If(IfStatement),
    For(ForStatement),
    Let(LetStatement),
    Cmd(CmdStatement),
}

impl Statement {
    pub fn position(&self) -> Position {
        match self {
            Statement::Block(b) => b.position,
            Statement::If(s) => s.keyword.position,
            Statement::For(s) => s.keyword.position,
            Statement::Let(s) => s.keyword.position,
            Statement::Cmd(s) => s.command.position(),
        }
    }
}

/// `{ ... }`. `position` is the opening brace's position, except for the
/// synthetic block an `else if` chain is desugared into (see
/// [`crate::stmt`]), where it is the nested `if`'s position.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub position: Position,
    pub statements: Vec<Statement>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfStatement {
    pub keyword: Token,
    pub condition: Expression,
    pub then_branch: Block,
    pub elifs: Vec<(Expression, Block)>,
    pub else_branch: Option<Block>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForStatement {
    pub keyword: Token,
    pub condition: Option<Expression>,
    pub body: Block,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LetStatement {
    pub keyword: Token,
    pub expr: Expression,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CmdStatement {
    pub command: Command,
}

// ---------------------------------------------------------------------
// Expressions
// ---------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Assign(Box<AssignExpr>),
    Logical(Box<LogicalExpr>),
    Binary(Box<BinaryExpr>),
    Unary(Box<UnaryExpr>),
    Group(Box<GroupExpr>),
    Call(Box<CallExpr>),
    Get(Box<GetExpr>),
    Selector(Box<SelectorExpr>),
    Variable(VariableExpr),
    Literal(Literal),
}

impl Expression {
    pub fn position(&self) -> Position {
        match self {
            Expression::Assign(e) => e.target.position(),
            Expression::Logical(e) => e.left.position(),
            Expression::Binary(e) => e.left.position(),
            Expression::Unary(e) => e.op.position,
            Expression::Group(e) => e.paren.position,
            Expression::Call(e) => e.callee.position(),
            Expression::Get(e) => e.container.position(),
            Expression::Selector(e) => e.container.position(),
            Expression::Variable(e) => e.name.position,
            Expression::Literal(l) => l.position(),
        }
    }
}

/// Restricts `Assign.target`/`Get.container`/`Selector.container` to the
/// three expression shapes the grammar permits on an assignment's
/// left-hand side (spec's `Assignable` capability).
pub fn is_assignable(expr: &Expression) -> bool {
    matches!(
        expr,
        Expression::Variable(_) | Expression::Selector(_) | Expression::Get(_)
    )
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssignExpr {
    pub target: Expression,
    pub op: Token,
    pub value: Expression,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LogicalExpr {
    pub left: Expression,
    pub op: Token,
    pub right: Expression,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub left: Expression,
    pub op: Token,
    pub right: Expression,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpr {
    pub op: Token,
    pub right: Expression,
}

/// A parenthesized sub-expression. `paren` is the opening `(`.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupExpr {
    pub paren: Token,
    pub inner: Expression,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub callee: Expression,
    pub paren: Token,
    pub args: Vec<Expression>,
}

/// `container[index]`. Assignable.
#[derive(Debug, Clone, PartialEq)]
pub struct GetExpr {
    pub container: Expression,
    pub bracket: Token,
    pub index: Expression,
}

/// `container.name`. Assignable.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectorExpr {
    pub container: Expression,
    pub dot: Token,
    pub name: Token,
}

/// A bare identifier reference. Assignable.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableExpr {
    pub name: Token,
}

// ---------------------------------------------------------------------
// Literals
// ---------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Number(NumberLiteral),
    String(StringLiteral),
    Array(ArrayLiteral),
    Object(ObjectLiteral),
    Function(FunctionLiteral),
    Template(TemplateLiteral),
}

impl Literal {
    pub fn position(&self) -> Position {
        match self {
            Literal::Number(n) => n.token.position,
            Literal::String(s) => s.token.position,
            Literal::Array(a) => a.bracket.position,
            Literal::Object(o) => o.keyword.position,
            Literal::Function(f) => f.keyword.position,
            Literal::Template(t) => t.open.position,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NumberLiteral {
    pub token: Token,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StringLiteral {
    pub token: Token,
    pub value: String,
}

/// `[ elem, elem, ... ]`. `bracket` is the opening `[`.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayLiteral {
    pub bracket: Token,
    pub elements: Vec<Expression>,
}

/// `obj [ key : value, ... ]`. Entry order is preserved (spec invariant).
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectLiteral {
    pub keyword: Token,
    pub entries: Vec<(Expression, Expression)>,
}

/// `func { ... }`. Closures over the enclosing scope are an evaluator
/// concern; the AST only records the body.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionLiteral {
    pub keyword: Token,
    pub body: Block,
}

/// `'literal {expr} literal ...'`. `parts.len() == expressions.len() + 1`
/// always holds (spec invariant 3); `open`/`close` are the two `TEMPLATE`
/// marker tokens.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateLiteral {
    pub open: Token,
    pub close: Token,
    pub parts: Vec<StringLiteral>,
    pub expressions: Vec<Expression>,
}

// ---------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Logical(Box<LogicalCmd>),
    Unary(Box<UnaryCmd>),
    Binary(Box<BinaryCmd>),
    Literal(LiteralCmd),
}

impl Command {
    pub fn position(&self) -> Position {
        match self {
            Command::Logical(c) => c.left.position(),
            Command::Unary(c) => c.op.position,
            Command::Binary(c) => c.left.position(),
            Command::Literal(c) => c.components[0].position(),
        }
    }
}

/// `left && right` / `left || right`.
#[derive(Debug, Clone, PartialEq)]
pub struct LogicalCmd {
    pub left: Command,
    pub op: Token,
    pub right: Command,
}

/// `!right`.
#[derive(Debug, Clone, PartialEq)]
pub struct UnaryCmd {
    pub op: Token,
    pub right: Command,
}

/// `left | right`.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryCmd {
    pub left: Command,
    pub op: Token,
    pub right: Command,
}

/// One or more space-separated words; always at least one component
/// (spec invariant 4).
#[derive(Debug, Clone, PartialEq)]
pub struct LiteralCmd {
    pub components: Vec<CommandComponent>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CommandComponent {
    String(StringLiteral),
    Template(TemplateLiteral),
}

impl CommandComponent {
    pub fn position(&self) -> Position {
        match self {
            CommandComponent::String(s) => s.token.position,
            CommandComponent::Template(t) => t.open.position,
        }
    }
}
