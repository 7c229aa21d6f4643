//! Lexer context stack.
//!
//! The scanner is not a conventional pushdown automaton over brace
//! matching: the same `{ ... }` spelling means "open a statement block"
//! in [`Context::Statement`] and "open an interpolated expression" inside
//! a template string. What distinguishes them is which routine is
//! currently scanning, not a brace-depth counter — so each context is
//! entered with an explicit terminator rune that tells it when to return
//! to its caller, rather than pushing onto a generic stack of `{`s.

/// Which lexing mode the scanner is currently in. See `lexer::core` for
/// the dispatch loop and `lexer::statement`/`lexer::command` for the two
/// line-level modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Context {
    /// Top-level, or just inside a statement-context `{`. Dispatches each
    /// line to [`Context::Statement`] or [`Context::Command`].
    Block,
    /// Recognizes identifiers, keywords, numbers, strings/templates, and
    /// the full operator set.
    Statement,
    /// Recognizes space-separated `STRING` words and the restricted
    /// `| || & && !` operator subset.
    Command,
    /// Inside `'...{` up to the matching `}`; same as `Statement` but
    /// keywords are not recognized (an identifier spelled like a keyword
    /// is still `IDENT`).
    TemplateExpr,
}

impl Context {
    /// The rune that ends this context. `Block`, `Statement`, and
    /// `Command` all terminate on whatever their caller's enclosing block
    /// terminates on — `'\0'` (EOF) at the top level, `'}'` inside a
    /// nested block — since a command or statement line runs no further
    /// than the block it's part of. Only `TemplateExpr` has a terminator
    /// of its own: it always ends at the `}` that closes its `{ ... }`,
    /// regardless of what encloses the template string itself.
    pub fn terminator(self, enclosing_close: char) -> char {
        match self {
            Context::Block | Context::Statement | Context::Command => enclosing_close,
            Context::TemplateExpr => '}',
        }
    }
}
