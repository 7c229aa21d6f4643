//! Context-sensitive tokenizer.
//!
//! [`core`] holds the `Lexer` struct, the scan primitives, and the
//! `Block`-context dispatch. [`statement`] and [`command`] implement the
//! two line-level contexts `Block` dispatches each line to.
//! [`identifier`], [`number`], [`string`], [`operator`] and [`comment`]
//! each scan one token shape and are shared by both line-level contexts.

mod comment;
mod command;
mod core;
mod identifier;
mod number;
mod operator;
mod statement;
mod string;

pub use core::Lexer;
