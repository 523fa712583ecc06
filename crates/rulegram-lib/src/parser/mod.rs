//! Lexer and parser for the grammar language.
//!
//! # Architecture
//!
//! Two strictly separated phases:
//!
//! - [`lex`] scans the whole source into a `Vec<Token>` ending in `endoffile`.
//! - [`parse`] walks the tokens with one token of lookahead and builds an
//!   owned [`SyntaxTree`] whose leaves borrow their tokens.
//!
//! Neither phase recovers. The first unexpected character or token is
//! returned as [`crate::Error`], carrying a [`crate::Diagnostic`] positioned
//! on the offending spot. Duplicate rule names are not fatal and come back
//! as warnings next to the tree.
//!
//! Newlines are significant: they end a simple variant and a sentence, and
//! separate variants. Every other production skips them where a rule may
//! continue on the next line.

pub mod ast;
pub mod lexer;
pub mod printer;
pub mod token;

mod core;
mod grammar;
mod invariants;


pub use ast::{Node, NodeKind, RuleTable, SyntaxTree, rule_name};
pub use core::Parser;
pub use lexer::lex;
pub use printer::{TreePrinter, dump_tokens};
pub use token::{Token, TokenKind, TokenSet};

use crate::PassResult;
use crate::source::SourceFile;

/// Main entry point. Parses `tokens` (as produced by [`lex`] for `source`).
///
/// `source` is only consulted to quote lines in diagnostics.
pub fn parse<'t>(source: &SourceFile, tokens: &'t [Token]) -> PassResult<SyntaxTree<'t>> {
    Parser::new(source, tokens).parse()
}
