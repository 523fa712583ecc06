//! Parser state and low-level cursor operations.

use super::ast::{Node, NodeKind, RuleTable, SyntaxTree};
use super::token::{Token, TokenKind, TokenSet};
use crate::diagnostics::{Diagnostic, DiagnosticKind, Diagnostics};
use crate::source::SourceFile;
use crate::{Error, PassResult, Result};

/// Recursive-descent parser over a lexed token sequence.
///
/// One token of lookahead, no backtracking: every production either
/// consumes the current token or inspects it and returns. The first
/// mismatch aborts the whole parse.
pub struct Parser<'s, 't> {
    pub(super) source: &'s SourceFile,
    pub(super) tokens: &'t [Token],
    pub(super) pos: usize,
    pub(super) rules: RuleTable<'t>,
    pub(super) diagnostics: Diagnostics,
    depth: u32,
    recursion_fuel_limit: Option<u32>,
}

impl<'s, 't> Parser<'s, 't> {
    /// `tokens` must come from [`super::lex`]: non-empty and ending in `endoffile`.
    pub fn new(source: &'s SourceFile, tokens: &'t [Token]) -> Self {
        assert!(
            tokens.last().is_some_and(|t| t.is(TokenKind::EndOfFile)),
            "token sequence must end with endoffile"
        );
        Self {
            source,
            tokens,
            pos: 0,
            rules: RuleTable::new(),
            diagnostics: Diagnostics::new(),
            depth: 0,
            recursion_fuel_limit: None,
        }
    }

    /// Caps the nesting of `:` chains and parenthesized groups. Unlimited by
    /// default; `None` lifts a previously set cap.
    pub fn with_recursion_fuel(mut self, limit: Option<u32>) -> Self {
        self.recursion_fuel_limit = limit;
        self
    }

    pub fn parse(mut self) -> PassResult<SyntaxTree<'t>> {
        let root = self.parse_grammar()?;
        Ok((SyntaxTree::new(root, self.rules), self.diagnostics))
    }

    #[inline]
    pub(super) fn current(&self) -> &'t Token {
        &self.tokens[self.pos]
    }

    #[inline]
    pub(super) fn currently_is(&self, kind: TokenKind) -> bool {
        self.current().is(kind)
    }

    #[inline]
    pub(super) fn currently_is_one_of(&self, set: TokenSet) -> bool {
        set.contains(self.current().kind)
    }

    pub(super) fn at_eof(&self) -> bool {
        self.currently_is(TokenKind::EndOfFile)
    }

    pub(super) fn bump(&mut self) {
        assert!(!self.at_eof(), "bump called at endoffile");
        self.pos += 1;
    }

    /// Wraps the current token in a node of `kind` and moves past it.
    pub(super) fn bump_leaf(&mut self, kind: NodeKind) -> Node<'t> {
        let node = Node::leaf(kind, self.current());
        self.bump();
        node
    }

    pub(super) fn eat(&mut self, kind: TokenKind) -> bool {
        if self.currently_is(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    pub(super) fn skip_newlines(&mut self) {
        while self.currently_is(TokenKind::Newline) {
            self.bump();
        }
    }

    /// Syntax error on the current token with the kind's default message.
    pub(super) fn error(&self, kind: DiagnosticKind) -> Error {
        Error::Syntax(Diagnostic::at_token(kind, self.source, self.current()))
    }

    pub(super) fn enter_recursion(&mut self) -> Result<()> {
        if let Some(limit) = self.recursion_fuel_limit
            && self.depth >= limit
        {
            return Err(Error::RecursionLimitExceeded);
        }
        self.depth += 1;
        Ok(())
    }

    pub(super) fn exit_recursion(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}
