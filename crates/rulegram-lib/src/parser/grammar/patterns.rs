use crate::Result;
use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::ast::{Node, NodeKind};
use crate::parser::token::{TokenKind, token_sets::PATATOM_FIRST};

impl<'t> Parser<'_, 't> {
    /// `pattern := patlist*`
    ///
    /// Stops at the first token that cannot start a pattern atom, so an
    /// empty pattern is fine.
    pub(crate) fn parse_pattern(&mut self) -> Result<Node<'t>> {
        let mut node = Node::new(NodeKind::Pattern);
        while self.currently_is_one_of(PATATOM_FIRST) {
            node.push(self.parse_patlist()?);
        }
        Ok(node)
    }

    /// `patlist := patatom ':' patlist | patatom (',' patatom?)* | patatom`
    ///
    /// Trailing and repeated commas are accepted.
    pub(crate) fn parse_patlist(&mut self) -> Result<Node<'t>> {
        self.enter_recursion()?;
        let node = self.parse_patlist_inner();
        self.exit_recursion();
        node
    }

    fn parse_patlist_inner(&mut self) -> Result<Node<'t>> {
        let mut node = Node::new(NodeKind::PatList);
        let head = self.parse_patatom()?;

        match self.current().kind {
            TokenKind::Colon => {
                node.push(self.bump_leaf(NodeKind::ConsOp));
                node.push(head);
                node.push(self.parse_patlist()?);
            }
            TokenKind::Comma => {
                node.push(Node::leaf(NodeKind::ListOp, self.current()));
                node.push(head);
                while self.eat(TokenKind::Comma) {
                    if self.currently_is_one_of(PATATOM_FIRST) {
                        node.push(self.parse_patatom()?);
                    }
                }
            }
            _ => node.push(head),
        }

        Ok(node)
    }

    /// `patatom := identifier | literal | '(' ')' | '(' patlist ')'`
    pub(crate) fn parse_patatom(&mut self) -> Result<Node<'t>> {
        let mut node = Node::new(NodeKind::PatAtom);

        match self.current().kind {
            TokenKind::Identifier => node.push(self.parse_identifier()?),
            TokenKind::Str | TokenKind::Number => node.push(self.parse_literal()?),
            TokenKind::ParenOpen => {
                self.bump();
                if self.currently_is(TokenKind::ParenClose) {
                    node.push(Node::leaf(NodeKind::EmptyList, self.current()));
                } else {
                    node.push(self.parse_patlist()?);
                    if !self.currently_is(TokenKind::ParenClose) {
                        return Err(self.error(DiagnosticKind::UnclosedParen));
                    }
                }
                self.bump();
            }
            TokenKind::BracketOpen => return Err(self.error(DiagnosticKind::BracketsDisabled)),
            _ => return Err(self.error(DiagnosticKind::ExpectedPatternAtom)),
        }

        Ok(node)
    }
}
