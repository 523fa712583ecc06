use crate::Result;
use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::ast::{Node, NodeKind};
use crate::parser::token::{
    TokenKind,
    token_sets::{BLOCK_ITEM_FIRST, VARIANT_SEPARATORS},
};

impl<'t> Parser<'_, 't> {
    /// `variants := newline* variant ((newline* '|' newline* variant) | newline)*`
    ///
    /// Consumes the newlines that follow the last variant.
    pub(crate) fn parse_variants(&mut self) -> Result<Node<'t>> {
        let mut node = Node::new(NodeKind::Variants);

        self.skip_newlines();
        node.push(self.parse_variant()?);

        while self.currently_is_one_of(VARIANT_SEPARATORS) {
            self.skip_newlines();
            if self.eat(TokenKind::Pipe) {
                self.skip_newlines();
                node.push(self.parse_variant()?);
            }
        }

        Ok(node)
    }

    /// `variant := ('*' number)? (multilinevariant | simplevariant)`
    pub(crate) fn parse_variant(&mut self) -> Result<Node<'t>> {
        let mut node = Node::new(NodeKind::Variant);

        if self.eat(TokenKind::Star) {
            if !self.currently_is(TokenKind::Number) {
                return Err(self.error(DiagnosticKind::ExpectedNumber));
            }
            node.push(self.bump_leaf(NodeKind::Power));
        }

        if self.currently_is(TokenKind::BraceOpen) {
            node.push(self.parse_multiline_variant()?);
        } else {
            node.push(self.parse_simple_variant()?);
        }

        Ok(node)
    }

    /// `simplevariant := sentence`, ended by the newline that follows it.
    pub(crate) fn parse_simple_variant(&mut self) -> Result<Node<'t>> {
        let mut node = Node::new(NodeKind::SimpleVariant);
        node.push(self.parse_sentence()?);
        Ok(node)
    }

    /// `multilinevariant := '{' (sentence | newline)* '}'`
    ///
    /// Newlines inside the braces are kept as `newline` nodes.
    pub(crate) fn parse_multiline_variant(&mut self) -> Result<Node<'t>> {
        self.assert_current(TokenKind::BraceOpen);
        self.bump();

        let mut node = Node::new(NodeKind::MultilineVariant);
        while self.currently_is_one_of(BLOCK_ITEM_FIRST) {
            if self.currently_is(TokenKind::Newline) {
                node.push(self.bump_leaf(NodeKind::Newline));
            } else {
                node.push(self.parse_sentence()?);
            }
        }

        if !self.eat(TokenKind::BraceClose) {
            return Err(self.error(DiagnosticKind::UnclosedBlock));
        }

        Ok(node)
    }

    /// `sentence := expression`
    pub(crate) fn parse_sentence(&mut self) -> Result<Node<'t>> {
        let mut node = Node::new(NodeKind::Sentence);
        node.push(self.parse_expression()?);
        Ok(node)
    }
}
