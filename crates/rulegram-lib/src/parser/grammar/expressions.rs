use crate::Result;
use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::ast::{Node, NodeKind};
use crate::parser::token::{TokenKind, token_sets::ATOM_FIRST};

impl<'t> Parser<'_, 't> {
    /// `expression := expr ':' expression | expr (',' expr?)* | expr`
    ///
    /// Same prefix shapes as `patlist`, with whole `expr`s as operands.
    pub(crate) fn parse_expression(&mut self) -> Result<Node<'t>> {
        self.enter_recursion()?;
        let node = self.parse_expression_inner();
        self.exit_recursion();
        node
    }

    fn parse_expression_inner(&mut self) -> Result<Node<'t>> {
        let mut node = Node::new(NodeKind::Expression);
        let head = self.parse_expr()?;

        match self.current().kind {
            TokenKind::Comma => {
                node.push(Node::leaf(NodeKind::ListOp, self.current()));
                node.push(head);
                while self.eat(TokenKind::Comma) {
                    if self.currently_is_one_of(ATOM_FIRST) {
                        node.push(self.parse_expr()?);
                    }
                }
            }
            TokenKind::Colon => {
                node.push(self.bump_leaf(NodeKind::ConsOp));
                node.push(head);
                node.push(self.parse_expression()?);
            }
            _ => node.push(head),
        }

        Ok(node)
    }

    /// `expr := atom+`
    pub(crate) fn parse_expr(&mut self) -> Result<Node<'t>> {
        if !self.currently_is_one_of(ATOM_FIRST) {
            return Err(self.error(DiagnosticKind::ExpectedAtom));
        }

        let mut node = Node::new(NodeKind::Expr);
        while self.currently_is_one_of(ATOM_FIRST) {
            node.push(self.parse_atom()?);
        }
        Ok(node)
    }

    /// `atom := identifier | literal | '(' ')' | '(' expression ')'`
    ///
    /// `[` starts no atom: brackets are reserved and get their own error.
    pub(crate) fn parse_atom(&mut self) -> Result<Node<'t>> {
        let mut node = Node::new(NodeKind::Atom);

        match self.current().kind {
            TokenKind::Identifier => node.push(self.parse_identifier()?),
            TokenKind::Number | TokenKind::Str => node.push(self.parse_literal()?),
            TokenKind::ParenOpen => {
                self.bump();
                if self.currently_is(TokenKind::ParenClose) {
                    node.push(Node::leaf(NodeKind::EmptyList, self.current()));
                } else {
                    node.push(self.parse_expression()?);
                    if !self.currently_is(TokenKind::ParenClose) {
                        return Err(self.error(DiagnosticKind::UnclosedParen));
                    }
                }
                self.bump();
            }
            TokenKind::BracketOpen => return Err(self.error(DiagnosticKind::BracketsDisabled)),
            _ => return Err(self.error(DiagnosticKind::ExpectedAtom)),
        }

        Ok(node)
    }

    /// `literal := string | number`
    pub(crate) fn parse_literal(&mut self) -> Result<Node<'t>> {
        let mut node = Node::new(NodeKind::Literal);
        match self.current().kind {
            TokenKind::Str => node.push(self.parse_string()?),
            TokenKind::Number => node.push(self.parse_number()?),
            _ => return Err(self.error(DiagnosticKind::ExpectedLiteral)),
        }
        Ok(node)
    }

    pub(crate) fn parse_identifier(&mut self) -> Result<Node<'t>> {
        if !self.currently_is(TokenKind::Identifier) {
            return Err(self.error(DiagnosticKind::ExpectedIdentifier));
        }
        Ok(self.bump_leaf(NodeKind::Identifier))
    }

    pub(crate) fn parse_number(&mut self) -> Result<Node<'t>> {
        if !self.currently_is(TokenKind::Number) {
            return Err(self.error(DiagnosticKind::ExpectedNumber));
        }
        Ok(self.bump_leaf(NodeKind::Number))
    }

    pub(crate) fn parse_string(&mut self) -> Result<Node<'t>> {
        if !self.currently_is(TokenKind::Str) {
            return Err(self.error(DiagnosticKind::ExpectedString));
        }
        Ok(self.bump_leaf(NodeKind::String))
    }
}
