use crate::Result;
use crate::diagnostics::{DiagnosticKind, Location};
use crate::parser::Parser;
use crate::parser::ast::{Node, NodeKind, rule_name};
use crate::parser::token::TokenKind;

impl<'t> Parser<'_, 't> {
    /// `grammar := newline* (rule newline*)*`
    pub(crate) fn parse_grammar(&mut self) -> Result<Node<'t>> {
        let mut root = Node::new(NodeKind::Grammar);

        self.skip_newlines();
        while !self.at_eof() {
            let rule = self.parse_rule()?;
            self.register_rule(&root, &rule);
            root.push(rule);
            self.skip_newlines();
        }

        Ok(root)
    }

    /// `rule := identifier pattern ('@' deflist)? ('?' condlist)? '::=' variants`
    ///
    /// Newlines may separate the head parts from each other.
    pub(crate) fn parse_rule(&mut self) -> Result<Node<'t>> {
        let mut node = Node::new(NodeKind::Rule);

        node.push(self.parse_identifier()?);
        node.push(self.parse_pattern()?);

        self.skip_newlines();
        if self.eat(TokenKind::At) {
            node.push(self.parse_deflist()?);
        }

        self.skip_newlines();
        if self.eat(TokenKind::Question) {
            node.push(self.parse_condlist()?);
        }

        self.skip_newlines();
        if !self.eat(TokenKind::Produces) {
            return Err(self.error(DiagnosticKind::ExpectedRuleBody));
        }

        self.skip_newlines();
        node.push(self.parse_variants()?);

        Ok(node)
    }

    /// Adds a finished rule to the table. A name seen before keeps its first
    /// definition and the newcomer gets a warning.
    fn register_rule(&mut self, root: &Node<'t>, rule: &Node<'t>) {
        let Some(name) = rule_name(rule) else {
            return;
        };
        let index = root.children().len();

        let Err(first) = self.rules.insert_first(name, index) else {
            return;
        };

        let Some(token) = rule.child(0).and_then(Node::token) else {
            return;
        };
        let mut report = self
            .diagnostics
            .report(DiagnosticKind::DuplicateRule, self.source, token)
            .message(name);

        if let Some(original) = root
            .child(first)
            .and_then(|r| r.child(0))
            .and_then(Node::token)
        {
            let location = Location {
                line: original.line,
                column: original.column,
            };
            report = report.related_to("first defined here", location);
        }

        report.emit();
    }

    /// `deflist := definition (',' newline* definition)*`
    pub(crate) fn parse_deflist(&mut self) -> Result<Node<'t>> {
        let mut node = Node::new(NodeKind::DefList);

        self.skip_newlines();
        node.push(self.parse_definition()?);
        while self.eat(TokenKind::Comma) {
            self.skip_newlines();
            node.push(self.parse_definition()?);
        }

        Ok(node)
    }

    /// `definition := patatom '=' expr`
    pub(crate) fn parse_definition(&mut self) -> Result<Node<'t>> {
        let mut node = Node::new(NodeKind::Definition);

        node.push(self.parse_patatom()?);
        if !self.eat(TokenKind::Equals) {
            return Err(self.error(DiagnosticKind::ExpectedEquals));
        }
        node.push(self.parse_expr()?);

        Ok(node)
    }

    /// `condlist := expr (',' newline* expr)?`
    pub(crate) fn parse_condlist(&mut self) -> Result<Node<'t>> {
        let mut node = Node::new(NodeKind::CondList);

        node.push(self.parse_expr()?);
        if self.eat(TokenKind::Comma) {
            self.skip_newlines();
            node.push(self.parse_expr()?);
        }

        Ok(node)
    }
}
