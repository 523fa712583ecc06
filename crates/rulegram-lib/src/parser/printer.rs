//! Text dumps of token streams and syntax trees.

use std::fmt::Write;

use super::ast::{Node, SyntaxTree};
use super::token::Token;
use crate::colors::Colors;

/// Builder for the indented tree dump.
///
/// One node per line, two spaces of indentation per level. Token-backed
/// nodes show their value as a quoted string.
pub struct TreePrinter<'a, 't> {
    tree: &'a SyntaxTree<'t>,
    spans: bool,
    text: bool,
    rules: bool,
    colors: Colors,
}

impl<'a, 't> TreePrinter<'a, 't> {
    pub fn new(tree: &'a SyntaxTree<'t>) -> Self {
        Self {
            tree,
            spans: false,
            text: false,
            rules: false,
            colors: Colors::OFF,
        }
    }

    /// Append `@line:column` to token-backed nodes.
    pub fn with_spans(mut self, value: bool) -> Self {
        self.spans = value;
        self
    }

    /// Append the flattened text of every nonterminal.
    pub fn with_text(mut self, value: bool) -> Self {
        self.text = value;
        self
    }

    /// Print the rule table instead of the tree.
    pub fn only_rules(mut self, value: bool) -> Self {
        self.rules = value;
        self
    }

    pub fn colors(mut self, colors: Colors) -> Self {
        self.colors = colors;
        self
    }

    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        if self.rules {
            self.format_rules(w)
        } else {
            self.format_node(self.tree.root(), 0, w)
        }
    }

    fn format_rules(&self, w: &mut impl Write) -> std::fmt::Result {
        let c = &self.colors;
        let root = self.tree.root();

        for (name, index) in self.tree.rules().iter() {
            write!(w, "{}{}{}", c.blue, name, c.reset)?;
            let token = root
                .child(index)
                .and_then(|rule| rule.child(0))
                .and_then(Node::token);
            if self.spans
                && let Some(token) = token
            {
                write!(w, " {}@{}:{}{}", c.dim, token.line, token.column, c.reset)?;
            }
            writeln!(w)?;
        }
        Ok(())
    }

    fn format_node(&self, node: &Node<'t>, indent: usize, w: &mut impl Write) -> std::fmt::Result {
        let c = &self.colors;
        let prefix = "  ".repeat(indent);

        write!(w, "{}{}{}{}", prefix, c.blue, node.kind(), c.reset)?;

        match node.token() {
            Some(token) => {
                write!(w, " {}{:?}{}", c.green, token.value, c.reset)?;
                if self.spans {
                    write!(w, " {}@{}:{}{}", c.dim, token.line, token.column, c.reset)?;
                }
            }
            None if self.text && !node.children().is_empty() => {
                write!(w, " {}{:?}{}", c.dim, node.text(), c.reset)?;
            }
            None => {}
        }
        writeln!(w)?;

        for child in node.children() {
            self.format_node(child, indent + 1, w)?;
        }
        Ok(())
    }
}

/// One token per line, in the `("value" at (line:column) of type 'kind')` form.
pub fn dump_tokens(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        writeln!(out, "{}", token).expect("String write never fails");
    }
    out
}
