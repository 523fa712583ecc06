//! Syntax tree in prefix form.
//!
//! Every nonterminal the parser matches becomes a [`Node`] whose children
//! are in source order. Infix operators are lifted into marker children:
//! `a:b` in a pattern is `patlist [consop, patatom(a), patlist(b)]`, and
//! `a, b` is `patlist [listop, patatom(a), patatom(b)]`. The same shapes
//! appear under `expression`.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use indexmap::map::Entry;
use serde::{Serialize, Serializer};

use super::token::Token;
use crate::Error;

/// All node kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NodeKind {
    Grammar,
    Identifier,
    Number,
    String,
    Newline,
    Literal,
    Pattern,
    PatList,
    PatAtom,
    /// Marker for `:` in patterns and expressions.
    ConsOp,
    /// Marker for `,` in patterns and expressions.
    ListOp,
    /// Reserved, never produced.
    ListSet,
    /// Reserved, never produced.
    ListSetMin,
    /// Reserved, never produced.
    ListSetMax,
    EmptyList,
    Expression,
    /// Reserved, never produced.
    ExprList,
    Expr,
    Atom,
    Rule,
    Variants,
    Variant,
    Power,
    SimpleVariant,
    MultilineVariant,
    Sentence,
    DefList,
    Definition,
    CondList,
}

impl NodeKind {
    pub const ALL: [NodeKind; 29] = [
        NodeKind::Grammar,
        NodeKind::Identifier,
        NodeKind::Number,
        NodeKind::String,
        NodeKind::Newline,
        NodeKind::Literal,
        NodeKind::Pattern,
        NodeKind::PatList,
        NodeKind::PatAtom,
        NodeKind::ConsOp,
        NodeKind::ListOp,
        NodeKind::ListSet,
        NodeKind::ListSetMin,
        NodeKind::ListSetMax,
        NodeKind::EmptyList,
        NodeKind::Expression,
        NodeKind::ExprList,
        NodeKind::Expr,
        NodeKind::Atom,
        NodeKind::Rule,
        NodeKind::Variants,
        NodeKind::Variant,
        NodeKind::Power,
        NodeKind::SimpleVariant,
        NodeKind::MultilineVariant,
        NodeKind::Sentence,
        NodeKind::DefList,
        NodeKind::Definition,
        NodeKind::CondList,
    ];

    pub fn name(self) -> &'static str {
        match self {
            NodeKind::Grammar => "grammar",
            NodeKind::Identifier => "identifier",
            NodeKind::Number => "number",
            NodeKind::String => "string",
            NodeKind::Newline => "newline",
            NodeKind::Literal => "literal",
            NodeKind::Pattern => "pattern",
            NodeKind::PatList => "patlist",
            NodeKind::PatAtom => "patatom",
            NodeKind::ConsOp => "consop",
            NodeKind::ListOp => "listop",
            NodeKind::ListSet => "listset",
            NodeKind::ListSetMin => "listsetmin",
            NodeKind::ListSetMax => "listsetmax",
            NodeKind::EmptyList => "emptylist",
            NodeKind::Expression => "expression",
            NodeKind::ExprList => "exprlist",
            NodeKind::Expr => "expr",
            NodeKind::Atom => "atom",
            NodeKind::Rule => "rule",
            NodeKind::Variants => "variants",
            NodeKind::Variant => "variant",
            NodeKind::Power => "power",
            NodeKind::SimpleVariant => "simplevariant",
            NodeKind::MultilineVariant => "multilinevariant",
            NodeKind::Sentence => "sentence",
            NodeKind::DefList => "deflist",
            NodeKind::Definition => "definition",
            NodeKind::CondList => "condlist",
        }
    }

    /// Kinds kept for a future grammar extension; the parser never builds them.
    pub fn is_reserved(self) -> bool {
        matches!(
            self,
            NodeKind::ListSet | NodeKind::ListSetMin | NodeKind::ListSetMax | NodeKind::ExprList
        )
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NodeKind {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        NodeKind::ALL
            .into_iter()
            .find(|kind| kind.name() == name)
            .ok_or_else(|| Error::UnknownKind {
                what: "node",
                name: name.to_string(),
            })
    }
}

impl Serialize for NodeKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// One node of the syntax tree.
///
/// Leaves (`identifier`, `number`, `string`) and markers (`consop`, `listop`,
/// `emptylist`, `power`, `newline`) borrow the token they were built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node<'t> {
    kind: NodeKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    token: Option<&'t Token>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<Node<'t>>,
}

impl<'t> Node<'t> {
    pub(crate) fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            token: None,
            children: Vec::new(),
        }
    }

    pub(crate) fn leaf(kind: NodeKind, token: &'t Token) -> Self {
        Self {
            kind,
            token: Some(token),
            children: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, child: Node<'t>) {
        self.children.push(child);
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn token(&self) -> Option<&'t Token> {
        self.token
    }

    pub fn children(&self) -> &[Node<'t>] {
        &self.children
    }

    pub fn child(&self, index: usize) -> Option<&Node<'t>> {
        self.children.get(index)
    }

    pub fn is(&self, kind: NodeKind) -> bool {
        self.kind == kind
    }

    /// Token value for token-backed nodes, otherwise the children's text
    /// joined by single spaces. Diagnostic use only.
    pub fn text(&self) -> String {
        let mut out = String::new();
        self.write_text(&mut out);
        out
    }

    fn write_text(&self, out: &mut String) {
        if let Some(token) = self.token {
            out.push_str(&token.value);
            return;
        }
        for (i, child) in self.children.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            child.write_text(out);
        }
    }

    /// Depth-first, parents before children.
    pub fn descendants(&self) -> impl Iterator<Item = &Node<'t>> {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.children.iter().rev());
            Some(node)
        })
    }
}

/// Rule name → index of the rule among the `grammar` root's children.
///
/// The first definition of a name wins; later rules with the same name stay
/// in the tree but never replace the entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RuleTable<'t> {
    entries: IndexMap<&'t str, usize>,
}

impl<'t> RuleTable<'t> {
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Records `name` unless already present. Returns the index of the
    /// definition that owns the name afterwards.
    pub(crate) fn insert_first(&mut self, name: &'t str, index: usize) -> Result<usize, usize> {
        match self.entries.entry(name) {
            Entry::Vacant(slot) => {
                slot.insert(index);
                Ok(index)
            }
            Entry::Occupied(first) => Err(*first.get()),
        }
    }

    pub fn get(&self, name: &str) -> Option<usize> {
        self.entries.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Names in first-definition order.
    pub fn names(&self) -> impl Iterator<Item = &'t str> + '_ {
        self.entries.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'t str, usize)> + '_ {
        self.entries.iter().map(|(name, index)| (*name, *index))
    }
}

/// The parser's output: the `grammar` root plus the rule table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyntaxTree<'t> {
    root: Node<'t>,
    rules: RuleTable<'t>,
}

impl<'t> SyntaxTree<'t> {
    pub(crate) fn new(root: Node<'t>, rules: RuleTable<'t>) -> Self {
        Self { root, rules }
    }

    pub fn root(&self) -> &Node<'t> {
        &self.root
    }

    pub fn rules(&self) -> &RuleTable<'t> {
        &self.rules
    }

    /// The first `rule` node defining `name`.
    pub fn rule(&self, name: &str) -> Option<&Node<'t>> {
        self.rules
            .get(name)
            .and_then(|index| self.root.children.get(index))
    }
}

/// Name of a `rule` node: the value of its leading identifier.
pub fn rule_name<'t>(rule: &Node<'t>) -> Option<&'t str> {
    rule.children
        .first()
        .filter(|child| child.kind == NodeKind::Identifier)
        .and_then(|child| child.token)
        .map(|token| token.value.as_str())
}
