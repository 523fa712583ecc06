//! Rulegram: front end for a small grammar-definition language.
//!
//! A rulegram source is a list of rules. Each rule names a pattern, may bind
//! definitions (`@`) and guard conditions (`?`), and lists its alternative
//! bodies after `::=`:
//!
//! ```text
//! # comments run to the end of the line
//! greet name @ who = name ? who ::= "hello" who
//!     | *2 { "hi" who
//!            "bye" }
//! ```
//!
//! The pipeline is strictly two-phase: [`lex`] turns a [`SourceFile`] into a
//! token sequence terminated by `endoffile`, then [`parse`] turns the tokens
//! into a [`SyntaxTree`] holding the `grammar` root and the rule table.
//! Both phases stop at the first error and return it as an [`Error`] value.
//!
//! ```
//! use rulegram_lib::{SourceFile, lex, parse};
//!
//! let source = SourceFile::new("inline", "foo bar ::= baz");
//! let tokens = lex(&source).unwrap();
//! let (tree, warnings) = parse(&source, &tokens).unwrap();
//! assert!(tree.rule("foo").is_some());
//! assert!(warnings.is_empty());
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod colors;
pub mod diagnostics;
pub mod parser;
pub mod source;

#[cfg(test)]
pub mod test_utils;

pub use colors::Colors;
pub use diagnostics::{
    Diagnostic, DiagnosticKind, DiagnosticStyle, Diagnostics, DiagnosticsPrinter, Severity,
};
pub use parser::{
    Node, NodeKind, Parser, RuleTable, SyntaxTree, Token, TokenKind, TreePrinter, dump_tokens, lex,
    parse,
};
pub use source::SourceFile;

use std::path::PathBuf;

/// Result type for passes that produce both output and non-fatal diagnostics.
///
/// Fatal problems (the first lexical or syntax error) use the outer `Result`.
pub type PassResult<T> = std::result::Result<(T, Diagnostics), Error>;

/// Errors that abort lexing or parsing.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The source file could not be opened or read.
    #[error("failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The source has no lines at all.
    #[error("empty file '{0}' given")]
    EmptySource(String),

    /// Input text that matches no token kind.
    #[error("{0}")]
    Lex(Diagnostic),

    /// Token sequence that does not fit the grammar.
    #[error("{0}")]
    Syntax(Diagnostic),

    /// `:` chains or parenthesized groups nested deeper than the parser's recursion fuel.
    #[error("recursion limit exceeded")]
    RecursionLimitExceeded,

    /// A token or node kind spelling outside the closed vocabulary.
    #[error("wrong {what} id `{name}' given")]
    UnknownKind { what: &'static str, name: String },
}

impl Error {
    /// The positioned diagnostic behind a lexical or syntax error.
    pub fn diagnostic(&self) -> Option<&Diagnostic> {
        match self {
            Error::Lex(d) | Error::Syntax(d) => Some(d),
            _ => None,
        }
    }
}

/// Result type for rulegram operations.
pub type Result<T> = std::result::Result<T, Error>;
