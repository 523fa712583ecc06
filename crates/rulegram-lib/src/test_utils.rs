//! Shared helpers for unit tests.

use crate::diagnostics::Diagnostics;
use crate::parser::{SyntaxTree, Token, TreePrinter, dump_tokens, lex, parse};
use crate::source::SourceFile;
use crate::{Error, Result};

pub const TEST_SOURCE_NAME: &str = "test.rg";

pub fn source(text: &str) -> SourceFile {
    SourceFile::new(TEST_SOURCE_NAME, text)
}

#[track_caller]
pub fn tokens(text: &str) -> Vec<Token> {
    lex(&source(text)).unwrap()
}

#[track_caller]
pub fn expect_tokens(text: &str) -> String {
    dump_tokens(&tokens(text))
}

/// Runs both phases and hands the outcome to `inspect`.
pub fn with_parsed<R>(
    text: &str,
    inspect: impl FnOnce(Result<(SyntaxTree<'_>, Diagnostics)>) -> R,
) -> R {
    let source = source(text);
    let tokens = match lex(&source) {
        Ok(tokens) => tokens,
        Err(err) => return inspect(Err(err)),
    };
    inspect(parse(&source, &tokens))
}

/// Tree dump of a source that must parse without any diagnostic.
#[track_caller]
pub fn expect_valid_tree(text: &str) -> String {
    with_parsed(text, |result| {
        let (tree, diagnostics) = result.unwrap_or_else(|err| panic!("expected valid grammar, got:\n{err}"));
        assert!(
            diagnostics.is_empty(),
            "expected no diagnostics, got:\n{}",
            diagnostics.render()
        );
        TreePrinter::new(&tree).dump()
    })
}

/// Tree dump with token positions.
#[track_caller]
pub fn expect_valid_tree_with_spans(text: &str) -> String {
    with_parsed(text, |result| {
        let (tree, _) = result.unwrap_or_else(|err| panic!("expected valid grammar, got:\n{err}"));
        TreePrinter::new(&tree).with_spans(true).dump()
    })
}

/// Classic rendering of the warnings of a source that must parse.
#[track_caller]
pub fn expect_warnings(text: &str) -> String {
    with_parsed(text, |result| {
        let (_, diagnostics) = result.unwrap_or_else(|err| panic!("expected valid grammar, got:\n{err}"));
        assert!(!diagnostics.is_empty(), "expected warnings, got none");
        diagnostics.render()
    })
}

/// The error a source fails with.
#[track_caller]
pub fn expect_error(text: &str) -> Error {
    with_parsed(text, |result| match result {
        Ok((tree, _)) => panic!(
            "expected an error, got a tree:\n{}",
            TreePrinter::new(&tree).dump()
        ),
        Err(err) => err,
    })
}

/// Classic rendering of the error a source fails with.
#[track_caller]
pub fn expect_invalid(text: &str) -> String {
    expect_error(text).to_string()
}

/// Dump of the first subtree rooted at a `kind` node, shifted to column 0.
#[track_caller]
pub fn expect_subtree(text: &str, kind: &str) -> String {
    let full = expect_valid_tree(text);
    let indent_of = |line: &str| line.len() - line.trim_start().len();

    let mut lines = full.lines().skip_while(|line| line.trim() != kind);
    let Some(first) = lines.next() else {
        panic!("no `{kind}` node in:\n{full}");
    };
    let indent = indent_of(first);

    std::iter::once(first)
        .chain(lines.take_while(|line| indent_of(line) > indent))
        .map(|line| &line[indent..])
        .collect::<Vec<_>>()
        .join("\n")
}
