use indoc::indoc;

use crate::Error;
use crate::diagnostics::{Diagnostic, DiagnosticKind};
use crate::test_utils::{expect_error, expect_invalid};

#[track_caller]
fn syntax_error(text: &str) -> Diagnostic {
    match expect_error(text) {
        Error::Syntax(diag) => diag,
        other => panic!("expected a syntax error, got {other:?}"),
    }
}

#[track_caller]
fn assert_error_at(text: &str, kind: DiagnosticKind, line: u32, column: u32) {
    let diag = syntax_error(text);
    assert_eq!(diag.kind(), kind);
    assert_eq!((diag.line(), diag.column()), (line, column));
}

#[test]
fn brackets_are_disabled() {
    assert_eq!(
        expect_invalid("r ::= [a]"),
        "test.rg:1(7): on token `[' error: please, use parentheses instead of brackets, brackets are reserved and disabled\n        r ::= [a]\n              ^"
    );
}

#[test]
fn brackets_in_pattern_and_list_tail() {
    assert_error_at("r [a] ::= b", DiagnosticKind::BracketsDisabled, 1, 3);
    assert_error_at("r ::= a, [b]", DiagnosticKind::BracketsDisabled, 1, 10);
    assert_error_at("r ::= { [b] }", DiagnosticKind::BracketsDisabled, 1, 9);
}

#[test]
fn missing_produces_at_end_of_file() {
    let diag = syntax_error("r x");
    assert_eq!(diag.kind(), DiagnosticKind::ExpectedRuleBody);
    assert_eq!(diag.message(), "::= expected");
    assert_eq!((diag.line(), diag.column()), (2, 4));
    assert_eq!(diag.token_text(), Some(""));
}

#[test]
fn caret_follows_the_trimmed_line() {
    let input = indoc! {"
    r ::= a
        | b ::= c
    "};

    assert_eq!(
        expect_invalid(input),
        "test.rg:2(9): on token `::=' error: identifier expected\n        | b ::= c\n            ^"
    );
}

#[test]
fn unclosed_paren_reports_the_newline() {
    let input = indoc! {"
    r ::= a
        | (b
    "};

    assert_eq!(
        expect_invalid(input),
        "test.rg:2(9): on token `' error: ) expected\n        | (b\n            ^"
    );
}

#[test]
fn unclosed_paren_in_pattern() {
    assert_error_at("r (a ::= b", DiagnosticKind::UnclosedParen, 1, 6);
}

#[test]
fn unclosed_block() {
    assert_error_at("r ::= { a", DiagnosticKind::UnclosedBlock, 2, 10);
}

#[test]
fn missing_body() {
    assert_error_at("r ::=", DiagnosticKind::ExpectedAtom, 2, 6);
}

#[test]
fn power_needs_a_number() {
    assert_error_at("r ::= *x", DiagnosticKind::ExpectedNumber, 1, 8);
}

#[test]
fn definition_needs_equals() {
    let diag = syntax_error("r @ y x ::= z");
    assert_eq!(diag.kind(), DiagnosticKind::ExpectedEquals);
    assert_eq!(diag.message(), "`=' expected in definition");
    assert_eq!(diag.column(), 7);
}

#[test]
fn condition_needs_an_expression() {
    assert_error_at("r ? ::= b", DiagnosticKind::ExpectedAtom, 1, 5);
}

#[test]
fn rule_name_must_be_an_identifier() {
    assert_error_at(r#""lit" ::= a"#, DiagnosticKind::ExpectedIdentifier, 1, 1);
}

#[test]
fn stray_close_paren_ends_the_rule() {
    assert_error_at("r ::= a )", DiagnosticKind::ExpectedIdentifier, 1, 9);
}

#[test]
fn pattern_atom_after_cons() {
    let diag = syntax_error("r a: ::= b");
    assert_eq!(diag.kind(), DiagnosticKind::ExpectedPatternAtom);
    assert_eq!(diag.message(), "identifier, literal or `(' expected");
    assert_eq!(diag.token_text(), Some("::="));
}

#[test]
fn reserved_tokens_are_rejected() {
    assert_error_at("r ::= a % b", DiagnosticKind::ExpectedIdentifier, 1, 9);
    assert_error_at("r ::= $(x)", DiagnosticKind::ExpectedAtom, 1, 7);
    assert_error_at("r ::= `x", DiagnosticKind::ExpectedAtom, 1, 7);
    assert_error_at("^ ::= x", DiagnosticKind::ExpectedIdentifier, 1, 1);
}

#[test]
fn first_error_wins() {
    let input = indoc! {"
    a ::= *
    b ::= [c]
    "};

    let diag = syntax_error(input);
    assert_eq!(diag.kind(), DiagnosticKind::ExpectedNumber);
    assert_eq!(diag.line(), 1);
}

#[test]
fn errors_expose_their_diagnostic() {
    let err = expect_error("r ::= [a]");
    assert!(err.diagnostic().is_some_and(|d| d.is_error()));
    assert!(Error::RecursionLimitExceeded.diagnostic().is_none());
}
