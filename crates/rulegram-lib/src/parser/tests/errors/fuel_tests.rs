use crate::Error;
use crate::parser::{NodeKind, Parser};
use crate::test_utils::{source, tokens, with_parsed};

fn nested_parens(depth: usize) -> String {
    format!("r ::= {}a{}", "(".repeat(depth), ")".repeat(depth))
}

fn cons_chain(len: usize) -> String {
    (0..len).map(|i| i.to_string()).collect::<Vec<_>>().join(":")
}

#[test]
fn nested_groups_exhaust_fuel() {
    let text = "r ::= ((((a))))";
    let src = source(text);
    let toks = tokens(text);

    let err = Parser::new(&src, &toks)
        .with_recursion_fuel(Some(3))
        .parse()
        .unwrap_err();

    assert!(matches!(err, Error::RecursionLimitExceeded));
    assert_eq!(err.to_string(), "recursion limit exceeded");
}

#[test]
fn explicit_cap_limits_cons_chain() {
    let text = "p a:b:c:d ::= x";
    let src = source(text);
    let toks = tokens(text);

    let result = Parser::new(&src, &toks)
        .with_recursion_fuel(Some(2))
        .parse();

    assert!(matches!(result, Err(Error::RecursionLimitExceeded)));
}

#[test]
fn enough_fuel_for_the_nesting() {
    let text = "r ::= ((a))";
    let src = source(text);
    let toks = tokens(text);

    let result = Parser::new(&src, &toks)
        .with_recursion_fuel(Some(3))
        .parse();

    assert!(result.is_ok());
}

#[test]
fn long_cons_chain_in_body_parses_by_default() {
    let text = format!("x a ::= {}", cons_chain(300));

    with_parsed(&text, |result| {
        let (tree, _) = result.unwrap();
        let rule = tree.rule("x").unwrap();
        let conses = rule.descendants().filter(|n| n.is(NodeKind::ConsOp)).count();
        let links = rule
            .descendants()
            .filter(|n| n.is(NodeKind::Expression))
            .count();
        assert_eq!(conses, 299);
        assert_eq!(links, 300);
    });
}

#[test]
fn long_cons_chain_in_pattern_parses_by_default() {
    let text = format!("x {} ::= y", cons_chain(300));
    let src = source(&text);
    let toks = tokens(&text);

    let (tree, _) = Parser::new(&src, &toks).parse().unwrap();

    let patlists = tree
        .root()
        .descendants()
        .filter(|n| n.is(NodeKind::PatList))
        .count();
    assert_eq!(patlists, 300);
}

#[test]
fn cap_can_be_lifted_again() {
    let text = nested_parens(20);
    let src = source(&text);
    let toks = tokens(&text);

    let result = Parser::new(&src, &toks)
        .with_recursion_fuel(Some(4))
        .with_recursion_fuel(None)
        .parse();

    assert!(result.is_ok());
}

#[test]
fn unlimited_fuel() {
    let text = nested_parens(100);
    let src = source(&text);
    let toks = tokens(&text);

    let (tree, _) = Parser::new(&src, &toks)
        .with_recursion_fuel(None)
        .parse()
        .unwrap();

    let groups = tree
        .root()
        .descendants()
        .filter(|n| n.is(NodeKind::Expression))
        .count();
    assert_eq!(groups, 101);
}
