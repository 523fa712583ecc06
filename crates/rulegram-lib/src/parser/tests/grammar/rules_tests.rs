use indoc::indoc;

use crate::diagnostics::Location;
use crate::parser::NodeKind;
use crate::test_utils::{expect_valid_tree, expect_warnings, with_parsed};

#[test]
fn single_rule() {
    insta::assert_snapshot!(expect_valid_tree("foo bar ::= baz"), @r#"
    grammar
      rule
        identifier "foo"
        pattern
          patlist
            patatom
              identifier "bar"
        variants
          variant
            simplevariant
              sentence
                expression
                  expr
                    atom
                      identifier "baz"
    "#);
}

#[test]
fn empty_pattern() {
    insta::assert_snapshot!(expect_valid_tree("a ::= b"), @r#"
    grammar
      rule
        identifier "a"
        pattern
        variants
          variant
            simplevariant
              sentence
                expression
                  expr
                    atom
                      identifier "b"
    "#);
}

#[test]
fn comment_only_file_is_an_empty_grammar() {
    let input = indoc! {"
    # nothing yet

    # still nothing
    "};

    insta::assert_snapshot!(expect_valid_tree(input), @"grammar");
}

#[test]
fn rules_separated_by_blank_lines_and_comments() {
    let input = indoc! {"
    # header

    a ::= b

    # between
    c d ::= e   # trailing
    "};

    with_parsed(input, |result| {
        let (tree, warnings) = result.unwrap();
        assert!(warnings.is_empty());
        assert_eq!(tree.rules().names().collect::<Vec<_>>(), ["a", "c"]);
        assert_eq!(tree.root().children().len(), 2);
    });
}

#[test]
fn definitions_and_conditions() {
    insta::assert_snapshot!(expect_valid_tree("f x @ y = x, z = 1 ? y, z ::= y"), @r#"
    grammar
      rule
        identifier "f"
        pattern
          patlist
            patatom
              identifier "x"
        deflist
          definition
            patatom
              identifier "y"
            expr
              atom
                identifier "x"
          definition
            patatom
              identifier "z"
            expr
              atom
                literal
                  number "1"
        condlist
          expr
            atom
              identifier "y"
          expr
            atom
              identifier "z"
        variants
          variant
            simplevariant
              sentence
                expression
                  expr
                    atom
                      identifier "y"
    "#);
}

#[test]
fn rule_head_split_across_lines() {
    let input = indoc! {"
    f x
      @ y = x,
        z = (x)
      ? y
      ::= y
    "};

    with_parsed(input, |result| {
        let (tree, _) = result.unwrap();
        let rule = tree.rule("f").unwrap();
        let kinds: Vec<_> = rule.children().iter().map(|n| n.kind()).collect();
        assert_eq!(
            kinds,
            [
                NodeKind::Identifier,
                NodeKind::Pattern,
                NodeKind::DefList,
                NodeKind::CondList,
                NodeKind::Variants,
            ]
        );
        assert_eq!(rule.child(2).unwrap().children().len(), 2);
    });
}

#[test]
fn produces_on_its_own_line() {
    let input = indoc! {"
    a b

    ::=
        c
    "};

    with_parsed(input, |result| {
        let (tree, _) = result.unwrap();
        assert_eq!(tree.rule("a").unwrap().child(2).unwrap().text(), "c");
    });
}

#[test]
fn duplicate_rule_keeps_first_definition() {
    let input = indoc! {"
    a ::= x
    a ::= y
    "};

    with_parsed(input, |result| {
        let (tree, warnings) = result.unwrap();
        assert_eq!(tree.root().children().len(), 2);
        assert_eq!(tree.rules().len(), 1);
        assert_eq!(tree.rule("a").unwrap().child(2).unwrap().text(), "x");
        assert_eq!(warnings.warning_count(), 1);
        assert!(!warnings.has_errors());

        let related = warnings.iter().next().unwrap().related();
        assert_eq!(related.len(), 1);
        assert_eq!(related[0].message(), "first defined here");
        assert_eq!(related[0].location(), Location { line: 1, column: 1 });
    });

    insta::assert_snapshot!(expect_warnings(input), @r"
    test.rg:2(1): on token `a' warning: rule `a' is already defined, the rule table keeps the first definition
            a ::= y
            ^
    test.rg:1(1): note: first defined here
    ");
}
