use indoc::indoc;

use crate::parser::NodeKind;
use crate::test_utils::{expect_subtree, with_parsed};

fn variants_dump(text: &str) -> String {
    expect_subtree(text, "variants")
}

#[test]
fn alternatives_on_one_and_several_lines() {
    let input = indoc! {"
    r ::= a | b
      | c
    "};

    insta::assert_snapshot!(variants_dump(input), @r#"
    variants
      variant
        simplevariant
          sentence
            expression
              expr
                atom
                  identifier "a"
      variant
        simplevariant
          sentence
            expression
              expr
                atom
                  identifier "b"
      variant
        simplevariant
          sentence
            expression
              expr
                atom
                  identifier "c"
    "#);
}

#[test]
fn pipe_after_blank_lines() {
    let input = indoc! {"
    r ::=
        a

        | b
    next ::= c
    "};

    with_parsed(input, |result| {
        let (tree, _) = result.unwrap();
        let variants = tree.rule("r").unwrap().child(2).unwrap();
        assert_eq!(variants.children().len(), 2);
        assert!(tree.rules().contains("next"));
    });
}

#[test]
fn power() {
    insta::assert_snapshot!(variants_dump("r ::= *3 a"), @r#"
    variants
      variant
        power "3"
        simplevariant
          sentence
            expression
              expr
                atom
                  identifier "a"
    "#);
}

#[test]
fn multiline_variant_keeps_newlines() {
    let input = indoc! {"
    r ::= { a b
      c }
    "};

    insta::assert_snapshot!(variants_dump(input), @r#"
    variants
      variant
        multilinevariant
          sentence
            expression
              expr
                atom
                  identifier "a"
                atom
                  identifier "b"
          newline "  "
          sentence
            expression
              expr
                atom
                  identifier "c"
    "#);
}

#[test]
fn multiline_variant_with_power_and_blank_lines() {
    let input = indoc! {r#"
    r ::= a
        | *2 {
            "x"

            y }
    "#};

    with_parsed(input, |result| {
        let (tree, _) = result.unwrap();
        let variants = tree.rule("r").unwrap().child(2).unwrap();
        let second = variants.child(1).unwrap();
        assert!(second.child(0).unwrap().is(NodeKind::Power));

        let block = second.child(1).unwrap();
        assert!(block.is(NodeKind::MultilineVariant));
        let kinds: Vec<_> = block.children().iter().map(|n| n.kind()).collect();
        assert_eq!(
            kinds,
            [
                NodeKind::Newline,
                NodeKind::Sentence,
                NodeKind::Newline,
                NodeKind::Newline,
                NodeKind::Sentence,
            ]
        );
    });
}

#[test]
fn empty_block() {
    insta::assert_snapshot!(variants_dump("r ::= {}"), @r"
    variants
      variant
        multilinevariant
    ");
}
