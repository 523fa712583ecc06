use crate::parser::NodeKind;
use crate::test_utils::{expect_subtree, with_parsed};

fn pattern_dump(text: &str) -> String {
    expect_subtree(text, "pattern")
}

#[test]
fn cons_pattern() {
    insta::assert_snapshot!(pattern_dump("p a:b ::= x"), @r#"
    pattern
      patlist
        consop ":"
        patatom
          identifier "a"
        patlist
          patatom
            identifier "b"
    "#);
}

#[test]
fn cons_chain_nests_to_the_right() {
    insta::assert_snapshot!(pattern_dump("p a:b:c ::= x"), @r#"
    pattern
      patlist
        consop ":"
        patatom
          identifier "a"
        patlist
          consop ":"
          patatom
            identifier "b"
          patlist
            patatom
              identifier "c"
    "#);
}

#[test]
fn list_pattern_with_trailing_comma() {
    insta::assert_snapshot!(pattern_dump("p a, b, ::= x"), @r#"
    pattern
      patlist
        listop ","
        patatom
          identifier "a"
        patatom
          identifier "b"
    "#);
}

#[test]
fn repeated_commas_are_skipped() {
    insta::assert_snapshot!(pattern_dump("p a,,b ::= x"), @r#"
    pattern
      patlist
        listop ","
        patatom
          identifier "a"
        patatom
          identifier "b"
    "#);
}

#[test]
fn empty_list() {
    insta::assert_snapshot!(pattern_dump("p () ::= x"), @r#"
    pattern
      patlist
        patatom
          emptylist ")"
    "#);
}

#[test]
fn nested_group_and_literals() {
    insta::assert_snapshot!(pattern_dump(r#"p ("s" : rest) 3 ::= x"#), @r#"
    pattern
      patlist
        patatom
          patlist
            consop ":"
            patatom
              literal
                string "s"
            patlist
              patatom
                identifier "rest"
      patlist
        patatom
          literal
            number "3"
    "#);
}

#[test]
fn several_patlists() {
    with_parsed("p a b (c) ::= x", |result| {
        let (tree, _) = result.unwrap();
        let pattern = tree.rule("p").unwrap().child(1).unwrap();
        assert_eq!(pattern.children().len(), 3);
        assert!(pattern.children().iter().all(|n| n.is(NodeKind::PatList)));
    });
}
