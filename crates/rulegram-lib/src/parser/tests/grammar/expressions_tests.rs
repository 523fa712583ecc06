use crate::test_utils::expect_subtree;

fn expression_dump(text: &str) -> String {
    expect_subtree(text, "expression")
}

#[test]
fn sentence_of_atoms() {
    insta::assert_snapshot!(expression_dump(r#"r ::= say "hi" 42"#), @r#"
    expression
      expr
        atom
          identifier "say"
        atom
          literal
            string "hi"
        atom
          literal
            number "42"
    "#);
}

#[test]
fn list_expression() {
    insta::assert_snapshot!(expression_dump("r ::= a b, c"), @r#"
    expression
      listop ","
      expr
        atom
          identifier "a"
        atom
          identifier "b"
      expr
        atom
          identifier "c"
    "#);
}

#[test]
fn list_expression_with_trailing_comma() {
    insta::assert_snapshot!(expression_dump("r ::= a, b,"), @r#"
    expression
      listop ","
      expr
        atom
          identifier "a"
      expr
        atom
          identifier "b"
    "#);
}

#[test]
fn cons_expression() {
    insta::assert_snapshot!(expression_dump("r ::= h : t u"), @r#"
    expression
      consop ":"
      expr
        atom
          identifier "h"
      expression
        expr
          atom
            identifier "t"
          atom
            identifier "u"
    "#);
}

#[test]
fn groups_and_empty_list() {
    insta::assert_snapshot!(expression_dump("r ::= f (x, y) ()"), @r#"
    expression
      expr
        atom
          identifier "f"
        atom
          expression
            listop ","
            expr
              atom
                identifier "x"
            expr
              atom
                identifier "y"
        atom
          emptylist ")"
    "#);
}
