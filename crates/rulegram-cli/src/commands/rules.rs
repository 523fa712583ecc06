//! List the rule table of a grammar.

use rulegram_lib::{Colors, Node, SyntaxTree, TreePrinter};
use serde::Serialize;

use super::run_common::{
    Input, lex_or_exit, load_or_exit, parse_or_exit, print_json, report_warnings,
};

pub struct RulesArgs {
    pub input: Input,
    pub json: bool,
    pub recursion_fuel: Option<u32>,
}

/// One rule table entry as printed by `--json`.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct RuleEntry<'t> {
    pub name: &'t str,
    /// Position of the rule among the grammar's top-level rules.
    pub index: usize,
    pub line: u32,
    pub column: u32,
}

pub fn run(args: RulesArgs) {
    let source = load_or_exit(&args.input);
    let tokens = lex_or_exit(&args.input, &source);
    let (tree, warnings) = parse_or_exit(&args.input, &source, &tokens, args.recursion_fuel);

    report_warnings(&args.input, &warnings);

    if args.json {
        print_json(&rule_entries(&tree));
        return;
    }

    let output = TreePrinter::new(&tree)
        .only_rules(true)
        .with_spans(true)
        .colors(Colors::new(args.input.color))
        .dump();
    print!("{}", output);
}

pub fn rule_entries<'t>(tree: &SyntaxTree<'t>) -> Vec<RuleEntry<'t>> {
    tree.rules()
        .iter()
        .filter_map(|(name, index)| {
            let token = tree
                .root()
                .child(index)
                .and_then(|rule| rule.child(0))
                .and_then(Node::token)?;
            Some(RuleEntry {
                name,
                index,
                line: token.line,
                column: token.column,
            })
        })
        .collect()
}
