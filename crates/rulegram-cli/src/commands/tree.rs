//! Show the syntax tree of a grammar.

use rulegram_lib::{Colors, TreePrinter};

use super::run_common::{
    Input, lex_or_exit, load_or_exit, parse_or_exit, print_json, report_warnings,
};

pub struct TreeArgs {
    pub input: Input,
    pub spans: bool,
    pub text: bool,
    pub json: bool,
    pub recursion_fuel: Option<u32>,
}

pub fn run(args: TreeArgs) {
    let source = load_or_exit(&args.input);
    let tokens = lex_or_exit(&args.input, &source);
    let (tree, warnings) = parse_or_exit(&args.input, &source, &tokens, args.recursion_fuel);

    report_warnings(&args.input, &warnings);

    if args.json {
        print_json(&tree);
        return;
    }

    let output = TreePrinter::new(&tree)
        .with_spans(args.spans)
        .with_text(args.text)
        .colors(Colors::new(args.input.color))
        .dump();
    print!("{}", output);
}
