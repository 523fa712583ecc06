//! Validate a grammar.

use super::run_common::{Input, lex_or_exit, load_or_exit, parse_or_exit, report_warnings};

pub struct CheckArgs {
    pub input: Input,
    pub strict: bool,
    pub recursion_fuel: Option<u32>,
}

pub fn run(args: CheckArgs) {
    let source = load_or_exit(&args.input);
    let tokens = lex_or_exit(&args.input, &source);
    let (_, warnings) = parse_or_exit(&args.input, &source, &tokens, args.recursion_fuel);

    report_warnings(&args.input, &warnings);

    if args.strict && warnings.has_warnings() {
        std::process::exit(1);
    }

    // Silent on success (like cargo check)
}
