//! Show the token stream of a grammar.

use rulegram_lib::dump_tokens;

use super::run_common::{Input, lex_or_exit, load_or_exit, print_json};

pub struct TokensArgs {
    pub input: Input,
    pub json: bool,
}

pub fn run(args: TokensArgs) {
    let source = load_or_exit(&args.input);
    let tokens = lex_or_exit(&args.input, &source);

    if args.json {
        print_json(&tokens);
    } else {
        print!("{}", dump_tokens(&tokens));
    }
}
