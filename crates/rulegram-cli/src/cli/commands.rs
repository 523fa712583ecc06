//! Command builders for the CLI.
//!
//! Each command is built using the shared arg builders from `args.rs`.

use clap::Command;

use super::args::*;

/// Input and reporting args every command takes.
fn with_input_args(cmd: Command) -> Command {
    cmd.arg(file_arg())
        .arg(source_text_arg())
        .arg(style_arg())
        .arg(color_arg())
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("rulegram")
        .about("Inspect and validate rulegram grammar files")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(tokens_command())
        .subcommand(tree_command())
        .subcommand(rules_command())
        .subcommand(check_command())
}

/// Dump the token stream.
pub fn tokens_command() -> Command {
    let cmd = Command::new("tokens")
        .about("Show the token stream of a grammar")
        .override_usage(
            "\
  rulegram tokens <FILE>
  rulegram tokens -s <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  rulegram tokens calc.rg             # one token per line
  rulegram tokens calc.rg --json      # JSON array
  rulegram tokens -s 'a ::= b'        # inline grammar"#,
        )
        .arg(json_arg());

    with_input_args(cmd)
}

/// Dump the syntax tree.
pub fn tree_command() -> Command {
    let cmd = Command::new("tree")
        .about("Show the syntax tree of a grammar")
        .override_usage(
            "\
  rulegram tree <FILE>
  rulegram tree -s <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  rulegram tree calc.rg               # indented outline
  rulegram tree calc.rg --spans       # with token positions
  rulegram tree calc.rg --text        # with nonterminal text
  rulegram tree calc.rg --json        # JSON tree and rule table"#,
        )
        .arg(spans_arg())
        .arg(text_arg())
        .arg(json_arg())
        .arg(recursion_limit_arg());

    with_input_args(cmd)
}

/// List the rule table.
pub fn rules_command() -> Command {
    let cmd = Command::new("rules")
        .about("List the rules of a grammar in definition order")
        .override_usage(
            "\
  rulegram rules <FILE>
  rulegram rules -s <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  rulegram rules calc.rg              # name @line:column
  rulegram rules calc.rg --json       # JSON array"#,
        )
        .arg(json_arg())
        .arg(recursion_limit_arg());

    with_input_args(cmd)
}

/// Validate a grammar.
pub fn check_command() -> Command {
    let cmd = Command::new("check")
        .about("Validate a grammar")
        .override_usage(
            "\
  rulegram check <FILE>
  rulegram check -s <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  rulegram check calc.rg              # silent when valid
  rulegram check calc.rg --strict     # fail on duplicate rules too
  rulegram check calc.rg --style snippet"#,
        )
        .arg(strict_arg())
        .arg(recursion_limit_arg());

    with_input_args(cmd)
}
