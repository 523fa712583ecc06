//! Shared plumbing for the commands: load, lex, parse, report.
//!
//! Every failure is printed to stderr and ends the process with status 1.

use std::path::PathBuf;

use rulegram_lib::{
    DiagnosticStyle, Diagnostics, Error, Parser, SourceFile, SyntaxTree, Token, lex,
};
use serde::Serialize;

use super::source_loader::load_source;

/// Where the grammar comes from and how problems are shown.
pub struct Input {
    pub file: Option<PathBuf>,
    pub source_text: Option<String>,
    pub style: DiagnosticStyle,
    pub color: bool,
}

pub fn load_or_exit(input: &Input) -> SourceFile {
    match load_source(input.file.as_deref(), input.source_text.as_deref()) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("error: {}", err);
            std::process::exit(1);
        }
    }
}

pub fn lex_or_exit(input: &Input, source: &SourceFile) -> Vec<Token> {
    lex(source).unwrap_or_else(|err| exit_with(input, &err))
}

pub fn parse_or_exit<'t>(
    input: &Input,
    source: &SourceFile,
    tokens: &'t [Token],
    recursion_fuel: Option<u32>,
) -> (SyntaxTree<'t>, Diagnostics) {
    Parser::new(source, tokens)
        .with_recursion_fuel(recursion_fuel)
        .parse()
        .unwrap_or_else(|err| exit_with(input, &err))
}

/// Prints non-fatal diagnostics, if any.
pub fn report_warnings(input: &Input, diagnostics: &Diagnostics) {
    if !diagnostics.is_empty() {
        eprint!("{}", diagnostics.render_styled(input.style, input.color));
    }
}

pub fn print_json(value: &impl Serialize) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(err) => {
            eprintln!("error: failed to serialize output: {}", err);
            std::process::exit(1);
        }
    }
}

/// Positioned errors render like any other diagnostic; the rest get an
/// `error:` prefix.
pub fn render_error(err: &Error, style: DiagnosticStyle, color: bool) -> String {
    match err.diagnostic() {
        Some(diagnostic) => Diagnostics::from(diagnostic.clone()).render_styled(style, color),
        None => format!("error: {}\n", err),
    }
}

fn exit_with(input: &Input, err: &Error) -> ! {
    eprint!("{}", render_error(err, input.style, input.color));
    std::process::exit(1);
}
