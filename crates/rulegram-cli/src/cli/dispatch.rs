//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! This module contains:
//! - `*Params` structs that mirror command `*Args` but are populated from clap
//! - `from_matches()` extractors
//! - `Into<*Args>` impls to bridge dispatch → command handlers

use std::path::PathBuf;

use clap::ArgMatches;
use rulegram_lib::DiagnosticStyle;

use super::ColorChoice;
use crate::commands::Input;
use crate::commands::check::CheckArgs;
use crate::commands::rules::RulesArgs;
use crate::commands::tokens::TokensArgs;
use crate::commands::tree::TreeArgs;

pub struct InputParams {
    pub file: Option<PathBuf>,
    pub source_text: Option<String>,
    pub style: DiagnosticStyle,
    pub color: ColorChoice,
}

impl InputParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            file: m.get_one::<PathBuf>("file").cloned(),
            source_text: m.get_one::<String>("source_text").cloned(),
            style: parse_style(m),
            color: parse_color(m),
        }
    }
}

impl From<InputParams> for Input {
    fn from(p: InputParams) -> Self {
        Self {
            file: p.file,
            source_text: p.source_text,
            style: p.style,
            color: p.color.should_colorize(),
        }
    }
}

pub struct TokensParams {
    pub input: InputParams,
    pub json: bool,
}

impl TokensParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input: InputParams::from_matches(m),
            json: m.get_flag("json"),
        }
    }
}

impl From<TokensParams> for TokensArgs {
    fn from(p: TokensParams) -> Self {
        Self {
            input: p.input.into(),
            json: p.json,
        }
    }
}

pub struct TreeParams {
    pub input: InputParams,
    pub spans: bool,
    pub text: bool,
    pub json: bool,
    pub recursion_limit: Option<u32>,
}

impl TreeParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input: InputParams::from_matches(m),
            spans: m.get_flag("spans"),
            text: m.get_flag("text"),
            json: m.get_flag("json"),
            recursion_limit: m.get_one::<u32>("recursion_limit").copied(),
        }
    }
}

impl From<TreeParams> for TreeArgs {
    fn from(p: TreeParams) -> Self {
        Self {
            input: p.input.into(),
            spans: p.spans,
            text: p.text,
            json: p.json,
            recursion_fuel: recursion_fuel(p.recursion_limit),
        }
    }
}

pub struct RulesParams {
    pub input: InputParams,
    pub json: bool,
    pub recursion_limit: Option<u32>,
}

impl RulesParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input: InputParams::from_matches(m),
            json: m.get_flag("json"),
            recursion_limit: m.get_one::<u32>("recursion_limit").copied(),
        }
    }
}

impl From<RulesParams> for RulesArgs {
    fn from(p: RulesParams) -> Self {
        Self {
            input: p.input.into(),
            json: p.json,
            recursion_fuel: recursion_fuel(p.recursion_limit),
        }
    }
}

pub struct CheckParams {
    pub input: InputParams,
    pub strict: bool,
    pub recursion_limit: Option<u32>,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input: InputParams::from_matches(m),
            strict: m.get_flag("strict"),
            recursion_limit: m.get_one::<u32>("recursion_limit").copied(),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            input: p.input.into(),
            strict: p.strict,
            recursion_fuel: recursion_fuel(p.recursion_limit),
        }
    }
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}

fn parse_style(m: &ArgMatches) -> DiagnosticStyle {
    match m.get_one::<String>("style").map(|s| s.as_str()) {
        Some("snippet") => DiagnosticStyle::Snippet,
        _ => DiagnosticStyle::Classic,
    }
}

/// No flag and `0` both mean unlimited.
pub(crate) fn recursion_fuel(limit: Option<u32>) -> Option<u32> {
    limit.filter(|&n| n > 0)
}
