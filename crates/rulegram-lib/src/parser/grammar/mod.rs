//! Grammar productions for the rule language.
//!
//! This module implements all `parse_*` methods as an extension of `Parser`.
//! Each method starts on the first token of its production and returns the
//! finished node, or the syntax error for the first token that does not fit.

mod expressions;
mod patterns;
mod rules;
mod variants;
