pub mod check;
pub mod rules;
pub mod run_common;
pub mod source_loader;
pub mod tokens;
pub mod tree;


pub use run_common::Input;
