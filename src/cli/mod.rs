//! Command-line interface module.

mod args;
pub mod compile;
pub mod route;

pub use args::{Cli, CompileArgs, Commands};
