//! Command modules for the jshl CLI.
//!
//! Each subcommand is implemented in its own file following the same
//! pattern: an args struct, a handler implementing [`traits::Command`], and
//! a `run_*` function.

pub mod common;
pub mod traits;

pub mod check;
pub mod highlight;
pub mod tokens;

pub use check::{run_check, CheckArgs};
pub use highlight::{run_highlight, HighlightArgs};
pub use tokens::{run_tokens, TokensArgs};
