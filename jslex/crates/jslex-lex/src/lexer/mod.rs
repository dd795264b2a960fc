//! Lexer module.
//!
//! This module organizes the lexer implementation into smaller, focused components:
//! - `core` - Main Lexer struct and dispatch
//! - `identifier` - Identifier and keyword lexing
//! - `number` - Number literal lexing and validation
//! - `string` - Quoted string and template literal lexing
//! - `operator` - Operator lexing, including `/` disambiguation
//! - `comment` - Comment and whitespace lexing

mod comment;
mod core;
mod identifier;
mod number;
mod operator;
mod string;

pub use core::Lexer;
pub use number::is_valid_number;
