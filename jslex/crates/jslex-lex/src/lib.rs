//! jslex-lex - Lossless lexer for JavaScript source text
//!
//! This crate turns JavaScript-like source text into a stream of classified
//! tokens. Nothing is skipped: whitespace and comments are tokens, and so is
//! malformed input, so the lexemes of the stream always concatenate back to
//! the original text.
//!
//! # Example Usage
//!
//! ```
//! use jslex_lex::{Lexer, TokenKind};
//!
//! let source = "let x = 'hi'; // greet";
//! let mut lexer = Lexer::new(source);
//!
//! // Get tokens one at a time
//! let first = lexer.next_token().unwrap();
//! assert_eq!(first.kind, TokenKind::Keyword);
//! assert_eq!(first.lexeme, "let");
//!
//! // Or iterate over the rest
//! let rest: String = lexer.map(|t| t.lexeme).collect();
//! assert_eq!(rest, " x = 'hi'; // greet");
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token and token kind definitions, keyword table
//! - [`lexer`] - Main lexer implementation
//! - [`cursor`] - Character cursor for source traversal
//! - [`unicode`] - Character classes for identifiers and whitespace
//! - [`error`] - Lexical error kinds and their diagnostic codes
//!
//! # Token Categories
//!
//! | kind | examples |
//! |---|---|
//! | Keyword | `function`, `let`, `typeof`, `await` |
//! | Identifier | `x`, `$el`, `_private`, `café` |
//! | String | `'a'`, `"b\n"`, `` `t ${x}` `` |
//! | Number | `42`, `3.14`, `.5`, `1e-9`, `0xFF`, `1_000n` |
//! | Comment | `// line`, `/* block */` |
//! | Operator | `===`, `=>`, `?.`, `>>>=`, `+` |
//! | Punctuation | `( ) { } [ ] ; , . :` |
//! | Whitespace | runs of spaces, tabs and line breaks |
//! | Error | `@`, `'unterminated`, `3.14.15`, `/* open` |
//!
//! # Error Handling
//!
//! The lexer never fails. Malformed input becomes an Error token and lexing
//! resumes right after it. Attach a [`jslex_util::Handler`] with
//! [`Lexer::with_handler`] to also collect a diagnostic for every error
//! token.
//!
//! Regular expression literals are not recognized: `/` outside a comment is
//! always the division operator.

pub mod cursor;
pub mod error;
pub mod lexer;
pub mod token;
pub mod unicode;

#[cfg(test)]
mod edge_cases;

pub use error::LexError;
pub use lexer::{is_valid_number, Lexer};
pub use token::{is_keyword, Token, TokenKind, KEYWORDS};

/// Lexes the whole of `source` into a vector.
///
/// ```
/// let tokens = jslex_lex::tokenize("a   b");
/// assert_eq!(tokens.len(), 3);
/// assert_eq!(tokens[1].lexeme, "   ");
/// ```
pub fn tokenize(source: &str) -> Vec<Token<'_>> {
    Lexer::new(source).collect()
}
