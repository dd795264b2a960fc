//! Lexical error types.

use jslex_util::DiagnosticCode;
use thiserror::Error;

/// A lexical error attached to an [`Error`](crate::TokenKind::Error) token.
///
/// ```
/// use jslex_lex::LexError;
///
/// let err = LexError::UnexpectedChar('@');
/// assert_eq!(err.to_string(), "unexpected character '@'");
/// assert_eq!(err.code().as_str(), "E1001");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A character that starts no token
    #[error("unexpected character {0:?}")]
    UnexpectedChar(char),

    /// A quoted string cut off by a line break or the end of input
    #[error("unterminated string literal")]
    UnterminatedString,

    /// A numeric run that does not form a valid literal
    #[error("invalid numeric literal '{0}'")]
    InvalidNumber(String),

    /// A block comment without `*/`
    #[error("unterminated block comment")]
    UnterminatedComment,

    /// A template literal without a closing backtick
    #[error("unterminated template literal")]
    UnterminatedTemplate,
}

impl LexError {
    /// The diagnostic code reported for this error.
    pub const fn code(&self) -> DiagnosticCode {
        match self {
            LexError::UnexpectedChar(_) => DiagnosticCode::E_LEXER_UNEXPECTED_CHAR,
            LexError::UnterminatedString => DiagnosticCode::E_LEXER_UNTERMINATED_STRING,
            LexError::InvalidNumber(_) => DiagnosticCode::E_LEXER_INVALID_NUMBER,
            LexError::UnterminatedComment => DiagnosticCode::E_LEXER_UNTERMINATED_COMMENT,
            LexError::UnterminatedTemplate => DiagnosticCode::E_LEXER_UNTERMINATED_TEMPLATE,
        }
    }

    /// A short suggestion shown under the diagnostic, if there is one.
    pub const fn help(&self) -> Option<&'static str> {
        match self {
            LexError::UnexpectedChar(_) => None,
            LexError::UnterminatedString => {
                Some("close the string on the same line, or use a template literal")
            }
            LexError::InvalidNumber(_) => None,
            LexError::UnterminatedComment => Some("add `*/` to close the comment"),
            LexError::UnterminatedTemplate => Some("add a closing '`'"),
        }
    }
}
