//! Token definitions for the JavaScript lexer.
//!
//! Every token is a classified slice of the input. Trivia (whitespace and
//! comments) and malformed input are tokens too, so concatenating the
//! lexemes of a token stream reproduces the source exactly.

use std::fmt;

use jslex_util::Span;

/// Classification of a token.
///
/// ```
/// use jslex_lex::TokenKind;
///
/// assert_eq!(TokenKind::Keyword.as_str(), "keyword");
/// assert!(TokenKind::Comment.is_trivia());
/// assert!(!TokenKind::Error.is_trivia());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenKind {
    /// Reserved word such as `let` or `function`
    Keyword,
    /// Name that is not a reserved word
    Identifier,
    /// Quoted or template string, delimiters included
    String,
    /// Numeric literal
    Number,
    /// Line or block comment, delimiters included
    Comment,
    /// Operator such as `===` or `>>>=`
    Operator,
    /// Bracket, separator or member dot
    Punctuation,
    /// Maximal run of whitespace characters
    Whitespace,
    /// Malformed or unrecognized input
    Error,
}

impl TokenKind {
    /// Every kind, in declaration order.
    pub const ALL: [TokenKind; 9] = [
        TokenKind::Keyword,
        TokenKind::Identifier,
        TokenKind::String,
        TokenKind::Number,
        TokenKind::Comment,
        TokenKind::Operator,
        TokenKind::Punctuation,
        TokenKind::Whitespace,
        TokenKind::Error,
    ];

    /// Lowercase name used in dumps and JSON output.
    pub const fn as_str(self) -> &'static str {
        match self {
            TokenKind::Keyword => "keyword",
            TokenKind::Identifier => "identifier",
            TokenKind::String => "string",
            TokenKind::Number => "number",
            TokenKind::Comment => "comment",
            TokenKind::Operator => "operator",
            TokenKind::Punctuation => "punctuation",
            TokenKind::Whitespace => "whitespace",
            TokenKind::Error => "error",
        }
    }

    /// Returns true for whitespace and comments.
    pub const fn is_trivia(self) -> bool {
        matches!(self, TokenKind::Whitespace | TokenKind::Comment)
    }

    /// Returns true for malformed input.
    pub const fn is_error(self) -> bool {
        matches!(self, TokenKind::Error)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A classified slice of the source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Token<'a> {
    /// What the lexeme is.
    pub kind: TokenKind,
    /// The exact source text, never empty.
    pub lexeme: &'a str,
    /// Byte range and start position of the lexeme.
    pub span: Span,
}

impl<'a> Token<'a> {
    /// Creates a token.
    pub const fn new(kind: TokenKind, lexeme: &'a str, span: Span) -> Self {
        Self { kind, lexeme, span }
    }

    /// Length of the lexeme in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.lexeme.len()
    }

    /// Always false for tokens produced by the lexer.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lexeme.is_empty()
    }

    /// Returns true for whitespace and comments.
    #[inline]
    pub fn is_trivia(&self) -> bool {
        self.kind.is_trivia()
    }

    /// Returns true for malformed input.
    #[inline]
    pub fn is_error(&self) -> bool {
        self.kind.is_error()
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.kind, self.lexeme)
    }
}

/// Reserved words recognized as [`TokenKind::Keyword`].
///
/// Matching is exact and case-sensitive.
pub const KEYWORDS: &[&str] = &[
    // Declarations
    "var", "let", "const", "function", "class", "extends", "static", "enum",
    // Control flow
    "if", "else", "for", "while", "do", "switch", "case", "default", "break",
    "continue", "return", "try", "catch", "finally", "throw",
    // Literals
    "true", "false", "null", "undefined",
    // Operators spelled as words
    "new", "this", "super", "typeof", "instanceof", "in", "of", "delete", "void",
    // Modules and async
    "import", "export", "async", "await", "yield",
    // Legacy
    "with", "debugger",
];

/// Returns true if `text` is a reserved word.
///
/// ```
/// use jslex_lex::is_keyword;
///
/// assert!(is_keyword("typeof"));
/// assert!(!is_keyword("Let"));
/// assert!(!is_keyword("letter"));
/// ```
pub fn is_keyword(text: &str) -> bool {
    KEYWORDS.contains(&text)
}
