//! Core lexer implementation.
//!
//! This module contains the main Lexer struct and its core methods.

use std::iter::FusedIterator;

use jslex_util::{DiagnosticBuilder, Handler, Span};
use tracing::trace;

use crate::cursor::Cursor;
use crate::error::LexError;
use crate::token::{Token, TokenKind};
use crate::unicode::{is_ident_start, is_whitespace};

/// Pull-based lexer for JavaScript source text.
///
/// Every call to [`Lexer::next_token`] consumes at least one character and
/// returns exactly one token, so the token stream covers the input without
/// gaps. Malformed input becomes [`TokenKind::Error`] tokens; scanning never
/// stops early.
///
/// ```
/// use jslex_lex::{Lexer, TokenKind};
///
/// let mut lexer = Lexer::new("x===1");
/// let kinds: Vec<_> = std::iter::from_fn(|| lexer.next_token())
///     .map(|t| (t.kind, t.lexeme))
///     .collect();
/// assert_eq!(
///     kinds,
///     [
///         (TokenKind::Identifier, "x"),
///         (TokenKind::Operator, "==="),
///         (TokenKind::Number, "1"),
///     ]
/// );
/// ```
#[derive(Debug)]
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Optional collector for lexical diagnostics.
    handler: Option<&'a Handler>,

    /// Starting position of the current token (byte offset).
    pub(crate) token_start: usize,

    /// Line number where the current token starts (1-based).
    token_start_line: u32,

    /// Column number where the current token starts (1-based).
    token_start_column: u32,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given source code.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            handler: None,
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
        }
    }

    /// Creates a lexer that records one diagnostic per error token.
    ///
    /// ```
    /// use jslex_lex::Lexer;
    /// use jslex_util::Handler;
    ///
    /// let handler = Handler::new();
    /// let count = Lexer::with_handler("a @ b", &handler).count();
    /// assert_eq!(count, 5);
    /// assert_eq!(handler.error_count(), 1);
    /// ```
    pub fn with_handler(source: &'a str, handler: &'a Handler) -> Self {
        Self {
            handler: Some(handler),
            ..Self::new(source)
        }
    }

    /// Returns the next token, or `None` once the input is exhausted.
    pub fn next_token(&mut self) -> Option<Token<'a>> {
        if self.cursor.is_at_end() {
            return None;
        }

        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();

        let kind = match self.cursor.current_char() {
            c if is_whitespace(c) => self.lex_whitespace(),
            '/' => self.lex_slash(),
            quote @ ('"' | '\'') => self.lex_string(quote),
            '`' => self.lex_template(),
            c if c.is_ascii_digit() => self.lex_number(),
            '.' if self.cursor.peek_char(1).is_ascii_digit() => self.lex_number(),
            c if is_ident_start(c) => self.lex_identifier(),
            '(' | ')' | '{' | '}' | '[' | ']' | ';' | ',' | '.' | ':' => {
                self.cursor.advance();
                TokenKind::Punctuation
            }
            '+' => self.lex_plus(),
            '-' => self.lex_minus(),
            '*' => self.lex_star(),
            '%' => self.lex_percent(),
            '=' => self.lex_equals(),
            '!' => self.lex_bang(),
            '<' => self.lex_less(),
            '>' => self.lex_greater(),
            '&' => self.lex_ampersand(),
            '|' => self.lex_pipe(),
            '^' => self.lex_caret(),
            '?' => self.lex_question(),
            '~' => {
                self.cursor.advance();
                TokenKind::Operator
            }
            c => {
                self.cursor.advance();
                self.report_error(LexError::UnexpectedChar(c));
                TokenKind::Error
            }
        };

        Some(Token::new(
            kind,
            self.cursor.slice_from(self.token_start),
            self.current_span(),
        ))
    }

    /// Span from the start of the current token to the cursor.
    fn current_span(&self) -> Span {
        Span::new(
            self.token_start,
            self.cursor.position(),
            self.token_start_line,
            self.token_start_column,
        )
    }

    /// Records `error` against the text consumed so far for this token.
    ///
    /// Must be called after the error token's characters are consumed.
    pub(crate) fn report_error(&self, error: LexError) {
        let span = self.current_span();
        trace!(
            code = %error.code(),
            start = span.start,
            end = span.end,
            "{}",
            error
        );

        let Some(handler) = self.handler else {
            return;
        };
        let mut builder = DiagnosticBuilder::error(error.to_string())
            .code(error.code())
            .span(span);
        if let Some(help) = error.help() {
            builder = builder.help(help);
        }
        builder.emit(handler);
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Returns the source text being lexed.
    pub fn source(&self) -> &'a str {
        self.cursor.source()
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

impl FusedIterator for Lexer<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<(TokenKind, &str)> {
        Lexer::new(source).map(|t| (t.kind, t.lexeme)).collect()
    }

    #[test]
    fn test_empty_source() {
        let mut lexer = Lexer::new("");
        assert!(lexer.next_token().is_none());
        assert!(lexer.next_token().is_none());
    }

    #[test]
    fn test_fused_after_end() {
        let mut lexer = Lexer::new("a");
        assert!(lexer.next().is_some());
        assert!(lexer.next().is_none());
        assert!(lexer.next().is_none());
    }

    #[test]
    fn test_simple_statement() {
        assert_eq!(
            kinds("let x = 42;"),
            vec![
                (TokenKind::Keyword, "let"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Identifier, "x"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Operator, "="),
                (TokenKind::Whitespace, " "),
                (TokenKind::Number, "42"),
                (TokenKind::Punctuation, ";"),
            ]
        );
    }

    #[test]
    fn test_punctuation() {
        for p in ["(", ")", "{", "}", "[", "]", ";", ",", ".", ":"] {
            assert_eq!(kinds(p), vec![(TokenKind::Punctuation, p)]);
        }
    }

    #[test]
    fn test_unexpected_characters() {
        assert_eq!(
            kinds("a@b"),
            vec![
                (TokenKind::Identifier, "a"),
                (TokenKind::Error, "@"),
                (TokenKind::Identifier, "b"),
            ]
        );
        assert_eq!(kinds("\\"), vec![(TokenKind::Error, "\\")]);
        assert_eq!(kinds("\0"), vec![(TokenKind::Error, "\0")]);
        assert_eq!(kinds("😀"), vec![(TokenKind::Error, "😀")]);
    }

    #[test]
    fn test_hashbang_is_not_special() {
        assert_eq!(
            kinds("#!"),
            vec![(TokenKind::Error, "#"), (TokenKind::Operator, "!")]
        );
    }

    #[test]
    fn test_spans_track_lines() {
        let tokens: Vec<_> = Lexer::new("a\n  b").collect();
        assert_eq!(tokens[0].span, Span::new(0, 1, 1, 1));
        assert_eq!(tokens[1].span, Span::new(1, 4, 1, 2));
        assert_eq!(tokens[2].span, Span::new(4, 5, 2, 3));
    }

    #[test]
    fn test_columns_count_characters() {
        let tokens: Vec<_> = Lexer::new("'é' x").collect();
        assert_eq!(tokens[2].lexeme, "x");
        assert_eq!(tokens[2].span.column, 5);
        assert_eq!(tokens[2].span.start, 5);
    }

    #[test]
    fn test_handler_receives_diagnostic() {
        let handler = Handler::new();
        let tokens: Vec<_> = Lexer::with_handler("x = 'open", &handler).collect();
        assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Error));

        let diagnostics = handler.diagnostics();
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics[0].to_string(),
            "error[E1002]: unterminated string literal"
        );
        assert_eq!(diagnostics[0].span, Span::new(4, 9, 1, 5));
        assert_eq!(diagnostics[0].helps.len(), 1);
    }

    #[test]
    fn test_position_accessors() {
        let mut lexer = Lexer::new("ab\ncd");
        lexer.next_token();
        assert_eq!(lexer.position(), 2);
        lexer.next_token();
        assert_eq!((lexer.line(), lexer.column()), (2, 1));
        assert_eq!(lexer.source(), "ab\ncd");
    }
}
