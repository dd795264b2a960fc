//! String and template literal lexing.

use crate::error::LexError;
use crate::token::TokenKind;
use crate::unicode::is_line_terminator;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a `'` or `"` string, delimiters included.
    ///
    /// An unescaped line break or the end of input ends the token as an
    /// error; the line break itself is not consumed.
    pub(crate) fn lex_string(&mut self, quote: char) -> TokenKind {
        self.cursor.advance();

        loop {
            if self.cursor.is_at_end() {
                self.report_error(LexError::UnterminatedString);
                return TokenKind::Error;
            }

            match self.cursor.current_char() {
                c if c == quote => {
                    self.cursor.advance();
                    return TokenKind::String;
                }
                c if is_line_terminator(c) => {
                    self.report_error(LexError::UnterminatedString);
                    return TokenKind::Error;
                }
                '\\' => {
                    self.cursor.advance();
                    self.skip_escaped_char();
                }
                _ => self.cursor.advance(),
            }
        }
    }

    /// Lexes a backtick template literal, delimiters included.
    ///
    /// Templates may span lines. `${...}` substitutions stay inside the
    /// token; a backtick inside a substitution still closes it.
    pub(crate) fn lex_template(&mut self) -> TokenKind {
        self.cursor.advance();

        loop {
            if self.cursor.is_at_end() {
                self.report_error(LexError::UnterminatedTemplate);
                return TokenKind::Error;
            }

            match self.cursor.current_char() {
                '`' => {
                    self.cursor.advance();
                    return TokenKind::String;
                }
                '\\' => {
                    self.cursor.advance();
                    self.skip_escaped_char();
                }
                _ => self.cursor.advance(),
            }
        }
    }

    /// Consumes the character after a backslash; `\r\n` counts as one.
    fn skip_escaped_char(&mut self) {
        if self.cursor.current_char() == '\r' && self.cursor.peek_char(1) == '\n' {
            self.cursor.advance_n(2);
        } else {
            self.cursor.advance();
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Lexer, TokenKind};

    fn kinds(source: &str) -> Vec<(TokenKind, &str)> {
        Lexer::new(source).map(|t| (t.kind, t.lexeme)).collect()
    }

    #[test]
    fn test_simple_strings() {
        assert_eq!(kinds("'abc'"), vec![(TokenKind::String, "'abc'")]);
        assert_eq!(kinds("\"abc\""), vec![(TokenKind::String, "\"abc\"")]);
        assert_eq!(kinds("''"), vec![(TokenKind::String, "''")]);
    }

    #[test]
    fn test_other_quote_does_not_close() {
        assert_eq!(kinds("'a\"b'"), vec![(TokenKind::String, "'a\"b'")]);
        assert_eq!(kinds("\"it's\""), vec![(TokenKind::String, "\"it's\"")]);
    }

    #[test]
    fn test_escaped_quote() {
        assert_eq!(kinds(r"'a\'b'"), vec![(TokenKind::String, r"'a\'b'")]);
    }

    #[test]
    fn test_escaped_backslash_before_quote() {
        assert_eq!(
            kinds(r"'a\\' x"),
            vec![
                (TokenKind::String, r"'a\\'"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Identifier, "x"),
            ]
        );
    }

    #[test]
    fn test_line_continuation() {
        assert_eq!(kinds("'a\\\nb'"), vec![(TokenKind::String, "'a\\\nb'")]);
        assert_eq!(
            kinds("'a\\\r\nb'"),
            vec![(TokenKind::String, "'a\\\r\nb'")]
        );
    }

    #[test]
    fn test_unterminated_at_end() {
        assert_eq!(kinds("'abc"), vec![(TokenKind::Error, "'abc")]);
        assert_eq!(kinds("'"), vec![(TokenKind::Error, "'")]);
        assert_eq!(kinds("'abc\\"), vec![(TokenKind::Error, "'abc\\")]);
    }

    #[test]
    fn test_unterminated_at_newline() {
        assert_eq!(
            kinds("'abc\nx"),
            vec![
                (TokenKind::Error, "'abc"),
                (TokenKind::Whitespace, "\n"),
                (TokenKind::Identifier, "x"),
            ]
        );
        assert_eq!(
            kinds("\"a\r\n"),
            vec![(TokenKind::Error, "\"a"), (TokenKind::Whitespace, "\r\n")]
        );
    }

    #[test]
    fn test_template_literal() {
        assert_eq!(
            kinds("`a ${b} c`"),
            vec![(TokenKind::String, "`a ${b} c`")]
        );
        assert_eq!(
            kinds("`line1\nline2`"),
            vec![(TokenKind::String, "`line1\nline2`")]
        );
        assert_eq!(kinds(r"`\``"), vec![(TokenKind::String, r"`\``")]);
    }

    #[test]
    fn test_unterminated_template() {
        assert_eq!(
            kinds("`abc\ndef"),
            vec![(TokenKind::Error, "`abc\ndef")]
        );
    }

    #[test]
    fn test_non_ascii_content() {
        assert_eq!(kinds("'héllo 😀'"), vec![(TokenKind::String, "'héllo 😀'")]);
    }
}
