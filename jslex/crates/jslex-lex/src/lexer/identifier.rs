//! Identifier and keyword lexing.

use crate::token::{is_keyword, TokenKind};
use crate::unicode::is_ident_continue;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an identifier, reclassifying reserved words as keywords.
    pub(crate) fn lex_identifier(&mut self) -> TokenKind {
        self.cursor.advance();
        self.cursor.eat_while(is_ident_continue);

        if is_keyword(self.cursor.slice_from(self.token_start)) {
            TokenKind::Keyword
        } else {
            TokenKind::Identifier
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
    fn test_keyword_precedence() {
        assert_eq!(kinds("function"), vec![(TokenKind::Keyword, "function")]);
        assert_eq!(
            kinds("function1"),
            vec![(TokenKind::Identifier, "function1")]
        );
        assert_eq!(kinds("Function"), vec![(TokenKind::Identifier, "Function")]);
    }

    #[test]
    fn test_dollar_and_underscore() {
        assert_eq!(kinds("$"), vec![(TokenKind::Identifier, "$")]);
        assert_eq!(kinds("_x$1"), vec![(TokenKind::Identifier, "_x$1")]);
        assert_eq!(kinds("$el"), vec![(TokenKind::Identifier, "$el")]);
    }

    #[test]
    fn test_unicode_identifiers() {
        assert_eq!(kinds("café"), vec![(TokenKind::Identifier, "café")]);
        assert_eq!(kinds("变量"), vec![(TokenKind::Identifier, "变量")]);
        assert_eq!(
            kinds("a\u{200D}b"),
            vec![(TokenKind::Identifier, "a\u{200D}b")]
        );
    }

    #[test]
    fn test_identifier_stops_at_operator() {
        assert_eq!(
            kinds("a-b"),
            vec![
                (TokenKind::Identifier, "a"),
                (TokenKind::Operator, "-"),
                (TokenKind::Identifier, "b"),
            ]
        );
    }

    #[test]
    fn test_contextual_words_are_keywords() {
        assert_eq!(
            kinds("async await"),
            vec![
                (TokenKind::Keyword, "async"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Keyword, "await"),
            ]
        );
    }
}
