//! Edge case tests for jslex-lex

#[cfg(test)]
mod tests {
    use crate::{tokenize, TokenKind};

    fn lex_all(source: &str) -> Vec<(TokenKind, &str)> {
        tokenize(source).into_iter().map(|t| (t.kind, t.lexeme)).collect()
    }

    fn kinds_only(source: &str) -> Vec<TokenKind> {
        tokenize(source).into_iter().map(|t| t.kind).collect()
    }

    // ==================== BOUNDARIES ====================

    #[test]
    fn test_edge_empty_source() {
        assert!(lex_all("").is_empty());
    }

    #[test]
    fn test_edge_single_char_ident() {
        assert_eq!(lex_all("x"), vec![(TokenKind::Identifier, "x")]);
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10000);
        let source = format!("let {} = 1;", name);
        let tokens = lex_all(&source);
        assert!(tokens.contains(&(TokenKind::Identifier, name.as_str())));
    }

    #[test]
    fn test_edge_long_comment() {
        let source = format!("/*{}*/", "*".repeat(5000));
        assert_eq!(kinds_only(&source), vec![TokenKind::Comment]);
    }

    #[test]
    fn test_edge_only_whitespace() {
        assert_eq!(lex_all("\n\n\t "), vec![(TokenKind::Whitespace, "\n\n\t ")]);
    }

    // ==================== ERRORS AND RECOVERY ====================

    #[test]
    fn test_edge_error_then_valid() {
        assert_eq!(
            lex_all("@@x"),
            vec![
                (TokenKind::Error, "@"),
                (TokenKind::Error, "@"),
                (TokenKind::Identifier, "x"),
            ]
        );
    }

    #[test]
    fn test_edge_lone_quote_at_end() {
        assert_eq!(
            lex_all("x = \""),
            vec![
                (TokenKind::Identifier, "x"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Operator, "="),
                (TokenKind::Whitespace, " "),
                (TokenKind::Error, "\""),
            ]
        );
    }

    #[test]
    fn test_edge_unterminated_string_then_more_code() {
        assert_eq!(
            kinds_only("'abc\nlet y;"),
            vec![
                TokenKind::Error,
                TokenKind::Whitespace,
                TokenKind::Keyword,
                TokenKind::Whitespace,
                TokenKind::Identifier,
                TokenKind::Punctuation,
            ]
        );
    }

    #[test]
    fn test_edge_comment_opener_inside_string() {
        assert_eq!(
            lex_all("'/* not */' // x"),
            vec![
                (TokenKind::String, "'/* not */'"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Comment, "// x"),
            ]
        );
    }

    #[test]
    fn test_edge_quote_inside_comment() {
        assert_eq!(lex_all("// it's"), vec![(TokenKind::Comment, "// it's")]);
    }

    #[test]
    fn test_edge_control_characters() {
        assert_eq!(
            lex_all("\u{1}\u{7f}"),
            vec![(TokenKind::Error, "\u{1}"), (TokenKind::Error, "\u{7f}")]
        );
    }

    #[test]
    fn test_edge_non_breaking_space_is_error() {
        assert_eq!(lex_all("\u{A0}"), vec![(TokenKind::Error, "\u{A0}")]);
    }

    #[test]
    fn test_edge_replacement_character() {
        assert_eq!(
            lex_all("a\u{FFFD}b"),
            vec![
                (TokenKind::Identifier, "a"),
                (TokenKind::Error, "\u{FFFD}"),
                (TokenKind::Identifier, "b"),
            ]
        );
    }

    // ==================== NUMBERS ====================

    #[test]
    fn test_edge_number_then_identifier_char() {
        assert_eq!(lex_all("123abc"), vec![(TokenKind::Error, "123abc")]);
    }

    #[test]
    fn test_edge_number_in_member_expression() {
        assert_eq!(
            lex_all("a[0].b"),
            vec![
                (TokenKind::Identifier, "a"),
                (TokenKind::Punctuation, "["),
                (TokenKind::Number, "0"),
                (TokenKind::Punctuation, "]"),
                (TokenKind::Punctuation, "."),
                (TokenKind::Identifier, "b"),
            ]
        );
    }

    #[test]
    fn test_edge_range_like_dots() {
        assert_eq!(
            lex_all("...x"),
            vec![
                (TokenKind::Punctuation, "."),
                (TokenKind::Punctuation, "."),
                (TokenKind::Punctuation, "."),
                (TokenKind::Identifier, "x"),
            ]
        );
    }

    // ==================== REALISTIC SNIPPETS ====================

    #[test]
    fn test_edge_arrow_function() {
        assert_eq!(
            lex_all("const f = async (a) => a ?? 0;")
                .into_iter()
                .filter(|(k, _)| *k != TokenKind::Whitespace)
                .collect::<Vec<_>>(),
            vec![
                (TokenKind::Keyword, "const"),
                (TokenKind::Identifier, "f"),
                (TokenKind::Operator, "="),
                (TokenKind::Keyword, "async"),
                (TokenKind::Punctuation, "("),
                (TokenKind::Identifier, "a"),
                (TokenKind::Punctuation, ")"),
                (TokenKind::Operator, "=>"),
                (TokenKind::Identifier, "a"),
                (TokenKind::Operator, "??"),
                (TokenKind::Number, "0"),
                (TokenKind::Punctuation, ";"),
            ]
        );
    }

    #[test]
    fn test_edge_regex_is_not_special() {
        assert_eq!(
            kinds_only("/ab+c/g"),
            vec![
                TokenKind::Operator,
                TokenKind::Identifier,
                TokenKind::Operator,
                TokenKind::Identifier,
                TokenKind::Operator,
                TokenKind::Identifier,
            ]
        );
    }

    #[test]
    fn test_edge_crlf_program_roundtrip() {
        let source = "let a = 1;\r\n// c\r\nlet b = `x\r\ny`;\r\n";
        let joined: String = tokenize(source).iter().map(|t| t.lexeme).collect();
        assert_eq!(joined, source);
        assert!(!kinds_only(source).contains(&TokenKind::Error));
    }

    #[test]
    fn test_edge_leading_bom() {
        assert_eq!(
            lex_all("\u{FEFF}var"),
            vec![
                (TokenKind::Whitespace, "\u{FEFF}"),
                (TokenKind::Keyword, "var"),
            ]
        );
    }
}
