//! Comment and whitespace lexing.
//!
//! Both are trivia, and both are returned as tokens rather than skipped.

use crate::error::LexError;
use crate::token::TokenKind;
use crate::unicode::{is_line_terminator, is_whitespace};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a maximal run of whitespace, line breaks included.
    pub(crate) fn lex_whitespace(&mut self) -> TokenKind {
        self.cursor.eat_while(is_whitespace);
        TokenKind::Whitespace
    }

    /// Lexes the rest of a `//` comment.
    ///
    /// Called with the cursor just past `//`. The line terminator is left
    /// for the next token.
    pub(crate) fn lex_line_comment(&mut self) -> TokenKind {
        self.cursor.eat_while(|c| !is_line_terminator(c));
        TokenKind::Comment
    }

    /// Lexes the rest of a `/*` comment, up to and including the first `*/`.
    ///
    /// Called with the cursor just past `/*`. Comments do not nest.
    pub(crate) fn lex_block_comment(&mut self) -> TokenKind {
        loop {
            if self.cursor.is_at_end() {
                self.report_error(LexError::UnterminatedComment);
                return TokenKind::Error;
            }
            if self.cursor.current_char() == '*' && self.cursor.peek_char(1) == '/' {
                self.cursor.advance_n(2);
                return TokenKind::Comment;
            }
            self.cursor.advance();
        }
    }
}
