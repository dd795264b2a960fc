//! Operator lexing.
//!
//! Each method is entered with the cursor on the operator's first character
//! and consumes the longest operator starting there.

use crate::token::TokenKind;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes slash, comment start, or slash-equals.
    ///
    /// Handles: `/`, `//`, `/* */`, `/=`
    pub(crate) fn lex_slash(&mut self) -> TokenKind {
        self.cursor.advance();

        if self.cursor.match_char('/') {
            return self.lex_line_comment();
        }
        if self.cursor.match_char('*') {
            return self.lex_block_comment();
        }
        self.cursor.match_char('=');
        TokenKind::Operator
    }

    /// Handles: `+`, `++`, `+=`
    pub(crate) fn lex_plus(&mut self) -> TokenKind {
        self.cursor.advance();
        if !self.cursor.match_char('+') {
            self.cursor.match_char('=');
        }
        TokenKind::Operator
    }

    /// Handles: `-`, `--`, `-=`
    pub(crate) fn lex_minus(&mut self) -> TokenKind {
        self.cursor.advance();
        if !self.cursor.match_char('-') {
            self.cursor.match_char('=');
        }
        TokenKind::Operator
    }

    /// Handles: `*`, `*=`, `**`, `**=`
    pub(crate) fn lex_star(&mut self) -> TokenKind {
        self.cursor.advance();
        self.cursor.match_char('*');
        self.cursor.match_char('=');
        TokenKind::Operator
    }

    /// Handles: `%`, `%=`
    pub(crate) fn lex_percent(&mut self) -> TokenKind {
        self.cursor.advance();
        self.cursor.match_char('=');
        TokenKind::Operator
    }

    /// Handles: `=`, `==`, `===`, `=>`
    pub(crate) fn lex_equals(&mut self) -> TokenKind {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            self.cursor.match_char('=');
        } else {
            self.cursor.match_char('>');
        }
        TokenKind::Operator
    }

    /// Handles: `!`, `!=`, `!==`
    pub(crate) fn lex_bang(&mut self) -> TokenKind {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            self.cursor.match_char('=');
        }
        TokenKind::Operator
    }

    /// Handles: `<`, `<=`, `<<`, `<<=`
    pub(crate) fn lex_less(&mut self) -> TokenKind {
        self.cursor.advance();
        self.cursor.match_char('<');
        self.cursor.match_char('=');
        TokenKind::Operator
    }

    /// Handles: `>`, `>=`, `>>`, `>>=`, `>>>`, `>>>=`
    pub(crate) fn lex_greater(&mut self) -> TokenKind {
        self.cursor.advance();
        if self.cursor.match_char('>') {
            self.cursor.match_char('>');
        }
        self.cursor.match_char('=');
        TokenKind::Operator
    }

    /// Handles: `&`, `&=`, `&&`, `&&=`
    pub(crate) fn lex_ampersand(&mut self) -> TokenKind {
        self.cursor.advance();
        self.cursor.match_char('&');
        self.cursor.match_char('=');
        TokenKind::Operator
    }

    /// Handles: `|`, `|=`, `||`, `||=`
    pub(crate) fn lex_pipe(&mut self) -> TokenKind {
        self.cursor.advance();
        self.cursor.match_char('|');
        self.cursor.match_char('=');
        TokenKind::Operator
    }

    /// Handles: `^`, `^=`
    pub(crate) fn lex_caret(&mut self) -> TokenKind {
        self.cursor.advance();
        self.cursor.match_char('=');
        TokenKind::Operator
    }

    /// Handles: `?`, `??`, `??=`, `?.`
    ///
    /// `?.` is not formed before a digit, so `a?.5:b` is a conditional.
    pub(crate) fn lex_question(&mut self) -> TokenKind {
        self.cursor.advance();
        if self.cursor.match_char('?') {
            self.cursor.match_char('=');
        } else if self.cursor.current_char() == '.'
            && !self.cursor.peek_char(1).is_ascii_digit()
        {
            self.cursor.advance();
        }
        TokenKind::Operator
    }
}
