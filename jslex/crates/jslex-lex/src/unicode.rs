//! Character classes used by the lexer.
//!
//! Identifier classes follow Unicode `ID_Start` / `ID_Continue` (via the
//! XID tables) extended with the characters JavaScript adds to them.

use unicode_xid::UnicodeXID;

/// Checks if a character can start an identifier.
///
/// # Example
///
/// ```
/// use jslex_lex::unicode::is_ident_start;
///
/// assert!(is_ident_start('a'));
/// assert!(is_ident_start('$'));
/// assert!(is_ident_start('_'));
/// assert!(is_ident_start('λ'));
/// assert!(!is_ident_start('1'));
/// assert!(!is_ident_start('#'));
/// ```
#[inline]
pub fn is_ident_start(c: char) -> bool {
    if c.is_ascii() {
        c.is_ascii_alphabetic() || c == '$' || c == '_'
    } else {
        c.is_xid_start()
    }
}

/// Checks if a character can continue an identifier.
///
/// # Example
///
/// ```
/// use jslex_lex::unicode::is_ident_continue;
///
/// assert!(is_ident_continue('9'));
/// assert!(is_ident_continue('$'));
/// assert!(is_ident_continue('\u{200D}'));
/// assert!(!is_ident_continue('-'));
/// ```
#[inline]
pub fn is_ident_continue(c: char) -> bool {
    if c.is_ascii() {
        c.is_ascii_alphanumeric() || c == '$' || c == '_'
    } else {
        // ZWNJ and ZWJ
        c == '\u{200C}' || c == '\u{200D}' || c.is_xid_continue()
    }
}

/// Checks if a character belongs to a whitespace run.
///
/// Line breaks are whitespace; a byte order mark is too, so a leading BOM
/// is kept as an ordinary whitespace token.
///
/// ```
/// use jslex_lex::unicode::is_whitespace;
///
/// assert!(is_whitespace('\t'));
/// assert!(is_whitespace('\r'));
/// assert!(is_whitespace('\u{FEFF}'));
/// assert!(!is_whitespace('\u{A0}'));
/// ```
#[inline]
pub fn is_whitespace(c: char) -> bool {
    matches!(
        c,
        ' ' | '\t' | '\n' | '\r' | '\u{000B}' | '\u{000C}' | '\u{FEFF}'
    )
}

/// Checks if a character ends a line comment or a quoted string.
#[inline]
pub fn is_line_terminator(c: char) -> bool {
    c == '\n' || c == '\r'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_only_continue() {
        for c in '0'..='9' {
            assert!(!is_ident_start(c));
            assert!(is_ident_continue(c));
        }
    }

    #[test]
    fn test_non_ascii_letters() {
        assert!(is_ident_start('é'));
        assert!(is_ident_start('中'));
        assert!(is_ident_continue('ñ'));
    }

    #[test]
    fn test_joiners_do_not_start() {
        assert!(!is_ident_start('\u{200C}'));
        assert!(!is_ident_start('\u{200D}'));
        assert!(is_ident_continue('\u{200C}'));
    }

    #[test]
    fn test_emoji_is_not_identifier() {
        assert!(!is_ident_start('😀'));
        assert!(!is_ident_continue('😀'));
    }

    #[test]
    fn test_line_terminators() {
        assert!(is_line_terminator('\n'));
        assert!(is_line_terminator('\r'));
        assert!(!is_line_terminator(' '));
    }
}
