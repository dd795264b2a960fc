//! Number literal lexing.
//!
//! A numeric run is scanned first and validated afterwards, so a malformed
//! literal such as `3.14.15` or `123abc` becomes a single error token and
//! scanning resumes right after it.
//!
//! Supported forms:
//! - Decimal: `42`, `3.14`, `.5`, `1.`, `6.02e23`, `1E-9`
//! - Hexadecimal: `0xFF`, binary: `0b1010`, octal: `0o755`
//! - Separators between digits: `1_000_000`
//! - BigInt suffix on integers: `10n`, `0xFFn`

use crate::error::LexError;
use crate::token::TokenKind;
use crate::unicode::is_ident_continue;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a numeric run starting at a digit or at `.` before a digit.
    pub(crate) fn lex_number(&mut self) -> TokenKind {
        let prefixed = self.cursor.current_char() == '0'
            && matches!(self.cursor.peek_char(1), 'x' | 'X' | 'b' | 'B' | 'o' | 'O');

        let mut previous = '\0';
        let mut seen_dot = false;
        let mut seen_letter = false;

        while !self.cursor.is_at_end() {
            let c = self.cursor.current_char();
            let continues = match c {
                // A later dot only joins the run when a digit follows, so
                // member access like `1.5.toFixed` ends the literal.
                '.' => (!seen_dot && !seen_letter) || self.cursor.peek_char(1).is_ascii_digit(),
                '+' | '-' => !prefixed && matches!(previous, 'e' | 'E'),
                c => is_ident_continue(c),
            };
            if !continues {
                break;
            }

            seen_dot |= c == '.';
            seen_letter |= c != '_' && !c.is_ascii_digit() && is_ident_continue(c);
            previous = c;
            self.cursor.advance();
        }

        let text = self.cursor.slice_from(self.token_start);
        if is_valid_number(text) {
            TokenKind::Number
        } else {
            self.report_error(LexError::InvalidNumber(text.to_string()));
            TokenKind::Error
        }
    }
}

/// Checks whether `text` is a complete numeric literal.
///
/// ```
/// use jslex_lex::is_valid_number;
///
/// assert!(is_valid_number("3.14"));
/// assert!(is_valid_number("0x1F"));
/// assert!(is_valid_number("1_000n"));
/// assert!(!is_valid_number("3.14.15"));
/// assert!(!is_valid_number("1e"));
/// assert!(!is_valid_number("0x"));
/// ```
pub fn is_valid_number(text: &str) -> bool {
    if let Some((digits, radix)) = strip_radix_prefix(text) {
        let digits = digits.strip_suffix('n').unwrap_or(digits);
        return is_digit_sequence(digits, radix);
    }

    let (mantissa, exponent) = match text.find(['e', 'E']) {
        Some(index) => (&text[..index], Some(&text[index + 1..])),
        None => (text, None),
    };

    if exponent.is_none() && !mantissa.contains('.') {
        if let Some(integer) = mantissa.strip_suffix('n') {
            return is_digit_sequence(integer, 10);
        }
    }

    let mantissa_ok = match mantissa.split_once('.') {
        None => is_digit_sequence(mantissa, 10),
        Some(("", fraction)) => is_digit_sequence(fraction, 10),
        Some((integer, "")) => is_digit_sequence(integer, 10),
        Some((integer, fraction)) => {
            is_digit_sequence(integer, 10) && is_digit_sequence(fraction, 10)
        }
    };

    mantissa_ok
        && exponent.is_none_or(|exp| {
            let exp = exp.strip_prefix(['+', '-']).unwrap_or(exp);
            is_digit_sequence(exp, 10)
        })
}

fn strip_radix_prefix(text: &str) -> Option<(&str, u32)> {
    let rest = text.strip_prefix('0')?;
    let radix = match rest.chars().next()? {
        'x' | 'X' => 16,
        'b' | 'B' => 2,
        'o' | 'O' => 8,
        _ => return None,
    };
    Some((&rest[1..], radix))
}

/// Non-empty digits in `radix`, with single `_` separators between digits.
fn is_digit_sequence(text: &str, radix: u32) -> bool {
    !text.is_empty()
        && !text.starts_with('_')
        && !text.ends_with('_')
        && !text.contains("__")
        && text.chars().all(|c| c == '_' || c.is_digit(radix))
}
