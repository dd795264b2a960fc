//! Token styles for terminal highlighting.
//!
//! The mapping from token kind to style is a fixed table: a `const fn` with
//! an exhaustive match, so adding a token kind fails to compile until it has
//! a style.

use jslex_lex::TokenKind;
use owo_colors::{OwoColorize, Style};

/// A 24-bit color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// How one token kind is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TokenStyle {
    /// Foreground color; `None` keeps the terminal default.
    pub foreground: Option<Rgb>,
    /// Background color; `None` keeps the terminal default.
    pub background: Option<Rgb>,
    /// Bold weight.
    pub bold: bool,
    /// Italic slant.
    pub italic: bool,
}

impl TokenStyle {
    /// No styling at all.
    pub const PLAIN: Self = Self {
        foreground: None,
        background: None,
        bold: false,
        italic: false,
    };

    const fn fg(color: Rgb) -> Self {
        Self {
            foreground: Some(color),
            ..Self::PLAIN
        }
    }

    /// Returns true when drawing with this style changes nothing.
    pub fn is_plain(&self) -> bool {
        *self == Self::PLAIN
    }

    /// Converts to an `owo-colors` style.
    pub fn to_owo(self) -> Style {
        let mut style = Style::new();
        if let Some(Rgb(r, g, b)) = self.foreground {
            style = style.truecolor(r, g, b);
        }
        if let Some(Rgb(r, g, b)) = self.background {
            style = style.on_truecolor(r, g, b);
        }
        if self.bold {
            style = style.bold();
        }
        if self.italic {
            style = style.italic();
        }
        style
    }

    /// Appends `text` to `out`, wrapped in escape codes unless plain.
    pub fn paint_into(self, text: &str, out: &mut String) {
        if text.is_empty() || self.is_plain() {
            out.push_str(text);
        } else {
            out.push_str(&text.style(self.to_owo()).to_string());
        }
    }
}

const RED: Rgb = Rgb(255, 0, 0);
const GREEN: Rgb = Rgb(0, 128, 0);
const NAVY: Rgb = Rgb(0, 0, 128);
const GRAY: Rgb = Rgb(128, 128, 128);
const BLUE: Rgb = Rgb(0, 0, 255);
const PURPLE: Rgb = Rgb(128, 0, 128);
const YELLOW: Rgb = Rgb(255, 255, 0);

/// Returns the style for a token kind.
///
/// Identifiers keep the terminal's default foreground so they stay
/// readable on both light and dark backgrounds.
pub const fn style_for(kind: TokenKind) -> TokenStyle {
    match kind {
        TokenKind::Keyword => TokenStyle {
            bold: true,
            ..TokenStyle::fg(RED)
        },
        TokenKind::Identifier => TokenStyle::PLAIN,
        TokenKind::String => TokenStyle::fg(GREEN),
        TokenKind::Number => TokenStyle::fg(NAVY),
        TokenKind::Comment => TokenStyle {
            italic: true,
            ..TokenStyle::fg(GRAY)
        },
        TokenKind::Operator => TokenStyle::fg(BLUE),
        TokenKind::Punctuation => TokenStyle::fg(PURPLE),
        TokenKind::Whitespace => TokenStyle::PLAIN,
        TokenKind::Error => TokenStyle {
            background: Some(YELLOW),
            ..TokenStyle::fg(RED)
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_entries() {
        assert_eq!(style_for(TokenKind::Keyword).foreground, Some(RED));
        assert!(style_for(TokenKind::Keyword).bold);
        assert_eq!(style_for(TokenKind::String).foreground, Some(Rgb(0, 128, 0)));
        assert_eq!(style_for(TokenKind::Number).foreground, Some(Rgb(0, 0, 128)));
        assert!(style_for(TokenKind::Comment).italic);
        assert_eq!(style_for(TokenKind::Punctuation).foreground, Some(Rgb(128, 0, 128)));
        assert_eq!(style_for(TokenKind::Error).background, Some(YELLOW));
    }

    #[test]
    fn test_trivia_and_identifiers_are_plain() {
        assert!(style_for(TokenKind::Whitespace).is_plain());
        assert!(style_for(TokenKind::Identifier).is_plain());
    }

    #[test]
    fn test_styled_kinds_are_distinct() {
        let styled: Vec<_> = TokenKind::ALL
            .iter()
            .map(|&k| style_for(k))
            .filter(|s| !s.is_plain())
            .collect();
        for (i, a) in styled.iter().enumerate() {
            for b in &styled[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_paint_plain_is_verbatim() {
        let mut out = String::new();
        TokenStyle::PLAIN.paint_into("  \n", &mut out);
        assert_eq!(out, "  \n");
    }

    #[test]
    fn test_paint_styled_wraps_text() {
        let mut out = String::new();
        style_for(TokenKind::Keyword).paint_into("let", &mut out);
        assert!(out.starts_with('\u{1b}'));
        assert!(out.contains("let"));
        assert!(out.ends_with("\u{1b}[0m"));
    }
}
