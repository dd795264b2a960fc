//! Span module - Source location tracking.
//!
//! A [`Span`] records where a token came from: its byte range in the source
//! and the human-readable line/column of its first character.
//!
//! # Examples
//!
//! ```
//! use jslex_util::span::Span;
//!
//! let span = Span::new(4, 9, 1, 5);
//! assert_eq!(span.len(), 5);
//! assert_eq!(span.to_string(), "1:5");
//! ```

mod source_file;

pub use source_file::SourceFile;

use std::fmt;
use std::ops::Range;

/// Source location span
///
/// - `start`/`end` are byte offsets (end exclusive)
/// - `line`/`column` are 1-based and describe `start`; columns count
///   characters, not bytes
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start byte offset in source
    pub start: usize,
    /// End byte offset in source (exclusive)
    pub end: usize,
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based)
    pub column: u32,
}

impl Span {
    /// Dummy span for testing
    ///
    /// # Examples
    ///
    /// ```
    /// use jslex_util::span::Span;
    ///
    /// assert_eq!(Span::DUMMY.start, 0);
    /// assert!(Span::DUMMY.is_empty());
    /// ```
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 0,
        column: 0,
    };

    /// Create a new span
    ///
    /// # Arguments
    ///
    /// * `start` - Start byte offset
    /// * `end` - End byte offset (exclusive)
    /// * `line` - Line number (1-based)
    /// * `column` - Column number (1-based)
    #[inline]
    pub const fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Length of the span in bytes.
    #[inline]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span covers no bytes.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The byte range covered by this span, suitable for slicing the source.
    ///
    /// ```
    /// use jslex_util::span::Span;
    ///
    /// let source = "let x";
    /// let span = Span::new(4, 5, 1, 5);
    /// assert_eq!(&source[span.range()], "x");
    /// ```
    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_len() {
        let span = Span::new(3, 10, 1, 4);
        assert_eq!(span.len(), 7);
        assert!(!span.is_empty());
    }

    #[test]
    fn test_span_inverted_len_saturates() {
        let span = Span::new(10, 3, 1, 1);
        assert_eq!(span.len(), 0);
        assert!(span.is_empty());
    }

    #[test]
    fn test_span_display() {
        assert_eq!(Span::new(0, 1, 12, 7).to_string(), "12:7");
    }

    #[test]
    fn test_span_range() {
        assert_eq!(Span::new(2, 5, 1, 3).range(), 2..5);
    }
}
