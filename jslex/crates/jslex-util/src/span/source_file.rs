//! Source file with precomputed line table.
//!
//! [`SourceFile`] maps byte offsets and spans back to the source lines they
//! came from, which is what diagnostics need to show a snippet.

use std::sync::Arc;

use super::Span;
use crate::diagnostic::SourceSnippet;
use crate::error::{SourceMapError, SourceMapResult};

/// A source file with its content and metadata
///
/// # Examples
///
/// ```
/// use jslex_util::span::SourceFile;
///
/// let file = SourceFile::new("main.js", "let a = 1;\nlet b = 2;");
/// assert_eq!(file.name(), "main.js");
/// assert_eq!(file.line_count(), 2);
/// assert_eq!(file.line(2).unwrap(), "let b = 2;");
/// ```
#[derive(Clone, Debug)]
pub struct SourceFile {
    /// File name (path or display name)
    name: String,
    /// File content
    content: Arc<str>,
    /// Byte offset of the first character of every line
    line_starts: Arc<[usize]>,
}

impl SourceFile {
    /// Create a new source file
    pub fn new(name: impl Into<String>, content: impl Into<Arc<str>>) -> Self {
        let content = content.into();
        let line_starts = Self::line_starts(&content);
        Self {
            name: name.into(),
            content,
            line_starts,
        }
    }

    fn line_starts(content: &str) -> Arc<[usize]> {
        let mut line_starts = vec![0];
        line_starts.extend(
            content
                .bytes()
                .enumerate()
                .filter(|&(_, b)| b == b'\n')
                .map(|(i, _)| i + 1),
        );
        line_starts.into()
    }

    /// Get the file name
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the file content
    #[inline]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the total number of lines
    ///
    /// A trailing newline starts a new (empty) line.
    #[inline]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Convert a byte offset to 1-based (line, column) coordinates.
    ///
    /// The column counts characters from the start of the line.
    ///
    /// ```
    /// use jslex_util::span::SourceFile;
    ///
    /// let file = SourceFile::new("a.js", "x\nλy");
    /// assert_eq!(file.offset_to_line_col(0), (1, 1));
    /// assert_eq!(file.offset_to_line_col(4), (2, 2));
    /// ```
    pub fn offset_to_line_col(&self, offset: usize) -> (usize, usize) {
        let offset = offset.min(self.content.len());
        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(insert_point) => insert_point.saturating_sub(1),
        };
        let line_start = self.line_starts[line];
        let column = self
            .content
            .get(line_start..offset)
            .map_or(offset - line_start, |prefix| prefix.chars().count());
        (line + 1, column + 1)
    }

    /// Get a specific source line (1-based), without its line terminator.
    pub fn line(&self, line: usize) -> SourceMapResult<&str> {
        let max_lines = self.line_count();
        if line == 0 || line > max_lines {
            return Err(SourceMapError::InvalidLineNumber { line, max_lines });
        }
        let start = self.line_starts[line - 1];
        let end = self
            .line_starts
            .get(line)
            .copied()
            .unwrap_or(self.content.len());
        Ok(self.content[start..end].trim_end_matches(['\n', '\r']))
    }

    /// Build a snippet that underlines `span` on its first line.
    ///
    /// Spans that continue past the end of their first line are underlined
    /// up to the end of that line.
    pub fn snippet(&self, span: Span) -> SourceMapResult<SourceSnippet> {
        if span.start > span.end {
            return Err(SourceMapError::InvalidSpan {
                start: span.start,
                end: span.end,
            });
        }
        if span.end > self.content.len() {
            return Err(SourceMapError::SpanOutOfBounds {
                file_len: self.content.len(),
                span_start: span.start,
                span_end: span.end,
            });
        }

        let (line_number, start_column) = self.offset_to_line_col(span.start);
        let line = self.line(line_number)?;
        let line_width = line.chars().count();
        let covered = self.content[span.range()]
            .chars()
            .take_while(|&c| c != '\n' && c != '\r')
            .count();
        let end_column = (start_column + covered).min(line_width + 1);

        Ok(SourceSnippet::new(line, line_number, start_column, end_column))
    }
}
