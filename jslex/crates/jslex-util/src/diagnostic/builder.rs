//! Diagnostic builder for fluent diagnostic construction.
//!
//! This module provides [`DiagnosticBuilder`] and [`SourceSnippet`], the
//! caret-underlined view of a source line used when printing diagnostics.

use super::{Diagnostic, DiagnosticCode, Handler};
use crate::Span;

/// A source code snippet for display in diagnostics
///
/// ```
/// use jslex_util::diagnostic::SourceSnippet;
///
/// let snippet = SourceSnippet::new("let s = 'abc", 3, 9, 13);
/// assert_eq!(snippet.format(), "  3 | let s = 'abc\n    |         ^^^^");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceSnippet {
    /// The source line content
    pub line: String,
    /// Line number (1-based)
    pub line_number: usize,
    /// Column where the issue starts (1-based)
    pub start_column: usize,
    /// Column where the issue ends (1-based, exclusive)
    pub end_column: usize,
}

impl SourceSnippet {
    /// Create a new source snippet
    pub fn new(
        line: impl Into<String>,
        line_number: usize,
        start_column: usize,
        end_column: usize,
    ) -> Self {
        Self {
            line: line.into(),
            line_number,
            start_column,
            end_column,
        }
    }

    /// Format the snippet for display
    ///
    /// Returns the source line prefixed by its number, followed by a caret
    /// line underlining the relevant range. Tabs in the source line are kept
    /// in the caret line so that carets stay aligned.
    pub fn format(&self) -> String {
        let width = self.line_number.to_string().len().max(3);
        let mut result = format!("{:>width$} | {}\n", self.line_number, self.line);
        result.push_str(&format!("{:>width$} | ", ""));

        let underline_start = self.start_column.saturating_sub(1);
        for c in self.line.chars().take(underline_start) {
            result.push(if c == '\t' { '\t' } else { ' ' });
        }
        // Lines shorter than the start column still get padded
        let line_width = self.line.chars().count();
        for _ in line_width..underline_start {
            result.push(' ');
        }

        let underline_len = self.end_column.saturating_sub(self.start_column).max(1);
        result.push_str(&"^".repeat(underline_len));
        result
    }
}

/// Builder for constructing diagnostics with a fluent API
///
/// ```
/// use jslex_util::diagnostic::{DiagnosticBuilder, DiagnosticCode};
/// use jslex_util::Span;
///
/// let diag = DiagnosticBuilder::error("invalid numeric literal '1e'")
///     .code(DiagnosticCode::E_LEXER_INVALID_NUMBER)
///     .span(Span::new(0, 2, 1, 1))
///     .help("an exponent needs at least one digit")
///     .build();
///
/// assert_eq!(diag.to_string(), "error[E1003]: invalid numeric literal '1e'");
/// assert_eq!(diag.helps.len(), 1);
/// ```
#[derive(Debug)]
pub struct DiagnosticBuilder {
    diagnostic: Diagnostic,
}

impl DiagnosticBuilder {
    /// Start an error diagnostic
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            diagnostic: Diagnostic::new(message, Span::DUMMY),
        }
    }

    /// Set the diagnostic code
    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.diagnostic.code = Some(code);
        self
    }

    /// Set the source location
    pub fn span(mut self, span: Span) -> Self {
        self.diagnostic.span = span;
        self
    }

    /// Add a help suggestion
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.diagnostic.helps.push(help.into());
        self
    }

    /// Finish building the diagnostic
    pub fn build(self) -> Diagnostic {
        self.diagnostic
    }

    /// Build the diagnostic and record it in `handler`
    pub fn emit(self, handler: &Handler) {
        handler.emit_diagnostic(self.build());
    }
}
