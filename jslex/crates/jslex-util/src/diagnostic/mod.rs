//! Diagnostic module - Lexical error reporting infrastructure.
//!
//! Lexical errors never stop tokenization; they are recorded here as
//! [`Diagnostic`]s so that a front end can print them after the fact.
//!
//! # Examples
//!
//! ```
//! use jslex_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler};
//! use jslex_util::Span;
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("unexpected character '@'")
//!     .code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
//!     .span(Span::new(1, 2, 1, 2))
//!     .help("remove the character")
//!     .emit(&handler);
//!
//! let diagnostics = handler.diagnostics();
//! assert_eq!(diagnostics[0].to_string(), "error[E1001]: unexpected character '@'");
//! ```

mod builder;
mod codes;

pub use builder::{DiagnosticBuilder, SourceSnippet};
pub use codes::DiagnosticCode;

use crate::Span;
use std::cell::RefCell;
use std::fmt;

/// A lexical error with its location
///
/// Every diagnostic is error-level: the lexer only reports malformed input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Main diagnostic message
    pub message: String,
    /// Source location
    pub span: Span,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
    /// Help suggestions for fixing the issue
    pub helps: Vec<String>,
}

impl Diagnostic {
    /// Create a new diagnostic without code or help
    pub fn new(message: impl Into<String>, span: Span) -> Self {
        Self {
            message: message.into(),
            span,
            code: None,
            helps: Vec::new(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "error[{}]: {}", code, self.message),
            None => write!(f, "error: {}", self.message),
        }
    }
}

/// Handler for collecting diagnostics
///
/// The handler uses interior mutability so that a lexer can hold a shared
/// reference to it while the caller keeps reading counts.
///
/// ```
/// use jslex_util::diagnostic::{Diagnostic, Handler};
/// use jslex_util::Span;
///
/// let handler = Handler::new();
/// assert!(!handler.has_errors());
/// handler.emit_diagnostic(Diagnostic::new("unexpected character '#'", Span::DUMMY));
/// assert_eq!(handler.error_count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct Handler {
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    /// Create a new, empty handler
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a pre-built diagnostic
    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Check if any errors have been reported
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.borrow().is_empty()
    }

    /// Get the number of errors
    pub fn error_count(&self) -> usize {
        self.diagnostics.borrow().len()
    }

    /// Get a copy of every diagnostic recorded so far, in emission order
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// Drain the recorded diagnostics, leaving the handler empty
    pub fn take_diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.take()
    }
}
