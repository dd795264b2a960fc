//! jslex-util - Foundation types shared by the jslex crates.
//!
//! This crate holds the pieces that are not specific to tokenization itself
//! but that every consumer of the lexer needs:
//!
//! - [`span`] - byte ranges with line/column information, and [`SourceFile`]
//!   for mapping offsets back to source lines
//! - [`diagnostic`] - lexical error reporting ([`Diagnostic`],
//!   [`DiagnosticBuilder`], [`Handler`], [`DiagnosticCode`])
//! - [`error`] - error types for source lookups
//!
//! # Example
//!
//! ```
//! use jslex_util::{DiagnosticBuilder, DiagnosticCode, Handler, Span};
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("unterminated string literal")
//!     .code(DiagnosticCode::E_LEXER_UNTERMINATED_STRING)
//!     .span(Span::new(0, 4, 1, 1))
//!     .emit(&handler);
//!
//! assert!(handler.has_errors());
//! assert_eq!(handler.error_count(), 1);
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod error;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, SourceSnippet};
pub use error::{SourceMapError, SourceMapResult};
pub use span::{SourceFile, Span};
