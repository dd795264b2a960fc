//! Core error types for jslex-util.

use thiserror::Error;

/// Error type for source file lookups.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SourceMapError {
    /// The span starts after it ends.
    #[error("Invalid span: start {start} > end {end}")]
    InvalidSpan {
        /// Byte offset where the span starts.
        start: usize,
        /// Byte offset where the span ends.
        end: usize,
    },

    /// The span reaches past the end of the file.
    #[error("Span out of bounds: file has {file_len} bytes, span is {span_start}..{span_end}")]
    SpanOutOfBounds {
        /// Length of the file in bytes.
        file_len: usize,
        /// Start of the offending span.
        span_start: usize,
        /// End of the offending span.
        span_end: usize,
    },

    /// The requested line does not exist.
    #[error("Invalid line number: {line} (file has {max_lines} lines)")]
    InvalidLineNumber {
        /// The requested line (1-based).
        line: usize,
        /// Number of lines in the file.
        max_lines: usize,
    },
}

/// Result type alias for source file lookups.
pub type SourceMapResult<T> = std::result::Result<T, SourceMapError>;
