//! Error types for STL reading.

use std::path::PathBuf;
use thiserror::Error;

use crate::diagnostic::ParseReport;
use crate::token::TokenSet;

/// Result type for STL I/O operations.
pub type IoResult<T> = Result<T, IoError>;

/// Errors that end an STL read.
#[derive(Debug, Error)]
pub enum IoError {
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path that was not found.
        path: PathBuf,
    },

    /// I/O error from the standard library.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The content did not parse cleanly.
    ///
    /// The report holds every diagnostic collected during the attempt.
    #[error("invalid ASCII STL:\n{}", .report.error_text())]
    Parse {
        /// Outcome of the failed parse.
        report: ParseReport,
    },
}

/// One recoverable problem found while parsing.
///
/// None of these stop the parser; they are collected as
/// [`Diagnostic`](crate::Diagnostic)s.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiagnosticKind {
    /// The stream held no words at all.
    #[error("File is empty")]
    EmptyInput,

    /// The first line did not begin with `solid `.
    #[error("ASCII header must start with \"solid \"")]
    HeaderPrefix,

    /// The current word is not one of the expected keywords.
    #[error("{expected} expected")]
    Expected {
        /// Keywords that would have been accepted.
        expected: TokenSet,
    },

    /// A coordinate literal is not a valid single-precision float.
    #[error("Unable to parse float \"{literal}\"")]
    UnparsableFloat {
        /// The offending word.
        literal: String,
    },

    /// The stream ended where a coordinate was expected.
    #[error("unexpected end of file")]
    UnexpectedEof,

    /// The underlying reader failed. Reading stops here.
    #[error("{message}")]
    Stream {
        /// Error text from the reader.
        message: String,
    },

    /// A line exceeded the configured maximum. Reading stops here.
    #[error("line exceeds maximum length of {limit} bytes")]
    LineTooLong {
        /// The configured maximum line length.
        limit: usize,
    },
}

impl DiagnosticKind {
    /// True for failures of the byte source, which end the stream.
    #[must_use]
    pub const fn is_stream_failure(&self) -> bool {
        matches!(self, Self::Stream { .. } | Self::LineTooLong { .. })
    }
}
