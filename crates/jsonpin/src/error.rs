//! Error types: located parse failures and source loading failures.

use std::{fmt, io};

use crate::{location::Location, source::DEFAULT_TAB_SIZE};

/// A fatal parse failure pinned to an exact byte offset.
///
/// The human-readable message is finalized when the error is constructed,
/// in the form `file:line:column: message`, so callers can surface the
/// `Display` output directly instead of re-deriving location formatting.
/// The resolved position is also kept in public fields for programmatic
/// use.
///
/// Exactly one `ParseError` is produced per failed parse: the first
/// lexical or grammar error aborts the attempt, with no recovery and no
/// partial value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ParseError {
    message: String,
    /// Byte offset of the failure within the source contents.
    pub char_index: usize,
    /// 1-based line of the failure, or 0 when the source was unknown.
    pub line: usize,
    /// 1-based column of the failure, or 0 when the source was unknown.
    pub column: usize,
}

impl ParseError {
    /// Creates an error at `location`, resolving and freezing the position
    /// immediately.
    ///
    /// An offset is a snapshot of the scan position, so the message is
    /// rendered here, before the scan can advance.
    #[must_use]
    pub fn new(location: Location<'_>, message: impl fmt::Display) -> Self {
        let line_and_column = location.get_line_and_column(DEFAULT_TAB_SIZE);
        Self {
            message: format!("{location}: {message}"),
            char_index: location.char_index,
            line: line_and_column.line,
            column: line_and_column.column,
        }
    }

    /// The finalized `file:line:column: message` string.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// A failure to read a source from a file or standard input.
///
/// Load errors carry path context instead of a location: no byte offset
/// exists when the bytes themselves could not be obtained.
#[derive(Debug, thiserror::Error)]
#[error("{path}: {source}")]
pub struct LoadError {
    path: String,
    #[source]
    source: io::Error,
}

impl LoadError {
    pub(crate) fn new(path: impl Into<String>, source: io::Error) -> Self {
        Self {
            path: path.into(),
            source,
        }
    }

    /// The path (or `<stdin>`) that failed to load.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }
}
