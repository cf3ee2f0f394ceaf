//! Byte-offset locations and their human-readable rendering.

use std::fmt;

use crate::source::{DEFAULT_TAB_SIZE, Source};

/// A 0-based line number paired with the byte offset of that line's start.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineAndIndex {
    /// 0-based line number.
    pub line: usize,
    /// Byte offset at which the line begins.
    pub index: usize,
}

/// A 1-based line and column pair, as shown to humans.
///
/// The default value renders as `0:0`, which is the convention for unknown
/// locations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineAndColumn {
    /// 1-based line number, or 0 when unknown.
    pub line: usize,
    /// 1-based tab-expanded column number, or 0 when unknown.
    pub column: usize,
}

impl fmt::Display for LineAndColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A position inside a [`Source`], identified by byte offset.
///
/// A location never owns its source: it borrows it, so the compiler
/// guarantees the source outlives every location derived from it, and
/// copying a location is two words. Line and column are computed on demand
/// rather than stored.
///
/// A location whose `source` is `None` is valid and means "unknown"; it
/// renders as `<unknown>:0:0`.
///
/// # Examples
///
/// ```rust
/// use jsonpin::{Location, Source};
///
/// let source = Source::new("data.json", "[1,\n 2]");
/// let location = Location::new(&source, 5);
/// assert_eq!(location.to_string(), "data.json:2:2");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Location<'s> {
    /// The source the offset points into; `None` means unknown.
    pub source: Option<&'s Source>,
    /// Byte offset into the source contents.
    pub char_index: usize,
}

impl<'s> Location<'s> {
    /// Creates a location at `char_index` within `source`.
    #[must_use]
    pub fn new(source: &'s Source, char_index: usize) -> Self {
        Self {
            source: Some(source),
            char_index,
        }
    }

    /// Resolves the 0-based line and its start offset, or the default pair
    /// when the source is unknown.
    #[must_use]
    pub fn get_line_and_start_index(&self) -> LineAndIndex {
        match self.source {
            Some(source) => source.get_line_and_start_index(self.char_index),
            None => LineAndIndex::default(),
        }
    }

    /// Resolves the 1-based line and tab-expanded column, or `0:0` when the
    /// source is unknown.
    #[must_use]
    pub fn get_line_and_column(&self, tab_size: usize) -> LineAndColumn {
        match self.source {
            Some(source) => source.get_line_and_column(self.char_index, tab_size),
            None => LineAndColumn::default(),
        }
    }
}

impl fmt::Display for Location<'_> {
    /// Renders `file_name:line:column` with the default tab size; a missing
    /// source or empty file name renders as `<unknown>`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.source.map(Source::file_name).filter(|name| !name.is_empty()) {
            Some(name) => f.write_str(name)?,
            None => f.write_str("<unknown>")?,
        }
        write!(f, ":{}", self.get_line_and_column(DEFAULT_TAB_SIZE))
    }
}
