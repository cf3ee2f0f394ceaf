//! Source text management and the line-start position index.

use std::{
    fmt,
    io::{self, Read},
    path::Path,
    sync::Arc,
};

use bstr::{ByteSlice, decode_utf8};

use crate::{
    error::LoadError,
    location::{LineAndColumn, LineAndIndex},
};

/// Tab width used when a caller does not specify one.
pub const DEFAULT_TAB_SIZE: usize = 8;

/// Immutable input text plus a precomputed line-start index.
///
/// A `Source` holds the raw bytes of one input document together with the
/// file name used in diagnostics. The bytes are reference counted, so
/// cloning a `Source` or sharing one across threads never copies the
/// content, and externally allocated buffers (for example a memory-mapped
/// region wrapped into an `Arc`) can be aliased via [`Source::from_shared`].
///
/// The line index is built in a single pass at construction and never
/// changes; [`Source::get_line_and_column`] resolves a byte offset to a
/// human-readable position in `O(log lines + line length)`, which only the
/// error path pays for.
///
/// A default-constructed `Source` has no contents and acts as the absent
/// source; see [`Source::has_contents`].
#[derive(Clone)]
pub struct Source {
    file_name: String,
    contents: Arc<[u8]>,
    /// Byte offsets of line starts, excluding line 0 (which always starts
    /// at offset 0 and is not stored, to save memory on large inputs).
    line_start_indexes: Vec<usize>,
}

impl Default for Source {
    fn default() -> Self {
        Self {
            file_name: String::new(),
            contents: Arc::from(Vec::new()),
            line_start_indexes: Vec::new(),
        }
    }
}

impl fmt::Debug for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Source")
            .field("file_name", &self.file_name)
            .field("contents", &self.contents.as_bstr())
            .field("line_start_indexes", &self.line_start_indexes)
            .finish()
    }
}

impl Source {
    /// Creates a source that takes ownership of `contents`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jsonpin::Source;
    ///
    /// let source = Source::new("config.json", "{}");
    /// assert!(source.has_contents());
    /// ```
    pub fn new(file_name: impl Into<String>, contents: impl Into<Vec<u8>>) -> Self {
        Self::from_shared(file_name, Arc::from(contents.into()))
    }

    /// Wraps bytes that are already shared, without copying them.
    ///
    /// This is the entry point for externally managed memory: the buffer is
    /// aliased rather than duplicated and stays alive for as long as any
    /// clone of this source (or of the `Arc` itself) does.
    pub fn from_shared(file_name: impl Into<String>, contents: Arc<[u8]>) -> Self {
        let line_start_indexes = find_line_start_indexes(&contents);
        Self {
            file_name: file_name.into(),
            contents,
            line_start_indexes,
        }
    }

    /// Reads the entire file at `path` into a new source.
    ///
    /// The path becomes the source's file name, so diagnostics derived from
    /// it render as `path:line:column`.
    ///
    /// # Errors
    ///
    /// Returns a [`LoadError`] carrying the path if the file cannot be
    /// opened or read.
    pub fn load_file(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let contents = std::fs::read(path)
            .map_err(|error| LoadError::new(path.display().to_string(), error))?;
        Ok(Self::new(path.display().to_string(), contents))
    }

    /// Reads all of standard input into a new source.
    ///
    /// The file name is left empty, so derived locations render as
    /// `<unknown>`.
    ///
    /// # Errors
    ///
    /// Returns a [`LoadError`] if standard input cannot be read.
    pub fn load_stdin() -> Result<Self, LoadError> {
        let mut contents = Vec::new();
        io::stdin()
            .lock()
            .read_to_end(&mut contents)
            .map_err(|error| LoadError::new("<stdin>", error))?;
        Ok(Self::new("", contents))
    }

    /// Returns `true` unless this is the default, absent source.
    #[must_use]
    pub fn has_contents(&self) -> bool {
        !self.contents.is_empty()
    }

    /// The file name this source was created with; may be empty.
    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// The raw input bytes.
    #[must_use]
    pub fn contents(&self) -> &[u8] {
        &self.contents
    }

    /// Length of the input in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.contents.len()
    }

    /// Returns `true` if the input is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    /// Returns the 0-based line containing `char_index` together with that
    /// line's start offset.
    ///
    /// Binary search over the line-start table. Offsets past the end of the
    /// buffer resolve to the last line rather than failing, so end-of-input
    /// positions always format.
    #[must_use]
    pub fn get_line_and_start_index(&self, char_index: usize) -> LineAndIndex {
        let line = self
            .line_start_indexes
            .partition_point(|&start| start <= char_index);
        let index = if line == 0 {
            0
        } else {
            self.line_start_indexes[line - 1]
        };
        LineAndIndex { line, index }
    }

    /// Resolves `char_index` to a 1-based line and tab-expanded column.
    ///
    /// Columns start at 1. Every non-tab character advances the column by
    /// one (one column per decoded UTF-8 character; a stray invalid byte
    /// also counts as one), and a tab advances it to the next multiple of
    /// `tab_size` plus one: with the default width of 8, a tab at column 5
    /// puts the next character at column 9.
    ///
    /// This scans the resolved line from its start, which is `O(line
    /// length)` and acceptable because only diagnostics call it.
    #[must_use]
    pub fn get_line_and_column(&self, char_index: usize, tab_size: usize) -> LineAndColumn {
        let LineAndIndex { line, index } = self.get_line_and_start_index(char_index);
        let tab_size = tab_size.max(1);
        let end = char_index.min(self.contents.len());
        let mut rest = &self.contents[index..end];
        let mut column = 1;
        while !rest.is_empty() {
            if rest[0] == b'\t' {
                column += tab_size - (column - 1) % tab_size;
                rest = &rest[1..];
            } else {
                let (_, size) = decode_utf8(rest);
                column += 1;
                rest = &rest[size..];
            }
        }
        LineAndColumn {
            line: line + 1,
            column,
        }
    }
}

/// One pass over the contents, recording the offset after every newline.
fn find_line_start_indexes(contents: &[u8]) -> Vec<usize> {
    let mut indexes = Vec::new();
    for (index, &byte) in contents.iter().enumerate() {
        if byte == b'\n' {
            // "\r\n" needs no special case: the line still starts right
            // after the '\n'.
            indexes.push(index + 1);
        }
    }
    indexes
}
