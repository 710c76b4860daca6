//! Text buffer: the ordered sequence of rows.

use super::row::Row;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Ordered row store. Insertion order is file order and the index is the
/// only row identity; rows are appended and never deleted or reordered.
#[derive(Debug, Default)]
pub struct TextBuffer {
    rows: Vec<Row>,
}

impl TextBuffer {
    /// Create an empty buffer.
    pub const fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Load a buffer from a file, one row per line.
    ///
    /// Trailing newline and carriage-return bytes are stripped; everything
    /// else is kept verbatim, so non-UTF-8 files load byte-for-byte.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the file cannot be opened or
    /// read. Callers treat that as a fatal startup condition.
    pub fn open(path: &Path) -> io::Result<Self> {
        let mut reader = BufReader::new(File::open(path)?);
        let mut buffer = Self::new();
        let mut line = Vec::new();
        loop {
            line.clear();
            if reader.read_until(b'\n', &mut line)? == 0 {
                break;
            }
            while matches!(line.last(), Some(b'\n' | b'\r')) {
                line.pop();
            }
            buffer.append_row(&line);
        }
        Ok(buffer)
    }

    /// Append a row at the end, copying `content` verbatim and computing
    /// its render form.
    pub fn append_row(&mut self, content: &[u8]) {
        self.rows.push(Row::new(content));
    }

    /// Number of rows.
    #[inline]
    pub const fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the buffer holds no rows.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get a row by index.
    #[inline]
    pub fn row(&self, at: usize) -> Option<&Row> {
        self.rows.get(at)
    }
}
