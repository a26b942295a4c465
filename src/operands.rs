//! Provides the `load` function, which reads a whole file into a
//! `LoadedSequence`, and the `Lines` iterator over a `LoadedSequence`'s lines.
//!
//! A line is zero or more non-newline bytes followed by a newline, or the
//! non-empty tail of the text after its last newline. We keep the newline (and
//! any carriage return before it) as part of the line, so `"x\n"`, `"x\r\n"`
//! and `"x"` are three different lines. Nothing else about the bytes is
//! interpreted: a Byte Order Mark is part of the first line, and a UTF-16
//! source is split on its `0x0A` bytes like any other.
use std::{
    fs::File,
    io::{self, Read},
    path::Path,
};

use memchr::memchr;
use tracing::debug;

use crate::error::{Error, Result};

/// The lines of one source, in source order, duplicates and all. The text is
/// owned here; lines handed out by `lines()` borrow from it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoadedSequence {
    text: Vec<u8>,
    line_count: usize,
}

impl LoadedSequence {
    /// Wrap already-read text, unchanged
    #[must_use]
    pub fn from_bytes(text: Vec<u8>) -> LoadedSequence {
        let line_count = Lines::of(&text).count();
        LoadedSequence { text, line_count }
    }

    /// The lines of the sequence, in order, each with its line terminator
    #[must_use]
    pub fn lines(&self) -> Lines<'_> {
        Lines::of(&self.text)
    }

    /// Number of lines, counting duplicates
    #[must_use]
    pub fn len(&self) -> usize {
        self.line_count
    }

    /// True if the source had no lines at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.line_count == 0
    }
}

/// Read the file at `path` into memory and split it into lines. The file is
/// closed before we return, whether or not the read succeeded.
pub fn load(path: &Path) -> Result<LoadedSequence> {
    let sequence = {
        let file = File::open(path).map_err(Error::unavailable("open", path))?;
        load_from(file).map_err(Error::unavailable("read", path))?
    };
    debug!(path = %path.display(), lines = sequence.len(), "loaded source");
    Ok(sequence)
}

/// Like `load`, but for any reader. The reader is consumed.
pub fn load_from(mut source: impl Read) -> io::Result<LoadedSequence> {
    let mut text = Vec::new();
    source.read_to_end(&mut text)?;
    Ok(LoadedSequence::from_bytes(text))
}

/// Iterator over the lines of a byte slice. Each item includes its `\n`
/// terminator, except possibly the last.
#[derive(Debug, Clone)]
pub struct Lines<'data> {
    rest: &'data [u8],
}

impl<'data> Lines<'data> {
    pub(crate) fn of(text: &'data [u8]) -> Lines<'data> {
        Lines { rest: text }
    }
}

impl<'data> Iterator for Lines<'data> {
    type Item = &'data [u8];
    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }
        let end = memchr(b'\n', self.rest).map_or(self.rest.len(), |n| n + 1);
        let (line, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(line)
    }
}
