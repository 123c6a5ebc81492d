use crate::error::Location;

/// Immutable position into the input text
///
/// A cursor never moves in place: `advance` and `retreat` return a new cursor and
/// leave the original untouched. Combinators rely on this to backtrack, they simply
/// keep using the cursor they were handed instead of the one a failed branch produced.
///
/// `index` is a byte offset into `source` and always lies on a `char` boundary.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Cursor<'code> {
    source: &'code str,
    index: usize,
}

impl<'code> Cursor<'code> {
    /// Create a cursor at the start of `source`
    pub fn new(source: &'code str) -> Self {
        Cursor { source, index: 0 }
    }

    /// The symbol at the cursor, or `None` past the end of the input
    pub fn current(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    /// The input from the cursor onward
    pub fn remainder(&self) -> &'code str {
        &self.source[self.index..]
    }

    /// Move forward by `n` symbols, stopping at the end of the input
    pub fn advance(self, n: usize) -> Self {
        let offset = self
            .remainder()
            .char_indices()
            .nth(n)
            .map(|(offset, _)| offset)
            .unwrap_or(self.remainder().len());
        self.skip_bytes(offset)
    }

    /// Move back by one symbol, stopping at the start of the input
    pub fn retreat(self) -> Self {
        let previous = self.source[..self.index]
            .char_indices()
            .next_back()
            .map(|(offset, _)| offset)
            .unwrap_or(0);
        Cursor {
            source: self.source,
            index: previous,
        }
    }

    /// Move forward by `len` bytes of already matched text
    ///
    /// Callers must pass the length of a prefix of `remainder()`.
    pub(crate) fn skip_bytes(self, len: usize) -> Self {
        Cursor {
            source: self.source,
            index: (self.index + len).min(self.source.len()),
        }
    }

    /// Byte offset of the cursor in the source
    pub fn index(&self) -> usize {
        self.index
    }

    /// The whole input this cursor points into
    pub fn source(&self) -> &'code str {
        self.source
    }

    pub fn is_at_end(&self) -> bool {
        self.index >= self.source.len()
    }

    /// Line and in-line byte offset of the cursor, for diagnostics
    pub fn location(&self) -> Location {
        Location::of(self.source, self.index)
    }
}
