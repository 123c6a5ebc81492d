use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};

/// Represents a span in the source code with start and end positions
/// and a reference to the source code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span<'code> {
    /// Reference to the source code
    pub source: &'code str,
    /// Start position (inclusive)
    pub start: usize,
    /// End position (exclusive)
    pub end: usize,
}

impl<'code> Span<'code> {
    /// Create a new span
    pub fn new(source: &'code str, start: usize, end: usize) -> Self {
        Span { source, start, end }
    }

    /// Get the length of the span in bytes
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if the span is empty
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Get the slice of code that this span represents
    pub fn slice(&self) -> &'code str {
        &self.source[self.start..self.end]
    }
}

/// A parser combinator that records where a successful parse started and ended
pub struct Indexed<P> {
    parser: P,
}

impl<P> Indexed<P> {
    pub fn new(parser: P) -> Self {
        Indexed { parser }
    }
}

impl<'code, P> Parser<'code> for Indexed<P>
where
    P: Parser<'code>,
{
    type Output = (P::Output, Span<'code>);

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let (output, new_cursor) = self.parser.parse(cursor)?;
        let span = Span::new(cursor.source(), cursor.index(), new_cursor.index());
        Ok(((output, span), new_cursor))
    }
}

/// Extension trait to add position tracking to any parser
pub trait PositionExt<'code>: Parser<'code> + Sized {
    /// Wrap this parser to capture the span it consumed
    fn indexed(self) -> Indexed<Self> {
        Indexed::new(self)
    }
}

impl<'code, P> PositionExt<'code> for P where P: Parser<'code> {}

/// Convenience function to create an Indexed combinator
pub fn indexed<'code, P>(parser: P) -> Indexed<P>
where
    P: Parser<'code>,
{
    Indexed::new(parser)
}
