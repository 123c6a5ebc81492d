use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parser};
use tracing::trace;

/// Parser combinator that matches a parser repeatedly
///
/// Applies the parser until it fails and collects the values in order. The failing
/// attempt is dropped and the cursor stays after the last match. When fewer than `min`
/// matches are found the whole repetition fails at the cursor it started from.
///
/// The parser must consume input whenever it succeeds. A parser that can succeed on empty
/// input, such as `optional(..)` or `many(..)` itself, makes the repetition loop forever.
/// This is not detected.
pub struct Many<P> {
    parser: P,
    min: usize,
}

impl<P> Many<P> {
    pub fn new(parser: P, min: usize) -> Self {
        Many { parser, min }
    }
}

impl<'code, P> Parser<'code> for Many<P>
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, entry: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let mut results = Vec::new();
        let mut cursor = entry;

        // Many stops at the first failure, the error itself is not propagated
        while let Ok((value, next_cursor)) = self.parser.parse(cursor) {
            results.push(value);
            cursor = next_cursor;
        }

        if results.len() < self.min {
            trace!(
                index = entry.index(),
                found = results.len(),
                min = self.min,
                "repetition below minimum"
            );
            return Err(ParseError::composite(
                entry,
                format!(
                    "many failed to parse at {}: expected at least {} matches, found {}",
                    entry.index(),
                    self.min,
                    results.len()
                ),
            ));
        }

        Ok((results, cursor))
    }
}

/// Zero or more occurrences of `parser`
pub fn many<'code, P>(parser: P) -> Many<P>
where
    P: Parser<'code>,
{
    Many::new(parser, 0)
}

/// At least `min` occurrences of `parser`
pub fn many_min<'code, P>(parser: P, min: usize) -> Many<P>
where
    P: Parser<'code>,
{
    Many::new(parser, min)
}

/// One or more occurrences of `parser`
pub fn many1<'code, P>(parser: P) -> Many<P>
where
    P: Parser<'code>,
{
    Many::new(parser, 1)
}
