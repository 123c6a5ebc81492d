use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that transforms the output of a parser using a mapping function
pub struct Map<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> Map<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        Map { parser, mapper }
    }
}

impl<'code, P, F, T, U> Parser<'code> for Map<P, F>
where
    P: Parser<'code, Output = T>,
    F: Fn(T) -> U,
{
    type Output = U;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let (value, cursor) = self.parser.parse(cursor)?;
        Ok(((self.mapper)(value), cursor))
    }
}

/// Convenience function to create a Map parser
pub fn map<'code, P, F, T, U>(parser: P, mapper: F) -> Map<P, F>
where
    P: Parser<'code, Output = T>,
    F: Fn(T) -> U,
{
    Map::new(parser, mapper)
}

/// Parser combinator that rewrites a whole successful result
///
/// The mapper sees the cursor the parser started from together with the success, and
/// returns the result to report instead. It can change the value, move the cursor or
/// reject the match. Failures of the inner parser are passed through untouched.
pub struct MapState<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> MapState<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        MapState { parser, mapper }
    }
}

impl<'code, P, F, T, U> Parser<'code> for MapState<P, F>
where
    P: Parser<'code, Output = T>,
    F: Fn(Cursor<'code>, (T, Cursor<'code>)) -> ParseResult<'code, U>,
{
    type Output = U;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let success = self.parser.parse(cursor)?;
        (self.mapper)(cursor, success)
    }
}

/// Convenience function to create a MapState parser
pub fn map_state<'code, P, F, T, U>(parser: P, mapper: F) -> MapState<P, F>
where
    P: Parser<'code, Output = T>,
    F: Fn(Cursor<'code>, (T, Cursor<'code>)) -> ParseResult<'code, U>,
{
    MapState::new(parser, mapper)
}

/// Extension trait to add .map() and .map_state() method support for parsers
pub trait MapExt<'code>: Parser<'code> + Sized {
    fn map<F, U>(self, mapper: F) -> Map<Self, F>
    where
        F: Fn(Self::Output) -> U,
    {
        Map::new(self, mapper)
    }

    fn map_state<F, U>(self, mapper: F) -> MapState<Self, F>
    where
        F: Fn(Cursor<'code>, (Self::Output, Cursor<'code>)) -> ParseResult<'code, U>,
    {
        MapState::new(self, mapper)
    }
}

/// Implement MapExt for all parsers
impl<'code, P> MapExt<'code> for P where P: Parser<'code> {}
