use crate::cursor::Cursor;
use crate::error::ParseError;
use std::rc::Rc;
use tracing::debug;

/// Outcome of a parse attempt
///
/// `Ok` carries the produced value and the cursor just past the consumed input.
/// `Err` carries the failure, anchored at the cursor the parser was handed.
pub type ParseResult<'code, T> = Result<(T, Cursor<'code>), ParseError<'code>>;

/// Core parser trait for parser combinators
pub trait Parser<'code> {
    type Output;

    /// Attempt to parse from the given cursor position
    ///
    /// Returns Ok with the parsed value and updated cursor on success,
    /// or Err if the parse fails. Failures never consume input.
    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output>;
}

impl<'code, P> Parser<'code> for &P
where
    P: Parser<'code> + ?Sized,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        (**self).parse(cursor)
    }
}

impl<'code, P> Parser<'code> for Box<P>
where
    P: Parser<'code> + ?Sized,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        (**self).parse(cursor)
    }
}

impl<'code, P> Parser<'code> for Rc<P>
where
    P: Parser<'code> + ?Sized,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        (**self).parse(cursor)
    }
}

/// A type-erased parser
///
/// Recursive rules are written as functions returning this type, which keeps the type of
/// a grammar finite even when it refers to itself.
pub type BoxedParser<'code, O> = Box<dyn Parser<'code, Output = O> + 'code>;

/// Extension trait to add .boxed() method support for parsers
pub trait BoxExt<'code>: Parser<'code> + Sized + 'code {
    fn boxed(self) -> BoxedParser<'code, Self::Output> {
        Box::new(self)
    }
}

impl<'code, P> BoxExt<'code> for P where P: Parser<'code> + 'code {}

/// Parser backed by a plain function from cursor to result
pub struct FnParser<F> {
    function: F,
}

impl<'code, F, O> Parser<'code> for FnParser<F>
where
    F: Fn(Cursor<'code>) -> ParseResult<'code, O>,
{
    type Output = O;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        (self.function)(cursor)
    }
}

/// Lift a function into a parser
pub fn parser_fn<'code, F, O>(function: F) -> FnParser<F>
where
    F: Fn(Cursor<'code>) -> ParseResult<'code, O>,
{
    FnParser { function }
}

/// Run `parser` over the whole of `source`, starting at index 0
///
/// Input left over after a successful parse is not an error; the returned cursor tells
/// how far the parser got.
pub fn parse<'code, P>(parser: P, source: &'code str) -> ParseResult<'code, P::Output>
where
    P: Parser<'code>,
{
    let span = tracing::debug_span!("parse", len = source.len());
    let _guard = span.enter();

    let result = parser.parse(Cursor::new(source));
    match &result {
        Ok((_, cursor)) => debug!(consumed = cursor.index(), "parse succeeded"),
        Err(error) => debug!(index = error.index(), message = error.message(), "parse failed"),
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::character;

    #[test]
    fn test_parse_starts_at_zero() {
        let (value, cursor) = parse(character('a'), "ab").unwrap();
        assert_eq!(value, 'a');
        assert_eq!(cursor.index(), 1);
        assert_eq!(cursor.remainder(), "b");
    }

    #[test]
    fn test_parse_leaves_tail_unconsumed() {
        let (_, cursor) = parse(character('a'), "abc").unwrap();
        assert!(!cursor.is_at_end());
    }

    #[test]
    fn test_parse_by_reference() {
        let parser = character('x');
        assert!(parse(&parser, "x").is_ok());
        assert!(parse(&parser, "y").is_err());
    }

    #[test]
    fn test_boxed_parser() {
        let parser: BoxedParser<'_, char> = character('a').boxed();
        let (value, _) = parse(&parser, "a").unwrap();
        assert_eq!(value, 'a');
    }

    #[test]
    fn test_rc_parser_shared() {
        let shared = Rc::new(character('z'));
        let other = Rc::clone(&shared);

        assert!(parse(shared, "z").is_ok());
        assert!(parse(other, "z").is_ok());
    }

    #[test]
    fn test_parser_fn() {
        // Matches any single symbol
        let any = parser_fn(|cursor| match cursor.current() {
            Some(symbol) => Ok((symbol, cursor.advance(1))),
            None => Err(ParseError::new(cursor, "unexpected end of input")),
        });

        let (value, cursor) = parse(&any, "q").unwrap();
        assert_eq!(value, 'q');
        assert!(cursor.is_at_end());

        let error = parse(&any, "").unwrap_err();
        assert_eq!(error.message(), "unexpected end of input");
    }
}
