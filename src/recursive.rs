use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};

/// A parser that builds the parser it runs only when it is asked to parse
///
/// The thunk is called on every parse, never at construction. This is what lets a rule
/// refer to itself, or to a rule defined further down, before any parser value for it
/// exists. Write the rule as a function returning a `BoxedParser` and hand the function
/// itself to `recursive`:
///
/// ```
/// use combparse::{BoxExt, BoxedParser, MapExt, between, character, many, parse, recursive};
///
/// #[derive(Debug, PartialEq)]
/// struct List(Vec<List>);
///
/// fn list<'code>() -> BoxedParser<'code, List> {
///     between(character('('), character(')'), many(recursive(list)))
///         .map(List)
///         .boxed()
/// }
///
/// let (value, _) = parse(list(), "(())").unwrap();
/// assert_eq!(value, List(vec![List(vec![])]));
/// ```
pub struct Recursive<F> {
    thunk: F,
}

impl<F> Recursive<F> {
    pub fn new(thunk: F) -> Self {
        Recursive { thunk }
    }
}

impl<'code, F, P> Parser<'code> for Recursive<F>
where
    F: Fn() -> P,
    P: Parser<'code>,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let parser = (self.thunk)();
        parser.parse(cursor)
    }
}

/// Create a parser from a thunk evaluated at parse time
pub fn recursive<'code, F, P>(thunk: F) -> Recursive<F>
where
    F: Fn() -> P,
    P: Parser<'code>,
{
    Recursive::new(thunk)
}
