use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};

/// A group of parsers that can run one after another
///
/// Implemented for tuples of up to ten parsers, yielding a tuple of their outputs, and
/// for `Vec<P>`, yielding a `Vec` of outputs.
pub trait Sequence<'code> {
    type Output;

    /// Run every parser in order, threading the cursor through them
    fn parse_each(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output>;
}

macro_rules! impl_sequence {
    ($($index:tt $parser:ident $value:ident),+) => {
        impl<'code, $($parser),+> Sequence<'code> for ($($parser,)+)
        where
            $($parser: Parser<'code>,)+
        {
            type Output = ($(<$parser as Parser<'code>>::Output,)+);

            fn parse_each(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
                $(let ($value, cursor) = self.$index.parse(cursor)?;)+
                Ok((($($value,)+), cursor))
            }
        }
    };
}

impl_sequence!(0 P0 v0);
impl_sequence!(0 P0 v0, 1 P1 v1);
impl_sequence!(0 P0 v0, 1 P1 v1, 2 P2 v2);
impl_sequence!(0 P0 v0, 1 P1 v1, 2 P2 v2, 3 P3 v3);
impl_sequence!(0 P0 v0, 1 P1 v1, 2 P2 v2, 3 P3 v3, 4 P4 v4);
impl_sequence!(0 P0 v0, 1 P1 v1, 2 P2 v2, 3 P3 v3, 4 P4 v4, 5 P5 v5);
impl_sequence!(0 P0 v0, 1 P1 v1, 2 P2 v2, 3 P3 v3, 4 P4 v4, 5 P5 v5, 6 P6 v6);
impl_sequence!(0 P0 v0, 1 P1 v1, 2 P2 v2, 3 P3 v3, 4 P4 v4, 5 P5 v5, 6 P6 v6, 7 P7 v7);
impl_sequence!(0 P0 v0, 1 P1 v1, 2 P2 v2, 3 P3 v3, 4 P4 v4, 5 P5 v5, 6 P6 v6, 7 P7 v7, 8 P8 v8);
impl_sequence!(0 P0 v0, 1 P1 v1, 2 P2 v2, 3 P3 v3, 4 P4 v4, 5 P5 v5, 6 P6 v6, 7 P7 v7, 8 P8 v8, 9 P9 v9);

impl<'code, P> Sequence<'code> for Vec<P>
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse_each(&self, mut cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let mut results = Vec::with_capacity(self.len());
        for parser in self {
            let (value, next_cursor) = parser.parse(cursor)?;
            results.push(value);
            cursor = next_cursor;
        }
        Ok((results, cursor))
    }
}

/// Parser combinator that runs several parsers in order
///
/// The sequence is atomic. If any parser fails, the failure keeps that parser's message
/// but is reported at the cursor the whole sequence started from, no matter how many
/// parsers before it succeeded.
pub struct Seq<S> {
    parsers: S,
}

impl<S> Seq<S> {
    pub fn new(parsers: S) -> Self {
        Seq { parsers }
    }
}

impl<'code, S> Parser<'code> for Seq<S>
where
    S: Sequence<'code>,
{
    type Output = S::Output;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        self.parsers
            .parse_each(cursor)
            .map_err(|error| error.anchored(cursor))
    }
}

/// Convenience function to create a Seq parser
///
/// ```
/// use combparse::{character, parse, seq};
///
/// let (value, _) = parse(seq((character('a'), character('b'))), "ab").unwrap();
/// assert_eq!(value, ('a', 'b'));
/// ```
pub fn seq<'code, S>(parsers: S) -> Seq<S>
where
    S: Sequence<'code>,
{
    Seq::new(parsers)
}
