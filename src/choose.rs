use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parser};
use tracing::trace;

/// A group of alternative parsers sharing one output type
///
/// Implemented for tuples of up to ten parsers and for `Vec<P>`.
pub trait Alternatives<'code> {
    type Output;

    /// Try every alternative from `cursor`, in order, returning the first success
    fn parse_first(&self, cursor: Cursor<'code>) -> Option<(Self::Output, Cursor<'code>)>;
}

macro_rules! impl_alternatives {
    ($first_index:tt $first:ident $(, $index:tt $parser:ident)*) => {
        impl<'code, $first, $($parser),*> Alternatives<'code> for ($first, $($parser,)*)
        where
            $first: Parser<'code>,
            $($parser: Parser<'code, Output = <$first as Parser<'code>>::Output>,)*
        {
            type Output = <$first as Parser<'code>>::Output;

            fn parse_first(&self, cursor: Cursor<'code>) -> Option<(Self::Output, Cursor<'code>)> {
                match self.$first_index.parse(cursor) {
                    Ok(success) => return Some(success),
                    Err(error) => trace!(alternative = $first_index, message = error.message(), "alternative failed"),
                }
                $(
                    match self.$index.parse(cursor) {
                        Ok(success) => return Some(success),
                        Err(error) => trace!(alternative = $index, message = error.message(), "alternative failed"),
                    }
                )*
                None
            }
        }
    };
}

impl_alternatives!(0 P0);
impl_alternatives!(0 P0, 1 P1);
impl_alternatives!(0 P0, 1 P1, 2 P2);
impl_alternatives!(0 P0, 1 P1, 2 P2, 3 P3);
impl_alternatives!(0 P0, 1 P1, 2 P2, 3 P3, 4 P4);
impl_alternatives!(0 P0, 1 P1, 2 P2, 3 P3, 4 P4, 5 P5);
impl_alternatives!(0 P0, 1 P1, 2 P2, 3 P3, 4 P4, 5 P5, 6 P6);
impl_alternatives!(0 P0, 1 P1, 2 P2, 3 P3, 4 P4, 5 P5, 6 P6, 7 P7);
impl_alternatives!(0 P0, 1 P1, 2 P2, 3 P3, 4 P4, 5 P5, 6 P6, 7 P7, 8 P8);
impl_alternatives!(0 P0, 1 P1, 2 P2, 3 P3, 4 P4, 5 P5, 6 P6, 7 P7, 8 P8, 9 P9);

impl<'code, P> Alternatives<'code> for Vec<P>
where
    P: Parser<'code>,
{
    type Output = P::Output;

    fn parse_first(&self, cursor: Cursor<'code>) -> Option<(Self::Output, Cursor<'code>)> {
        for (alternative, parser) in self.iter().enumerate() {
            match parser.parse(cursor) {
                Ok(success) => return Some(success),
                Err(error) => trace!(alternative, message = error.message(), "alternative failed"),
            }
        }
        None
    }
}

/// Parser combinator for ordered choice
///
/// Every alternative starts from the same cursor, and the first one that succeeds wins
/// even if a later one would consume more input. Nothing has to be restored between
/// attempts since a failed alternative leaves the cursor it was given untouched.
pub struct Choose<A> {
    alternatives: A,
}

impl<A> Choose<A> {
    pub fn new(alternatives: A) -> Self {
        Choose { alternatives }
    }
}

impl<'code, A> Parser<'code> for Choose<A>
where
    A: Alternatives<'code>,
{
    type Output = A::Output;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        self.alternatives.parse_first(cursor).ok_or_else(|| {
            ParseError::composite(cursor, format!("choose failed to parse at {}", cursor.index()))
        })
    }
}

/// Convenience function to create a Choose parser
pub fn choose<'code, A>(alternatives: A) -> Choose<A>
where
    A: Alternatives<'code>,
{
    Choose::new(alternatives)
}
