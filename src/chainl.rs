use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parser};
use tracing::trace;

/// Parser combinator for left-associative operator chains
///
/// Parses an operand, then as many `operator operand` pairs as it can. The operator
/// parser yields the function that combines the value so far with the next operand, so
/// `1-2-3` folds into `sub(sub(1, 2), 3)`. This gives left-associative results without
/// writing a left-recursive rule, which would never terminate.
///
/// An operator not followed by an operand is left unconsumed. Fails at the entry cursor
/// if the first operand does not match.
///
/// An operator and operand pair that matches empty input repeats forever.
pub struct Chainl<P, Op> {
    operand: P,
    operator: Op,
}

impl<P, Op> Chainl<P, Op> {
    pub fn new(operand: P, operator: Op) -> Self {
        Chainl { operand, operator }
    }
}

impl<'code, P, Op, F> Parser<'code> for Chainl<P, Op>
where
    P: Parser<'code>,
    Op: Parser<'code, Output = F>,
    F: FnOnce(P::Output, P::Output) -> P::Output,
{
    type Output = P::Output;

    fn parse(&self, entry: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let (mut accumulated, mut cursor) = self.operand.parse(entry).map_err(|_| {
            ParseError::composite(entry, format!("chainl failed to parse at {}", entry.index()))
        })?;

        loop {
            let Ok((combine, after_operator)) = self.operator.parse(cursor) else {
                break;
            };
            let Ok((right, after_operand)) = self.operand.parse(after_operator) else {
                trace!(index = cursor.index(), "operator without operand");
                break;
            };
            accumulated = combine(accumulated, right);
            cursor = after_operand;
        }

        Ok((accumulated, cursor))
    }
}

/// Convenience function to create a Chainl parser
pub fn chainl<'code, P, Op, F>(operand: P, operator: Op) -> Chainl<P, Op>
where
    P: Parser<'code>,
    Op: Parser<'code, Output = F>,
    F: FnOnce(P::Output, P::Output) -> P::Output,
{
    Chainl::new(operand, operator)
}
