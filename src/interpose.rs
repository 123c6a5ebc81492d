use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parser};
use tracing::trace;

/// Parser combinator for items interposed with separators
///
/// Parses one item, then as many `separator item` pairs as it can, and yields everything
/// flat and in input order: `[item, separator, item, separator, item]`. Items and
/// separators must share an output type; map one of them if they do not.
///
/// A separator that is not followed by an item is left unconsumed. Fails at the entry
/// cursor if the first item does not match.
///
/// Like `many`, this never terminates if a separator and item pair can match empty input.
pub struct Interpose<P, S> {
    item: P,
    separator: S,
}

impl<P, S> Interpose<P, S> {
    pub fn new(item: P, separator: S) -> Self {
        Interpose { item, separator }
    }
}

impl<'code, P, S> Parser<'code> for Interpose<P, S>
where
    P: Parser<'code>,
    S: Parser<'code, Output = P::Output>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, entry: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let (first, mut cursor) = self.item.parse(entry).map_err(|_| {
            ParseError::composite(
                entry,
                format!("interpose failed to parse at {}", entry.index()),
            )
        })?;
        let mut results = vec![first];

        loop {
            let Ok((separator, after_separator)) = self.separator.parse(cursor) else {
                break;
            };
            let Ok((item, after_item)) = self.item.parse(after_separator) else {
                trace!(index = cursor.index(), "separator without item");
                break;
            };
            results.push(separator);
            results.push(item);
            cursor = after_item;
        }

        Ok((results, cursor))
    }
}

/// Convenience function to create an Interpose parser
pub fn interpose<'code, P, S>(item: P, separator: S) -> Interpose<P, S>
where
    P: Parser<'code>,
    S: Parser<'code, Output = P::Output>,
{
    Interpose::new(item, separator)
}
