use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that makes a parser optional
///
/// Yields `Some` with the inner value when the parser matches and `None` otherwise. When
/// the inner parser fails, the cursor stays where the attempt started. Never fails.
pub struct Optional<P> {
    parser: P,
}

impl<P> Optional<P> {
    pub fn new(parser: P) -> Self {
        Optional { parser }
    }
}

impl<'code, P> Parser<'code> for Optional<P>
where
    P: Parser<'code>,
{
    type Output = Option<P::Output>;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        match self.parser.parse(cursor) {
            Ok((value, cursor)) => Ok((Some(value), cursor)),
            Err(_) => Ok((None, cursor)),
        }
    }
}

/// Convenience function to create an Optional parser
pub fn optional<'code, P>(parser: P) -> Optional<P>
where
    P: Parser<'code>,
{
    Optional::new(parser)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::character;
    use crate::parser::parse;
    use crate::seq::seq;

    #[test]
    fn test_optional_present() {
        let (value, cursor) = parse(optional(character('a')), "ab").unwrap();

        assert_eq!(value, Some('a'));
        assert_eq!(cursor.index(), 1);
    }

    #[test]
    fn test_optional_absent_keeps_cursor() {
        let (value, cursor) = parse(optional(character('a')), "b").unwrap();

        assert_eq!(value, None);
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn test_optional_rewinds_partial_sequence() {
        let parser = optional(seq((character('a'), character('b'))));
        let entry = Cursor::new("xaaz").advance(1);

        let (value, cursor) = parser.parse(entry).unwrap();
        assert_eq!(value, None);
        assert_eq!(cursor, entry);
    }

    #[test]
    fn test_optional_in_sequence() {
        let parser = seq((optional(character('a')), character('b')));

        assert_eq!(parse(&parser, "ab").unwrap().0, (Some('a'), 'b'));
        assert_eq!(parse(&parser, "b").unwrap().0, (None, 'b'));
        assert!(parse(&parser, "aa").is_err());
    }

    #[test]
    fn test_optional_at_end_of_input() {
        let (value, cursor) = parse(optional(character('a')), "").unwrap();

        assert_eq!(value, None);
        assert!(cursor.is_at_end());
    }
}
