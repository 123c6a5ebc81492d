use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};
use crate::seq::Seq;

/// Parser that matches content between opening and closing delimiters
///
/// Runs `open`, `inner` and `close` as one sequence and yields only the inner value, the
/// delimiters are discarded. Failing anywhere fails the whole thing at the entry cursor,
/// exactly like `seq`.
///
/// # Examples
/// - `"(a)"` → `'a'`
/// - `"[value]"` → `"value"`
pub struct Between<O, C, P> {
    sequence: Seq<(O, P, C)>,
}

impl<O, C, P> Between<O, C, P> {
    pub fn new(open: O, close: C, inner: P) -> Self {
        Between {
            sequence: Seq::new((open, inner, close)),
        }
    }
}

impl<'code, O, C, P> Parser<'code> for Between<O, C, P>
where
    O: Parser<'code>,
    C: Parser<'code>,
    P: Parser<'code>,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let ((_, inner, _), cursor) = self.sequence.parse(cursor)?;
        Ok((inner, cursor))
    }
}

/// Creates a parser that matches `inner` wrapped in `open` and `close`
pub fn between<'code, O, C, P>(open: O, close: C, inner: P) -> Between<O, C, P>
where
    O: Parser<'code>,
    C: Parser<'code>,
    P: Parser<'code>,
{
    Between::new(open, close, inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::{CharacterParser, character};
    use crate::many::many1;
    use crate::parser::parse;
    use crate::pattern::regex_pattern;
    use crate::string::string;
    use rstest::rstest;

    fn parenthesised_a() -> Between<CharacterParser, CharacterParser, CharacterParser> {
        between(character('('), character(')'), character('a'))
    }

    #[test]
    fn test_between_yields_inner() {
        let (value, cursor) = parse(parenthesised_a(), "(a)").unwrap();

        assert_eq!(value, 'a');
        assert!(cursor.is_at_end());
    }

    #[rstest]
    #[case("a)")]
    #[case("(a")]
    #[case("a")]
    #[case("()")]
    #[case("")]
    fn test_between_rejects(#[case] input: &str) {
        let error = parse(parenthesised_a(), input).unwrap_err();
        assert_eq!(error.index(), 0);
    }

    #[test]
    fn test_between_missing_close_anchored_at_entry() {
        let entry = Cursor::new("x(a]").advance(1);

        let error = parenthesised_a().parse(entry).unwrap_err();
        assert_eq!(error.cursor(), entry);
        assert!(error.message().contains("expected ')'"));
    }

    #[test]
    fn test_between_string_delimiters() {
        let parser = between(string("<<"), string(">>"), many1(character('x')));

        let (value, _) = parse(&parser, "<<xxx>>").unwrap();
        assert_eq!(value, vec!['x', 'x', 'x']);
    }

    #[test]
    fn test_between_with_remaining_content() {
        let number = regex_pattern("[0-9]+").unwrap();
        let parser = between(character('['), character(']'), number);

        let (captures, cursor) = parse(&parser, "[42] extra").unwrap();
        assert_eq!(&captures[0], "42");
        assert_eq!(cursor.current(), Some(' '));
    }
}
