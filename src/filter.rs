use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parser};
use std::borrow::Cow;

/// Parser that applies a predicate function to filter the output of another parser
///
/// A rejected value fails the parse at the cursor the inner parser started from, with
/// the given message.
pub struct FilterParser<P, F> {
    parser: P,
    predicate: F,
    error_message: Cow<'static, str>,
}

impl<P, F> FilterParser<P, F> {
    pub fn new(parser: P, predicate: F, error_message: Cow<'static, str>) -> Self {
        Self {
            parser,
            predicate,
            error_message,
        }
    }
}

impl<'code, P, F, T> Parser<'code> for FilterParser<P, F>
where
    P: Parser<'code, Output = T>,
    F: Fn(&T) -> bool,
{
    type Output = T;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let (value, new_cursor) = self.parser.parse(cursor)?;

        if (self.predicate)(&value) {
            Ok((value, new_cursor))
        } else {
            Err(ParseError::composite(cursor, self.error_message.clone()))
        }
    }
}

/// Extension trait to add filter method to all parsers
pub trait FilterExt<'code>: Parser<'code> {
    fn filter<F>(
        self,
        predicate: F,
        error_message: impl Into<Cow<'static, str>>,
    ) -> FilterParser<Self, F>
    where
        Self: Sized,
        F: Fn(&Self::Output) -> bool,
    {
        FilterParser::new(self, predicate, error_message.into())
    }
}

impl<'code, P: Parser<'code>> FilterExt<'code> for P {}

/// Convenience function to create a filtered parser
pub fn filter<'code, P, F>(
    parser: P,
    predicate: F,
    error_message: impl Into<Cow<'static, str>>,
) -> FilterParser<P, F>
where
    P: Parser<'code>,
    F: Fn(&P::Output) -> bool,
{
    FilterParser::new(parser, predicate, error_message.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::MapExt;
    use crate::parser::{parse, parser_fn};
    use crate::pattern::regex_pattern;

    fn any_symbol<'code>() -> impl Parser<'code, Output = char> {
        parser_fn(|cursor: Cursor<'code>| match cursor.current() {
            Some(symbol) => Ok((symbol, cursor.advance(1))),
            None => Err(ParseError::new(cursor, "unexpected end of input")),
        })
    }

    #[test]
    fn test_filter_success() {
        let parser = any_symbol().filter(|c| c.is_alphabetic(), "expected alphabetic character");

        let (value, _) = parse(&parser, "a").unwrap();
        assert_eq!(value, 'a');
    }

    #[test]
    fn test_filter_failure() {
        let parser = any_symbol().filter(|c| c.is_alphabetic(), "expected alphabetic character");

        let error = parse(&parser, "1").unwrap_err();
        assert_eq!(error.message(), "expected alphabetic character");
        assert_eq!(error.index(), 0);
    }

    #[test]
    fn test_filter_unicode_letter() {
        let parser = any_symbol().filter(|c| c.is_alphabetic(), "expected letter");

        for input in ["é", "ß", "λ", "中"] {
            assert!(parse(&parser, input).is_ok(), "{} should be a letter", input);
        }
    }

    #[test]
    fn test_filter_inner_failure_passes_through() {
        let parser = any_symbol().filter(|_| true, "never shown");

        let error = parse(&parser, "").unwrap_err();
        assert_eq!(error.message(), "unexpected end of input");
    }

    #[test]
    fn test_filter_keyword_exclusion() {
        let identifier = regex_pattern("[a-z]+")
            .unwrap()
            .map(|captures| captures[0].to_string());
        let parser = filter(identifier, |name| name != "let", "reserved word");

        assert_eq!(parse(&parser, "letter").unwrap().0, "letter");
        assert_eq!(parse(&parser, "let").unwrap_err().message(), "reserved word");
    }
}
