use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parser};
use std::borrow::Cow;

/// Parser that matches an exact literal as a whole
///
/// The literal is compared against the start of the remaining input in one go. There is
/// no partial progress: either the whole literal is there or nothing is consumed.
pub struct StringParser {
    expected: Cow<'static, str>,
}

impl StringParser {
    pub fn new(expected: impl Into<Cow<'static, str>>) -> Self {
        Self {
            expected: expected.into(),
        }
    }
}

impl<'code> Parser<'code> for StringParser {
    type Output = &'code str;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let remainder = cursor.remainder();
        if remainder.starts_with(self.expected.as_ref()) {
            let len = self.expected.len();
            return Ok((&remainder[..len], cursor.skip_bytes(len)));
        }

        let found_len = remainder
            .char_indices()
            .nth(self.expected.chars().count())
            .map(|(offset, _)| offset)
            .unwrap_or(remainder.len());
        let message = format!(
            "string failed to parse, found '{}' expected '{}' at {}",
            &remainder[..found_len],
            self.expected,
            cursor.index()
        );
        Err(ParseError::new(cursor, message))
    }
}

/// Convenience function to create a StringParser
pub fn string(expected: impl Into<Cow<'static, str>>) -> StringParser {
    StringParser::new(expected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    #[test]
    fn test_string_exact_match() {
        let (value, cursor) = parse(string("hello"), "hello").unwrap();

        assert_eq!(value, "hello");
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_string_prefix_match() {
        let (value, cursor) = parse(string("let"), "let x = 1").unwrap();

        assert_eq!(value, "let");
        assert_eq!(cursor.remainder(), " x = 1");
    }

    #[test]
    fn test_string_failure_consumes_nothing() {
        let error = parse(string("hello"), "help me").unwrap_err();

        assert_eq!(error.index(), 0);
        assert_eq!(
            error.message(),
            "string failed to parse, found 'help ' expected 'hello' at 0"
        );
    }

    #[test]
    fn test_string_input_too_short() {
        let error = parse(string("hello"), "hel").unwrap_err();

        assert_eq!(
            error.message(),
            "string failed to parse, found 'hel' expected 'hello' at 0"
        );
    }

    #[test]
    fn test_string_from_middle() {
        let cursor = Cursor::new("say hi").advance(4);
        let (value, cursor) = string("hi").parse(cursor).unwrap();

        assert_eq!(value, "hi");
        assert_eq!(cursor.index(), 6);
    }

    #[test]
    fn test_string_unicode() {
        let (value, cursor) = parse(string("héllo"), "héllo wörld").unwrap();

        assert_eq!(value, "héllo");
        assert_eq!(cursor.current(), Some(' '));

        let error = parse(string("wörld"), "wöw").unwrap_err();
        assert!(error.message().contains("found 'wöw'"));
    }

    #[test]
    fn test_string_owned_literal() {
        let keyword = String::from("fn");
        let (value, _) = parse(string(keyword), "fn main").unwrap();

        assert_eq!(value, "fn");
    }

    #[test]
    fn test_empty_string_always_matches() {
        let (value, cursor) = parse(string(""), "abc").unwrap();

        assert_eq!(value, "");
        assert_eq!(cursor.index(), 0);
    }
}
