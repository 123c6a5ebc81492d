use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::map::Map;
use crate::parser::{ParseResult, Parser};

/// Describe the symbol at `cursor` for error messages
pub(crate) fn describe_current(cursor: &Cursor<'_>) -> String {
    match cursor.current() {
        Some(symbol) => symbol.to_string(),
        None => "end of input".to_string(),
    }
}

/// Parser that matches a specific symbol
pub struct CharacterParser {
    expected: char,
}

impl CharacterParser {
    pub fn new(expected: char) -> Self {
        CharacterParser { expected }
    }
}

impl<'code> Parser<'code> for CharacterParser {
    type Output = char;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        match cursor.current() {
            Some(symbol) if symbol == self.expected => Ok((symbol, cursor.advance(1))),
            _ => {
                let message = format!(
                    "character failed to parse, found '{}' expected '{}' at {}",
                    describe_current(&cursor),
                    self.expected,
                    cursor.index()
                );
                Err(ParseError::new(cursor, message))
            }
        }
    }
}

/// Convenience function to create a CharacterParser
pub fn character(expected: char) -> CharacterParser {
    CharacterParser::new(expected)
}

/// Match `expected` and yield `transform(expected)` instead of the symbol itself
pub fn character_with<F, U>(expected: char, transform: F) -> Map<CharacterParser, F>
where
    F: Fn(char) -> U,
{
    Map::new(CharacterParser::new(expected), transform)
}
