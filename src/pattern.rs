use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parser};
use regex::{Captures, Regex};

/// Parser that matches a regular expression at the cursor
///
/// The match must start exactly at the cursor. A match found further into the input does
/// not count, so `[a-c]` fails on `"xa"`. On success the cursor moves past the whole
/// match and the parser yields the captures, group 0 being the matched text.
#[derive(Debug, Clone)]
pub struct RegexParser {
    regex: Regex,
    pattern: String,
}

impl RegexParser {
    pub fn new(regex: Regex) -> Self {
        let pattern = regex.as_str().to_string();
        RegexParser { regex, pattern }
    }

    /// Compile `pattern` anchored at the cursor
    ///
    /// Anchoring keeps a failed match from scanning the rest of the input.
    pub fn from_pattern(pattern: &str) -> Result<Self, regex::Error> {
        let regex = Regex::new(&format!(r"\A(?:{})", pattern))?;
        Ok(RegexParser {
            regex,
            pattern: pattern.to_string(),
        })
    }

    /// The pattern as the caller wrote it
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl<'code> Parser<'code> for RegexParser {
    type Output = Captures<'code>;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        if let Some(captures) = self.regex.captures(cursor.remainder()) {
            let matched_len = captures
                .get(0)
                .filter(|whole| whole.start() == 0)
                .map(|whole| whole.end());
            if let Some(len) = matched_len {
                return Ok((captures, cursor.skip_bytes(len)));
            }
        }

        let message = format!(
            "regex '{}' failed to parse at {}",
            self.pattern,
            cursor.index()
        );
        Err(ParseError::new(cursor, message))
    }
}

/// Create a RegexParser from an already compiled regex
///
/// `Regex` clones are cheap, so a grammar can share one compiled pattern, for example
/// from a `once_cell::sync::Lazy` static.
pub fn regex(regex: Regex) -> RegexParser {
    RegexParser::new(regex)
}

/// Compile `pattern` into an anchored RegexParser
pub fn regex_pattern(pattern: &str) -> Result<RegexParser, regex::Error> {
    RegexParser::from_pattern(pattern)
}
