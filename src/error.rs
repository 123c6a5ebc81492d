use crate::cursor::Cursor;
use std::borrow::Cow;
use std::error::Error;
use std::fmt;

/// Human readable position of a cursor
///
/// Note: We report a byte offset within the line instead of a column, since the column
/// depends on the encoding, tab width and how the text is rendered. The byte offset is
/// unambiguous and good enough for pointing at the failure.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Location {
    /// 1-based line number
    pub line: usize,
    /// Bytes between the start of the line and the position
    pub byte_offset: usize,
}

impl Location {
    pub(crate) fn of(source: &str, index: usize) -> Self {
        let before = &source[..index];
        let line = before.matches('\n').count() + 1;
        let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
        Location {
            line,
            byte_offset: index - line_start,
        }
    }
}

/// Up to 2 lines of source either side of `location`, with a pointer under it
fn context_lines(source: &str, location: Location) -> Vec<String> {
    let mut lines = Vec::new();
    let first = location.line.saturating_sub(2).max(1);
    let last = location.line + 2;

    for (number, content) in source.split('\n').enumerate().map(|(i, l)| (i + 1, l)) {
        if number < first {
            continue;
        }
        if number > last {
            break;
        }

        let prefix = if number == location.line {
            format!("  > {} | ", number)
        } else {
            format!("    {} | ", number)
        };
        lines.push(format!("{}{}", prefix, content));

        if number == location.line {
            let pointer_offset = prefix.len() + location.byte_offset;
            lines.push(format!("{}^--- here", " ".repeat(pointer_offset)));
        }
    }

    lines
}

/// Whether a failure came straight from a primitive or from a combinator
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// A primitive matcher did not match at the cursor
    Match,
    /// A combinator failed, either on its own or by re-anchoring a sub-parser failure
    Composite,
}

/// A failed parse attempt
///
/// The cursor is the one the failing parser was handed, not the point where the input
/// diverged, so a caller can retry another parser from `cursor()` without any extra
/// bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError<'code> {
    kind: ErrorKind,
    cursor: Cursor<'code>,
    message: Cow<'static, str>,
}

impl<'code> ParseError<'code> {
    /// A primitive match failure at `cursor`
    pub fn new(cursor: Cursor<'code>, message: impl Into<Cow<'static, str>>) -> Self {
        ParseError {
            kind: ErrorKind::Match,
            cursor,
            message: message.into(),
        }
    }

    /// A combinator failure at `cursor`
    pub fn composite(cursor: Cursor<'code>, message: impl Into<Cow<'static, str>>) -> Self {
        ParseError {
            kind: ErrorKind::Composite,
            cursor,
            message: message.into(),
        }
    }

    /// Move this failure to the entry cursor of the combinator propagating it
    pub fn anchored(self, entry: Cursor<'code>) -> Self {
        ParseError {
            kind: ErrorKind::Composite,
            cursor: entry,
            message: self.message,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn cursor(&self) -> Cursor<'code> {
        self.cursor
    }

    /// Byte offset where the failing parser started
    pub fn index(&self) -> usize {
        self.cursor.index()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl<'code> fmt::Display for ParseError<'code> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let location = self.cursor.location();
        writeln!(
            f,
            "Syntax error at line {}, byte offset {}: {}",
            location.line, location.byte_offset, self.message
        )?;
        writeln!(f)?;
        for line in context_lines(self.cursor.source(), location) {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

impl<'code> Error for ParseError<'code> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_first_line() {
        let location = Location::of("hello", 3);
        assert_eq!(location, Location { line: 1, byte_offset: 3 });
    }

    #[test]
    fn test_location_past_end() {
        // Position 11 = past end
        let location = Location::of("line1\nline2", 11);
        assert_eq!(location.line, 2);
        assert_eq!(location.byte_offset, 5);
    }

    #[test]
    fn test_location_after_trailing_newline() {
        let location = Location::of("hello\n", 6);
        assert_eq!(location.line, 2);
        assert_eq!(location.byte_offset, 0);
    }

    #[test]
    fn test_context_lines_window() {
        let source = "one\ntwo\nthree\nfour\nfive\nsix\nseven";
        let context = context_lines(source, Location::of(source, source.find("four").unwrap()));
        let context = context.join("\n");

        assert!(!context.contains("one"));
        assert!(context.contains("two"));
        assert!(context.contains("  > 4 | four"));
        assert!(context.contains("six"));
        assert!(!context.contains("seven"));
    }

    #[test]
    fn test_context_lines_empty_source() {
        let context = context_lines("", Location::of("", 0));
        assert_eq!(context.len(), 2);
        assert!(context[1].ends_with("^--- here"));
    }

    #[test]
    fn test_display_points_at_failure() {
        let cursor = Cursor::new("hello\nwurld").advance(7);
        let error = ParseError::new(cursor, "expected 'o'");

        let display = error.to_string();
        assert!(display.contains("Syntax error at line 2, byte offset 1: expected 'o'"));
        assert!(display.contains("  > 2 | wurld"));
        // prefix "  > 2 | " is 8 bytes wide, then one byte into the line
        assert!(display.contains(&format!("{}^--- here", " ".repeat(9))));
    }

    #[test]
    fn test_anchored_keeps_message() {
        let source = "abc";
        let entry = Cursor::new(source);
        let error = ParseError::new(entry.advance(2), "inner failure");
        assert_eq!(error.kind(), ErrorKind::Match);

        let error = error.anchored(entry);
        assert_eq!(error.kind(), ErrorKind::Composite);
        assert_eq!(error.index(), 0);
        assert_eq!(error.message(), "inner failure");
    }
}
