//! # combparse - Parser Combinator Engine
//!
//! A small algebra of composable parsers for building recursive-descent parsers over text.
//!
//! Grammars are assembled from primitive matchers (`character`, `string`, `regex`) and
//! combinators (`seq`, `choose`, `optional`, `many`, `interpose`, `between`, `chainl`,
//! `recursive`), then run with [`parse`]. The library emphasizes:
//!
//! - **Failures are values**: every parser returns a [`ParseResult`], nothing panics or
//!   unwinds
//! - **Free backtracking**: a [`Cursor`] is an immutable `Copy` value, so trying another
//!   alternative just means reusing the cursor you started from
//! - **Atomic composites**: a failing sequence reports the position it started at, not the
//!   position where it gave up
//! - **Self-referential grammars**: `recursive` defers building a rule until parse time
//!
//! ```
//! use combparse::{MapExt, chainl, character, parse, regex_pattern};
//!
//! let number = regex_pattern("[0-9]+")
//!     .unwrap()
//!     .map(|captures| captures[0].parse::<i64>().unwrap_or_default());
//! let minus = character('-').map(|_| |l: i64, r: i64| l - r);
//!
//! let (value, _) = parse(chainl(number, minus), "10-3-2").unwrap();
//! assert_eq!(value, 5);
//! ```

pub mod between;
pub mod chainl;
pub mod character;
pub mod choose;
pub mod cursor;
pub mod error;
pub mod filter;
pub mod interpose;
pub mod many;
pub mod map;
pub mod optional;
pub mod parser;
pub mod pattern;
pub mod position;
pub mod recursive;
pub mod seq;
pub mod string;

pub use between::between;
pub use chainl::chainl;
pub use character::{character, character_with};
pub use choose::choose;
pub use cursor::Cursor;
pub use error::{ErrorKind, Location, ParseError};
pub use filter::FilterExt;
pub use interpose::interpose;
pub use many::{many, many_min, many1};
pub use map::MapExt;
pub use optional::optional;
pub use parser::{BoxExt, BoxedParser, ParseResult, Parser, parse, parser_fn};
pub use pattern::{RegexParser, regex, regex_pattern};
pub use position::{PositionExt, Span};
pub use recursive::recursive;
pub use seq::seq;
pub use string::string;
