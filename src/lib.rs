//! # Parsigram - Parser Combinators over Text
//!
//! Small parsers over a character cursor that combine into larger ones,
//! plus a few complete grammars built with them: fractions and numbers,
//! semantic versions, and INI documents.
//!
//! Every parser follows the same commit rule:
//!
//! - **Failures remember consumption**: a failure records whether input was
//!   consumed before it happened
//! - **Choice only backtracks over clean failures**: `or` tries its second
//!   branch only when the first failed without consuming; wrap a branch in
//!   `attempt` to make it rewindable
//! - **Located errors**: each error carries the source and byte offset it
//!   occurred at, and can render the offending line
//!
//! ```
//! use parsigram::grammar::SemVer;
//!
//! let older = SemVer::parse("1.0.0-beta.2").unwrap();
//! let newer = SemVer::parse("1.0.0").unwrap();
//! assert!(older < newer);
//! ```

pub mod and;
pub mod ascii;
pub mod attempt;
pub mod between;
pub mod bind;
pub mod char;
pub mod cursor;
pub mod eof;
pub mod error;
pub mod grammar;
pub mod many;
pub mod map;
pub mod optional;
pub mod or;
pub mod parser;
pub mod position;
pub mod separated_list;
pub mod some;
pub mod try_map;
pub mod value;

pub use and::{AndExt, and};
pub use attempt::{AttemptExt, attempt};
pub use between::between;
pub use bind::{BindExt, bind};
pub use crate::char::{any_char, is_char, none_of, one_of, satisfy};
pub use cursor::StrCursor;
pub use eof::eof;
pub use error::{CodeLoc, Failure, ParseError};
pub use many::many;
pub use map::{MapExt, map};
pub use optional::{OptionalExt, optional};
pub use or::{OrExt, or};
pub use parser::{ParseResult, Parser, parse, parse_complete};
pub use position::{PositionExt, Span, position};
pub use separated_list::separated_list;
pub use some::some;
pub use try_map::{TryMapExt, try_map};
pub use value::{fail, pure};
