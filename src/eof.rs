use crate::cursor::StrCursor;
use crate::error::{Failure, ParseError};
use crate::parser::{ParseResult, Parser};

/// Parser that succeeds only when no input remains
pub struct Eof;

impl<'code> Parser<'code> for Eof {
    type Output = ();

    fn parse(&self, cursor: StrCursor<'code>) -> ParseResult<'code, ()> {
        match cursor.peek() {
            None => Ok(((), cursor)),
            Some(found) => Err(Failure::empty(ParseError::TrailingInput {
                found,
                loc: cursor.loc(),
            })),
        }
    }
}

/// Convenience function to create an Eof parser
pub fn eof() -> Eof {
    Eof
}
