use crate::cursor::StrCursor;
use crate::error::{Failure, ParseError};
use crate::parser::{ParseResult, Parser};

/// Apply `parser` repeatedly, pushing each result onto `results`
///
/// Stops cleanly at the first failure that consumed nothing. A failure
/// that consumed input is a hard error and is returned. The wrapped parser
/// must consume at least one character per success; one that does not
/// would repeat forever, so that case fails with `NoProgress` instead.
pub(crate) fn repeat<'code, P>(
    parser: &P,
    start: StrCursor<'code>,
    mut cursor: StrCursor<'code>,
    results: &mut Vec<P::Output>,
) -> ParseResult<'code, ()>
where
    P: Parser<'code>,
{
    loop {
        match parser.parse(cursor) {
            Ok((_, next_cursor)) if next_cursor.position() == cursor.position() => {
                let failure = Failure::empty(ParseError::NoProgress { loc: cursor.loc() });
                return Err(failure.consumed_if(cursor.position() > start.position()));
            }
            Ok((value, next_cursor)) => {
                results.push(value);
                cursor = next_cursor;
            }
            Err(failure) if failure.consumed() => return Err(failure),
            Err(_) => return Ok(((), cursor)),
        }
    }
}

/// Parser combinator that matches zero or more occurrences of the given parser
pub struct Many<P> {
    parser: P,
}

impl<P> Many<P> {
    pub fn new(parser: P) -> Self {
        Many { parser }
    }
}

impl<'code, P> Parser<'code> for Many<P>
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: StrCursor<'code>) -> ParseResult<'code, Self::Output> {
        let mut results = Vec::new();
        let ((), cursor) = repeat(&self.parser, cursor, cursor, &mut results)?;
        Ok((results, cursor))
    }
}

/// Convenience function to create a Many parser
pub fn many<'code, P>(parser: P) -> Many<P>
where
    P: Parser<'code>,
{
    Many::new(parser)
}
