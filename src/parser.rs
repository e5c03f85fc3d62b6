use crate::cursor::StrCursor;
use crate::eof::eof;
use crate::error::Failure;
use tracing::{debug, trace};

/// Success carries the value and the cursor after it; failure carries the
/// error and whether input was consumed
pub type ParseResult<'code, T> = Result<(T, StrCursor<'code>), Failure<'code>>;

/// Core parser trait for parser combinators
pub trait Parser<'code> {
    type Output;

    /// Attempt to parse from the given cursor position
    ///
    /// Returns the parsed value and the advanced cursor on success. On
    /// failure the caller still holds the cursor it passed in, so
    /// backtracking is a matter of reusing it.
    fn parse(&self, cursor: StrCursor<'code>) -> ParseResult<'code, Self::Output>;
}

/// Any function from cursor to result is a parser
impl<'code, F, T> Parser<'code> for F
where
    F: Fn(StrCursor<'code>) -> ParseResult<'code, T>,
{
    type Output = T;

    fn parse(&self, cursor: StrCursor<'code>) -> ParseResult<'code, T> {
        self(cursor)
    }
}

/// Run a grammar against a whole input buffer
///
/// The grammar may stop before the end of input; the remaining cursor is
/// returned with the value. Use [`parse_complete`] to reject leftovers.
pub fn parse<'code, P>(grammar: &P, input: &'code str) -> ParseResult<'code, P::Output>
where
    P: Parser<'code>,
{
    trace!(len = input.len(), "parsing input");
    let result = grammar.parse(StrCursor::new(input));
    if let Err(failure) = &result {
        debug!(
            offset = failure.position(),
            consumed = failure.consumed(),
            error = %failure,
            "parse failed"
        );
    }
    result
}

/// Run a grammar and require it to consume the entire input
pub fn parse_complete<'code, P>(grammar: &P, input: &'code str) -> Result<P::Output, Failure<'code>>
where
    P: Parser<'code>,
{
    let (value, rest) = parse(grammar, input)?;
    let ((), _) = eof().parse(rest).map_err(|failure| {
        debug!(offset = rest.position(), "input not fully consumed");
        failure.consumed_if(rest.position() > 0)
    })?;
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::char::is_char;
    use crate::error::ParseError;

    fn remaining_len(cursor: StrCursor<'_>) -> ParseResult<'_, usize> {
        Ok((cursor.rest().len(), cursor))
    }

    #[test]
    fn test_function_as_parser() {
        let (len, cursor) = parse(&remaining_len, "abc").unwrap();
        assert_eq!(len, 3);
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_parse_leaves_rest() {
        let (ch, rest) = parse(&is_char('a'), "ab").unwrap();

        assert_eq!(ch, 'a');
        assert_eq!(rest.rest(), "b");
    }

    #[test]
    fn test_parse_complete_accepts_full_match() {
        let value = parse_complete(&is_char('a'), "a").unwrap();
        assert_eq!(value, 'a');
    }

    #[test]
    fn test_parse_complete_rejects_trailing_input() {
        let failure = parse_complete(&is_char('a'), "ab").unwrap_err();

        assert!(matches!(
            failure.error(),
            ParseError::TrailingInput { found: 'b', .. }
        ));
        assert_eq!(failure.position(), 1);
        assert!(failure.consumed());
    }

    #[test]
    fn test_parse_complete_reports_grammar_failure() {
        let failure = parse_complete(&is_char('a'), "x").unwrap_err();

        assert!(matches!(failure.error(), ParseError::SyntaxError { .. }));
        assert!(!failure.consumed());
    }
}
