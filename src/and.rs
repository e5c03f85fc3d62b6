use crate::cursor::StrCursor;
use crate::parser::{ParseResult, Parser};

/// Run `second` from where `first` left off
///
/// A failure in `second` counts as consumed whenever `first` advanced the
/// cursor, so alternation cannot backtrack past the partial match.
fn sequence<'code, P1, P2>(
    first: &P1,
    second: &P2,
    cursor: StrCursor<'code>,
) -> ParseResult<'code, (P1::Output, P2::Output)>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    let (result1, middle) = first.parse(cursor)?;
    let (result2, end) = second
        .parse(middle)
        .map_err(|failure| failure.consumed_if(middle.position() > cursor.position()))?;
    Ok(((result1, result2), end))
}

/// Parser combinator that sequences two parsers and returns both results as a tuple
///
/// Chaining `.and()` produces nested tuples like `(((a, b), c), d)`.
/// The destructuring pattern then spells out the parsing order.
///
/// Example:
/// ```
/// use parsigram::and::AndExt;
/// use parsigram::ascii::decimal;
/// use parsigram::char::is_char;
/// use parsigram::parse;
///
/// let (((numerator, _), denominator), _) = parse(
///     &decimal().and(is_char('/')).and(decimal()),
///     "3/4",
/// )
/// .unwrap();
/// assert_eq!((numerator, denominator), (3, 4));
/// ```
pub struct And<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> And<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        And { parser1, parser2 }
    }
}

impl<'code, P1, P2> Parser<'code> for And<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    type Output = (P1::Output, P2::Output);

    fn parse(&self, cursor: StrCursor<'code>) -> ParseResult<'code, Self::Output> {
        sequence(&self.parser1, &self.parser2, cursor)
    }
}

/// Sequence of two parsers keeping only the first result
pub struct Left<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<'code, P1, P2> Parser<'code> for Left<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    type Output = P1::Output;

    fn parse(&self, cursor: StrCursor<'code>) -> ParseResult<'code, Self::Output> {
        let ((result, _), cursor) = sequence(&self.parser1, &self.parser2, cursor)?;
        Ok((result, cursor))
    }
}

/// Sequence of two parsers keeping only the second result
pub struct Right<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<'code, P1, P2> Parser<'code> for Right<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    type Output = P2::Output;

    fn parse(&self, cursor: StrCursor<'code>) -> ParseResult<'code, Self::Output> {
        let ((_, result), cursor) = sequence(&self.parser1, &self.parser2, cursor)?;
        Ok((result, cursor))
    }
}

/// Convenience function to create an And parser
pub fn and<'code, P1, P2>(parser1: P1, parser2: P2) -> And<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    And::new(parser1, parser2)
}

/// Extension trait to add sequencing methods to parsers
pub trait AndExt<'code>: Parser<'code> + Sized {
    fn and<P>(self, other: P) -> And<Self, P>
    where
        P: Parser<'code>,
    {
        And::new(self, other)
    }

    /// Parse `other` after `self`, keeping the result of `self`
    fn left<P>(self, other: P) -> Left<Self, P>
    where
        P: Parser<'code>,
    {
        Left {
            parser1: self,
            parser2: other,
        }
    }

    /// Parse `other` after `self`, keeping the result of `other`
    fn right<P>(self, other: P) -> Right<Self, P>
    where
        P: Parser<'code>,
    {
        Right {
            parser1: self,
            parser2: other,
        }
    }
}

impl<'code, P> AndExt<'code> for P where P: Parser<'code> {}
