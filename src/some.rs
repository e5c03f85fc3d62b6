use crate::cursor::StrCursor;
use crate::many::repeat;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that matches one or more occurrences of the given parser
///
/// The first occurrence is required; after that it behaves like
/// [`many`](crate::many::many), including treating a partial occurrence
/// as a hard error.
pub struct Some<P> {
    parser: P,
}

impl<P> Some<P> {
    pub fn new(parser: P) -> Self {
        Some { parser }
    }
}

impl<'code, P> Parser<'code> for Some<P>
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: StrCursor<'code>) -> ParseResult<'code, Self::Output> {
        let (first_value, next_cursor) = self.parser.parse(cursor)?;
        let mut results = vec![first_value];
        let ((), next_cursor) = repeat(&self.parser, cursor, next_cursor, &mut results)?;
        Ok((results, next_cursor))
    }
}

/// Convenience function to create a Some parser
pub fn some<'code, P>(parser: P) -> Some<P>
where
    P: Parser<'code>,
{
    Some::new(parser)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::char::{any_char, is_char};

    #[test]
    fn test_some_zero_matches_fails() {
        let cursor = StrCursor::new("xyz");

        let failure = some(is_char('a')).parse(cursor).unwrap_err();
        assert!(!failure.consumed());
    }

    #[test]
    fn test_some_one_match() {
        let cursor = StrCursor::new("abc");

        let (results, cursor) = some(is_char('a')).parse(cursor).unwrap();
        assert_eq!(results, vec!['a']);
        assert_eq!(cursor.rest(), "bc");
    }

    #[test]
    fn test_some_multiple_matches() {
        let cursor = StrCursor::new("aaabcd");

        let (results, cursor) = some(is_char('a')).parse(cursor).unwrap();
        assert_eq!(results, vec!['a', 'a', 'a']);
        assert_eq!(cursor.rest(), "bcd");
    }

    #[test]
    fn test_some_all_input() {
        let cursor = StrCursor::new("hello");

        let (results, cursor) = some(any_char()).parse(cursor).unwrap();
        assert_eq!(results.len(), 5);
        assert!(cursor.eos());
    }

    #[test]
    fn test_some_empty_input() {
        let cursor = StrCursor::new("");
        assert!(some(is_char('a')).parse(cursor).is_err());
    }
}
