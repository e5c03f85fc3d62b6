use crate::cursor::StrCursor;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that undoes the commitment of a failed parser
///
/// On failure the wrapped parser is reported as having consumed nothing,
/// however far it got. Since failures never hand back a cursor, the
/// caller resumes from the original position.
pub struct Attempt<P> {
    parser: P,
}

impl<P> Attempt<P> {
    pub fn new(parser: P) -> Self {
        Attempt { parser }
    }
}

impl<'code, P> Parser<'code> for Attempt<P>
where
    P: Parser<'code>,
{
    type Output = P::Output;

    fn parse(&self, cursor: StrCursor<'code>) -> ParseResult<'code, Self::Output> {
        self.parser.parse(cursor).map_err(|failure| failure.rewind())
    }
}

/// Convenience function to create an Attempt parser
pub fn attempt<'code, P>(parser: P) -> Attempt<P>
where
    P: Parser<'code>,
{
    Attempt::new(parser)
}

/// Extension trait to add .attempt() method support for parsers
pub trait AttemptExt<'code>: Parser<'code> + Sized {
    fn attempt(self) -> Attempt<Self> {
        Attempt::new(self)
    }
}

impl<'code, P> AttemptExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::and::AndExt;
    use crate::char::is_char;

    #[test]
    fn test_attempt_success_passes_through() {
        let cursor = StrCursor::new("abc");
        let parser = is_char('a').and(is_char('b')).attempt();

        let ((a, b), cursor) = parser.parse(cursor).unwrap();
        assert_eq!((a, b), ('a', 'b'));
        assert_eq!(cursor.position(), 2);
    }

    #[test]
    fn test_attempt_clears_consumed_flag() {
        let cursor = StrCursor::new("ax");
        let committed = is_char('a').and(is_char('b'));
        assert!(committed.parse(cursor).unwrap_err().consumed());

        let failure = attempt(is_char('a').and(is_char('b')))
            .parse(cursor)
            .unwrap_err();
        assert!(!failure.consumed());
        // The error still says where the inner parser gave up
        assert_eq!(failure.position(), 1);
    }
}
