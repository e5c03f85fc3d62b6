use crate::cursor::StrCursor;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that makes a parser optional
///
/// Returns `Some` with the value when the wrapped parser succeeds and
/// `None` otherwise. It never fails: when the wrapped parser fails, even
/// after consuming input, parsing resumes from the original cursor.
///
/// Example:
/// ```
/// use parsigram::and::AndExt;
/// use parsigram::ascii::decimal;
/// use parsigram::char::is_char;
/// use parsigram::optional::optional;
/// use parsigram::parse;
///
/// let ((sign, value), _) = parse(&optional(is_char('-')).and(decimal()), "-12").unwrap();
/// assert_eq!(sign, Some('-'));
/// assert_eq!(value, 12);
///
/// let ((sign, value), _) = parse(&optional(is_char('-')).and(decimal()), "12").unwrap();
/// assert_eq!(sign, None);
/// assert_eq!(value, 12);
/// ```
pub struct Optional<P> {
    parser: P,
}

impl<P> Optional<P> {
    pub fn new(parser: P) -> Self {
        Optional { parser }
    }
}

impl<'code, P> Parser<'code> for Optional<P>
where
    P: Parser<'code>,
{
    type Output = Option<P::Output>;

    fn parse(&self, cursor: StrCursor<'code>) -> ParseResult<'code, Self::Output> {
        match self.parser.parse(cursor) {
            Ok((value, cursor)) => Ok((Some(value), cursor)),
            Err(_) => Ok((None, cursor)),
        }
    }
}

/// Convenience function to create an Optional parser
pub fn optional<'code, P>(parser: P) -> Optional<P>
where
    P: Parser<'code>,
{
    Optional::new(parser)
}

/// Extension trait to add .optional() method support for parsers
pub trait OptionalExt<'code>: Parser<'code> + Sized {
    fn optional(self) -> Optional<Self> {
        Optional::new(self)
    }
}

impl<'code, P> OptionalExt<'code> for P where P: Parser<'code> {}
