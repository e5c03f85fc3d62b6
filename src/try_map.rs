use crate::cursor::StrCursor;
use crate::error::{Failure, ParseError};
use crate::parser::{ParseResult, Parser};
use std::borrow::Cow;

/// Parser that checks and converts the output of another parser
///
/// The conversion function either returns the new value or a message.
/// A message becomes a `SemanticError` located where the inner parser
/// started: the input was well formed but its value is not acceptable.
pub struct TryMap<P, F> {
    parser: P,
    converter: F,
}

impl<P, F> TryMap<P, F> {
    pub fn new(parser: P, converter: F) -> Self {
        Self { parser, converter }
    }
}

impl<'code, P, F, T, U> Parser<'code> for TryMap<P, F>
where
    P: Parser<'code, Output = T>,
    F: Fn(T) -> Result<U, Cow<'static, str>>,
{
    type Output = U;

    fn parse(&self, cursor: StrCursor<'code>) -> ParseResult<'code, U> {
        let (value, new_cursor) = self.parser.parse(cursor)?;

        match (self.converter)(value) {
            Ok(converted) => Ok((converted, new_cursor)),
            Err(message) => {
                let failure = Failure::empty(ParseError::SemanticError {
                    message,
                    loc: cursor.loc(),
                });
                Err(failure.consumed_if(new_cursor.position() > cursor.position()))
            }
        }
    }
}

/// Extension trait to add try_map method to all parsers
pub trait TryMapExt<'code>: Parser<'code> + Sized {
    fn try_map<F, U>(self, converter: F) -> TryMap<Self, F>
    where
        F: Fn(Self::Output) -> Result<U, Cow<'static, str>>,
    {
        TryMap::new(self, converter)
    }
}

impl<'code, P: Parser<'code>> TryMapExt<'code> for P {}

/// Convenience function to create a TryMap parser
pub fn try_map<'code, P, F, U>(parser: P, converter: F) -> TryMap<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> Result<U, Cow<'static, str>>,
{
    TryMap::new(parser, converter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ascii::decimal;
    use crate::char::any_char;

    #[test]
    fn test_try_map_success() {
        let cursor = StrCursor::new("200");
        let parser = decimal().try_map(|n| u8::try_from(n).map_err(|_| Cow::from("too big for a byte")));

        let (value, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(value, 200u8);
        assert!(cursor.eos());
    }

    #[test]
    fn test_try_map_rejection_is_semantic() {
        let cursor = StrCursor::new("300");
        let parser = decimal().try_map(|n| u8::try_from(n).map_err(|_| Cow::from("too big for a byte")));

        let failure = parser.parse(cursor).unwrap_err();
        assert!(failure.consumed());
        assert_eq!(failure.position(), 0);
        assert!(matches!(
            failure.error(),
            ParseError::SemanticError { message, .. } if message == "too big for a byte"
        ));
    }

    #[test]
    fn test_try_map_inner_failure_passes_through() {
        let cursor = StrCursor::new("");
        let parser = try_map(any_char(), |c| Ok::<_, Cow<'static, str>>(c));

        let failure = parser.parse(cursor).unwrap_err();
        assert!(matches!(failure.error(), ParseError::EndOfInput { .. }));
    }
}
