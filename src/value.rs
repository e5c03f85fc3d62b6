use crate::cursor::StrCursor;
use crate::error::{Failure, ParseError};
use crate::parser::{ParseResult, Parser};
use std::borrow::Cow;
use std::marker::PhantomData;

/// Parser that always succeeds with a fixed value, consuming nothing
pub struct Pure<T> {
    value: T,
}

impl<'code, T: Clone> Parser<'code> for Pure<T> {
    type Output = T;

    fn parse(&self, cursor: StrCursor<'code>) -> ParseResult<'code, T> {
        Ok((self.value.clone(), cursor))
    }
}

/// Convenience function to create a Pure parser
pub fn pure<T: Clone>(value: T) -> Pure<T> {
    Pure { value }
}

/// Parser that always fails with a message, consuming nothing
pub struct Fail<T> {
    message: Cow<'static, str>,
    _phantom: PhantomData<fn() -> T>,
}

impl<'code, T> Parser<'code> for Fail<T> {
    type Output = T;

    fn parse(&self, cursor: StrCursor<'code>) -> ParseResult<'code, T> {
        Err(Failure::empty(ParseError::SemanticError {
            message: self.message.clone(),
            loc: cursor.loc(),
        }))
    }
}

/// Convenience function to create a Fail parser
pub fn fail<T>(message: impl Into<Cow<'static, str>>) -> Fail<T> {
    Fail {
        message: message.into(),
        _phantom: PhantomData,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pure_consumes_nothing() {
        let cursor = StrCursor::new("hello");

        let (value, rest) = pure(42).parse(cursor).unwrap();
        assert_eq!(value, 42);
        assert_eq!(rest, cursor);
    }

    #[test]
    fn test_fail_reports_message() {
        let cursor = StrCursor::new("hello");

        let failure = fail::<()>("not today").parse(cursor).unwrap_err();
        assert!(!failure.consumed());
        assert!(failure.to_string().ends_with("not today"));
    }
}
