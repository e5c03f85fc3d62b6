use crate::cursor::StrCursor;
use crate::error::{Failure, ParseError};
use crate::parser::{ParseResult, Parser};
use std::borrow::Cow;

/// Parser that consumes one character if it satisfies a predicate
///
/// This is the single primitive every character-level parser is built on.
/// It never consumes input when it fails.
pub struct Satisfy<F> {
    predicate: F,
    expected: Cow<'static, str>,
}

impl<F> Satisfy<F> {
    pub fn new(predicate: F, expected: Cow<'static, str>) -> Self {
        Satisfy {
            predicate,
            expected,
        }
    }
}

impl<'code, F> Parser<'code> for Satisfy<F>
where
    F: Fn(char) -> bool,
{
    type Output = char;

    fn parse(&self, cursor: StrCursor<'code>) -> ParseResult<'code, char> {
        match cursor.peek() {
            Some(ch) if (self.predicate)(ch) => cursor.advance().map_err(Failure::empty),
            Some(ch) => Err(Failure::empty(ParseError::SyntaxError {
                expected: self.expected.clone(),
                found: format!("{:?}", ch),
                loc: cursor.loc(),
            })),
            None => Err(Failure::empty(ParseError::EndOfInput {
                expected: self.expected.clone(),
                loc: cursor.loc(),
            })),
        }
    }
}

/// Convenience function to create a Satisfy parser
pub fn satisfy<F>(predicate: F, expected: impl Into<Cow<'static, str>>) -> Satisfy<F>
where
    F: Fn(char) -> bool,
{
    Satisfy::new(predicate, expected.into())
}

/// Parser that consumes and returns any single character
pub fn any_char() -> Satisfy<impl Fn(char) -> bool> {
    satisfy(|_| true, "any character")
}

/// Parser that matches a specific character
pub fn is_char(expected: char) -> Satisfy<impl Fn(char) -> bool> {
    satisfy(move |ch| ch == expected, format!("{:?}", expected))
}

/// Parser that matches any character from the given set
pub fn one_of(set: &'static str) -> Satisfy<impl Fn(char) -> bool> {
    satisfy(move |ch| set.contains(ch), format!("one of {:?}", set))
}

/// Parser that matches any character not in the given set
pub fn none_of(set: &'static str) -> Satisfy<impl Fn(char) -> bool> {
    satisfy(move |ch| !set.contains(ch), format!("none of {:?}", set))
}
