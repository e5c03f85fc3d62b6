use crate::cursor::StrCursor;
use crate::error::{Failure, ParseError};
use crate::parser::{ParseResult, Parser};

/// Parser combinator that matches a list of items separated by a parser
///
/// This combinator parses at least one item, followed by zero or more
/// occurrences of (separator + item). It returns a vector of all items.
///
/// # Examples
/// - `"a.b.c"` with separator `.` → `vec!['a', 'b', 'c']`
/// - `"1;2;3"` with separator `;` → `vec![1, 2, 3]`
///
/// # Note
/// - Requires at least one element
/// - A separator that matches commits to another element, so a trailing
///   separator is an error
/// - Does not handle whitespace
/// - A separator and element pair must consume at least one character;
///   a round that does not would repeat forever, so it fails with
///   `NoProgress` instead
pub struct SeparatedList<P, PS> {
    parser: P,
    separator: PS,
}

impl<P, PS> SeparatedList<P, PS> {
    pub fn new(parser: P, separator: PS) -> Self {
        SeparatedList { parser, separator }
    }
}

impl<'code, P, PS> Parser<'code> for SeparatedList<P, PS>
where
    P: Parser<'code>,
    PS: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, start: StrCursor<'code>) -> ParseResult<'code, Self::Output> {
        let (first_value, mut cursor) = self.parser.parse(start)?;
        let mut results = vec![first_value];

        loop {
            let after_separator = match self.separator.parse(cursor) {
                Ok((_, new_cursor)) => new_cursor,
                Err(failure) if failure.consumed() => return Err(failure),
                Err(_) => break,
            };

            // An element is required once a separator has matched
            let (value, next_cursor) = self.parser.parse(after_separator).map_err(|failure| {
                failure.consumed_if(after_separator.position() > start.position())
            })?;
            if next_cursor.position() == cursor.position() {
                let failure = Failure::empty(ParseError::NoProgress { loc: cursor.loc() });
                return Err(failure.consumed_if(cursor.position() > start.position()));
            }
            results.push(value);
            cursor = next_cursor;
        }

        Ok((results, cursor))
    }
}

/// Creates a parser that matches a list of items separated by the given parser
pub fn separated_list<'code, P, PS>(parser: P, separator: PS) -> SeparatedList<P, PS>
where
    P: Parser<'code>,
    PS: Parser<'code>,
{
    SeparatedList::new(parser, separator)
}
