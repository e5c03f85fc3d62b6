use crate::cursor::StrCursor;
use crate::parser::{ParseResult, Parser};

/// Represents a span in the source code with start and end positions
/// and a reference to the source code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span<'code> {
    /// Reference to the source code
    pub source: &'code str,
    /// Start byte offset (inclusive)
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
}

impl<'code> Span<'code> {
    pub fn new(source: &'code str, start: usize, end: usize) -> Self {
        Span { source, start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The text this span covers
    pub fn as_str(&self) -> &'code str {
        &self.source[self.start..self.end]
    }
}

/// A parser combinator that captures the span of a successful parse
pub struct Position<P> {
    parser: P,
}

impl<P> Position<P> {
    pub fn new(parser: P) -> Self {
        Position { parser }
    }
}

impl<'code, P> Parser<'code> for Position<P>
where
    P: Parser<'code>,
{
    type Output = (P::Output, Span<'code>);

    fn parse(&self, cursor: StrCursor<'code>) -> ParseResult<'code, Self::Output> {
        let start = cursor.position();
        let (output, new_cursor) = self.parser.parse(cursor)?;
        let span = Span::new(cursor.source(), start, new_cursor.position());
        Ok(((output, span), new_cursor))
    }
}

/// Parser that returns the input text matched by another parser,
/// discarding its value
pub struct Recognize<P> {
    parser: P,
}

impl<'code, P> Parser<'code> for Recognize<P>
where
    P: Parser<'code>,
{
    type Output = &'code str;

    fn parse(&self, cursor: StrCursor<'code>) -> ParseResult<'code, &'code str> {
        let (_, new_cursor) = self.parser.parse(cursor)?;
        let text = &cursor.source()[cursor.position()..new_cursor.position()];
        Ok((text, new_cursor))
    }
}

/// Extension trait to add position tracking to any parser
pub trait PositionExt<'code>: Parser<'code> + Sized {
    /// Wrap this parser to capture its position span
    fn with_span(self) -> Position<Self> {
        Position::new(self)
    }

    /// Wrap this parser to return the text it matched
    fn recognize(self) -> Recognize<Self> {
        Recognize { parser: self }
    }
}

impl<'code, P> PositionExt<'code> for P where P: Parser<'code> {}

/// Convenience function to create a Position combinator
pub fn position<P>(parser: P) -> Position<P> {
    Position::new(parser)
}
