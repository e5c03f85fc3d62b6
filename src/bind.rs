use crate::cursor::StrCursor;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that feeds the result of one parser into a function
/// choosing the parser to run next
///
/// This is the general form of sequencing: `and`, `left` and `right` are
/// special cases where the second parser does not depend on the first
/// value. A failure of the chosen parser counts as consumed whenever the
/// first parser advanced.
pub struct Bind<P, F> {
    parser: P,
    binder: F,
}

impl<P, F> Bind<P, F> {
    pub fn new(parser: P, binder: F) -> Self {
        Bind { parser, binder }
    }
}

impl<'code, P, F, P2> Parser<'code> for Bind<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> P2,
    P2: Parser<'code>,
{
    type Output = P2::Output;

    fn parse(&self, cursor: StrCursor<'code>) -> ParseResult<'code, Self::Output> {
        let (value, middle) = self.parser.parse(cursor)?;
        (self.binder)(value)
            .parse(middle)
            .map_err(|failure| failure.consumed_if(middle.position() > cursor.position()))
    }
}

/// Convenience function to create a Bind parser
pub fn bind<'code, P, F, P2>(parser: P, binder: F) -> Bind<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> P2,
    P2: Parser<'code>,
{
    Bind::new(parser, binder)
}

/// Extension trait to add .bind() method support for parsers
pub trait BindExt<'code>: Parser<'code> + Sized {
    fn bind<F, P2>(self, binder: F) -> Bind<Self, F>
    where
        F: Fn(Self::Output) -> P2,
        P2: Parser<'code>,
    {
        Bind::new(self, binder)
    }
}

impl<'code, P> BindExt<'code> for P where P: Parser<'code> {}
