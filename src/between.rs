use crate::cursor::StrCursor;
use crate::parser::{ParseResult, Parser};

/// Parser that matches content between opening and closing delimiters
///
/// Parses `open + content + close` and returns just the `content` value
/// with the delimiters discarded. Whitespace is not skipped.
///
/// # Examples
/// - `"[content]"` → `"content"`
/// - `"(value)"` → `"value"`
pub struct Between<P1, P2, P3> {
    open: P1,
    content: P2,
    close: P3,
}

impl<P1, P2, P3> Between<P1, P2, P3> {
    pub fn new(open: P1, content: P2, close: P3) -> Self {
        Between {
            open,
            content,
            close,
        }
    }
}

impl<'code, P1, P2, P3> Parser<'code> for Between<P1, P2, P3>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
    P3: Parser<'code>,
{
    type Output = P2::Output;

    fn parse(&self, start: StrCursor<'code>) -> ParseResult<'code, Self::Output> {
        let (_, cursor) = self.open.parse(start)?;
        let advanced = |at: StrCursor<'code>| at.position() > start.position();

        let (value, after_content) = self
            .content
            .parse(cursor)
            .map_err(|failure| failure.consumed_if(advanced(cursor)))?;
        let (_, end) = self
            .close
            .parse(after_content)
            .map_err(|failure| failure.consumed_if(advanced(after_content)))?;

        Ok((value, end))
    }
}

/// Creates a parser for content surrounded by two delimiters
pub fn between<'code, P1, P2, P3>(open: P1, content: P2, close: P3) -> Between<P1, P2, P3>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
    P3: Parser<'code>,
{
    Between::new(open, content, close)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ascii::{decimal, letter};
    use crate::char::is_char;
    use crate::some::some;

    #[test]
    fn test_between_brackets() {
        let cursor = StrCursor::new("[abc]rest");
        let parser = between(is_char('['), some(letter()), is_char(']'));

        let (letters, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(letters.into_iter().collect::<String>(), "abc");
        assert_eq!(cursor.rest(), "rest");
    }

    #[test]
    fn test_between_parentheses() {
        let cursor = StrCursor::new("(42)");
        let parser = between(is_char('('), decimal(), is_char(')'));

        let (value, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(value, 42);
        assert!(cursor.eos());
    }

    #[test]
    fn test_missing_open_does_not_consume() {
        let cursor = StrCursor::new("abc]");
        let parser = between(is_char('['), some(letter()), is_char(']'));

        let failure = parser.parse(cursor).unwrap_err();
        assert!(!failure.consumed());
    }

    #[test]
    fn test_missing_close_is_consumed() {
        let cursor = StrCursor::new("[abc");
        let parser = between(is_char('['), some(letter()), is_char(']'));

        let failure = parser.parse(cursor).unwrap_err();
        assert!(failure.consumed());
        assert_eq!(failure.position(), 4);
    }

    #[test]
    fn test_empty_content_fails() {
        let cursor = StrCursor::new("[]");
        let parser = between(is_char('['), some(letter()), is_char(']'));

        let failure = parser.parse(cursor).unwrap_err();
        assert!(failure.consumed());
        assert_eq!(failure.position(), 1);
    }
}
