use crate::error::{CodeLoc, ParseError};

/// Immutable position within a string being parsed
///
/// A cursor never changes in place. Advancing returns a new cursor, so a
/// saved copy is always a valid point to resume from. This is what makes
/// backtracking free: a failed branch simply drops its cursor.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum StrCursor<'code> {
    /// Cursor pointing at a character boundary with input remaining
    Valid {
        source: &'code str,
        /// Byte offset into `source`
        position: usize,
    },
    /// No characters remain
    EndOfInput { source: &'code str },
}

impl<'code> StrCursor<'code> {
    pub fn new(source: &'code str) -> Self {
        if source.is_empty() {
            return StrCursor::EndOfInput { source };
        }
        StrCursor::Valid {
            source,
            position: 0,
        }
    }

    /// The character under the cursor, without advancing
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Consume one character, returning it with the cursor past it
    pub fn advance(self) -> Result<(char, Self), ParseError<'code>> {
        match self.peek() {
            Some(ch) => {
                let (source, position) = self.inner();
                let next = position + ch.len_utf8();
                let cursor = if next >= source.len() {
                    StrCursor::EndOfInput { source }
                } else {
                    StrCursor::Valid {
                        source,
                        position: next,
                    }
                };
                Ok((ch, cursor))
            }
            None => Err(ParseError::EndOfInput {
                expected: "any character".into(),
                loc: self.loc(),
            }),
        }
    }

    /// Byte offset of the cursor; the input length once exhausted
    pub fn position(&self) -> usize {
        match self {
            StrCursor::Valid { position, .. } => *position,
            StrCursor::EndOfInput { source } => source.len(),
        }
    }

    pub fn source(&self) -> &'code str {
        match self {
            StrCursor::Valid { source, .. } => source,
            StrCursor::EndOfInput { source } => source,
        }
    }

    /// Input not yet consumed
    pub fn rest(&self) -> &'code str {
        match self {
            StrCursor::Valid { source, position } => &source[*position..],
            StrCursor::EndOfInput { .. } => "",
        }
    }

    pub fn eos(&self) -> bool {
        matches!(self, StrCursor::EndOfInput { .. })
    }

    pub fn loc(&self) -> CodeLoc<'code> {
        CodeLoc::new(self.source(), self.position())
    }

    pub fn inner(self) -> (&'code str, usize) {
        (self.source(), self.position())
    }
}
