use std::borrow::Cow;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadablePosition {
    pub line: usize,
    pub byte_offset: usize,
}

/// A location inside the parsed input, kept alongside the input itself so
/// diagnostics can quote the surrounding lines
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CodeLoc<'code> {
    code: &'code str,
    /// Byte offset in `code` where the error was detected
    loc: usize,
}

impl<'code> CodeLoc<'code> {
    pub fn new(code: &'code str, loc: usize) -> Self {
        Self { code, loc }
    }

    pub fn position(&self) -> usize {
        self.loc
    }

    /// Line number (1-based) and byte offset within that line
    ///
    /// Byte offsets are reported instead of columns: a column depends on
    /// tab width and character rendering, a byte offset does not.
    pub fn readable_position(&self) -> ReadablePosition {
        let before = &self.code[..self.loc.min(self.code.len())];
        let line = before.matches('\n').count() + 1;
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        ReadablePosition {
            line,
            byte_offset: self.loc - line_start,
        }
    }

    /// Up to two lines either side of the error line, with a pointer under
    /// the offending byte
    pub fn context_lines(&self) -> Vec<String> {
        let pos = self.readable_position();
        let first = pos.line.saturating_sub(2).max(1);
        let last = pos.line + 2;
        let mut lines = Vec::new();

        for (index, content) in self.code.split('\n').enumerate() {
            let number = index + 1;
            if number < first || number > last {
                continue;
            }
            // A trailing newline leaves an empty last segment; only show it
            // when the error sits there.
            if content.is_empty() && number > pos.line && index > 0 {
                continue;
            }
            let prefix = if number == pos.line {
                format!("  > {} | ", number)
            } else {
                format!("    {} | ", number)
            };
            lines.push(format!("{}{}", prefix, content));
            if number == pos.line {
                let pointer_offset = prefix.len() + pos.byte_offset;
                lines.push(format!("{}^--- here", " ".repeat(pointer_offset)));
            }
        }

        lines
    }
}

impl fmt::Display for CodeLoc<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pos = self.readable_position();
        write!(f, "line {}, byte offset {}", pos.line, pos.byte_offset)
    }
}

/// Every way a parse can fail
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError<'code> {
    /// A primitive match failed against the current character
    #[error("syntax error at {loc}: expected {expected}, found {found}")]
    SyntaxError {
        expected: Cow<'static, str>,
        found: String,
        loc: CodeLoc<'code>,
    },
    /// More characters were required than remained
    #[error("unexpected end of input at {loc}: expected {expected}")]
    EndOfInput {
        expected: Cow<'static, str>,
        loc: CodeLoc<'code>,
    },
    /// Well-formed input that breaks a domain rule
    #[error("invalid value at {loc}: {message}")]
    SemanticError {
        message: Cow<'static, str>,
        loc: CodeLoc<'code>,
    },
    /// A valid prefix parsed but input remained
    #[error("unexpected trailing input at {loc}: found '{found}'")]
    TrailingInput { found: char, loc: CodeLoc<'code> },
    /// A repeated parser succeeded without consuming input
    #[error("repeated parser made no progress at {loc}")]
    NoProgress { loc: CodeLoc<'code> },
}

impl<'code> ParseError<'code> {
    pub fn loc(&self) -> CodeLoc<'code> {
        match self {
            ParseError::SyntaxError { loc, .. } => *loc,
            ParseError::EndOfInput { loc, .. } => *loc,
            ParseError::SemanticError { loc, .. } => *loc,
            ParseError::TrailingInput { loc, .. } => *loc,
            ParseError::NoProgress { loc } => *loc,
        }
    }

    pub fn position(&self) -> usize {
        self.loc().position()
    }
}

/// The failure arm of a parse result
///
/// `consumed` records whether the failing parser advanced past its
/// starting cursor before giving up. Alternation only tries its next
/// branch when this is false.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{error}")]
pub struct Failure<'code> {
    error: ParseError<'code>,
    consumed: bool,
}

impl<'code> Failure<'code> {
    pub fn new(error: ParseError<'code>, consumed: bool) -> Self {
        Self { error, consumed }
    }

    /// A failure that consumed no input
    pub fn empty(error: ParseError<'code>) -> Self {
        Self::new(error, false)
    }

    pub fn error(&self) -> &ParseError<'code> {
        &self.error
    }

    pub fn into_error(self) -> ParseError<'code> {
        self.error
    }

    pub fn consumed(&self) -> bool {
        self.consumed
    }

    pub fn position(&self) -> usize {
        self.error.position()
    }

    /// Marks the failure as consumed when the surrounding parser had
    /// already advanced before the failing step ran
    pub fn consumed_if(mut self, advanced: bool) -> Self {
        self.consumed |= advanced;
        self
    }

    /// Clears the consumed flag, as if no input had been read
    pub fn rewind(mut self) -> Self {
        self.consumed = false;
        self
    }

    /// One-line message followed by the surrounding input lines
    pub fn report(&self) -> String {
        let mut out = self.error.to_string();
        out.push('\n');
        for line in self.error.loc().context_lines() {
            out.push('\n');
            out.push_str(&line);
        }
        out
    }
}
