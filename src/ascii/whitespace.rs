use super::letter::non_newline;
use crate::and::AndExt;
use crate::char::{is_char, one_of};
use crate::many::many;
use crate::map::MapExt;
use crate::parser::Parser;

/// Characters that start a comment running to the end of the line
pub const COMMENT_MARKERS: &str = ";#";

/// Skips any run of spaces and line feeds
pub fn skip_whitespace<'code>() -> impl Parser<'code, Output = ()> {
    many(one_of(" \n")).map(|_| ())
}

/// Skips any run of line feeds
pub fn skip_eol<'code>() -> impl Parser<'code, Output = ()> {
    many(is_char('\n')).map(|_| ())
}

/// Skips any number of comment lines
///
/// A comment is a marker from [`COMMENT_MARKERS`] followed by the rest of
/// its line. The line ending and any blank lines after each comment are
/// skipped with it.
pub fn skip_comments<'code>() -> impl Parser<'code, Output = ()> {
    let comment = one_of(COMMENT_MARKERS)
        .and(many(non_newline()))
        .and(skip_whitespace());
    many(comment).map(|_| ())
}
