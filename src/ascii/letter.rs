use crate::char::{Satisfy, satisfy};

/// Parser that matches a single ASCII letter
pub fn letter() -> Satisfy<impl Fn(char) -> bool> {
    satisfy(|c| c.is_ascii_alphabetic(), "letter")
}

/// Parser that matches any character other than a line feed
pub fn non_newline() -> Satisfy<impl Fn(char) -> bool> {
    satisfy(|c| c != '\n', "any character except newline")
}
