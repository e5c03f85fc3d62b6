use crate::char::{Satisfy, satisfy};

/// Parser that matches a single ASCII digit (0-9)
pub fn digit() -> Satisfy<impl Fn(char) -> bool> {
    satisfy(|c| c.is_ascii_digit(), "digit")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::StrCursor;
    use crate::parser::Parser;

    #[test]
    fn test_digit_zero() {
        let cursor = StrCursor::new("0abc");

        let (d, cursor) = digit().parse(cursor).unwrap();
        assert_eq!(d, '0');
        assert_eq!(cursor.rest(), "abc");
    }

    #[test]
    fn test_digit_nine() {
        let cursor = StrCursor::new("9");

        let (d, cursor) = digit().parse(cursor).unwrap();
        assert_eq!(d, '9');
        assert!(cursor.eos());
    }

    #[test]
    fn test_digit_non_digit_fails() {
        let cursor = StrCursor::new("abc");

        let failure = digit().parse(cursor).unwrap_err();
        assert!(!failure.consumed());
        assert!(failure.to_string().contains("expected digit, found 'a'"));
    }

    #[test]
    fn test_digit_rejects_non_ascii_numerals() {
        // U+0660 Arabic-Indic digit zero
        let cursor = StrCursor::new("\u{0660}");
        assert!(digit().parse(cursor).is_err());
    }
}
