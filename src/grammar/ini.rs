use crate::and::AndExt;
use crate::ascii::{letter, non_newline, skip_comments, skip_eol, skip_whitespace};
use crate::between::between;
use crate::char::is_char;
use crate::error::Failure;
use crate::map::MapExt;
use crate::parser::{Parser, parse_complete};
use crate::position::PositionExt;
use crate::some::some;
use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::collections::btree_map;
use std::fmt;
use tracing::debug;

macro_rules! text_newtype {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        pub struct $name(String);

        impl $name {
            pub fn new(text: impl Into<String>) -> Self {
                $name(text.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

text_newtype!(
    /// Section name, the letters between `[` and `]`
    Header
);
text_newtype!(
    /// Left-hand side of an assignment
    Name
);
text_newtype!(
    /// Right-hand side of an assignment, everything up to the line end
    Value
);

/// The assignments of one section, keyed by name
pub type Assignments = BTreeMap<Name, Value>;

/// A header together with the assignments listed under it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub header: Header,
    pub assignments: Assignments,
}

/// A parsed INI document
///
/// Sections are keyed by header. When a header appears more than once the
/// later section replaces the earlier one entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Config {
    sections: BTreeMap<Header, Assignments>,
}

impl Config {
    /// Parse a complete document
    pub fn parse(input: &str) -> Result<Self, Failure<'_>> {
        parse_complete(&parse_document(), input)
    }

    /// Assignments of the section with this header
    pub fn get(&self, header: &str) -> Option<&Assignments> {
        self.sections.get(header)
    }

    /// Header and assignments of a section, if present
    pub fn section(&self, header: &str) -> Option<(&Header, &Assignments)> {
        self.sections.get_key_value(header)
    }

    /// Look up a single value by header and name
    pub fn value(&self, header: &str, name: &str) -> Option<&Value> {
        self.get(header)?.get(name)
    }

    pub fn headers(&self) -> impl Iterator<Item = &Header> {
        self.sections.keys()
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Sections in header order
    pub fn iter(&self) -> btree_map::Iter<'_, Header, Assignments> {
        self.sections.iter()
    }

    fn insert(&mut self, section: Section) {
        if self.sections.contains_key(&section.header) {
            debug!(header = %section.header, "section repeated, replacing earlier one");
        }
        self.sections.insert(section.header, section.assignments);
    }
}

impl FromIterator<Section> for Config {
    fn from_iter<I: IntoIterator<Item = Section>>(iter: I) -> Self {
        let mut config = Config::default();
        for section in iter {
            config.insert(section);
        }
        config
    }
}

impl<'a> IntoIterator for &'a Config {
    type Item = (&'a Header, &'a Assignments);
    type IntoIter = btree_map::Iter<'a, Header, Assignments>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// `[letters]`
pub fn parse_header<'code>() -> impl Parser<'code, Output = Header> {
    between(is_char('['), some(letter()).recognize(), is_char(']')).map(Header::new)
}

/// `letters=value`, followed by any line feeds
pub fn parse_assignment<'code>() -> impl Parser<'code, Output = (Name, Value)> {
    some(letter())
        .recognize()
        .left(is_char('='))
        .and(some(non_newline()).recognize())
        .left(skip_eol())
        .map(|(name, value)| (Name::new(name), Value::new(value)))
}

fn collect_assignments(header: &Header, pairs: Vec<(Name, Value)>) -> Assignments {
    let mut assignments = Assignments::new();
    for (name, value) in pairs {
        if assignments.contains_key(&name) {
            debug!(%header, %name, "name assigned twice, keeping the last value");
        }
        assignments.insert(name, value);
    }
    assignments
}

/// Header line followed by at least one assignment
fn section_body<'code>() -> impl Parser<'code, Output = Section> {
    parse_header()
        .left(skip_eol())
        .and(some(parse_assignment()))
        .map(|(header, pairs)| {
            let assignments = collect_assignments(&header, pairs);
            Section {
                header,
                assignments,
            }
        })
}

/// Blank lines and comment lines in any mix
fn skip_trivia<'code>() -> impl Parser<'code, Output = ()> {
    skip_whitespace().right(skip_comments())
}

/// A section, after skipping any leading whitespace and comments
pub fn parse_section<'code>() -> impl Parser<'code, Output = Section> {
    skip_trivia().right(section_body())
}

/// One or more sections, each surrounded by optional whitespace and
/// comments
pub fn parse_document<'code>() -> impl Parser<'code, Output = Config> {
    skip_trivia()
        .right(some(section_body().left(skip_trivia())))
        .map(|sections| sections.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::StrCursor;
    use crate::error::ParseError;
    use crate::parser::parse;

    const DOCUMENT: &str = "[section]\nhost=wikipedia.org\nalias=claw\n\n[whatisit]\nred=intoothandclaw\n";

    #[test]
    fn test_parse_header() {
        let cursor = StrCursor::new("[blah]\n");

        let (header, cursor) = parse_header().parse(cursor).unwrap();
        assert_eq!(header.as_str(), "blah");
        assert_eq!(cursor.rest(), "\n");
    }

    #[test]
    fn test_parse_header_rejects_non_letters() {
        let failure = parse(&parse_header(), "[bl ah]").unwrap_err();

        assert!(failure.consumed());
        assert_eq!(failure.position(), 3);
    }

    #[test]
    fn test_parse_assignment() {
        let cursor = StrCursor::new("host=wikipedia.org\n\nnext");

        let ((name, value), cursor) = parse_assignment().parse(cursor).unwrap();
        assert_eq!(name.as_str(), "host");
        assert_eq!(value.as_str(), "wikipedia.org");
        assert_eq!(cursor.rest(), "next");
    }

    #[test]
    fn test_assignment_value_keeps_spaces_and_equals() {
        let ((_, value), _) = parse(&parse_assignment(), "url=a = b c").unwrap();
        assert_eq!(value.as_str(), "a = b c");
    }

    #[test]
    fn test_assignment_requires_value() {
        let failure = parse(&parse_assignment(), "host=\n").unwrap_err();

        assert!(failure.consumed());
        assert_eq!(failure.position(), 5);
    }

    #[test]
    fn test_parse_section() {
        let (section, cursor) = parse(&parse_section(), DOCUMENT).unwrap();

        assert_eq!(section.header.as_str(), "section");
        assert_eq!(section.assignments.len(), 2);
        assert_eq!(section.assignments["host"].as_str(), "wikipedia.org");
        assert_eq!(section.assignments["alias"].as_str(), "claw");
        assert!(cursor.rest().starts_with("[whatisit]"));
    }

    #[test]
    fn test_section_without_assignments_fails() {
        let failure = parse(&parse_section(), "[empty]\n[next]\nk=v\n").unwrap_err();

        assert!(failure.consumed());
        assert_eq!(failure.position(), 8);
    }

    #[test]
    fn test_parse_document() {
        let config = Config::parse(DOCUMENT).unwrap();

        assert_eq!(config.len(), 2);
        assert_eq!(config.value("section", "host").unwrap().as_str(), "wikipedia.org");
        assert_eq!(config.value("section", "alias").unwrap().as_str(), "claw");
        assert_eq!(config.value("whatisit", "red").unwrap().as_str(), "intoothandclaw");
        assert!(config.value("whatisit", "host").is_none());

        let headers: Vec<&str> = config.headers().map(Header::as_str).collect();
        assert_eq!(headers, ["section", "whatisit"]);
    }

    #[test]
    fn test_comments_and_whitespace_prefix_is_transparent() {
        let plain = Config::parse(DOCUMENT).unwrap();

        for prefix in ["; comment\n", "# comment\n", "\n\n", "  ; a\n\n# b\n  \n"] {
            let input = format!("{}{}", prefix, DOCUMENT);
            let config = Config::parse(&input).unwrap();
            assert_eq!(config, plain, "prefix {:?}", prefix);
        }
    }

    fn permutations(pieces: &[&'static str]) -> Vec<Vec<&'static str>> {
        if pieces.is_empty() {
            return vec![Vec::new()];
        }
        let mut all = Vec::new();
        for i in 0..pieces.len() {
            let mut rest = pieces.to_vec();
            let first = rest.remove(i);
            for mut tail in permutations(&rest) {
                tail.insert(0, first);
                all.push(tail);
            }
        }
        all
    }

    #[test]
    fn test_trivia_prefix_order_and_repetition_do_not_matter() {
        let plain = Config::parse(DOCUMENT).unwrap();
        let (first, second) = DOCUMENT.split_at(DOCUMENT.find("[whatisit]").unwrap());
        let orderings = permutations(&["; a\n", "# b\n", "\n", "  \n"]);
        assert_eq!(orderings.len(), 24);

        for pieces in orderings {
            let prefix = pieces.concat();
            for trivia in [prefix.clone(), prefix.repeat(2)] {
                // Ahead of the first header and ahead of a later one
                let leading = format!("{}{}", trivia, DOCUMENT);
                assert_eq!(Config::parse(&leading).unwrap(), plain, "prefix {:?}", trivia);

                let between = format!("{}{}{}", first, trivia, second);
                assert_eq!(Config::parse(&between).unwrap(), plain, "between {:?}", trivia);
            }
        }
    }

    #[test]
    fn test_comments_between_and_after_sections() {
        let input = "[a]\nx=1\n; about b\n\n[b]\ny=2\n# trailing\n";

        let config = Config::parse(input).unwrap();
        assert_eq!(config.value("a", "x").unwrap().as_str(), "1");
        assert_eq!(config.value("b", "y").unwrap().as_str(), "2");
    }

    #[test]
    fn test_repeated_header_later_wins() {
        let config = Config::parse("[s]\na=1\nb=2\n[s]\nc=3\n").unwrap();

        let section = config.get("s").unwrap();
        assert_eq!(section.len(), 1);
        assert_eq!(section["c"].as_str(), "3");
    }

    #[test]
    fn test_repeated_name_last_wins() {
        let config = Config::parse("[s]\nk=first\nk=second\n").unwrap();
        assert_eq!(config.value("s", "k").unwrap().as_str(), "second");
    }

    #[test]
    fn test_empty_document_fails() {
        let failure = Config::parse("; only a comment\n").unwrap_err();
        assert!(matches!(failure.error(), ParseError::EndOfInput { .. }));
    }

    #[test]
    fn test_stray_text_fails() {
        let failure = Config::parse("[s]\nk=v\n  oops\n").unwrap_err();
        assert!(matches!(failure.error(), ParseError::TrailingInput { found: 'o', .. }));
        assert_eq!(failure.position(), 10);
    }

    #[test]
    fn test_iterate_sections() {
        let config = Config::parse(DOCUMENT).unwrap();

        let counts: Vec<(String, usize)> = config
            .iter()
            .map(|(header, assignments)| (header.to_string(), assignments.len()))
            .collect();
        assert_eq!(counts, [("section".to_owned(), 2), ("whatisit".to_owned(), 1)]);
        assert_eq!((&config).into_iter().count(), 2);
    }

    #[test]
    fn test_section_lookup() {
        let config = Config::parse(DOCUMENT).unwrap();

        let (header, assignments) = config.section("whatisit").unwrap();
        assert_eq!(header, &Header::new("whatisit"));
        assert!(assignments.contains_key("red"));
        assert!(config.section("missing").is_none());
        assert!(!config.is_empty());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serialize_config() {
        let config = Config::parse("[s]\nk=v\n").unwrap();

        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"s":{"k":"v"}}"#);
    }
}
