use crate::and::AndExt;
use crate::ascii::{decimal, letter};
use crate::char::is_char;
use crate::error::Failure;
use crate::map::MapExt;
use crate::or::OrExt;
use crate::parser::{Parser, parse_complete};
use crate::position::PositionExt;
use crate::separated_list::separated_list;
use crate::some::some;
use crate::try_map::TryMapExt;
use crate::value::pure;
use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;

/// One dot-separated identifier of a release or metadata tag list
///
/// Numeric identifiers order numerically and always sort before textual
/// ones, which order lexicographically. The variant order carries this.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum NumberOrString {
    Number(u64),
    Text(String),
}

impl fmt::Display for NumberOrString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumberOrString::Number(n) => write!(f, "{}", n),
            NumberOrString::Text(s) => f.write_str(s),
        }
    }
}

/// A semantic version: `MAJOR.MINOR.PATCH[-release][+metadata]`
///
/// Equality and ordering ignore build metadata, so `1.0.0+a` and
/// `1.0.0+b` compare equal even though their fields differ.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SemVer {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub release: Vec<NumberOrString>,
    pub metadata: Vec<NumberOrString>,
}

impl SemVer {
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        SemVer {
            major,
            minor,
            patch,
            release: Vec::new(),
            metadata: Vec::new(),
        }
    }

    /// Parse a complete version string
    pub fn parse(input: &str) -> Result<Self, Failure<'_>> {
        parse_complete(&parse_semver(), input)
    }

    /// A version with release tags precedes the same version without them
    pub fn is_prerelease(&self) -> bool {
        !self.release.is_empty()
    }
}

/// Precedence of two release tag lists
///
/// An empty list is a final release and ranks above any pre-release.
/// Otherwise identifiers are compared pairwise and a list that is a strict
/// prefix of the other ranks lower.
pub fn compare_release(left: &[NumberOrString], right: &[NumberOrString]) -> Ordering {
    match (left.is_empty(), right.is_empty()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => left.cmp(right),
    }
}

impl Ord for SemVer {
    fn cmp(&self, other: &Self) -> Ordering {
        self.major
            .cmp(&other.major)
            .then(self.minor.cmp(&other.minor))
            .then(self.patch.cmp(&other.patch))
            .then_with(|| compare_release(&self.release, &other.release))
    }
}

impl PartialOrd for SemVer {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for SemVer {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SemVer {}

fn write_tags(f: &mut fmt::Formatter<'_>, prefix: char, tags: &[NumberOrString]) -> fmt::Result {
    for (i, tag) in tags.iter().enumerate() {
        let lead = if i == 0 { prefix } else { '.' };
        write!(f, "{}{}", lead, tag)?;
    }
    Ok(())
}

impl fmt::Display for SemVer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        write_tags(f, '-', &self.release)?;
        write_tags(f, '+', &self.metadata)
    }
}

fn version_number<'code>() -> impl Parser<'code, Output = u64> {
    decimal().try_map(|n| {
        u64::try_from(n).map_err(|_| Cow::from(format!("version number too large: {}", n)))
    })
}

/// A numeric identifier, or failing that a run of letters
pub fn parse_tag<'code>() -> impl Parser<'code, Output = NumberOrString> {
    version_number()
        .map(NumberOrString::Number)
        .or(some(letter())
            .recognize()
            .map(|text: &str| NumberOrString::Text(text.to_owned())))
}

/// One or more tags separated by `.`
pub fn parse_tags<'code>() -> impl Parser<'code, Output = Vec<NumberOrString>> {
    separated_list(parse_tag(), is_char('.'))
}

/// A tag list introduced by `marker`, or an empty list when the marker is
/// absent. Once the marker matches the tag list is required.
fn tag_section<'code>(marker: char) -> impl Parser<'code, Output = Vec<NumberOrString>> {
    is_char(marker).right(parse_tags()).or(pure(Vec::new()))
}

/// `MAJOR.MINOR.PATCH`, then optional `-` release tags, then optional `+`
/// metadata tags
pub fn parse_semver<'code>() -> impl Parser<'code, Output = SemVer> {
    version_number()
        .left(is_char('.'))
        .and(version_number())
        .left(is_char('.'))
        .and(version_number())
        .and(tag_section('-'))
        .and(tag_section('+'))
        .map(|((((major, minor), patch), release), metadata)| SemVer {
            major,
            minor,
            patch,
            release,
            metadata,
        })
}
