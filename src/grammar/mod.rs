//! Complete grammars built from the combinators in this crate

pub mod ini;
pub mod numeric;
pub mod semver;

pub use ini::{
    Assignments, Config, Header, Name, Section, Value, parse_assignment, parse_document,
    parse_header, parse_section,
};
pub use numeric::{Fraction, Numeric, float_literal, number_or_fraction, parse_fraction, signed_integer};
pub use semver::{NumberOrString, SemVer, compare_release, parse_semver, parse_tag, parse_tags};
