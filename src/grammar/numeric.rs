use crate::and::AndExt;
use crate::ascii::{decimal, digit};
use crate::attempt::attempt;
use crate::char::is_char;
use crate::error::Failure;
use crate::map::MapExt;
use crate::optional::optional;
use crate::or::OrExt;
use crate::parser::{Parser, parse_complete};
use crate::position::PositionExt;
use crate::some::some;
use crate::try_map::TryMapExt;
use std::borrow::Cow;
use std::fmt;

/// An exact ratio of two non-negative integers, kept as written
///
/// The denominator is never zero. Equality compares values, so `1/2`
/// equals `2/4` even though their parts differ.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Fraction {
    numerator: u128,
    denominator: u128,
}

impl Fraction {
    /// Returns `None` for a zero denominator
    pub fn new(numerator: u128, denominator: u128) -> Option<Self> {
        (denominator != 0).then_some(Fraction {
            numerator,
            denominator,
        })
    }

    /// Parse `N/D` from a complete string
    pub fn parse(input: &str) -> Result<Self, Failure<'_>> {
        parse_complete(&parse_fraction(), input)
    }

    pub fn numerator(&self) -> u128 {
        self.numerator
    }

    pub fn denominator(&self) -> u128 {
        self.denominator
    }

    /// The same value in lowest terms
    pub fn reduced(&self) -> Self {
        let divisor = gcd(self.numerator, self.denominator);
        Fraction {
            numerator: self.numerator / divisor,
            denominator: self.denominator / divisor,
        }
    }

    pub fn to_f64(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }
}

fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

impl PartialEq for Fraction {
    fn eq(&self, other: &Self) -> bool {
        let (left, right) = (self.reduced(), other.reduced());
        left.numerator == right.numerator && left.denominator == right.denominator
    }
}

impl Eq for Fraction {}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

/// Either kind of literal accepted by [`number_or_fraction`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Numeric {
    Float(f64),
    Fraction(Fraction),
}

/// `N/D` with decimal numerator and denominator
///
/// A zero denominator is well-formed text but not a number, so it fails
/// with a semantic error located at the start of the fraction.
pub fn parse_fraction<'code>() -> impl Parser<'code, Output = Fraction> {
    decimal()
        .left(is_char('/'))
        .and(decimal())
        .try_map(|(numerator, denominator)| {
            Fraction::new(numerator, denominator)
                .ok_or(Cow::Borrowed("division by zero: denominator is 0"))
        })
}

/// A decimal integer with an optional leading `-`
pub fn signed_integer<'code>() -> impl Parser<'code, Output = i128> {
    optional(is_char('-'))
        .and(decimal())
        .try_map(|(sign, magnitude)| {
            let value = match sign {
                Some(_) => 0i128.checked_sub_unsigned(magnitude),
                None => i128::try_from(magnitude).ok(),
            };
            value.ok_or_else(|| Cow::from(format!("integer out of range: {}", magnitude)))
        })
}

/// `[-]digits.digits`, read as the nearest `f64`
pub fn float_literal<'code>() -> impl Parser<'code, Output = f64> {
    optional(is_char('-'))
        .and(some(digit()))
        .and(is_char('.'))
        .and(some(digit()))
        .recognize()
        .try_map(|text| {
            text.parse::<f64>()
                .map_err(|e| Cow::from(format!("invalid floating point literal {}: {}", text, e)))
        })
}

/// A floating point literal, or failing that a fraction
///
/// Both forms start with digits, so the float branch is wrapped in
/// `attempt`: on `1/2` it consumes `1` before failing at `/`, and without
/// the rewind the fraction branch would never run.
pub fn number_or_fraction<'code>() -> impl Parser<'code, Output = Numeric> {
    attempt(float_literal().map(Numeric::Float)).or(parse_fraction().map(Numeric::Fraction))
}
