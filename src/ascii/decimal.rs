use super::digit::digit;
use crate::parser::Parser;
use crate::some::some;
use crate::try_map::TryMapExt;
use std::borrow::Cow;

/// Parser that matches one or more ASCII digits and returns their value
///
/// Digits are folded left to right as `acc * 10 + digit` in a `u128`.
/// A run too long for that fails with a semantic error instead of
/// wrapping.
pub fn decimal<'code>() -> impl Parser<'code, Output = u128> {
    some(digit()).try_map(|digits| {
        digits
            .iter()
            .try_fold(0u128, |acc, d| {
                acc.checked_mul(10)?
                    .checked_add(u128::from(d.to_digit(10)?))
            })
            .ok_or_else(|| {
                Cow::from(format!(
                    "number too large: {}",
                    digits.iter().collect::<String>()
                ))
            })
    })
}
