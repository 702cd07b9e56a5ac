//! Splitting a decimal number into per-register digit triples.

use std::collections::BTreeMap;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::NumeralError;
use crate::types::{DigitTriple, Register};

/// Number of integer digits covered by the unit, thousand, million and
/// billion registers.
pub const MAX_DIGITS: usize = 12;

const LIMIT: u64 = 1_000_000_000_000;

/// Largest supported number of digits after the decimal point.
pub const MAX_FRACTION_DIGITS: u32 = 3;

/// Split `number` into its non-zero registers.
///
/// With `digits_after_zero == 0` the fraction is dropped and only integer
/// registers are produced. Otherwise the number is rounded to that many
/// places (midpoint away from zero) and the fraction lands in
/// [`Register::SUBUNIT`], scaled so that `0.5` at one place becomes `005`.
///
/// A zero integer part still yields [`Register::UNIT`] holding `000`, so
/// the primary unit is always named.
///
/// # Example
///
/// ```
/// use propis::{DigitTriple, Register, decompose};
/// use rust_decimal::Decimal;
///
/// let registers = decompose(Decimal::new(1_234_567, 3), 3).unwrap();
/// assert_eq!(registers[&Register::THOUSAND], DigitTriple::from_value(1));
/// assert_eq!(registers[&Register::UNIT], DigitTriple::from_value(234));
/// assert_eq!(registers[&Register::SUBUNIT], DigitTriple::from_value(567));
/// ```
pub fn decompose(
    number: Decimal,
    digits_after_zero: u32,
) -> Result<BTreeMap<Register, DigitTriple>, NumeralError> {
    if digits_after_zero > MAX_FRACTION_DIGITS {
        return Err(NumeralError::UnsupportedPrecision {
            digits: digits_after_zero,
        });
    }
    if number.is_sign_negative() && !number.is_zero() {
        return Err(NumeralError::Negative { number });
    }

    let magnitude = number.abs();
    let rounded = if digits_after_zero == 0 {
        magnitude.trunc()
    } else {
        magnitude.round_dp_with_strategy(digits_after_zero, RoundingStrategy::MidpointAwayFromZero)
    };
    let scale = 10u64.pow(digits_after_zero);
    let scaled = rounded
        .checked_mul(Decimal::from(scale))
        .and_then(|scaled| scaled.to_u64())
        .filter(|scaled| scaled.div_euclid(scale) < LIMIT)
        .ok_or(NumeralError::OutOfRange { number })?;
    let whole = scaled.div_euclid(scale);

    let mut registers = BTreeMap::new();
    let mut rest = whole;
    for index in Register::UNIT.index()..Register::COUNT {
        let triple = DigitTriple::last_three(rest);
        if !triple.is_zero() {
            registers.insert(Register::new(index), triple);
        }
        rest = rest.div_euclid(1000);
    }
    if registers.is_empty() {
        registers.insert(Register::UNIT, DigitTriple::ZERO);
    }

    // 0.5 at one place is stored as 005.
    if digits_after_zero > 0 {
        registers.insert(Register::SUBUNIT, DigitTriple::last_three(scaled % scale));
    }

    tracing::debug!(%number, digits_after_zero, ?registers, "decomposed number");
    Ok(registers)
}
