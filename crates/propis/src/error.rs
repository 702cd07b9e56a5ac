//! Error types for numeral construction.

use rust_decimal::Decimal;
use thiserror::Error;

/// An invalid argument passed when building a [`Numeral`](crate::Numeral).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumeralError {
    /// More fractional digits requested than the sub-unit register holds.
    #[error("at most 3 digits after the decimal point are supported, got {digits}")]
    UnsupportedPrecision { digits: u32 },

    /// Negative numbers have no written form here.
    #[error("negative numbers are not supported: {number}")]
    Negative { number: Decimal },

    /// Integer part does not fit in 12 digits.
    #[error("integer part of {number} exceeds 12 digits")]
    OutOfRange { number: Decimal },
}
