//! Numbers written out in Russian words.
//!
//! A [`Numeral`] splits a decimal number into registers of three digits
//! (kopecks, roubles, thousands, millions, billions), names each register
//! with the unit form that agrees with its digits, and joins the result:
//!
//! ```
//! use propis::Numeral;
//! use rust_decimal::Decimal;
//!
//! let numeral = Numeral::from_decimal(Decimal::new(2_001_000_550, 2)).unwrap();
//! assert_eq!(
//!     numeral.render(),
//!     "двадцать миллионов десять тысяч пять рублей пятьдесят копеек",
//! );
//! ```

mod decompose;
mod error;
mod namer;
mod numeral;
mod types;

pub use decompose::{MAX_DIGITS, MAX_FRACTION_DIGITS, decompose};
pub use error::NumeralError;
pub use namer::{ZERO, morph, numeral_words, register_words, unit_word};
pub use numeral::{DEFAULT_FRACTION_DIGITS, Numeral};
pub use types::{DigitTriple, Gender, Register, UnitNaming, WordCase};
