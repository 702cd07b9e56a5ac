//! The written-out form of a number.

use std::collections::BTreeMap;
use std::fmt::{Display, Formatter, Result as FmtResult};

use rust_decimal::Decimal;

use crate::decompose::decompose;
use crate::error::NumeralError;
use crate::namer::register_words;
use crate::types::{DigitTriple, Register, UnitNaming};

/// Default number of digits after the decimal point (kopecks).
pub const DEFAULT_FRACTION_DIGITS: u32 = 2;

/// A number decomposed into registers, ready to be written out in words.
///
/// Unit names default to roubles and kopecks and can be replaced per
/// register. Rendering always reflects the namings set at that moment.
///
/// # Example
///
/// ```
/// use propis::{Gender, Numeral, Register, UnitNaming};
/// use rust_decimal::Decimal;
///
/// let price = Numeral::from_decimal(Decimal::new(12_345, 2)).unwrap();
/// assert_eq!(
///     price.render(),
///     "сто двадцать три рубля сорок пять копеек",
/// );
///
/// let pieces = Numeral::new(Decimal::from(21), 0)
///     .unwrap()
///     .with_unit_naming(
///         Register::UNIT,
///         UnitNaming::new("штука", "штуки", "штук", Gender::Female),
///     );
/// assert_eq!(pieces.to_string(), "двадцать одна штука");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Numeral {
    registers: BTreeMap<Register, DigitTriple>,
    units: BTreeMap<Register, UnitNaming>,
}

impl Numeral {
    /// Decompose `number` keeping `digits_after_zero` fractional digits.
    ///
    /// Fails when `digits_after_zero` exceeds 3, when the number is
    /// negative, or when its integer part needs more than 12 digits.
    pub fn new(number: Decimal, digits_after_zero: u32) -> Result<Self, NumeralError> {
        let registers = decompose(number, digits_after_zero)?;
        let units = UnitNaming::defaults()
            .into_iter()
            .enumerate()
            .map(|(index, naming)| (Register::new(index), naming))
            .collect();
        Ok(Self { registers, units })
    }

    /// Decompose `number` with two fractional digits.
    pub fn from_decimal(number: Decimal) -> Result<Self, NumeralError> {
        Self::new(number, DEFAULT_FRACTION_DIGITS)
    }

    /// Non-zero registers and their digits, plus the unit register when
    /// the integer part is zero.
    pub fn registers(&self) -> &BTreeMap<Register, DigitTriple> {
        &self.registers
    }

    /// The naming currently used for `register`.
    pub fn naming(&self, register: Register) -> Option<&UnitNaming> {
        self.units.get(&register)
    }

    /// Replace the naming of one register.
    pub fn set_unit_naming(&mut self, register: Register, naming: UnitNaming) -> &mut Self {
        self.units.insert(register, naming);
        self
    }

    /// Replace the naming of one register, by value.
    pub fn with_unit_naming(mut self, register: Register, naming: UnitNaming) -> Self {
        self.set_unit_naming(register, naming);
        self
    }

    /// Write the number out in words, most significant register first.
    ///
    /// # Panics
    ///
    /// Panics if a register has no naming. Registers 0-4 always do, so this
    /// only happens if the decomposition produced a register beyond them.
    pub fn render(&self) -> String {
        self.registers
            .iter()
            .rev()
            .flat_map(|(register, triple)| {
                let naming = self
                    .units
                    .get(register)
                    .unwrap_or_else(|| panic!("No unit naming for register {register}"));
                register_words(*triple, naming)
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Display for Numeral {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.render())
    }
}

impl From<Numeral> for String {
    fn from(numeral: Numeral) -> Self {
        numeral.render()
    }
}
