use std::fmt::{Display, Formatter, Result as FmtResult};

/// The three decimal digits occupying one register, most significant first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DigitTriple([u8; 3]);

impl DigitTriple {
    /// The all-zero group.
    pub const ZERO: DigitTriple = DigitTriple([0, 0, 0]);

    /// Build a triple from a value in `0..1000`.
    ///
    /// # Panics
    ///
    /// Panics if `value` has more than three digits.
    pub fn from_value(value: u16) -> Self {
        assert!(value < 1000, "digit triple out of range: {value}");
        Self::last_three(u64::from(value))
    }

    /// Build a triple from the last three decimal digits of `value`.
    pub fn last_three(value: u64) -> Self {
        let group = value % 1000;
        Self([
            group.div_euclid(100) as u8,
            (group % 100).div_euclid(10) as u8,
            (group % 10) as u8,
        ])
    }

    /// Parse up to three ASCII digits, left-padding shorter input with zeros.
    ///
    /// Returns `None` for empty input, input longer than three characters,
    /// or any non-digit character.
    pub fn parse(digits: &str) -> Option<Self> {
        if digits.is_empty() || digits.len() > 3 {
            return None;
        }
        let mut triple = [0u8; 3];
        let offset = 3 - digits.len();
        for (slot, byte) in triple[offset..].iter_mut().zip(digits.bytes()) {
            if !byte.is_ascii_digit() {
                return None;
            }
            *slot = byte - b'0';
        }
        Some(Self(triple))
    }

    pub fn hundreds(self) -> u8 {
        self.0[0]
    }

    pub fn tens(self) -> u8 {
        self.0[1]
    }

    pub fn units(self) -> u8 {
        self.0[2]
    }

    /// The numeric value of the group, `0..1000`.
    pub fn value(self) -> u16 {
        u16::from(self.0[0]) * 100 + u16::from(self.0[1]) * 10 + u16::from(self.0[2])
    }

    pub fn is_zero(self) -> bool {
        self == Self::ZERO
    }

    pub fn digits(self) -> [u8; 3] {
        self.0
    }
}

impl Display for DigitTriple {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let [h, d, u] = self.0;
        write!(f, "{h}{d}{u}")
    }
}
