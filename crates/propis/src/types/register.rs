use std::fmt::{Display, Formatter, Result as FmtResult};

/// A power-of-1000 magnitude slot of a number.
///
/// Register 0 holds the fractional sub-unit (kopecks), register 1 the
/// primary unit (roubles), and each register above that multiplies by a
/// thousand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Register(usize);

impl Register {
    /// Fractional part, e.g. kopecks.
    pub const SUBUNIT: Register = Register(0);
    /// Primary unit, e.g. roubles.
    pub const UNIT: Register = Register(1);
    pub const THOUSAND: Register = Register(2);
    pub const MILLION: Register = Register(3);
    pub const BILLION: Register = Register(4);

    /// Number of registers with default names and room in the decomposed
    /// number.
    pub const COUNT: usize = 5;

    /// Create a register from its index.
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Get the register index.
    pub const fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for Register {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl Display for Register {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.0)
    }
}
