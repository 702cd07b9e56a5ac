mod digit_triple;
mod register;
mod unit_naming;

pub use digit_triple::DigitTriple;
pub use register::Register;
pub use unit_naming::{Gender, UnitNaming, WordCase};
