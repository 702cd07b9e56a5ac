//! Russian words for one register: numerals plus the agreeing unit name.

use crate::types::{DigitTriple, Gender, UnitNaming, WordCase};

/// Word for a register whose digits are all zero.
pub const ZERO: &str = "ноль";

const UNITS_MALE: [&str; 10] = [
    "", "один", "два", "три", "четыре", "пять", "шесть", "семь", "восемь", "девять",
];
const UNITS_FEMALE: [&str; 10] = [
    "", "одна", "две", "три", "четыре", "пять", "шесть", "семь", "восемь", "девять",
];
const TEENS: [&str; 10] = [
    "десять",
    "одиннадцать",
    "двенадцать",
    "тринадцать",
    "четырнадцать",
    "пятнадцать",
    "шестнадцать",
    "семнадцать",
    "восемнадцать",
    "девятнадцать",
];
const TENS: [&str; 10] = [
    "",
    "",
    "двадцать",
    "тридцать",
    "сорок",
    "пятьдесят",
    "шестьдесят",
    "семьдесят",
    "восемьдесят",
    "девяносто",
];
const HUNDREDS: [&str; 10] = [
    "",
    "сто",
    "двести",
    "триста",
    "четыреста",
    "пятьсот",
    "шестьсот",
    "семьсот",
    "восемьсот",
    "девятьсот",
];

/// Word for a single non-zero digit in the given gender.
pub fn unit_word(digit: u8, gender: Gender) -> &'static str {
    let table = match gender {
        Gender::Male => &UNITS_MALE,
        Gender::Female => &UNITS_FEMALE,
    };
    table[usize::from(digit)]
}

/// Numeral words for a triple, without the unit name.
///
/// An all-zero triple is the single word "ноль". Teens collapse tens and
/// units into one word.
pub fn numeral_words(triple: DigitTriple, gender: Gender) -> Vec<&'static str> {
    if triple.is_zero() {
        return vec![ZERO];
    }

    let mut words = Vec::with_capacity(3);
    if triple.hundreds() != 0 {
        words.push(HUNDREDS[usize::from(triple.hundreds())]);
    }
    if triple.tens() == 1 {
        words.push(TEENS[usize::from(triple.units())]);
    } else {
        if triple.tens() > 1 {
            words.push(TENS[usize::from(triple.tens())]);
        }
        if triple.units() != 0 {
            words.push(unit_word(triple.units(), gender));
        }
    }
    words
}

/// Unit name agreeing with the triple's value. Empty when the naming
/// leaves that form blank.
pub fn morph(naming: &UnitNaming, triple: DigitTriple) -> &str {
    naming.form(WordCase::for_value(u64::from(triple.value())))
}

/// All words for one register: numerals followed by the unit name, if any.
///
/// # Example
///
/// ```
/// use propis::{DigitTriple, Gender, UnitNaming, register_words};
///
/// let thousands = UnitNaming::new("тысяча", "тысячи", "тысяч", Gender::Female);
/// assert_eq!(
///     register_words(DigitTriple::from_value(122), &thousands),
///     vec!["сто", "двадцать", "две", "тысячи"],
/// );
/// ```
pub fn register_words(triple: DigitTriple, naming: &UnitNaming) -> Vec<&str> {
    let mut words = numeral_words(triple, naming.gender);
    let unit = morph(naming, triple);
    if !unit.is_empty() {
        words.push(unit);
    }
    words
}
