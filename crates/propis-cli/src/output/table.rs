//! Table formatting utilities for CLI output.

use comfy_table::{ContentArrangement, Table, presets};
use propis::{DigitTriple, Numeral, Register, register_words};

/// Display data for a single register.
pub struct RegisterRow {
    pub register: Register,
    /// Digits held by the register.
    pub digits: DigitTriple,
    /// Words the register renders to, unit name included.
    pub words: String,
}

impl RegisterRow {
    pub fn new(numeral: &Numeral, register: Register, digits: DigitTriple) -> Self {
        let words = numeral
            .naming(register)
            .map(|naming| register_words(digits, naming).join(" "))
            .unwrap_or_default();
        RegisterRow {
            register,
            digits,
            words,
        }
    }
}

/// Human name of a register's magnitude.
fn magnitude(register: Register) -> &'static str {
    match register {
        Register::SUBUNIT => "fraction",
        Register::UNIT => "units",
        Register::THOUSAND => "thousands",
        Register::MILLION => "millions",
        Register::BILLION => "billions",
        _ => "",
    }
}

/// Format registers as an ASCII table.
pub fn format_register_table(rows: &[RegisterRow]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Register", "Magnitude", "Digits", "Words"]);

    for row in rows {
        table.add_row(vec![
            row.register.to_string(),
            magnitude(row.register).to_string(),
            row.digits.to_string(),
            row.words.clone(),
        ]);
    }

    table
}
