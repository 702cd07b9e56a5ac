//! Implementation of the `propis registers` command.

use clap::Args;
use miette::{IntoDiagnostic, Result};
use owo_colors::{OwoColorize, Stream};
use propis::Numeral;
use serde::Serialize;

use crate::input::parse_number;
use crate::output::table::{RegisterRow, format_register_table};

/// Arguments for the registers command.
#[derive(Debug, Args)]
pub struct RegistersArgs {
    /// Number to decompose
    #[arg(allow_hyphen_values = true)]
    pub number: String,

    /// Digits after the decimal point (0-3)
    #[arg(short, long, env = "PROPIS_DIGITS", default_value_t = propis::DEFAULT_FRACTION_DIGITS)]
    pub digits: u32,

    /// Output results as JSON.
    #[arg(long)]
    pub json: bool,
}

/// JSON output format for one register.
#[derive(Debug, Serialize)]
struct RegisterJson {
    register: usize,
    digits: String,
    words: String,
}

/// Run the registers command.
pub fn run_registers(args: RegistersArgs) -> Result<i32> {
    let number = parse_number(&args.number)?;
    let numeral = match Numeral::new(number, args.digits) {
        Ok(numeral) => numeral,
        Err(e) => {
            eprintln!(
                "{} {}",
                "error:".if_supports_color(Stream::Stderr, |t| t.red()),
                e
            );
            return Ok(exitcode::DATAERR);
        }
    };

    let rows: Vec<RegisterRow> = numeral
        .registers()
        .iter()
        .rev()
        .map(|(register, triple)| RegisterRow::new(&numeral, *register, *triple))
        .collect();

    if args.json {
        let json_data: Vec<RegisterJson> = rows
            .iter()
            .map(|row| RegisterJson {
                register: row.register.index(),
                digits: row.digits.to_string(),
                words: row.words.clone(),
            })
            .collect();

        let json_output = serde_json::to_string_pretty(&json_data).into_diagnostic()?;
        println!("{}", json_output);
    } else {
        println!("{}", format_register_table(&rows));
    }

    Ok(exitcode::OK)
}
