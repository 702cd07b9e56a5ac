//! Implementation of the `propis render` command.

use owo_colors::{OwoColorize, Stream};
use propis::{Numeral, Register, UnitNaming};
use serde::Serialize;

use crate::input::{parse_number, parse_unit_override};

/// Arguments for the render command.
#[derive(Debug, clap::Args)]
pub struct RenderArgs {
    /// Number to write out (e.g. 1234.56 or 1234,56)
    #[arg(allow_hyphen_values = true)]
    pub number: String,

    /// Digits after the decimal point (0-3)
    #[arg(short, long, env = "PROPIS_DIGITS", default_value_t = propis::DEFAULT_FRACTION_DIGITS)]
    pub digits: u32,

    /// Unit names for a register: REG=SUBJECTIVE,GENITIVE,PLURAL[,female] (repeatable)
    #[arg(short, long = "unit", value_parser = parse_unit_override)]
    pub units: Vec<(Register, UnitNaming)>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for render results.
#[derive(Serialize)]
pub struct RenderResult {
    pub number: String,
    pub digits: u32,
    pub result: String,
}

/// Run the render command.
pub fn run_render(args: RenderArgs) -> miette::Result<i32> {
    let number = parse_number(&args.number)?;

    let mut numeral = match Numeral::new(number, args.digits) {
        Ok(numeral) => numeral,
        Err(e) => {
            if args.json {
                let output = serde_json::json!({
                    "error": e.to_string()
                });
                eprintln!(
                    "{}",
                    serde_json::to_string_pretty(&output)
                        .expect("JSON serialization should not fail")
                );
            } else {
                eprintln!(
                    "{} {}",
                    "error:".if_supports_color(Stream::Stderr, |t| t.red()),
                    e
                );
            }
            return Ok(exitcode::DATAERR);
        }
    };

    for (register, naming) in args.units {
        tracing::debug!(%register, ?naming, "overriding unit naming");
        numeral.set_unit_naming(register, naming);
    }

    let result = numeral.render();
    if args.json {
        let output = RenderResult {
            number: number.to_string(),
            digits: args.digits,
            result,
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&output).expect("JSON serialization should not fail")
        );
    } else {
        println!("{}", result);
    }
    Ok(exitcode::OK)
}
