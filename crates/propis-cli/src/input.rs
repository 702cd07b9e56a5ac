//! Parsing of command-line values.

use std::str::FromStr;

use propis::{Gender, Register, UnitNaming};
use rust_decimal::Decimal;

use crate::output::NumberDiagnostic;

/// Parse a decimal number, accepting either `.` or `,` as the separator.
///
/// Errors point at the first character that cannot belong to a number.
/// Whitespace is only allowed around the number, not inside it.
pub fn parse_number(input: &str) -> Result<Decimal, NumberDiagnostic> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(NumberDiagnostic::new(input, 0, "expected a number"));
    }

    let mut seen_separator = false;
    for (offset, c) in input.char_indices() {
        let valid = match c {
            '0'..='9' => true,
            '.' | ',' if !seen_separator => {
                seen_separator = true;
                true
            }
            '-' | '+' => input[..offset].trim().is_empty(),
            _ => {
                c.is_whitespace()
                    && (input[..offset].trim().is_empty() || input[offset..].trim().is_empty())
            }
        };
        if !valid {
            return Err(NumberDiagnostic::new(
                input,
                offset,
                &format!("unexpected character '{c}'"),
            ));
        }
    }

    Decimal::from_str(&trimmed.replace(',', "."))
        .map_err(|e| NumberDiagnostic::new(input, 0, &e.to_string()))
}

/// Parse a `REG=SUBJECTIVE,GENITIVE,PLURAL[,female|male]` unit override.
///
/// An empty right-hand side (`REG=`) removes the unit words of the register.
pub fn parse_unit_override(s: &str) -> Result<(Register, UnitNaming), String> {
    let (register, forms) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid unit format '{}': expected REG=FORMS", s))?;
    let register = register
        .trim()
        .parse::<usize>()
        .map(Register::new)
        .map_err(|_| format!("invalid register '{}': expected a number", register))?;

    if forms.trim().is_empty() {
        return Ok((register, UnitNaming::none()));
    }

    let parts: Vec<&str> = forms.split(',').map(str::trim).collect();
    let gender = match parts.get(3).copied() {
        None | Some("male" | "m") => Gender::Male,
        Some("female" | "f") => Gender::Female,
        Some(other) => return Err(format!("invalid gender '{}': expected male or female", other)),
    };
    let [subjective, genitive, plural] = match parts.get(..3) {
        Some(&[subjective, genitive, plural]) if parts.len() <= 4 => [subjective, genitive, plural],
        _ => {
            return Err(format!(
                "invalid unit forms '{}': expected SUBJECTIVE,GENITIVE,PLURAL[,GENDER]",
                forms
            ));
        }
    };

    Ok((register, UnitNaming::new(subjective, genitive, plural, gender)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_dot_and_comma() {
        assert_eq!(parse_number("1234.56").unwrap(), Decimal::new(123_456, 2));
        assert_eq!(parse_number("1234,56").unwrap(), Decimal::new(123_456, 2));
        assert_eq!(parse_number(" 7 ").unwrap(), Decimal::from(7));
    }

    #[test]
    fn keeps_sign_for_library_to_reject() {
        assert_eq!(parse_number("-3").unwrap(), Decimal::from(-3));
    }

    #[test]
    fn points_at_bad_character() {
        let err = parse_number("12x4").unwrap_err();
        assert_eq!(err.offset(), 2);

        let err = parse_number("1.2.3").unwrap_err();
        assert_eq!(err.offset(), 3);

        let err = parse_number("1-2").unwrap_err();
        assert_eq!(err.offset(), 1);
    }

    #[test]
    fn points_at_inner_whitespace() {
        let err = parse_number("1 000").unwrap_err();
        assert_eq!(err.offset(), 1);

        let err = parse_number("  12 ,5 ").unwrap_err();
        assert_eq!(err.offset(), 4);
    }

    #[test]
    fn rejects_empty_number() {
        assert!(parse_number("  ").is_err());
    }

    #[test]
    fn parses_unit_override() {
        let (register, naming) = parse_unit_override("1=штука,штуки,штук,female").unwrap();
        assert_eq!(register, Register::UNIT);
        assert_eq!(naming, UnitNaming::new("штука", "штуки", "штук", Gender::Female));

        let (register, naming) = parse_unit_override("0=цент, цента, центов").unwrap();
        assert_eq!(register, Register::SUBUNIT);
        assert_eq!(naming.gender, Gender::Male);
        assert_eq!(naming.genitive, "цента");
    }

    #[test]
    fn empty_override_suppresses_unit() {
        let (register, naming) = parse_unit_override("0=").unwrap();
        assert_eq!(register, Register::SUBUNIT);
        assert_eq!(naming, UnitNaming::none());
    }

    #[test]
    fn rejects_malformed_override() {
        assert!(parse_unit_override("штука").is_err());
        assert!(parse_unit_override("x=a,b,c").is_err());
        assert!(parse_unit_override("1=a,b").is_err());
        assert!(parse_unit_override("1=a,b,c,neuter").is_err());
        assert!(parse_unit_override("1=a,b,c,f,extra").is_err());
    }
}
