//! The bounded modular control value shared by both file formats.
//!
//! For each contributing procedure line: add the procedure code stripped of
//! its check digit (as an integer) plus the line quantity. The
//! authorization variant additionally adds the authorization number, once
//! for the whole file. `control = sum % 1111 + 1111`, giving a closed
//! domain of `[1111, 2221]`.

use sus_layout::ValueMap;

use crate::error::ExportError;

pub const CONTROL_FLOOR: i64 = 1111;
pub const CONTROL_CEILING: i64 = 2221;
const CONTROL_MODULUS: i64 = 1111;

fn digits_of(text: &str) -> String {
    text.chars().filter(|ch| ch.is_ascii_digit()).collect()
}

fn quantity_of(line: &ValueMap, field: &'static str) -> Result<i64, ExportError> {
    match line.get(field) {
        None | Some("") => Ok(0),
        Some(text) => text.trim().parse().map_err(|_| ExportError::InvalidNumber {
            field,
            value: text.to_string(),
        }),
    }
}

fn control_from(sum: i64) -> Result<i64, ExportError> {
    let control = sum % CONTROL_MODULUS + CONTROL_MODULUS;
    if !(CONTROL_FLOOR..=CONTROL_CEILING).contains(&control) {
        return Err(ExportError::ChecksumDomain { value: control });
    }
    Ok(control)
}

/// Control value for an ambulatory batch: the code base is the first nine
/// digits of each line's procedure code.
pub fn ambulatory_control(lines: &[ValueMap]) -> Result<i64, ExportError> {
    let mut sum = 0i64;
    for line in lines {
        let code = digits_of(line.get("procedimento").unwrap_or_default());
        let base = &code[..code.len().min(9)];
        sum += base.parse::<i64>().unwrap_or(0);
        sum += quantity_of(line, "quantidade")?;
    }
    control_from(sum)
}

/// Control value for an authorization file: the authorization number joins
/// the sum once, and the code base strips the final digit only when the
/// code is longer than nine digits.
pub fn authorization_control(
    procedures: &[ValueMap],
    authorization_number: &str,
) -> Result<i64, ExportError> {
    let mut sum = digits_of(authorization_number).parse::<i64>().unwrap_or(0);
    for procedure in procedures {
        let code = digits_of(procedure.get("codigo").unwrap_or_default());
        let base = if code.len() > 9 {
            &code[..code.len() - 1]
        } else {
            code.as_str()
        };
        sum += base.parse::<i64>().unwrap_or(0);
        sum += quantity_of(procedure, "quantidade")?;
    }
    control_from(sum)
}
