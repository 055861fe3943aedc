//! Check-digit validators for national identifiers.
//!
//! All validators are total over arbitrary input: wrong length, non-digit
//! content, or an unknown leading digit yield `false`, never an error.

use std::sync::OnceLock;

use regex::Regex;

fn digit_at(value: &str, index: usize) -> u32 {
    value.as_bytes()[index].wrapping_sub(b'0') as u32
}

/// Validate a 15-digit national health card number.
///
/// Definitive cards start with 1 or 2 and are derived from an 11-digit base
/// followed by the literal `001` and a check digit: weighted sum with
/// weights 15 down to 5, modulo 11, with the 11 -> 0 and
/// 10 -> recompute-with-offset-2 corrections. Provisional cards start with
/// 7, 8 or 9 and must have their full weighted sum (weights 15 down to 1)
/// divisible by 11.
pub fn validate_cns(cns: &str) -> bool {
    if cns.len() != 15 || !cns.chars().all(|ch| ch.is_ascii_digit()) {
        return false;
    }

    match &cns[0..1] {
        "1" | "2" => {
            let base = &cns[0..11];
            let mut sum: u32 = (0..11).map(|i| digit_at(base, i) * (15 - i as u32)).sum();
            let mut dv = 11 - sum % 11;
            if dv == 11 {
                dv = 0;
            } else if dv == 10 {
                sum += 2;
                dv = 11 - sum % 11;
            }
            cns == format!("{base}001{dv}")
        }
        "7" | "8" | "9" => {
            let sum: u32 = (0..15).map(|i| digit_at(cns, i) * (15 - i as u32)).sum();
            sum % 11 == 0
        }
        _ => false,
    }
}

/// Validate a 7-digit facility registry identifier.
///
/// 6-digit body weighted by `[7, 6, 5, 4, 3, 2]`, modulo 11;
/// DV = 11 - remainder, with 10 and 11 folded to 0.
pub fn validate_facility_id(cnes: &str) -> bool {
    if cnes.len() != 7 || !cnes.chars().all(|ch| ch.is_ascii_digit()) {
        return false;
    }
    const WEIGHTS: [u32; 6] = [7, 6, 5, 4, 3, 2];
    let sum: u32 = (0..6).map(|i| digit_at(cnes, i) * WEIGHTS[i]).sum();
    let mut dv = 11 - sum % 11;
    if dv == 10 || dv == 11 {
        dv = 0;
    }
    dv == digit_at(cnes, 6)
}

/// Validate a procedure table code.
///
/// Two accepted shapes: the legacy 7-digit numeric code (no check digit),
/// or a 10-digit code whose last digit checks the first 9 with ascending
/// weights 1..9 modulo 11 (10 folds to 0).
pub fn validate_procedure_code(code: &str) -> bool {
    if code.is_empty() || !code.chars().all(|ch| ch.is_ascii_digit()) {
        return false;
    }
    match code.len() {
        7 => true,
        10 => {
            let sum: u32 = (0..9).map(|i| digit_at(code, i) * (i as u32 + 1)).sum();
            let mut dv = sum % 11;
            if dv == 10 {
                dv = 0;
            }
            dv == digit_at(code, 9)
        }
        _ => false,
    }
}

/// Validate an 11-digit taxpayer number with its two check digits.
///
/// Formatting characters are accepted and stripped; strings of one repeated
/// digit are rejected.
pub fn validate_cpf(cpf: &str) -> bool {
    let digits: String = cpf.chars().filter(|ch| ch.is_ascii_digit()).collect();
    if digits.len() != 11 {
        return false;
    }
    let first = &digits[0..1];
    if digits.matches(first).count() == 11 {
        return false;
    }

    let dv = |prefix: &str, initial_weight: u32| -> u32 {
        let sum: u32 = prefix
            .chars()
            .zip((2..=initial_weight).rev())
            .map(|(ch, weight)| ch.to_digit(10).unwrap_or(0) * weight)
            .sum();
        let remainder = sum % 11;
        if remainder < 2 { 0 } else { 11 - remainder }
    };

    let dv1 = dv(&digits[0..9], 10);
    let dv2 = dv(&digits[0..10], 11);
    digits[9..11] == format!("{dv1}{dv2}")
}

fn diagnosis_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[A-TV-Z]\d{2}(?:\.[0-9A-TV-Z]{1,4})?$").expect("valid diagnosis pattern")
    })
}

/// Validate the basic diagnosis-code shape: a letter (`U` excluded), two
/// digits, and an optional `.` plus 1-4 alphanumerics.
pub fn validate_diagnosis_code(code: &str) -> bool {
    if code.is_empty() {
        return false;
    }
    diagnosis_pattern().is_match(&code.to_ascii_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cns_definitive_card() {
        assert!(validate_cns("123456789010010"));
    }

    #[test]
    fn cns_provisional_card() {
        assert!(!validate_cns("799999999999999"));
        // 7 + 14 zero positions: weighted sum is 7 * 15 = 105, then adjust
        // the last digit so the total is a multiple of 11: 105 + 5 = 110.
        assert!(validate_cns("700000000000005"));
    }

    #[test]
    fn cns_malformed() {
        assert!(!validate_cns("12345678901001"));
        assert!(!validate_cns("12345678901001A"));
        assert!(!validate_cns("323456789010010"));
        assert!(!validate_cns(""));
    }

    #[test]
    fn facility_id() {
        assert!(validate_facility_id("1234560"));
        assert!(!validate_facility_id("1234567"));
        assert!(!validate_facility_id("123456"));
        assert!(!validate_facility_id("12345A0"));
    }

    #[test]
    fn procedure_code_shapes() {
        assert!(validate_procedure_code("1234567890"));
        assert!(!validate_procedure_code("1234567899"));
        assert!(validate_procedure_code("1234567"));
        assert!(!validate_procedure_code("123456789"));
        assert!(!validate_procedure_code("12345678AB"));
    }

    #[test]
    fn cpf_check_digits() {
        assert!(validate_cpf("529.982.247-25"));
        assert!(validate_cpf("52998224725"));
        assert!(!validate_cpf("12345678900"));
        assert!(!validate_cpf("11111111111"));
        assert!(!validate_cpf("5299822472"));
    }

    #[test]
    fn diagnosis_code_shape() {
        assert!(validate_diagnosis_code("A00"));
        assert!(validate_diagnosis_code("B20.0"));
        assert!(validate_diagnosis_code("f32.9"));
        assert!(!validate_diagnosis_code("123"));
        assert!(!validate_diagnosis_code("AA0"));
        assert!(!validate_diagnosis_code("U07"));
        assert!(!validate_diagnosis_code(""));
    }
}
