//! Normalizers for regulator table cells.
//!
//! Malformed cells degrade to a permissive value rather than failing the
//! sync; one garbled row must never block a national rule release.

/// Affirmative tokens the regulator uses across table releases.
const TRUE_TOKENS: &[&str] = &["S", "SIM", "1", "TRUE", "T", "Y"];

/// Normalize a yes/no token. Anything outside the known affirmative set is
/// `false`.
pub fn parse_flag(value: Option<&str>) -> bool {
    let Some(value) = value else {
        return false;
    };
    let normalized = value.trim().to_ascii_uppercase();
    TRUE_TOKENS.contains(&normalized.as_str())
}

/// Parse an integer cell; blank or malformed becomes `None`.
pub fn parse_int(value: Option<&str>) -> Option<u16> {
    value?.trim().parse().ok()
}

/// Parse a monetary cell into integer cents.
///
/// The tables use `.` as a thousands separator and `,` as the decimal
/// separator: `1.234,56` is 123456 cents. A value without a decimal part is
/// whole currency units.
pub fn parse_money_cents(value: Option<&str>) -> Option<i64> {
    let text = value?.trim();
    if text.is_empty() {
        return None;
    }
    let (units_part, cents_part) = match text.split_once(',') {
        Some((units, cents)) => (units, cents),
        None => (text, ""),
    };
    let units: i64 = units_part.replace('.', "").parse().ok()?;

    let mut cents_text: String = cents_part.chars().take(2).collect();
    while cents_text.len() < 2 {
        cents_text.push('0');
    }
    let cents: i64 = cents_text.parse().ok()?;
    Some(units * 100 + cents)
}

/// Trim a cell, mapping blank to `None`.
pub fn blank_to_none(value: Option<&str>) -> Option<&str> {
    let text = value?.trim();
    if text.is_empty() { None } else { Some(text) }
}

/// First non-blank value among several sources, in priority order.
pub fn first_filled<'a>(sources: &[Option<&'a str>]) -> Option<&'a str> {
    sources.iter().find_map(|source| blank_to_none(*source))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags() {
        for token in ["S", "sim", "1", "TRUE", "t", "y"] {
            assert!(parse_flag(Some(token)), "{token} should be true");
        }
        for token in ["N", "NAO", "0", "", "2", "yes?"] {
            assert!(!parse_flag(Some(token)), "{token} should be false");
        }
        assert!(!parse_flag(None));
    }

    #[test]
    fn integers() {
        assert_eq!(parse_int(Some("18")), Some(18));
        assert_eq!(parse_int(Some(" 60 ")), Some(60));
        assert_eq!(parse_int(Some("")), None);
        assert_eq!(parse_int(Some("abc")), None);
        assert_eq!(parse_int(None), None);
    }

    #[test]
    fn money() {
        assert_eq!(parse_money_cents(Some("1.234,56")), Some(123456));
        assert_eq!(parse_money_cents(Some("10,00")), Some(1000));
        assert_eq!(parse_money_cents(Some("10,5")), Some(1050));
        assert_eq!(parse_money_cents(Some("1234")), Some(123400));
        assert_eq!(parse_money_cents(Some("")), None);
        assert_eq!(parse_money_cents(Some("abc")), None);
    }

    #[test]
    fn blanks() {
        assert_eq!(blank_to_none(Some("  ")), None);
        assert_eq!(blank_to_none(Some(" x ")), Some("x"));
        assert_eq!(
            first_filled(&[Some(""), None, Some("valor"), Some("outro")]),
            Some("valor")
        );
    }
}
