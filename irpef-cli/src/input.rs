//! Parsing of user-entered amounts into decimals.
//!
//! The computation core assumes its inputs are already numbers; this module
//! is the boundary that guarantees it. Both `.` and `,` are accepted as
//! decimal separators (so `"1.234,56"`, `"1,234.56"` and `"1234.56"` all
//! parse), and empty fields default to zero.

use rust_decimal::Decimal;
use thiserror::Error;

/// Error returned when a string cannot be parsed as an amount.
#[derive(Debug, Error)]
#[error("invalid amount '{input}': {source}")]
pub struct ParseAmountError {
    input: String,
    #[source]
    source: rust_decimal::Error,
}

/// Normalizes an it-IT or en-US style number into plain decimal syntax.
///
/// A single separator of either kind is taken as the decimal separator;
/// repeated separators of one kind are thousands grouping; when both kinds
/// appear, the rightmost one separates the decimals.
fn normalize_amount(s: &str) -> String {
    let compact: String = s.trim().chars().filter(|c| !c.is_whitespace()).collect();
    let dots = compact.matches('.').count();
    let commas = compact.matches(',').count();

    match (dots, commas) {
        (0, 0) => compact,
        (1, 0) => compact,
        (_, 0) => compact.replace('.', ""),
        (0, 1) => compact.replace(',', "."),
        (0, _) => compact.replace(',', ""),
        _ => {
            if compact.rfind(',') > compact.rfind('.') {
                compact.replace('.', "").replace(',', ".")
            } else {
                compact.replace(',', "")
            }
        }
    }
}

/// Parses a user-entered amount. Empty or whitespace-only input is zero.
pub fn parse_amount(s: &str) -> Result<Decimal, ParseAmountError> {
    let normalized = normalize_amount(s);
    if normalized.is_empty() {
        return Ok(Decimal::ZERO);
    }
    normalized.parse().map_err(|e| {
        tracing::error!(input = %s, "invalid amount: {}", e);
        ParseAmountError {
            input: s.to_string(),
            source: e,
        }
    })
}

/// Parses an optional override field. Absent or empty input stays `None`.
pub fn parse_optional_amount(s: Option<&str>) -> Result<Option<Decimal>, ParseAmountError> {
    match s {
        None => Ok(None),
        Some(raw) if normalize_amount(raw).is_empty() => Ok(None),
        Some(raw) => parse_amount(raw).map(Some),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn parse_amount_accepts_plain_decimal_point() {
        assert_eq!(parse_amount("1234.56").unwrap(), dec!(1234.56));
    }

    #[test]
    fn parse_amount_accepts_decimal_comma() {
        assert_eq!(parse_amount("1234,56").unwrap(), dec!(1234.56));
    }

    #[test]
    fn parse_amount_accepts_italian_grouping() {
        assert_eq!(parse_amount("1.234,56").unwrap(), dec!(1234.56));
        assert_eq!(parse_amount("1.234.567").unwrap(), dec!(1234567));
    }

    #[test]
    fn parse_amount_accepts_english_grouping() {
        assert_eq!(parse_amount("1,234.56").unwrap(), dec!(1234.56));
        assert_eq!(parse_amount("1,234,567").unwrap(), dec!(1234567));
    }

    #[test]
    fn parse_amount_trims_whitespace() {
        assert_eq!(parse_amount("  123,45  ").unwrap(), dec!(123.45));
    }

    #[test]
    fn parse_amount_defaults_empty_to_zero() {
        assert_eq!(parse_amount("").unwrap(), Decimal::ZERO);
        assert_eq!(parse_amount("   ").unwrap(), Decimal::ZERO);
    }

    #[test]
    fn parse_amount_rejects_garbage() {
        assert!(parse_amount("abc").is_err());
        assert!(parse_amount("12x").is_err());
    }

    #[test]
    fn parse_optional_amount_keeps_absent_as_none() {
        assert_eq!(parse_optional_amount(None).unwrap(), None);
        assert_eq!(parse_optional_amount(Some("")).unwrap(), None);
        assert_eq!(parse_optional_amount(Some("  ")).unwrap(), None);
    }

    #[test]
    fn parse_optional_amount_parses_present_values() {
        assert_eq!(
            parse_optional_amount(Some("26,07")).unwrap(),
            Some(dec!(26.07))
        );
    }
}
