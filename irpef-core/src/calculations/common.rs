//! Shared numeric policies: clamping, zero floors and display formatting.

use rust_decimal::{Decimal, RoundingStrategy};

/// Restricts `value` to the closed range `[min, max]`.
///
/// Used to sanitize percentage inputs before they affect tax math.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use irpef_core::calculations::common::clamp;
///
/// assert_eq!(clamp(dec!(12), dec!(0), dec!(10)), dec!(10));
/// assert_eq!(clamp(dec!(-3), dec!(0), dec!(10)), dec!(0));
/// assert_eq!(clamp(dec!(5), dec!(0), dec!(10)), dec!(5));
/// ```
pub fn clamp(
    value: Decimal,
    min: Decimal,
    max: Decimal,
) -> Decimal {
    value.max(min).min(max)
}

/// Floors a monetary quantity at zero.
pub fn floor_at_zero(value: Decimal) -> Decimal {
    value.max(Decimal::ZERO)
}

/// Renders a EUR amount in it-IT style with whole-euro precision.
///
/// Rounds half away from zero to the nearest euro, groups thousands with
/// `.` and appends the currency symbol: `1234567.89` becomes
/// `1.234.568 €`. Display only — breakdown values keep full precision.
pub fn format_currency_eur(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let digits = rounded.abs().normalize().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    if negative {
        format!("-{grouped} €")
    } else {
        format!("{grouped} €")
    }
}

/// Renders a percentage value with an it-IT decimal comma, at most two
/// fractional digits: `26.07` becomes `26,07%`, `23` becomes `23%`.
pub fn format_percent(value_pct: Decimal) -> String {
    let rounded = value_pct
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    format!("{}%", rounded.to_string().replace('.', ","))
}
