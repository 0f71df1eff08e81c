//! Amount parsing, rounding and display helpers

use bigdecimal::{BigDecimal, RoundingMode};
use std::str::FromStr;

/// Most digits accepted before the decimal point
pub const MAX_INTEGER_DIGITS: i64 = 20;

/// Most digits accepted after the decimal point
pub const MAX_FRACTION_DIGITS: i64 = 20;

/// Whether an amount is small enough to round and spell out.
///
/// Checked on the digit count and exponent so that inputs such as `1e2000000`
/// are refused without expanding them.
pub fn within_amount_bounds(value: &BigDecimal) -> bool {
    let (_, scale) = value.as_bigint_and_exponent();
    let integer_digits = value.digits() as i64 - scale;
    integer_digits <= MAX_INTEGER_DIGITS && scale <= MAX_FRACTION_DIGITS
}

/// Round half away from zero to `scale` decimal places
pub fn round_half_up(value: &BigDecimal, scale: i64) -> BigDecimal {
    value.with_scale_round(scale, RoundingMode::HalfUp)
}

/// Round half away from zero to a whole number
pub fn round_to_integer(value: &BigDecimal) -> BigDecimal {
    round_half_up(value, 0)
}

/// Parse a user-entered amount, degrading anything unusable to zero.
///
/// Blank, non-numeric, negative and oversized input all become zero; callers that need
/// strict validation should use [`crate::utils::validate_non_negative`]
/// before reaching this point.
pub fn parse_amount(raw: &str) -> BigDecimal {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return BigDecimal::from(0);
    }

    match BigDecimal::from_str(trimmed) {
        Ok(value) if !within_amount_bounds(&value) => {
            log::warn!("Out-of-range amount {:?} treated as zero", trimmed);
            BigDecimal::from(0)
        }
        Ok(value) if value >= BigDecimal::from(0) => value,
        Ok(value) => {
            log::warn!("Negative amount {} treated as zero", value);
            BigDecimal::from(0)
        }
        Err(_) => {
            log::warn!("Unparseable amount {:?} treated as zero", trimmed);
            BigDecimal::from(0)
        }
    }
}

/// Parse an optional amount field, treating a missing value as zero
pub fn parse_optional_amount(raw: Option<&str>) -> BigDecimal {
    raw.map(parse_amount).unwrap_or_else(|| BigDecimal::from(0))
}

/// Render an amount with two decimals, prefixed by its currency code
pub fn format_money(amount: &BigDecimal, currency: &str) -> String {
    let fixed = round_half_up(amount, 2);
    if currency.is_empty() {
        fixed.to_string()
    } else {
        format!("{} {}", currency, fixed)
    }
}
