//! Invoice numbering and currency helpers

pub mod numbering;

pub use numbering::*;

use bigdecimal::BigDecimal;

/// Base-currency value of a foreign-currency invoice total.
///
/// Returns `None` when the invoice is already in the base currency. A missing
/// exchange rate is treated as 1.
pub fn base_currency_equivalent(
    total_with_gst: &BigDecimal,
    currency: &str,
    base_currency: &str,
    exchange_rate: Option<&BigDecimal>,
) -> Option<BigDecimal> {
    if currency.trim().eq_ignore_ascii_case(base_currency) {
        return None;
    }

    let rate = exchange_rate
        .cloned()
        .unwrap_or_else(|| BigDecimal::from(1));
    Some(total_with_gst * rate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_base_currency_equivalent() {
        let total = BigDecimal::from(1000);
        let rate = BigDecimal::from_str("83.25").unwrap();

        assert_eq!(base_currency_equivalent(&total, "INR", "INR", Some(&rate)), None);
        assert_eq!(
            base_currency_equivalent(&total, "USD", "INR", Some(&rate)),
            Some(BigDecimal::from(83250))
        );
        assert_eq!(
            base_currency_equivalent(&total, "EUR", "INR", None),
            Some(BigDecimal::from(1000))
        );
    }
}
