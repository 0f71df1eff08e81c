//! Amount-in-words conversion using the Indian numbering system
//!
//! Integers are grouped 3-2-2 from the right: the last three digits form the
//! hundreds group, followed by two-digit Thousand and Lakh groups, and
//! everything above is counted in Crore. Fractions are rendered as Paisa.

use bigdecimal::{BigDecimal, RoundingMode, ToPrimitive};
use serde::{Deserialize, Serialize};

use crate::types::{EngineError, EngineResult};
use crate::utils::money::{round_to_integer, within_amount_bounds, MAX_FRACTION_DIGITS};
use crate::utils::validation::validate_non_negative;

const SMALL: [&str; 20] = [
    "", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten", "Eleven",
    "Twelve", "Thirteen", "Fourteen", "Fifteen", "Sixteen", "Seventeen", "Eighteen", "Nineteen",
];

const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

const THOUSAND: u64 = 1_000;
const LAKH: u64 = 1_00_000;
const CRORE: u64 = 1_00_00_000;

/// How an amount is spelled out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WordsStyle {
    /// "One Thousand Two Hundred Thirty Four"
    Plain,
    /// Cheque style with "and" before the final tens and units:
    /// "One Thousand Two Hundred and Thirty Four"
    Legal,
}

/// Whole rupees and paise of a non-negative amount
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RupeesPaise {
    rupees: u64,
    paise: u64,
}

impl RupeesPaise {
    fn split(amount: &BigDecimal) -> EngineResult<Self> {
        validate_non_negative(amount)?;

        let too_large = || EngineError::AmountTooLarge(amount.to_string());
        if !within_amount_bounds(amount) {
            let (_, scale) = amount.as_bigint_and_exponent();
            if scale > MAX_FRACTION_DIGITS {
                return Err(EngineError::Validation(format!(
                    "Amount has more than {} decimal places",
                    MAX_FRACTION_DIGITS
                )));
            }
            return Err(too_large());
        }
        let whole = amount.with_scale_round(0, RoundingMode::Down);
        let fraction = amount - &whole;

        let mut rupees = whole.to_u64().ok_or_else(too_large)?;
        let mut paise = round_to_integer(&(fraction * BigDecimal::from(100)))
            .to_u64()
            .ok_or_else(too_large)?;

        // .995 and above rounds into the next rupee
        if paise >= 100 {
            rupees = rupees.checked_add(1).ok_or_else(too_large)?;
            paise -= 100;
        }

        Ok(Self { rupees, paise })
    }
}

/// Spell out a non-negative amount, including a Paisa clause for any fraction
pub fn amount_to_words(amount: &BigDecimal, style: WordsStyle) -> EngineResult<String> {
    let RupeesPaise { rupees, paise } = RupeesPaise::split(amount)?;

    let words = match (rupees, paise) {
        (0, 0) => "Zero".to_string(),
        (0, p) => format!("{} Paisa", below_hundred(p)),
        (r, 0) => integer_to_words(r, style),
        (r, p) => format!("{} and {} Paisa", integer_to_words(r, style), below_hundred(p)),
    };

    Ok(words)
}

/// Spell out a whole number
pub fn integer_to_words(n: u64, style: WordsStyle) -> String {
    if n == 0 {
        return "Zero".to_string();
    }

    let mut parts = scale_parts(n);
    let hundreds = n % THOUSAND;

    match style {
        WordsStyle::Plain => {
            if hundreds > 0 {
                parts.push(below_thousand(hundreds));
            }
        }
        WordsStyle::Legal => {
            if hundreds >= 100 {
                parts.push(format!("{} Hundred", SMALL[(hundreds / 100) as usize]));
            }
            let rest = hundreds % 100;
            if rest > 0 {
                if parts.is_empty() {
                    parts.push(below_hundred(rest));
                } else {
                    parts.push(format!("and {}", below_hundred(rest)));
                }
            }
        }
    }

    parts.join(" ")
}

/// The "<CUR> <words> Only" line printed on invoices
pub fn legal_amount_line(currency: &str, amount: &BigDecimal) -> EngineResult<String> {
    let words = amount_to_words(amount, WordsStyle::Legal)?;
    if currency.is_empty() {
        Ok(format!("{} Only", words))
    } else {
        Ok(format!("{} {} Only", currency, words))
    }
}

/// Crore, Lakh and Thousand groups, highest first
fn scale_parts(n: u64) -> Vec<String> {
    let mut parts = Vec::new();

    let crore = n / CRORE;
    if crore > 0 {
        // Crore counts beyond 99 keep using the same grouping
        parts.push(format!("{} Crore", integer_to_words(crore, WordsStyle::Plain)));
    }

    let lakh = (n / LAKH) % 100;
    if lakh > 0 {
        parts.push(format!("{} Lakh", below_hundred(lakh)));
    }

    let thousand = (n / THOUSAND) % 100;
    if thousand > 0 {
        parts.push(format!("{} Thousand", below_hundred(thousand)));
    }

    parts
}

fn below_thousand(n: u64) -> String {
    let hundred = n / 100;
    let rest = n % 100;
    match (hundred, rest) {
        (0, r) => below_hundred(r),
        (h, 0) => format!("{} Hundred", SMALL[h as usize]),
        (h, r) => format!("{} Hundred {}", SMALL[h as usize], below_hundred(r)),
    }
}

fn below_hundred(n: u64) -> String {
    if n < 20 {
        SMALL[n as usize].to_string()
    } else if n % 10 == 0 {
        TENS[(n / 10) as usize].to_string()
    } else {
        format!("{} {}", TENS[(n / 10) as usize], SMALL[(n % 10) as usize])
    }
}
