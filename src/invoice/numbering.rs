//! Financial years and sequential invoice numbers

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::types::{EngineError, EngineResult};

/// Month the Indian financial year starts in
const FINANCIAL_YEAR_START_MONTH: u32 = 4;

/// An April-to-March financial year, identified by the calendar year it starts in
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FinancialYear {
    pub start_year: i32,
}

impl FinancialYear {
    pub fn new(start_year: i32) -> Self {
        Self { start_year }
    }

    /// Financial year a date falls in
    pub fn from_date(date: NaiveDate) -> Self {
        if date.month() >= FINANCIAL_YEAR_START_MONTH {
            Self::new(date.year())
        } else {
            Self::new(date.year() - 1)
        }
    }

    pub fn end_year(&self) -> i32 {
        self.start_year + 1
    }

    /// Whether the date falls in this financial year
    pub fn contains(&self, date: NaiveDate) -> bool {
        Self::from_date(date) == *self
    }
}

impl fmt::Display for FinancialYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.start_year, self.end_year())
    }
}

impl FromStr for FinancialYear {
    type Err = EngineError;

    /// Accepts `2025/2026` and `2025-2026`
    fn from_str(s: &str) -> EngineResult<Self> {
        let invalid = || EngineError::Validation(format!("Invalid financial year: {}", s));

        let (start, end) = s.trim().split_once(['/', '-']).ok_or_else(invalid)?;
        let start: i32 = start.parse().map_err(|_| invalid())?;
        let end: i32 = end.parse().map_err(|_| invalid())?;

        if end != start + 1 {
            return Err(invalid());
        }

        Ok(Self::new(start))
    }
}

/// A sequential invoice number such as `07-2025/2026`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct InvoiceNumber {
    pub financial_year: FinancialYear,
    pub serial: u32,
}

impl InvoiceNumber {
    pub fn new(serial: u32, financial_year: FinancialYear) -> Self {
        Self {
            financial_year,
            serial,
        }
    }
}

impl fmt::Display for InvoiceNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{}", self.serial, self.financial_year)
    }
}

impl FromStr for InvoiceNumber {
    type Err = EngineError;

    fn from_str(s: &str) -> EngineResult<Self> {
        let invalid = || EngineError::InvalidInvoiceNumber(s.to_string());

        let (serial, year) = s.trim().split_once('-').ok_or_else(invalid)?;
        let serial: u32 = serial.trim().parse().map_err(|_| invalid())?;
        let financial_year = year.parse::<FinancialYear>().map_err(|_| invalid())?;

        Ok(Self::new(serial, financial_year))
    }
}

/// Next invoice number for a financial year.
///
/// Continues after the highest serial already issued in that year; numbers
/// that do not parse, or belong to another year, are ignored. Fails when the
/// highest serial cannot be incremented.
pub fn next_invoice_number<'a>(
    existing: impl IntoIterator<Item = &'a str>,
    financial_year: FinancialYear,
) -> EngineResult<InvoiceNumber> {
    let last_serial = existing
        .into_iter()
        .filter_map(|raw| match raw.parse::<InvoiceNumber>() {
            Ok(number) => Some(number),
            Err(_) => {
                log::debug!("Skipping unparseable invoice number {:?}", raw);
                None
            }
        })
        .filter(|number| number.financial_year == financial_year)
        .map(|number| number.serial)
        .max()
        .unwrap_or(0);

    let serial = last_serial.checked_add(1).ok_or_else(|| {
        EngineError::InvalidInvoiceNumber(format!(
            "serials for {} exhausted after {}",
            financial_year, last_serial
        ))
    })?;

    Ok(InvoiceNumber::new(serial, financial_year))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_financial_year_boundaries() {
        assert_eq!(FinancialYear::from_date(date(2025, 3, 31)), FinancialYear::new(2024));
        assert_eq!(FinancialYear::from_date(date(2025, 4, 1)), FinancialYear::new(2025));
        assert_eq!(FinancialYear::from_date(date(2025, 12, 31)), FinancialYear::new(2025));
        assert!(FinancialYear::new(2025).contains(date(2026, 1, 15)));
    }

    #[test]
    fn test_financial_year_text() {
        assert_eq!(FinancialYear::new(2025).to_string(), "2025/2026");
        assert_eq!("2025-2026".parse::<FinancialYear>().unwrap(), FinancialYear::new(2025));
        assert!("2025/2027".parse::<FinancialYear>().is_err());
        assert!("twenty".parse::<FinancialYear>().is_err());
    }

    #[test]
    fn test_invoice_number_text() {
        let number: InvoiceNumber = "07-2025/2026".parse().unwrap();
        assert_eq!(number.serial, 7);
        assert_eq!(number.financial_year, FinancialYear::new(2025));
        assert_eq!(number.to_string(), "07-2025/2026");
        assert_eq!(InvoiceNumber::new(123, FinancialYear::new(2024)).to_string(), "123-2024/2025");
        assert!("INV-01".parse::<InvoiceNumber>().is_err());
    }

    #[test]
    fn test_next_invoice_number() {
        let fy = FinancialYear::new(2025);
        let existing = ["01-2025/2026", "09-2025/2026", "10-2025/2026", "42-2024/2025", "junk"];

        assert_eq!(next_invoice_number(existing, fy).unwrap().to_string(), "11-2025/2026");
        assert_eq!(
            next_invoice_number(Vec::<&str>::new(), fy).unwrap().to_string(),
            "01-2025/2026"
        );
    }

    #[test]
    fn test_next_invoice_number_exhausted() {
        let fy = FinancialYear::new(2025);

        let result = next_invoice_number(["4294967295-2025/2026"], fy);
        assert!(matches!(result, Err(EngineError::InvalidInvoiceNumber(_))));

        // A full series in another year does not block this one
        let next = next_invoice_number(["4294967295-2024/2025", "03-2025/2026"], fy).unwrap();
        assert_eq!(next.serial, 4);
    }
}
