//! Invoice series: the numbering prefix that decides statement order

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::types::Invoice;

/// Leading characters of an invoice number that identify its series
pub const SERIES_PREFIX_LEN: usize = 2;

/// The series an invoice belongs to, taken from the first two characters of
/// its number (`"07-2025/2026"` is series `"07"`). Unnumbered invoices fall
/// into the empty series.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InvoiceSeries {
    prefix: String,
}

impl InvoiceSeries {
    pub fn of(invoice_number: Option<&str>) -> Self {
        Self {
            prefix: invoice_number
                .unwrap_or("")
                .chars()
                .take(SERIES_PREFIX_LEN)
                .collect(),
        }
    }

    pub fn of_invoice(invoice: &Invoice) -> Self {
        Self::of(invoice.invoice_number.as_deref())
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Numeric value of the prefix. The empty series counts as zero;
    /// non-numeric prefixes have no rank.
    pub fn rank(&self) -> Option<u64> {
        let trimmed = self.prefix.trim();
        if trimmed.is_empty() {
            Some(0)
        } else {
            trimmed.parse().ok()
        }
    }

    /// Statement order: highest numeric prefix first, unranked series last
    pub fn display_order(&self, other: &Self) -> Ordering {
        match (self.rank(), other.rank()) {
            (Some(a), Some(b)) => b.cmp(&a),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

/// Group invoices by series in statement order.
///
/// Series are ordered by [`InvoiceSeries::display_order`]; series that compare
/// equal keep the order they first appeared in. Invoices inside a series are
/// sorted by date, ties keeping their input order.
pub fn group_by_series<'a>(
    invoices: impl IntoIterator<Item = &'a Invoice>,
) -> Vec<(InvoiceSeries, Vec<&'a Invoice>)> {
    let mut groups: Vec<(InvoiceSeries, Vec<&'a Invoice>)> = Vec::new();

    for invoice in invoices {
        let series = InvoiceSeries::of_invoice(invoice);
        match groups.iter_mut().find(|(s, _)| *s == series) {
            Some((_, members)) => members.push(invoice),
            None => groups.push((series, vec![invoice])),
        }
    }

    groups.sort_by(|(a, _), (b, _)| a.display_order(b));
    for (_, members) in groups.iter_mut() {
        members.sort_by_key(|invoice| invoice.invoice_date);
    }

    groups
}
