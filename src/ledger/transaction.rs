//! Ledger events: invoice debits and deposit credits against a buyer

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::*;

/// A single movement on a buyer's account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum LedgerEvent {
    /// An invoice raised against the buyer; reduces the balance
    Debit {
        date: NaiveDate,
        /// Invoice number
        reference: String,
        amount: BigDecimal,
        currency: String,
    },
    /// Money received from the buyer; increases the balance
    Credit {
        date: NaiveDate,
        /// Deposit notice or description
        reference: String,
        amount: BigDecimal,
        currency: String,
    },
}

impl LedgerEvent {
    /// Create a debit event
    pub fn debit(
        date: NaiveDate,
        reference: impl Into<String>,
        amount: BigDecimal,
        currency: impl Into<String>,
    ) -> Self {
        Self::Debit {
            date,
            reference: reference.into(),
            amount,
            currency: currency.into(),
        }
    }

    /// Create a credit event
    pub fn credit(
        date: NaiveDate,
        reference: impl Into<String>,
        amount: BigDecimal,
        currency: impl Into<String>,
    ) -> Self {
        Self::Credit {
            date,
            reference: reference.into(),
            amount,
            currency: currency.into(),
        }
    }

    /// Debit for an invoice total
    pub fn from_invoice(invoice: &Invoice) -> Self {
        Self::debit(
            invoice.invoice_date,
            invoice.number(),
            invoice.total_with_gst.clone(),
            invoice.currency_code(),
        )
    }

    /// Credit for a deposit, described by its notice or the fallback text
    pub fn from_deposit(deposit: &InvoiceDeposit, currency: &str, fallback: &str) -> Self {
        let reference = deposit
            .notice
            .as_deref()
            .filter(|notice| !notice.trim().is_empty())
            .unwrap_or(fallback);

        Self::credit(
            deposit.transaction_date,
            reference,
            deposit.amount.clone(),
            currency,
        )
    }

    pub fn date(&self) -> NaiveDate {
        match self {
            Self::Debit { date, .. } | Self::Credit { date, .. } => *date,
        }
    }

    pub fn reference(&self) -> &str {
        match self {
            Self::Debit { reference, .. } | Self::Credit { reference, .. } => reference,
        }
    }

    pub fn amount(&self) -> &BigDecimal {
        match self {
            Self::Debit { amount, .. } | Self::Credit { amount, .. } => amount,
        }
    }

    pub fn currency(&self) -> &str {
        match self {
            Self::Debit { currency, .. } | Self::Credit { currency, .. } => currency,
        }
    }

    pub fn is_debit(&self) -> bool {
        matches!(self, Self::Debit { .. })
    }

    /// Effect on the running balance: debits negative, credits positive
    pub fn signed_amount(&self) -> BigDecimal {
        match self {
            Self::Debit { amount, .. } => -amount.clone(),
            Self::Credit { amount, .. } => amount.clone(),
        }
    }
}
