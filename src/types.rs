//! Core types and data structures shared by the tax, ledger and words engines

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An issued tax invoice as supplied by the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    /// Invoice number, e.g. `07-2025/2026`. Older records may not carry one.
    pub invoice_number: Option<String>,
    /// Date printed on the invoice
    pub invoice_date: NaiveDate,
    /// Buyer display name
    pub buyer_name: String,
    /// Buyer GSTIN, used to select a buyer's invoices
    pub buyer_gst: Option<String>,
    /// Invoice total including GST
    pub total_with_gst: BigDecimal,
    /// Currency code (INR, USD, ...)
    pub currency: Option<String>,
}

impl Invoice {
    /// Create a new invoice record
    pub fn new(
        invoice_number: Option<String>,
        invoice_date: NaiveDate,
        buyer_name: String,
        total_with_gst: BigDecimal,
    ) -> Self {
        Self {
            invoice_number,
            invoice_date,
            buyer_name,
            buyer_gst: None,
            total_with_gst,
            currency: None,
        }
    }

    /// Set the buyer GSTIN
    pub fn with_buyer_gst(mut self, buyer_gst: impl Into<String>) -> Self {
        self.buyer_gst = Some(buyer_gst.into());
        self
    }

    /// Set the invoice currency
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }

    /// Invoice number, or the empty string when missing
    pub fn number(&self) -> &str {
        self.invoice_number.as_deref().unwrap_or("")
    }

    /// Currency code, or the empty string when missing
    pub fn currency_code(&self) -> &str {
        self.currency.as_deref().unwrap_or("")
    }
}

/// A payment received against a specific invoice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceDeposit {
    /// Invoice number this deposit settles
    pub invoice_reference: Option<String>,
    /// Date the money was received
    pub transaction_date: NaiveDate,
    /// Amount received
    pub amount: BigDecimal,
    /// Free-text remark shown on the statement
    pub notice: Option<String>,
}

impl InvoiceDeposit {
    /// Create a new deposit against an invoice
    pub fn new(
        invoice_reference: impl Into<String>,
        transaction_date: NaiveDate,
        amount: BigDecimal,
    ) -> Self {
        Self {
            invoice_reference: Some(invoice_reference.into()),
            transaction_date,
            amount,
            notice: None,
        }
    }

    /// Attach a notice
    pub fn with_notice(mut self, notice: impl Into<String>) -> Self {
        self.notice = Some(notice.into());
        self
    }

    /// Whether this deposit settles the given invoice number.
    /// Unnumbered invoices never match.
    pub fn references(&self, invoice_number: &str) -> bool {
        !invoice_number.is_empty() && self.invoice_reference.as_deref() == Some(invoice_number)
    }
}

/// A deposit recorded against a buyer rather than a specific invoice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuyerTransaction {
    pub buyer_name: String,
    pub transaction_date: Option<NaiveDate>,
    pub deposit_amount: BigDecimal,
}

/// Direction of a miscellaneous banking entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money received
    Credit,
    /// Money paid out
    Debit,
}

/// A miscellaneous banking entry (capital, loans, assets, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OtherTransaction {
    pub transaction_type: TransactionKind,
    /// Category label such as "partner", "loan" or "fixed assets"
    pub other_type: String,
    pub other_date: NaiveDate,
    pub other_amount: BigDecimal,
    /// Party or asset the entry belongs to
    #[serde(default)]
    pub other_notice: Option<String>,
}

impl OtherTransaction {
    pub fn new(
        transaction_type: TransactionKind,
        other_type: impl Into<String>,
        other_date: NaiveDate,
        other_amount: BigDecimal,
    ) -> Self {
        Self {
            transaction_type,
            other_type: other_type.into(),
            other_date,
            other_amount,
            other_notice: None,
        }
    }

    pub fn with_notice(mut self, notice: impl Into<String>) -> Self {
        self.other_notice = Some(notice.into());
        self
    }

    pub fn category(&self) -> OtherCategory {
        OtherCategory::of(&self.other_type)
    }

    /// Party or asset name, empty when not recorded
    pub fn party(&self) -> &str {
        self.other_notice.as_deref().unwrap_or("")
    }
}

/// Balance sheet section a miscellaneous entry is reported under
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OtherCategory {
    /// Partner capital ("partner")
    Capital,
    Loan,
    FixedAssets,
    /// Any other label, reported under its own name
    Custom(String),
}

impl OtherCategory {
    /// Classify an `other_type` label, ignoring case and padding
    pub fn of(other_type: &str) -> Self {
        let label = other_type.trim();
        if label.eq_ignore_ascii_case("partner") {
            OtherCategory::Capital
        } else if label.eq_ignore_ascii_case("loan") {
            OtherCategory::Loan
        } else if label.eq_ignore_ascii_case("fixed assets") {
            OtherCategory::FixedAssets
        } else {
            OtherCategory::Custom(label.to_string())
        }
    }
}

/// A salary payment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryTransaction {
    /// Employee the salary was paid to
    pub salary_name: String,
    pub salary_amount: BigDecimal,
    pub salary_date: NaiveDate,
}

/// A payment made to a supplier company
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyTransaction {
    pub company_name: Option<String>,
    pub transaction_date: Option<NaiveDate>,
    pub amount: BigDecimal,
}

/// Inclusive date window used to filter statements
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    /// Create a date range, rejecting windows that end before they start
    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> EngineResult<Self> {
        if let (Some(from), Some(to)) = (from, to) {
            if from > to {
                return Err(EngineError::Validation(format!(
                    "Date range starts after it ends: {} > {}",
                    from, to
                )));
            }
        }
        Ok(Self { from, to })
    }

    /// Unbounded range
    pub fn all() -> Self {
        Self::default()
    }

    /// Whether the date falls inside the range (bounds inclusive)
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from.is_none_or(|from| date >= from) && self.to.is_none_or(|to| date <= to)
    }

    pub fn is_unbounded(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }
}

/// Errors that can occur in the engine
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Negative amount: {0}")]
    NegativeAmount(String),
    #[error("Amount too large: {0}")]
    AmountTooLarge(String),
    #[error("Invalid invoice number: {0}")]
    InvalidInvoiceNumber(String),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error(transparent)]
    Gst(#[from] crate::tax::gst::GstError),
}

/// Result type for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
