//! Traits for data-source abstraction

use async_trait::async_trait;

use crate::types::*;

/// Where invoices and banking records come from
///
/// The engine itself is pure; this trait lets a caller plug in whatever
/// backend holds the records (REST API, database, in-memory, etc.) and have
/// [`crate::Ledger`] fetch them before computing reports.
#[async_trait]
pub trait LedgerSource: Send + Sync {
    /// All invoices
    async fn list_invoices(&self) -> EngineResult<Vec<Invoice>>;

    /// Invoices issued to the buyer with the given GSTIN
    async fn invoices_for_buyer(&self, buyer_gst: &str) -> EngineResult<Vec<Invoice>>;

    /// Deposits referencing any of the given invoice numbers
    async fn deposits_for_invoices(
        &self,
        invoice_numbers: &[String],
    ) -> EngineResult<Vec<InvoiceDeposit>>;

    /// Deposits recorded against buyers
    async fn buyer_transactions(&self) -> EngineResult<Vec<BuyerTransaction>>;

    /// Miscellaneous credits and debits
    async fn other_transactions(&self) -> EngineResult<Vec<OtherTransaction>>;

    /// Payments to supplier companies
    async fn company_transactions(&self) -> EngineResult<Vec<CompanyTransaction>>;

    /// Salary payments
    async fn salary_transactions(&self) -> EngineResult<Vec<SalaryTransaction>>;
}
