//! Main ledger orchestrator that fetches records and runs the engines

use bigdecimal::BigDecimal;
use chrono::NaiveDate;

use crate::config::EngineConfig;
use crate::invoice::{next_invoice_number, FinancialYear, InvoiceNumber};
use crate::ledger::{
    BalanceSheet, BalanceSheetInput, BuyerAccountSummary, LedgerStatement, StatementBuilder,
};
use crate::tax::{GstCalculator, InvoiceAmountRequest, TaxBreakdown};
use crate::traits::*;
use crate::types::*;
use crate::utils::validation::validate_gstin;
use crate::words::{amount_to_words, WordsStyle};

/// Ledger service over a record source
pub struct Ledger<S: LedgerSource> {
    source: S,
    config: EngineConfig,
    calculator: GstCalculator,
}

impl<S: LedgerSource> Ledger<S> {
    /// Create a new ledger with the default configuration
    pub fn new(source: S) -> Self {
        Self {
            source,
            config: EngineConfig::default(),
            calculator: GstCalculator::default(),
        }
    }

    /// Create a new ledger with a custom configuration
    pub fn with_config(source: S, config: EngineConfig) -> EngineResult<Self> {
        let calculator = GstCalculator::new(config.clone())?;
        Ok(Self {
            source,
            config,
            calculator,
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Statement of account for a buyer, optionally limited to a date window
    pub async fn statement_for_buyer(
        &self,
        buyer_gst: &str,
        range: DateRange,
    ) -> EngineResult<LedgerStatement> {
        validate_gstin(buyer_gst)?;
        let buyer_gst = buyer_gst.trim();
        let invoices = self.source.invoices_for_buyer(buyer_gst).await?;
        let numbers: Vec<String> = invoices
            .iter()
            .filter_map(|invoice| invoice.invoice_number.clone())
            .collect();
        let deposits = self.source.deposits_for_invoices(&numbers).await?;

        log::debug!(
            "Building statement for {}: {} invoice(s), {} deposit(s)",
            buyer_gst,
            invoices.len(),
            deposits.len()
        );

        Ok(StatementBuilder::new(&self.config)
            .with_range(range)
            .build(&invoices, &deposits))
    }

    /// Per-invoice payment summary for a buyer
    pub async fn account_summary(&self, buyer_gst: &str) -> EngineResult<BuyerAccountSummary> {
        validate_gstin(buyer_gst)?;
        let buyer_gst = buyer_gst.trim();
        let invoices = self.source.invoices_for_buyer(buyer_gst).await?;
        let numbers: Vec<String> = invoices
            .iter()
            .filter_map(|invoice| invoice.invoice_number.clone())
            .collect();
        let deposits = self.source.deposits_for_invoices(&numbers).await?;

        Ok(BuyerAccountSummary::build(
            buyer_gst,
            &invoices,
            &deposits,
            &self.config.default_deposit_description,
        ))
    }

    /// Balance sheet across all buyers, banking records and salaries
    pub async fn balance_sheet(&self) -> EngineResult<BalanceSheet> {
        let invoices = self.source.list_invoices().await?;
        let buyer_transactions = self.source.buyer_transactions().await?;
        let other_transactions = self.source.other_transactions().await?;
        let company_transactions = self.source.company_transactions().await?;
        let salary_transactions = self.source.salary_transactions().await?;

        Ok(BalanceSheet::build(
            BalanceSheetInput {
                invoices: &invoices,
                buyer_transactions: &buyer_transactions,
                other_transactions: &other_transactions,
                company_transactions: &company_transactions,
                salary_transactions: &salary_transactions,
            },
            &self.config.base_currency,
        ))
    }

    /// Number for the next invoice dated `invoice_date`
    pub async fn next_invoice_number(
        &self,
        invoice_date: NaiveDate,
    ) -> EngineResult<InvoiceNumber> {
        let invoices = self.source.list_invoices().await?;
        let next = next_invoice_number(
            invoices.iter().filter_map(|invoice| invoice.invoice_number.as_deref()),
            FinancialYear::from_date(invoice_date),
        )?;
        log::debug!("Next invoice number: {}", next);
        Ok(next)
    }

    /// GST breakdown for an invoice form
    pub fn tax_breakdown(&self, request: &InvoiceAmountRequest) -> TaxBreakdown {
        self.calculator.calculate_request(request)
    }

    /// Amount in words
    pub fn amount_in_words(&self, amount: &BigDecimal, style: WordsStyle) -> EngineResult<String> {
        amount_to_words(amount, style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::memory_storage::MemoryStorage;

    #[tokio::test]
    async fn test_ledger_statement_from_source() {
        let storage = MemoryStorage::new();
        let day = |d| NaiveDate::from_ymd_opt(2024, 4, d).unwrap();

        storage
            .add_invoice(
                Invoice::new(
                    Some("01-2024/2025".to_string()),
                    day(1),
                    "Acme".to_string(),
                    BigDecimal::from(1180),
                )
                .with_buyer_gst("24AAACA1234A1Z5")
                .with_currency("INR"),
            )
            .unwrap();
        storage
            .add_deposit(InvoiceDeposit::new("01-2024/2025", day(9), BigDecimal::from(180)))
            .unwrap();

        let ledger = Ledger::new(storage);
        let statement = ledger
            .statement_for_buyer("24AAACA1234A1Z5", DateRange::all())
            .await
            .unwrap();

        assert_eq!(statement.rows.len(), 2);
        assert_eq!(statement.closing_balance, BigDecimal::from(-1000));

        let words = ledger
            .amount_in_words(&statement.display_closing_balance(), WordsStyle::Plain)
            .unwrap();
        assert_eq!(words, "One Thousand");
    }

    #[tokio::test]
    async fn test_malformed_gstin_rejected() {
        let ledger = Ledger::new(MemoryStorage::new());

        let result = ledger.statement_for_buyer("GST-A", DateRange::all()).await;
        assert!(matches!(result, Err(EngineError::Validation(_))));
        assert!(ledger.account_summary("").await.is_err());
    }

    #[tokio::test]
    async fn test_next_invoice_number_from_source() {
        let storage = MemoryStorage::new();
        storage
            .add_invoice(Invoice::new(
                Some("04-2024/2025".to_string()),
                NaiveDate::from_ymd_opt(2024, 9, 1).unwrap(),
                "Acme".to_string(),
                BigDecimal::from(1),
            ))
            .unwrap();

        let ledger = Ledger::new(storage);
        let next = ledger
            .next_invoice_number(NaiveDate::from_ymd_opt(2025, 2, 1).unwrap())
            .await
            .unwrap();
        assert_eq!(next.to_string(), "05-2024/2025");

        let next = ledger
            .next_invoice_number(NaiveDate::from_ymd_opt(2025, 4, 1).unwrap())
            .await
            .unwrap();
        assert_eq!(next.to_string(), "01-2025/2026");
    }
}
