//! Per-invoice account summary for a single buyer

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::ledger::statement::StatementRow;
use crate::types::*;

/// Payment history of one invoice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceAccount {
    pub invoice_number: String,
    pub invoice_date: NaiveDate,
    pub invoice_amount: BigDecimal,
    pub deposit_total: BigDecimal,
    /// Amount still unpaid on this invoice
    pub remaining_balance: BigDecimal,
    /// The invoice followed by its deposits; balance counts down from the
    /// invoice amount
    pub transactions: Vec<StatementRow>,
}

impl InvoiceAccount {
    /// Build the history of an invoice from the deposits referencing it
    pub fn build(invoice: &Invoice, deposits: &[InvoiceDeposit], fallback: &str) -> Self {
        let invoice_amount = invoice.total_with_gst.clone();
        let mut running = invoice_amount.clone();

        let mut transactions = vec![StatementRow {
            date: invoice.invoice_date,
            description: invoice.number().to_string(),
            credit: None,
            debit: Some(invoice_amount.clone()),
            balance: running.clone(),
        }];

        let mut paid: Vec<&InvoiceDeposit> = deposits
            .iter()
            .filter(|deposit| deposit.references(invoice.number()))
            .collect();
        paid.sort_by_key(|deposit| deposit.transaction_date);

        let mut deposit_total = BigDecimal::from(0);
        for deposit in paid {
            running -= &deposit.amount;
            deposit_total += &deposit.amount;
            transactions.push(StatementRow {
                date: deposit.transaction_date,
                description: deposit
                    .notice
                    .clone()
                    .filter(|notice| !notice.trim().is_empty())
                    .unwrap_or_else(|| fallback.to_string()),
                credit: Some(deposit.amount.clone()),
                debit: None,
                balance: running.clone(),
            });
        }

        Self {
            invoice_number: invoice.number().to_string(),
            invoice_date: invoice.invoice_date,
            remaining_balance: &invoice_amount - &deposit_total,
            invoice_amount,
            deposit_total,
            transactions,
        }
    }

    pub fn is_settled(&self) -> bool {
        self.remaining_balance <= BigDecimal::from(0)
    }
}

/// All invoices of a buyer with their outstanding amounts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuyerAccountSummary {
    pub buyer_gst: String,
    pub buyer_name: String,
    pub currency: String,
    /// Invoices in date order
    pub invoices: Vec<InvoiceAccount>,
    pub total_invoice_amount: BigDecimal,
    pub total_deposit_amount: BigDecimal,
    pub total_remaining_balance: BigDecimal,
}

impl BuyerAccountSummary {
    /// Summarise a buyer's invoices. Only deposits referencing one of the
    /// invoices count towards the totals.
    pub fn build(
        buyer_gst: &str,
        invoices: &[Invoice],
        deposits: &[InvoiceDeposit],
        fallback: &str,
    ) -> Self {
        let mut ordered: Vec<&Invoice> = invoices.iter().collect();
        ordered.sort_by_key(|invoice| invoice.invoice_date);

        let (buyer_name, currency) = ordered
            .first()
            .map(|first| (first.buyer_name.clone(), first.currency_code().to_string()))
            .unwrap_or_default();

        let accounts: Vec<InvoiceAccount> = ordered
            .iter()
            .map(|invoice| InvoiceAccount::build(invoice, deposits, fallback))
            .collect();

        let total_invoice_amount: BigDecimal =
            accounts.iter().map(|account| &account.invoice_amount).sum();
        let total_deposit_amount: BigDecimal =
            accounts.iter().map(|account| &account.deposit_total).sum();
        let total_remaining_balance = &total_invoice_amount - &total_deposit_amount;

        Self {
            buyer_gst: buyer_gst.to_string(),
            buyer_name,
            currency,
            invoices: accounts,
            total_invoice_amount,
            total_deposit_amount,
            total_remaining_balance,
        }
    }

    /// Invoices with money still owed
    pub fn unpaid(&self) -> impl Iterator<Item = &InvoiceAccount> {
        self.invoices.iter().filter(|account| !account.is_settled())
    }
}
