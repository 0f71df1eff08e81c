//! Statement of account: running balance over a buyer's invoices and deposits

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::ledger::series::group_by_series;
use crate::ledger::transaction::LedgerEvent;
use crate::types::*;
use crate::utils::money::format_money;

/// Which way a signed balance leans
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BalanceDirection {
    /// Invoices exceed deposits: the buyer owes us
    Receivable,
    /// Deposits exceed invoices: we hold the buyer's money
    Advance,
    Settled,
}

impl BalanceDirection {
    /// Direction of a balance kept as credits minus debits
    pub fn of(balance: &BigDecimal) -> Self {
        let zero = BigDecimal::from(0);
        if *balance < zero {
            BalanceDirection::Receivable
        } else if *balance > zero {
            BalanceDirection::Advance
        } else {
            BalanceDirection::Settled
        }
    }
}

/// One line of a statement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatementRow {
    pub date: NaiveDate,
    /// Invoice number for debits, deposit notice for credits
    pub description: String,
    pub credit: Option<BigDecimal>,
    pub debit: Option<BigDecimal>,
    /// Signed running balance after this row
    pub balance: BigDecimal,
}

impl StatementRow {
    /// Balance as printed: its absolute value
    pub fn display_balance(&self) -> BigDecimal {
        self.balance.abs()
    }
}

/// A complete statement with totals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerStatement {
    pub rows: Vec<StatementRow>,
    pub total_credit: BigDecimal,
    pub total_debit: BigDecimal,
    /// Signed closing balance, `total_credit - total_debit`
    pub closing_balance: BigDecimal,
    pub currency: String,
}

impl LedgerStatement {
    /// Replay events in order, tracking the running balance
    pub fn from_events(
        events: impl IntoIterator<Item = LedgerEvent>,
        currency: impl Into<String>,
    ) -> Self {
        let mut rows = Vec::new();
        let mut balance = BigDecimal::from(0);
        let mut total_credit = BigDecimal::from(0);
        let mut total_debit = BigDecimal::from(0);

        for event in events {
            balance += event.signed_amount();

            let (credit, debit) = match &event {
                LedgerEvent::Debit { amount, .. } => {
                    total_debit += amount;
                    (None, Some(amount.clone()))
                }
                LedgerEvent::Credit { amount, .. } => {
                    total_credit += amount;
                    (Some(amount.clone()), None)
                }
            };

            rows.push(StatementRow {
                date: event.date(),
                description: event.reference().to_string(),
                credit,
                debit,
                balance: balance.clone(),
            });
        }

        let closing_balance = &total_credit - &total_debit;

        Self {
            rows,
            total_credit,
            total_debit,
            closing_balance,
            currency: currency.into(),
        }
    }

    /// Closing balance as printed: its absolute value
    pub fn display_closing_balance(&self) -> BigDecimal {
        self.closing_balance.abs()
    }

    pub fn direction(&self) -> BalanceDirection {
        BalanceDirection::of(&self.closing_balance)
    }

    /// The "Total Balance" footer: credit, debit and closing columns
    pub fn totals_line(&self) -> [String; 3] {
        [
            format_money(&self.total_credit, &self.currency),
            format_money(&self.total_debit, &self.currency),
            format_money(&self.display_closing_balance(), &self.currency),
        ]
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Builds a buyer's statement of account from invoices and their deposits
#[derive(Debug, Clone)]
pub struct StatementBuilder {
    range: DateRange,
    deposit_description: String,
}

impl Default for StatementBuilder {
    fn default() -> Self {
        Self::new(&EngineConfig::default())
    }
}

impl StatementBuilder {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            range: DateRange::all(),
            deposit_description: config.default_deposit_description.clone(),
        }
    }

    /// Restrict the statement to a date window
    pub fn with_range(mut self, range: DateRange) -> Self {
        self.range = range;
        self
    }

    /// Build the statement.
    ///
    /// An invoice is listed when its own date is in range or any of its
    /// deposits is. Each invoice row is followed by its in-range deposits in
    /// date order.
    pub fn build(&self, invoices: &[Invoice], deposits: &[InvoiceDeposit]) -> LedgerStatement {
        let currency = invoices
            .first()
            .map(|invoice| invoice.currency_code().to_string())
            .unwrap_or_default();

        let included = invoices.iter().filter(|invoice| {
            self.range.contains(invoice.invoice_date)
                || self
                    .deposits_in_range(deposits, invoice.number())
                    .next()
                    .is_some()
        });

        let mut events = Vec::new();
        for (series, members) in group_by_series(included) {
            log::debug!(
                "Statement series {:?}: {} invoice(s)",
                series.prefix(),
                members.len()
            );

            for invoice in members {
                events.push(LedgerEvent::from_invoice(invoice));

                let mut paid: Vec<&InvoiceDeposit> =
                    self.deposits_in_range(deposits, invoice.number()).collect();
                paid.sort_by_key(|deposit| deposit.transaction_date);

                events.extend(paid.into_iter().map(|deposit| {
                    LedgerEvent::from_deposit(
                        deposit,
                        invoice.currency_code(),
                        &self.deposit_description,
                    )
                }));
            }
        }

        LedgerStatement::from_events(events, currency)
    }

    fn deposits_in_range<'a>(
        &'a self,
        deposits: &'a [InvoiceDeposit],
        invoice_number: &'a str,
    ) -> impl Iterator<Item = &'a InvoiceDeposit> + 'a {
        deposits.iter().filter(move |deposit| {
            deposit.references(invoice_number) && self.range.contains(deposit.transaction_date)
        })
    }
}
