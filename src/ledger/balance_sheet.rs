//! Balance sheet of what buyers owe and what is owed to them

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::types::*;
use crate::utils::money::round_half_up;

/// Where a balance sheet line came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineSource {
    Buyer,
    Other,
    Company,
}

/// One row of either side of the balance sheet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceSheetLine {
    pub name: String,
    pub date: Option<NaiveDate>,
    pub currency: String,
    /// Absolute amount
    pub amount: BigDecimal,
    pub source: LineSource,
}

/// Everything the balance sheet report needs
#[derive(Debug, Clone, Copy, Default)]
pub struct BalanceSheetInput<'a> {
    pub invoices: &'a [Invoice],
    pub buyer_transactions: &'a [BuyerTransaction],
    pub other_transactions: &'a [OtherTransaction],
    pub company_transactions: &'a [CompanyTransaction],
    pub salary_transactions: &'a [SalaryTransaction],
}

/// A named amount inside a section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionEntry {
    pub name: String,
    pub amount: BigDecimal,
}

/// A titled block of entries with its total
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceSheetSection {
    pub title: String,
    /// Entries in name order
    pub entries: Vec<SectionEntry>,
    pub total: BigDecimal,
}

impl BalanceSheetSection {
    fn new(
        title: impl Into<String>,
        entries: impl IntoIterator<Item = (String, BigDecimal)>,
    ) -> Self {
        let entries: Vec<SectionEntry> = entries
            .into_iter()
            .map(|(name, amount)| SectionEntry { name, amount })
            .collect();
        let total = entries.iter().map(|entry| &entry.amount).sum();

        Self {
            title: title.into(),
            entries,
            total,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Amount recorded for a name, if listed
    pub fn amount_for(&self, name: &str) -> Option<&BigDecimal> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| &entry.amount)
    }
}

/// Credits and debits of one party, both kept as absolute amounts
#[derive(Debug, Default)]
struct NetPosition {
    credit: BigDecimal,
    debit: BigDecimal,
}

impl NetPosition {
    fn record(&mut self, kind: TransactionKind, amount: &BigDecimal) {
        match kind {
            TransactionKind::Credit => self.credit += amount.abs(),
            TransactionKind::Debit => self.debit += amount.abs(),
        }
    }

    fn net(&self) -> BigDecimal {
        &self.credit - &self.debit
    }
}

/// Banking records grouped by category.
///
/// Capital, loans and custom categories are netted per party (the entry's
/// notice) as credits minus debits. Fixed assets add up regardless of
/// direction, and salaries are summed per employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySections {
    /// Partner capital, every partner listed even when the net is negative
    pub capital: BalanceSheetSection,
    /// Loans with a positive net, shown with the liabilities
    pub loan_credit: BalanceSheetSection,
    /// Loans with a negative net, shown as the absolute amount with the assets
    pub loan_debit: BalanceSheetSection,
    pub fixed_assets: BalanceSheetSection,
    pub salary: BalanceSheetSection,
    /// One section per custom category with parties in credit
    pub custom_credit: Vec<BalanceSheetSection>,
    /// One section per custom category with parties settled or in debit
    pub custom_debit: Vec<BalanceSheetSection>,
}

impl CategorySections {
    pub fn build(others: &[OtherTransaction], salaries: &[SalaryTransaction]) -> Self {
        let zero = BigDecimal::from(0);

        let mut capital: BTreeMap<String, NetPosition> = BTreeMap::new();
        let mut loans: BTreeMap<String, NetPosition> = BTreeMap::new();
        let mut assets: BTreeMap<String, BigDecimal> = BTreeMap::new();
        let mut custom: BTreeMap<String, BTreeMap<String, NetPosition>> = BTreeMap::new();

        for entry in others {
            let party = entry.party().to_string();
            let kind = entry.transaction_type;
            match entry.category() {
                OtherCategory::Capital => capital
                    .entry(party)
                    .or_default()
                    .record(kind, &entry.other_amount),
                OtherCategory::Loan => loans
                    .entry(party)
                    .or_default()
                    .record(kind, &entry.other_amount),
                OtherCategory::FixedAssets => {
                    *assets.entry(party).or_default() += entry.other_amount.abs()
                }
                OtherCategory::Custom(label) if label.is_empty() => {
                    log::debug!("Skipping uncategorised entry dated {}", entry.other_date)
                }
                OtherCategory::Custom(label) => custom
                    .entry(label)
                    .or_default()
                    .entry(party)
                    .or_default()
                    .record(kind, &entry.other_amount),
            }
        }

        let mut salary: BTreeMap<String, BigDecimal> = BTreeMap::new();
        for payment in salaries {
            *salary.entry(payment.salary_name.clone()).or_default() += &payment.salary_amount;
        }

        let loan_credit = loans
            .iter()
            .map(|(name, position)| (name.clone(), position.net()))
            .filter(|(_, net)| *net > zero);
        let loan_debit = loans
            .iter()
            .map(|(name, position)| (name.clone(), position.net()))
            .filter(|(_, net)| *net < zero)
            .map(|(name, net)| (name, net.abs()));

        let mut custom_credit = Vec::new();
        let mut custom_debit = Vec::new();
        for (label, parties) in &custom {
            let credit = BalanceSheetSection::new(
                format!("{} (Credit)", label),
                parties
                    .iter()
                    .map(|(name, position)| (name.clone(), position.net()))
                    .filter(|(_, net)| *net > zero),
            );
            let debit = BalanceSheetSection::new(
                format!("{} (Debit)", label),
                parties
                    .iter()
                    .filter(|(_, position)| position.net() <= zero && position.debit > zero)
                    .map(|(name, position)| (name.clone(), position.net().abs())),
            );
            if !credit.is_empty() {
                custom_credit.push(credit);
            }
            if !debit.is_empty() {
                custom_debit.push(debit);
            }
        }

        Self {
            capital: BalanceSheetSection::new(
                "Capital",
                capital
                    .into_iter()
                    .map(|(name, position)| (name, position.net())),
            ),
            loan_credit: BalanceSheetSection::new("Loan (Credit)", loan_credit),
            loan_debit: BalanceSheetSection::new("Loan (Debit)", loan_debit),
            fixed_assets: BalanceSheetSection::new("Fixed Assets", assets),
            salary: BalanceSheetSection::new("Salary", salary),
            custom_credit,
            custom_debit,
        }
    }
}

/// Two-sided balance sheet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceSheet {
    /// Advances and credits: money we owe
    pub advances: Vec<BalanceSheetLine>,
    /// Outstanding balances and debits: money owed to us or paid out
    pub outstanding: Vec<BalanceSheetLine>,
    /// Buyer deposits received in the base currency
    pub total_base_currency_deposits: BigDecimal,
    pub base_currency: String,
    /// Capital, loans, assets, salaries and custom categories
    pub sections: CategorySections,
}

#[derive(Debug, Default)]
struct BuyerPosition {
    invoiced: BigDecimal,
    deposited: BigDecimal,
    latest_invoice: Option<NaiveDate>,
    latest_deposit: Option<NaiveDate>,
}

impl BalanceSheet {
    /// Build the report.
    ///
    /// Buyers are keyed by name and currency; invoices without a currency and
    /// all buyer deposits are taken to be in the base currency. Buyers are
    /// listed in name order.
    pub fn build(input: BalanceSheetInput<'_>, base_currency: &str) -> Self {
        let mut positions: BTreeMap<(String, String), BuyerPosition> = BTreeMap::new();

        for invoice in input.invoices {
            let currency = match invoice.currency_code() {
                "" => base_currency,
                code => code,
            };
            let position = positions
                .entry((invoice.buyer_name.clone(), currency.to_string()))
                .or_default();
            position.invoiced += &invoice.total_with_gst;
            position.latest_invoice = position.latest_invoice.max(Some(invoice.invoice_date));
        }

        let mut total_base_currency_deposits = BigDecimal::from(0);
        for deposit in input.buyer_transactions {
            let position = positions
                .entry((deposit.buyer_name.clone(), base_currency.to_string()))
                .or_default();
            position.deposited += &deposit.deposit_amount;
            position.latest_deposit = position.latest_deposit.max(deposit.transaction_date);
            total_base_currency_deposits += &deposit.deposit_amount;
        }

        let mut advances = Vec::new();
        let mut outstanding = Vec::new();
        let zero = BigDecimal::from(0);

        for ((name, currency), position) in positions {
            let balance = round_half_up(&(&position.invoiced - &position.deposited), 2);
            if balance > zero {
                outstanding.push(BalanceSheetLine {
                    name,
                    date: position.latest_invoice,
                    currency,
                    amount: balance,
                    source: LineSource::Buyer,
                });
            } else if balance < zero {
                advances.push(BalanceSheetLine {
                    name,
                    date: position.latest_invoice.or(position.latest_deposit),
                    currency,
                    amount: balance.abs(),
                    source: LineSource::Buyer,
                });
            }
        }

        for entry in input.other_transactions {
            let line = BalanceSheetLine {
                name: entry.other_type.clone(),
                date: Some(entry.other_date),
                currency: base_currency.to_string(),
                amount: entry.other_amount.abs(),
                source: LineSource::Other,
            };
            match entry.transaction_type {
                TransactionKind::Credit => advances.push(line),
                TransactionKind::Debit => outstanding.push(line),
            }
        }

        outstanding.extend(input.company_transactions.iter().map(|entry| BalanceSheetLine {
            name: entry.company_name.clone().unwrap_or_default(),
            date: entry.transaction_date,
            currency: base_currency.to_string(),
            amount: entry.amount.abs(),
            source: LineSource::Company,
        }));

        log::debug!(
            "Balance sheet: {} advance line(s), {} outstanding line(s)",
            advances.len(),
            outstanding.len()
        );

        Self {
            advances,
            outstanding,
            total_base_currency_deposits,
            base_currency: base_currency.to_string(),
            sections: CategorySections::build(
                input.other_transactions,
                input.salary_transactions,
            ),
        }
    }

    /// Total of one side, for lines in the given currency
    pub fn side_total(lines: &[BalanceSheetLine], currency: &str) -> BigDecimal {
        lines
            .iter()
            .filter(|line| line.currency == currency)
            .map(|line| &line.amount)
            .sum()
    }
}
