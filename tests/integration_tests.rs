//! Integration tests for invoice-ledger-core

use invoice_ledger_core::{
    amount_to_words, legal_amount_line, BalanceDirection, BuyerTransaction, CompanyTransaction,
    DateRange, EngineConfig, EngineError, GstCalculator, Invoice, InvoiceAmountRequest,
    InvoiceDeposit, Ledger, LedgerSource, MemoryStorage, OtherTransaction, SalaryTransaction,
    TaxRegime, TransactionKind, WordsStyle,
};
use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use std::str::FromStr;

const ACME_GST: &str = "24AAACA1234A1Z5";

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn dec(s: &str) -> BigDecimal {
    BigDecimal::from_str(s).unwrap()
}

fn acme_invoice(number: &str, on: NaiveDate, total: i64) -> Invoice {
    Invoice::new(
        Some(number.to_string()),
        on,
        "Acme Traders".to_string(),
        BigDecimal::from(total),
    )
    .with_buyer_gst(ACME_GST)
    .with_currency("INR")
}

fn seeded_storage() -> MemoryStorage {
    let storage = MemoryStorage::new();
    storage
        .add_invoice(acme_invoice("INV-01", date(2024, 4, 1), 1000))
        .unwrap();
    storage
        .add_invoice(acme_invoice("INV-02", date(2024, 4, 10), 2000))
        .unwrap();
    storage
        .add_deposit(InvoiceDeposit::new("INV-01", date(2024, 4, 5), BigDecimal::from(500)))
        .unwrap();
    storage
}

#[test]
fn test_gst_scenarios() {
    let calculator = GstCalculator::default();

    let gujarat = calculator
        .calculate_request(&InvoiceAmountRequest::with_base_amount("1000", "India").state("Gujarat"));
    assert_eq!(gujarat.regime, TaxRegime::IntraState);
    assert_eq!(gujarat.cgst, Some(BigDecimal::from(90)));
    assert_eq!(gujarat.sgst, Some(BigDecimal::from(90)));
    assert_eq!(gujarat.igst, None);
    assert_eq!(gujarat.total_with_gst, BigDecimal::from(1180));

    let maharashtra = calculator.calculate_request(
        &InvoiceAmountRequest::with_base_amount("1000", "India").state("Maharashtra"),
    );
    assert_eq!(maharashtra.regime, TaxRegime::InterState);
    assert_eq!(maharashtra.cgst, None);
    assert_eq!(maharashtra.igst, Some(BigDecimal::from(180)));
    assert_eq!(maharashtra.total_with_gst, BigDecimal::from(1180));

    let export = calculator.calculate_request(&InvoiceAmountRequest::with_base_amount("1000", "USA"));
    assert_eq!(export.regime, TaxRegime::Export);
    assert_eq!((export.cgst, export.sgst, export.igst), (None, None, None));
    assert_eq!(export.tax_total, BigDecimal::from(0));
    assert_eq!(export.total_with_gst, BigDecimal::from(1000));
}

#[test]
fn test_amount_in_words_scenario() {
    let words = amount_to_words(&dec("1234.50"), WordsStyle::Plain).unwrap();
    assert_eq!(words, "One Thousand Two Hundred Thirty Four and Fifty Paisa");

    let line = legal_amount_line("INR", &dec("1180")).unwrap();
    assert_eq!(line, "INR One Thousand One Hundred and Eighty Only");

    assert!(matches!(
        amount_to_words(&dec("-1"), WordsStyle::Plain),
        Err(EngineError::NegativeAmount(_))
    ));
}

#[tokio::test]
async fn test_statement_scenario() {
    let ledger = Ledger::new(seeded_storage());

    let statement = ledger
        .statement_for_buyer(ACME_GST, DateRange::all())
        .await
        .unwrap();

    let rows: Vec<(&str, Option<BigDecimal>, Option<BigDecimal>, BigDecimal)> = statement
        .rows
        .iter()
        .map(|row| {
            (
                row.description.as_str(),
                row.debit.clone(),
                row.credit.clone(),
                row.display_balance(),
            )
        })
        .collect();

    assert_eq!(
        rows,
        vec![
            ("INV-01", Some(BigDecimal::from(1000)), None, BigDecimal::from(1000)),
            ("Deposit", None, Some(BigDecimal::from(500)), BigDecimal::from(500)),
            ("INV-02", Some(BigDecimal::from(2000)), None, BigDecimal::from(2500)),
        ]
    );
    assert_eq!(statement.total_debit, BigDecimal::from(3000));
    assert_eq!(statement.total_credit, BigDecimal::from(500));
    assert_eq!(statement.closing_balance, BigDecimal::from(-2500));
    assert_eq!(statement.display_closing_balance(), BigDecimal::from(2500));
    assert_eq!(statement.direction(), BalanceDirection::Receivable);
    assert_eq!(
        statement.totals_line(),
        [
            "INR 500.00".to_string(),
            "INR 3000.00".to_string(),
            "INR 2500.00".to_string()
        ]
    );
}

#[tokio::test]
async fn test_statement_date_window() {
    let ledger = Ledger::new(seeded_storage());

    // Only the deposit falls in this window, which still pulls in INV-01
    let window = DateRange::new(Some(date(2024, 4, 3)), Some(date(2024, 4, 6))).unwrap();
    let statement = ledger.statement_for_buyer(ACME_GST, window).await.unwrap();

    let descriptions: Vec<&str> = statement
        .rows
        .iter()
        .map(|row| row.description.as_str())
        .collect();
    assert_eq!(descriptions, vec!["INV-01", "Deposit"]);
    assert_eq!(statement.closing_balance, BigDecimal::from(-500));

    let unknown = ledger
        .statement_for_buyer("27AAACZ9999Z1Z9", DateRange::all())
        .await
        .unwrap();
    assert!(unknown.is_empty());
    assert_eq!(unknown.closing_balance, BigDecimal::from(0));
}

#[tokio::test]
async fn test_account_summary_workflow() {
    let storage = seeded_storage();
    storage
        .add_deposit(
            InvoiceDeposit::new("INV-02", date(2024, 5, 2), BigDecimal::from(2000))
                .with_notice("NEFT 4411"),
        )
        .unwrap();

    let ledger = Ledger::new(storage);
    let summary = ledger.account_summary(ACME_GST).await.unwrap();

    assert_eq!(summary.buyer_name, "Acme Traders");
    assert_eq!(summary.total_invoice_amount, BigDecimal::from(3000));
    assert_eq!(summary.total_deposit_amount, BigDecimal::from(2500));
    assert_eq!(summary.total_remaining_balance, BigDecimal::from(500));

    let second = &summary.invoices[1];
    assert!(second.is_settled());
    assert_eq!(second.transactions[1].description, "NEFT 4411");

    let unpaid: Vec<&str> = summary
        .unpaid()
        .map(|account| account.invoice_number.as_str())
        .collect();
    assert_eq!(unpaid, vec!["INV-01"]);
}

#[tokio::test]
async fn test_balance_sheet_workflow() {
    let storage = seeded_storage();
    storage
        .add_buyer_transaction(BuyerTransaction {
            buyer_name: "Acme Traders".to_string(),
            transaction_date: Some(date(2024, 4, 5)),
            deposit_amount: BigDecimal::from(500),
        })
        .unwrap();
    storage
        .add_buyer_transaction(BuyerTransaction {
            buyer_name: "Umbrella Exports".to_string(),
            transaction_date: Some(date(2024, 6, 1)),
            deposit_amount: BigDecimal::from(750),
        })
        .unwrap();
    storage
        .add_other_transaction(OtherTransaction::new(
            TransactionKind::Credit,
            "Capital",
            date(2024, 4, 1),
            BigDecimal::from(10000),
        ))
        .unwrap();
    storage
        .add_other_transaction(
            OtherTransaction::new(
                TransactionKind::Credit,
                "partner",
                date(2024, 4, 2),
                BigDecimal::from(25000),
            )
            .with_notice("Ravi"),
        )
        .unwrap();
    storage
        .add_salary_transaction(SalaryTransaction {
            salary_name: "Asha".to_string(),
            salary_amount: BigDecimal::from(30000),
            salary_date: date(2024, 4, 30),
        })
        .unwrap();
    storage
        .add_company_transaction(CompanyTransaction {
            company_name: Some("Freight Co".to_string()),
            transaction_date: Some(date(2024, 4, 20)),
            amount: BigDecimal::from(300),
        })
        .unwrap();

    let ledger = Ledger::new(storage);
    let sheet = ledger.balance_sheet().await.unwrap();

    let outstanding: Vec<(&str, BigDecimal)> = sheet
        .outstanding
        .iter()
        .map(|line| (line.name.as_str(), line.amount.clone()))
        .collect();
    assert_eq!(
        outstanding,
        vec![
            ("Acme Traders", BigDecimal::from(2500)),
            ("Freight Co", BigDecimal::from(300)),
        ]
    );

    let advances: Vec<(&str, BigDecimal)> = sheet
        .advances
        .iter()
        .map(|line| (line.name.as_str(), line.amount.clone()))
        .collect();
    assert_eq!(
        advances,
        vec![
            ("Umbrella Exports", BigDecimal::from(750)),
            ("Capital", BigDecimal::from(10000)),
            ("partner", BigDecimal::from(25000)),
        ]
    );
    assert_eq!(sheet.total_base_currency_deposits, BigDecimal::from(1250));

    let sections = &sheet.sections;
    assert_eq!(sections.capital.amount_for("Ravi"), Some(&BigDecimal::from(25000)));
    assert_eq!(sections.salary.amount_for("Asha"), Some(&BigDecimal::from(30000)));
    assert_eq!(sections.custom_credit[0].title, "Capital (Credit)");
}

#[tokio::test]
async fn test_invoice_numbering_workflow() {
    let storage = MemoryStorage::new();
    for number in ["01-2024/2025", "09-2024/2025", "10-2024/2025", "03-2023/2024"] {
        storage
            .add_invoice(acme_invoice(number, date(2024, 6, 1), 100))
            .unwrap();
    }

    let ledger = Ledger::new(storage);
    let next = ledger.next_invoice_number(date(2024, 12, 1)).await.unwrap();
    assert_eq!(next.to_string(), "11-2024/2025");
    assert_eq!(ledger.source().list_invoices().await.unwrap().len(), 4);
}

#[tokio::test]
async fn test_custom_config() {
    let config = EngineConfig::from_json_str(
        r#"{ "home_state": "Maharashtra", "default_deposit_description": "Receipt" }"#,
    )
    .unwrap();
    let ledger = Ledger::with_config(seeded_storage(), config).unwrap();

    let breakdown = ledger
        .tax_breakdown(&InvoiceAmountRequest::with_base_amount("1000", "India").state("Maharashtra"));
    assert_eq!(breakdown.regime, TaxRegime::IntraState);

    let statement = ledger
        .statement_for_buyer(ACME_GST, DateRange::all())
        .await
        .unwrap();
    assert_eq!(statement.rows[1].description, "Receipt");

    let bad = EngineConfig {
        gst_rate: BigDecimal::from(150),
        ..EngineConfig::default()
    };
    assert!(Ledger::with_config(MemoryStorage::new(), bad).is_err());
}
