//! Buyer statement, account summary and balance sheet example

use invoice_ledger_core::{
    legal_amount_line, BuyerTransaction, DateRange, Invoice, InvoiceDeposit, Ledger,
    MemoryStorage, WordsStyle,
};
use bigdecimal::BigDecimal;
use chrono::NaiveDate;

const BUYER_GST: &str = "24AAACA1234A1Z5";

fn date(y: i32, m: u32, d: u32) -> Result<NaiveDate, Box<dyn std::error::Error>> {
    NaiveDate::from_ymd_opt(y, m, d).ok_or_else(|| format!("invalid date {}-{}-{}", y, m, d).into())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🧾 Invoice Ledger Core - Buyer Statement Example\n");

    let storage = MemoryStorage::new();

    // 1. Record invoices in two series and deposits against them
    println!("💰 Recording invoices and deposits...");
    let invoices = [
        ("01-2024/2025", date(2024, 4, 3)?, 118000),
        ("02-2024/2025", date(2024, 5, 14)?, 59000),
        ("10-2024/2025", date(2024, 11, 2)?, 23600),
    ];
    for (number, on, total) in invoices {
        storage.add_invoice(
            Invoice::new(
                Some(number.to_string()),
                on,
                "Acme Traders".to_string(),
                BigDecimal::from(total),
            )
            .with_buyer_gst(BUYER_GST)
            .with_currency("INR"),
        )?;
        println!("  ✓ Invoice {} dated {} for ₹{}", number, on, total);
    }

    let deposits = [
        ("01-2024/2025", date(2024, 4, 20)?, 100000, Some("NEFT 88123")),
        ("01-2024/2025", date(2024, 5, 2)?, 18000, None),
        ("02-2024/2025", date(2024, 6, 1)?, 25000, Some("Cheque 004512")),
    ];
    for (number, on, amount, notice) in deposits {
        let mut deposit = InvoiceDeposit::new(number, on, BigDecimal::from(amount));
        if let Some(notice) = notice {
            deposit = deposit.with_notice(notice);
        }
        storage.add_deposit(deposit)?;
        storage.add_buyer_transaction(BuyerTransaction {
            buyer_name: "Acme Traders".to_string(),
            transaction_date: Some(on),
            deposit_amount: BigDecimal::from(amount),
        })?;
    }
    println!();

    let ledger = Ledger::new(storage);

    // 2. Statement of account
    println!("📒 Statement of Account:");
    let statement = ledger.statement_for_buyer(BUYER_GST, DateRange::all()).await?;
    println!(
        "  {:<12} {:<16} {:>12} {:>12} {:>12}",
        "Date", "Description", "Credit", "Debit", "Balance"
    );
    for row in &statement.rows {
        let show = |amount: &Option<BigDecimal>| {
            amount
                .as_ref()
                .map(|a| a.to_string())
                .unwrap_or_default()
        };
        println!(
            "  {:<12} {:<16} {:>12} {:>12} {:>12}",
            row.date.to_string(),
            row.description,
            show(&row.credit),
            show(&row.debit),
            row.display_balance()
        );
    }
    let [credit, debit, closing] = statement.totals_line();
    println!("  Total Balance: credit {}, debit {}, closing {}", credit, debit, closing);
    println!("  Direction: {:?}", statement.direction());
    println!(
        "  In words: {}",
        legal_amount_line(&statement.currency, &statement.display_closing_balance())?
    );
    println!();

    // 3. Per-invoice summary
    println!("📋 Account Summary:");
    let summary = ledger.account_summary(BUYER_GST).await?;
    for account in &summary.invoices {
        println!(
            "  {} invoiced ₹{} paid ₹{} remaining ₹{}",
            account.invoice_number,
            account.invoice_amount,
            account.deposit_total,
            account.remaining_balance
        );
    }
    println!(
        "  Remaining overall: ₹{} ({})",
        summary.total_remaining_balance,
        ledger.amount_in_words(&summary.total_remaining_balance, WordsStyle::Plain)?
    );
    println!();

    // 4. Balance sheet
    println!("⚖️ Balance Sheet:");
    let sheet = ledger.balance_sheet().await?;
    for line in &sheet.outstanding {
        println!("  Outstanding: {} {} {}", line.name, line.currency, line.amount);
    }
    for line in &sheet.advances {
        println!("  Advance:     {} {} {}", line.name, line.currency, line.amount);
    }
    for section in sheet.sections.custom_credit.iter().filter(|s| !s.is_empty()) {
        println!("  {}: {}", section.title, section.total);
    }
    println!();

    // 5. Next invoice number
    let next = ledger.next_invoice_number(date(2025, 1, 15)?).await?;
    println!("🔢 Next invoice number: {}", next);

    println!("\n🎉 Buyer statement example completed successfully!");
    Ok(())
}
