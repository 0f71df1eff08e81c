//! GST calculation examples

use invoice_ledger_core::{
    legal_amount_line, EngineConfig, GstCalculator, GstRate, InvoiceAmountRequest, TaxBreakdown,
};
use bigdecimal::BigDecimal;

fn print_breakdown(breakdown: &TaxBreakdown) {
    let show = |line: &Option<BigDecimal>| {
        line.as_ref()
            .map(|amount| format!("₹{}", amount))
            .unwrap_or_else(|| "-".to_string())
    };

    println!("  Regime:      {:?}", breakdown.regime);
    println!("  Base Amount: ₹{}", breakdown.base_amount);
    println!("  CGST:        {}", show(&breakdown.cgst));
    println!("  SGST:        {}", show(&breakdown.sgst));
    println!("  IGST:        {}", show(&breakdown.igst));
    println!("  Total GST:   ₹{}", breakdown.tax_total);
    println!("  Final Total: ₹{}", breakdown.total_with_gst);
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🧾 Invoice Ledger Core - GST Calculation Examples\n");

    let calculator = GstCalculator::default();

    // 1. Sale inside the home state
    println!("🏢 Intra-state Invoice (CGST + SGST):");
    let request = InvoiceAmountRequest::with_base_amount("10000", "India").state("Gujarat");
    print_breakdown(&calculator.calculate_request(&request));
    println!();

    // 2. Sale to another Indian state
    println!("🌍 Inter-state Invoice (IGST only):");
    let request = InvoiceAmountRequest::with_base_amount("10000", "India").state("Maharashtra");
    print_breakdown(&calculator.calculate_request(&request));
    println!();

    // 3. Export
    println!("🚢 Export Invoice (no GST):");
    let request = InvoiceAmountRequest::with_base_amount("10000", "USA");
    print_breakdown(&calculator.calculate_request(&request));
    println!();

    // 4. Hourly billing overrides the base amount
    println!("⏱️ Hourly Billing (40 hours @ ₹1250.75):");
    let request = InvoiceAmountRequest::with_hours("40", "1250.75", "India").state("Gujarat");
    let breakdown = calculator.calculate_request(&request);
    print_breakdown(&breakdown);
    println!("  In words:    {}", legal_amount_line("INR", &breakdown.total_with_gst)?);
    println!();

    // 5. Different home state and rate
    println!("⚙️ Custom Configuration (Karnataka, 12%):");
    let config = EngineConfig::from_json_str(r#"{ "home_state": "Karnataka", "gst_rate": "12" }"#)?;
    let calculator = GstCalculator::new(config)?;
    let request = InvoiceAmountRequest::with_base_amount("5000", "India").state("Karnataka");
    print_breakdown(&calculator.calculate_request(&request));
    println!();

    // 6. Validation examples
    println!("✅ GST Rate Validation:");

    let valid_rate = GstRate::intra_state(BigDecimal::from(18));
    match valid_rate.validate() {
        Ok(()) => println!("  ✓ Valid intra-state rate: CGST 9% + SGST 9% = 18%"),
        Err(e) => println!("  ❌ Invalid rate: {}", e),
    }

    let invalid_rate = GstRate {
        total_rate: BigDecimal::from(18),
        cgst_rate: BigDecimal::from(10),
        sgst_rate: BigDecimal::from(9),
        igst_rate: BigDecimal::from(0),
    };
    match invalid_rate.validate() {
        Ok(()) => println!("  ✓ Valid rate"),
        Err(e) => println!("  ❌ Invalid rate: {}", e),
    }

    println!("\n🎉 GST calculation examples completed successfully!");
    Ok(())
}
