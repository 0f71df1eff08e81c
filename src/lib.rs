//! # Invoice Ledger Core
//!
//! Billing and receivables engine for a small Indian exporter: GST on
//! invoice amounts, per-buyer statements of account, a balance sheet of
//! outstanding and advance positions, and rupee amounts in words.
//!
//! ## Features
//!
//! - **GST calculations**: CGST/SGST inside the home state, IGST for the rest of
//!   the country, no tax on exports
//! - **Statements of account**: invoices grouped by series with running balances
//! - **Account summaries**: remaining balance of every invoice of a buyer
//! - **Balance sheet**: buyers split into outstanding and advance positions
//! - **Amount in words**: Indian lakh/crore grouping with paisa
//! - **Invoice numbering**: serials per April-March financial year
//! - **Source abstraction**: records fetched through the [`LedgerSource`] trait
//!
//! ## Quick Start
//!
//! ```rust
//! use invoice_ledger_core::{GstCalculator, InvoiceAmountRequest};
//! use bigdecimal::BigDecimal;
//!
//! let calculator = GstCalculator::default();
//! let request = InvoiceAmountRequest::with_base_amount("1000", "India").state("Gujarat");
//! let breakdown = calculator.calculate_request(&request);
//! assert_eq!(breakdown.total_with_gst, BigDecimal::from(1180));
//! ```

pub mod config;
pub mod invoice;
pub mod ledger;
pub mod tax;
pub mod traits;
pub mod types;
pub mod utils;
pub mod words;

// Re-export commonly used types
pub use config::EngineConfig;
pub use invoice::*;
pub use ledger::*;
pub use tax::gst::*;
pub use traits::*;
pub use types::*;
pub use utils::memory_storage::MemoryStorage;
pub use words::*;
